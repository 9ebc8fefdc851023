//! View-model of the interactive lesson.
//!
//! All state lives in [`LessonState`] and changes only through
//! [`LessonState::dispatch`], so every user action can be exercised without a
//! terminal.

use statlab_quiz::quiz::Quiz;

use crate::sample::{self, SampleGenerator};

pub use self::{
    form::{Form, TextField},
    keymap::command_for_key,
    quiz_panel::QuizPanel,
    report::{LessonError, Report},
};

mod form;
mod keymap;
mod quiz_panel;
pub mod report;

/// Size of the generated example datasets.
const EXAMPLE_SIZE: usize = 20;
const EXAMPLE_MEAN: f64 = 50.0;
const EXAMPLE_STD_DEV: f64 = 10.0;

/// A lesson section. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Section {
    Histogram,
    Center,
    Spread,
    ZScore,
    /// The quiz at the given index.
    Quiz(usize),
}

impl Section {
    const STATS: [Self; 4] = [Self::Histogram, Self::Center, Self::Spread, Self::ZScore];

    /// Short explanation shown above the section's form.
    pub fn intro(self) -> &'static str {
        match self {
            Self::Histogram => {
                "A histogram groups data into equal-width bins and shows how many values fall in \
                 each. Bins include their lower bound; the last bin also includes the maximum."
            }
            Self::Center => {
                "The mean is the sum divided by the count. The median is the middle value of the \
                 sorted data (the average of the two middle values for an even count)."
            }
            Self::Spread => {
                "The sample variance s² averages squared deviations from the mean, dividing by \
                 n − 1. The sample standard deviation s is its square root."
            }
            Self::ZScore => {
                "A z-score z = (x − μ) / σ counts how many standard deviations a value lies \
                 from the mean."
            }
            Self::Quiz(_) => "Pick one answer per question, then press Enter to check.",
        }
    }
}

/// A user-triggerable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowSection(Section),
    NextSection,
    PrevSection,
    NextField,
    PrevField,
    Insert(char),
    Backspace,
    ClearField,
    Submit,
    FillExample,
    Choose(usize),
    Quit,
}

/// Form and last outcome of a statistics section.
#[derive(Debug, Clone)]
pub struct StatsPanel {
    pub form: Form,
    pub outcome: Option<Result<Report, LessonError>>,
}

impl StatsPanel {
    fn new(fields: Vec<TextField>) -> Self {
        Self {
            form: Form::new(fields),
            outcome: None,
        }
    }
}

#[derive(Debug)]
pub struct LessonState {
    active: Section,
    histogram: StatsPanel,
    center: StatsPanel,
    spread: StatsPanel,
    z_score: StatsPanel,
    quizzes: Vec<QuizPanel>,
    generator: SampleGenerator,
    should_exit: bool,
}

impl LessonState {
    pub fn new(quizzes: Vec<Quiz>, generator: SampleGenerator) -> Self {
        Self {
            active: Section::Histogram,
            histogram: StatsPanel::new(vec![
                TextField::new("Data", "12, 15, 18, 20, 22, 22, 25, 28, 30, 35"),
                TextField::new("Number of bins", "5"),
            ]),
            center: StatsPanel::new(vec![TextField::new("Data", "5, 1, 3, 8, 100")]),
            spread: StatsPanel::new(vec![TextField::new("Data", "2, 4, 4, 4, 5, 5, 7, 9")]),
            z_score: StatsPanel::new(vec![
                TextField::new("Value (x)", "15"),
                TextField::new("Mean (μ)", "10"),
                TextField::new("Standard deviation (σ)", "5"),
            ]),
            quizzes: quizzes.into_iter().map(QuizPanel::new).collect(),
            generator,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    /// All sections in navigation order.
    pub fn sections(&self) -> Vec<Section> {
        Section::STATS
            .into_iter()
            .chain((0..self.quizzes.len()).map(Section::Quiz))
            .collect()
    }

    pub fn section_title(&self, section: Section) -> &str {
        match section {
            Section::Histogram => "Histogram",
            Section::Center => "Center",
            Section::Spread => "Spread",
            Section::ZScore => "Z-Score",
            Section::Quiz(index) => self
                .quizzes
                .get(index)
                .map_or("Quiz", |panel| panel.quiz().title.as_str()),
        }
    }

    /// Makes `section` the visible section.
    ///
    /// Unknown quiz sections are ignored.
    pub fn set_active_section(&mut self, section: Section) {
        if let Section::Quiz(index) = section
            && index >= self.quizzes.len()
        {
            log::debug!("ignoring unknown quiz section {index}");
            return;
        }
        self.active = section;
    }

    pub fn stats_panel(&self, section: Section) -> Option<&StatsPanel> {
        match section {
            Section::Histogram => Some(&self.histogram),
            Section::Center => Some(&self.center),
            Section::Spread => Some(&self.spread),
            Section::ZScore => Some(&self.z_score),
            Section::Quiz(_) => None,
        }
    }

    fn stats_panel_mut(&mut self, section: Section) -> Option<&mut StatsPanel> {
        match section {
            Section::Histogram => Some(&mut self.histogram),
            Section::Center => Some(&mut self.center),
            Section::Spread => Some(&mut self.spread),
            Section::ZScore => Some(&mut self.z_score),
            Section::Quiz(_) => None,
        }
    }

    pub fn quiz_panel(&self, index: usize) -> Option<&QuizPanel> {
        self.quizzes.get(index)
    }

    fn active_quiz_mut(&mut self) -> Option<&mut QuizPanel> {
        match self.active {
            Section::Quiz(index) => self.quizzes.get_mut(index),
            _ => None,
        }
    }

    fn step_section(&mut self, forward: bool) {
        let sections = self.sections();
        let current = sections
            .iter()
            .position(|&section| section == self.active)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % sections.len()
        } else {
            current.checked_sub(1).unwrap_or(sections.len() - 1)
        };
        self.set_active_section(sections[next]);
    }

    /// Applies a user action.
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("dispatch {command:?} in {:?}", self.active);
        match command {
            Command::ShowSection(section) => self.set_active_section(section),
            Command::NextSection => self.step_section(true),
            Command::PrevSection => self.step_section(false),
            Command::Quit => self.should_exit = true,
            Command::Submit => self.submit(),
            Command::FillExample => self.fill_example(),
            Command::NextField => self.edit_form(Form::focus_next, QuizPanel::focus_next),
            Command::PrevField => self.edit_form(Form::focus_prev, QuizPanel::focus_prev),
            Command::Backspace => self.edit_form(Form::backspace, |_| {}),
            Command::ClearField => self.edit_form(Form::clear_focused, |_| {}),
            Command::Insert(ch) => {
                if let Some(panel) = self.active_quiz_mut() {
                    panel.choose_by_key(ch);
                } else if let Some(panel) = self.stats_panel_mut(self.active) {
                    panel.form.insert(ch);
                }
            }
            Command::Choose(index) => {
                if let Some(panel) = self.active_quiz_mut() {
                    panel.choose(index);
                }
            }
        }
    }

    fn edit_form(&mut self, on_form: impl FnOnce(&mut Form), on_quiz: impl FnOnce(&mut QuizPanel)) {
        if let Some(panel) = self.active_quiz_mut() {
            on_quiz(panel);
        } else if let Some(panel) = self.stats_panel_mut(self.active) {
            on_form(&mut panel.form);
        }
    }

    fn submit(&mut self) {
        let section = self.active;
        if let Some(panel) = self.active_quiz_mut() {
            let result = panel.check();
            log::debug!("quiz checked: {}", result.verdict());
            return;
        }
        let Some(panel) = self.stats_panel_mut(section) else {
            return;
        };
        let form = &panel.form;
        let outcome = match section {
            Section::Histogram => report::histogram(form.value(0), form.value(1)),
            Section::Center => report::center(form.value(0)),
            Section::Spread => report::spread(form.value(0)),
            Section::ZScore => report::z_score(form.value(0), form.value(1), form.value(2)),
            Section::Quiz(_) => return,
        };
        if let Err(err) = &outcome {
            log::debug!("{section:?} rejected input: {err}");
        }
        panel.outcome = Some(outcome);
    }

    /// Replaces the data field of the active section with a random sample
    /// and recomputes.
    fn fill_example(&mut self) {
        if !matches!(
            self.active,
            Section::Histogram | Section::Center | Section::Spread
        ) {
            return;
        }
        let values = match self
            .generator
            .normal(EXAMPLE_SIZE, EXAMPLE_MEAN, EXAMPLE_STD_DEV)
        {
            Ok(values) => values,
            Err(err) => {
                log::warn!("failed to generate example data: {err}");
                return;
            }
        };
        if let Some(panel) = self.stats_panel_mut(self.active) {
            panel
                .form
                .field_mut(0)
                .set_value(sample::to_input_text(&values));
        }
        self.submit();
    }
}
