use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph, Tabs, Wrap},
};

use crate::{
    lesson::{LessonState, Report, Section, StatsPanel},
    view::widgets::{
        FormDisplay, HelpLine, HistogramChart, KeyBinding, QuizDisplay, ReportDisplay, style,
    },
};

mod widgets;

const FORM_BINDINGS: &[KeyBinding<'static>] = &[
    (&["Tab", "↓"], "Next field"),
    (&["Enter"], "Compute"),
    (&["Ctrl-U"], "Clear"),
    (&["PgUp", "PgDn"], "Section"),
    (&["Esc"], "Quit"),
];
const EXAMPLE_BINDING: KeyBinding<'static> = (&["Ctrl-R"], "Random data");
const QUIZ_BINDINGS: &[KeyBinding<'static>] = &[
    (&["Tab", "↓"], "Next question"),
    (&["1-9", "a-z"], "Choose"),
    (&["Enter"], "Check"),
    (&["PgUp", "PgDn"], "Section"),
    (&["Esc"], "Quit"),
];

/// Width of the value table next to a histogram chart.
const HISTOGRAM_VALUES_WIDTH: u16 = 32;

/// Draws the whole lesson screen.
pub fn draw(frame: &mut Frame, state: &LessonState) {
    let [tabs_area, intro_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let sections = state.sections();
    let active = state.active_section();
    let titles = sections
        .iter()
        .enumerate()
        .map(|(i, &section)| format!("F{} {}", i + 1, state.section_title(section)));
    let tabs = Tabs::new(titles)
        .block(Block::bordered().title(" statlab "))
        .style(style::LABEL)
        .highlight_style(style::FOCUSED.add_modifier(Modifier::REVERSED))
        .select(sections.iter().position(|&section| section == active));
    frame.render_widget(tabs, tabs_area);

    let intro = Paragraph::new(active.intro())
        .style(style::DEFAULT)
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, intro_area.inner(Margin::new(1, 0)));

    let bindings = match active {
        Section::Quiz(index) => {
            if let Some(panel) = state.quiz_panel(index) {
                let title = format!(" {} ", panel.quiz().title);
                frame.render_widget(
                    QuizDisplay::new(panel).block(Block::bordered().title(title)),
                    body_area,
                );
            }
            QUIZ_BINDINGS.to_vec()
        }
        section => {
            if let Some(panel) = state.stats_panel(section) {
                draw_stats_panel(frame, body_area, panel);
            }
            let mut bindings = FORM_BINDINGS.to_vec();
            if matches!(
                section,
                Section::Histogram | Section::Center | Section::Spread
            ) {
                bindings.insert(3, EXAMPLE_BINDING);
            }
            bindings
        }
    };
    frame.render_widget(HelpLine::new(bindings), help_area);
}

fn draw_stats_panel(frame: &mut Frame, area: Rect, panel: &StatsPanel) {
    let form = FormDisplay::new(&panel.form).block(Block::bordered().title(" Input "));
    let [form_area, output_area] =
        Layout::vertical([Constraint::Length(form.height()), Constraint::Fill(1)]).areas(area);
    frame.render_widget(form, form_area);

    match &panel.outcome {
        None => {
            let hint = Line::styled("Press Enter to compute.", style::HINT).centered();
            frame.render_widget(hint, output_area);
        }
        Some(Err(err)) => {
            let error = Paragraph::new(format!("Error: {err}"))
                .style(style::ERROR)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(" Error ").border_style(style::ERROR));
            frame.render_widget(error, output_area);
        }
        Some(Ok(report @ Report::Histogram(histogram))) => {
            let [values_area, chart_area] = Layout::horizontal([
                Constraint::Length(HISTOGRAM_VALUES_WIDTH),
                Constraint::Fill(1),
            ])
            .areas(output_area);
            frame.render_widget(
                ReportDisplay::new(report).block(Block::bordered().title(" Result ")),
                values_area,
            );
            frame.render_widget(
                HistogramChart::new(histogram).block(Block::bordered().title(" Frequency ")),
                chart_area,
            );
        }
        Some(Ok(report)) => {
            frame.render_widget(
                ReportDisplay::new(report).block(Block::bordered().title(" Result ")),
                output_area,
            );
        }
    }
}
