use std::path::PathBuf;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    lesson::{self, LessonState},
    sample::SampleGenerator,
    tui::{App, Tui},
    util, view,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct LessonArg {
    /// JSON file with the quizzes to use instead of the built-in ones
    #[arg(long)]
    quiz_file: Option<PathBuf>,
    /// Seed for the random example data
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(arg: &LessonArg) -> anyhow::Result<()> {
    let LessonArg { quiz_file, seed } = arg;

    let quizzes = util::load_quizzes(quiz_file.as_deref())?;
    let mut app = LessonApp {
        state: LessonState::new(quizzes, SampleGenerator::new(*seed)),
    };
    Tui::new().run(&mut app)?;
    Ok(())
}

#[derive(Debug)]
struct LessonApp {
    state: LessonState,
}

impl App for LessonApp {
    fn should_exit(&self) -> bool {
        self.state.should_exit()
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        let sections = self.state.sections();
        let active = self.state.active_section();
        if let Some(command) = lesson::command_for_key(&key, &sections, active) {
            self.state.dispatch(command);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        view::draw(frame, &self.state);
    }
}
