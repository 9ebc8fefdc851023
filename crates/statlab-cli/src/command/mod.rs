use clap::{Parser, Subcommand};

use self::{
    compute::{HistogramArg, SampleArg, ZScoreArg},
    generate::GenerateArg,
    lesson::LessonArg,
    quiz::QuizArg,
};

mod compute;
mod generate;
mod lesson;
mod quiz;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run; the interactive lesson by default
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Interactive lesson in the terminal
    Lesson(#[clap(flatten)] LessonArg),
    /// Print the frequency table of a sample
    Histogram(#[clap(flatten)] HistogramArg),
    /// Print the mean and median of a sample
    Center(#[clap(flatten)] SampleArg),
    /// Print the sample variance and standard deviation of a sample
    Spread(#[clap(flatten)] SampleArg),
    /// Print the z-score of a value
    ZScore(#[clap(flatten)] ZScoreArg),
    /// Print a normally distributed random sample
    Generate(#[clap(flatten)] GenerateArg),
    /// Score answers to a quiz
    Quiz(#[clap(flatten)] QuizArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Lesson(LessonArg::default())) {
        Mode::Lesson(arg) => lesson::run(&arg)?,
        Mode::Histogram(arg) => compute::run_histogram(&arg)?,
        Mode::Center(arg) => compute::run_center(&arg)?,
        Mode::Spread(arg) => compute::run_spread(&arg)?,
        Mode::ZScore(arg) => compute::run_z_score(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Quiz(arg) => quiz::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_default_is_lesson() {
        let args = CommandArgs::try_parse_from(["statlab"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_histogram() {
        let args =
            CommandArgs::try_parse_from(["statlab", "histogram", "1,2,3", "--bins", "2", "--json"])
                .unwrap();
        let Some(Mode::Histogram(arg)) = args.mode else {
            panic!("expected histogram mode");
        };
        assert_eq!(arg.data, "1,2,3");
        assert_eq!(arg.bins, "2");
        assert!(arg.json);
    }

    #[test]
    fn test_parse_z_score() {
        let args = CommandArgs::try_parse_from([
            "statlab", "z-score", "--x", "15", "--mean", "10", "--std-dev", "5",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::ZScore(_))));
    }

    #[test]
    fn test_parse_quiz_answers() {
        let args = CommandArgs::try_parse_from([
            "statlab", "quiz", "quiz1", "--answer", "q1=b", "--answer", "q2=c",
        ])
        .unwrap();
        let Some(Mode::Quiz(arg)) = args.mode else {
            panic!("expected quiz mode");
        };
        assert_eq!(arg.answers.len(), 2);
        assert_eq!(arg.answers[1], ("q2".to_owned(), "c".to_owned()));
    }
}
