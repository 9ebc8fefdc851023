use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context as _;
use statlab_quiz::{quiz::Quiz, scoring::ScoreResult};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct QuizArg {
    /// Id of the quiz to score, e.g. "quiz1"
    pub(crate) quiz_id: String,
    /// An answer as QUESTION=CHOICE, e.g. "q1=b"; may be repeated
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// JSON file with the quizzes to use instead of the built-in ones
    #[arg(long)]
    pub(crate) quiz_file: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, choice) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=CHOICE, got '{raw}'"))?;
    let (question, choice) = (question.trim(), choice.trim());
    if question.is_empty() || choice.is_empty() {
        return Err(format!("expected QUESTION=CHOICE, got '{raw}'"));
    }
    Ok((question.to_owned(), choice.to_owned()))
}

pub fn run(arg: &QuizArg) -> anyhow::Result<()> {
    let quizzes = util::load_quizzes(arg.quiz_file.as_deref())?;
    let quiz = find_quiz(&quizzes, &arg.quiz_id)?;
    let selections = arg.answers.iter().cloned().collect::<BTreeMap<_, _>>();
    for question_id in selections.keys() {
        if !quiz.questions.iter().any(|question| &question.id == question_id) {
            log::warn!("quiz '{}' has no question '{question_id}'", quiz.id);
        }
    }

    let result = quiz.score(&selections);
    if arg.json {
        util::print_json(&result)?;
    } else {
        print_result(quiz, &result);
    }
    Ok(())
}

fn find_quiz<'a>(quizzes: &'a [Quiz], id: &str) -> anyhow::Result<&'a Quiz> {
    quizzes
        .iter()
        .find(|quiz| quiz.id == id)
        .with_context(|| {
            let known = quizzes
                .iter()
                .map(|quiz| quiz.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Unknown quiz '{id}' (available: {known})")
        })
}

fn print_result(quiz: &Quiz, result: &ScoreResult) {
    println!("{}", quiz.title);
    for (question, mark) in quiz.questions.iter().zip(&result.per_question) {
        let status = match (&mark.chosen, mark.is_correct) {
            (None, _) => "unanswered",
            (Some(_), true) => "correct",
            (Some(_), false) => "incorrect",
        };
        println!("  {}: {status}", question.id);
        if mark.chosen.is_some()
            && !mark.is_correct
            && let Some(choice) = question.correct_choice()
        {
            println!("    correct answer: {}) {}", choice.value, choice.label);
        }
    }
    println!("{}", result.verdict());
}
