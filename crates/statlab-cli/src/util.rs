use std::{
    fs::File,
    io::{self, BufReader, Write as _},
    path::Path,
};

use anyhow::Context as _;
use statlab_quiz::quiz::{self, Quiz};

/// Writes `value` to stdout as pretty JSON followed by a newline.
pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to write JSON to stdout")?;
    writeln!(stdout).context("Failed to write newline after JSON to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Writes `(label, value)` lines to stdout with the values aligned.
pub fn print_key_values<L>(rows: &[(L, String)]) -> anyhow::Result<()>
where
    L: AsRef<str>,
{
    let width = rows
        .iter()
        .map(|(label, _)| label.as_ref().chars().count() + 1)
        .max()
        .unwrap_or(0);
    let mut stdout = io::stdout().lock();
    for (label, value) in rows {
        writeln!(stdout, "{:<width$} {value}", format!("{}:", label.as_ref()))
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads the quiz bank.
///
/// Without a path the built-in quizzes are returned. A quiz file holds a JSON
/// array of quizzes; every quiz is validated before use.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, is empty, or holds
/// an invalid quiz.
pub fn load_quizzes(path: Option<&Path>) -> anyhow::Result<Vec<Quiz>> {
    let Some(path) = path else {
        return Ok(quiz::builtin_quizzes());
    };
    let quizzes: Vec<Quiz> = read_json_file("quiz", path)?;
    anyhow::ensure!(
        !quizzes.is_empty(),
        "Quiz file contains no quizzes: {}",
        path.display()
    );
    for quiz in &quizzes {
        quiz.validate()
            .with_context(|| format!("Invalid quiz in {}", path.display()))?;
    }
    log::info!("loaded {} quizzes from {}", quizzes.len(), path.display());
    Ok(quizzes)
}
