use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome of checking a set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Whether every question has a selection.
    pub all_answered: bool,
    /// Number of correctly answered questions.
    pub correct_count: usize,
    /// Number of questions.
    pub total: usize,
    /// Per-question marks, in question order.
    pub per_question: Vec<QuestionScore>,
}

/// Mark for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScore {
    /// Question identifier.
    pub question_id: String,
    /// The selected value, if any.
    pub chosen: Option<String>,
    /// Whether the selection matches the expected answer.
    pub is_correct: bool,
}

/// What to tell the learner after checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Verdict {
    /// At least one question has no selection.
    #[display("Please answer all questions.")]
    Incomplete,
    /// Every question was answered.
    #[display("You got {correct} out of {total} correct.")]
    Scored { correct: usize, total: usize },
}

impl ScoreResult {
    /// Returns the learner-facing verdict.
    ///
    /// A numeric score is only reported when every question is answered.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.all_answered {
            Verdict::Scored {
                correct: self.correct_count,
                total: self.total,
            }
        } else {
            Verdict::Incomplete
        }
    }

    /// Returns whether every question was answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.all_answered && self.correct_count == self.total
    }

    /// Returns the mark for `question_id`.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&QuestionScore> {
        self.per_question
            .iter()
            .find(|mark| mark.question_id == question_id)
    }
}

/// Scores selections against the expected answers.
///
/// `correct_answers[i]` is the expected value for `question_ids[i]`.
///
/// Every question is evaluated, including those after an unanswered one, so
/// `per_question` always has one entry per id. Unanswered questions count as
/// incorrect and clear `all_answered`. A question without an expected answer
/// is never correct.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use statlab_quiz::scoring::score;
///
/// let ids = ["q1".to_owned(), "q2".to_owned()];
/// let answers = ["b".to_owned(), "c".to_owned()];
/// let selections = BTreeMap::from([
///     ("q1".to_owned(), "b".to_owned()),
///     ("q2".to_owned(), "a".to_owned()),
/// ]);
///
/// let result = score(&selections, &answers, &ids);
/// assert!(result.all_answered);
/// assert_eq!(result.correct_count, 1);
/// assert_eq!(result.verdict().to_string(), "You got 1 out of 2 correct.");
/// ```
#[must_use]
pub fn score(
    selections: &BTreeMap<String, String>,
    correct_answers: &[String],
    question_ids: &[String],
) -> ScoreResult {
    let per_question = question_ids
        .iter()
        .enumerate()
        .map(|(i, question_id)| {
            let chosen = selections.get(question_id).cloned();
            let is_correct = chosen
                .as_ref()
                .zip(correct_answers.get(i))
                .is_some_and(|(chosen, expected)| chosen == expected);
            QuestionScore {
                question_id: question_id.clone(),
                chosen,
                is_correct,
            }
        })
        .collect::<Vec<_>>();

    ScoreResult {
        all_answered: per_question.iter().all(|mark| mark.chosen.is_some()),
        correct_count: per_question.iter().filter(|mark| mark.is_correct).count(),
        total: question_ids.len(),
        per_question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&s| s.to_owned()).collect()
    }

    fn selections(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|&(id, value)| (id.to_owned(), value.to_owned()))
            .collect()
    }

    #[test]
    fn test_all_correct() {
        let ids = strings(&["q1", "q2"]);
        let answers = strings(&["b", "c"]);
        let result = score(&selections(&[("q1", "b"), ("q2", "c")]), &answers, &ids);

        assert!(result.all_answered);
        assert_eq!(result.correct_count, result.total);
        assert!(result.is_perfect());
        assert_eq!(
            result.verdict(),
            Verdict::Scored {
                correct: 2,
                total: 2
            }
        );
    }

    #[test]
    fn test_incorrect_answers_are_marked() {
        let ids = strings(&["q3", "q4"]);
        let answers = strings(&["b", "a"]);
        let result = score(&selections(&[("q3", "a"), ("q4", "a")]), &answers, &ids);

        assert_eq!(result.correct_count, 1);
        assert!(!result.get("q3").unwrap().is_correct);
        assert!(result.get("q4").unwrap().is_correct);
        assert_eq!(result.verdict().to_string(), "You got 1 out of 2 correct.");
    }

    #[test]
    fn test_gap_does_not_stop_scoring() {
        let ids = strings(&["q1", "q2", "q3"]);
        let answers = strings(&["a", "b", "c"]);
        let result = score(&selections(&[("q1", "a"), ("q3", "c")]), &answers, &ids);

        assert!(!result.all_answered);
        assert_eq!(result.per_question.len(), 3);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.get("q2").unwrap().chosen, None);
        assert!(result.get("q3").unwrap().is_correct);
        assert_eq!(result.verdict(), Verdict::Incomplete);
        assert_eq!(result.verdict().to_string(), "Please answer all questions.");
    }

    #[test]
    fn test_nothing_answered() {
        let ids = strings(&["q1", "q2"]);
        let answers = strings(&["a", "b"]);
        let result = score(&BTreeMap::new(), &answers, &ids);

        assert!(!result.all_answered);
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total, 2);
        assert!(!result.is_perfect());
    }

    #[test]
    fn test_missing_expected_answer_is_incorrect() {
        let ids = strings(&["q1", "q2"]);
        let answers = strings(&["a"]);
        let result = score(&selections(&[("q1", "a"), ("q2", "a")]), &answers, &ids);

        assert_eq!(result.total, 2);
        assert_eq!(result.correct_count, 1);
        assert!(!result.get("q2").unwrap().is_correct);
    }

    #[test]
    fn test_selections_for_unknown_questions_are_ignored() {
        let ids = strings(&["q1"]);
        let answers = strings(&["a"]);
        let result = score(&selections(&[("q1", "a"), ("q9", "a")]), &answers, &ids);

        assert_eq!(result.per_question.len(), 1);
        assert!(result.is_perfect());
    }
}
