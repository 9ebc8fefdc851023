use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::scoring::{self, ScoreResult};

/// A short multiple-choice quiz.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<Choice>,
    /// Value of the correct choice.
    pub answer: String,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum QuizError {
    #[display("quiz '{quiz_id}' has no questions")]
    NoQuestions { quiz_id: String },
    #[display("quiz '{quiz_id}' has more than one question with id '{question_id}'")]
    DuplicateQuestion {
        quiz_id: String,
        question_id: String,
    },
    #[display("question '{question_id}' has no choices")]
    NoChoices { question_id: String },
    #[display("question '{question_id}' has more than one choice with value '{value}'")]
    DuplicateChoice {
        question_id: String,
        value: String,
    },
    #[display("answer '{answer}' of question '{question_id}' is not one of its choices")]
    UnknownAnswer {
        question_id: String,
        answer: String,
    },
}

impl Question {
    /// Returns the choice whose value is the expected answer.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.value == self.answer)
    }
}

impl Quiz {
    /// Checks that the quiz can be presented and scored.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions {
                quiz_id: self.id.clone(),
            });
        }

        let mut seen = BTreeSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion {
                    quiz_id: self.id.clone(),
                    question_id: question.id.clone(),
                });
            }
            if question.choices.is_empty() {
                return Err(QuizError::NoChoices {
                    question_id: question.id.clone(),
                });
            }
            let mut values = BTreeSet::new();
            for choice in &question.choices {
                if !values.insert(choice.value.as_str()) {
                    return Err(QuizError::DuplicateChoice {
                        question_id: question.id.clone(),
                        value: choice.value.clone(),
                    });
                }
            }
            if question.correct_choice().is_none() {
                return Err(QuizError::UnknownAnswer {
                    question_id: question.id.clone(),
                    answer: question.answer.clone(),
                });
            }
        }
        Ok(())
    }

    /// Question ids in presentation order.
    #[must_use]
    pub fn question_ids(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.id.clone()).collect()
    }

    /// Expected answers in presentation order.
    #[must_use]
    pub fn correct_answers(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.answer.clone()).collect()
    }

    /// Scores `selections` (question id to chosen value) against this quiz.
    #[must_use]
    pub fn score(&self, selections: &BTreeMap<String, String>) -> ScoreResult {
        scoring::score(selections, &self.correct_answers(), &self.question_ids())
    }
}

fn question(id: &str, prompt: &str, choices: &[(&str, &str)], answer: &str) -> Question {
    Question {
        id: id.to_owned(),
        prompt: prompt.to_owned(),
        choices: choices
            .iter()
            .map(|&(value, label)| Choice {
                value: value.to_owned(),
                label: label.to_owned(),
            })
            .collect(),
        answer: answer.to_owned(),
    }
}

/// The quizzes that accompany the lessons.
///
/// `quiz1` covers histograms and measures of center (`q1`, `q2`),
/// `quiz2` covers standard deviation and z-scores (`q3`, `q4`).
#[must_use]
pub fn builtin_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "quiz1".to_owned(),
            title: "Histograms & Center".to_owned(),
            questions: vec![
                question(
                    "q1",
                    "Which measure of center is least affected by an extreme outlier?",
                    &[("a", "Mean"), ("b", "Median"), ("c", "Both equally")],
                    "b",
                ),
                question(
                    "q2",
                    "In a histogram, what does the height of a bar show?",
                    &[
                        ("a", "The width of the bin"),
                        ("b", "The largest value in the bin"),
                        ("c", "How many data points fall in the bin"),
                    ],
                    "c",
                ),
            ],
        },
        Quiz {
            id: "quiz2".to_owned(),
            title: "Spread & Z-Scores".to_owned(),
            questions: vec![
                question(
                    "q3",
                    "Why does the sample variance divide by n - 1 instead of n?",
                    &[
                        ("a", "To ignore the largest value"),
                        ("b", "To correct the bias when estimating the population variance"),
                        ("c", "Because the mean is always zero"),
                    ],
                    "b",
                ),
                question(
                    "q4",
                    "A value has a z-score of -2. Where does it lie?",
                    &[
                        ("a", "2 standard deviations below the mean"),
                        ("b", "2 standard deviations above the mean"),
                        ("c", "Exactly at the mean"),
                    ],
                    "a",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_quizzes_are_valid() {
        let quizzes = builtin_quizzes();
        assert_eq!(quizzes.len(), 2);
        for quiz in &quizzes {
            quiz.validate().unwrap();
        }
        assert_eq!(quizzes[0].question_ids(), vec!["q1", "q2"]);
        assert_eq!(quizzes[1].question_ids(), vec!["q3", "q4"]);
    }

    #[test]
    fn test_score_all_correct() {
        let quiz = &builtin_quizzes()[0];
        let selections = quiz
            .questions
            .iter()
            .map(|q| (q.id.clone(), q.answer.clone()))
            .collect();
        let result = quiz.score(&selections);
        assert!(result.all_answered);
        assert_eq!(result.correct_count, result.total);
    }

    #[test]
    fn test_validate_rejects_empty_quiz() {
        let quiz = Quiz {
            id: "empty".to_owned(),
            title: "Empty".to_owned(),
            questions: vec![],
        };
        assert_eq!(
            quiz.validate(),
            Err(QuizError::NoQuestions {
                quiz_id: "empty".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut quiz = builtin_quizzes().remove(0);
        quiz.questions[1].id = "q1".to_owned();
        assert!(matches!(
            quiz.validate(),
            Err(QuizError::DuplicateQuestion { question_id, .. }) if question_id == "q1"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_choice_values() {
        let mut quiz = builtin_quizzes().remove(0);
        quiz.questions[1].choices[2].value = "a".to_owned();
        assert_eq!(
            quiz.validate(),
            Err(QuizError::DuplicateChoice {
                question_id: "q2".to_owned(),
                value: "a".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_rejects_unknown_answer() {
        let mut quiz = builtin_quizzes().remove(1);
        quiz.questions[0].answer = "z".to_owned();
        assert_eq!(
            quiz.validate(),
            Err(QuizError::UnknownAnswer {
                question_id: "q3".to_owned(),
                answer: "z".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_rejects_question_without_choices() {
        let mut quiz = builtin_quizzes().remove(1);
        quiz.questions[1].choices.clear();
        assert_eq!(
            quiz.validate(),
            Err(QuizError::NoChoices {
                question_id: "q4".to_owned()
            })
        );
    }

    #[test]
    fn test_deserialize_quiz_file() {
        let json = r#"[{
            "id": "extra",
            "title": "Extra practice",
            "questions": [{
                "id": "x1",
                "prompt": "Median of 1, 2, 3?",
                "choices": [{"value": "a", "label": "2"}, {"value": "b", "label": "3"}],
                "answer": "a"
            }]
        }]"#;
        let quizzes: Vec<Quiz> = serde_json::from_str(json).unwrap();
        assert_eq!(quizzes.len(), 1);
        quizzes[0].validate().unwrap();
        assert_eq!(quizzes[0].questions[0].correct_choice().unwrap().label, "2");
    }
}
