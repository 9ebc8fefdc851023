use std::collections::BTreeMap;

use statlab_quiz::{quiz::Quiz, scoring::ScoreResult};

/// Selections and feedback for one quiz.
#[derive(Debug, Clone)]
pub struct QuizPanel {
    quiz: Quiz,
    focused: usize,
    selections: BTreeMap<String, String>,
    result: Option<ScoreResult>,
}

impl QuizPanel {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            focused: 0,
            selections: BTreeMap::new(),
            result: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    /// Returns the selected value for `question_id`.
    pub fn selection(&self, question_id: &str) -> Option<&str> {
        self.selections.get(question_id).map(String::as_str)
    }

    pub fn focus_next(&mut self) {
        if !self.quiz.questions.is_empty() {
            self.focused = (self.focused + 1) % self.quiz.questions.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.quiz.questions.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.quiz.questions.len() - 1);
        }
    }

    /// Selects the `index`-th choice of the focused question.
    ///
    /// Returns `false` if there is no such choice.
    pub fn choose(&mut self, index: usize) -> bool {
        let Some(question) = self.quiz.questions.get(self.focused) else {
            return false;
        };
        let Some(choice) = question.choices.get(index) else {
            return false;
        };
        self.selections
            .insert(question.id.clone(), choice.value.clone());
        // Marks from an earlier check no longer match the selections
        self.result = None;
        true
    }

    /// Selects a choice of the focused question by key.
    ///
    /// `'1'`..`'9'` pick by position; any other character picks the choice
    /// whose value is that character.
    pub fn choose_by_key(&mut self, key: char) -> bool {
        if let Some(digit) = key.to_digit(10)
            && digit > 0
        {
            return self.choose(digit as usize - 1);
        }
        let Some(question) = self.quiz.questions.get(self.focused) else {
            return false;
        };
        let position = question.choices.iter().position(|choice| {
            let mut chars = choice.value.chars();
            chars.next() == Some(key) && chars.next().is_none()
        });
        position.is_some_and(|index| self.choose(index))
    }

    /// Scores the current selections.
    pub fn check(&mut self) -> &ScoreResult {
        self.result.insert(self.quiz.score(&self.selections))
    }
}

#[cfg(test)]
mod tests {
    use statlab_quiz::{quiz::builtin_quizzes, scoring::Verdict};

    use super::*;

    fn panel() -> QuizPanel {
        QuizPanel::new(builtin_quizzes().remove(0))
    }

    #[test]
    fn test_choose_by_position_and_value() {
        let mut panel = panel();
        assert!(panel.choose_by_key('2'));
        assert_eq!(panel.selection("q1"), Some("b"));

        panel.focus_next();
        assert!(panel.choose_by_key('c'));
        assert_eq!(panel.selection("q2"), Some("c"));

        assert!(!panel.choose_by_key('9'));
        assert!(!panel.choose_by_key('z'));
        assert!(!panel.choose_by_key('0'));
    }

    #[test]
    fn test_check_reports_incomplete() {
        let mut panel = panel();
        panel.focus_next();
        panel.choose(2);
        let result = panel.check();
        assert_eq!(result.verdict(), Verdict::Incomplete);
        assert_eq!(result.correct_count, 1);
    }

    #[test]
    fn test_check_all_correct() {
        let mut panel = panel();
        panel.choose_by_key('b');
        panel.focus_next();
        panel.choose_by_key('c');
        let result = panel.check();
        assert!(result.all_answered);
        assert_eq!(result.correct_count, result.total);
    }

    #[test]
    fn test_changing_selection_clears_result() {
        let mut panel = panel();
        panel.choose(0);
        panel.check();
        assert!(panel.result().is_some());
        panel.choose(1);
        assert!(panel.result().is_none());
    }

    #[test]
    fn test_focus_wraps() {
        let mut panel = panel();
        panel.focus_prev();
        assert_eq!(panel.focused(), 1);
        panel.focus_next();
        assert_eq!(panel.focused(), 0);
    }
}
