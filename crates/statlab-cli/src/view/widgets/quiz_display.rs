use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget, Wrap},
};
use statlab_quiz::{
    quiz::Question,
    scoring::{ScoreResult, Verdict},
};

use crate::{lesson::QuizPanel, view::widgets::style};

/// Questions of a quiz with the learner's selections.
///
/// After checking, each answered question is marked right or wrong and the
/// correct choice is revealed.
pub struct QuizDisplay<'a> {
    panel: &'a QuizPanel,
    block: Option<BlockWidget<'a>>,
}

impl<'a> QuizDisplay<'a> {
    pub fn new(panel: &'a QuizPanel) -> Self {
        Self { panel, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn question_lines(&self, index: usize, question: &'a Question) -> Vec<Line<'a>> {
        let result = self.panel.result();
        let selected = self.panel.selection(&question.id);
        let focused = index == self.panel.focused();

        let marker = if focused { "> " } else { "  " };
        let prompt_style = if focused {
            style::FOCUSED
        } else {
            style::DEFAULT.add_modifier(Modifier::BOLD)
        };
        let mut prompt = vec![
            Span::styled(marker, style::FOCUSED),
            Span::styled(format!("{}. {}", index + 1, question.prompt), prompt_style),
        ];
        if let Some(score) = result.and_then(|result| result.get(&question.id))
            && score.chosen.is_some()
        {
            prompt.push(if score.is_correct {
                Span::styled("  ✓ correct", style::CORRECT)
            } else {
                Span::styled("  ✗ incorrect", style::INCORRECT)
            });
        }

        let mut lines = vec![Line::from(prompt)];
        for (n, choice) in question.choices.iter().enumerate() {
            let is_selected = selected == Some(choice.value.as_str());
            let radio = if is_selected { "(•)" } else { "( )" };
            let reveal = result.is_some() && choice.value == question.answer;
            let choice_style = if reveal {
                style::CORRECT
            } else if is_selected {
                style::DEFAULT
            } else {
                style::LABEL
            };
            let mut spans = vec![Span::styled(
                format!("    {radio} {}) {}", n + 1, choice.label),
                choice_style,
            )];
            if reveal && !is_selected {
                spans.push(Span::styled("  ← correct answer", style::CORRECT));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn verdict_line(result: &ScoreResult) -> Line<'static> {
    let verdict = result.verdict();
    let verdict_style = match verdict {
        Verdict::Incomplete => style::PENDING,
        Verdict::Scored { .. } if result.is_perfect() => style::CORRECT,
        Verdict::Scored { .. } => style::INCORRECT,
    };
    Line::styled(verdict.to_string(), verdict_style.add_modifier(Modifier::BOLD))
}

impl Widget for QuizDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut text = Text::default();
        for (index, question) in self.panel.quiz().questions.iter().enumerate() {
            text.extend(self.question_lines(index, question));
            text.push_line(Line::default());
        }
        if let Some(result) = self.panel.result() {
            text.push_line(verdict_line(result));
        }

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
