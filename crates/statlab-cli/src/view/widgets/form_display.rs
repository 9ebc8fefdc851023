use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::{lesson::Form, view::widgets::style};

const CURSOR: &str = "▏";

/// Labelled text fields, one per row, with the focused one highlighted.
pub struct FormDisplay<'a> {
    form: &'a Form,
    block: Option<BlockWidget<'a>>,
}

impl<'a> FormDisplay<'a> {
    pub fn new(form: &'a Form) -> Self {
        Self { form, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(self.form.fields().len()).unwrap_or(u16::MAX);
        let margin = self.block.as_ref().map_or(0, |block| {
            let probe = Rect::new(0, 0, 100, 100);
            probe.height - block.inner(probe).height
        });
        rows.saturating_add(margin)
    }

    fn label_width(&self) -> u16 {
        let width = self
            .form
            .fields()
            .iter()
            .map(|field| field.label().chars().count())
            .max()
            .unwrap_or(0);
        u16::try_from(width + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for FormDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = Layout::vertical(self.form.fields().iter().map(|_| Constraint::Length(1)))
            .split(area);
        let label_width = self.label_width();

        for (i, (field, row)) in self.form.fields().iter().zip(rows.iter()).enumerate() {
            let [label_area, value_area] = row.layout(&Layout::horizontal([
                Constraint::Length(label_width),
                Constraint::Fill(1),
            ]));
            let focused = i == self.form.focused();
            let label_style = if focused { style::FOCUSED } else { style::LABEL };
            Line::styled(format!("{}:", field.label()), label_style).render(label_area, buf);

            let mut spans = vec![Span::styled(field.value(), style::DEFAULT)];
            if focused {
                spans.push(Span::styled(CURSOR, style::FOCUSED));
            }
            // Keep the cursor visible once the value outgrows the row
            let value_width = field.value().chars().count() + 1;
            let line = Line::from(spans);
            if value_width > usize::from(value_area.width) {
                line.right_aligned().render(value_area, buf);
            } else {
                line.render(value_area, buf);
            }
        }
    }
}
