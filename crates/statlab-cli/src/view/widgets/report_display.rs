use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget, Wrap},
};

use crate::{
    lesson::{Report, report},
    view::widgets::style,
};

/// Labelled result values of a report, with the z-score interpretation below
/// them.
pub struct ReportDisplay<'a> {
    report: &'a Report,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ReportDisplay<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            report,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn interpretation(&self) -> Option<String> {
        match self.report {
            Report::ZScore { summary, .. } => Some(report::describe_position(summary.position)),
            _ => None,
        }
    }
}

impl Widget for ReportDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = report::key_values(self.report);
        let [values_area, _, note_area] = Layout::vertical([
            Constraint::Length(u16::try_from(rows.len()).unwrap_or(u16::MAX)),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let row_areas =
            Layout::vertical(rows.iter().map(|_| Constraint::Length(1))).split(values_area);
        for ((label, value), row_area) in rows.into_iter().zip(row_areas.iter()) {
            let [label_area, value_area] =
                row_area.layout(&Layout::horizontal([Constraint::Fill(1), Constraint::Length(14)]));
            Line::styled(format!("{label}:"), style::LABEL)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value, style::DEFAULT)
                .right_aligned()
                .render(value_area, buf);
        }

        if let Some(note) = self.interpretation() {
            Paragraph::new(note)
                .style(style::DEFAULT)
                .wrap(Wrap { trim: true })
                .render(note_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(report: &Report) -> String {
        let area = Rect::new(0, 0, 48, 8);
        let mut buf = Buffer::empty(area);
        ReportDisplay::new(report).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_owned())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_center_values() {
        let text = render_text(&report::center("2, 4, 9").unwrap());
        assert!(text.contains("Median:"));
        assert!(text.contains("5.000"));
        assert!(text.contains("4.000"));
    }

    #[test]
    fn test_z_score_interpretation() {
        let text = render_text(&report::z_score("5", "10", "5").unwrap());
        assert!(text.contains("-1.000"));
        assert!(text.contains("below the mean"));
    }
}
