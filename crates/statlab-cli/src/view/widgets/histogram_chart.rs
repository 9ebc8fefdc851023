use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    widgets::{Bar, BarChart, Block as BlockWidget, BlockExt as _, Widget},
};
use statlab_stats::histogram::{self, Histogram};

use crate::view::widgets::style;

/// Bar values are stored in tenths of a percent.
const BAR_SCALE: f64 = 10.0;
const FULL_BAR: u64 = 1000;

/// Horizontal bar chart of a histogram, one bar per bin.
///
/// Bars are scaled relative to the tallest bin. Empty bins still get a
/// sliver so that their label lines up with a visible bar.
pub struct HistogramChart<'a> {
    histogram: &'a Histogram,
    block: Option<BlockWidget<'a>>,
}

impl<'a> HistogramChart<'a> {
    pub fn new(histogram: &'a Histogram) -> Self {
        Self {
            histogram,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn bars(&self) -> Vec<Bar<'a>> {
        let max_count = self.histogram.max_count();
        self.histogram
            .labelled_counts()
            .map(|(label, count)| {
                Bar::with_label(label, bar_value(count, max_count))
                    .text_value(count.to_string())
                    .style(style::BAR)
            })
            .collect()
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_value(count: usize, max_count: usize) -> u64 {
    (histogram::bar_height_percent(count, max_count) * BAR_SCALE).round() as u64
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        BarChart::new(self.bars())
            .direction(Direction::Horizontal)
            .bar_gap(0)
            .max(FULL_BAR)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_values() {
        assert_eq!(bar_value(4, 4), FULL_BAR);
        assert_eq!(bar_value(2, 4), 500);
        assert_eq!(bar_value(0, 4), 5);
    }

    #[test]
    fn test_one_bar_per_bin() {
        let histogram = Histogram::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(HistogramChart::new(&histogram).bars().len(), 3);
    }
}
