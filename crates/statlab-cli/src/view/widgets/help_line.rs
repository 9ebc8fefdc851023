use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys (alternatives) and what they do.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One centered line listing the key bindings of the visible section.
#[derive(Debug)]
pub struct HelpLine<'a> {
    bindings: Vec<KeyBinding<'a>>,
}

impl<'a> HelpLine<'a> {
    pub fn new(bindings: impl IntoIterator<Item = KeyBinding<'a>>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![];
        for (i, (keys, action)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            let keys = keys
                .iter()
                .copied()
                .map(|key| Span::styled(key, KEY_STYLE))
                .collect::<Vec<_>>();
            for (j, key) in keys.into_iter().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(key);
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, ACTION_STYLE));
        }
        spans
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const ACTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for HelpLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.spans()).centered().render(area, buf);
    }
}
