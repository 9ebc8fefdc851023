pub use self::{
    form_display::*, help_line::*, histogram_chart::*, quiz_display::*, report_display::*,
};

mod form_display;
mod help_line;
mod histogram_chart;
mod quiz_display;
mod report_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const DEFAULT: Style = Style::new().fg(Color::White);
    pub const LABEL: Style = Style::new().fg(Color::Gray);
    pub const FOCUSED: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const ERROR: Style = Style::new().fg(Color::Red);
    pub const CORRECT: Style = Style::new().fg(Color::Green);
    pub const INCORRECT: Style = Style::new().fg(Color::Red);
    pub const PENDING: Style = Style::new().fg(Color::Yellow);
    pub const BAR: Style = Style::new().fg(Color::Cyan);
    pub const HINT: Style = Style::new().fg(Color::DarkGray);
}
