use super::Frame;
use crate::state::{ApiStatus, State, ThemeMode};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "Remote Job Bank";
const TAGLINE: &str = "  remote jobs from around the world";

/// Render header widget with the title, API status and theme.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let (status_text, status_style) = match state.get_api_status() {
        ApiStatus::Unknown => ("API: checking", styling::muted_text_style(&theme)),
        ApiStatus::Reachable => (
            "API: online",
            Style::default().fg(theme.success.to_color()),
        ),
        ApiStatus::Unreachable => ("API: offline", styling::error_text_style(&theme)),
    };
    let theme_text = match state.get_theme_mode() {
        ThemeMode::Light => "☀ light",
        ThemeMode::Dark => "☾ dark",
    };
    let right = Line::from(vec![
        Span::styled(status_text, status_style),
        Span::styled("  |  ", styling::muted_text_style(&theme)),
        Span::styled(theme_text, styling::secondary_text_style(&theme)),
        Span::raw(" "),
    ]);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_width)])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(format!(" {}", TITLE), styling::banner_style(&theme)),
        Span::styled(TAGLINE, styling::muted_text_style(&theme)),
    ]);
    frame.render_widget(Paragraph::new(left), columns[0]);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        columns[1],
    );
}
