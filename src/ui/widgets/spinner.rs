use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames cycled through while a request is in flight.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered loading indicator for an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let padding = usize::from(height.saturating_sub(2) / 2);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(vec![
        Span::styled(frame, styling::active_list_item_style(&theme)),
        Span::styled(" Loading jobs...", styling::normal_text_style(&theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}
