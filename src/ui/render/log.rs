use super::Frame;
use crate::config::HotkeyAction;
use crate::config::hotkeys::format_hotkey_display;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget with the most recent entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = match state.get_hotkeys().job_list.get(&HotkeyAction::ToggleLog) {
        Some(hotkey) => format!("Log ({} to hide)", format_hotkey_display(hotkey)),
        None => "Log".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));

    let entries = state.get_log_entries();
    let visible = usize::from(size.height.saturating_sub(2));
    let items: Vec<ListItem> = entries
        .iter()
        .skip(entries.len().saturating_sub(visible))
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                styling::error_text_style(&theme)
            } else if entry.contains(" WARN ") {
                styling::secondary_text_style(&theme)
            } else {
                styling::muted_text_style(&theme)
            };
            ListItem::new(Line::from(Span::styled(entry.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .block(block);
    frame.render_widget(list, size);
}
