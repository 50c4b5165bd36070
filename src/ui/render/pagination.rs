use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Tabs},
};

const BLOCK_TITLE: &str = "Pages";

/// Width taken by one page label including the divider.
///
const LABEL_WIDTH: u16 = 6;

/// Returns the window of pagination targets to show, keeping the current page
/// visible when there are more targets than fit.
///
pub fn visible_targets(targets: &[u32], current: u32, max_visible: usize) -> &[u32] {
    let max_visible = max_visible.max(1);
    if targets.len() <= max_visible {
        return targets;
    }
    let position = targets.iter().position(|&p| p == current).unwrap_or(0);
    let start = position
        .saturating_sub(max_visible / 2)
        .min(targets.len() - max_visible);
    &targets[start..start + max_visible]
}

/// Render the pagination bar for the given targets.
///
pub fn pagination(frame: &mut Frame, size: Rect, state: &State, targets: &[u32]) {
    let theme = state.get_theme();
    let current = state.get_page();
    let max_visible = usize::from(size.width.saturating_sub(2) / LABEL_WIDTH);
    let visible = visible_targets(targets, current, max_visible);

    let titles: Vec<String> = visible.iter().map(|page| page.to_string()).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme))
        .title(Span::styled(
            format!("{} ({} of {})", BLOCK_TITLE, current, targets.len()),
            styling::muted_text_style(&theme),
        ));
    let tabs = Tabs::new(titles)
        .block(block)
        .style(styling::normal_text_style(&theme))
        .highlight_style(
            styling::banner_style(&theme).add_modifier(Modifier::UNDERLINED),
        )
        .select(visible.iter().position(|&p| p == current).unwrap_or(0));
    frame.render_widget(tabs, size);
}
