use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{State, View};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Returns the mode badge and hotkey hints for the current state.
///
pub fn controls_text(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    if state.is_search_mode() {
        return (
            "SEARCH:",
            format!(
                " Type a company name,{}",
                build_footer_text(
                    &hotkeys.search_mode,
                    &[
                        (HotkeyAction::SearchSubmit, "search", None),
                        (HotkeyAction::SearchCancel, "cancel", None),
                    ],
                )
            ),
        );
    }
    match state.current_view() {
        View::JobDetail => (
            "JOB:",
            build_footer_text(
                &hotkeys.job_detail,
                &[
                    (HotkeyAction::ScrollDown, "scroll", Some(HotkeyAction::ScrollUp)),
                    (HotkeyAction::CopyApplyUrl, "copy apply link", None),
                    (HotkeyAction::Refresh, "refresh", None),
                    (HotkeyAction::ToggleTheme, "theme", None),
                    (HotkeyAction::Back, "back", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            ),
        ),
        View::JobList => (
            "JOBS:",
            build_footer_text(
                &hotkeys.job_list,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navigate",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (HotkeyAction::SwitchFocus, "switch panel", None),
                    (HotkeyAction::Select, "select", None),
                    (
                        HotkeyAction::PreviousPage,
                        "page",
                        Some(HotkeyAction::NextPage),
                    ),
                    (HotkeyAction::EnterSearch, "company search", None),
                    (HotkeyAction::ClearFilter, "clear filter", None),
                    (HotkeyAction::Refresh, "refresh", None),
                    (HotkeyAction::ToggleTheme, "theme", None),
                    (HotkeyAction::ToggleLog, "log", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            ),
        ),
    }
}

fn badge_color(state: &State, theme: &Theme) -> Style {
    let color = if state.is_search_mode() {
        theme.footer_search
    } else if *state.current_view() == View::JobDetail {
        theme.footer_detail
    } else {
        theme.footer_normal
    };
    Style::default()
        .fg(theme.background.to_color())
        .bg(color.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (badge, controls) = controls_text(state);
    let controls_content = Line::from(vec![
        Span::styled(badge, badge_color(state, &theme)),
        Span::styled(controls, Style::default().fg(theme.text_secondary.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_list_controls() {
        let state = State::default();
        let (badge, text) = controls_text(&state);
        assert_eq!(badge, "JOBS:");
        assert!(text.contains("h/l: page"));
        assert!(text.contains("c: clear filter"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn search_controls() {
        let mut state = State::default();
        state.enter_search_mode();
        let (badge, text) = controls_text(&state);
        assert_eq!(badge, "SEARCH:");
        assert!(text.contains("Enter: search"));
        assert!(text.contains("Esc: cancel"));
    }
}
