use super::{filter_panel, footer, header, job_detail, job_list, log, Frame};
use crate::state::{State, View};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Width of the category and search column.
///
const FILTER_PANEL_WIDTH: u16 = 32;

/// Height of the log pane when shown.
///
const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let theme = state.get_theme();
    let size = frame.size();
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.background.to_color())
                .fg(theme.text.to_color()),
        ),
        size,
    );

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(8)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(20)])
        .split(rows[1]);
    filter_panel(frame, columns[0], state);
    job_list(frame, columns[1], state);

    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    if *state.current_view() == View::JobDetail {
        job_detail(frame, size, state);
    }
}
