use super::pagination::pagination;
use super::Frame;
use crate::api::JobPosting;
use crate::config::hotkeys::format_hotkey_display;
use crate::config::HotkeyAction;
use crate::state::{FilterSpec, Focus, JobListView, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Jobs";

/// Returns the line describing the active filter and, once loaded, the number
/// of matching jobs.
///
pub fn results_text(filter: &FilterSpec, total: Option<u64>) -> String {
    let showing = match filter {
        FilterSpec::NoFilter => "Showing all remote jobs".to_string(),
        FilterSpec::Active { kind, value } => {
            format!("Showing results for {}: {}", kind.label(), value)
        }
    };
    match total {
        Some(total) => format!("{}  ·  {} jobs found", showing, total),
        None => showing,
    }
}

fn truncate(text: &str, width: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Returns the lines of one job card.
///
pub fn card_lines(job: &JobPosting, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![];

    let mut heading = vec![Span::styled(
        job.title.clone(),
        styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
    )];
    if !job.category.is_empty() {
        heading.push(Span::styled(
            format!("  [{}]", job.category),
            styling::muted_text_style(theme),
        ));
    }
    lines.push(Line::from(heading));

    let mut company = vec![Span::styled(
        job.company.clone(),
        styling::secondary_text_style(theme),
    )];
    if let Some(salary) = job.displayed_salary() {
        company.push(Span::styled("  ·  ", styling::muted_text_style(theme)));
        company.push(Span::styled(
            salary.to_string(),
            ratatui::style::Style::default().fg(theme.success.to_color()),
        ));
    }
    lines.push(Line::from(company));

    if !job.company_about.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&job.company_about, width),
            styling::muted_text_style(theme),
        )));
    }

    let mut facts = vec![];
    if let Some(region) = job.region.display() {
        facts.push(format!("Region: {}", region));
    }
    if !job.apply_before.trim().is_empty() {
        facts.push(format!("Apply before: {}", job.apply_before.trim()));
    }
    if !facts.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&facts.join("  ·  "), width),
            styling::normal_text_style(theme),
        )));
    }

    if !job.skills.is_empty() {
        let skills = job
            .skills
            .iter()
            .map(|skill| format!("#{}", skill))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate(&skills, width),
            styling::tag_style(theme),
        )));
    }

    lines.push(Line::from(""));
    lines
}

/// Render the results line, the job cards and the pagination bar.
///
pub fn job_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Jobs;
    let view = state.list_view();

    let total = match &view {
        JobListView::Jobs { result, .. } => Some(result.total),
        JobListView::NoResults => Some(0),
        _ => None,
    };
    let pages = match &view {
        JobListView::Jobs {
            result,
            pagination: Some(targets),
        } => Some((targets.clone(), result.pages)),
        _ => None,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(if pages.is_some() { 3 } else { 0 }),
        ])
        .split(size);

    let results = Paragraph::new(Line::from(Span::styled(
        format!(" {}", results_text(state.get_filter(), total)),
        styling::secondary_text_style(&theme),
    )));
    frame.render_widget(results, rows[0]);

    let mut block = Block::default().borders(Borders::ALL);
    block = if focused {
        block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(&theme))
            .title(BLOCK_TITLE)
    };

    let card_width = usize::from(rows[1].width.saturating_sub(4));
    match view {
        JobListView::Loading => {
            frame.render_widget(
                spinner::widget(state, rows[1].height).block(block),
                rows[1],
            );
        }
        JobListView::Failed(message) => {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(message, styling::error_text_style(&theme))),
                Line::from(""),
                Line::from(Span::styled(
                    hint(state, HotkeyAction::Refresh, "to retry"),
                    styling::muted_text_style(&theme),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block),
                rows[1],
            );
        }
        JobListView::NoResults => {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No jobs found",
                    styling::normal_text_style(&theme).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    hint(state, HotkeyAction::ClearFilter, "to clear the filter"),
                    styling::muted_text_style(&theme),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(block),
                rows[1],
            );
        }
        JobListView::Jobs { result, .. } => {
            let items: Vec<ListItem> = result
                .items
                .iter()
                .map(|job| ListItem::new(card_lines(job, &theme, card_width)))
                .collect();
            let highlight = if focused {
                styling::active_list_item_style(&theme)
            } else {
                styling::current_list_item_style(&theme)
            };
            let list = List::new(items)
                .style(styling::normal_text_style(&theme))
                .highlight_style(highlight)
                .highlight_symbol("▌ ")
                .block(block);
            frame.render_stateful_widget(list, rows[1], state.get_jobs_list_state());
        }
    }

    if let Some((targets, _)) = pages {
        pagination(frame, rows[2], state, &targets);
    }
}

fn hint(state: &State, action: HotkeyAction, text: &str) -> String {
    match state.get_hotkeys().job_list.get(&action) {
        Some(hotkey) => format!("Press {} {}", format_hotkey_display(hotkey), text),
        None => String::new(),
    }
}
