use super::Frame;
use crate::api::JobPosting;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::text_processing::render_trusted_html;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default().fg(theme.warning.to_color()),
        ),
        Span::styled(value, styling::normal_text_style(theme)),
    ])
}

fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn listed(values: &[String]) -> Option<String> {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Returns the lines of the detail overlay for a job.
///
pub fn detail_lines(job: &JobPosting, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            job.company.clone(),
            styling::secondary_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(salary) = job.displayed_salary() {
        lines.push(field("Salary", salary.to_string(), theme));
    }
    if !job.category.is_empty() {
        lines.push(field("Category", job.category.clone(), theme));
    }
    if let Some(region) = job.region.display() {
        lines.push(field("Region", region, theme));
    }
    if let Some(countries) = listed(&job.countries) {
        lines.push(field("Countries", countries, theme));
    }
    if let Some(timezones) = listed(&job.timezones) {
        lines.push(field("Timezones", timezones, theme));
    }
    if !job.apply_before.trim().is_empty() {
        lines.push(field("Apply before", job.apply_before.trim().to_string(), theme));
    }
    if let Some(skills) = listed(&job.skills) {
        lines.push(field("Skills", skills, theme));
    }
    if let Some(source) = job.source.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(field("Source", source.to_string(), theme));
    }
    if let Some(url) = job.url.as_deref().filter(|u| !u.trim().is_empty()) {
        lines.push(field("Posting", url.to_string(), theme));
    }
    if !job.apply_url.trim().is_empty() {
        lines.push(field("Apply", job.apply_url.trim().to_string(), theme));
    }
    lines.push(field("Job ID", job.job_id.clone(), theme));

    if !job.company_about.trim().is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("About the company", theme));
        lines.push(Line::from(Span::styled(
            job.company_about.trim().to_string(),
            styling::normal_text_style(theme),
        )));
    }

    let description = render_trusted_html(&job.job_description);
    if !description.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Description", theme));
        lines.extend(
            description
                .into_iter()
                .map(|line| Line::from(Span::styled(line, styling::normal_text_style(theme)))),
        );
    }
    lines
}

/// Returns the largest scroll offset that still shows the last line when
/// the lines are wrapped to the given inner area. Wrapping is estimated by
/// display width, so long words may take one more row than counted.
///
pub fn max_scroll(lines: &[Line], inner: Rect) -> u16 {
    if inner.width == 0 {
        return 0;
    }
    let width = inner.width as usize;
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows.saturating_sub(inner.height as usize)).unwrap_or(u16::MAX)
}

/// Render the job detail overlay on top of the job list.
///
pub fn job_detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let job = match state.get_job_detail() {
        Some(job) => job,
        None => return,
    };
    let theme = state.get_theme();
    let lines = detail_lines(job, &theme);
    let area = centered_rect(80, 85, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme))
        .style(Style::default().bg(theme.surface.to_color()))
        .title(Span::styled(
            format!(" {} ", job.title),
            styling::banner_style(&theme),
        ));
    state.set_detail_max_scroll(max_scroll(&lines, block.inner(area)));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.get_detail_scroll(), 0));
    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
