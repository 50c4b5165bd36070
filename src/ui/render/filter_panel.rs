use super::Frame;
use crate::state::{FilterKind, FilterSpec, Focus, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const SEARCH_TITLE: &str = "Company";
const CATEGORIES_TITLE: &str = "Categories";

/// Render the company search box and the category list.
///
pub fn filter_panel(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(size);
    search_box(frame, rows[0], state);
    categories(frame, rows[1], state);
}

fn focused_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let block = Block::default().borders(Borders::ALL);
    if focused {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(title)
    }
}

fn search_box(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focused = state.is_search_mode();
    let company_filter = matches!(
        state.get_filter(),
        FilterSpec::Active {
            kind: FilterKind::Company,
            ..
        }
    );

    let title = if company_filter && !focused {
        format!("{} (active)", SEARCH_TITLE)
    } else {
        SEARCH_TITLE.to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            styling::active_block_border_style(&theme)
        } else {
            styling::normal_block_border_style(&theme)
        })
        .title(title);

    let textarea = state.get_search_textarea();
    textarea.set_block(block);
    textarea.set_style(styling::normal_text_style(&theme));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("/ to search by company");
    textarea.set_placeholder_style(styling::muted_text_style(&theme));
    textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(textarea.widget(), size);
}

fn categories(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Categories;
    let block = focused_block(CATEGORIES_TITLE, focused, &theme);

    let items: Vec<ListItem> = state
        .get_categories()
        .iter()
        .map(|category| {
            if state.get_filter().is_category(category) {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme.accent.to_color())),
                    Span::styled(
                        category.clone(),
                        styling::normal_text_style(&theme).add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(Span::styled(
                    format!("  {}", category),
                    styling::normal_text_style(&theme),
                )))
            }
        })
        .collect();

    let highlight = if focused {
        styling::active_list_item_style(&theme)
    } else {
        styling::normal_text_style(&theme)
    };
    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(highlight)
        .block(block);

    frame.render_stateful_widget(list, size, state.get_categories_list_state());
}
