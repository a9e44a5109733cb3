use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::dom::{Role, Tree};
use crate::field::{CLEAR_GLYPH, FieldController};
use crate::layout::LayoutRegions;
use crate::places::SuggestionItem;
use crate::suggest::COPY_GLYPH;
use crate::widgets::popup;

const TITLE: &str = " Where are you flying? ";
const HELP_TEXT: &str =
    " Tab field  ↑↓ move  Enter choose  Alt+Enter refine  Ctrl+S submit  Esc quit";

const FIELD_HEIGHT: u16 = 3;
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const POPUP_BORDER_HEIGHT: u16 = 2;
const COLUMN_GAP: u16 = 2;
const ROW_PADDING: u16 = 1;
const CLEAR_BUTTON_WIDTH: u16 = 3;

/// Display widths of the fixed dropdown columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub city: u16,
    pub code: u16,
    pub copy: u16,
}

impl ColumnWidths {
    pub fn measure(items: &[SuggestionItem]) -> Self {
        let widest = |column: fn(&SuggestionItem) -> &str| {
            items
                .iter()
                .map(|item| column(item).width() as u16)
                .max()
                .unwrap_or(0)
        };

        Self {
            city: widest(SuggestionItem::city),
            code: widest(SuggestionItem::code),
            copy: COPY_GLYPH.width() as u16,
        }
    }
}

/// Split one dropdown row into city, country, code and copy cells
///
/// City is left aligned, code and the copy affordance are right aligned and
/// country takes what is left between them.
pub fn row_cells(row: Rect, widths: &ColumnWidths) -> [Rect; 4] {
    let left = row.x + ROW_PADDING;
    let copy_x = row.right().saturating_sub(ROW_PADDING + widths.copy);
    let code_x = copy_x.saturating_sub(COLUMN_GAP + widths.code);
    let city_width = widths.city.min(code_x.saturating_sub(left));
    let country_x = left + city_width + COLUMN_GAP;
    let country_width = code_x.saturating_sub(COLUMN_GAP).saturating_sub(country_x);

    [
        Rect::new(left, row.y, city_width, 1),
        Rect::new(country_x, row.y, country_width, 1),
        Rect::new(code_x, row.y, widths.code, 1),
        Rect::new(copy_x, row.y, widths.copy, 1),
    ]
}

/// Split a field row into the input and the clear button beside it
///
/// The button only takes space when shown and when the row is wide enough
/// to keep a usable input next to it.
pub fn split_clear_button(area: Rect, show_clear: bool) -> (Rect, Rect) {
    if !show_clear || area.width < CLEAR_BUTTON_WIDTH * 2 {
        return (area, Rect::default());
    }

    let input_width = area.width - CLEAR_BUTTON_WIDTH;
    (
        Rect {
            width: input_width,
            ..area
        },
        Rect {
            x: area.x + input_width,
            width: CLEAR_BUTTON_WIDTH,
            ..area
        },
    )
}

impl App {
    /// Render the form and record where every node landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let layout = Layout::vertical(constraints).split(frame.area());

        let field_areas = &layout[1..=self.fields.len()];
        let help_area = layout[layout.len() - 1];

        render_title(frame, layout[0]);
        for (field, area) in self.fields.iter().zip(field_areas) {
            render_field(&self.tree, field, frame, *area, &mut self.regions);
        }
        render_help(frame, help_area);

        // Dropdowns last so they overlay the fields below them
        for (field, area) in self.fields.iter().zip(field_areas) {
            render_dropdown(&self.tree, field, frame, *area, &mut self.regions);
        }
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn render_field(
    tree: &Tree,
    field: &FieldController,
    frame: &mut Frame,
    area: Rect,
    regions: &mut LayoutRegions,
) {
    let nodes = field.nodes();
    let (input_area, clear_area) = split_clear_button(area, !tree.is_hidden(nodes.clear));

    frame.render_widget(field.textarea(), input_area);
    regions.record(nodes.input, input_area);

    if clear_area.width > 0 {
        let button = Paragraph::new(CLEAR_GLYPH)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, clear_area);
        regions.record(nodes.clear, clear_area);
    }
}

/// Render the suggestion dropdown just below the input
fn render_dropdown(
    tree: &Tree,
    field: &FieldController,
    frame: &mut Frame,
    input_area: Rect,
    regions: &mut LayoutRegions,
) {
    let list = field.list();
    if !list.is_visible(tree) || list.is_empty() {
        return;
    }

    let visible_count = list.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(input_area, popup_height, frame.area());
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, popup_area);
    regions.record(list.container(), popup_area);

    let inner = popup::inset_rect(popup_area, 1, 1);
    let widths = ColumnWidths::measure(list.items());
    let roles = [Role::City, Role::Country, Role::Code, Role::Copy];

    for (row, &item) in list.item_nodes().iter().take(inner.height as usize).enumerate() {
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let active = tree.is_active(item);
        let row_style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        };

        frame.render_widget(Block::default().style(row_style), row_area);
        regions.record(item, row_area);

        for (cell, role) in row_cells(row_area, &widths).into_iter().zip(roles) {
            let Some(part) = tree.find_descendant(item, role) else {
                continue;
            };
            let style = match role {
                _ if active => row_style,
                Role::Country => row_style.fg(Color::Gray),
                Role::Code => row_style.fg(Color::Yellow),
                Role::Copy => row_style.fg(Color::Cyan),
                _ => row_style,
            };
            frame.render_widget(Paragraph::new(tree.text(part)).style(style), cell);
            regions.record(part, cell);
        }
    }
}
