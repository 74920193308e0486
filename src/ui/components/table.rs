//! Card grid renderer.
//!
//! Three columns: `Name`, `Description` and `Picture`. Names carry match
//! highlights; the picture cell is a terminal hyperlink to the card's small
//! artwork labeled with the card name, which is what a terminal can offer in
//! place of an inline image.

use crate::app::state::{truncate, COLUMN_GAP, NAME_COLUMN_WIDTH, PICTURE_COLUMN_WIDTH};
use crate::ui::helpers::{self, hyperlink, padding_for, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridRow, PictureCell};

/// Prefix marking the picture cell as an image link.
const PICTURE_PREFIX: &str = "[img] ";

fn desc_width(cols: usize) -> usize {
    cols.saturating_sub(NAME_COLUMN_WIDTH + PICTURE_COLUMN_WIDTH + 2 * COLUMN_GAP)
}

/// Renders the column titles at `row` and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let gap = " ".repeat(COLUMN_GAP);
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.column_header_fg));
    print!(
        "{:<name_w$}{gap}{:<desc_w$}{gap}{}",
        "Name",
        "Description",
        "Picture",
        name_w = NAME_COLUMN_WIDTH,
        desc_w = desc_width(cols),
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one line per grid row starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, rows: &[GridRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for grid_row in rows {
        current_row = render_table_row(current_row, grid_row, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &GridRow, theme: &Theme, cols: usize) -> usize {
    let normal = Theme::fg(&theme.colors.text_normal);
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(row, 1);
    print!("{normal}");
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, &normal);
    print!("{}", padding_for(&item.name, NAME_COLUMN_WIDTH));
    print!("{gap}");

    print!("{}", item.desc);
    print!("{}", padding_for(&item.desc, desc_width(cols)));
    print!("{gap}");

    render_picture_cell(&item.picture, theme);
    print!("{}", Theme::reset());
    row + 1
}

fn render_picture_cell(picture: &PictureCell, theme: &Theme) {
    let label = truncate(
        &picture.alt,
        PICTURE_COLUMN_WIDTH.saturating_sub(PICTURE_PREFIX.len()),
    );

    match &picture.url {
        Some(url) => {
            print!("{}", Theme::fg(&theme.colors.link_fg));
            print!("{}", Theme::underline());
            print!("{}", hyperlink(url, &format!("{PICTURE_PREFIX}{label}")));
        }
        None => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("-");
        }
    }
}
