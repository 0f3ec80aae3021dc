//! # List rendering
//!
//! Formats show listings as an aligned table under a terminal-width
//! budget. Layout math is done in characters, never bytes: a title with
//! multi-byte characters must truncate and pad exactly like an ASCII one
//! of the same length.

use console::Term;

use super::styles;
use crate::model::{Show, STATUS_AIRING};

const COL_ID: usize = 7;
const COL_EPISODES: usize = 9;
/// Width of the "Title" header; the title column never shrinks below it.
const COL_TITLE_MIN: usize = 5;
/// Separators and padding around the three columns.
const CHROME: usize = 5;

const FALLBACK_WIDTH: usize = 80;

/// Renders `shows` to the terminal, sized to the current terminal width.
pub fn print_show_list(shows: &[Show]) {
    let (_, cols) = Term::stdout().size();
    let width = if cols == 0 {
        FALLBACK_WIDTH
    } else {
        cols as usize
    };
    print!("{}", render_show_list(shows, width));
}

/// Renders `shows` as a table fitting `width` columns. The caller is
/// responsible for filtering and sorting.
pub fn render_show_list(shows: &[Show], width: usize) -> String {
    render_internal(
        shows,
        width,
        colored::control::SHOULD_COLORIZE.should_colorize(),
    )
}

fn render_internal(shows: &[Show], width: usize, color: bool) -> String {
    let max_title = width.saturating_sub(COL_ID + COL_EPISODES + CHROME);

    // One scan: grow the title column to the longest title, but the
    // width cap wins even if a later title is longer still.
    let mut col_title = COL_TITLE_MIN;
    for show in shows {
        let len = show.title.chars().count();
        if len > col_title {
            if len > max_title {
                col_title = max_title;
                break;
            }
            col_title = len;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "| {:<idw$} {:<titlew$} {:<epw$}|\n",
        "ID",
        "Title",
        "Episodes",
        idw = COL_ID,
        titlew = col_title,
        epw = COL_EPISODES
    ));

    for show in shows {
        let episodes = match show.episodes {
            Some(total) => format!("{:3} / {}", show.my_episodes, total),
            None => format!("{:3} / ?", show.my_episodes),
        };

        let title_len = show.title.chars().count();
        let title: String = if title_len > max_title {
            show.title.chars().take(max_title).collect()
        } else {
            show.title.clone()
        };
        // Padding is measured against the untruncated title, so a
        // truncated row gets none.
        let dots = ".".repeat(col_title.saturating_sub(title_len));

        let title = if color && show.status == STATUS_AIRING {
            styles::airing(&title)
        } else {
            title
        };

        out.push_str(&format!(
            "| {:<idw$} {}{} {:<epw$}|\n",
            show.id,
            title,
            dots,
            episodes,
            idw = COL_ID,
            epw = COL_EPISODES
        ));
    }

    out.push_str(&format!("{} results\n\n", shows.len()));
    out
}
