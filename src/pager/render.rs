// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Framed rendering of one listing page.
//!
//! ```text
//! ===[Parashell 0.3.0 - /some/dir]===   <- title divider
//! ---[Warning: development release]--   <- warning divider
//! total 12                              <- listing header
//! -rw-r--r-- ...                        <- page lines
//! ===========[<Page 2 of 3>]==========  <- navigation divider
//! ```

use crate::error::PagerError;

use super::PagedListing;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEV_STATE: &str = "development";

/// Center `msg` in a field of `width` characters, padded with `fill`.
/// The extra character of an odd-sized pad goes to the right.
pub(crate) fn center(msg: &str, fill: char, width: usize) -> String {
    let len = msg.chars().count();
    if len >= width {
        return msg.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(msg);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Render one page of a listing as a framed block.
///
/// Deterministic: identical inputs produce identical output strings.
///
/// # Errors
///
/// Returns [`PagerError::IndexOutOfRange`] if `page_index` is outside the
/// listing's page range; callers clamp before rendering.
pub fn render(
    paged: &PagedListing,
    page_index: usize,
    width: usize,
    title_context: &str,
) -> Result<String, PagerError> {
    let count = paged.page_count();
    if page_index >= count {
        return Err(PagerError::IndexOutOfRange {
            index: page_index,
            count,
        });
    }

    let left_arrow = if page_index > 0 { "< " } else { "" };
    let right_arrow = if page_index < paged.last_index() {
        " >"
    } else {
        ""
    };

    let title = format!("[Parashell {VERSION} - {title_context}]");
    let warning = format!("[Warning: {DEV_STATE} release. Bugs may be present.]");
    let nav = format!(
        "[{left_arrow}Page {} of {count}{right_arrow}]",
        page_index + 1
    );

    let lines =
        paged.header().len() + paged.pages()[page_index].len() + paged.footer().len() + 3;
    let mut out = Vec::with_capacity(lines);
    out.push(center(&title, '=', width));
    out.push(center(&warning, '-', width));
    out.extend(paged.header().iter().cloned());
    out.extend(paged.pages()[page_index].iter().cloned());
    out.extend(paged.footer().iter().cloned());
    out.push(center(&nav, '=', width));
    Ok(out.join("\n"))
}

/// Render the frame around a listing that could not be captured, with the
/// lister's error text in place of content.
#[must_use]
pub fn render_unavailable(message: &str, width: usize, title_context: &str) -> String {
    let title = format!("[Parashell {VERSION} - {title_context}]");
    let warning = format!("[Warning: {DEV_STATE} release. Bugs may be present.]");
    let mut out = vec![center(&title, '=', width), center(&warning, '-', width)];
    out.push(format!("Error: Cannot get directory listing: {message}"));
    out.push(center("", '=', width));
    out.join("\n")
}
