// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory-listing pagination.
//!
//! ```text
//! ListingSnapshot { raw_text, platform }
//!        |
//!        v
//!    paginate()
//!        |
//!        v
//! PagedListing { header, footer, pages[12 lines each] }
//!        ^
//!        |  next / prev / goto (pure transitions)
//! PagerState { current }
//! ```
//!
//! Native listing tools frame their output with summary lines whose count
//! differs by OS: `ls -l` prepends one total line, `dir` prepends five and
//! appends two. `paginate` strips those into `header`/`footer` so that only
//! file lines are paged.
//!
//! Invariant: every page except possibly the last holds exactly
//! [`PAGE_SIZE`] lines, and `header ++ pages ++ footer` reconstructs the
//! split input in original order. Zero content lines produce exactly one
//! empty page so navigation never indexes out of bounds.

pub(crate) mod render;

pub use render::{render, render_unavailable};

use crate::core::platform::PlatformKind;
use crate::error::PagerError;

/// Number of content lines per page.
pub const PAGE_SIZE: usize = 12;

/// Immutable capture of one directory-listing invocation.
///
/// Created on every refresh and discarded once paging has been derived.
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    raw_text: String,
    platform: PlatformKind,
}

impl ListingSnapshot {
    #[must_use]
    pub fn new(raw_text: impl Into<String>, platform: PlatformKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            platform,
        }
    }

    /// Derive the paged view of this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::EmptyInput`] if the captured text is empty.
    pub fn paginate(&self) -> Result<PagedListing, PagerError> {
        paginate(&self.raw_text, self.platform)
    }
}

/// Paged view of a directory listing, resolved once at construction.
///
/// The listing is either paged content or an error message captured from the
/// lister; downstream code matches once and never re-inspects.
#[derive(Debug, Clone)]
pub enum Listing {
    Paged(PagedListing),
    Unavailable(String),
}

impl Listing {
    /// Resolve a snapshot into a tagged listing. Capture or pagination
    /// failure becomes `Unavailable` with the error text.
    #[must_use]
    pub fn resolve(snapshot: &ListingSnapshot) -> Self {
        match snapshot.paginate() {
            Ok(paged) => Self::Paged(paged),
            Err(e) => Self::Unavailable(e.to_string()),
        }
    }

    #[must_use]
    pub const fn paged(&self) -> Option<&PagedListing> {
        match self {
            Self::Paged(p) => Some(p),
            Self::Unavailable(_) => None,
        }
    }
}

/// A directory listing split into header, footer and fixed-size pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedListing {
    header: Vec<String>,
    footer: Vec<String>,
    pages: Vec<Vec<String>>,
}

impl PagedListing {
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    #[must_use]
    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// Number of pages; always at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the last page.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }
}

/// Split raw listing text into a [`PagedListing`].
///
/// The strip counts model the framing of the native listing tools:
/// posix (`ls -l`) 1 header line, 0 footer lines; windows (`dir`) 5 header
/// lines, 2 footer lines. Content is chunked into [`PAGE_SIZE`]-line pages,
/// a final partial chunk kept as its own page.
///
/// # Errors
///
/// Returns [`PagerError::EmptyInput`] if `raw_text` is empty. Any other
/// input yields at least one (possibly empty) page.
pub fn paginate(raw_text: &str, platform: PlatformKind) -> Result<PagedListing, PagerError> {
    if raw_text.is_empty() {
        return Err(PagerError::EmptyInput);
    }

    // split('\n') rather than lines(): a trailing newline is part of the
    // captured output and must survive reconstruction.
    let lines: Vec<String> = raw_text.split('\n').map(str::to_string).collect();

    let (header_count, footer_count) = platform.listing_frame();

    let header_n = header_count.min(lines.len());
    let header = lines[..header_n].to_vec();
    let rest = &lines[header_n..];
    let footer_n = footer_count.min(rest.len());
    let content = &rest[..rest.len() - footer_n];
    let footer = rest[rest.len() - footer_n..].to_vec();

    let mut pages: Vec<Vec<String>> = content.chunks(PAGE_SIZE).map(<[String]>::to_vec).collect();
    if pages.is_empty() {
        pages.push(Vec::new());
    }

    Ok(PagedListing {
        header,
        footer,
        pages,
    })
}

/// Mutable page cursor, owned by the interactive session.
///
/// All transitions are pure: a failed transition leaves the cursor
/// untouched and reports the boundary it hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerState {
    current: usize,
}

impl PagerState {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Current page index, `0 <= current < page_count`.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Back to the first page. Called on directory change.
    pub const fn reset(&mut self) {
        self.current = 0;
    }

    /// Clamp the cursor into range after the listing was recomputed and may
    /// have fewer pages than before.
    pub fn clamp(&mut self, paged: &PagedListing) {
        self.current = self.current.min(paged.last_index());
    }

    /// Advance one page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::AtLastPage`] if already on the last page.
    pub fn next(&mut self, paged: &PagedListing) -> Result<(), PagerError> {
        if self.current == paged.last_index() {
            return Err(PagerError::AtLastPage);
        }
        self.current += 1;
        Ok(())
    }

    /// Go back one page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::AtFirstPage`] if already on the first page.
    pub const fn prev(&mut self) -> Result<(), PagerError> {
        if self.current == 0 {
            return Err(PagerError::AtFirstPage);
        }
        self.current -= 1;
        Ok(())
    }

    /// Jump to a 1-based page number. Atomic: no mutation on failure.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] if `requested` is outside
    /// `1..=page_count`.
    pub fn goto(&mut self, paged: &PagedListing, requested: i64) -> Result<(), PagerError> {
        let count = paged.page_count();
        if requested < 1 || requested > count as i64 {
            return Err(PagerError::PageOutOfRange { requested, count });
        }
        // bounds were checked above, the conversion cannot fail
        self.current = usize::try_from(requested - 1).unwrap_or(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
