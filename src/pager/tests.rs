// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Listing, ListingSnapshot, PAGE_SIZE, PagerState, paginate, render};
use crate::core::platform::PlatformKind;
use crate::error::PagerError;

/// A posix listing: one `ls -l` style header line plus `n` content lines.
fn posix_listing(n: usize) -> String {
    let mut lines = vec![format!("total {n}")];
    lines.extend((1..=n).map(|i| format!("-rw-r--r-- file_{i:02}")));
    lines.join("\n")
}

#[test]
fn test_paginate_empty_input() {
    assert_eq!(
        paginate("", PlatformKind::Posix),
        Err(PagerError::EmptyInput)
    );
}

#[test]
fn test_paginate_header_only_yields_one_empty_page() {
    let paged = paginate("total 0", PlatformKind::Posix).unwrap();
    assert_eq!(paged.header(), ["total 0"]);
    assert!(paged.footer().is_empty());
    assert_eq!(paged.pages(), [Vec::<String>::new()]);
}

#[test]
fn test_paginate_page_sizes() {
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let sizes: Vec<usize> = paged.pages().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![12, 12, 1]);
}

#[test]
fn test_paginate_full_pages_have_no_partial_tail() {
    let paged = paginate(&posix_listing(24), PlatformKind::Posix).unwrap();
    let sizes: Vec<usize> = paged.pages().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![12, 12]);
}

#[test]
fn test_paginate_reconstruction() {
    // header ++ flattened pages ++ footer == the original line sequence
    for n in [0, 1, 11, 12, 13, 25, 36] {
        let raw = posix_listing(n);
        let paged = paginate(&raw, PlatformKind::Posix).unwrap();

        let mut rebuilt: Vec<String> = paged.header().to_vec();
        for page in paged.pages() {
            rebuilt.extend(page.iter().cloned());
        }
        rebuilt.extend(paged.footer().iter().cloned());

        let original: Vec<String> = raw.split('\n').map(str::to_string).collect();
        assert_eq!(rebuilt, original, "reconstruction failed for n={n}");
    }
}

#[test]
fn test_paginate_windows_frame() {
    // dir: 5 header lines, 2 footer lines
    let lines: Vec<String> = (1..=20).map(|i| format!("line {i:02}")).collect();
    let paged = paginate(&lines.join("\n"), PlatformKind::Windows).unwrap();
    assert_eq!(paged.header().len(), 5);
    assert_eq!(paged.footer().len(), 2);
    let content: usize = paged.pages().iter().map(Vec::len).sum();
    assert_eq!(content, 13);
    assert_eq!(paged.page_count(), 2);
}

#[test]
fn test_paginate_short_windows_input() {
    // fewer lines than the frame wants: everything lands in the header,
    // one empty page remains
    let paged = paginate("a\nb\nc", PlatformKind::Windows).unwrap();
    assert_eq!(paged.header().len(), 3);
    assert!(paged.footer().is_empty());
    assert_eq!(paged.pages(), [Vec::<String>::new()]);
}

#[test]
fn test_trailing_newline_is_preserved() {
    let raw = format!("{}\n", posix_listing(3));
    let paged = paginate(&raw, PlatformKind::Posix).unwrap();
    // the trailing empty line counts as content
    let content: usize = paged.pages().iter().map(Vec::len).sum();
    assert_eq!(content, 4);
}

#[test]
fn test_navigation_scenario() {
    // 25 content lines -> pages [12, 12, 1]
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let mut state = PagerState::new();

    state.goto(&paged, 2).unwrap();
    assert_eq!(state.current(), 1);

    state.next(&paged).unwrap();
    assert_eq!(state.current(), 2);

    assert_eq!(state.next(&paged), Err(PagerError::AtLastPage));
    assert_eq!(state.current(), 2);
}

#[test]
fn test_prev_at_first_page() {
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let mut state = PagerState::new();
    assert_eq!(state.prev(), Err(PagerError::AtFirstPage));
    assert_eq!(state.current(), 0);

    state.next(&paged).unwrap();
    state.prev().unwrap();
    assert_eq!(state.current(), 0);
}

#[test]
fn test_goto_bounds() {
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let mut state = PagerState::new();
    state.next(&paged).unwrap();

    for n in 1..=3 {
        assert!(state.goto(&paged, n).is_ok(), "page {n} should be accepted");
    }

    // rejected values leave the cursor untouched
    state.goto(&paged, 2).unwrap();
    for n in [0, -1, 4, 99] {
        assert_eq!(
            state.goto(&paged, n),
            Err(PagerError::PageOutOfRange {
                requested: n,
                count: 3
            })
        );
        assert_eq!(state.current(), 1);
    }
}

#[test]
fn test_single_page_navigation() {
    let paged = paginate(&posix_listing(5), PlatformKind::Posix).unwrap();
    let mut state = PagerState::new();
    assert_eq!(state.next(&paged), Err(PagerError::AtLastPage));
    assert_eq!(state.prev(), Err(PagerError::AtFirstPage));
    state.goto(&paged, 1).unwrap();
    assert_eq!(state.current(), 0);
}

#[test]
fn test_clamp_after_shrink() {
    let big = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let mut state = PagerState::new();
    state.goto(&big, 3).unwrap();

    let small = paginate(&posix_listing(5), PlatformKind::Posix).unwrap();
    state.clamp(&small);
    assert_eq!(state.current(), 0);
}

#[test]
fn test_render_is_idempotent() {
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    let a = render(&paged, 1, 60, "/tmp/demo").unwrap();
    let b = render(&paged, 1, 60, "/tmp/demo").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_render_navigation_arrows() {
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();

    let first = render(&paged, 0, 60, "/tmp/demo").unwrap();
    assert!(first.contains("[Page 1 of 3 >]"), "first page: {first}");

    let middle = render(&paged, 1, 60, "/tmp/demo").unwrap();
    assert!(middle.contains("[< Page 2 of 3 >]"), "middle page: {middle}");

    let last = render(&paged, 2, 60, "/tmp/demo").unwrap();
    assert!(last.contains("[< Page 3 of 3]"), "last page: {last}");
    assert!(!last.contains("3 of 3 >"), "no right arrow on last page");
}

#[test]
fn test_render_contains_frame_and_content() {
    let paged = paginate(&posix_listing(3), PlatformKind::Posix).unwrap();
    let out = render(&paged, 0, 60, "/tmp/demo").unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with('='), "top divider: {}", lines[0]);
    assert!(lines[0].contains("/tmp/demo"));
    assert!(lines[1].contains("Warning"));
    assert_eq!(lines[2], "total 3");
    assert!(lines.last().unwrap().starts_with('='));
    assert!(out.contains("-rw-r--r-- file_02"));
}

#[test]
fn test_render_line_count_matches_frame_plus_page() {
    // title + warning + nav dividers around header, page and footer
    let paged = paginate(&posix_listing(25), PlatformKind::Posix).unwrap();
    for page_index in 0..paged.page_count() {
        let out = render(&paged, page_index, 60, "/tmp/demo").unwrap();
        let expected = paged.header().len()
            + paged.pages()[page_index].len()
            + paged.footer().len()
            + 3;
        assert_eq!(out.lines().count(), expected, "page {page_index}");
    }
}

#[test]
fn test_render_rejects_out_of_range_index() {
    let paged = paginate(&posix_listing(3), PlatformKind::Posix).unwrap();
    assert_eq!(
        render(&paged, 1, 60, "x"),
        Err(PagerError::IndexOutOfRange { index: 1, count: 1 })
    );
}

#[test]
fn test_page_size_constant() {
    assert_eq!(PAGE_SIZE, 12);
}

#[test]
fn test_listing_resolve() {
    let snap = ListingSnapshot::new(posix_listing(2), PlatformKind::Posix);
    let listing = Listing::resolve(&snap);
    assert!(listing.paged().is_some());

    let empty = ListingSnapshot::new("", PlatformKind::Posix);
    match Listing::resolve(&empty) {
        Listing::Unavailable(msg) => assert!(msg.contains("empty")),
        Listing::Paged(_) => panic!("empty capture must resolve to Unavailable"),
    }
}
