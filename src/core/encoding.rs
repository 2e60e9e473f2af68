// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console output decoding.
//!
//! `dir` on legacy Windows consoles emits the OEM or active code page, not
//! UTF-8. Captured bytes go through here before pagination: valid UTF-8
//! passes through untouched, otherwise the platform code page is tried.
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{IBM866, WINDOWS_1252};
use std::borrow::Cow;

use crate::core::platform::PlatformKind;

/// Source encodings for captured process output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (code page 65001)
    #[default]
    Utf8,
    /// Active Code Page - typically Windows-1252
    Acp,
    /// OEM Code Page - typically IBM437/866
    Oem,
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD rather than failing; a
/// listing with one mangled filename is still worth paging.
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Acp => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        Encoding::Oem => IBM866.decode_without_bom_handling(bytes).0,
    }
}

/// Decode console output captured on the given platform: strict UTF-8 when
/// it holds, otherwise the platform's legacy code page.
#[must_use]
pub fn decode_console(platform: PlatformKind, bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => match platform {
            PlatformKind::Posix => String::from_utf8_lossy(bytes).into_owned(),
            PlatformKind::Windows => bytes_to_utf8(Encoding::Acp, bytes).into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Encoding, bytes_to_utf8, decode_console};
    use crate::core::platform::PlatformKind;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(bytes_to_utf8(Encoding::Utf8, b"hello"), "hello");
    }

    #[test]
    fn test_cp1252_decode() {
        // "café" in Windows-1252
        assert_eq!(bytes_to_utf8(Encoding::Acp, b"caf\xe9"), "caf\u{e9}");
    }

    #[test]
    fn test_decode_console_falls_back() {
        assert_eq!(decode_console(PlatformKind::Windows, b"caf\xe9"), "caf\u{e9}");
        assert_eq!(
            decode_console(PlatformKind::Posix, b"caf\xe9"),
            "caf\u{fffd}"
        );
    }
}
