//! CSI escape stripping
//!
//! Removes the color/cursor-style escape sequences a prompt renderer is
//! likely to embed: ESC `[`, an optional one-or-two-digit parameter, an
//! optional `;` plus a second one-or-two-digit parameter, finished by `m`
//! (SGR) or `K` (erase-in-line). This is a heuristic for measuring decorated
//! prompt text, not an ANSI parser; escape forms outside that shape pass
//! through untouched.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static CSI_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[(?:\d{1,2}(?:;\d{1,2})?)?[mK]").expect("csi regex"));

/// Strip color/style CSI sequences from `input`.
///
/// Idempotent: stripping a stripped string is a no-op. Borrows when nothing
/// matches.
pub fn strip_csi(input: &str) -> Cow<'_, str> {
    CSI_STYLE.replace_all(input, "")
}
