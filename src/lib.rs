//! Line measurement and tab-completion engine for terminal prompts
//!
//! The core of a shell-style line editor, minus the editor: given the raw
//! (possibly ANSI-decorated, possibly multi-line) edit buffer, this crate
//!
//! - measures how the buffer lays out on a fixed-width terminal grid,
//!   accounting for zero-width and double-width characters,
//! - decides whether a partially typed command line is still being typed
//!   (unterminated quotes, dangling operators, trailing escapes),
//! - drives tab-completion: tokenize, fan out to pluggable providers,
//!   narrow multiple candidates to their longest shared prefix.
//!
//! # Architecture
//!
//! ```text
//! raw input ──> ansi::strip_csi ──> width::char_width ──> layout::Position
//!      │
//!      └──> shell::Tokenize ──> complete::CompletionEngine ──> candidates
//! ```
//!
//! Everything is a pure function over its arguments: no terminal handle, no
//! I/O, no shared state. Wiring these into keybindings, rendering, and
//! history is the caller's problem.

mod ansi;
mod complete;
mod error;
mod layout;
mod shell;
mod width;

pub use ansi::strip_csi;
pub use complete::{shared_prefix, CompletionEngine, CompletionProvider};
pub use error::{LayoutError, ProviderError};
pub use layout::{line_count, offset_to_position, Position};
pub use shell::{has_trailing_whitespace, is_incomplete, last_token, ShellTokenizer, Tokenize};
pub use width::{char_width, visible_width};
