//! Shell-completeness heuristics and the tokenizer seam
//!
//! Decides whether a command line is syntactically "still being typed"
//! without a shell grammar: quote parity, dangling pipe/and operators, and
//! trailing escapes are all local checks. Tokenization sits behind the
//! [`Tokenize`] trait so a stricter grammar can replace the built-in
//! scanner without touching layout or completion code.

/// Splits a command-like string into whitespace-separated, quote-resolved
/// tokens.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Built-in tokenizer with common shell quoting rules: single quotes are
/// literal, double quotes honor backslash escapes, a backslash outside
/// quotes escapes the next character. An unterminated quote keeps the
/// partial remainder as the final token, so the token is still usable for
/// completion on exactly the lines [`is_incomplete`] flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellTokenizer;

enum QuoteState {
    Plain,
    Single,
    Double,
}

impl Tokenize for ShellTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        // Tracks "a token has started" so '' and "" produce empty tokens.
        let mut in_token = false;
        let mut state = QuoteState::Plain;
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            match state {
                QuoteState::Plain => match c {
                    '\'' => {
                        state = QuoteState::Single;
                        in_token = true;
                    }
                    '"' => {
                        state = QuoteState::Double;
                        in_token = true;
                    }
                    '\\' => {
                        if let Some(next) = chars.next() {
                            current.push(next);
                            in_token = true;
                        }
                    }
                    c if c.is_whitespace() => {
                        if in_token {
                            tokens.push(std::mem::take(&mut current));
                            in_token = false;
                        }
                    }
                    c => {
                        current.push(c);
                        in_token = true;
                    }
                },
                QuoteState::Single => match c {
                    '\'' => state = QuoteState::Plain,
                    c => current.push(c),
                },
                QuoteState::Double => match c {
                    '"' => state = QuoteState::Plain,
                    '\\' => match chars.next() {
                        Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                        Some(next) => {
                            current.push('\\');
                            current.push(next);
                        }
                        None => current.push('\\'),
                    },
                    c => current.push(c),
                },
            }
        }

        if in_token {
            tokens.push(current);
        }
        tokens
    }
}

/// Whether `input` looks like a line the user has not finished typing.
///
/// Independent heuristics, checked in order, short-circuiting: odd single
/// quote count, odd double quote count, the line ends right after a `||`,
/// `|`, or `&&` operator, or it ends in a single unescaped backslash.
/// All-whitespace input is complete.
pub fn is_incomplete(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    if input.chars().filter(|&c| c == '\'').count() % 2 == 1 {
        return true;
    }
    if input.chars().filter(|&c| c == '"').count() % 2 == 1 {
        return true;
    }
    if trimmed.ends_with("&&") || trimmed.ends_with('|') {
        return true;
    }
    input.ends_with('\\') && !input.ends_with("\\\\")
}

/// True if any line of `input` ends in a space or tab preceded by a
/// non-backslash character — the user just finished a token and the next
/// one is empty.
pub fn has_trailing_whitespace(input: &str) -> bool {
    input.lines().any(|line| {
        let mut rev = line.chars().rev();
        matches!(
            (rev.next(), rev.next()),
            (Some(' ' | '\t'), Some(prev)) if prev != '\\'
        )
    })
}

/// The token the cursor is sitting on at the end of `input`, or `""` when
/// the input is blank, ends in fresh whitespace, or yields no tokens.
pub fn last_token(input: &str, tokenizer: &dyn Tokenize) -> String {
    if input.trim().is_empty() || has_trailing_whitespace(input) {
        return String::new();
    }
    tokenizer.tokenize(input).pop().unwrap_or_default()
}
