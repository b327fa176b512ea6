// third-party imports
use memchr::{memchr2, memrchr2};
use regex::{Regex, RegexBuilder};

// ---

pub(crate) const ESC: char = '\\';
pub(crate) const STAR: char = '*';
pub(crate) const PATHSEP: char = '/';

// Default compiled size limit of the regex crate.
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);
// Compiled program bytes allowed per byte of expression text.
const SIZE_LIMIT_FACTOR: usize = 4096;

/// Raw pattern split into literal prefix, wildcard segment and literal suffix.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Split<'a> {
    pub prefix: &'a str,
    pub wildcard: &'a str,
    pub suffix: &'a str,
}

impl<'a> Split<'a> {
    /// Splits `raw` around the span from its first to its last `*` or `\`.
    ///
    /// Returns `None` if the pattern has no such characters and is therefore a constant.
    /// If the wildcard segment ends with `\`, the first character of the suffix is
    /// moved into the wildcard segment so that the escape sequence stays whole.
    pub fn new(raw: &'a str) -> Option<Self> {
        let bytes = raw.as_bytes();
        let first = memchr2(STAR as u8, ESC as u8, bytes)?;
        let last = memrchr2(STAR as u8, ESC as u8, bytes)?;

        let mut end = last + 1;
        if bytes[last] == ESC as u8 {
            end += raw[end..].chars().next().map_or(0, char::len_utf8);
        }

        Some(Self {
            prefix: &raw[..first],
            wildcard: &raw[first..end],
            suffix: &raw[end..],
        })
    }
}

/// Translates a wildcard segment into an anchored regular expression.
///
/// Each `*` becomes a group that does not cross `/`, each run of two or more `*`
/// becomes a single group that matches anything.
pub(crate) fn translate(wildcard: &str) -> String {
    let mut re = String::with_capacity(wildcard.len() * 6 + 2);
    re.push('^');

    let mut chars = wildcard.chars().peekable();
    while let Some(ch) = chars.next() {
        let ch = match ch {
            STAR => {
                if chars.next_if_eq(&STAR).is_some() {
                    while chars.next_if_eq(&STAR).is_some() {}
                    re.push_str("((?s:.*))");
                } else {
                    re.push_str("([^/]*)");
                }
                continue;
            }
            ESC => match chars.next() {
                Some(ch @ (STAR | ESC)) => ch,
                Some(ch) => {
                    re.push_str(r"\\");
                    ch
                }
                None => ESC,
            },
            ch => ch,
        };
        push_literal(&mut re, ch);
    }

    re.push('$');
    re
}

/// Builds the translated expression with size limits scaled to its length,
/// so that patterns with any number of wildcards compile.
pub(crate) fn build(expr: &str) -> Result<Regex, regex::Error> {
    let limit = expr.len().saturating_mul(SIZE_LIMIT_FACTOR).max(MIN_SIZE_LIMIT);
    RegexBuilder::new(expr).size_limit(limit).dfa_size_limit(limit).build()
}

fn push_literal(re: &mut String, ch: char) {
    if ch.is_ascii_alphanumeric() || ch == PATHSEP {
        re.push(ch);
    } else {
        re.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
    }
}
