// std imports
use std::fmt;

// third-party imports
use memchr::memchr;
use regex::Regex;

// local imports
use crate::captures::Captures;
use crate::compile::{PATHSEP, Split, build, translate};
use crate::error::{Error, Result};

/// A compiled wildcard pattern.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters except `/`
/// - `**` matches zero or more characters including `/`
/// - `\` escapes `*` and `\`, before any other character it is matched literally
///
/// A pattern is immutable once compiled and can be shared between threads.
///
/// # Examples
///
/// ```
/// use wildcard::{Kind, Pattern};
///
/// let pattern = Pattern::new("docs/*.md");
/// assert_eq!(pattern.kind(), Kind::SingleStar);
/// assert_eq!(pattern.prefix(), "docs/");
/// assert_eq!(pattern.suffix(), ".md");
///
/// let caps = pattern.captures("docs/readme.md").unwrap();
/// assert_eq!(caps.get(1), Some("readme"));
/// assert!(!pattern.matches("docs/api/readme.md"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    prefix: String,
    suffix: String,
    infix: Infix,
}

impl Pattern {
    /// Compiles a pattern from a string.
    ///
    /// All input strings are valid patterns, a string without `*` and `\` is a constant.
    ///
    /// # Panics
    ///
    /// Panics if the generated regular expression is rejected by the engine,
    /// which would be a defect in the translation. See [`Pattern::try_new`].
    pub fn new(raw: impl AsRef<str>) -> Self {
        match Self::try_new(raw) {
            Ok(pattern) => pattern,
            Err(e) => panic!("{e}"),
        }
    }

    /// Compiles a pattern from a string, reporting a rejected regular expression as an error.
    pub fn try_new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();

        let Some(split) = Split::new(raw) else {
            return Ok(Self {
                raw: raw.to_owned(),
                prefix: raw.to_owned(),
                suffix: String::new(),
                infix: Infix::Constant,
            });
        };

        let infix = match split.wildcard {
            "*" => Infix::SingleStar,
            "**" => Infix::DoubleStar,
            wildcard => {
                let expr = translate(wildcard);
                log::trace!("pattern {raw:?}: wildcard {wildcard:?} translated to {expr:?}");
                Infix::Complex(build(&expr).map_err(|source| Error::InvalidExpression {
                    pattern: raw.to_owned(),
                    source,
                })?)
            }
        };

        Ok(Self {
            raw: raw.to_owned(),
            prefix: split.prefix.to_owned(),
            suffix: split.suffix.to_owned(),
            infix,
        })
    }

    /// Returns the pattern string the pattern was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the literal text preceding the wildcard segment.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the literal text following the wildcard segment.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self.infix {
            Infix::Constant => Kind::Constant,
            Infix::SingleStar => Kind::SingleStar,
            Infix::DoubleStar => Kind::DoubleStar,
            Infix::Complex(_) => Kind::Complex,
        }
    }

    /// Returns the minimum length in bytes of a matching string.
    #[inline]
    pub fn min_len(&self) -> usize {
        self.prefix.len() + self.suffix.len()
    }

    /// Matches the entire `text` and extracts the wildcard captures.
    ///
    /// Returns `None` if `text` does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("src/**/*.rs");
    /// let caps = pattern.captures("src/a/b/lib.rs").unwrap();
    /// assert_eq!(caps.to_vec(), ["src/a/b/lib.rs", "a/b", "lib"]);
    ///
    /// assert!(pattern.captures("src/lib.rs").is_none());
    /// ```
    pub fn captures<'s>(&self, text: &'s str) -> Option<Captures<'s>> {
        let infix = self.infix_of(text)?;

        match &self.infix {
            Infix::Constant => infix.is_empty().then(|| Captures::new(text)),
            Infix::SingleStar => single_segment(infix).then(|| Captures::with_groups(text, [infix])),
            Infix::DoubleStar => Some(Captures::with_groups(text, [infix])),
            Infix::Complex(re) => {
                let caps = re.captures(infix)?;
                let groups = caps.iter().skip(1).map(|m| m.map_or("", |m| m.as_str()));
                Some(Captures::with_groups(text, groups))
            }
        }
    }

    /// Tests whether the pattern matches the entire `text`.
    ///
    /// Makes the same decision as [`Pattern::captures`] without collecting captures.
    pub fn matches(&self, text: &str) -> bool {
        let Some(infix) = self.infix_of(text) else {
            return false;
        };

        match &self.infix {
            Infix::Constant => infix.is_empty(),
            Infix::SingleStar => single_segment(infix),
            Infix::DoubleStar => true,
            Infix::Complex(re) => re.is_match(infix),
        }
    }

    #[inline]
    fn infix_of<'s>(&self, text: &'s str) -> Option<&'s str> {
        if text.len() < self.min_len() {
            return None;
        }
        text.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// ---

/// Classification of the wildcard segment of a [`Pattern`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    /// No wildcards, the pattern matches only itself.
    Constant,
    /// A single `*` between the prefix and the suffix.
    SingleStar,
    /// A single `**` between the prefix and the suffix.
    DoubleStar,
    /// Anything else, evaluated with a regular expression.
    Complex,
}

// ---

#[derive(Debug, Clone)]
enum Infix {
    Constant,
    SingleStar,
    DoubleStar,
    Complex(Regex),
}

#[inline]
fn single_segment(text: &str) -> bool {
    memchr(PATHSEP as u8, text.as_bytes()).is_none()
}
