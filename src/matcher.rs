// std imports
use std::sync::Arc;

// third-party imports
use once_cell::sync::Lazy;

// workspace imports
use wildcard::{Captures, Pattern};

// local imports
use crate::cache::PatternCache;
use crate::config;
use crate::error::Result;
use crate::settings::Settings;
use crate::template;

// ---

static GLOBAL: Lazy<Matcher> = Lazy::new(|| {
    Matcher::from_settings(config::get()).unwrap_or_else(|e| {
        log::warn!("{e}, using matcher without preloaded patterns");
        Matcher::default()
    })
});

/// Returns the process-wide matcher configured from [`config::get`].
pub fn global() -> &'static Matcher {
    &GLOBAL
}

// ---

/// Matches strings against wildcard patterns, compiling each distinct pattern once.
///
/// Cloning a matcher is cheap, clones share the same cache.
///
/// ```
/// use pathmatch::Matcher;
///
/// let matcher = Matcher::new();
/// let caps = matcher.captures("foo/*/bar", "foo/baz/bar").unwrap();
/// assert_eq!(caps.to_vec(), ["foo/baz/bar", "baz"]);
///
/// assert!(matcher.captures("foo/*/bar", "foo/a/b/bar").is_none());
/// assert_eq!(matcher.cache().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cache: Arc<PatternCache>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher backed by the given cache.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }

    /// Creates a matcher with a cache sized and preloaded according to `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let cache = PatternCache::with_capacity(settings.cache.initial_capacity);
        for raw in &settings.cache.preload {
            cache.try_get(raw)?;
        }
        log::debug!("matcher created with {} preloaded patterns", cache.len());

        Ok(Self::with_cache(Arc::new(cache)))
    }

    pub fn cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }

    /// Returns the compiled pattern for `pattern`.
    pub fn pattern(&self, pattern: &str) -> Arc<Pattern> {
        self.cache.get(pattern)
    }

    /// Matches `candidate` against `pattern` and extracts the wildcard captures.
    ///
    /// Index 0 of the result is `candidate` itself, the following indices hold the
    /// captures in the order the wildcards appear in `pattern`.
    /// Returns `None` if `candidate` does not match.
    pub fn captures<'s>(&self, pattern: &str, candidate: &'s str) -> Option<Captures<'s>> {
        self.cache.get(pattern).captures(candidate)
    }

    /// Tests whether `candidate` matches `pattern`.
    pub fn matches(&self, pattern: &str, candidate: &str) -> bool {
        self.cache.get(pattern).matches(candidate)
    }

    /// Matches `candidate` against `pattern` and renders `template`
    /// with `{N}` placeholders replaced by the captures.
    ///
    /// ```
    /// use pathmatch::Matcher;
    ///
    /// let matcher = Matcher::new();
    /// let target = matcher.expand("img/**.png", "img/icons/home.png", "static/{1}.webp");
    /// assert_eq!(target.as_deref(), Some("static/icons/home.webp"));
    /// ```
    pub fn expand(&self, pattern: &str, candidate: &str, template: &str) -> Option<String> {
        self.captures(pattern, candidate)
            .map(|caps| template::expand(template, &caps))
    }
}

#[cfg(test)]
mod tests;
