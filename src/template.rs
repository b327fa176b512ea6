// std imports
use std::collections::HashMap;

// workspace imports
use wildcard::Captures;

// ---

/// Text with `{name}` placeholders.
///
/// ```
/// use pathmatch::template::Template;
/// use maplit::hashmap;
///
/// let vars = hashmap! { "name".to_owned() => "world".to_owned() };
/// assert_eq!(Template::new("hello, {name}{x}!").render(&vars), "hello, world{x}!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'t> {
    text: &'t str,
}

impl<'t> Template<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Replaces every placeholder known to `vars` in a single pass.
    ///
    /// Unknown placeholders and unbalanced braces are kept as is,
    /// substituted values are not scanned for placeholders.
    pub fn render<V: Vars + ?Sized>(&self, vars: &V) -> String {
        let mut result = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let tail = &rest[start + 1..];
            match tail.find(['{', '}']) {
                Some(end) if tail.as_bytes()[end] == b'}' => {
                    let name = &tail[..end];
                    match vars.get(name) {
                        Some(value) => result.push_str(value),
                        None => result.push_str(&rest[start..start + end + 2]),
                    }
                    rest = &tail[end + 1..];
                }
                _ => {
                    result.push('{');
                    rest = tail;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

/// Renders `template` with `{N}` placeholders replaced by the N-th value of `captures`.
pub fn expand(template: &str, captures: &Captures<'_>) -> String {
    Template::new(template).render(captures)
}

// ---

/// Source of placeholder values.
pub trait Vars {
    fn get(&self, name: &str) -> Option<&str>;
}

impl Vars for Captures<'_> {
    fn get(&self, name: &str) -> Option<&str> {
        name.parse().ok().and_then(|i| Captures::get(self, i))
    }
}

impl Vars for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl Vars for [(&str, &str)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}
