// std imports
use std::collections::HashMap;
use std::ops::Index;
use std::slice;

// ---

/// Result of a successful match.
///
/// Index 0 holds the whole candidate, indices 1 and above hold the text matched by
/// each wildcard in the order the wildcards appear in the pattern.
/// All values borrow from the candidate.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Captures<'s> {
    items: Vec<&'s str>,
}

impl<'s> Captures<'s> {
    pub(crate) fn new(candidate: &'s str) -> Self {
        Self { items: vec![candidate] }
    }

    pub(crate) fn with_groups<I>(candidate: &'s str, groups: I) -> Self
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut items = vec![candidate];
        items.extend(groups);
        Self { items }
    }

    /// Returns the value at position `i`, 0 being the whole candidate.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&'s str> {
        self.items.get(i).copied()
    }

    /// Returns the number of values including the whole candidate.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for captures produced by a match.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the matched candidate.
    #[inline]
    pub fn candidate(&self) -> &'s str {
        self.items[0]
    }

    /// Returns the wildcard captures without the candidate.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = &'s str> + '_ {
        self.items[1..].iter().copied()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, 's> {
        Iter(self.items.iter())
    }

    /// Returns owned copies of all values.
    pub fn to_vec(&self) -> Vec<String> {
        self.items.iter().map(|s| (*s).to_owned()).collect()
    }

    /// Returns all values keyed by their decimal position, `"0"` being the whole candidate.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, s)| (i.to_string(), (*s).to_owned()))
            .collect()
    }
}

impl<'s> Index<usize> for Captures<'s> {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        self.items[i]
    }
}

impl<'s> IntoIterator for Captures<'s> {
    type Item = &'s str;
    type IntoIter = std::vec::IntoIter<&'s str>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'c, 's> IntoIterator for &'c Captures<'s> {
    type Item = &'s str;
    type IntoIter = Iter<'c, 's>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s> From<Captures<'s>> for Vec<&'s str> {
    fn from(captures: Captures<'s>) -> Self {
        captures.items
    }
}

// ---

/// Iterator over [`Captures`] values.
#[derive(Debug, Clone)]
pub struct Iter<'c, 's>(slice::Iter<'c, &'s str>);

impl<'c, 's> Iterator for Iter<'c, 's> {
    type Item = &'s str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl DoubleEndedIterator for Iter<'_, '_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().copied()
    }
}
