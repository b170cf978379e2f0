use super::types::{LabelName, LabelValue};

/// Ordered label names and values kept as two parallel sequences.
///
/// The i-th name belongs to the i-th value. A label set is never changed
/// after construction, extending it yields a fresh copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    names: Vec<LabelName>,
    values: Vec<LabelValue>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a label set following the iteration order of `tags`.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (names, values) = tags
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .unzip();

        Self { names, values }
    }

    /// Returns a copy of `self` with one more pair appended at the end.
    pub fn with_added<N, V>(&self, name: N, value: V) -> Self
    where
        N: Into<LabelName>,
        V: Into<LabelValue>,
    {
        let mut names = Vec::with_capacity(self.names.len() + 1);
        names.extend_from_slice(&self.names);
        names.push(name.into());

        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.extend_from_slice(&self.values);
        values.push(value.into());

        Self { names, values }
    }

    #[inline]
    pub fn names(&self) -> &[LabelName] {
        &self.names
    }

    #[inline]
    pub fn values(&self) -> &[LabelValue] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LabelName, &LabelValue)> {
        self.names.iter().zip(self.values.iter())
    }
}
