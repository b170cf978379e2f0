use std::fmt;

/// Registry key of a metric: a name plus insertion-ordered tags.
///
/// Tag names are unique. Identifiers order by key first and then by their
/// tag sequence, which is the natural iteration order of a registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricId {
    key: String,
    tags: Vec<(String, String)>,
}

impl MetricId {
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            tags: Vec::new(),
        }
    }

    pub fn tagged<K, I, N, V>(key: K, tags: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        tags.into_iter()
            .fold(Self::new(key), |id, (name, value)| id.with_tag(name, value))
    }

    /// Adds a tag, overwriting the value in place when the name already exists.
    pub fn with_tag<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();

        match self.tags.iter_mut().find(|(n, _)| *n == name) {
            Some(tag) => tag.1 = value,
            None => self.tags.push((name, value)),
        }
        self
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[inline]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.has_tags() {
            let tags: Vec<String> = self.tags().map(|(n, v)| format!("{}={}", n, v)).collect();
            write!(f, "{{{}}}", tags.join(", "))?;
        }
        Ok(())
    }
}
