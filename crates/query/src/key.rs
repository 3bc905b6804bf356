//! Cache keys.
//!
//! A [`QueryKey`] is an ordered run of segments naming one cached read:
//! a resource name, optionally an id, optionally a filter rendered as
//! sorted `name=value` pairs. Two reads share a cache slot exactly when
//! their keys are equal, and invalidation matches by prefix, so key
//! construction is the contract between readers and writers.

use std::fmt;

use gatcha_core::DbId;

/// One segment of a [`QueryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// A fixed resource or sub-resource name.
    Name(String),
    /// A record id.
    Id(DbId),
    /// Filter parameters, held sorted by name so logically-identical
    /// filters always render the same segment.
    Params(Vec<(String, String)>),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Id(id) => write!(f, "{id}"),
            Segment::Params(params) => {
                f.write_str("{")?;
                for (i, (name, value)) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Key for one cached query.
///
/// Built with the `with_*` chain:
///
/// ```
/// use gatcha_query::QueryKey;
///
/// let key = QueryKey::new("character").with_id(7);
/// assert_eq!(key.to_string(), "character/7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<Segment>);

impl QueryKey {
    /// Start a key with a resource name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(vec![Segment::Name(name.into())])
    }

    /// Append a sub-resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.0.push(Segment::Name(name.into()));
        self
    }

    /// Append a record id.
    pub fn with_id(mut self, id: DbId) -> Self {
        self.0.push(Segment::Id(id));
        self
    }

    /// Append filter parameters. Pairs are sorted by name before being
    /// stored, so callers can push fields in any order.
    pub fn with_params<I, N, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: ToString,
    {
        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(name, value)| (name.into(), value.to_string()))
            .collect();
        params.sort();
        self.0.push(Segment::Params(params));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Whether this key begins with every segment of `prefix`, in order.
    ///
    /// `character/7` starts with `character` but not with `characters`;
    /// every key starts with itself.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_segments_with_slashes() {
        let key = QueryKey::new("ticktick").with_name("stats");
        assert_eq!(key.to_string(), "ticktick/stats");

        let key = QueryKey::new("character").with_id(12);
        assert_eq!(key.to_string(), "character/12");
    }

    #[test]
    fn params_are_canonically_sorted() {
        let a = QueryKey::new("characters").with_params([("series", "2"), ("search", "rei")]);
        let b = QueryKey::new("characters").with_params([("search", "rei"), ("series", "2")]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "characters/{search=rei,series=2}");
    }

    #[test]
    fn prefix_matching_is_segment_wise() {
        let detail = QueryKey::new("character").with_id(7);
        assert!(detail.starts_with(&QueryKey::new("character")));
        assert!(detail.starts_with(&detail.clone()));
        assert!(!detail.starts_with(&QueryKey::new("characters")));
        assert!(!detail.starts_with(&QueryKey::new("character").with_id(8)));
    }

    #[test]
    fn short_keys_never_match_longer_prefixes() {
        let list = QueryKey::new("character");
        assert!(!list.starts_with(&QueryKey::new("character").with_id(7)));
    }
}
