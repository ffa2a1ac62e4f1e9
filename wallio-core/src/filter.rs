//! The category/search filter that scopes a gallery listing.

/// Combination of category selection and free-text search term. Filter
/// equality is what the pages use to detect "the filter changed, start a
/// fresh list".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl GalleryFilter {
    /// Build from raw route-query strings, where empty means unset.
    pub fn from_query(category: &str, search: &str) -> Self {
        let clean = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            category: clean(category),
            search: clean(search),
        }
    }

    /// Query pairs for list and next/previous requests.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(c) = &self.category {
            pairs.push(("category", c.clone()));
        }
        if let Some(s) = &self.search {
            pairs.push(("search", s.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_strings_mean_unset() {
        let f = GalleryFilter::from_query("", "  ");
        assert_eq!(f, GalleryFilter::default());
        assert!(f.query_pairs().is_empty());
    }

    #[test]
    fn query_pairs_include_set_fields_only() {
        let f = GalleryFilter::from_query("space", "nebula");
        assert_eq!(
            f.query_pairs(),
            vec![
                ("category", "space".to_string()),
                ("search", "nebula".to_string())
            ]
        );

        let f = GalleryFilter::from_query("", "nebula");
        assert_eq!(f.query_pairs(), vec![("search", "nebula".to_string())]);
    }
}
