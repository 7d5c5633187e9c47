//! Single-open accordion state for a book's chapters

/// Which chapter, if any, is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterExpansion {
    expanded: Option<String>,
}

impl ChapterExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is open, otherwise open it and collapse any other
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn clear(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_expanding_another_collapses_previous() {
        let mut expansion = ChapterExpansion::new();
        let all = ["a", "b", "c"];
        assert!(all.iter().all(|id| !expansion.is_expanded(id)));

        expansion.toggle("a");
        assert!(expansion.is_expanded("a"));

        expansion.toggle("b");
        assert!(!expansion.is_expanded("a"));
        assert!(expansion.is_expanded("b"));
        assert!(!expansion.is_expanded("c"));

        expansion.toggle("b");
        assert_eq!(expansion.expanded(), None);
    }

    proptest! {
        #[test]
        fn prop_at_most_one_expanded(toggles in proptest::collection::vec(0usize..4, 0..32)) {
            let ids = ["a", "b", "c", "d"];
            let mut expansion = ChapterExpansion::new();
            let mut model: Option<usize> = None;

            for i in toggles {
                expansion.toggle(ids[i]);
                model = if model == Some(i) { None } else { Some(i) };

                let open = ids.iter().filter(|id| expansion.is_expanded(id)).count();
                prop_assert!(open <= 1);
                prop_assert_eq!(expansion.expanded(), model.map(|m| ids[m]));
            }
        }
    }
}
