//! Client-side narrowing of already-fetched collections.
//!
//! Every list screen filters the same way: a free-text search box plus an
//! optional exact-match selector (warehouse, category). Instead of ad hoc
//! field access per entity kind, each kind declares its searchable fields and
//! its selector key once, as an explicit list of extractor functions.

use crate::id::EntityId;

/// Extracts one searchable text field from an entity, when present.
pub type FieldExtractor<T> = for<'a> fn(&'a T) -> Option<&'a str>;

/// Extracts the selector foreign key from an entity, when present.
pub type KeyExtractor<T> = for<'a> fn(&'a T) -> Option<&'a EntityId>;

/// Filter over one entity kind: text extractors plus an optional key.
///
/// Matching rules:
/// - the search term matches when any configured field contains it,
///   case-insensitively; an empty term matches everything;
/// - a set selector requires the entity's key to equal it (string equality);
///   entities without a key fail a set selector; an unset selector passes
///   everything.
///
/// Filtering is stable (original relative order) and idempotent.
pub struct EntityFilter<T> {
    fields: Vec<FieldExtractor<T>>,
    key: Option<KeyExtractor<T>>,
}

impl<T> EntityFilter<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            key: None,
        }
    }

    /// Add a searchable text field.
    pub fn field(mut self, extract: FieldExtractor<T>) -> Self {
        self.fields.push(extract);
        self
    }

    /// Set the selector key (at most one per entity kind).
    pub fn key(mut self, extract: KeyExtractor<T>) -> Self {
        self.key = Some(extract);
        self
    }

    /// True when `entity` passes both the text and the selector predicate.
    pub fn matches(&self, entity: &T, term: &str, selector: Option<&EntityId>) -> bool {
        self.matches_lowered(entity, &term.to_lowercase(), selector)
    }

    fn matches_lowered(&self, entity: &T, lowered_term: &str, selector: Option<&EntityId>) -> bool {
        let text_ok = lowered_term.is_empty()
            || self.fields.iter().any(|extract| {
                extract(entity)
                    .map(|value| value.to_lowercase().contains(lowered_term))
                    .unwrap_or(false)
            });

        let selector_ok = match selector {
            None => true,
            Some(wanted) => self
                .key
                .and_then(|extract| extract(entity))
                .map(|key| key == wanted)
                .unwrap_or(false),
        };

        text_ok && selector_ok
    }

    /// Narrow `items`, preserving relative order.
    pub fn apply<'a, I>(&self, items: I, term: &str, selector: Option<&EntityId>) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
    {
        let lowered = term.to_lowercase();
        items
            .into_iter()
            .filter(|item| self.matches_lowered(item, &lowered, selector))
            .collect()
    }
}

impl<T> Default for EntityFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        code: Option<String>,
        group: Option<EntityId>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Widget".into(),
                code: Some("W-1".into()),
                group: Some(EntityId::from(1)),
            },
            Row {
                name: "Gadget".into(),
                code: Some("G-9".into()),
                group: Some(EntityId::from(2)),
            },
            Row {
                name: "Loose part".into(),
                code: None,
                group: None,
            },
        ]
    }

    fn filter() -> EntityFilter<Row> {
        EntityFilter::new()
            .field(|r: &Row| Some(r.name.as_str()))
            .field(|r: &Row| r.code.as_deref())
            .key(|r: &Row| r.group.as_ref())
    }

    #[test]
    fn empty_term_and_unset_selector_pass_everything_in_order() {
        let rows = rows();
        let kept = filter().apply(&rows, "", None);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].name, "Widget");
        assert_eq!(kept[2].name, "Loose part");
    }

    #[test]
    fn term_matches_any_field_case_insensitively() {
        let rows = rows();
        let f = filter();

        let by_name = f.apply(&rows, "wid", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Widget");

        let by_code = f.apply(&rows, "g-9", None);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "Gadget");

        assert!(f.apply(&rows, "xyz", None).is_empty());
    }

    #[test]
    fn set_selector_requires_key_equality() {
        let rows = rows();
        let wanted = EntityId::from(2);
        let kept = filter().apply(&rows, "", Some(&wanted));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Gadget");
    }

    #[test]
    fn entity_without_key_fails_a_set_selector() {
        let rows = rows();
        let wanted = EntityId::from(1);
        let kept = filter().apply(&rows, "", Some(&wanted));
        assert!(kept.iter().all(|r| r.group.is_some()));
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = rows();
        let f = filter();
        let once = f.apply(&rows, "e", None);
        let twice = f.apply(once.iter().copied(), "e", None);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn selector_and_term_compose() {
        let rows = rows();
        let wanted = EntityId::from(1);
        assert!(filter().apply(&rows, "gad", Some(&wanted)).is_empty());
    }
}
