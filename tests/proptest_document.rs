//! Property-based tests for the document model
//!
//! Verifies page-count arithmetic, deletion atomicity, and keyword set
//! semantics across generated inputs.

use folio::{Document, DocumentMetadata, Structure};
use proptest::prelude::*;

// Strategy for short keyword lists with likely duplicates
fn keyword_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..12)
}

fn document_with_pages(count: usize) -> Document {
    Document::with_structure(
        DocumentMetadata::new("prop"),
        Structure {
            number_of_pages: count,
            ..Structure::default()
        },
    )
}

proptest! {
    #[test]
    fn prop_initial_count_floors_at_one(requested in 0usize..200) {
        let doc = document_with_pages(requested);
        prop_assert_eq!(doc.page_count(), requested.max(1));
    }

    #[test]
    fn prop_add_pages_adds_exactly_n(initial in 1usize..50, added in 0usize..50) {
        let mut doc = document_with_pages(initial);
        doc.add_pages(added);
        prop_assert_eq!(doc.page_count(), initial + added);
    }

    #[test]
    fn prop_structure_count_tracks_pages(initial in 1usize..50, added in 0usize..50) {
        let mut doc = document_with_pages(initial);
        doc.add_pages(added);
        prop_assert_eq!(doc.structure().number_of_pages, doc.page_count());
    }

    #[test]
    fn prop_valid_delete_removes_exactly_one(count in 1usize..50, seed in any::<usize>()) {
        let mut doc = document_with_pages(count);
        let index = seed % count;
        doc.delete_page(index).unwrap();
        prop_assert_eq!(doc.page_count(), count - 1);
    }

    #[test]
    fn prop_invalid_delete_leaves_count_unchanged(count in 1usize..50, past_end in 0usize..50) {
        let mut doc = document_with_pages(count);
        let result = doc.delete_page(count + past_end);
        prop_assert!(result.is_err());
        prop_assert_eq!(doc.page_count(), count);
    }

    #[test]
    fn prop_add_keywords_is_idempotent(keywords in keyword_list()) {
        let mut doc = Document::new(DocumentMetadata::new("prop"));

        doc.add_keywords(keywords.iter().cloned());
        let after_first = doc.metadata().keywords.as_ref().map(|s| s.len());

        doc.add_keywords(keywords.iter().cloned());
        let after_second = doc.metadata().keywords.as_ref().map(|s| s.len());

        prop_assert_eq!(after_first, after_second);
    }

    #[test]
    fn prop_keyword_set_holds_unique_values(keywords in keyword_list()) {
        let mut doc = Document::new(DocumentMetadata::new("prop"));
        doc.add_keywords(keywords.iter().cloned());

        let unique: std::collections::HashSet<_> = keywords.iter().cloned().collect();
        match doc.metadata().keywords.as_ref() {
            Some(set) => prop_assert_eq!(set.len(), unique.len()),
            None => prop_assert!(keywords.is_empty()),
        }
    }
}
