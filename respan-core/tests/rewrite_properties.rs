//! Property-based tests for the entity rewriter and emoji scanner.
//!
//! These properties must hold for any input:
//! - Rewriting with no entities returns the text unchanged
//! - Codepoints outside every span survive in order
//! - Entity order does not affect the output
//! - Plain ASCII words and numbers never contain an emoji

use proptest::prelude::*;
use respan_core::{rewrite_entities, EmojiPattern, Entity};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Mixed-script text, including astral codepoints
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 @#./\u{e9}\u{3042}\u{1F600}\u{1F468}\u{200D}]{0,60}").unwrap()
}

/// Text plus a sorted, non-overlapping set of spans inside it
fn text_with_spans() -> impl Strategy<Value = (String, Vec<(usize, usize)>)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.chars().count();
        let cuts = prop::collection::vec(0..=len, 0..8);
        (Just(text), cuts).prop_map(|(text, mut cuts)| {
            cuts.sort_unstable();
            cuts.dedup();
            let spans: Vec<(usize, usize)> = cuts.chunks_exact(2).map(|w| (w[0], w[1])).collect();
            (text, spans)
        })
    })
}

fn label(span: &(usize, usize)) -> String {
    format!("<{}:{}>", span.0, span.1)
}

// =============================================================================
// REWRITE PROPERTIES
// =============================================================================

mod rewrite_properties {
    use super::*;

    proptest! {
        /// No entities means no change
        #[test]
        fn empty_entity_list_is_identity(text in text_strategy()) {
            let entities: Vec<Entity<()>> = Vec::new();
            prop_assert_eq!(rewrite_entities(&text, entities, |_, _| "x"), text);
        }

        /// Replacing every span with its own codepoints reproduces the text
        #[test]
        fn self_replacement_is_identity((text, spans) in text_with_spans()) {
            let out = rewrite_entities(&text, &spans, |span, cps| {
                cps[span.0..span.1].iter().collect::<String>()
            });
            prop_assert_eq!(out, text);
        }

        /// Removing every span leaves exactly the uncovered codepoints
        #[test]
        fn uncovered_codepoints_survive_in_order((text, spans) in text_with_spans()) {
            let out = rewrite_entities(&text, &spans, |_, _| "");

            let expected: String = text
                .chars()
                .enumerate()
                .filter(|(i, _)| !spans.iter().any(|&(s, e)| s <= *i && *i < e))
                .map(|(_, c)| c)
                .collect();
            prop_assert_eq!(out, expected);
        }

        /// Each span is replaced exactly once
        #[test]
        fn every_span_replaced_once((text, spans) in text_with_spans()) {
            let mut calls = 0;
            let out = rewrite_entities(&text, &spans, |span, _| {
                calls += 1;
                label(span)
            });
            prop_assert_eq!(calls, spans.len());
            for span in &spans {
                prop_assert_eq!(out.matches(&label(span)).count(), 1);
            }
        }

        /// Reversed input order gives the same output as sorted order
        #[test]
        fn order_independent((text, spans) in text_with_spans()) {
            let mut reversed = spans.clone();
            reversed.reverse();

            let sorted_out = rewrite_entities(&text, &spans, |s, _| label(s));
            let reversed_out = rewrite_entities(&text, &reversed, |s, _| label(s));
            prop_assert_eq!(sorted_out, reversed_out);
        }
    }
}

// =============================================================================
// EMOJI PROPERTIES
// =============================================================================

mod emoji_properties {
    use super::*;

    proptest! {
        /// ASCII letters, digits and spaces never form an emoji
        #[test]
        fn no_emoji_in_ascii_alphanumerics(text in "[A-Za-z0-9 ]{0,80}") {
            prop_assert!(!EmojiPattern::global().contains_emoji(&text));
        }

        /// Scanned spans are in order, non-empty and inside the text
        #[test]
        fn scan_spans_are_disjoint(text in text_strategy()) {
            let len = text.chars().count();
            let spans = EmojiPattern::global().find_in(&text);

            let mut cursor = 0;
            for span in spans {
                prop_assert!(span.length >= 1);
                prop_assert!(span.start >= cursor);
                prop_assert!(span.start + span.length <= len);
                cursor = span.start + span.length;
            }
        }
    }
}
