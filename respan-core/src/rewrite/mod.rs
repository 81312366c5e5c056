//! Entity rewriting
//!
//! Given a text and a set of non-overlapping codepoint spans, produce a new
//! text where each span is replaced by whatever the caller's transform
//! returns for it. Everything outside the spans is copied through untouched.
//!
//! # Contract
//!
//! Entities must not overlap and must lie inside the text. This is the
//! extractor's responsibility and is only checked by debug assertions; a
//! release build given overlapping or out-of-range spans produces garbled
//! output but does not panic.
//!
//! # Example
//!
//! ```rust
//! use respan_core::{rewrite_entities, Entity};
//!
//! let text = "hello @bob world";
//! let entities = vec![Entity::new(6, 10, "bob")];
//! let out = rewrite_entities(text, &entities, |e, _| format!("@{}", e.payload.to_uppercase()));
//! assert_eq!(out, "hello @BOB world");
//! ```

pub mod legacy;

use crate::emoji::EmojiPattern;
use crate::types::{Codepoints, EmojiSpan, Indexed};

/// Rewrite every entity span of `text` with the output of `transform`
///
/// Entities are stably sorted by start index first, so the input order does
/// not matter. `transform` receives the entity and the full codepoint
/// sequence of `text`.
pub fn rewrite_entities<I, E, F, S>(text: &str, entities: I, mut transform: F) -> String
where
    I: IntoIterator<Item = E>,
    E: Indexed,
    F: FnMut(&E, &[char]) -> S,
    S: AsRef<str>,
{
    let codepoints = Codepoints::new(text);

    let mut entities: Vec<E> = entities.into_iter().collect();
    if entities.is_empty() {
        return text.to_string();
    }
    entities.sort_by_key(<E as Indexed>::start);

    log::trace!(
        "rewriting {} entities over {} codepoints",
        entities.len(),
        codepoints.len()
    );

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for entity in &entities {
        let (start, end) = entity.indices();
        debug_assert!(start <= end, "entity [{start}, {end}) is inverted");
        debug_assert!(
            start >= cursor,
            "entity [{start}, {end}) overlaps the previous entity ending at {cursor}"
        );
        debug_assert!(
            end <= codepoints.len(),
            "entity [{start}, {end}) runs past the text ({} codepoints)",
            codepoints.len()
        );

        result.extend(codepoints.slice(cursor, start));
        result.push_str(transform(entity, codepoints.as_slice()).as_ref());
        cursor = end;
    }
    result.extend(codepoints.slice(cursor, codepoints.len()));

    result
}

/// Rewrite every emoji sequence in `text`
///
/// `transform` receives the span and the emoji's text.
pub fn rewrite_emoji<F, S>(text: &str, mut transform: F) -> String
where
    F: FnMut(&EmojiSpan, &str) -> S,
    S: AsRef<str>,
{
    let spans = EmojiPattern::global().find_in(text);
    rewrite_entities(text, spans, |span, codepoints| {
        let emoji: String = codepoints[span.start()..span.end()].iter().collect();
        transform(span, &emoji)
    })
}
