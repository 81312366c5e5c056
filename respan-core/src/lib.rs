//! Codepoint-indexed entity rewriting and emoji classification
//!
//! Social text APIs report the position of mentions, hashtags, URLs and
//! emoji as codepoint indices rather than byte offsets. This crate takes
//! such spans and rebuilds the text with each span replaced by caller
//! output, leaving everything between them untouched.
//!
//! # Architecture
//!
//! - [`rewrite`]: the span rewriter and per-category helpers
//! - [`emoji`]: a compiled matcher for single and compound emoji sequences
//! - [`extractor`]: the [`Extractor`] seam plus a TOML-configured,
//!   regex-based implementation
//! - [`types`]: entities, spans and codepoint views shared by the above
//!
//! # Example
//!
//! ```rust
//! use respan_core::{rewrite_entities, Extractor, PatternExtractor};
//!
//! let extractor = PatternExtractor::builtin().unwrap();
//! let text = "ping @bob about #rust";
//! let entities = extractor.extract_entities(text);
//!
//! let out = rewrite_entities(text, &entities, |entity, codepoints| {
//!     let raw: String = codepoints[entity.start..entity.end].iter().collect();
//!     format!("<{raw}>")
//! });
//! assert_eq!(out, "ping <@bob> about <#rust>");
//! ```

pub mod emoji;
pub mod error;
pub mod extractor;
pub mod rewrite;
pub mod types;

pub use emoji::{EmojiCategory, EmojiPattern};
pub use error::{Error, Result};
pub use extractor::{Extractor, ExtractorConfig, Payload, PatternExtractor};
pub use rewrite::{rewrite_emoji, rewrite_entities};
pub use types::{Codepoints, EmojiSpan, Entity, Indexed};
