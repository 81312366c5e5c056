//! Entity extraction
//!
//! The rewriter never locates entities itself; it consumes whatever an
//! [`Extractor`] hands it. [`PatternExtractor`] is a regex-driven
//! implementation configured from TOML, good enough for the CLI and the
//! legacy wrappers. Any other implementation works as long as it reports
//! valid, non-overlapping codepoint ranges.

mod config;

pub use config::{ExtractorConfig, PatternSection, UrlSection};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Codepoints, Entity};

/// `@screen_name` or `@screen_name/list-slug`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    pub screen_name: String,
    /// Empty, or the slug including its leading `/`
    pub list_slug: String,
}

/// `#hashtag`, without the hash sign
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hashtag {
    pub hashtag: String,
}

/// A URL with its protocol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
}

/// Payload of an entity of any category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    Mention(Mention),
    Hashtag(Hashtag),
    Url(Url),
}

/// Locates entities in text, reporting codepoint ranges
pub trait Extractor {
    /// Mentions and list references
    fn extract_mentions_or_lists(&self, text: &str) -> Vec<Entity<Mention>>;

    /// Hashtags
    fn extract_hashtags(&self, text: &str) -> Vec<Entity<Hashtag>>;

    /// URLs with a protocol
    fn extract_urls(&self, text: &str) -> Vec<Entity<Url>>;

    /// All categories, sorted by start with overlaps removed
    ///
    /// When two entities overlap the earlier one wins; on equal starts URLs
    /// win over hashtags, and hashtags over mentions.
    fn extract_entities(&self, text: &str) -> Vec<Entity<Payload>> {
        let mut entities: Vec<Entity<Payload>> = Vec::new();
        entities.extend(
            self.extract_urls(text)
                .into_iter()
                .map(|e| e.map(Payload::Url)),
        );
        entities.extend(
            self.extract_hashtags(text)
                .into_iter()
                .map(|e| e.map(Payload::Hashtag)),
        );
        entities.extend(
            self.extract_mentions_or_lists(text)
                .into_iter()
                .map(|e| e.map(Payload::Mention)),
        );
        remove_overlapping(entities)
    }
}

/// Sort by start and drop every entity that overlaps one kept before it
pub fn remove_overlapping<T>(mut entities: Vec<Entity<T>>) -> Vec<Entity<T>> {
    entities.sort_by_key(|e| e.start);

    let mut kept: Vec<Entity<T>> = Vec::with_capacity(entities.len());
    let mut cursor = 0;
    for entity in entities {
        if entity.start >= cursor {
            cursor = entity.end;
            kept.push(entity);
        }
    }
    kept
}

/// Regex-driven extractor
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    mentions: Regex,
    hashtags: Regex,
    urls: Regex,
    trim_trailing: Vec<char>,
}

impl PatternExtractor {
    /// Compile an extractor from configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;

        let extractor = Self {
            mentions: compile("mention", &config.mentions.pattern, &["at", "screen_name"])?,
            hashtags: compile("hashtag", &config.hashtags.pattern, &["hash", "hashtag"])?,
            urls: compile("url", &config.urls.pattern, &["url"])?,
            trim_trailing: config.urls.trim_trailing.chars().collect(),
        };
        log::debug!("compiled pattern extractor");
        Ok(extractor)
    }

    /// Extractor using the bundled patterns
    pub fn builtin() -> Result<Self> {
        Self::new(&ExtractorConfig::builtin()?)
    }
}

fn compile(category: &'static str, pattern: &str, required: &[&str]) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        category,
        reason: e.to_string(),
    })?;

    for group in required {
        if !regex.capture_names().flatten().any(|name| name == *group) {
            return Err(Error::InvalidPattern {
                category,
                reason: format!("missing group `{group}`"),
            });
        }
    }
    Ok(regex)
}

impl Extractor for PatternExtractor {
    fn extract_mentions_or_lists(&self, text: &str) -> Vec<Entity<Mention>> {
        let index = Codepoints::new(text);
        let mut entities = Vec::new();

        for caps in self.mentions.captures_iter(text) {
            let (Some(at), Some(name)) = (caps.name("at"), caps.name("screen_name")) else {
                continue;
            };
            let slug = caps.name("list_slug");
            let end = slug.map_or(name.end(), |m| m.end());

            entities.push(Entity::new(
                index.byte_to_codepoint(at.start()),
                index.byte_to_codepoint(end),
                Mention {
                    screen_name: name.as_str().to_string(),
                    list_slug: slug.map_or(String::new(), |m| m.as_str().to_string()),
                },
            ));
        }

        log::trace!("extracted {} mentions", entities.len());
        entities
    }

    fn extract_hashtags(&self, text: &str) -> Vec<Entity<Hashtag>> {
        let index = Codepoints::new(text);
        let urls = self.extract_urls(text);
        let mut entities = Vec::new();

        for caps in self.hashtags.captures_iter(text) {
            let (Some(hash), Some(tag)) = (caps.name("hash"), caps.name("hashtag")) else {
                continue;
            };
            let start = index.byte_to_codepoint(hash.start());
            let end = index.byte_to_codepoint(tag.end());

            // A fragment such as `/#top` belongs to the URL around it.
            if urls.iter().any(|u| start < u.end && u.start < end) {
                continue;
            }

            entities.push(Entity::new(
                start,
                end,
                Hashtag {
                    hashtag: tag.as_str().to_string(),
                },
            ));
        }

        log::trace!("extracted {} hashtags", entities.len());
        entities
    }

    fn extract_urls(&self, text: &str) -> Vec<Entity<Url>> {
        let index = Codepoints::new(text);
        let mut entities = Vec::new();

        for caps in self.urls.captures_iter(text) {
            let Some(url) = caps.name("url") else {
                continue;
            };
            let trimmed = url
                .as_str()
                .trim_end_matches(|c: char| self.trim_trailing.contains(&c));
            if !trimmed
                .split_once("://")
                .is_some_and(|(_, rest)| !rest.is_empty())
            {
                continue;
            }

            entities.push(Entity::new(
                index.byte_to_codepoint(url.start()),
                index.byte_to_codepoint(url.start() + trimmed.len()),
                Url {
                    url: trimmed.to_string(),
                },
            ));
        }

        log::trace!("extracted {} urls", entities.len());
        entities
    }
}
