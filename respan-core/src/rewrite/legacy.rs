//! Single-category rewrite helpers
//!
//! Thin adapters that bind one extractor call to [`rewrite_entities`]. They
//! exist for older callers; new code should call [`rewrite_entities`] with
//! the entities it wants rewritten.

use std::fmt;

use super::rewrite_entities;
use crate::extractor::Extractor;

type HashtagFn<'a> = dyn FnMut(char, &str) -> String + 'a;
type UrlFn<'a> = dyn FnMut(&str) -> String + 'a;
type MentionFn<'a> = dyn FnMut(char, &str, Option<&str>) -> String + 'a;

/// Callbacks for [`rewrite`]; categories left as `None` are not touched
#[derive(Default)]
pub struct RewriteOptions<'a> {
    pub hashtags: Option<Box<HashtagFn<'a>>>,
    pub urls: Option<Box<UrlFn<'a>>>,
    pub usernames_or_lists: Option<Box<MentionFn<'a>>>,
}

impl<'a> RewriteOptions<'a> {
    /// Options with no callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite hashtags with `f(hash_sign, hashtag)`
    pub fn hashtags(mut self, f: impl FnMut(char, &str) -> String + 'a) -> Self {
        self.hashtags = Some(Box::new(f));
        self
    }

    /// Rewrite URLs with `f(url)`
    pub fn urls(mut self, f: impl FnMut(&str) -> String + 'a) -> Self {
        self.urls = Some(Box::new(f));
        self
    }

    /// Rewrite mentions and lists with `f(at_sign, screen_name, list_slug)`
    pub fn usernames_or_lists(
        mut self,
        f: impl FnMut(char, &str, Option<&str>) -> String + 'a,
    ) -> Self {
        self.usernames_or_lists = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for RewriteOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteOptions")
            .field("hashtags", &self.hashtags.is_some())
            .field("urls", &self.urls.is_some())
            .field("usernames_or_lists", &self.usernames_or_lists.is_some())
            .finish()
    }
}

/// Apply every configured callback, hashtags first, then URLs, then mentions
///
/// Each pass extracts from the output of the previous one.
#[deprecated(since = "0.1.0", note = "use `rewrite_entities`")]
#[allow(deprecated)]
pub fn rewrite<X>(extractor: &X, text: &str, options: RewriteOptions<'_>) -> String
where
    X: Extractor + ?Sized,
{
    let RewriteOptions {
        hashtags,
        urls,
        usernames_or_lists,
    } = options;

    let mut text = text.to_string();
    if let Some(f) = hashtags {
        text = rewrite_hashtags(extractor, &text, f);
    }
    if let Some(f) = urls {
        text = rewrite_urls(extractor, &text, f);
    }
    if let Some(f) = usernames_or_lists {
        text = rewrite_usernames_or_lists(extractor, &text, f);
    }
    text
}

/// Rewrite mentions and list references
///
/// `f` receives the lead character of the match (`@` or `＠`), the screen
/// name, and the list slug (with its leading `/`) if there is one.
#[deprecated(since = "0.1.0", note = "use `rewrite_entities`")]
pub fn rewrite_usernames_or_lists<X, F, S>(extractor: &X, text: &str, mut f: F) -> String
where
    X: Extractor + ?Sized,
    F: FnMut(char, &str, Option<&str>) -> S,
    S: AsRef<str>,
{
    let entities = extractor.extract_mentions_or_lists(text);
    rewrite_entities(text, &entities, |entity, codepoints| {
        let at = codepoints.get(entity.start).copied().unwrap_or_default();
        let list_slug = Some(entity.payload.list_slug.as_str()).filter(|s| !s.is_empty());
        f(at, &entity.payload.screen_name, list_slug)
    })
}

/// Rewrite hashtags
///
/// `f` receives the lead character of the match (`#` or `＃`) and the
/// hashtag text.
#[deprecated(since = "0.1.0", note = "use `rewrite_entities`")]
pub fn rewrite_hashtags<X, F, S>(extractor: &X, text: &str, mut f: F) -> String
where
    X: Extractor + ?Sized,
    F: FnMut(char, &str) -> S,
    S: AsRef<str>,
{
    let entities = extractor.extract_hashtags(text);
    rewrite_entities(text, &entities, |entity, codepoints| {
        let hash = codepoints.get(entity.start).copied().unwrap_or_default();
        f(hash, &entity.payload.hashtag)
    })
}

/// Rewrite URLs
#[deprecated(since = "0.1.0", note = "use `rewrite_entities`")]
pub fn rewrite_urls<X, F, S>(extractor: &X, text: &str, mut f: F) -> String
where
    X: Extractor + ?Sized,
    F: FnMut(&str) -> S,
    S: AsRef<str>,
{
    let entities = extractor.extract_urls(text);
    rewrite_entities(text, &entities, |entity, _| f(&entity.payload.url))
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::extractor::PatternExtractor;

    fn extractor() -> PatternExtractor {
        PatternExtractor::builtin().unwrap()
    }

    #[test]
    fn test_rewrite_usernames() {
        let out = rewrite_usernames_or_lists(&extractor(), "hi @bob", |at, name, slug| {
            assert_eq!(at, '@');
            assert!(slug.is_none());
            format!("<a href=\"/{name}\">{at}{name}</a>")
        });
        assert_eq!(out, "hi <a href=\"/bob\">@bob</a>");
    }

    #[test]
    fn test_rewrite_lists() {
        let out = rewrite_usernames_or_lists(&extractor(), "@team/core!", |at, name, slug| {
            format!("[{at}{name}|{}]", slug.unwrap_or("-"))
        });
        assert_eq!(out, "[@team|/core]!");
    }

    #[test]
    fn test_rewrite_hashtags_keeps_fullwidth_sign() {
        let out = rewrite_hashtags(&extractor(), "go \u{FF03}rust", |hash, tag| {
            format!("{hash}{}", tag.to_uppercase())
        });
        assert_eq!(out, "go \u{FF03}RUST");
    }

    #[test]
    fn test_rewrite_urls() {
        let out = rewrite_urls(&extractor(), "see http://x.com.", |url| {
            format!("<{url}>")
        });
        assert_eq!(out, "see <http://x.com>.");
    }

    #[test]
    fn test_rewrite_chains_all_categories() {
        let options = RewriteOptions::new()
            .hashtags(|hash, tag| format!("{hash}[{tag}]"))
            .urls(|url| format!("<{url}>"))
            .usernames_or_lists(|at, name, _| format!("{at}[{name}]"));

        let out = rewrite(&extractor(), "@ann #tag http://x.com", options);
        assert_eq!(out, "@[ann] #[tag] <http://x.com>");
    }

    #[test]
    fn test_rewrite_without_callbacks_is_identity() {
        let out = rewrite(&extractor(), "@ann #tag", RewriteOptions::new());
        assert_eq!(out, "@ann #tag");
    }

    #[test]
    fn test_options_debug() {
        let options = RewriteOptions::new().urls(|u| u.to_string());
        let debug = format!("{options:?}");
        assert!(debug.contains("urls: true"));
        assert!(debug.contains("hashtags: false"));
    }
}
