//! End-to-end tests for rewriting extracted entities and emoji

#![allow(deprecated)]

use respan_core::emoji::EmojiCategory;
use respan_core::extractor::{Extractor, Hashtag, Payload, Url};
use respan_core::rewrite::legacy::{self, RewriteOptions};
use respan_core::{rewrite_emoji, rewrite_entities, EmojiPattern, Entity, PatternExtractor};

#[test]
fn test_single_entity_round_trip() {
    let text = "hello @bob world";
    let entities = vec![Entity::new(6, 10, "bob")];

    let out = rewrite_entities(text, &entities, |e, _| format!("@{}", e.payload.to_uppercase()));
    assert_eq!(out, "hello @BOB world");
}

#[test]
fn test_ordering_independence() {
    let text = "#a http://x.com #b";
    let hashtag = |start, tag: &str| {
        Entity::new(
            start,
            start + 2,
            Payload::Hashtag(Hashtag {
                hashtag: tag.to_string(),
            }),
        )
    };
    let url = Entity::new(
        3,
        15,
        Payload::Url(Url {
            url: "http://x.com".to_string(),
        }),
    );

    let sorted = vec![hashtag(0, "a"), url.clone(), hashtag(16, "b")];
    let shuffled = vec![hashtag(16, "b"), hashtag(0, "a"), url];

    let render = |e: &Entity<Payload>, _: &[char]| match &e.payload {
        Payload::Hashtag(h) => format!("[#{}]", h.hashtag),
        Payload::Url(u) => format!("[{}]", u.url),
        Payload::Mention(_) => String::new(),
    };

    let expected = "[#a] [http://x.com] [#b]";
    assert_eq!(rewrite_entities(text, sorted, render), expected);
    assert_eq!(rewrite_entities(text, shuffled, render), expected);
}

#[test]
fn test_extractor_matches_hand_built_entities() {
    let extractor = PatternExtractor::builtin().unwrap();
    let entities = extractor.extract_entities("#a http://x.com #b");
    let ranges: Vec<_> = entities.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(ranges, vec![(0, 2), (3, 15), (16, 18)]);
}

#[test]
fn test_astral_prefix_keeps_codepoint_indices() {
    // U+1F600 is four bytes in UTF-8 but one codepoint.
    let text = "\u{1F600}abcd@bob!";
    let extractor = PatternExtractor::builtin().unwrap();
    let mentions = extractor.extract_mentions_or_lists(text);
    assert!(mentions.is_empty(), "mention glued to a word must not match");

    let out = rewrite_entities(text, [(5usize, 9usize)], |_, cps| {
        cps[5..9].iter().collect::<String>().to_uppercase()
    });
    assert_eq!(out, "\u{1F600}abcd@BOB!");
}

#[test]
fn test_family_is_one_emoji() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    let spans = EmojiPattern::global().find_in(family);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[0].length, 7);
    assert_eq!(spans[0].category, EmojiCategory::ZwjSequence);
}

#[test]
fn test_keycap_is_one_emoji() {
    let spans = EmojiPattern::global().find_in("3\u{FE0F}\u{20E3}");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].length, 3);
    assert_eq!(spans[0].category, EmojiCategory::Keycap);
}

#[test]
fn test_plain_text_has_no_emoji() {
    let pattern = EmojiPattern::global();
    assert!(!pattern.contains_emoji("The quick brown fox jumps 42 times"));
    assert!(!pattern.contains_emoji("# * 0 9"));
}

#[test]
fn test_rewrite_emoji_with_skin_tones() {
    let text = "ok \u{1F44D}\u{1F3FD} and \u{1F926}\u{1F3FB}\u{200D}\u{2642}\u{FE0F}";
    let out = rewrite_emoji(text, |span, _| format!("<{}>", span.category));
    assert_eq!(out, "ok <modifier> and <zwj_sequence>");
}

#[test]
fn test_legacy_wrappers_agree_with_rewrite_entities() {
    let extractor = PatternExtractor::builtin().unwrap();
    let text = "cc @ann/friends #rust https://rust-lang.org.";

    let options = RewriteOptions::new()
        .hashtags(|hash, tag| format!("{hash}<{tag}>"))
        .urls(|url| format!("<{url}>"))
        .usernames_or_lists(|at, name, slug| format!("{at}<{name}{}>", slug.unwrap_or("")));
    let chained = legacy::rewrite(&extractor, text, options);

    let entities = extractor.extract_entities(text);
    let direct = rewrite_entities(text, &entities, |e, _| match &e.payload {
        Payload::Hashtag(h) => format!("#<{}>", h.hashtag),
        Payload::Url(u) => format!("<{}>", u.url),
        Payload::Mention(m) => format!("@<{}{}>", m.screen_name, m.list_slug),
    });

    assert_eq!(chained, "cc @<ann/friends> #<rust> <https://rust-lang.org>.");
    assert_eq!(chained, direct);
}
