//! Rewrite command implementation

use anyhow::{Context, Result};
use clap::Args;
use respan_core::extractor::{remove_overlapping, Mention};
use respan_core::{
    rewrite_entities, EmojiCategory, EmojiPattern, Entity, Extractor, ExtractorConfig, Indexed,
    Payload, PatternExtractor,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::open_output;
use crate::config::{CliConfig, TemplateConfig};
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, OutputFormat};
use crate::templates::{codepoint_list, Template};

/// Arguments for the rewrite command
#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON array of {start, end, replacement} applied as is
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["mention", "list", "hashtag", "url", "emoji"]
    )]
    pub entities: Option<PathBuf>,

    /// Template for @mentions
    #[arg(long, value_name = "TEMPLATE")]
    pub mention: Option<String>,

    /// Template for @user/list references (default: the mention template)
    #[arg(long, value_name = "TEMPLATE")]
    pub list: Option<String>,

    /// Template for #hashtags
    #[arg(long, value_name = "TEMPLATE")]
    pub hashtag: Option<String>,

    /// Template for URLs
    #[arg(long, value_name = "TEMPLATE")]
    pub url: Option<String>,

    /// Template for emoji sequences
    #[arg(long, value_name = "TEMPLATE")]
    pub emoji: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// One caller-supplied replacement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl Indexed for Replacement {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// What an extracted span is
#[derive(Debug, Clone)]
enum Target {
    Entity(Payload),
    Emoji(EmojiCategory),
}

/// Parsed templates, one per category
#[derive(Debug)]
struct Templates {
    mention: Option<Template>,
    list: Option<Template>,
    hashtag: Option<Template>,
    url: Option<Template>,
    emoji: Option<Template>,
}

impl Templates {
    fn parse(config: &TemplateConfig) -> Result<Self> {
        let parse = |source: &Option<String>| source.as_deref().map(Template::parse).transpose();
        let mention = parse(&config.mention)?;
        let list = parse(&config.list)?.or_else(|| mention.clone());

        Ok(Self {
            mention,
            list,
            hashtag: parse(&config.hashtag)?,
            url: parse(&config.url)?,
            emoji: parse(&config.emoji)?,
        })
    }

    fn for_target(&self, target: &Target) -> Option<&Template> {
        match target {
            Target::Entity(Payload::Mention(m)) if m.list_slug.is_empty() => self.mention.as_ref(),
            Target::Entity(Payload::Mention(_)) => self.list.as_ref(),
            Target::Entity(Payload::Hashtag(_)) => self.hashtag.as_ref(),
            Target::Entity(Payload::Url(_)) => self.url.as_ref(),
            Target::Emoji(_) => self.emoji.as_ref(),
        }
    }

    fn render(&self, target: &Target, text: &str) -> String {
        let Some(template) = self.for_target(target) else {
            return text.to_string();
        };
        match target {
            Target::Entity(Payload::Mention(Mention {
                screen_name,
                list_slug,
            })) => template.render(&[
                ("text", text),
                ("screen_name", screen_name.as_str()),
                ("list_slug", list_slug.as_str()),
            ]),
            Target::Entity(Payload::Hashtag(h)) => {
                template.render(&[("text", text), ("hashtag", h.hashtag.as_str())])
            }
            Target::Entity(Payload::Url(u)) => {
                template.render(&[("text", text), ("url", u.url.as_str())])
            }
            Target::Emoji(category) => {
                let codepoints = codepoint_list(text);
                template.render(&[
                    ("text", text),
                    ("emoji", text),
                    ("codepoints", codepoints.as_str()),
                    ("category", category.as_str()),
                ])
            }
        }
    }
}

impl RewriteArgs {
    /// Execute the rewrite command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let text = FileReader::read_input(self.input.as_deref())?;

        let (rewritten, replacements) = match &self.entities {
            Some(path) => apply_replacements(&text, &load_replacements(path)?)?,
            None => self.rewrite_extracted(&text, &config)?,
        };
        log::info!("replaced {replacements} entities");

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(
            format,
            config.output.pretty_json,
            open_output(self.output.as_deref())?,
        );
        formatter.format_rewrite(&rewritten, replacements)?;
        formatter.finish()
    }

    fn templates(&self, config: &CliConfig) -> TemplateConfig {
        let from_args = TemplateConfig {
            mention: self.mention.clone(),
            list: self.list.clone(),
            hashtag: self.hashtag.clone(),
            url: self.url.clone(),
            emoji: self.emoji.clone(),
        };
        from_args.or(config.templates.clone())
    }

    fn rewrite_extracted(&self, text: &str, config: &CliConfig) -> Result<(String, usize)> {
        let template_config = self.templates(config);
        if template_config.is_empty() {
            log::warn!("no templates given, the text is passed through unchanged");
        }
        let templates = Templates::parse(&template_config)?;

        let extractor_config = match &config.extractor.config {
            Some(path) => ExtractorConfig::from_file(path)
                .with_context(|| format!("Failed to load extractor config: {}", path.display()))?,
            None => ExtractorConfig::builtin()?,
        };
        let extractor = PatternExtractor::new(&extractor_config)?;

        let mut spans: Vec<Entity<Target>> = extractor
            .extract_entities(text)
            .into_iter()
            .map(|e| e.map(Target::Entity))
            .collect();
        if templates.emoji.is_some() {
            spans.extend(
                EmojiPattern::global()
                    .find_in(text)
                    .into_iter()
                    .map(|s| Entity::new(s.start, s.end(), Target::Emoji(s.category))),
            );
        }
        spans.retain(|e| templates.for_target(&e.payload).is_some());
        let spans = remove_overlapping(spans);
        log::debug!("{} spans to rewrite", spans.len());

        let rewritten = rewrite_entities(text, &spans, |e, codepoints| {
            let matched: String = codepoints[e.start..e.end].iter().collect();
            templates.render(&e.payload, &matched)
        });
        Ok((rewritten, spans.len()))
    }
}

/// Read a JSON replacement list
pub fn load_replacements(path: &Path) -> Result<Vec<Replacement>> {
    let content = FileReader::read_text(path)?;
    let replacements: Vec<Replacement> = serde_json::from_str(&content)
        .map_err(|e| CliError::InvalidEntities(format!("{}: {e}", path.display())))?;
    Ok(replacements)
}

/// Apply caller-supplied replacements after checking they are well formed
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> Result<(String, usize)> {
    let len = text.chars().count();

    let mut sorted: Vec<&Replacement> = replacements.iter().collect();
    sorted.sort_by_key(|r| r.start);

    let mut cursor = 0;
    for r in &sorted {
        if r.start > r.end || r.end > len {
            return Err(CliError::InvalidEntities(format!(
                "[{}, {}) is outside the text ({len} codepoints)",
                r.start, r.end
            ))
            .into());
        }
        if r.start < cursor {
            return Err(CliError::InvalidEntities(format!(
                "[{}, {}) overlaps an earlier entity ending at {cursor}",
                r.start, r.end
            ))
            .into());
        }
        cursor = r.end;
    }

    let rewritten = rewrite_entities(text, sorted, |r, _| r.replacement.clone());
    Ok((rewritten, replacements.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(start: usize, end: usize, with: &str) -> Replacement {
        Replacement {
            start,
            end,
            replacement: with.to_string(),
        }
    }

    fn args() -> RewriteArgs {
        RewriteArgs {
            input: None,
            output: None,
            entities: None,
            mention: None,
            list: None,
            hashtag: None,
            url: None,
            emoji: None,
            format: None,
            config: None,
        }
    }

    #[test]
    fn test_apply_replacements() {
        let (out, count) = apply_replacements(
            "\u{1F600} hi @bob",
            &[replacement(5, 9, "@BOB"), replacement(0, 1, ":)")],
        )
        .unwrap();
        assert_eq!(out, ":) hi @BOB");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_overlapping_replacements_rejected() {
        let err = apply_replacements("abcdef", &[replacement(0, 3, "x"), replacement(2, 4, "y")])
            .unwrap_err();
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_out_of_range_replacement_rejected() {
        let err = apply_replacements("abc", &[replacement(1, 9, "x")]).unwrap_err();
        assert!(err.to_string().contains("outside the text"));
    }

    #[test]
    fn test_rewrite_extracted_with_templates() {
        let mut args = args();
        args.mention = Some("<{screen_name}>".to_string());
        args.hashtag = Some("[{hashtag}]".to_string());

        let (out, count) = args
            .rewrite_extracted("@ann loves #rust http://x.com", &CliConfig::default())
            .unwrap();
        assert_eq!(out, "<ann> loves [rust] http://x.com");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_list_falls_back_to_mention_template() {
        let mut args = args();
        args.mention = Some("{text}!".to_string());

        let (out, _) = args
            .rewrite_extracted("@ann/team and @bob", &CliConfig::default())
            .unwrap();
        assert_eq!(out, "@ann/team! and @bob!");
    }

    #[test]
    fn test_emoji_template() {
        let mut args = args();
        args.emoji = Some("[{codepoints}]".to_string());

        let (out, count) = args
            .rewrite_extracted("ok \u{1F44D}\u{1F3FD}", &CliConfig::default())
            .unwrap();
        assert_eq!(out, "ok [U+1F44D U+1F3FD]");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_no_templates_leaves_text_alone() {
        let (out, count) = args()
            .rewrite_extracted("@ann #rust \u{1F680}", &CliConfig::default())
            .unwrap();
        assert_eq!(out, "@ann #rust \u{1F680}");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_emoji_category_placeholder() {
        let mut args = args();
        args.emoji = Some("<{category}>".to_string());

        let (out, count) = args
            .rewrite_extracted("3\u{FE0F}\u{20E3} \u{1F44D}\u{1F3FD}", &CliConfig::default())
            .unwrap();
        assert_eq!(out, "<keycap> <modifier>");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_cli_templates_override_config() {
        let mut config = CliConfig::default();
        config.templates.url = Some("LINK".to_string());
        config.templates.hashtag = Some("TAG".to_string());

        let mut args = args();
        args.url = Some("<{url}>".to_string());

        let (out, _) = args
            .rewrite_extracted("#a http://x.com", &config)
            .unwrap();
        assert_eq!(out, "TAG <http://x.com>");
    }

    #[test]
    fn test_bad_template_is_reported() {
        let mut args = args();
        args.url = Some("{link}".to_string());

        let err = args
            .rewrite_extracted("http://x.com", &CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("unknown placeholder {link}"));
    }
}
