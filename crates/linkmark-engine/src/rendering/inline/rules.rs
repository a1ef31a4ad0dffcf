//! Ordered inline substitution rules.
//!
//! The table is applied top to bottom, each rule once over the whole text,
//! left to right and non-overlapping. Order is part of the contract: strong
//! runs before emphasis so a single `*` never eats half of a `**` pair.
//! Links, code spans and `[text](url)` targets reach this table as opaque
//! placeholders (see [`super::transform`]).

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::flavor::InlineFlavor;

static STRONG_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static STRONG_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static EMPHASIS_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static EMPHASIS_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static EXPLICIT_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Strong,
    Emphasis,
    /// `[text](url)`
    Link,
}

/// What may sit immediately outside a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flank {
    Any,
    /// The delimiter itself may not touch the match on either side.
    NotDelimiter(char),
    /// Neither the delimiter nor a word character may touch the match.
    NotDelimiterOrWord(char),
}

impl Flank {
    fn allows(self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let blocked = |c: Option<char>, delim: char, word: bool| {
            c.is_some_and(|c| c == delim || (word && c.is_alphanumeric()))
        };
        match self {
            Flank::Any => true,
            Flank::NotDelimiter(d) => !blocked(before, d, false) && !blocked(after, d, false),
            Flank::NotDelimiterOrWord(d) => !blocked(before, d, true) && !blocked(after, d, true),
        }
    }
}

/// One pure text-to-text substitution.
pub struct InlineRule {
    pub name: &'static str,
    pub style: InlineStyle,
    pattern: &'static Lazy<Regex>,
    flank: Flank,
}

/// The fixed substitution order.
pub static RULES: [InlineRule; 5] = [
    InlineRule {
        name: "strong-stars",
        style: InlineStyle::Strong,
        pattern: &STRONG_STARS,
        flank: Flank::Any,
    },
    InlineRule {
        name: "strong-underscores",
        style: InlineStyle::Strong,
        pattern: &STRONG_UNDERSCORES,
        flank: Flank::Any,
    },
    InlineRule {
        name: "emphasis-star",
        style: InlineStyle::Emphasis,
        pattern: &EMPHASIS_STAR,
        flank: Flank::NotDelimiter('*'),
    },
    InlineRule {
        name: "emphasis-underscore",
        style: InlineStyle::Emphasis,
        pattern: &EMPHASIS_UNDERSCORE,
        flank: Flank::NotDelimiterOrWord('_'),
    },
    InlineRule {
        name: "explicit-link",
        style: InlineStyle::Link,
        pattern: &EXPLICIT_LINK,
        flank: Flank::Any,
    },
];

impl InlineRule {
    /// Applies this rule once across `text`.
    ///
    /// A candidate rejected by its flank check is retried one char further
    /// on, so a valid match starting inside a rejected one is still found.
    pub fn apply<F: InlineFlavor + ?Sized>(&self, text: &str, flavor: &F) -> String {
        let re: &Regex = self.pattern;
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search = 0;

        while search <= text.len() {
            let Some(caps) = re.captures_at(text, search) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if !self.flank.allows(text, whole.start(), whole.end()) {
                search = whole.start() + text[whole.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            out.push_str(&text[copied..whole.start()]);
            out.push_str(&self.render(&caps, flavor));
            copied = whole.end();
            search = whole.end();
        }

        out.push_str(&text[copied..]);
        out
    }

    fn render<F: InlineFlavor + ?Sized>(&self, caps: &Captures<'_>, flavor: &F) -> String {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        match self.style {
            InlineStyle::Strong => flavor.strong(group(1)),
            InlineStyle::Emphasis => flavor.emphasis(group(1)),
            InlineStyle::Link => flavor.link(group(1), group(2)),
        }
    }
}

/// Byte ranges of the `url` part of every `[text](url)` in `text`.
pub fn link_urls(text: &str) -> Vec<Range<usize>> {
    EXPLICIT_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.range())
        .collect()
}

/// Runs every rule in [`RULES`] order over `text`.
pub fn apply_rules<F: InlineFlavor + ?Sized>(text: &str, flavor: &F) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc, flavor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::inline::flavor::{Html, PlainText};
    use rstest::rstest;

    #[test]
    fn strong_precedes_emphasis() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        let strong = names.iter().position(|n| *n == "strong-stars").unwrap();
        let em = names.iter().position(|n| *n == "emphasis-star").unwrap();
        assert!(strong < em);
    }

    #[rstest]
    #[case::strong_stars("a **b** c", "a b c")]
    #[case::strong_underscores("a __b__ c", "a b c")]
    #[case::emphasis_star("a *b* c", "a b c")]
    #[case::emphasis_underscore("a _b_ c", "a b c")]
    #[case::mixed("**bold** and *it*", "bold and it")]
    #[case::link("see [docs](https://x.io)", "see docs (https://x.io)")]
    #[case::unmatched_strong("**open", "**open")]
    #[case::unmatched_emphasis("a * b", "a * b")]
    #[case::snake_case("snake_case_name", "snake_case_name")]
    fn plain_text_strips_syntax(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_rules(input, &PlainText), expected);
    }

    #[rstest]
    #[case::strong("**b**", "<strong>b</strong>")]
    #[case::emphasis("*i*", "<em>i</em>")]
    #[case::both("**b** *i*", "<strong>b</strong> <em>i</em>")]
    #[case::link("[t](u)", "<a href=\"u\">t</a>")]
    fn html_emits_tags(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_rules(input, &Html::default()), expected);
    }

    #[test]
    fn finds_link_targets() {
        assert_eq!(link_urls("a [x](u1) [y](https://v) [z]()"), vec![6..8, 14..23]);
    }

    #[test]
    fn single_star_does_not_consume_half_a_strong_run() {
        // `*a**` must not turn into emphasis of `a` followed by a stray star.
        assert_eq!(apply_rules("*a**", &PlainText), "*a**");
    }

    #[test]
    fn rejected_candidate_does_not_hide_later_match() {
        assert_eq!(apply_rules("**x *y*", &Html::default()), "**x <em>y</em>");
    }
}
