//! Completion parsing — recovers suggestions from whatever text the model returned.
//!
//! Three stages, first success wins:
//! 1. the whole text (code fences stripped) as `{"tweets": [...]}`
//! 2. the first `{` through the last `}` as the same schema
//! 3. fallback: one suggestion per non-empty line, truncated to `max_chars`
//!
//! Only stages 1-2 are `Structured`; the caller moderates those. `Fallback`
//! output is returned without moderation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::generation::generator::Suggestion;
use crate::llm_client::strip_json_fences;

static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"));

/// Suggestions recovered from a completion, tagged with how they were recovered.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCompletion {
    Structured(Vec<Suggestion>),
    Fallback(Vec<Suggestion>),
}

#[derive(Debug, Deserialize)]
struct TweetsPayload {
    tweets: Vec<TweetItem>,
}

/// Models occasionally return bare strings instead of `{ "text": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TweetItem {
    Object { text: String },
    Bare(String),
}

impl From<TweetItem> for Suggestion {
    fn from(item: TweetItem) -> Self {
        match item {
            TweetItem::Object { text } | TweetItem::Bare(text) => Suggestion { text },
        }
    }
}

/// Parses raw completion text into at most `count` suggestions.
pub fn parse_completion(raw: &str, count: usize, max_chars: usize) -> ParsedCompletion {
    if let Some(tweets) = parse_payload(strip_json_fences(raw)) {
        return ParsedCompletion::Structured(take_suggestions(tweets, count));
    }

    if let Some(tweets) = JSON_OBJECT
        .find(raw)
        .and_then(|m| parse_payload(m.as_str()))
    {
        return ParsedCompletion::Structured(take_suggestions(tweets, count));
    }

    ParsedCompletion::Fallback(split_lines(raw, count, max_chars))
}

fn parse_payload(text: &str) -> Option<Vec<TweetItem>> {
    serde_json::from_str::<TweetsPayload>(text)
        .ok()
        .map(|payload| payload.tweets)
}

fn take_suggestions(tweets: Vec<TweetItem>, count: usize) -> Vec<Suggestion> {
    tweets.into_iter().take(count).map(Suggestion::from).collect()
}

fn split_lines(raw: &str, count: usize, max_chars: usize) -> Vec<Suggestion> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(count)
        .map(|line| Suggestion {
            text: truncate_chars(line, max_chars),
        })
        .collect()
}

/// Truncates to at most `max_chars` Unicode scalar values.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_plain_json_is_structured() {
        let parsed = parse_completion(r#"{"tweets":[{"text":"a"},{"text":"b"}]}"#, 3, 220);
        match parsed {
            ParsedCompletion::Structured(s) => assert_eq!(texts(&s), vec!["a", "b"]),
            other => panic!("expected structured, got {other:?}"),
        }
    }

    #[test]
    fn test_fenced_json_is_structured() {
        let raw = "```json\n{\"tweets\": [{\"text\": \"gm\"}]}\n```";
        assert_eq!(
            parse_completion(raw, 3, 220),
            ParsedCompletion::Structured(vec![Suggestion { text: "gm".into() }])
        );
    }

    #[test]
    fn test_embedded_object_is_extracted() {
        let raw = "Sure! Here you go:\n{\"tweets\": [{\"text\": \"wagmi\"}]}\nEnjoy.";
        assert_eq!(
            parse_completion(raw, 3, 220),
            ParsedCompletion::Structured(vec![Suggestion {
                text: "wagmi".into()
            }])
        );
    }

    #[test]
    fn test_bare_string_items_are_accepted() {
        let parsed = parse_completion(r#"{"tweets": ["one", {"text": "two"}]}"#, 3, 220);
        assert_eq!(
            parsed,
            ParsedCompletion::Structured(vec![
                Suggestion { text: "one".into() },
                Suggestion { text: "two".into() },
            ])
        );
    }

    #[test]
    fn test_structured_is_capped_at_count_but_not_truncated() {
        let long = "x".repeat(300);
        let raw = format!(
            r#"{{"tweets": [{{"text": "{long}"}}, {{"text": "b"}}, {{"text": "c"}}]}}"#
        );
        match parse_completion(&raw, 2, 64) {
            ParsedCompletion::Structured(s) => {
                assert_eq!(s.len(), 2);
                assert_eq!(s[0].text.len(), 300);
            }
            other => panic!("expected structured, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_text_falls_back_to_lines() {
        let parsed = parse_completion("hello\nworld\nfoo", 2, 220);
        assert!(matches!(parsed, ParsedCompletion::Fallback(_)));
        assert_eq!(
            parsed,
            ParsedCompletion::Fallback(vec![
                Suggestion {
                    text: "hello".into()
                },
                Suggestion {
                    text: "world".into()
                },
            ])
        );
    }

    #[test]
    fn test_fallback_skips_blank_lines_and_truncates() {
        let long = "y".repeat(100);
        let raw = format!("\n  first  \r\n\n{long}\n");
        match parse_completion(&raw, 5, 64) {
            ParsedCompletion::Fallback(s) => {
                assert_eq!(s.len(), 2);
                assert_eq!(s[0].text, "first");
                assert_eq!(s[1].text.chars().count(), 64);
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_object_without_tweets_falls_back() {
        let parsed = parse_completion(r#"{"posts": ["nope"]}"#, 3, 220);
        assert!(matches!(parsed, ParsedCompletion::Fallback(_)));
    }

    #[test]
    fn test_empty_completion_yields_empty_fallback() {
        assert_eq!(parse_completion("", 3, 220), ParsedCompletion::Fallback(vec![]));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("🚀🚀🚀", 2), "🚀🚀");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
