//! Highlight rendering: markup in, markup out.
//!
//! Every pass works on the decoded text between tags, so a match can never
//! land inside tag syntax, and the output of [`Highlighter::render`] is a
//! fixed point of the renderer.

use std::ops::Range;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dom::markup::{self, SegmentKind};

/// Opening tag wrapped around every highlighted match.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="hashtag">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";
pub const HIGHLIGHT_CLASS: &str = "hashtag";

/// Which substrings get highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
}

impl HighlightConfig {
    pub fn new(regex: Option<String>, words: Vec<String>) -> Self {
        Self { regex, words }
    }

    /// False when neither a pattern nor a non-empty word is configured.
    pub fn is_active(&self) -> bool {
        self.regex.as_deref().is_some_and(|r| !r.is_empty())
            || self.words.iter().any(|w| !w.is_empty())
    }
}

/// A [`HighlightConfig`] with its pattern compiled.
#[derive(Debug, Clone)]
pub struct Highlighter {
    config: HighlightConfig,
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter. A pattern that fails to compile is logged and
    /// disables only the regex pass.
    pub fn new(config: HighlightConfig) -> Self {
        let pattern = config
            .regex
            .as_deref()
            .filter(|src| !src.is_empty())
            .and_then(|src| match Regex::new(src) {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("ignoring invalid highlight pattern {src:?}: {e}");
                    None
                }
            });
        Self { config, pattern }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.config.is_active()
    }

    pub fn render(&self, markup: &str) -> String {
        if !self.is_active() {
            return markup.to_string();
        }

        let mut out = strip_highlights(markup);

        if let Some(pattern) = &self.pattern {
            out = map_text(&out, |text| {
                wrap_ranges(text, pattern.find_iter(text).map(|m| m.range()))
            });
        }

        for word in self.config.words.iter().filter(|w| !w.is_empty()) {
            out = map_text(&out, |text| {
                wrap_ranges(
                    text,
                    text.match_indices(word.as_str())
                        .map(|(start, m)| start..start + m.len()),
                )
            });
        }

        collapse_nested_highlights(&out)
    }
}

/// Remove every highlight wrapper, keeping its content.
///
/// Text on either side of a removed wrapper can join into new tag syntax,
/// so passes repeat until nothing changes. Each changing pass drops at
/// least one tag.
pub fn strip_highlights(markup: &str) -> String {
    let mut out = rewrite_highlight_spans(markup, false);
    loop {
        let next = rewrite_highlight_spans(&out, false);
        if next == out {
            return out;
        }
        out = next;
    }
}

/// Merge highlight spans nested inside other highlight spans into the
/// outermost one.
pub fn collapse_nested_highlights(markup: &str) -> String {
    rewrite_highlight_spans(markup, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenSpan {
    Highlight,
    Other,
}

fn is_highlight_tag(raw: &str) -> bool {
    let (element, _) = markup::parse_start_tag(raw);
    element.tag == "span"
        && element.attributes.len() == 1
        && element.attribute("class") == Some(HIGHLIGHT_CLASS)
}

fn rewrite_highlight_spans(html: &str, keep_outermost: bool) -> String {
    let mut out = String::with_capacity(html.len());
    let mut open: Vec<OpenSpan> = Vec::new();
    let inside_highlight = |open: &[OpenSpan]| open.contains(&OpenSpan::Highlight);

    for segment in markup::segments(html) {
        match segment.kind {
            SegmentKind::StartTag if markup::tag_name(segment.text) == "span" => {
                let (_, self_closing) = markup::parse_start_tag(segment.text);
                if self_closing {
                    out.push_str(segment.text);
                } else if is_highlight_tag(segment.text) {
                    if keep_outermost && !inside_highlight(&open) {
                        out.push_str(HIGHLIGHT_OPEN);
                    }
                    open.push(OpenSpan::Highlight);
                } else {
                    out.push_str(segment.text);
                    open.push(OpenSpan::Other);
                }
            }
            SegmentKind::EndTag if markup::tag_name(segment.text) == "span" => {
                match open.pop() {
                    Some(OpenSpan::Highlight) => {
                        if keep_outermost && !inside_highlight(&open) {
                            out.push_str(HIGHLIGHT_CLOSE);
                        }
                    }
                    Some(OpenSpan::Other) | None => out.push_str(segment.text),
                }
            }
            _ => out.push_str(segment.text),
        }
    }

    out
}

/// Rewrite each text segment through `f`, which receives decoded text and
/// returns markup, or `None` to keep the segment verbatim.
fn map_text(html: &str, f: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(html.len());
    for segment in markup::segments(html) {
        if segment.kind != SegmentKind::Text {
            out.push_str(segment.text);
            continue;
        }
        let decoded = html_escape::decode_html_entities(segment.text);
        match f(&decoded) {
            Some(rewritten) => out.push_str(&rewritten),
            None => out.push_str(segment.text),
        }
    }
    out
}

/// Wrap the given non-overlapping, ascending byte ranges of `text` in
/// highlight spans. Empty ranges are skipped. Returns `None` if nothing was
/// wrapped.
fn wrap_ranges(text: &str, ranges: impl Iterator<Item = Range<usize>>) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut wrapped = false;

    for range in ranges.filter(|r| !r.is_empty()) {
        out.push_str(&html_escape::encode_text(&text[last..range.start]));
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&html_escape::encode_text(&text[range.clone()]));
        out.push_str(HIGHLIGHT_CLOSE);
        last = range.end;
        wrapped = true;
    }

    if !wrapped {
        return None;
    }
    out.push_str(&html_escape::encode_text(&text[last..]));
    Some(out)
}
