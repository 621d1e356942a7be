//! # Markup codec
//!
//! Converts between markup strings and the [`Document`] arena.
//!
//! ```text
//! "a<b>b</b>" → Lexer → [Text, StartTag, Text, EndTag] → parse_into → Document
//! Document → serialize → "a<b>b</b>"
//! ```
//!
//! The lexer uses [Logos] and, like any lossless lexer, covers every byte of
//! the input: bytes it does not recognise (a stray `<`) become text. The
//! same segment stream is used by the highlighter to find text between tags.
//!
//! The parser is deliberately small. It knows about void elements and ignores
//! end tags that close nothing, but it does not implement the HTML5 tree
//! construction rules (implicit `<p>` closing and friends).
//!
//! [Logos]: https://docs.rs/logos

use std::borrow::Cow;

use logos::{Lexer, Logos};

use crate::dom::document::{Document, Element, NodeId, NodeKind};

/// Elements that never have children or an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Raw token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupToken {
    /// `<!-- ... -->`, running to end of input when unterminated
    #[token("<!--", lex_comment)]
    Comment,

    /// `</name ...>`
    #[regex(r"</[A-Za-z][^>]*>")]
    EndTag,

    /// `<name attr="value" ...>`, quoted values may contain `>`
    #[regex(r#"<[A-Za-z]([^>"']|"[^"]*"|'[^']*')*>"#)]
    StartTag,

    /// Character data
    #[regex(r"[^<]+")]
    Text,
}

fn lex_comment(lex: &mut Lexer<MarkupToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("-->") {
        Some(end) => lex.bump(end + 3),
        None => lex.bump(rest.len()),
    }
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Text,
    StartTag,
    EndTag,
    Comment,
}

/// A slice of markup with its kind. Adjacent text is always merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

/// Split markup into tag, comment and text segments.
///
/// Concatenating the segment texts gives back the input.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut out: Vec<Segment<'_>> = Vec::new();
    let mut lexer = MarkupToken::lexer(input);
    let mut text_start: Option<usize> = None;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(MarkupToken::Comment) => SegmentKind::Comment,
            Ok(MarkupToken::EndTag) => SegmentKind::EndTag,
            Ok(MarkupToken::StartTag) => SegmentKind::StartTag,
            // Unrecognised bytes (a lone `<`) are character data
            Ok(MarkupToken::Text) | Err(()) => SegmentKind::Text,
        };

        if kind == SegmentKind::Text {
            if text_start.is_none() {
                text_start = Some(span.start);
            }
            continue;
        }
        if let Some(start) = text_start.take() {
            out.push(Segment {
                kind: SegmentKind::Text,
                text: &input[start..span.start],
            });
        }
        out.push(Segment {
            kind,
            text: &input[span],
        });
    }

    if let Some(start) = text_start {
        out.push(Segment {
            kind: SegmentKind::Text,
            text: &input[start..],
        });
    }

    out
}

/// Lowercased tag name of a start or end tag segment.
pub fn tag_name(raw: &str) -> String {
    raw.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Parse a start tag into an element, returning whether it was written
/// self-closing (`<br/>`).
pub fn parse_start_tag(raw: &str) -> (Element, bool) {
    let inner = raw.strip_prefix('<').unwrap_or(raw);
    let inner = inner.strip_suffix('>').unwrap_or(inner);
    let self_closing = inner.trim_end().ends_with('/');
    let inner = if self_closing {
        inner.trim_end().trim_end_matches('/')
    } else {
        inner
    };

    let name_len = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    let mut element = Element::new(&inner[..name_len]);

    let mut rest = &inner[name_len..];
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            break;
        }

        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after_eq) => {
                let (value, remaining) = split_attribute_value(after_eq.trim_start());
                rest = remaining;
                html_escape::decode_html_entities(value).into_owned()
            }
            None => String::new(),
        };

        if !name.is_empty() {
            element.attributes.push((name, value));
        }
    }

    (element, self_closing)
}

fn split_attribute_value(input: &str) -> (&str, &str) {
    for quote in ['"', '\''] {
        if let Some(quoted) = input.strip_prefix(quote) {
            return match quoted.find(quote) {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                None => (quoted, ""),
            };
        }
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    (&input[..end], &input[end..])
}

/// Parse `html` and append the resulting nodes under `parent`.
pub fn parse_into(doc: &mut Document, parent: NodeId, html: &str) {
    // Bottom entry is `parent` and is never popped
    let mut open: Vec<(NodeId, String)> = vec![(parent, String::new())];

    for segment in segments(html) {
        let current = open.last().map_or(parent, |(id, _)| *id);
        match segment.kind {
            SegmentKind::Text => {
                let text = html_escape::decode_html_entities(segment.text).into_owned();
                append_or_warn(doc, current, NodeKind::Text(text));
            }
            SegmentKind::Comment => {
                let body = segment
                    .text
                    .strip_prefix("<!--")
                    .unwrap_or(segment.text)
                    .trim_end_matches("-->");
                append_or_warn(doc, current, NodeKind::Comment(body.to_string()));
            }
            SegmentKind::StartTag => {
                let (element, self_closing) = parse_start_tag(segment.text);
                let tag = element.tag.clone();
                let void = element.is_void();
                if let Some(id) = append_or_warn(doc, current, NodeKind::Element(element))
                    && !void
                    && !self_closing
                {
                    open.push((id, tag));
                }
            }
            SegmentKind::EndTag => {
                let name = tag_name(segment.text);
                match open.iter().skip(1).rposition(|(_, tag)| *tag == name) {
                    Some(position) => open.truncate(position + 1),
                    None => log::debug!("ignoring stray end tag </{name}>"),
                }
            }
        }
    }
}

fn append_or_warn(doc: &mut Document, parent: NodeId, kind: NodeKind) -> Option<NodeId> {
    match doc.append(parent, kind) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("dropping parsed node: {e}");
            None
        }
    }
}

/// Serialize the children of `id` back to markup.
pub fn serialize(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for &child in doc.children(id) {
        write_node(doc, child, &mut out);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(kind) = doc.kind(id) else {
        return;
    };
    match kind {
        NodeKind::Root => {
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
        }
        NodeKind::Text(text) => out.push_str(&html_escape::encode_text(text)),
        NodeKind::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&encode_attribute(value));
                out.push('"');
            }
            out.push('>');
            if element.is_void() {
                return;
            }
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn encode_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
