use crate::dom::{Document, NodeId, NodeKind};

/// Text contributed by a line-break element.
pub const LINE_BREAK: &str = "\n";

/// A span of flattened text attributable to one node.
///
/// `origin` is only ever compared for identity; `len` counts characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub origin: NodeId,
    pub len: usize,
}

impl<'a> TextRun<'a> {
    fn new(text: &'a str, origin: NodeId) -> Self {
        Self {
            text,
            origin,
            len: text.chars().count(),
        }
    }
}

/// Flatten the document into text runs in document order.
pub fn flatten(doc: &Document) -> Vec<TextRun<'_>> {
    flatten_children(doc, doc.root())
}

fn flatten_children(doc: &Document, parent: NodeId) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    for &child in doc.children(parent) {
        match doc.kind(child) {
            Some(NodeKind::Text(text)) => runs.push(TextRun::new(text, child)),
            Some(NodeKind::Element(element)) if element.is_line_break() => {
                runs.push(TextRun::new(LINE_BREAK, child))
            }
            Some(NodeKind::Element(_)) => runs.extend(flatten_children(doc, child)),
            Some(NodeKind::Comment(_) | NodeKind::Root) | None => {}
        }
    }
    runs
}

/// Total length in characters of all runs.
pub fn total_len(runs: &[TextRun<'_>]) -> usize {
    runs.iter().map(|r| r.len).sum()
}

/// Concatenated run text.
pub fn flattened_text(runs: &[TextRun<'_>]) -> String {
    runs.iter().map(|r| r.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts<'a>(runs: &[TextRun<'a>]) -> Vec<&'a str> {
        runs.iter().map(|r| r.text).collect()
    }

    #[test]
    fn test_empty_document_has_no_runs() {
        let doc = Document::new();
        assert!(flatten(&doc).is_empty());
    }

    #[test]
    fn test_nested_elements_are_spliced_in_order() {
        let doc = Document::from_markup("<p>one <b>two <i>three</i></b></p>four");
        let runs = flatten(&doc);
        assert_eq!(texts(&runs), vec!["one ", "two ", "three", "four"]);
        assert_eq!(flattened_text(&runs), "one two threefour");
    }

    #[test]
    fn test_line_break_is_one_character() {
        let doc = Document::from_markup("a<br>b");
        let runs = flatten(&doc);
        let br = doc.children(doc.root())[1];

        assert_eq!(texts(&runs), vec!["a", "\n", "b"]);
        assert_eq!(runs[1].origin, br);
        assert_eq!(runs[1].len, 1);
        assert_eq!(total_len(&runs), 3);
    }

    #[test]
    fn test_comments_and_images_contribute_nothing() {
        let doc = Document::from_markup(r#"a<!-- hidden --><img src="x.png">b"#);
        assert_eq!(texts(&flatten(&doc)), vec!["a", "b"]);
    }

    #[test]
    fn test_origins_identify_text_nodes() {
        let doc = Document::from_markup("<b>x</b>y");
        let bold = doc.children(doc.root())[0];
        let x = doc.children(bold)[0];
        let y = doc.children(doc.root())[1];

        let origins: Vec<_> = flatten(&doc).iter().map(|r| r.origin).collect();
        assert_eq!(origins, vec![x, y]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let doc = Document::from_markup("héllo wörld");
        assert_eq!(total_len(&flatten(&doc)), 11);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let doc = Document::from_markup("<div>a<br><span>b</span></div>c");
        assert_eq!(flatten(&doc), flatten(&doc));
    }
}
