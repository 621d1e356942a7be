use crate::dom::Document;
use crate::rendering::flatten::flatten;
use crate::rendering::highlight::{HighlightConfig, Highlighter};
use crate::rendering::index_map::AbsoluteSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No active highlight configuration.
    Skipped,
    /// The renderer produced identical markup; the tree was left alone.
    Unchanged,
    /// The tree was rewritten.
    Rendered { selection_restored: bool },
}

/// Re-renders the document through the highlighter while keeping the
/// selection at the same absolute character positions.
///
/// Requests made through [`request_render`](Self::request_render) are
/// coalesced: any number of them before the next
/// [`run_pending`](Self::run_pending) produce one render.
#[derive(Debug)]
pub struct RenderCoordinator {
    highlighter: Option<Highlighter>,
    state: RenderState,
    pending: bool,
}

impl Default for RenderCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCoordinator {
    pub fn new() -> Self {
        Self {
            highlighter: None,
            state: RenderState::Idle,
            pending: false,
        }
    }

    /// Replace the highlight configuration. Does not render by itself.
    pub fn set_highlight_config(&mut self, config: HighlightConfig) {
        log::debug!("highlight config set: {config:?}");
        self.highlighter = Some(Highlighter::new(config));
    }

    pub fn clear_highlight_config(&mut self) {
        self.highlighter = None;
    }

    pub fn highlight_config(&self) -> Option<&HighlightConfig> {
        self.highlighter.as_ref().map(Highlighter::config)
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn request_render(&mut self) {
        self.pending = true;
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending
    }

    /// Run one render if any were requested since the last call.
    pub fn run_pending(&mut self, doc: &mut Document) -> Option<RenderOutcome> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        Some(self.render(doc))
    }

    pub fn render(&mut self, doc: &mut Document) -> RenderOutcome {
        if !self.highlighter.as_ref().is_some_and(Highlighter::is_active) {
            return RenderOutcome::Skipped;
        }

        self.state = RenderState::Rendering;
        let outcome = match &self.highlighter {
            Some(highlighter) => rerender(highlighter, doc),
            None => RenderOutcome::Skipped,
        };
        self.state = RenderState::Idle;

        // Requests queued before this render are satisfied by it
        self.pending = false;
        outcome
    }
}

/// A selection that cannot be captured does not block the rewrite; it is
/// left unrestored and reported as `selection_restored: false`.
fn rerender(highlighter: &Highlighter, doc: &mut Document) -> RenderOutcome {
    let captured = doc.selection().map(|selection| {
        let runs = flatten(doc);
        AbsoluteSelection::capture(&runs, selection)
    });

    let before = doc.markup();
    let after = highlighter.render(&before);
    if after == before {
        return RenderOutcome::Unchanged;
    }
    doc.set_markup(&after);

    let selection_restored = match captured {
        Some(Ok(absolute)) => {
            let restored = absolute.restore(&flatten(doc));
            match doc.set_selection(restored) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("could not restore selection {absolute:?}: {e}");
                    false
                }
            }
        }
        Some(Err(e)) => {
            log::debug!("selection not restored: {e}");
            false
        }
        None => false,
    };

    log::debug!("re-rendered document (selection restored: {selection_restored})");
    RenderOutcome::Rendered { selection_restored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{DomPoint, NodeId, Selection};
    use pretty_assertions::assert_eq;

    fn coordinator(words: &[&str]) -> RenderCoordinator {
        let mut c = RenderCoordinator::new();
        c.set_highlight_config(HighlightConfig::new(
            None,
            words.iter().map(|w| w.to_string()).collect(),
        ));
        c
    }

    fn first_text(doc: &Document) -> NodeId {
        doc.children(doc.root())[0]
    }

    #[test]
    fn test_no_config_is_noop() {
        let mut doc = Document::from_markup("hello world");
        let text = first_text(&doc);
        let mut c = RenderCoordinator::new();

        assert_eq!(c.render(&mut doc), RenderOutcome::Skipped);
        assert!(doc.contains(text));
        assert_eq!(c.state(), RenderState::Idle);
    }

    #[test]
    fn test_caret_survives_rewrite() {
        let mut doc = Document::from_markup("hello world!");
        let text = first_text(&doc);
        // caret between "wor" and "ld"
        doc.set_selection(Selection::caret(DomPoint::new(text, 9)))
            .unwrap();
        let mut c = coordinator(&["world"]);

        let outcome = c.render(&mut doc);

        assert_eq!(
            outcome,
            RenderOutcome::Rendered {
                selection_restored: true
            }
        );
        assert_eq!(doc.markup(), r#"hello <span class="hashtag">world</span>!"#);
        let span = doc.children(doc.root())[1];
        let inner = doc.children(span)[0];
        assert_eq!(
            doc.selection(),
            Some(Selection::caret(DomPoint::new(inner, 3)))
        );
    }

    #[test]
    fn test_range_selection_survives_rewrite() {
        let mut doc = Document::from_markup("say hello to world");
        let text = first_text(&doc);
        doc.set_selection(Selection::new(
            DomPoint::new(text, 2),
            DomPoint::new(text, 16),
        ))
        .unwrap();
        let mut c = coordinator(&["hello"]);

        c.render(&mut doc);

        let root = doc.children(doc.root()).to_vec();
        let (say, tail) = (root[0], root[2]);
        // 2 stays in "say ", 16 lands 7 chars into " to world"
        assert_eq!(
            doc.selection(),
            Some(Selection::new(DomPoint::new(say, 2), DomPoint::new(tail, 7)))
        );
    }

    #[test]
    fn test_unchanged_markup_keeps_nodes() {
        let mut doc = Document::from_markup("nothing to see");
        let text = first_text(&doc);
        let mut c = coordinator(&["absent"]);

        assert_eq!(c.render(&mut doc), RenderOutcome::Unchanged);
        assert!(doc.contains(text));
    }

    #[test]
    fn test_capture_miss_still_renders() {
        let mut doc = Document::from_markup("a<br>b");
        doc.set_selection(Selection::caret(DomPoint::new(NodeId::ROOT, 3)))
            .unwrap();
        let mut c = coordinator(&["b"]);

        let outcome = c.render(&mut doc);

        assert_eq!(
            outcome,
            RenderOutcome::Rendered {
                selection_restored: false
            }
        );
        assert_eq!(doc.markup(), r#"a<br><span class="hashtag">b</span>"#);
        // root endpoints survive the rewrite, clamped to the new child count
        assert_eq!(
            doc.selection(),
            Some(Selection::caret(DomPoint::new(NodeId::ROOT, 3)))
        );
    }

    #[test]
    fn test_without_selection_still_renders() {
        let mut doc = Document::from_markup("tag");
        let mut c = coordinator(&["tag"]);

        assert_eq!(
            c.render(&mut doc),
            RenderOutcome::Rendered {
                selection_restored: false
            }
        );
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn test_repeated_render_is_stable() {
        let mut doc = Document::from_markup("one two one");
        let mut c = coordinator(&["one"]);

        c.render(&mut doc);
        let first = doc.markup();
        assert_eq!(c.render(&mut doc), RenderOutcome::Unchanged);
        assert_eq!(doc.markup(), first);
    }

    #[test]
    fn test_requests_are_coalesced() {
        let mut doc = Document::from_markup("x");
        let mut c = coordinator(&["x"]);

        c.request_render();
        c.request_render();
        c.request_render();
        assert!(c.has_pending_render());

        assert!(c.run_pending(&mut doc).is_some());
        assert!(!c.has_pending_render());
        assert_eq!(c.run_pending(&mut doc), None);
    }

    #[test]
    fn test_direct_render_clears_pending_request() {
        let mut doc = Document::from_markup("x");
        let mut c = coordinator(&["x"]);

        c.request_render();
        c.render(&mut doc);
        assert!(!c.has_pending_render());
    }
}
