use crate::bridge::{BridgeQueue, EditorEvent};
use crate::dom::{Document, DocumentError, DomPoint, Element, NodeId, NodeKind, Selection};
use crate::editing::commands::{CommandBackend, NativeCommand, active_styles};
use crate::editing::surface::{SurfaceStyle, css_value};
use crate::rendering::flatten::{flatten, flattened_text};
use crate::rendering::{
    AbsoluteSelection, HighlightConfig, RenderCoordinator, RenderOutcome, SelectionError,
};

/// Key codes that move the caret without producing input.
pub const KEY_LEFT: u32 = 37;
pub const KEY_RIGHT: u32 = 39;

/// What one scheduler tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Outcome of the coalesced render, if one was pending.
    pub rendered: Option<RenderOutcome>,
    /// The host should be signalled to pull queued messages.
    pub signal_host: bool,
}

/// The editing surface as seen by the embedding host.
///
/// Owns the document, the render coordinator and the outbound bridge. Native
/// formatting is delegated to `B`. Nothing here calls the host directly:
/// events are queued and the host learns about them through [`tick`].
///
/// [`tick`]: Editor::tick
pub struct Editor<B: CommandBackend> {
    document: Document,
    renderer: RenderCoordinator,
    bridge: BridgeQueue,
    backend: B,
    saved_range: Option<Selection>,
    placeholder_text: String,
    placeholder_visible: bool,
    style: SurfaceStyle,
}

impl<B: CommandBackend> Editor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            document: Document::new(),
            renderer: RenderCoordinator::new(),
            bridge: BridgeQueue::new(),
            backend,
            saved_range: None,
            placeholder_text: String::new(),
            placeholder_visible: true,
            style: SurfaceStyle::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // Lifecycle

    /// The surface finished loading: announce it and take focus.
    pub fn load(&mut self) -> RenderOutcome {
        self.emit(EditorEvent::Ready);
        self.focus()
    }

    /// Replace the content and render it immediately. Each image queues an
    /// `updateHeight`, since loading it can change the content height.
    pub fn set_html(&mut self, html: &str) -> RenderOutcome {
        self.document.set_markup(html);
        self.update_placeholder();
        let outcome = self.render_now();

        let doc = &self.document;
        let images = doc
            .descendants(NodeId::ROOT)
            .filter(|&id| doc.element(id).is_some_and(|e| e.tag == "img"))
            .count();
        for _ in 0..images {
            self.emit(EditorEvent::UpdateHeight);
        }
        outcome
    }

    pub fn html(&self) -> String {
        self.document.markup()
    }

    /// Plain text, line breaks included as `\n`.
    pub fn text(&self) -> String {
        flattened_text(&flatten(&self.document))
    }

    /// Collapse the caret to the end of the content, focus, and render.
    pub fn focus(&mut self) -> RenderOutcome {
        let end = self.document.children(NodeId::ROOT).len();
        let caret = Selection::caret(DomPoint::new(NodeId::ROOT, end));
        if let Err(e) = self.document.set_selection(caret) {
            log::warn!("could not place caret at end of content: {e}");
        }
        self.handle_focus();
        self.render_now()
    }

    pub fn blur(&mut self) {
        self.document.clear_selection();
        self.handle_blur();
    }

    // Rendering

    /// Replace the highlight options and re-render straight away.
    pub fn set_highlight_options(
        &mut self,
        regex: Option<String>,
        words: Option<Vec<String>>,
    ) -> RenderOutcome {
        self.renderer
            .set_highlight_config(HighlightConfig::new(regex, words.unwrap_or_default()));
        self.render_now()
    }

    pub fn highlight_config(&self) -> Option<&HighlightConfig> {
        self.renderer.highlight_config()
    }

    pub fn render_now(&mut self) -> RenderOutcome {
        let outcome = self.renderer.render(&mut self.document);
        self.after_render(outcome);
        outcome
    }

    fn after_render(&mut self, outcome: RenderOutcome) {
        // The saved range pointed into the replaced nodes
        if let RenderOutcome::Rendered {
            selection_restored: true,
        } = outcome
        {
            self.backup_range();
        }
    }

    /// Run deferred work: the coalesced render first, then the bridge
    /// trigger, so a render never splits a batch of messages.
    pub fn tick(&mut self) -> TickOutcome {
        let rendered = self.renderer.run_pending(&mut self.document);
        if let Some(outcome) = rendered {
            self.after_render(outcome);
        }
        TickOutcome {
            rendered,
            signal_host: self.bridge.fire_trigger(),
        }
    }

    pub fn has_pending_work(&self) -> bool {
        self.renderer.has_pending_render() || self.bridge.is_trigger_pending()
    }

    // Bridge

    /// Queue an event for the host. Returns true if a trigger was armed.
    pub fn emit(&mut self, event: EditorEvent) -> bool {
        self.bridge.enqueue(event.to_string())
    }

    pub fn take_queued_messages(&mut self) -> Vec<String> {
        self.bridge.drain()
    }

    /// Drain the queue as the JSON array the host parses.
    pub fn command_queue_json(&mut self) -> Result<String, serde_json::Error> {
        self.bridge.drain_json()
    }

    pub fn custom_action(&mut self, action: &str) {
        self.emit(EditorEvent::Action(action.to_string()));
    }

    pub fn update_height(&mut self) {
        self.emit(EditorEvent::UpdateHeight);
    }

    // Surface events

    pub fn handle_input(&mut self) {
        self.update_placeholder();
        self.backup_range();

        if let Some(focus) = self.document.selection().map(|s| s.focus) {
            let text = self
                .document
                .text_of(focus.node)
                .filter(|text| !text.is_empty())
                .map(String::from);
            if let Some(text) = text {
                self.emit(EditorEvent::InputAction {
                    text,
                    offset: focus.offset,
                });
            }
        }

        self.emit(EditorEvent::Input);
        self.renderer.request_render();
    }

    pub fn handle_focus(&mut self) {
        self.backup_range();
        self.emit(EditorEvent::Focus);
    }

    pub fn handle_blur(&mut self) {
        self.emit(EditorEvent::Blur);
    }

    pub fn handle_click(&mut self) {
        self.emit(EditorEvent::Click);
    }

    pub fn handle_selection_change(&mut self) {
        self.backup_range();
        self.emit_position();
    }

    pub fn handle_key_up(&mut self, key_code: u32) {
        if key_code == KEY_LEFT || key_code == KEY_RIGHT {
            self.emit_position();
        }
    }

    fn emit_position(&mut self) {
        let styles = active_styles(&self.backend);
        self.emit(EditorEvent::Position(styles));
    }

    // Native commands

    pub fn exec(&mut self, command: NativeCommand) {
        if command.needs_saved_range() {
            self.restore_range();
        }
        for invocation in command.invocations() {
            self.backend
                .execute(invocation.name, invocation.value.as_deref());
        }
        if command.reports_input() {
            self.emit(EditorEvent::Input);
        }
        if let NativeCommand::InsertImage { .. } = command {
            self.emit(EditorEvent::UpdateHeight);
        }
    }

    // Selection

    pub fn backup_range(&mut self) {
        if let Some(selection) = self.document.selection() {
            self.saved_range = Some(selection);
        }
    }

    /// Reapply the last backed-up range. Returns false if there is none or
    /// it no longer fits the document.
    pub fn restore_range(&mut self) -> bool {
        let Some(saved) = self.saved_range else {
            return false;
        };
        match self.document.set_selection(saved) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("saved range no longer valid: {e}");
                false
            }
        }
    }

    pub fn saved_range(&self) -> Option<Selection> {
        self.saved_range
    }

    pub fn range_selection_exists(&self) -> bool {
        self.document
            .selection()
            .is_some_and(|selection| !selection.is_collapsed())
    }

    pub fn range_or_caret_selection_exists(&self) -> bool {
        self.document.selection().is_some()
    }

    /// The selection as character offsets into the plain text.
    pub fn absolute_selection(&self) -> Result<Option<AbsoluteSelection>, SelectionError> {
        let runs = flatten(&self.document);
        self.document
            .selection()
            .map(|selection| AbsoluteSelection::capture(&runs, selection))
            .transpose()
    }

    /// Select by character offsets into the plain text.
    pub fn select_absolute(&mut self, anchor: usize, focus: usize) -> Result<(), DocumentError> {
        let selection = AbsoluteSelection::new(anchor, focus).restore(&flatten(&self.document));
        self.document.set_selection(selection)?;
        self.backup_range();
        Ok(())
    }

    // Text editing

    /// Replace `base`, which ends at the caret, with `mention` and put the
    /// caret after it.
    pub fn insert_mention(&mut self, base: &str, mention: &str) -> bool {
        if base.is_empty() || mention.is_empty() {
            return false;
        }
        let Some(focus) = self.document.selection().map(|s| s.focus) else {
            return false;
        };
        let Some(text) = self.document.text_of(focus.node) else {
            log::debug!("mention ignored, focus is not in text: {focus:?}");
            return false;
        };
        let Some(start) = focus.offset.checked_sub(base.chars().count()) else {
            return false;
        };

        let (before, _) = split_at_char(text, start);
        let (_, after) = split_at_char(text, focus.offset);
        let replaced = format!("{before}{mention}{after}");
        let caret = DomPoint::new(focus.node, start + mention.chars().count());

        let applied = self
            .document
            .set_text(focus.node, replaced)
            .and_then(|()| self.document.set_selection(Selection::caret(caret)));
        if let Err(e) = applied {
            log::warn!("mention insertion failed: {e}");
            return false;
        }

        self.emit(EditorEvent::Input);
        true
    }

    /// Wrap the backed-up selection in a link. Only selections within a
    /// single text node can be wrapped.
    pub fn insert_link(&mut self, url: &str, title: &str) -> bool {
        self.restore_range();
        let linked = match self.wrap_selection_in_link(url, title) {
            Ok(linked) => linked,
            Err(e) => {
                log::warn!("link insertion failed: {e}");
                false
            }
        };
        self.emit(EditorEvent::Input);
        linked
    }

    fn wrap_selection_in_link(&mut self, url: &str, title: &str) -> Result<bool, DocumentError> {
        let Some(selection) = self.document.selection() else {
            return Ok(false);
        };
        let (anchor, focus) = (selection.anchor, selection.focus);
        if selection.is_collapsed() || anchor.node != focus.node {
            return Ok(false);
        }
        let node = anchor.node;
        let Some(text) = self.document.text_of(node) else {
            return Ok(false);
        };

        let (start, end) = (anchor.offset.min(focus.offset), anchor.offset.max(focus.offset));
        let (before, rest) = split_at_char(text, start);
        let (selected, after) = split_at_char(rest, end - start);
        let (before, selected, after) = (
            before.to_string(),
            selected.to_string(),
            after.to_string(),
        );
        let selected_len = selected.chars().count();

        let link = Element::new("a")
            .with_attribute("href", url)
            .with_attribute("title", title);

        self.document.set_text(node, before)?;
        let link = self.document.insert_after(node, NodeKind::Element(link))?;
        let inner = self.document.append(link, NodeKind::Text(selected))?;
        if !after.is_empty() {
            self.document.insert_after(link, NodeKind::Text(after))?;
        }
        self.document.set_selection(Selection::new(
            DomPoint::new(inner, 0),
            DomPoint::new(inner, selected_len),
        ))?;
        Ok(true)
    }

    /// `href` of the link the selection sits in.
    ///
    /// Links following the anchor node on the same level win; more than one
    /// is ambiguous and yields `None`. Otherwise the nearest enclosing link
    /// is used.
    pub fn selected_href(&self) -> Option<String> {
        let anchor = self.document.selection()?.anchor.node;

        let following: Vec<&str> = self
            .following_siblings(anchor)
            .filter_map(|id| self.document.element(id))
            .filter(|element| element.tag == "a")
            .map(|element| element.attribute("href").unwrap_or_default())
            .collect();

        let href = match following.as_slice() {
            [] => {
                let parent = self.document.parent(anchor)?;
                let link = self.document.closest_element(parent, "a")?;
                self.document.element(link)?.attribute("href")?
            }
            [only] => *only,
            _ => return None,
        };
        (!href.is_empty()).then(|| href.to_string())
    }

    fn following_siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let siblings = self
            .document
            .parent(id)
            .map(|parent| self.document.children(parent))
            .unwrap_or_default();
        let position = siblings
            .iter()
            .position(|&s| s == id)
            .map_or(siblings.len(), |p| p + 1);
        siblings[position..].iter().copied()
    }

    // Placeholder

    pub fn set_placeholder_text(&mut self, text: impl Into<String>) {
        self.placeholder_text = text.into();
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    // Surface style

    pub fn surface_style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn set_font_size(&mut self, size: impl Into<String>) {
        self.style.font_size = css_value(size);
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.style.background_color = css_value(color);
    }

    pub fn set_base_text_color(&mut self, color: impl Into<String>) {
        self.style.base_text_color = css_value(color);
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.style.height = css_value(height);
    }

    pub fn set_line_height(&mut self, height: impl Into<String>) {
        self.style.line_height = css_value(height);
    }

    pub fn line_height(&self) -> Option<&str> {
        self.style.line_height.as_deref()
    }

    pub fn set_editor_attribute(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.style.set_attribute(name, value)
    }

    fn update_placeholder(&mut self) {
        let doc = &self.document;
        let has_content = doc.contains_element("img")
            || doc
                .descendants(NodeId::ROOT)
                .any(|id| doc.text_of(id).is_some_and(|text| !text.is_empty()));
        self.placeholder_visible = !has_content;
    }
}

/// Split at the `n`th char, clamping to the end of `text`.
fn split_at_char(text: &str, n: usize) -> (&str, &str) {
    let byte = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    text.split_at(byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::commands::RecordingBackend;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn editor(html: &str) -> Editor<RecordingBackend> {
        let mut editor = Editor::new(RecordingBackend::default());
        editor.set_html(html);
        editor
    }

    fn root_child(editor: &Editor<RecordingBackend>, i: usize) -> NodeId {
        editor.document().children(NodeId::ROOT)[i]
    }

    fn select(editor: &mut Editor<RecordingBackend>, anchor: DomPoint, focus: DomPoint) {
        editor
            .document_mut()
            .set_selection(Selection::new(anchor, focus))
            .unwrap();
    }

    #[test]
    fn test_load_announces_ready_then_focus() {
        let mut editor = editor("hello");
        editor.load();

        assert_eq!(editor.take_queued_messages(), vec!["ready", "focus"]);
        assert_eq!(
            editor.document().selection(),
            Some(Selection::caret(DomPoint::new(NodeId::ROOT, 1)))
        );
    }

    #[test]
    fn test_input_burst_signals_once_and_keeps_order() {
        let mut editor = editor("");
        editor.handle_input();
        editor.handle_focus();
        editor.handle_click();

        let tick = editor.tick();
        assert!(tick.signal_host);
        assert!(!editor.tick().signal_host);
        assert_eq!(
            editor.take_queued_messages(),
            vec!["input", "focus", "click/"]
        );
    }

    #[test]
    fn test_input_reports_focused_text() {
        let mut editor = editor("hey");
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 2), DomPoint::new(text, 2));

        editor.handle_input();

        assert_eq!(
            editor.take_queued_messages(),
            vec![
                r#"action/{"text":"hey","offset":2,"action":"input"}"#,
                "input"
            ]
        );
    }

    #[test]
    fn test_input_schedules_debounced_render() {
        let mut editor = editor("#tag");
        editor.set_highlight_options(Some(r"#\w+".into()), None);
        editor.document_mut().set_markup("#tag and #more");
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 14), DomPoint::new(text, 14));

        editor.handle_input();
        editor.handle_input();
        assert!(editor.has_pending_work());

        let tick = editor.tick();
        assert_eq!(
            tick.rendered,
            Some(RenderOutcome::Rendered {
                selection_restored: true
            })
        );
        assert_eq!(editor.tick().rendered, None);
        assert_eq!(editor.absolute_selection(), Ok(Some(AbsoluteSelection::new(14, 14))));
    }

    #[test]
    fn test_set_highlight_options_renders_immediately() {
        let mut editor = editor("a todo item");
        let outcome = editor.set_highlight_options(None, Some(vec!["todo".into()]));

        assert!(matches!(outcome, RenderOutcome::Rendered { .. }));
        assert_eq!(editor.html(), r#"a <span class="hashtag">todo</span> item"#);
        assert_eq!(editor.text(), "a todo item");
    }

    #[rstest]
    #[case(KEY_LEFT, true)]
    #[case(KEY_RIGHT, true)]
    #[case(65, false)]
    fn test_key_up_reports_position_for_arrows(#[case] key: u32, #[case] reported: bool) {
        let mut editor = editor("x");
        editor.backend_mut().active = vec!["bold".into()];

        editor.handle_key_up(key);

        let expected: Vec<String> = if reported {
            vec!["position/bold".into()]
        } else {
            vec![]
        };
        assert_eq!(editor.take_queued_messages(), expected);
    }

    #[test]
    fn test_selection_change_backs_up_range() {
        let mut editor = editor("abc");
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 0), DomPoint::new(text, 2));

        editor.handle_selection_change();

        assert_eq!(
            editor.saved_range(),
            Some(Selection::new(DomPoint::new(text, 0), DomPoint::new(text, 2)))
        );
        assert_eq!(editor.take_queued_messages(), vec!["position/"]);
    }

    #[test]
    fn test_color_restores_saved_range_first() {
        let mut editor = editor("abc");
        let text = root_child(&editor, 0);
        let saved = Selection::new(DomPoint::new(text, 1), DomPoint::new(text, 3));
        select(&mut editor, saved.anchor, saved.focus);
        editor.backup_range();
        editor.document_mut().clear_selection();

        editor.exec(NativeCommand::TextColor("red".into()));

        assert_eq!(editor.document().selection(), Some(saved));
        let names: Vec<_> = editor
            .backend()
            .executed
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["styleWithCSS", "foreColor", "styleWithCSS"]);
    }

    #[test]
    fn test_insert_image_reports_input() {
        let mut editor = editor("");
        editor.exec(NativeCommand::InsertImage {
            url: "cat.png".into(),
            alt: "cat".into(),
        });
        assert_eq!(editor.take_queued_messages(), vec!["input", "updateHeight"]);
    }

    #[test]
    fn test_set_html_reports_height_per_image() {
        let mut editor = editor(r#"<p><img src="a.png">text<img src="b.png"></p>"#);
        assert_eq!(
            editor.take_queued_messages(),
            vec!["updateHeight", "updateHeight"]
        );

        editor.set_html("no pictures");
        assert!(editor.take_queued_messages().is_empty());
    }

    #[test]
    fn test_surface_style_setters() {
        let mut editor = editor("");
        editor.set_font_size("16px");
        editor.set_background_color("#fff");
        editor.set_base_text_color("black");
        editor.set_height("200px");
        editor.set_line_height("1.5");
        assert!(editor.set_editor_attribute("spellcheck", "false"));

        let style = editor.surface_style();
        assert_eq!(style.font_size.as_deref(), Some("16px"));
        assert_eq!(style.background_color.as_deref(), Some("#fff"));
        assert_eq!(style.base_text_color.as_deref(), Some("black"));
        assert_eq!(style.height.as_deref(), Some("200px"));
        assert_eq!(style.attribute("spellcheck"), Some("false"));
        assert_eq!(editor.line_height(), Some("1.5"));

        editor.set_line_height("");
        assert_eq!(editor.line_height(), None);
        assert!(editor.take_queued_messages().is_empty());
    }

    #[test]
    fn test_insert_mention_replaces_base() {
        let mut editor = editor("hi @jo!");
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 6), DomPoint::new(text, 6));

        assert!(editor.insert_mention("@jo", "@joanna"));

        assert_eq!(editor.html(), "hi @joanna!");
        assert_eq!(
            editor.document().selection(),
            Some(Selection::caret(DomPoint::new(text, 10)))
        );
        assert_eq!(editor.take_queued_messages(), vec!["input"]);
    }

    #[test]
    fn test_insert_mention_needs_text_focus() {
        let mut editor = editor("<br>");
        select(
            &mut editor,
            DomPoint::new(NodeId::ROOT, 1),
            DomPoint::new(NodeId::ROOT, 1),
        );
        assert!(!editor.insert_mention("@a", "@ab"));
        assert!(editor.take_queued_messages().is_empty());
    }

    #[test]
    fn test_insert_link_wraps_selection() {
        let mut editor = editor("see the docs now");
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 8), DomPoint::new(text, 12));
        editor.backup_range();

        assert!(editor.insert_link("https://example.com", "Docs"));

        assert_eq!(
            editor.html(),
            r#"see the <a href="https://example.com" title="Docs">docs</a> now"#
        );
        assert!(editor.range_selection_exists());
        assert_eq!(editor.selected_href().as_deref(), Some("https://example.com"));
        assert_eq!(editor.take_queued_messages(), vec!["input"]);
    }

    #[test]
    fn test_insert_link_without_selection_still_reports_input() {
        let mut editor = editor("plain");
        assert!(!editor.insert_link("u", "t"));
        assert_eq!(editor.html(), "plain");
        assert_eq!(editor.take_queued_messages(), vec!["input"]);
    }

    #[test]
    fn test_selected_href_with_several_following_links_is_ambiguous() {
        let mut editor = editor(r#"x<a href="1">a</a><a href="2">b</a>"#);
        let text = root_child(&editor, 0);
        select(&mut editor, DomPoint::new(text, 0), DomPoint::new(text, 0));

        assert_eq!(editor.selected_href(), None);
    }

    #[test]
    fn test_selected_href_without_selection() {
        let editor = editor(r#"<a href="1">a</a>"#);
        assert_eq!(editor.selected_href(), None);
    }

    #[rstest]
    #[case("", true)]
    #[case("<p></p>", true)]
    #[case("<br>", true)]
    #[case("text", false)]
    #[case(r#"<img src="a.png">"#, false)]
    fn test_placeholder_visibility(#[case] html: &str, #[case] visible: bool) {
        let editor = editor(html);
        assert_eq!(editor.is_placeholder_visible(), visible);
    }

    #[test]
    fn test_blur_clears_selection() {
        let mut editor = editor("a");
        editor.focus();
        assert!(editor.range_or_caret_selection_exists());

        editor.blur();

        assert!(!editor.range_or_caret_selection_exists());
        assert_eq!(editor.take_queued_messages(), vec!["focus", "blur"]);
    }

    #[test]
    fn test_select_absolute_across_line_break() {
        let mut editor = editor("ab<br>cd");
        editor.select_absolute(1, 4).unwrap();

        let cd = root_child(&editor, 2);
        assert_eq!(
            editor.document().selection().map(|s| s.focus),
            Some(DomPoint::new(cd, 1))
        );
        assert_eq!(editor.absolute_selection(), Ok(Some(AbsoluteSelection::new(1, 4))));
    }

    #[test]
    fn test_command_queue_json_drains() {
        let mut editor = editor("");
        editor.custom_action("save");
        editor.update_height();

        assert_eq!(
            editor.command_queue_json().unwrap(),
            r#"["action/save","updateHeight"]"#
        );
        assert_eq!(editor.command_queue_json().unwrap(), "[]");
    }
}
