//! UniFFI bindings for hosting the rich-editor engine in a mobile app
//!
//! The host supplies two foreign objects: the native command layer that
//! executes formatting by name, and a channel that is poked (without
//! payload) whenever messages are waiting. Everything else flows through
//! [`EditorHandle`].
//!
//! Foreign code is never called while the editor lock is held: the native
//! layer may fire its own events straight back into the handle.

use rich_editor_engine::editing::{KEY_LEFT, KEY_RIGHT};
use rich_editor_engine::{CommandBackend, Editor, NativeCommand, RecordingBackend, RenderOutcome};
use std::sync::{Arc, Mutex, MutexGuard};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Selection error: {reason}")]
    SelectionError { reason: String },
    #[error("Queue error: {reason}")]
    QueueError { reason: String },
}

// ============ Foreign interfaces ============

/// Native formatting commands, implemented by the host.
#[uniffi::export(with_foreign)]
pub trait NativeCommandLayer: Send + Sync {
    fn execute(&self, command: String, value: Option<String>);
    fn query_state(&self, command: String) -> bool;
    fn query_value(&self, command: String) -> String;
}

/// Payload-free signal telling the host to pull queued messages.
#[uniffi::export(with_foreign)]
pub trait HostChannel: Send + Sync {
    fn on_callback(&self);
}

struct ForeignBackend<'a>(&'a dyn NativeCommandLayer);

impl CommandBackend for ForeignBackend<'_> {
    fn execute(&mut self, command: &str, value: Option<&str>) {
        self.0
            .execute(command.to_string(), value.map(str::to_string));
    }

    fn query_state(&self, command: &str) -> bool {
        self.0.query_state(command.to_string())
    }

    fn query_value(&self, command: &str) -> String {
        self.0.query_value(command.to_string())
    }
}

// ============ Editor Handle ============

/// A handle to one editing surface.
///
/// The locked editor records native invocations and answers style queries
/// from a snapshot; both are exchanged with the native layer unlocked.
#[derive(uniffi::Object)]
pub struct EditorHandle {
    inner: Mutex<Editor<RecordingBackend>>,
    native: Arc<dyn NativeCommandLayer>,
    host: Arc<dyn HostChannel>,
}

impl EditorHandle {
    fn editor(&self) -> MutexGuard<'_, Editor<RecordingBackend>> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Lock the editor with its style queries answered as the native layer
    /// answers them right now.
    fn editor_with_native_state(&self) -> MutexGuard<'_, Editor<RecordingBackend>> {
        let states = RecordingBackend::snapshot(&ForeignBackend(self.native.as_ref()));
        let mut editor = self.editor();
        *editor.backend_mut() = states;
        editor
    }
}

#[uniffi::export]
impl EditorHandle {
    #[uniffi::constructor]
    pub fn new(native: Arc<dyn NativeCommandLayer>, host: Arc<dyn HostChannel>) -> Self {
        Self {
            inner: Mutex::new(Editor::new(RecordingBackend::default())),
            native,
            host,
        }
    }

    /// Announce readiness and focus the end of the content.
    pub fn load(&self) {
        self.editor().load();
    }

    /// Replace the content. Returns true if highlighting rewrote it.
    pub fn set_html(&self, html: String) -> bool {
        is_rewrite(self.editor().set_html(&html))
    }

    pub fn get_html(&self) -> String {
        self.editor().html()
    }

    pub fn get_text(&self) -> String {
        self.editor().text()
    }

    pub fn focus(&self) {
        self.editor().focus();
    }

    pub fn blur(&self) {
        self.editor().blur();
    }

    pub fn set_highlight_options(&self, regex: Option<String>, words: Option<Vec<String>>) -> bool {
        is_rewrite(self.editor().set_highlight_options(regex, words))
    }

    pub fn set_placeholder_text(&self, text: String) {
        self.editor().set_placeholder_text(text);
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.editor().is_placeholder_visible()
    }

    pub fn exec(&self, command: CommandDto) {
        let mut recorded = {
            let mut editor = self.editor();
            editor.exec(command.into());
            std::mem::take(editor.backend_mut())
        };
        recorded.replay_into(&mut ForeignBackend(self.native.as_ref()));
    }

    // Surface events

    pub fn handle_input(&self) {
        self.editor().handle_input();
    }

    pub fn handle_focus(&self) {
        self.editor().handle_focus();
    }

    pub fn handle_blur(&self) {
        self.editor().handle_blur();
    }

    pub fn handle_click(&self) {
        self.editor().handle_click();
    }

    pub fn handle_selection_change(&self) {
        self.editor_with_native_state().handle_selection_change();
    }

    pub fn handle_key_up(&self, key_code: u32) {
        if key_code == KEY_LEFT || key_code == KEY_RIGHT {
            self.editor_with_native_state().handle_key_up(key_code);
        } else {
            self.editor().handle_key_up(key_code);
        }
    }

    pub fn custom_action(&self, action: String) {
        self.editor().custom_action(&action);
    }

    pub fn update_height(&self) {
        self.editor().update_height();
    }

    // Surface style

    pub fn set_font_size(&self, size: String) {
        self.editor().set_font_size(size);
    }

    pub fn set_background_color(&self, color: String) {
        self.editor().set_background_color(color);
    }

    pub fn set_base_text_color(&self, color: String) {
        self.editor().set_base_text_color(color);
    }

    pub fn set_height(&self, height: String) {
        self.editor().set_height(height);
    }

    pub fn set_line_height(&self, height: String) {
        self.editor().set_line_height(height);
    }

    pub fn get_line_height(&self) -> Option<String> {
        self.editor().line_height().map(String::from)
    }

    pub fn set_editor_attribute(&self, attribute: String, value: String) -> bool {
        self.editor().set_editor_attribute(&attribute, value)
    }

    // Selection and insertion

    /// Remember the current range for a later insert or color change.
    pub fn prepare_insert(&self) {
        self.editor().backup_range();
    }

    pub fn insert_link(&self, url: String, title: String) -> bool {
        self.editor().insert_link(&url, &title)
    }

    pub fn insert_mention(&self, base: String, mention: String) -> bool {
        self.editor().insert_mention(&base, &mention)
    }

    pub fn get_selected_href(&self) -> Option<String> {
        self.editor().selected_href()
    }

    pub fn range_selection_exists(&self) -> bool {
        self.editor().range_selection_exists()
    }

    pub fn range_or_caret_selection_exists(&self) -> bool {
        self.editor().range_or_caret_selection_exists()
    }

    /// The selection as character offsets into the plain text.
    pub fn get_selection(&self) -> Result<Option<SelectionDto>, FfiError> {
        let selection = self
            .editor()
            .absolute_selection()
            .map_err(|e| FfiError::SelectionError {
                reason: e.to_string(),
            })?;
        Ok(selection.map(|s| SelectionDto {
            anchor: s.anchor as u64,
            focus: s.focus as u64,
        }))
    }

    pub fn select(&self, anchor: u64, focus: u64) -> Result<(), FfiError> {
        self.editor()
            .select_absolute(anchor as usize, focus as usize)
            .map_err(|e| FfiError::SelectionError {
                reason: e.to_string(),
            })
    }

    // Scheduling and bridge

    /// Run deferred work. Signals the host, outside the editor lock, when
    /// messages are waiting, and returns whether it did.
    pub fn tick(&self) -> bool {
        let outcome = self.editor().tick();
        if outcome.signal_host {
            self.host.on_callback();
        }
        outcome.signal_host
    }

    pub fn has_pending_work(&self) -> bool {
        self.editor().has_pending_work()
    }

    pub fn take_queued_messages(&self) -> Vec<String> {
        self.editor().take_queued_messages()
    }

    /// Drain queued messages as a JSON array of strings.
    pub fn get_command_queue(&self) -> Result<String, FfiError> {
        self.editor()
            .command_queue_json()
            .map_err(|e| FfiError::QueueError {
                reason: e.to_string(),
            })
    }
}

fn is_rewrite(outcome: RenderOutcome) -> bool {
    matches!(outcome, RenderOutcome::Rendered { .. })
}

// ============ DTOs ============

/// Selection endpoints as character offsets into the plain text.
#[derive(Debug, PartialEq, Eq, uniffi::Record)]
pub struct SelectionDto {
    pub anchor: u64,
    pub focus: u64,
}

/// Formatting command requested by the host.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum CommandDto {
    Bold,
    Italic,
    Subscript,
    Superscript,
    StrikeThrough,
    Underline,
    Undo,
    Redo,
    RemoveFormat,
    Indent,
    Outdent,
    OrderedList,
    UnorderedList,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    JustifyFull,
    Heading { level: u8 },
    Blockquote,
    TextColor { color: String },
    TextBackgroundColor { color: String },
    InsertHtml { html: String },
    InsertImage { url: String, alt: String },
}

impl From<CommandDto> for NativeCommand {
    fn from(command: CommandDto) -> Self {
        match command {
            CommandDto::Bold => NativeCommand::Bold,
            CommandDto::Italic => NativeCommand::Italic,
            CommandDto::Subscript => NativeCommand::Subscript,
            CommandDto::Superscript => NativeCommand::Superscript,
            CommandDto::StrikeThrough => NativeCommand::StrikeThrough,
            CommandDto::Underline => NativeCommand::Underline,
            CommandDto::Undo => NativeCommand::Undo,
            CommandDto::Redo => NativeCommand::Redo,
            CommandDto::RemoveFormat => NativeCommand::RemoveFormat,
            CommandDto::Indent => NativeCommand::Indent,
            CommandDto::Outdent => NativeCommand::Outdent,
            CommandDto::OrderedList => NativeCommand::OrderedList,
            CommandDto::UnorderedList => NativeCommand::UnorderedList,
            CommandDto::JustifyLeft => NativeCommand::JustifyLeft,
            CommandDto::JustifyCenter => NativeCommand::JustifyCenter,
            CommandDto::JustifyRight => NativeCommand::JustifyRight,
            CommandDto::JustifyFull => NativeCommand::JustifyFull,
            CommandDto::Heading { level } => NativeCommand::Heading(level),
            CommandDto::Blockquote => NativeCommand::Blockquote,
            CommandDto::TextColor { color } => NativeCommand::TextColor(color),
            CommandDto::TextBackgroundColor { color } => NativeCommand::TextBackgroundColor(color),
            CommandDto::InsertHtml { html } => NativeCommand::InsertHtml(html),
            CommandDto::InsertImage { url, alt } => NativeCommand::InsertImage { url, alt },
        }
    }
}
