/*!
 * # Editing surface
 *
 * [`Editor`] is the façade the embedding host talks to. It owns the
 * [`Document`](crate::dom::Document), re-renders it through the
 * [`RenderCoordinator`](crate::rendering::RenderCoordinator) and reports
 * what happened through the [`BridgeQueue`](crate::bridge::BridgeQueue).
 *
 * Formatting itself (bold, lists, undo and so on) belongs to the native
 * layer behind [`CommandBackend`]; [`NativeCommand`] only names the calls.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use rich_editor_engine::editing::{Editor, NativeCommand, RecordingBackend};
 *
 * let mut editor = Editor::new(RecordingBackend::default());
 * editor.set_html("hello #world");
 * editor.set_highlight_options(Some(r"#\w+".to_string()), None);
 * editor.load();
 *
 * editor.exec(NativeCommand::Bold);
 * editor.handle_input();
 *
 * // Later, on the scheduler tick
 * let tick = editor.tick();
 * if tick.signal_host {
 *     let messages = editor.take_queued_messages();
 *     assert_eq!(messages, vec!["ready", "focus", "input"]);
 * }
 * ```
 */

pub mod commands;
pub mod editor;
pub mod surface;

pub use commands::{CommandBackend, Invocation, NativeCommand, RecordingBackend, active_styles};
pub use editor::{Editor, KEY_LEFT, KEY_RIGHT, TickOutcome};
pub use surface::SurfaceStyle;
