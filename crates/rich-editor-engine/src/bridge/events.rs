use std::fmt;

use serde::Serialize;

/// Events the editing surface reports to the host.
///
/// The host sees them only as strings; [`fmt::Display`] is the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    Ready,
    Input,
    Focus,
    Blur,
    Click,
    UpdateHeight,
    /// Styles active at the caret, e.g. `bold`, `orderedList`, `h1`.
    Position(Vec<String>),
    /// Host-defined action name.
    Action(String),
    /// Text of the focused text node and the caret offset in it.
    InputAction { text: String, offset: usize },
}

#[derive(Serialize)]
struct InputActionPayload<'a> {
    text: &'a str,
    offset: usize,
    action: &'static str,
}

impl fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorEvent::Ready => f.write_str("ready"),
            EditorEvent::Input => f.write_str("input"),
            EditorEvent::Focus => f.write_str("focus"),
            EditorEvent::Blur => f.write_str("blur"),
            EditorEvent::Click => f.write_str("click/"),
            EditorEvent::UpdateHeight => f.write_str("updateHeight"),
            EditorEvent::Position(styles) => {
                let encoded: Vec<_> = styles.iter().map(|s| urlencoding::encode(s)).collect();
                write!(f, "position/{}", encoded.join(","))
            }
            EditorEvent::Action(action) => write!(f, "action/{action}"),
            EditorEvent::InputAction { text, offset } => {
                let payload = InputActionPayload {
                    text,
                    offset: *offset,
                    action: "input",
                };
                let json = serde_json::to_string(&payload).map_err(|_| fmt::Error)?;
                write!(f, "action/{json}")
            }
        }
    }
}
