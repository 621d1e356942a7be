//! Formatting commands forwarded to the native editing layer.
//!
//! The engine never implements bold, lists, undo and friends itself. Each
//! [`NativeCommand`] compiles to one or more named invocations which a
//! [`CommandBackend`] executes verbatim.

/// The native command execution layer, reachable by command name.
pub trait CommandBackend {
    fn execute(&mut self, command: &str, value: Option<&str>);
    fn query_state(&self, command: &str) -> bool;
    fn query_value(&self, command: &str) -> String;
}

/// A single named call into the native layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Invocation {
    fn bare(name: &'static str) -> Self {
        Self { name, value: None }
    }

    fn with_value(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCommand {
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
    /// Heading level, clamped to 1..=6.
    Heading(u8),
    Blockquote,
    TextColor(String),
    TextBackgroundColor(String),
    InsertHtml(String),
    InsertImage { url: String, alt: String },
}

impl NativeCommand {
    /// Commands that act on the last backed-up range rather than whatever
    /// the native layer currently has selected.
    pub fn needs_saved_range(&self) -> bool {
        matches!(
            self,
            NativeCommand::TextColor(_)
                | NativeCommand::TextBackgroundColor(_)
                | NativeCommand::InsertHtml(_)
                | NativeCommand::InsertImage { .. }
        )
    }

    /// Whether the command changes content in a way the host should hear
    /// about even though no native input event follows.
    pub fn reports_input(&self) -> bool {
        matches!(self, NativeCommand::InsertImage { .. })
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        use NativeCommand::*;

        let simple = |name| vec![Invocation::bare(name)];
        let styled = |name, color: &str| {
            vec![
                Invocation::with_value("styleWithCSS", "true"),
                Invocation::with_value(name, color),
                Invocation::with_value("styleWithCSS", "false"),
            ]
        };

        match self {
            Bold => simple("bold"),
            Italic => simple("italic"),
            Subscript => simple("subscript"),
            Superscript => simple("superscript"),
            StrikeThrough => simple("strikeThrough"),
            Underline => simple("underline"),
            Undo => simple("undo"),
            Redo => simple("redo"),
            RemoveFormat => simple("removeFormat"),
            Indent => simple("indent"),
            Outdent => simple("outdent"),
            OrderedList => simple("insertOrderedList"),
            UnorderedList => simple("insertUnorderedList"),
            JustifyLeft => simple("justifyLeft"),
            JustifyCenter => simple("justifyCenter"),
            JustifyRight => simple("justifyRight"),
            JustifyFull => simple("justifyFull"),
            Heading(level) => vec![Invocation::with_value(
                "formatBlock",
                format!("<h{}>", (*level).clamp(1, 6)),
            )],
            Blockquote => vec![Invocation::with_value("formatBlock", "<blockquote>")],
            TextColor(color) => styled("foreColor", color.as_str()),
            TextBackgroundColor(color) => styled("hiliteColor", color.as_str()),
            InsertHtml(html) => vec![Invocation::with_value("insertHTML", html.as_str())],
            InsertImage { url, alt } => vec![Invocation::with_value(
                "insertHTML",
                format!(
                    r#"<img src="{}" alt="{}">"#,
                    html_escape::encode_double_quoted_attribute(url),
                    html_escape::encode_double_quoted_attribute(alt)
                ),
            )],
        }
    }
}

/// State queries and the style name reported for each when active.
const STYLE_QUERIES: &[(&str, &str)] = &[
    ("bold", "bold"),
    ("italic", "italic"),
    ("subscript", "subscript"),
    ("superscript", "superscript"),
    ("strikeThrough", "strikeThrough"),
    ("underline", "underline"),
    ("insertOrderedList", "orderedList"),
    ("insertUnorderedList", "unorderedList"),
    ("justifyCenter", "justifyCenter"),
    ("justifyFull", "justifyFull"),
    ("justifyLeft", "justifyLeft"),
    ("justifyRight", "justifyRight"),
    ("insertHorizontalRule", "horizontalRule"),
];

/// Styles active at the current position, in reporting order. The block
/// format (e.g. `h1`) comes last when the native layer reports one.
pub fn active_styles(backend: &impl CommandBackend) -> Vec<String> {
    let mut styles: Vec<String> = STYLE_QUERIES
        .iter()
        .filter(|(query, _)| backend.query_state(query))
        .map(|(_, style)| style.to_string())
        .collect();

    let block = backend.query_value("formatBlock");
    if !block.is_empty() {
        styles.push(block);
    }
    styles
}

/// A backend that records invocations instead of executing them.
///
/// Used where no native layer exists (the CLI, tests); states and values
/// answered by queries can be preset.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    pub executed: Vec<(String, Option<String>)>,
    pub active: Vec<String>,
    pub block_format: String,
}

impl RecordingBackend {
    /// Copy every state and value [`active_styles`] reads from `source`.
    pub fn snapshot(source: &impl CommandBackend) -> Self {
        let active = STYLE_QUERIES
            .iter()
            .map(|(query, _)| *query)
            .filter(|query| source.query_state(query))
            .map(String::from)
            .collect();
        Self {
            executed: Vec::new(),
            active,
            block_format: source.query_value("formatBlock"),
        }
    }

    /// Forward the recorded invocations to `target` in order, clearing them.
    pub fn replay_into(&mut self, target: &mut impl CommandBackend) {
        for (command, value) in self.executed.drain(..) {
            target.execute(&command, value.as_deref());
        }
    }
}

impl CommandBackend for RecordingBackend {
    fn execute(&mut self, command: &str, value: Option<&str>) {
        log::debug!("native command {command} {value:?}");
        self.executed
            .push((command.to_string(), value.map(String::from)));
    }

    fn query_state(&self, command: &str) -> bool {
        self.active.iter().any(|a| a == command)
    }

    fn query_value(&self, command: &str) -> String {
        match command {
            "formatBlock" => self.block_format.clone(),
            _ => String::new(),
        }
    }
}
