use crate::dom::markup;

/// Identifier of a node in a [`Document`] arena.
///
/// Ids carry the generation of the document content they were created in.
/// Replacing the markup bumps the generation, so ids handed out before a
/// rewrite never alias nodes created after it. The root keeps the same id
/// for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// The editable root element.
    pub const ROOT: NodeId = NodeId {
        index: 0,
        generation: 0,
    };

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// An element with its (lowercased) tag name and attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `<br>` occupies exactly one character position in flattened text.
    pub fn is_line_break(&self) -> bool {
        self.tag == "br"
    }

    /// Void elements never take children.
    pub fn is_void(&self) -> bool {
        markup::is_void_tag(&self.tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A selection endpoint: a node plus an offset inside it.
///
/// For text nodes the offset counts characters; for elements it counts
/// children, except line breaks which accept offsets 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomPoint {
    pub node: NodeId,
    pub offset: usize,
}

impl DomPoint {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }

    pub fn root_start() -> Self {
        Self::new(NodeId::ROOT, 0)
    }
}

/// Ordered (anchor, focus) pair. A caret has anchor == focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: DomPoint,
    pub focus: DomPoint,
}

impl Selection {
    pub fn new(anchor: DomPoint, focus: DomPoint) -> Self {
        Self { anchor, focus }
    }

    pub fn caret(point: DomPoint) -> Self {
        Self::new(point, point)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),
    #[error("Offset {offset} out of bounds for node {node:?} (max {max})")]
    OffsetOutOfBounds {
        node: NodeId,
        offset: usize,
        max: usize,
    },
    #[error("Node {0:?} is not a text node")]
    NotText(NodeId),
    #[error("Node {0:?} cannot have children")]
    NotAContainer(NodeId),
}

/// The editable tree: an arena of nodes below a single root element, plus
/// the live selection over it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    generation: u32,
    selection: Option<Selection>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, None)],
            generation: 0,
            selection: None,
        }
    }

    pub fn from_markup(html: &str) -> Self {
        let mut doc = Self::new();
        doc.set_markup(html);
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of times the content has been replaced wholesale.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.is_root() {
            return self.nodes.first();
        }
        if id.index == 0 || id.generation != self.generation {
            return None;
        }
        self.nodes.get(id.index as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DocumentError> {
        if !self.contains(id) {
            return Err(DocumentError::UnknownNode(id));
        }
        Ok(&mut self.nodes[id.index as usize])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn text_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::as_text)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).and_then(Node::as_element)
    }

    /// Largest valid selection offset inside `id`.
    pub fn max_offset(&self, id: NodeId) -> Option<usize> {
        let node = self.node(id)?;
        Some(match &node.kind {
            NodeKind::Text(text) => text.chars().count(),
            NodeKind::Comment(_) => 0,
            NodeKind::Element(element) if element.is_line_break() => 1,
            NodeKind::Element(_) | NodeKind::Root => node.children.len(),
        })
    }

    fn next_id(&self) -> NodeId {
        NodeId {
            index: self.nodes.len() as u32,
            generation: self.generation,
        }
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, DocumentError> {
        self.ensure_container(parent)?;
        let id = self.next_id();
        self.nodes.push(Node::new(kind, Some(parent)));
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Insert a new node directly after `sibling` under the same parent.
    pub fn insert_after(
        &mut self,
        sibling: NodeId,
        kind: NodeKind,
    ) -> Result<NodeId, DocumentError> {
        let parent = self
            .parent(sibling)
            .ok_or(DocumentError::UnknownNode(sibling))?;
        let id = self.next_id();
        self.nodes.push(Node::new(kind, Some(parent)));
        let siblings = &mut self.node_mut(parent)?.children;
        let position = siblings
            .iter()
            .position(|&c| c == sibling)
            .map_or(siblings.len(), |p| p + 1);
        siblings.insert(position, id);
        Ok(id)
    }

    fn ensure_container(&self, id: NodeId) -> Result<(), DocumentError> {
        match self.kind(id) {
            None => Err(DocumentError::UnknownNode(id)),
            Some(NodeKind::Root) => Ok(()),
            Some(NodeKind::Element(element)) if !element.is_void() => Ok(()),
            Some(_) => Err(DocumentError::NotAContainer(id)),
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DocumentError> {
        let node = self.node_mut(id)?;
        match &mut node.kind {
            NodeKind::Text(existing) => {
                *existing = text.into();
                Ok(())
            }
            _ => Err(DocumentError::NotText(id)),
        }
    }

    /// Serialized markup of everything below the root.
    pub fn markup(&self) -> String {
        markup::serialize(self, NodeId::ROOT)
    }

    /// Replace all content below the root with the parsed `html`.
    ///
    /// Every previously issued non-root [`NodeId`] becomes stale. Selection
    /// endpoints that pointed into the old content fall back to the start of
    /// the root.
    pub fn set_markup(&mut self, html: &str) {
        self.generation = self.generation.wrapping_add(1);
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        markup::parse_into(self, NodeId::ROOT, html);
        self.selection = self.selection.map(|sel| {
            Selection::new(self.clamp_point(sel.anchor), self.clamp_point(sel.focus))
        });
    }

    fn clamp_point(&self, point: DomPoint) -> DomPoint {
        match self.max_offset(point.node) {
            Some(max) => DomPoint::new(point.node, point.offset.min(max)),
            None => DomPoint::root_start(),
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) -> Result<(), DocumentError> {
        self.check_point(selection.anchor)?;
        self.check_point(selection.focus)?;
        self.selection = Some(selection);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn check_point(&self, point: DomPoint) -> Result<(), DocumentError> {
        let max = self
            .max_offset(point.node)
            .ok_or(DocumentError::UnknownNode(point.node))?;
        if point.offset > max {
            return Err(DocumentError::OffsetOutOfBounds {
                node: point.node,
                offset: point.offset,
                max,
            });
        }
        Ok(())
    }

    /// Nearest inclusive ancestor of `id` that is an element named `tag`.
    pub fn closest_element(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some_and(|e| e.tag == tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Whether any element named `tag` exists in the document.
    pub fn contains_element(&self, tag: &str) -> bool {
        self.descendants(NodeId::ROOT)
            .any(|id| self.element(id).is_some_and(|e| e.tag == tag))
    }

    /// All descendants of `id` in document order (excluding `id`).
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }
}
