// ABOUTME: Headless document model standing in for the host page's DOM
// ABOUTME: Arena of element/text/raw nodes with class list and inline style helpers

use quick_xml::escape::escape;

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    /// Attribute values are kept in their escaped markup form.
    pub attributes: Vec<(String, String)>,
    pub self_closing: bool,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Root,
    Element(Element),
    /// Character data, kept escaped.
    Text(String),
    /// Comments, CDATA, doctype, declarations; written back verbatim.
    Raw(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An in-memory document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Root,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            self_closing: false,
        }))
    }

    pub(crate) fn create_parsed_element(
        &mut self,
        tag: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    ) -> NodeId {
        self.push(NodeKind::Element(Element {
            tag,
            attributes,
            self_closing,
        }))
    }

    /// Create a text node; `text` is escaped.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(escape(text).into_owned()))
    }

    pub(crate) fn create_escaped_text(&mut self, markup: String) -> NodeId {
        self.push(NodeKind::Text(markup))
    }

    pub(crate) fn create_raw(&mut self, markup: String) -> NodeId {
        self.push(NodeKind::Raw(markup))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Element children only, like the DOM `children` collection.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect()
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Element(_))
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute; `value` is escaped. Existing attributes keep their
    /// position.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let value = escape(value).into_owned();
        self.set_raw_attribute(id, name, value);
    }

    fn set_raw_attribute(&mut self, id: NodeId, name: &str, value: String) {
        if let Some(element) = self.element_mut(id) {
            match element.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value,
                None => element.attributes.push((name.to_string(), value)),
            }
        }
    }

    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).contains(&class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.toggle_class(id, class, true);
    }

    /// Force `class` on or off, like `classList.toggle(name, force)`.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, force: bool) {
        if !self.is_element(id) || self.has_class(id, class) == force {
            return;
        }
        let mut classes: Vec<String> = self.classes(id).into_iter().map(String::from).collect();
        if force {
            classes.push(class.to_string());
        } else {
            classes.retain(|c| c != class);
        }
        self.set_raw_attribute(id, "class", classes.join(" "));
    }

    fn style_declarations(&self, id: NodeId) -> Vec<(String, String)> {
        self.attribute(id, "style")
            .map(|style| {
                style
                    .split(';')
                    .filter_map(|decl| {
                        let (name, value) = decl.split_once(':')?;
                        Some((name.trim().to_string(), value.trim().to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        self.style_declarations(id)
            .into_iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
        if !self.is_element(id) {
            return;
        }
        let mut declarations = self.style_declarations(id);
        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, v)) => *v = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }
        let style = declarations
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attribute(id, "style", &style);
    }

    /// All descendants of `from` in document (pre-)order, excluding `from`.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(from).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    pub fn find_descendant_by_class(&self, from: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(from)
            .into_iter()
            .find(|id| self.has_class(*id, class))
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            out.push(parent);
            current = self.parent(parent);
        }
        out
    }

    /// True when `node` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).contains(&ancestor)
    }
}
