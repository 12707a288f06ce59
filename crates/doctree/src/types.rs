use crate::id::{IdGen, assign_node_ids, max_id};
use core_types::DocVersion;

pub type RawId = u64;

/// Opaque node identity, valid only within the snapshot it was read from.
///
/// `Id(0)` marks a node that has not been assigned an identity yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub RawId);

impl Id {
    pub const UNASSIGNED: Id = Id(0);

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single character-styling wrapper attached to a text run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Bold,
    Italic,
    Superscript,
    Other(String),
}

impl StyleTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "bold" => StyleTag::Bold,
            "italic" => StyleTag::Italic,
            "sup" => StyleTag::Superscript,
            other => StyleTag::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::Superscript => "sup",
            StyleTag::Other(name) => name,
        }
    }
}

/// Ordered styling of a leaf, outermost wrapper first.
///
/// The **last** tag is the innermost wrapper, the one closest to the text.
/// Presentation layers build the nesting by popping from the end, so two
/// stacks holding the same tags in a different order are different
/// presentations and compare unequal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleStack(Vec<StyleTag>);

static PLAIN: StyleStack = StyleStack(Vec::new());

impl StyleStack {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The empty stack, for nodes that carry no styling.
    pub fn plain() -> &'static StyleStack {
        &PLAIN
    }

    /// Wrap `tag` inside every tag already on the stack.
    pub fn push(&mut self, tag: StyleTag) {
        self.0.push(tag);
    }

    /// Tags outermost-first, the order they were declared in.
    pub fn tags(&self) -> &[StyleTag] {
        &self.0
    }

    pub fn outermost(&self) -> Option<&StyleTag> {
        self.0.first()
    }

    pub fn innermost(&self) -> Option<&StyleTag> {
        self.0.last()
    }

    /// Tags innermost-first: the order a renderer pops them to nest wrappers
    /// from the text outwards.
    pub fn nesting(&self) -> impl Iterator<Item = &StyleTag> {
        self.0.iter().rev()
    }

    pub fn contains(&self, tag: &StyleTag) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StyleTag> for StyleStack {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[StyleTag; N]> for StyleStack {
    fn from(tags: [StyleTag; N]) -> Self {
        Self(tags.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// Structural role of a [`Node::Container`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    /// Wraps inline runs as one paragraph.
    Paragraph,
    /// Wraps list items.
    List(ListKind),
    /// A list item that itself holds nested inline runs.
    ListItemGroup,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Root {
        id: Id,
        children: Vec<Node>,
    },
    Container {
        id: Id,
        role: ContainerRole,
        children: Vec<Node>,
    },
    Leaf {
        id: Id,
        content: String,
        styling: StyleStack,
    },
    /// Leaf-like while childless, a transparent container otherwise.
    ListItem {
        id: Id,
        content: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn leaf(content: impl Into<String>) -> Self {
        Node::Leaf {
            id: Id::UNASSIGNED,
            content: content.into(),
            styling: StyleStack::new(),
        }
    }

    pub fn styled(content: impl Into<String>, styling: impl Into<StyleStack>) -> Self {
        Node::Leaf {
            id: Id::UNASSIGNED,
            content: content.into(),
            styling: styling.into(),
        }
    }

    pub fn list_item(content: impl Into<String>) -> Self {
        Node::ListItem {
            id: Id::UNASSIGNED,
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn container(role: ContainerRole, children: Vec<Node>) -> Self {
        Node::Container {
            id: Id::UNASSIGNED,
            role,
            children,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::container(ContainerRole::Paragraph, children)
    }

    pub fn list(kind: ListKind, children: Vec<Node>) -> Self {
        Self::container(ContainerRole::List(kind), children)
    }

    pub fn item_group(children: Vec<Node>) -> Self {
        Self::container(ContainerRole::ListItemGroup, children)
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root {
            id: Id::UNASSIGNED,
            children,
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Root { id, .. }
            | Node::Container { id, .. }
            | Node::Leaf { id, .. }
            | Node::ListItem { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Root { id, .. }
            | Node::Container { id, .. }
            | Node::Leaf { id, .. }
            | Node::ListItem { id, .. } => *id = new_id,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children, .. }
            | Node::Container { children, .. }
            | Node::ListItem { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children, .. }
            | Node::Container { children, .. }
            | Node::ListItem { children, .. } => Some(children),
            Node::Leaf { .. } => None,
        }
    }

    /// Editable text; empty for structural nodes.
    pub fn content(&self) -> &str {
        match self {
            Node::Leaf { content, .. } | Node::ListItem { content, .. } => content,
            Node::Root { .. } | Node::Container { .. } => "",
        }
    }

    /// Styling stack; list items and structural nodes render plain.
    pub fn styling(&self) -> &StyleStack {
        match self {
            Node::Leaf { styling, .. } => styling,
            _ => StyleStack::plain(),
        }
    }

    /// `true` for nodes the cursor may rest on: leaves and childless list items.
    pub fn is_leaf_like(&self) -> bool {
        match self {
            Node::Leaf { .. } => true,
            Node::ListItem { children, .. } => children.is_empty(),
            Node::Root { .. } | Node::Container { .. } => false,
        }
    }

    /// Copy of this leaf-like node under a new identity and content.
    ///
    /// Structural nodes are returned as-is apart from the identity; callers
    /// only rebuild leaves.
    pub fn with_content(&self, id: Id, content: String) -> Node {
        match self {
            Node::Leaf { styling, .. } => Node::Leaf {
                id,
                content,
                styling: styling.clone(),
            },
            Node::ListItem { children, .. } if children.is_empty() => Node::ListItem {
                id,
                content,
                children: Vec::new(),
            },
            other => {
                let mut node = other.clone();
                node.set_id(id);
                node
            }
        }
    }

    /// Shallow copy of this node with `children` in place of its own.
    pub(crate) fn with_children(&self, children: Vec<Node>) -> Node {
        match self {
            Node::Root { id, .. } => Node::Root { id: *id, children },
            Node::Container { id, role, .. } => Node::Container {
                id: *id,
                role: *role,
                children,
            },
            Node::ListItem { id, content, .. } => Node::ListItem {
                id: *id,
                content: content.clone(),
                children,
            },
            Node::Leaf { .. } => self.clone(),
        }
    }
}

/// One snapshot of the document: the tree, the identity source that minted
/// its ids, and the revision it was installed at.
#[derive(Clone, Debug)]
pub struct Document {
    root: Node,
    ids: IdGen,
    version: DocVersion,
}

impl Document {
    /// Install a seed tree, assigning identities to every unassigned node.
    ///
    /// A tree whose top node is not a [`Node::Root`] is wrapped in one so the
    /// document always has exactly one root.
    pub fn new(root: Node) -> Self {
        let mut root = match root {
            Node::Root { .. } => root,
            other => Node::root(vec![other]),
        };
        let mut ids = IdGen::starting_after(max_id(&root));
        assign_node_ids(&mut root, &mut ids);
        Self {
            root,
            ids,
            version: DocVersion::INITIAL,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn version(&self) -> DocVersion {
        self.version
    }

    pub fn ids(&self) -> &IdGen {
        &self.ids
    }

    /// The next snapshot: a replacement tree minted from `ids`.
    pub(crate) fn successor(&self, root: Node, ids: IdGen) -> Document {
        Document {
            root,
            ids,
            version: self.version.next(),
        }
    }

    /// Concatenated content of every leaf in document order.
    pub fn text(&self) -> String {
        crate::traverse::leaves(&self.root)
            .into_iter()
            .map(Node::content)
            .collect()
    }
}
