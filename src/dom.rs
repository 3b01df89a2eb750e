//! A small retained element tree for building component layouts.
//!
//! Components describe their layout through the [`Surface`] trait: they create
//! elements, give them text and styles, attach them to parents and register
//! listeners. [`Document`] is the in-memory implementation. It keeps the tree,
//! answers queries (text, visibility, children), routes click events to the
//! registered actions, and renders a subtree to a string with lipgloss.
//!
//! Every operation tolerates unknown element ids by doing nothing, so code
//! that builds a layout never needs to handle errors.
//!
//! # Example
//!
//! ```rust
//! use countdown_widget::dom::{Document, Event, StyleProp, Surface, Tag, Display};
//!
//! let mut doc: Document<&'static str> = Document::new();
//! let root = doc.create_with_id(Tag::Container, "app");
//! let button = doc.create(Tag::Button);
//! doc.set_text(button, "Go");
//! doc.add_listener(button, Event::Click, "go");
//! doc.append_child(root, button);
//!
//! assert_eq!(doc.get_element_by_id("app"), Some(root));
//! assert_eq!(doc.dispatch(button, Event::Click), Some("go"));
//!
//! // Hidden elements do not receive events.
//! doc.set_style(button, StyleProp::Display(Display::None));
//! assert_eq!(doc.dispatch(button, Event::Click), None);
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// The kind of an element. Determines how it is laid out when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// A block that stacks its children vertically.
    Container,
    /// A title line, rendered bold.
    Heading,
    /// A line of text.
    Paragraph,
    /// A block that lays its children out side by side.
    Row,
    /// A clickable control.
    Button,
    /// Inline text.
    Text,
}

/// Events an element can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The element was activated (mouse click, or a key bound to it).
    Click,
}

/// Whether an element takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Rendered and able to receive events.
    #[default]
    Inline,
    /// Not rendered and ignored by event dispatch.
    None,
}

/// Horizontal alignment of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Children flush left.
    #[default]
    Left,
    /// Children centered on the widest child.
    Center,
}

/// A single style property assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleProp {
    /// Show or hide the element.
    Display(Display),
    /// Alignment of children (containers only).
    TextAlign(TextAlign),
    /// Bold text.
    Bold(bool),
    /// Padding as top, right, bottom, left cells.
    Padding(i32, i32, i32, i32),
    /// Margin as top, right, bottom, left cells.
    Margin(i32, i32, i32, i32),
    /// Background color, any value lipgloss understands (`"62"`, `"#04B575"`).
    Background(String),
    /// Foreground color.
    Foreground(String),
    /// Draw a normal border around the element.
    Border(bool),
}

/// The accumulated style of an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementStyle {
    /// See [`StyleProp::Display`].
    pub display: Display,
    /// See [`StyleProp::TextAlign`].
    pub text_align: TextAlign,
    /// See [`StyleProp::Bold`].
    pub bold: bool,
    /// See [`StyleProp::Padding`].
    pub padding: [i32; 4],
    /// See [`StyleProp::Margin`].
    pub margin: [i32; 4],
    /// See [`StyleProp::Background`].
    pub background: Option<String>,
    /// See [`StyleProp::Foreground`].
    pub foreground: Option<String>,
    /// See [`StyleProp::Border`].
    pub border: bool,
}

impl ElementStyle {
    /// Applies one property.
    pub fn apply(&mut self, prop: StyleProp) {
        match prop {
            StyleProp::Display(display) => self.display = display,
            StyleProp::TextAlign(align) => self.text_align = align,
            StyleProp::Bold(bold) => self.bold = bold,
            StyleProp::Padding(t, r, b, l) => self.padding = [t, r, b, l],
            StyleProp::Margin(t, r, b, l) => self.margin = [t, r, b, l],
            StyleProp::Background(color) => self.background = Some(color),
            StyleProp::Foreground(color) => self.foreground = Some(color),
            StyleProp::Border(border) => self.border = border,
        }
    }

    fn to_lipgloss(&self, tag: Tag) -> Style {
        let [pt, pr, pb, pl] = self.padding;
        let [mt, mr, mb, ml] = self.margin;

        let mut style = Style::new()
            .bold(self.bold || tag == Tag::Heading)
            .padding(pt, pr, pb, pl)
            .margin(mt, mr, mb, ml);

        if let Some(color) = &self.background {
            style = style.background(Color::from(color.as_str()));
        }
        if let Some(color) = &self.foreground {
            style = style.foreground(Color::from(color.as_str()));
        }
        if self.border {
            style = style
                .border_style(lipgloss::normal_border())
                .border_top(true)
                .border_right(true)
                .border_bottom(true)
                .border_left(true);
        }
        style
    }
}

/// The capabilities a component needs to build and update its layout.
pub trait Surface {
    /// Value handed back when a listener fires.
    type Action;

    /// Creates a detached element.
    fn create(&mut self, tag: Tag) -> ElementId;

    /// Replaces the text content of `el`.
    fn set_text(&mut self, el: ElementId, text: &str);

    /// Applies a style property to `el`.
    fn set_style(&mut self, el: ElementId, prop: StyleProp);

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Registers `action` to be returned when `event` reaches `el`.
    fn add_listener(&mut self, el: ElementId, event: Event, action: Self::Action);
}

#[derive(Debug, Clone)]
struct Node<A> {
    tag: Tag,
    dom_id: Option<String>,
    text: String,
    style: ElementStyle,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    listeners: Vec<(Event, A)>,
}

impl<A> Node<A> {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            dom_id: None,
            text: String::new(),
            style: ElementStyle::default(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// In-memory element tree.
#[derive(Debug, Clone)]
pub struct Document<A> {
    nodes: Vec<Node<A>>,
}

impl<A> Default for Document<A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<A: Clone> Document<A> {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element that can later be found with
    /// [`get_element_by_id`](Self::get_element_by_id).
    pub fn create_with_id(&mut self, tag: Tag, id: impl Into<String>) -> ElementId {
        let el = self.create(tag);
        self.nodes[el.0].dom_id = Some(id.into());
        el
    }

    /// Finds the first element carrying the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|node| node.dom_id.as_deref() == Some(id))
            .map(ElementId)
    }

    /// Number of elements, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tag of `el`.
    pub fn tag(&self, el: ElementId) -> Option<Tag> {
        self.node(el).map(|node| node.tag)
    }

    /// Text content of `el`.
    pub fn text(&self, el: ElementId) -> Option<&str> {
        self.node(el).map(|node| node.text.as_str())
    }

    /// Accumulated style of `el`.
    pub fn style(&self, el: ElementId) -> Option<&ElementStyle> {
        self.node(el).map(|node| &node.style)
    }

    /// Children of `el`, in insertion order.
    pub fn children(&self, el: ElementId) -> &[ElementId] {
        self.node(el).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Parent of `el`, if attached.
    pub fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.node(el).and_then(|node| node.parent)
    }

    /// Returns true if `el` exists and is not hidden.
    pub fn is_visible(&self, el: ElementId) -> bool {
        self.node(el)
            .map(|node| node.style.display == Display::Inline)
            .unwrap_or(false)
    }

    /// Delivers `event` to `el` and returns the action registered for it.
    ///
    /// Hidden elements swallow events.
    pub fn dispatch(&self, el: ElementId, event: Event) -> Option<A> {
        if !self.is_visible(el) {
            return None;
        }
        self.node(el)?
            .listeners
            .iter()
            .find(|(registered, _)| *registered == event)
            .map(|(_, action)| action.clone())
    }

    /// Renders the subtree rooted at `el`. Hidden subtrees render as an
    /// empty string.
    pub fn render(&self, el: ElementId) -> String {
        self.render_node(el).unwrap_or_default()
    }

    fn render_node(&self, el: ElementId) -> Option<String> {
        let node = self.node(el)?;
        if node.style.display == Display::None {
            return None;
        }

        let children: Vec<String> = node
            .children
            .iter()
            .filter_map(|child| self.render_node(*child))
            .collect();

        let body = match node.tag {
            Tag::Row => {
                let parts: Vec<&str> = children.iter().map(String::as_str).collect();
                lipgloss::join_horizontal(lipgloss::CENTER, &parts)
            }
            Tag::Container => {
                let mut lines: Vec<&str> = Vec::with_capacity(children.len() + 1);
                if !node.text.is_empty() {
                    lines.push(node.text.as_str());
                }
                lines.extend(children.iter().map(String::as_str));
                let position = match node.style.text_align {
                    TextAlign::Left => lipgloss::LEFT,
                    TextAlign::Center => lipgloss::CENTER,
                };
                lipgloss::join_vertical(position, &lines)
            }
            Tag::Heading | Tag::Paragraph | Tag::Button | Tag::Text => node.text.clone(),
        };

        Some(node.style.to_lipgloss(node.tag).render(&body))
    }

    fn node(&self, el: ElementId) -> Option<&Node<A>> {
        self.nodes.get(el.0)
    }

    fn node_mut(&mut self, el: ElementId) -> Option<&mut Node<A>> {
        self.nodes.get_mut(el.0)
    }

    fn is_ancestor(&self, candidate: ElementId, of: ElementId) -> bool {
        let mut current = Some(of);
        while let Some(el) = current {
            if el == candidate {
                return true;
            }
            current = self.parent(el);
        }
        false
    }
}

impl<A: Clone> Surface for Document<A> {
    type Action = A;

    fn create(&mut self, tag: Tag) -> ElementId {
        self.nodes.push(Node::new(tag));
        ElementId(self.nodes.len() - 1)
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(node) = self.node_mut(el) {
            node.text.clear();
            node.text.push_str(text);
        }
    }

    fn set_style(&mut self, el: ElementId, prop: StyleProp) {
        if let Some(node) = self.node_mut(el) {
            node.style.apply(prop);
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        // Refuse to create cycles.
        if self.is_ancestor(child, parent) {
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            if let Some(node) = self.node_mut(old_parent) {
                node.children.retain(|c| *c != child);
            }
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn add_listener(&mut self, el: ElementId, event: Event, action: A) {
        if let Some(node) = self.node_mut(el) {
            node.listeners.push((event, action));
        }
    }
}
