//! Serializable markup tree.
//!
//! Renderers build trees with the free functions and chainable builders
//! below; hosts mount them and [`crate::html::to_html`] serializes them.
//!
//! ```
//! use optbox_core::node::{el, text};
//!
//! let node = el("div").id("root").class("box").child(text("hi")).into_node();
//! assert_eq!(node.find_by_id("root").map(|e| e.tag.as_str()), Some("div"));
//! ```

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Node {
    #[default]
    Empty,
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order. Boolean attributes hold an empty value.
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

pub fn el(tag: impl Into<String>) -> Element {
    Element {
        tag: tag.into(),
        attrs: Vec::new(),
        classes: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

impl Element {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Set an attribute, replacing any earlier value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute such as `checked` when `on` is true.
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if child != Node::Empty {
            self.children.push(child);
        }
        self
    }

    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// Apply `f` only when `condition` holds.
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            f(self)
        } else {
            self
        }
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn element_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Option<Element>> for Node {
    fn from(element: Option<Element>) -> Self {
        element.map(Node::Element).unwrap_or_default()
    }
}

impl Node {
    /// Depth-first, pre-order list of every element in the tree.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |e| out.push(e));
        out
    }

    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        match self {
            Node::Empty | Node::Text(_) => {}
            Node::Element(e) => {
                f(e);
                for child in &e.children {
                    child.walk(f);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.walk(f);
                }
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|e| e.element_id() == Some(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
