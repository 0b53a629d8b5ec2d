//! In-memory host.
//!
//! [`MemoryDom`] mounts markup trees from the renderer and behaves like a
//! small browser document: ids are indexed, control state is tracked apart
//! from attributes, and events bubble from the target through its ancestors.
//! The user-simulation helpers ([`MemoryDom::click`], [`MemoryDom::choose`],
//! [`MemoryDom::type_text`], [`MemoryDom::toggle`]) reproduce the native
//! state change and event sequence of the matching user gesture.

use std::cell::RefCell;
use std::collections::HashMap;

use optbox_core::html::to_html;
use optbox_core::node::{el, Element, Node};

use crate::host::{Event, EventKind, Host, Listener, NodeHandle};
use crate::selector::{Selector, SelectorTarget};

const TEXT_TAG: &str = "#text";
const ROOT: usize = 0;

#[derive(Debug)]
struct DomNode {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    /// Content of text nodes.
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    checked: bool,
    value: String,
}

impl DomNode {
    fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            checked: false,
            value: String::new(),
        }
    }

    fn text_node(content: &str) -> Self {
        Self {
            text: content.to_string(),
            ..Self::element(TEXT_TAG)
        }
    }

    fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    fn is_input(&self, input_type: &str) -> bool {
        self.tag == "input" && self.attribute("type") == Some(input_type)
    }
}

impl SelectorTarget for DomNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Default)]
struct DomState {
    nodes: Vec<DomNode>,
    ids: HashMap<String, usize>,
    listeners: HashMap<(usize, EventKind), Vec<Listener>>,
}

impl DomState {
    fn node(&self, handle: NodeHandle) -> Option<&DomNode> {
        self.nodes.get(handle.0)
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut DomNode> {
        self.nodes.get_mut(handle.0)
    }

    fn push(&mut self, parent: usize, mut node: DomNode) -> usize {
        let index = self.nodes.len();
        node.parent = Some(parent);
        self.nodes.push(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(index);
        }
        index
    }

    /// Insert `node` under `parent`, returning the top-level indices created.
    fn insert(&mut self, parent: usize, node: &Node) -> Vec<usize> {
        match node {
            Node::Empty => Vec::new(),
            Node::Text(t) => vec![self.push(parent, DomNode::text_node(t))],
            Node::Fragment(children) => children
                .iter()
                .flat_map(|c| self.insert(parent, c))
                .collect(),
            Node::Element(e) => vec![self.insert_element(parent, e)],
        }
    }

    fn insert_element(&mut self, parent: usize, element: &Element) -> usize {
        let mut dom = DomNode::element(&element.tag);
        dom.attrs = element.attrs.clone();
        dom.classes = element.classes.clone();
        match element.tag.as_str() {
            "input" => {
                dom.checked = element.has_attr("checked");
                dom.value = element.get_attr("value").unwrap_or_default().to_string();
            }
            "textarea" => dom.value = element.text_content(),
            _ => {}
        }

        let index = self.push(parent, dom);
        if let Some(id) = element.element_id() {
            self.ids.entry(id.to_string()).or_insert(index);
        }
        for child in &element.children {
            self.insert(index, child);
        }
        if element.tag == "select" {
            let value = self.initial_select_value(index);
            self.nodes[index].value = value;
        }
        index
    }

    fn select_entries(&self, select: usize) -> Vec<usize> {
        self.nodes[select]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].tag == "option")
            .collect()
    }

    fn option_value(&self, option: usize) -> String {
        let node = &self.nodes[option];
        match node.attribute("value") {
            Some(v) => v.to_string(),
            None => self.text_of(option),
        }
    }

    fn initial_select_value(&self, select: usize) -> String {
        let entries = self.select_entries(select);
        entries
            .iter()
            .find(|&&o| self.nodes[o].attribute("selected").is_some())
            .or_else(|| entries.first())
            .map(|&o| self.option_value(o))
            .unwrap_or_default()
    }

    fn text_of(&self, index: usize) -> String {
        let mut out = String::new();
        self.collect_text(index, &mut out);
        out
    }

    fn collect_text(&self, index: usize, out: &mut String) {
        let node = &self.nodes[index];
        if node.is_text() {
            out.push_str(&node.text);
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Pre-order element descendants of `index`, excluding `index` itself.
    fn descendants(&self, index: usize, out: &mut Vec<usize>) {
        for &child in &self.nodes[index].children {
            if !self.nodes[child].is_text() {
                out.push(child);
                self.descendants(child, out);
            }
        }
    }

    fn unindex_subtree(&mut self, index: usize) {
        let mut subtree = vec![index];
        self.descendants(index, &mut subtree);
        self.ids.retain(|_, v| !subtree.contains(v));
    }

    /// Rebuild a markup tree reflecting live control state.
    fn to_node(&self, index: usize) -> Node {
        let dom = &self.nodes[index];
        if dom.is_text() {
            return Node::Text(dom.text.clone());
        }

        let mut element = el(dom.tag.as_str());
        for (name, value) in &dom.attrs {
            if name != "checked" && name != "selected" {
                element = element.attr(name, value);
            }
        }
        for class in &dom.classes {
            element = element.class(class);
        }
        match dom.tag.as_str() {
            "input" if dom.is_input("checkbox") || dom.is_input("radio") => {
                element = element.flag("checked", dom.checked);
            }
            "input" => element = element.attr("value", &dom.value),
            "option" => {
                let selected = dom
                    .parent
                    .is_some_and(|p| self.nodes[p].value == self.option_value(index));
                element = element.flag("selected", selected);
            }
            _ => {}
        }
        if dom.tag == "textarea" {
            return element.text(&dom.value).into_node();
        }
        element
            .children(dom.children.iter().map(|&c| self.to_node(c)))
            .into_node()
    }
}

/// Single-threaded in-memory document.
pub struct MemoryDom {
    state: RefCell<DomState>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        let mut state = DomState::default();
        state.nodes.push(DomNode::element("body"));
        Self {
            state: RefCell::new(state),
        }
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document root every mount attaches to by default.
    pub fn body(&self) -> NodeHandle {
        NodeHandle(ROOT)
    }

    /// Mount a tree under the document root, returning its first element.
    pub fn mount(&self, node: &Node) -> Option<NodeHandle> {
        self.mount_into(self.body(), node)
    }

    pub fn mount_into(&self, parent: NodeHandle, node: &Node) -> Option<NodeHandle> {
        let mut state = self.state.borrow_mut();
        if state.node(parent).is_none() {
            tracing::debug!(parent = parent.0, "mount target does not exist");
            return None;
        }
        let created = state.insert(parent.0, node);
        created
            .into_iter()
            .find(|&i| !state.nodes[i].is_text())
            .map(NodeHandle)
    }

    /// Markup of `node` including its live control state.
    pub fn snapshot(&self, node: NodeHandle) -> Node {
        let state = self.state.borrow();
        match state.node(node) {
            Some(_) => state.to_node(node.0),
            None => Node::Empty,
        }
    }

    pub fn outer_html(&self, node: NodeHandle) -> String {
        to_html(&self.snapshot(node))
    }

    /// Simulate a pointer click.
    ///
    /// A checkbox flips and a radio becomes checked before `click` bubbles;
    /// `change` follows when the control's state actually changed.
    pub fn click(&self, node: NodeHandle) {
        let changed = {
            let mut state = self.state.borrow_mut();
            match state.node_mut(node) {
                Some(n) if n.is_input("checkbox") => {
                    n.checked = !n.checked;
                    true
                }
                Some(n) if n.is_input("radio") => {
                    let was = n.checked;
                    n.checked = true;
                    !was
                }
                Some(_) => false,
                None => return,
            }
        };
        self.dispatch(node, EventKind::Click);
        if changed {
            self.dispatch(node, EventKind::Change);
        }
    }

    /// Simulate keyboard activation of a checkbox: flip and fire `change`
    /// without a click.
    pub fn toggle(&self, node: NodeHandle) {
        let current = self.checked(node);
        self.set_checked(node, !current);
        self.dispatch(node, EventKind::Change);
    }

    /// Simulate committing `value` in a select.
    pub fn choose(&self, node: NodeHandle, value: &str) {
        self.set_value(node, value);
        self.dispatch(node, EventKind::Change);
    }

    /// Simulate typing: the control's value becomes `text` and `input` fires.
    pub fn type_text(&self, node: NodeHandle, text: &str) {
        self.set_value(node, text);
        self.dispatch(node, EventKind::Input);
    }

    pub fn listener_count(&self, node: NodeHandle, kind: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .get(&(node.0, kind))
            .map_or(0, Vec::len)
    }
}

impl Host for MemoryDom {
    fn find(&self, id: &str) -> Option<NodeHandle> {
        self.state.borrow().ids.get(id).copied().map(NodeHandle)
    }

    fn query_all(&self, scope: Option<NodeHandle>, selector: &Selector) -> Vec<NodeHandle> {
        let state = self.state.borrow();
        let root = scope.map_or(ROOT, |s| s.0);
        if root >= state.nodes.len() {
            return Vec::new();
        }
        let mut candidates = Vec::new();
        state.descendants(root, &mut candidates);
        candidates
            .into_iter()
            .filter(|&i| selector.matches(&state.nodes[i]))
            .map(NodeHandle)
            .collect()
    }

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.state
            .borrow()
            .node(node)
            .and_then(|n| n.parent)
            .map(NodeHandle)
    }

    fn matches(&self, node: NodeHandle, selector: &Selector) -> bool {
        self.state
            .borrow()
            .node(node)
            .is_some_and(|n| !n.is_text() && selector.matches(n))
    }

    fn checked(&self, node: NodeHandle) -> bool {
        self.state.borrow().node(node).is_some_and(|n| n.checked)
    }

    fn set_checked(&self, node: NodeHandle, checked: bool) {
        if let Some(n) = self.state.borrow_mut().node_mut(node) {
            n.checked = checked;
        }
    }

    fn value(&self, node: NodeHandle) -> String {
        self.state
            .borrow()
            .node(node)
            .map(|n| n.value.clone())
            .unwrap_or_default()
    }

    /// A select only accepts one of its entries; anything else clears it.
    fn set_value(&self, node: NodeHandle, value: &str) {
        let mut state = self.state.borrow_mut();
        let Some(dom) = state.node(node) else {
            return;
        };
        let accepted = if dom.tag == "select" {
            let known = state
                .select_entries(node.0)
                .into_iter()
                .any(|o| state.option_value(o) == value);
            if known {
                value.to_string()
            } else {
                String::new()
            }
        } else {
            value.to_string()
        };
        state.nodes[node.0].value = accepted;
    }

    fn text(&self, node: NodeHandle) -> String {
        let state = self.state.borrow();
        match state.node(node) {
            Some(_) => state.text_of(node.0),
            None => String::new(),
        }
    }

    fn set_text(&self, node: NodeHandle, text: &str) {
        let mut state = self.state.borrow_mut();
        let Some(dom) = state.node(node) else {
            return;
        };
        let children = dom.children.clone();
        if let [only] = children[..] {
            if state.nodes[only].is_text() {
                state.nodes[only].text = text.to_string();
                return;
            }
        }
        for child in children {
            state.unindex_subtree(child);
            state.nodes[child].parent = None;
        }
        state.nodes[node.0].children.clear();
        state.push(node.0, DomNode::text_node(text));
    }

    fn attribute(&self, node: NodeHandle, name: &str) -> Option<String> {
        self.state
            .borrow()
            .node(node)
            .and_then(|n| n.attribute(name))
            .map(str::to_string)
    }

    fn set_attribute(&self, node: NodeHandle, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let Some(dom) = state.node_mut(node) else {
            return;
        };
        let previous = match dom.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value.to_string())),
            None => {
                dom.attrs.push((name.to_string(), value.to_string()));
                None
            }
        };
        if name == "id" {
            if let Some(old) = previous {
                state.ids.remove(&old);
            }
            state.ids.insert(value.to_string(), node.0);
        }
    }

    fn has_class(&self, node: NodeHandle, class: &str) -> bool {
        self.state
            .borrow()
            .node(node)
            .is_some_and(|n| n.has_class(class))
    }

    fn set_class(&self, node: NodeHandle, class: &str, on: bool) {
        if let Some(n) = self.state.borrow_mut().node_mut(node) {
            let present = n.classes.iter().any(|c| c == class);
            if on && !present {
                n.classes.push(class.to_string());
            } else if !on {
                n.classes.retain(|c| c != class);
            }
        }
    }

    fn listen(&self, node: NodeHandle, kind: EventKind, listener: Listener) {
        self.state
            .borrow_mut()
            .listeners
            .entry((node.0, kind))
            .or_default()
            .push(listener);
    }

    fn dispatch(&self, node: NodeHandle, kind: EventKind) {
        let path: Vec<NodeHandle> = {
            let state = self.state.borrow();
            let mut path = Vec::new();
            let mut current = state.node(node).map(|_| node.0);
            while let Some(i) = current {
                path.push(NodeHandle(i));
                current = state.nodes[i].parent;
            }
            path
        };
        tracing::trace!(node = node.0, event = kind.as_str(), "dispatch");

        for current_target in path {
            // Listeners may mutate the document, so none of them runs while
            // the state is borrowed.
            let listeners = self
                .state
                .borrow()
                .listeners
                .get(&(current_target.0, kind))
                .cloned()
                .unwrap_or_default();
            let event = Event {
                kind,
                target: node,
                current_target,
            };
            for listener in listeners {
                listener(self, &event);
            }
        }
    }
}
