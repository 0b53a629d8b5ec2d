//! HTML serialization of markup trees.

use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["input", "hr", "br", "img"];

pub fn to_html(node: &Node) -> String {
    let mut output = String::new();
    write_node(node, &mut output);
    output
}

fn write_node(node: &Node, output: &mut String) {
    match node {
        Node::Empty => {}
        Node::Text(t) => output.push_str(&escape_text(t)),
        Node::Element(e) => write_element(e, output),
        Node::Fragment(children) => {
            for child in children {
                write_node(child, output);
            }
        }
    }
}

fn write_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.tag);

    for (name, value) in &element.attrs {
        output.push(' ');
        output.push_str(name);
        if !value.is_empty() || !is_boolean_attr(name) {
            output.push_str("=\"");
            output.push_str(&escape_attr(value));
            output.push('"');
        }
    }
    if !element.classes.is_empty() {
        output.push_str(" class=\"");
        output.push_str(&escape_attr(&element.classes.join(" ")));
        output.push('"');
    }

    output.push('>');
    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(child, output);
    }
    output.push_str("</");
    output.push_str(&element.tag);
    output.push('>');
}

fn is_boolean_attr(name: &str) -> bool {
    matches!(name, "checked" | "selected" | "disabled" | "hidden" | "readonly")
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
