//! Query predicates for host lookups.
//!
//! A [`Selector`] is evaluated directly by in-process hosts through
//! [`SelectorTarget`], and rendered with [`Selector::to_css`] for hosts
//! backed by a real document.

use optbox_core::node::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every element.
    Any,
    Tag(String),
    Id(String),
    Class(String),
    HasAttr(String),
    AttrEq(String, String),
    /// Conjunction.
    All(Vec<Selector>),
    /// Disjunction.
    AnyOf(Vec<Selector>),
}

/// The element facts a selector can test.
pub trait SelectorTarget {
    fn tag_name(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

impl Selector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Selector::Tag(tag.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    pub fn has_attr(name: impl Into<String>) -> Self {
        Selector::HasAttr(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::AttrEq(name.into(), value.into())
    }

    /// Conjoin with `other`, flattening nested conjunctions.
    pub fn and(self, other: Selector) -> Self {
        let mut parts = match self {
            Selector::All(parts) => parts,
            Selector::Any => Vec::new(),
            s => vec![s],
        };
        match other {
            Selector::All(more) => parts.extend(more),
            Selector::Any => {}
            s => parts.push(s),
        }
        match parts.len() {
            0 => Selector::Any,
            1 => parts.pop().unwrap_or(Selector::Any),
            _ => Selector::All(parts),
        }
    }

    pub fn or(self, other: Selector) -> Self {
        let mut parts = match self {
            Selector::AnyOf(parts) => parts,
            s => vec![s],
        };
        match other {
            Selector::AnyOf(more) => parts.extend(more),
            s => parts.push(s),
        }
        Selector::AnyOf(parts)
    }

    pub fn matches<T: SelectorTarget + ?Sized>(&self, target: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Tag(tag) => target.tag_name().eq_ignore_ascii_case(tag),
            Selector::Id(id) => target.attribute("id") == Some(id.as_str()),
            Selector::Class(class) => target.has_class(class),
            Selector::HasAttr(name) => target.attribute(name).is_some(),
            Selector::AttrEq(name, value) => target.attribute(name) == Some(value.as_str()),
            Selector::All(parts) => parts.iter().all(|p| p.matches(target)),
            Selector::AnyOf(parts) => parts.iter().any(|p| p.matches(target)),
        }
    }

    /// CSS selector string with the same meaning.
    pub fn to_css(&self) -> String {
        match self {
            Selector::AnyOf(parts) if parts.is_empty() => ":not(*)".to_string(),
            Selector::AnyOf(parts) => parts
                .iter()
                .map(Selector::to_css)
                .collect::<Vec<_>>()
                .join(", "),
            other => other.compound(),
        }
    }

    fn compound(&self) -> String {
        match self {
            Selector::Any => "*".to_string(),
            Selector::Tag(tag) => tag.clone(),
            Selector::Id(id) => format!("#{}", css_ident(id)),
            Selector::Class(class) => format!(".{}", css_ident(class)),
            Selector::HasAttr(name) => format!("[{name}]"),
            Selector::AttrEq(name, value) => format!("[{name}=\"{}\"]", css_string(value)),
            Selector::AnyOf(parts) if parts.is_empty() => ":not(*)".to_string(),
            Selector::AnyOf(parts) => format!(
                ":is({})",
                parts.iter().map(Selector::to_css).collect::<Vec<_>>().join(", ")
            ),
            Selector::All(parts) => {
                let mut leaves = Vec::new();
                flatten_all(parts, &mut leaves);

                // A type selector has to lead the compound.
                let (tags, rest): (Vec<&Selector>, Vec<&Selector>) = leaves
                    .into_iter()
                    .filter(|p| !matches!(p, Selector::Any))
                    .partition(|p| matches!(p, Selector::Tag(_)));
                let mut out: String = tags.iter().map(|t| t.compound()).collect();
                for part in rest {
                    out.push_str(&part.compound());
                }
                if out.is_empty() {
                    out.push('*');
                }
                out
            }
        }
    }
}

fn flatten_all<'a>(parts: &'a [Selector], out: &mut Vec<&'a Selector>) {
    for part in parts {
        match part {
            Selector::All(inner) => flatten_all(inner, out),
            other => out.push(other),
        }
    }
}

fn css_ident(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\3{c} "));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

fn css_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

impl SelectorTarget for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.get_attr(name)
    }

    fn has_class(&self, class: &str) -> bool {
        Element::has_class(self, class)
    }
}
