//! Node identity contract shared by the renderer and the binder.
//!
//! The binder locates every interactive node of a mounted tree through these
//! ids, class names and attributes.
//! Option values are escaped into id-safe tokens; the raw value always
//! travels in the `data-value` attribute.

/// Escape a value into an id-safe token.
///
/// ASCII alphanumerics and `-` pass through; every other byte becomes `_xx`
/// (lowercase hex). The mapping is injective, so distinct option values never
/// collide.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("_{byte:02x}"));
        }
    }
    out
}

pub fn header(container: &str) -> String {
    format!("{container}-header")
}

pub fn summary(container: &str) -> String {
    format!("{container}-summary")
}

pub fn body(container: &str) -> String {
    format!("{container}-body")
}

/// The list entry (row or grid cell) of one option.
pub fn item(container: &str, value: &str) -> String {
    format!("{container}-item-{}", escape(value))
}

/// The input/select of one option.
pub fn control(container: &str, value: &str) -> String {
    format!("{container}-control-{}", escape(value))
}

/// The node holding an option's label text.
pub fn label(container: &str, value: &str) -> String {
    format!("{container}-label-{}", escape(value))
}

/// The region holding an Exclusive-choice option's nested cards.
pub fn nested(container: &str, value: &str) -> String {
    format!("{container}-nested-{}", escape(value))
}

pub fn select_all(container: &str) -> String {
    format!("{container}-select-all")
}

pub fn deselect_all(container: &str) -> String {
    format!("{container}-deselect-all")
}

pub fn card_control(card: &str) -> String {
    format!("{card}-control")
}

pub fn import_button(card: &str) -> String {
    format!("{card}-import")
}

pub fn export_button(card: &str) -> String {
    format!("{card}-export")
}

/// Class names the binder queries by.
pub mod class {
    pub const CONTAINER: &str = "optbox";
    pub const HEADER: &str = "optbox-header";
    pub const SUMMARY: &str = "optbox-summary";
    pub const BODY: &str = "optbox-body";
    /// Rows of Exclusive-choice and Multi-choice lists.
    pub const OPTION: &str = "optbox-option";
    /// Cells of a Grid-choice grid.
    pub const CELL: &str = "optbox-cell";
    pub const NESTED: &str = "optbox-nested";
    pub const CARD: &str = "optbox-card";
    pub const SELECTED: &str = "selected";
    pub const EXPANDED: &str = "expanded";
}

/// Attribute names the binder reads and writes.
pub mod attr {
    /// Raw option value on items and controls.
    pub const VALUE: &str = "data-value";
    /// Control kind of a Multi-choice row or value card.
    pub const CONTROL: &str = "data-control";
    /// Widget kind of a container or card root.
    pub const WIDGET: &str = "data-widget";
    /// `"true"`/`"false"` selection marker on items.
    pub const SELECTED: &str = "data-selected";
    /// Set once a container has been bound.
    pub const BOUND: &str = "data-bound";
    pub const EXPANDED: &str = "aria-expanded";
}

/// Values of the [`attr::WIDGET`] attribute.
pub mod widget {
    pub const EXCLUSIVE_CHOICE: &str = "exclusive-choice";
    pub const MULTI_CHOICE: &str = "multi-choice";
    pub const GRID_CHOICE: &str = "grid-choice";
    pub const VALUE_CARD: &str = "value-card";
    pub const TEXT_BLOCK: &str = "text-block";
}
