//! Value interpretation shared by initial render and live updates.
//!
//! The codec never coerces across kinds: a `select` value is always a string,
//! so a boolean stored against a select option is simply not truthy.

use crate::config::{ChoiceOption, ControlKind};
use crate::value::{GridValues, StoredValue, ValueMap};

pub const NO_ITEMS_SELECTED: &str = "No items selected";

/// Whether a stored value counts toward the "N items selected" summary.
///
/// `select` counts a non-empty string; every other kind counts only a
/// boolean `true`.
pub fn is_truthy(kind: ControlKind, value: &StoredValue) -> bool {
    match kind {
        ControlKind::Select => value.as_str().is_some_and(|s| !s.is_empty()),
        _ => value.as_bool() == Some(true),
    }
}

/// Summary label for `n` truthy options.
pub fn summary_text(n: usize) -> String {
    match n {
        0 => NO_ITEMS_SELECTED.to_string(),
        1 => "1 item selected".to_string(),
        n => format!("{n} items selected"),
    }
}

/// Count options whose entry in `values` is truthy for the option's kind.
pub fn count_truthy<'a>(
    options: impl IntoIterator<Item = &'a ChoiceOption>,
    values: &ValueMap,
) -> usize {
    options
        .into_iter()
        .filter(|o| {
            values
                .get(&o.value)
                .is_some_and(|v| is_truthy(o.control_kind, v))
        })
        .count()
}

/// Count grid options whose entry is `true`.
pub fn count_checked<'a>(
    options: impl IntoIterator<Item = &'a ChoiceOption>,
    values: &GridValues,
) -> usize {
    options
        .into_iter()
        .filter(|o| values.get(&o.value).copied().unwrap_or(false))
        .count()
}

/// The value an untouched control of this kind holds.
pub fn empty_value(kind: ControlKind) -> StoredValue {
    if kind.stores_text() {
        StoredValue::Text(String::new())
    } else {
        StoredValue::Bool(false)
    }
}

pub fn matches_kind(kind: ControlKind, value: &StoredValue) -> bool {
    kind.stores_text() == value.is_text()
}

pub fn expected_type(kind: ControlKind) -> &'static str {
    if kind.stores_text() {
        "string"
    } else {
        "boolean"
    }
}

/// Read a toggle's state; non-boolean values read as unchecked.
pub fn read_checked(value: Option<&StoredValue>) -> bool {
    value.and_then(StoredValue::as_bool).unwrap_or(false)
}

/// Read a string control's value; non-string values read as empty.
pub fn read_text(value: Option<&StoredValue>) -> &str {
    value.and_then(StoredValue::as_str).unwrap_or("")
}
