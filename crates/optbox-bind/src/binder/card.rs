use std::rc::Rc;

use optbox_core::ids;
use optbox_core::value::StoredValue;

use super::{claim_card, control_kind, read_control, trigger};
use crate::host::{listener, EventKind, Host};

/// Wire a value card: one listener on its control, reporting the typed value.
pub fn bind_value_card(
    host: &dyn Host,
    card_id: &str,
    on_change: impl Fn(StoredValue) + 'static,
) -> bool {
    let Some((root, control)) = claim_card(host, card_id) else {
        return false;
    };

    let kind = control_kind(host, root);
    let id = card_id.to_string();
    host.listen(
        control,
        trigger(kind),
        listener(move |host, event| {
            let value = read_control(host, event.current_target, kind);
            tracing::trace!(container_id = %id, value = ?value, "value card changed");
            on_change(value);
        }),
    );
    true
}

/// Caller-supplied behavior for the import and export buttons.
///
/// A missing hook leaves its button inert.
#[derive(Clone, Default)]
pub struct TextBlockHooks {
    pub on_import: Option<Rc<dyn Fn()>>,
    pub on_export: Option<Rc<dyn Fn()>>,
}

impl TextBlockHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_import(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_import = Some(Rc::new(hook));
        self
    }

    pub fn on_export(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_export = Some(Rc::new(hook));
        self
    }
}

/// Wire a text-block card: every edit reports the full text.
pub fn bind_text_block(
    host: &dyn Host,
    card_id: &str,
    on_change: impl Fn(&str) + 'static,
    hooks: TextBlockHooks,
) -> bool {
    let Some((_, textarea)) = claim_card(host, card_id) else {
        return false;
    };

    let id = card_id.to_string();
    host.listen(
        textarea,
        EventKind::Input,
        listener(move |host, event| {
            let text = host.value(event.current_target);
            tracing::trace!(container_id = %id, len = text.len(), "text block changed");
            on_change(&text);
        }),
    );

    for (button_id, hook) in [
        (ids::import_button(card_id), hooks.on_import),
        (ids::export_button(card_id), hooks.on_export),
    ] {
        if let (Some(button), Some(hook)) = (host.find(&button_id), hook) {
            host.listen(button, EventKind::Click, listener(move |_, _| hook()));
        }
    }
    true
}

/// Current text of a text-block card, or its placeholder when the text is
/// empty and `use_placeholder_if_empty` is set. Missing cards read as empty.
pub fn text_block_value(host: &dyn Host, card_id: &str, use_placeholder_if_empty: bool) -> String {
    let control_id = ids::card_control(card_id);
    let Some(textarea) = host.find(&control_id) else {
        tracing::debug!(container_id = %card_id, control_id = %control_id, "text block not mounted");
        return String::new();
    };
    let value = host.value(textarea);
    if value.is_empty() && use_placeholder_if_empty {
        return host.attribute(textarea, "placeholder").unwrap_or_default();
    }
    value
}

/// Replace a text-block card's text without firing any event.
pub fn set_text_block_value(host: &dyn Host, card_id: &str, value: &str) {
    let control_id = ids::card_control(card_id);
    match host.find(&control_id) {
        Some(textarea) => host.set_value(textarea, value),
        None => {
            tracing::debug!(container_id = %card_id, control_id = %control_id, "text block not mounted");
        }
    }
}
