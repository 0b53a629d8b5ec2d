use std::rc::Rc;

use optbox_core::ids::{self, attr, class};

use super::{claim, interactive, items, mark_selected, path_crosses, wire_expander, write_summary};
use super::BindOptions;
use crate::host::{listener, EventKind, Host, NodeHandle};
use crate::selector::Selector;

/// Wire an Exclusive-choice container.
///
/// Selecting an option unchecks every radio sharing `group_key` anywhere in
/// the document, recomputes all row markers from the new value and, with
/// `update_header`, copies the selected row's rendered label text into the
/// summary. `on_change` receives the selected option value.
///
/// Returns false when the container is missing or already bound.
pub fn bind_exclusive_choice(
    host: &dyn Host,
    container_id: &str,
    group_key: &str,
    on_change: impl Fn(&str) + 'static,
    options: BindOptions,
) -> bool {
    let Some(root) = claim(host, container_id) else {
        return false;
    };
    wire_expander(host, container_id);

    let on_change: Rc<dyn Fn(&str)> = Rc::new(on_change);
    for (item, value) in items(host, root, class::OPTION) {
        let control_id = ids::control(container_id, &value);
        let Some(control) = host.find(&control_id) else {
            tracing::debug!(container_id = %container_id, control_id = %control_id, "option has no control");
            continue;
        };

        let id = container_id.to_string();
        let group = group_key.to_string();
        let callback = on_change.clone();
        host.listen(
            control,
            EventKind::Change,
            listener(move |host, event| {
                if host.checked(event.current_target) {
                    select(host, &id, &group, event.current_target, options, &*callback);
                }
            }),
        );

        host.listen(
            item,
            EventKind::Click,
            listener(move |host, event| {
                let stop = interactive().or(Selector::class(class::NESTED));
                if path_crosses(host, event, &stop) {
                    return;
                }
                let Some(control) = host.find(&control_id) else {
                    return;
                };
                if !host.checked(control) {
                    host.set_checked(control, true);
                    host.dispatch(control, EventKind::Change);
                }
            }),
        );
    }
    true
}

fn select(
    host: &dyn Host,
    container_id: &str,
    group_key: &str,
    control: NodeHandle,
    options: BindOptions,
    on_change: &dyn Fn(&str),
) {
    let Some(value) = host.attribute(control, attr::VALUE) else {
        return;
    };

    let group = Selector::tag("input")
        .and(Selector::attr_eq("type", "radio"))
        .and(Selector::attr_eq("name", group_key));
    for other in host.query_all(None, &group) {
        if other != control {
            host.set_checked(other, false);
        }
    }

    if let Some(root) = host.find(container_id) {
        for (item, item_value) in items(host, root, class::OPTION) {
            mark_selected(host, item, item_value == value);
        }
    }

    if options.update_header {
        let label = host
            .find(&ids::label(container_id, &value))
            .map(|l| host.text(l))
            .unwrap_or_default();
        write_summary(host, container_id, &label);
    }

    tracing::trace!(container_id = %container_id, value = %value, "exclusive choice changed");
    on_change(&value);
}
