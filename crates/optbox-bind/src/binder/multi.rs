use std::rc::Rc;

use optbox_core::codec;
use optbox_core::ids::{self, class};
use optbox_core::value::ValueMap;

use super::{
    claim, control_kind, interactive, items, mark_selected, path_crosses, read_control, trigger,
    wire_expander, write_summary, BindOptions,
};
use crate::host::{listener, EventKind, Host, NodeHandle};

/// Wire a Multi-choice container.
///
/// Every edit rescans all rows: `on_change` always receives the complete
/// value map as the document shows it, and the summary count comes from the
/// same scan. Clicking a checkbox or switch row outside its controls toggles
/// it; select and text rows ignore row clicks.
pub fn bind_multi_choice(
    host: &dyn Host,
    container_id: &str,
    on_change: impl Fn(&ValueMap) + 'static,
    options: BindOptions,
) -> bool {
    let Some(root) = claim(host, container_id) else {
        return false;
    };
    wire_expander(host, container_id);

    let on_change: Rc<dyn Fn(&ValueMap)> = Rc::new(on_change);
    for (item, value) in items(host, root, class::OPTION) {
        let kind = control_kind(host, item);
        let control_id = ids::control(container_id, &value);
        let Some(control) = host.find(&control_id) else {
            tracing::debug!(container_id = %container_id, control_id = %control_id, "option has no control");
            continue;
        };

        let id = container_id.to_string();
        let callback = on_change.clone();
        host.listen(
            control,
            trigger(kind),
            listener(move |host, event| {
                let current = read_control(host, event.current_target, kind);
                mark_selected(host, item, codec::is_truthy(kind, &current));

                let Some(root) = host.find(&id) else {
                    return;
                };
                let (values, count) = rescan(host, root, &id);
                if options.update_header {
                    write_summary(host, &id, &codec::summary_text(count));
                }
                tracing::trace!(container_id = %id, value = ?current, "multi choice changed");
                callback(&values);
            }),
        );

        if kind.is_toggle() {
            host.listen(
                item,
                EventKind::Click,
                listener(move |host, event| {
                    if path_crosses(host, event, &interactive()) {
                        return;
                    }
                    if let Some(control) = host.find(&control_id) {
                        host.set_checked(control, !host.checked(control));
                        host.dispatch(control, EventKind::Change);
                    }
                }),
            );
        }
    }
    true
}

/// Current value map and truthy count, read from every row.
fn rescan(host: &dyn Host, root: NodeHandle, container_id: &str) -> (ValueMap, usize) {
    let mut values = ValueMap::new();
    let mut count = 0;
    for (item, value) in items(host, root, class::OPTION) {
        let kind = control_kind(host, item);
        let current = match host.find(&ids::control(container_id, &value)) {
            Some(control) => read_control(host, control, kind),
            None => codec::empty_value(kind),
        };
        if codec::is_truthy(kind, &current) {
            count += 1;
        }
        values.insert(value, current);
    }
    (values, count)
}
