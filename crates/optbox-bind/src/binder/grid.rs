use std::rc::Rc;

use optbox_core::codec;
use optbox_core::ids::{self, class};
use optbox_core::value::GridValues;

use super::{
    claim, interactive, items, mark_selected, path_crosses, wire_expander, write_summary,
    BindOptions,
};
use crate::host::{listener, EventKind, Host, NodeHandle};

/// Wire a Grid-choice container.
///
/// Same full-rescan reporting as Multi-choice, restricted to booleans. A
/// click on a cell or its label toggles that cell. Select-all and
/// deselect-all flip each cell not yet in the target state and fire one
/// `change` per flipped cell, so `on_change` runs once per transition.
pub fn bind_grid_choice(
    host: &dyn Host,
    container_id: &str,
    on_change: impl Fn(&GridValues) + 'static,
    options: BindOptions,
) -> bool {
    let Some(root) = claim(host, container_id) else {
        return false;
    };
    wire_expander(host, container_id);

    let on_change: Rc<dyn Fn(&GridValues)> = Rc::new(on_change);
    for (cell, value) in items(host, root, class::CELL) {
        let control_id = ids::control(container_id, &value);
        let Some(control) = host.find(&control_id) else {
            tracing::debug!(container_id = %container_id, control_id = %control_id, "cell has no checkbox");
            continue;
        };

        let id = container_id.to_string();
        let callback = on_change.clone();
        host.listen(
            control,
            EventKind::Change,
            listener(move |host, event| {
                let checked = host.checked(event.current_target);
                mark_selected(host, cell, checked);

                let Some(root) = host.find(&id) else {
                    return;
                };
                let values = rescan(host, root, &id);
                if options.update_header {
                    let count = values.values().filter(|&&on| on).count();
                    write_summary(host, &id, &codec::summary_text(count));
                }
                tracing::trace!(container_id = %id, value = checked, "grid choice changed");
                callback(&values);
            }),
        );

        host.listen(
            cell,
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

    for (button_id, target) in [
        (ids::select_all(container_id), true),
        (ids::deselect_all(container_id), false),
    ] {
        if let Some(button) = host.find(&button_id) {
            let id = container_id.to_string();
            host.listen(
                button,
                EventKind::Click,
                listener(move |host, _| set_all(host, &id, target)),
            );
        }
    }
    true
}

/// Bring every cell to `target`, one dispatched `change` per flipped cell.
fn set_all(host: &dyn Host, container_id: &str, target: bool) {
    let Some(root) = host.find(container_id) else {
        return;
    };
    for (_, value) in items(host, root, class::CELL) {
        let Some(control) = host.find(&ids::control(container_id, &value)) else {
            continue;
        };
        if host.checked(control) != target {
            host.set_checked(control, target);
            host.dispatch(control, EventKind::Change);
        }
    }
}

fn rescan(host: &dyn Host, root: NodeHandle, container_id: &str) -> GridValues {
    items(host, root, class::CELL)
        .into_iter()
        .map(|(_, value)| {
            let checked = host
                .find(&ids::control(container_id, &value))
                .is_some_and(|c| host.checked(c));
            (value, checked)
        })
        .collect()
}
