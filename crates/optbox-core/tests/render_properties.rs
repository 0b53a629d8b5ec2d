//! Render-level invariants checked across many configurations.

use optbox_core::config::from_json_str;
use optbox_core::ids::{self, attr, class};
use optbox_core::layout::GridLayout;
use optbox_core::{
    render_exclusive_choice, render_grid_choice, ChoiceOption, ContainerBase,
    ExclusiveChoiceConfig, GridChoiceConfig, NestedCard, Node,
};
use proptest::prelude::*;

// ============================================================================
// HELPERS
// ============================================================================

fn exclusive_with(count: usize, selected: &str) -> ExclusiveChoiceConfig {
    (0..count).fold(
        ExclusiveChoiceConfig::new(ContainerBase::new("ex", "ex", "Exclusive"), selected),
        |config, i| config.option(ChoiceOption::new(format!("v{i}"), format!("Option {i}"))),
    )
}

fn marked_values(tree: &Node) -> Vec<String> {
    tree.find_all_by_class(class::OPTION)
        .into_iter()
        .filter(|row| row.get_attr(attr::SELECTED) == Some("true"))
        .filter_map(|row| row.get_attr(attr::VALUE).map(str::to_string))
        .collect()
}

// ============================================================================
// NESTED CARD DISPATCH
// ============================================================================

fn exclusive_around(card: &str) -> ExclusiveChoiceConfig {
    from_json_str(&format!(
        r#"{{
            "id": "mode", "name": "mode", "title": "Mode", "selectedValue": "custom",
            "options": [{{ "value": "custom", "label": "Custom", "nestedCards": [{card}] }}]
        }}"#
    ))
    .unwrap()
}

fn dispatched_widget(card: &str) -> (NestedCard, Option<String>) {
    let config = exclusive_around(card);
    let tree = render_exclusive_choice(&config);
    let widget = tree
        .find_by_id("card")
        .and_then(|e| e.get_attr(attr::WIDGET))
        .map(str::to_string);
    (config.options[0].nested_cards[0].clone(), widget)
}

#[test]
fn nested_cards_dispatch_on_their_discriminating_field() {
    let (plain, widget) = dispatched_widget(r#"{ "id": "card", "title": "Card", "name": "card" }"#);
    assert!(matches!(plain, NestedCard::Value(_)));
    assert_eq!(widget.as_deref(), Some("value-card"));

    let (rows, widget) =
        dispatched_widget(r#"{ "id": "card", "title": "Card", "name": "card", "rows": 4 }"#);
    assert!(matches!(rows, NestedCard::TextBlock(_)));
    assert_eq!(widget.as_deref(), Some("text-block"));

    let (grid, widget) = dispatched_widget(
        r#"{ "id": "card", "title": "Card", "name": "card", "type": "grid-choice" }"#,
    );
    assert!(matches!(grid, NestedCard::Grid(_)));
    assert_eq!(widget.as_deref(), Some("grid-choice"));
}

#[test]
fn nested_grid_items_do_not_count_as_exclusive_rows() {
    let grid = GridChoiceConfig::new(ContainerBase::new("g", "g", "G"))
        .option(ChoiceOption::new("x", "X"))
        .value("x", true)
        .show_header(false);
    let config = exclusive_with(2, "v1").option(
        optbox_core::ExclusiveOption::from(ChoiceOption::new("v2", "Two")).nested(grid),
    );

    let tree = render_exclusive_choice(&config);
    assert_eq!(tree.find_all_by_class(class::OPTION).len(), 3);
    assert_eq!(marked_values(&tree), vec!["v1"]);
    assert!(tree.find_by_id(&ids::item("g", "x")).is_some());
}

// ============================================================================
// GRID COLUMN BOUND
// ============================================================================

#[test]
fn grid_never_exceeds_max_columns() {
    let config = GridChoiceConfig::new(ContainerBase::new("g", "g", "G")).max_columns(3);
    let layout = GridLayout::for_config(&config, 8);

    assert_eq!(layout.column_count(300.0), 1);
    assert_eq!(layout.column_count(600.0), 3);
    assert_eq!(layout.column_count(1200.0), 3);

    let tree = render_grid_choice(&config);
    let grid = tree.find_all_by_class("optbox-grid");
    assert_eq!(grid[0].get_attr("style"), Some(layout.style().as_str()));
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn exclusive_marks_at_most_one_row(count in 1usize..12, pick in 0usize..16) {
        let selected = format!("v{pick}");
        let tree = render_exclusive_choice(&exclusive_with(count, &selected));
        let marked = marked_values(&tree);

        if pick < count {
            prop_assert_eq!(marked, vec![selected.clone()]);
            let summary = tree.find_by_id(&ids::summary("ex")).unwrap().text_content();
            prop_assert_eq!(summary, format!("Option {pick}"));
        } else {
            prop_assert!(marked.is_empty());
        }

        let checked = tree
            .elements()
            .into_iter()
            .filter(|e| e.get_attr("type") == Some("radio") && e.has_attr("checked"))
            .count();
        prop_assert!(checked <= 1);
    }

    #[test]
    fn grid_summary_matches_checked_cells(checks in prop::collection::vec(any::<bool>(), 0..20)) {
        let config = checks.iter().enumerate().fold(
            GridChoiceConfig::new(ContainerBase::new("g", "g", "G")),
            |config, (i, &on)| {
                config
                    .option(ChoiceOption::new(format!("o{i}"), format!("O{i}")))
                    .value(format!("o{i}"), on)
            },
        );
        let tree = render_grid_choice(&config);
        let on = checks.iter().filter(|&&c| c).count();

        prop_assert_eq!(tree.find_all_by_class(class::SELECTED).len(), on);
        let summary = tree.find_by_id(&ids::summary("g")).unwrap().text_content();
        prop_assert_eq!(summary, optbox_core::codec::summary_text(on));
    }
}
