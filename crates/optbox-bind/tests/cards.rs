mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{capture_logs, mount, node, Recorder};
use optbox_bind::{
    bind_text_block, bind_value_card, set_text_block_value, text_block_value, Host, MemoryDom,
    TextBlockHooks,
};
use optbox_core::ids::{self, attr};
use optbox_core::node::el;
use optbox_core::{
    render_text_block, render_value_card, ControlKind, SelectEntry, StoredValue,
    TextBlockCardConfig, ValueCardConfig,
};
use test_case::test_case;

// ============================================================================
// VALUE CARDS
// ============================================================================

#[test_case(ControlKind::Checkbox ; "checkbox")]
#[test_case(ControlKind::Switch ; "switch")]
fn toggle_cards_report_booleans(kind: ControlKind) {
    let dom = mount(&render_value_card(&ValueCardConfig::new("c", "Card", kind)));
    let recorder = Recorder::new();
    assert!(bind_value_card(&dom, "c", recorder.sink_owned()));

    let control = node(&dom, &ids::card_control("c"));
    dom.click(control);
    dom.click(control);

    assert_eq!(
        recorder.all(),
        vec![StoredValue::Bool(true), StoredValue::Bool(false)]
    );
}

#[test]
fn select_card_reports_the_committed_entry() {
    let card = ValueCardConfig::new("level", "Level", ControlKind::Select)
        .options([SelectEntry::new("lo", "Low"), SelectEntry::new("hi", "High")])
        .value("lo");
    let dom = mount(&render_value_card(&card));
    let recorder = Recorder::new();
    bind_value_card(&dom, "level", recorder.sink_owned());

    dom.choose(node(&dom, &ids::card_control("level")), "hi");

    assert_eq!(recorder.all(), vec![StoredValue::from("hi")]);
}

#[test]
fn text_card_reports_every_edit() {
    let card = ValueCardConfig::new("name", "Name", ControlKind::Text);
    let dom = mount(&render_value_card(&card));
    let recorder = Recorder::new();
    bind_value_card(&dom, "name", recorder.sink_owned());

    let input = node(&dom, &ids::card_control("name"));
    dom.type_text(input, "a");
    dom.type_text(input, "ab");

    assert_eq!(
        recorder.all(),
        vec![StoredValue::from("a"), StoredValue::from("ab")]
    );
}

#[test]
fn unmounted_card_is_skipped() {
    let dom = MemoryDom::new();
    let (wired, logs) = capture_logs(|| bind_value_card(&dom, "ghost", |_| {}));
    assert!(!wired);
    assert!(logs.contains(tracing::Level::DEBUG, "not mounted"));
}

#[test]
fn card_missing_its_control_stays_unbound() {
    let dom = mount(&render_value_card(&ValueCardConfig::new("c", "Card", ControlKind::Checkbox)));
    let card = node(&dom, "c");
    dom.set_text(card, "");

    let (wired, logs) = capture_logs(|| bind_value_card(&dom, "c", |_| {}));
    assert!(!wired);
    assert!(logs.contains(tracing::Level::DEBUG, "has no control"));
    assert_eq!(dom.attribute(card, attr::BOUND), None);

    let checkbox = el("input")
        .id(ids::card_control("c"))
        .attr("type", "checkbox")
        .into_node();
    dom.mount_into(card, &checkbox);
    let recorder = Recorder::new();
    assert!(bind_value_card(&dom, "c", recorder.sink_owned()));

    dom.click(node(&dom, &ids::card_control("c")));
    assert_eq!(recorder.all(), vec![StoredValue::Bool(true)]);
}

// ============================================================================
// TEXT-BLOCK CARDS
// ============================================================================

fn notes() -> TextBlockCardConfig {
    TextBlockCardConfig::new("notes", "Notes")
        .placeholder("Write something")
        .import_export()
}

#[test]
fn text_block_reports_full_text() {
    let dom = mount(&render_text_block(&notes().value("draft")));
    let recorder = Recorder::new();
    assert!(bind_text_block(
        &dom,
        "notes",
        recorder.sink::<str>(),
        TextBlockHooks::new()
    ));

    dom.type_text(node(&dom, &ids::card_control("notes")), "draft v2");

    assert_eq!(recorder.all(), vec!["draft v2"]);
    assert_eq!(text_block_value(&dom, "notes", false), "draft v2");
}

#[test]
fn import_and_export_run_their_hooks() {
    let dom = mount(&render_text_block(&notes()));
    let imports = Rc::new(Cell::new(0));
    let exports = Rc::new(Cell::new(0));
    let hooks = {
        let imports = imports.clone();
        let exports = exports.clone();
        TextBlockHooks::new()
            .on_import(move || imports.set(imports.get() + 1))
            .on_export(move || exports.set(exports.get() + 1))
    };
    bind_text_block(&dom, "notes", |_: &str| {}, hooks);

    dom.click(node(&dom, &ids::import_button("notes")));
    dom.click(node(&dom, &ids::export_button("notes")));
    dom.click(node(&dom, &ids::export_button("notes")));

    assert_eq!((imports.get(), exports.get()), (1, 2));
}

#[test]
fn buttons_without_hooks_are_inert() {
    let dom = mount(&render_text_block(&notes()));
    let recorder = Recorder::new();
    bind_text_block(&dom, "notes", recorder.sink::<str>(), TextBlockHooks::new());

    dom.click(node(&dom, &ids::import_button("notes")));

    assert_eq!(recorder.len(), 0);
    assert_eq!(text_block_value(&dom, "notes", false), "");
}

#[test]
fn text_block_missing_its_textarea_can_be_bound_later() {
    let dom = mount(&render_text_block(&notes()));
    let card = node(&dom, "notes");
    dom.set_text(card, "");

    assert!(!bind_text_block(&dom, "notes", |_: &str| {}, TextBlockHooks::new()));
    assert_eq!(dom.attribute(card, attr::BOUND), None);

    let textarea = el("textarea").id(ids::card_control("notes")).into_node();
    dom.mount_into(card, &textarea);
    let recorder = Recorder::new();
    assert!(bind_text_block(&dom, "notes", recorder.sink::<str>(), TextBlockHooks::new()));

    dom.type_text(node(&dom, &ids::card_control("notes")), "late");
    assert_eq!(recorder.all(), vec!["late"]);
}

#[test]
fn accessor_falls_back_to_placeholder() {
    let dom = mount(&render_text_block(&notes()));

    assert_eq!(text_block_value(&dom, "notes", false), "");
    assert_eq!(text_block_value(&dom, "notes", true), "Write something");

    set_text_block_value(&dom, "notes", "filled");
    assert_eq!(text_block_value(&dom, "notes", true), "filled");
}

#[test]
fn setter_fires_no_events() {
    let dom = mount(&render_text_block(&notes()));
    let recorder = Recorder::new();
    bind_text_block(&dom, "notes", recorder.sink::<str>(), TextBlockHooks::new());

    set_text_block_value(&dom, "notes", "quiet");

    assert_eq!(recorder.len(), 0);
    assert_eq!(text_block_value(&dom, "notes", false), "quiet");
}

#[test]
fn accessors_tolerate_missing_cards() {
    let dom = MemoryDom::new();
    assert_eq!(text_block_value(&dom, "nowhere", true), "");
    set_text_block_value(&dom, "nowhere", "ignored");
}
