mod common;

use common::{capture_logs, mount, node, text_of, Recorder};
use optbox_bind::{bind_exclusive_choice, bind_value_card, BindOptions, Host, MemoryDom};
use optbox_core::ids::{self, attr, class};
use optbox_core::{
    render_exclusive_choice, ChoiceOption, ContainerBase, ControlKind, ExclusiveChoiceConfig,
    ExclusiveOption, StoredValue, ValueCardConfig,
};

fn theme(id: &str, group: &str) -> ExclusiveChoiceConfig {
    ExclusiveChoiceConfig::new(ContainerBase::new(id, group, "Theme"), "dark")
        .option(ChoiceOption::new("light", "Light"))
        .option(ChoiceOption::new("dark", "Dark"))
        .option(
            ExclusiveOption::from(ChoiceOption::new("custom", "Custom"))
                .nested(ValueCardConfig::new("strict", "Strict", ControlKind::Switch)),
        )
}

fn bound(options: BindOptions) -> (MemoryDom, Recorder<String>) {
    let dom = mount(&render_exclusive_choice(&theme("theme", "theme-group")));
    let recorder = Recorder::new();
    assert!(bind_exclusive_choice(
        &dom,
        "theme",
        "theme-group",
        recorder.sink::<str>(),
        options
    ));
    (dom, recorder)
}

fn marked(dom: &MemoryDom, container: &str) -> Vec<String> {
    dom.query_all(
        dom.find(container),
        &optbox_bind::Selector::class(class::OPTION),
    )
    .into_iter()
    .filter(|&row| dom.attribute(row, attr::SELECTED).as_deref() == Some("true"))
    .filter_map(|row| dom.attribute(row, attr::VALUE))
    .collect()
}

fn checked_radios(dom: &MemoryDom, container: &str) -> Vec<String> {
    ["light", "dark", "custom"]
        .into_iter()
        .filter(|v| dom.checked(node(dom, &ids::control(container, v))))
        .map(str::to_string)
        .collect()
}

#[test]
fn clicking_a_radio_moves_the_selection() {
    let (dom, recorder) = bound(BindOptions::default());

    dom.click(node(&dom, &ids::control("theme", "light")));

    assert_eq!(recorder.all(), vec!["light"]);
    assert_eq!(checked_radios(&dom, "theme"), vec!["light"]);
    assert_eq!(marked(&dom, "theme"), vec!["light"]);
    assert!(dom.has_class(node(&dom, &ids::item("theme", "light")), class::SELECTED));
    assert!(!dom.has_class(node(&dom, &ids::item("theme", "dark")), class::SELECTED));
    assert_eq!(text_of(&dom, &ids::summary("theme")), "Light");
}

#[test]
fn clicking_the_row_or_its_label_selects_the_option() {
    let (dom, recorder) = bound(BindOptions::default());

    dom.click(node(&dom, &ids::item("theme", "light")));
    assert_eq!(recorder.last().as_deref(), Some("light"));

    dom.click(node(&dom, &ids::label("theme", "custom")));
    assert_eq!(recorder.last().as_deref(), Some("custom"));
    assert_eq!(checked_radios(&dom, "theme"), vec!["custom"]);
    assert_eq!(text_of(&dom, &ids::summary("theme")), "Custom");
}

#[test]
fn reselecting_the_current_option_reports_nothing() {
    let (dom, recorder) = bound(BindOptions::default());

    dom.click(node(&dom, &ids::control("theme", "dark")));
    dom.click(node(&dom, &ids::item("theme", "dark")));

    assert_eq!(recorder.len(), 0);
    assert_eq!(marked(&dom, "theme"), vec!["dark"]);
}

#[test]
fn clicks_inside_nested_cards_do_not_select_the_row() {
    let (dom, recorder) = bound(BindOptions::default());
    let card = Recorder::new();
    assert!(bind_value_card(&dom, "strict", card.sink_owned()));

    dom.click(node(&dom, &ids::card_control("strict")));
    dom.click(node(&dom, "strict"));

    assert_eq!(recorder.len(), 0);
    assert_eq!(card.all(), vec![StoredValue::Bool(true)]);
    assert_eq!(checked_radios(&dom, "theme"), vec!["dark"]);
}

#[test]
fn selection_clears_every_radio_sharing_the_group_key() {
    let dom = MemoryDom::new();
    dom.mount(&render_exclusive_choice(&theme("first", "shared")));
    dom.mount(&render_exclusive_choice(&theme("second", "shared")));
    let recorder = Recorder::new();
    bind_exclusive_choice(&dom, "first", "shared", recorder.sink::<str>(), BindOptions::default());
    bind_exclusive_choice(&dom, "second", "shared", recorder.sink::<str>(), BindOptions::default());

    dom.click(node(&dom, &ids::control("second", "light")));

    assert!(checked_radios(&dom, "first").is_empty());
    assert_eq!(checked_radios(&dom, "second"), vec!["light"]);
}

#[test]
fn summary_reads_the_label_from_the_document() {
    let (dom, _) = bound(BindOptions::default());

    dom.set_text(node(&dom, &ids::label("theme", "light")), "Bright");
    dom.click(node(&dom, &ids::control("theme", "light")));

    assert_eq!(text_of(&dom, &ids::summary("theme")), "Bright");
}

#[test]
fn header_updates_can_be_disabled() {
    let (dom, recorder) = bound(BindOptions::without_header_updates());

    dom.click(node(&dom, &ids::control("theme", "light")));

    assert_eq!(recorder.all(), vec!["light"]);
    assert_eq!(text_of(&dom, &ids::summary("theme")), "Dark");
}

#[test]
fn header_click_toggles_expansion_only() {
    let (dom, recorder) = bound(BindOptions::default());
    let root = node(&dom, "theme");
    let header = node(&dom, &ids::header("theme"));

    dom.click(node(&dom, &ids::summary("theme")));
    assert!(dom.has_class(root, class::EXPANDED));
    assert_eq!(dom.attribute(header, attr::EXPANDED).as_deref(), Some("true"));

    dom.click(header);
    assert!(!dom.has_class(root, class::EXPANDED));
    assert_eq!(dom.attribute(header, attr::EXPANDED).as_deref(), Some("false"));
    assert_eq!(recorder.len(), 0);
}

#[test]
fn missing_container_is_a_logged_no_op() {
    let dom = MemoryDom::new();
    let (wired, logs) = capture_logs(|| {
        bind_exclusive_choice(&dom, "absent", "g", |_: &str| {}, BindOptions::default())
    });

    assert!(!wired);
    assert!(logs.contains(tracing::Level::DEBUG, "not mounted"));
}

#[test]
fn second_bind_is_refused() {
    let (dom, recorder) = bound(BindOptions::default());

    let (wired, logs) = capture_logs(|| {
        bind_exclusive_choice(&dom, "theme", "theme-group", recorder.sink::<str>(), BindOptions::default())
    });
    assert!(!wired);
    assert!(logs.contains(tracing::Level::WARN, "already bound"));

    dom.click(node(&dom, &ids::control("theme", "light")));
    assert_eq!(recorder.len(), 1);
}
