use pretty_assertions::assert_eq;
use roam_blocks_engine::{
    actions::{BlockOrder, SequentialUids, linearize},
    parsing::{blocks::IndentStyle, parse_markdown, snapshot},
};

#[test]
fn fixture_headings_and_lists() {
    assert_fixture("headings_and_lists");
}

#[test]
fn fixture_table() {
    assert_fixture("table");
}

#[test]
fn fixture_malformed_indent() {
    assert_fixture("malformed_indent");
}

#[test]
fn fixture_anchors_and_inline() {
    assert_fixture("anchors_and_inline");
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);
    let doc = parse_markdown(&md, IndentStyle::default());
    snapshot::invariants(&doc.roots);

    let mut uids = SequentialUids::new("fx");
    let actions = linearize(&doc.roots, "page", BlockOrder::Last, &mut uids);
    snapshot::check_batch(&actions, "page");
    assert_eq!(
        actions.len(),
        doc.roots.iter().map(|r| r.subtree_len()).sum::<usize>()
    );

    let rendered = snapshot::render_tree(&doc.roots);
    let dir = fixtures_dir();
    insta::with_settings!({
        snapshot_path => dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, rendered);
    });
}

/// The batch payload for a small document, uid for uid.
#[test]
fn batch_json_for_headings_fixture() {
    let md = read_fixture("headings_and_lists");
    let doc = parse_markdown(&md, IndentStyle::default());
    let mut uids = SequentialUids::new("fx");
    let actions = linearize(&doc.roots, "page", BlockOrder::First, &mut uids);
    let batch = roam_blocks_engine::Batch::new(actions);

    let value = serde_json::to_value(&batch).unwrap();
    let wired: Vec<(String, String, String)> = value["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| {
            (
                a["block"]["uid"].as_str().unwrap().to_string(),
                a["location"]["parent-uid"].as_str().unwrap().to_string(),
                a["location"]["order"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    let expected = [
        ("fx-0", "page", "first"),
        ("fx-1", "fx-0", "last"),
        ("fx-2", "fx-1", "last"),
        ("fx-3", "fx-1", "last"),
        ("fx-4", "fx-0", "last"),
        ("fx-5", "page", "first"),
        ("fx-6", "fx-5", "last"),
        ("fx-7", "fx-6", "last"),
    ]
    .map(|(u, p, o)| (u.to_string(), p.to_string(), o.to_string()));
    assert_eq!(wired, expected.to_vec());

    assert_eq!(value["actions"][0]["block"]["heading"], 1);
    assert_eq!(value["actions"][5]["block"]["heading"], 2);
    assert!(value["actions"][1]["block"].get("heading").is_none());
}
