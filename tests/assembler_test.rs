//! End-to-end assembly tests over an in-memory fetch boundary

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use qwi_sunburst::cli::commands::read_label_rows;
use qwi_sunburst::domain::tree::TreeNode;
use qwi_sunburst::infrastructure::StaticFetcher;
use qwi_sunburst::{HierarchyAssembler, QwiQuery};

fn query() -> QwiQuery {
    QwiQuery {
        indicator: "Emp".to_string(),
        state: "02".to_string(),
        year: "2012".to_string(),
        quarter: "1".to_string(),
    }
}

fn header() -> Vec<Value> {
    vec![json!("Emp"), json!("sEmp"), json!("industry")]
}

fn row(emp: &str, flag: i64, code: &str) -> Vec<Value> {
    vec![json!(emp), json!(flag), json!(code)]
}

fn labels(rows: &[(&str, &str)]) -> Vec<(String, String)> {
    rows.iter()
        .map(|(c, l)| (c.to_string(), l.to_string()))
        .collect()
}

fn assert_normalized(node: &TreeNode) {
    assert_ne!(
        node.size.is_some(),
        !node.children.is_empty(),
        "node {} violates size/children exclusivity",
        node.name
    );
    node.children.iter().for_each(assert_normalized);
}

// ============================================================
// Reconciliation end to end
// ============================================================

#[test]
fn given_partially_suppressed_group_when_assembling_then_totals_reconcile() {
    // parent 100, disclosed children 40 + 30, nothing disclosed below them
    let fetcher = StaticFetcher::default().with_table(
        "11",
        vec![
            header(),
            row("100", 1, "11"),
            row("40", 1, "111"),
            row("30", 1, "112"),
            row("15", -1, "113"),
        ],
    );
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let tree = assembler
        .assemble(labels(&[
            ("11", "Agriculture"),
            ("111", "Crops"),
            ("112", "Animals"),
            ("113", "Forestry"),
        ]))
        .unwrap();

    let sector = &tree.children[0];
    assert_eq!(sector.children.len(), 3);
    let sibling = sector.children.last().unwrap();
    assert_eq!(sibling.name, "suppressed");
    assert_eq!(sibling.size, Some(30));
    assert_eq!(sector.total(), 100);
    assert_eq!(tree.total(), 100);
    assert_normalized(&tree);
}

#[test]
fn given_fully_disclosed_group_when_assembling_then_no_suppressed_nodes() {
    let fetcher = StaticFetcher::default().with_table(
        "11",
        vec![
            header(),
            row("70", 1, "11"),
            row("40", 1, "111"),
            row("30", 1, "112"),
            row("25", 1, "1111"),
            row("15", 1, "1112"),
            row("30", 1, "1121"),
        ],
    );
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let tree = assembler
        .assemble(labels(&[
            ("11", "Agriculture"),
            ("111", "Crops"),
            ("1111", "Oilseed"),
            ("1112", "Vegetables"),
            ("112", "Animals"),
            ("1121", "Cattle"),
        ]))
        .unwrap();

    fn suppressed_count(node: &TreeNode) -> usize {
        let own = usize::from(node.name == "suppressed");
        own + node.children.iter().map(suppressed_count).sum::<usize>()
    }
    assert_eq!(suppressed_count(&tree), 0);
    assert_eq!(tree.total(), 70);
    assert_normalized(&tree);
}

#[test]
fn given_suppressed_grandchild_when_assembling_then_gap_covered_at_child_level() {
    let fetcher = StaticFetcher::default().with_table(
        "11",
        vec![
            header(),
            row("40", 1, "11"),
            row("40", 1, "111"),
            row("25", 1, "1111"),
            row("15", -2, "1112"),
        ],
    );
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let tree = assembler
        .assemble(labels(&[
            ("11", "Agriculture"),
            ("111", "Crops"),
            ("1111", "Oilseed"),
            ("1112", "Vegetables"),
        ]))
        .unwrap();

    let child = &tree.children[0].children[0];
    assert_eq!(child.name, "111");
    assert_eq!(child.children.len(), 2);
    assert_eq!(child.children[1].name, "suppressed");
    assert_eq!(child.children[1].size, Some(15));
    assert_eq!(tree.total(), 40);
}

// ============================================================
// Multi-group assembly and ordering
// ============================================================

#[test]
fn given_fixture_csv_when_assembling_then_groups_keep_csv_order() {
    let fetcher = StaticFetcher::default()
        .with_table("11", vec![header(), row("100", 1, "11")])
        .with_table("21", vec![header(), row("50", 1, "21")])
        .with_table("22", vec![header(), row("25", 1, "22")]);
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let rows = read_label_rows(Path::new("tests/resources/label_industry.csv")).unwrap();
    let tree = assembler.assemble(rows).unwrap();

    let names: Vec<_> = tree.children.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["11", "21", "22"]);
    assert_eq!(tree.name, "naics");
    assert_eq!(tree.total(), 175);
}

#[test]
fn given_group_fetch_failure_when_assembling_then_remaining_groups_render() {
    // no table registered for "21": that group must resolve as absent
    let fetcher = StaticFetcher::default()
        .with_table("11", vec![header(), row("100", 1, "11")])
        .with_table("22", vec![header(), row("25", 1, "22")]);
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let rows = read_label_rows(Path::new("tests/resources/label_industry.csv")).unwrap();
    let tree = assembler.assemble(rows).unwrap();

    let names: Vec<_> = tree.children.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["11", "22"]);
}

#[test]
fn given_group_without_parent_row_when_assembling_then_group_survives_under_lead_code() {
    let fetcher = StaticFetcher::default()
        .with_table("11", vec![header(), row("40", 1, "111")])
        .with_table("21", vec![header(), row("50", 1, "21")]);
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let tree = assembler
        .assemble(labels(&[
            ("11", "Agriculture"),
            ("111", "Crops"),
            ("21", "Mining"),
        ]))
        .unwrap();

    assert_eq!(tree.children[0].name, "11");
    assert_eq!(tree.children[0].label, "Agriculture");
    // no parent total, so no suppressed remainder is guessed
    assert_eq!(tree.children[0].total(), 40);
    assert_normalized(&tree);
}

// ============================================================
// Output document shape
// ============================================================

#[test]
fn given_assembled_tree_when_serializing_then_d3_document_shape() {
    let fetcher = StaticFetcher::default().with_table(
        "11",
        vec![header(), row("100", 1, "11"), row("40", 1, "111")],
    );
    let assembler = HierarchyAssembler::new(Arc::new(fetcher), query());

    let tree = assembler
        .assemble(labels(&[("11", "Agriculture"), ("111", "Crops")]))
        .unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["name"], "naics");
    assert!(json.get("size").is_none(), "root must not carry a size");
    let sector = &json["children"][0];
    assert_eq!(sector["name"], "11");
    assert!(sector.get("size").is_none());
    let leaf = &sector["children"][0];
    assert_eq!(leaf["name"], "111");
    assert_eq!(leaf["size"], 40);
    assert!(leaf.get("children").is_none(), "leaves must omit children");
}
