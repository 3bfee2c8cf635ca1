//! Reconciliation invariant tests across suppression patterns

use rstest::rstest;

use qwi_sunburst::domain::codes::CodeRow;
use qwi_sunburst::domain::levels::{GroupLevels, LabeledValue};
use qwi_sunburst::domain::tree::TreeNode;
use qwi_sunburst::reconcile_group;

fn lv(code: &str, value: Option<u64>) -> LabeledValue {
    LabeledValue {
        code: code.to_string(),
        label: code.to_string(),
        value,
    }
}

fn lead() -> CodeRow {
    CodeRow {
        code: "11".to_string(),
        label: "Agriculture".to_string(),
    }
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
// Invariant: reconciled total equals the declared parent total
// ============================================================

#[rstest]
// fully disclosed
#[case(100, vec![("111", 60), ("112", 40)], vec![("1111", 60), ("1121", 40)])]
// grandchildren undercount their children
#[case(100, vec![("111", 60), ("112", 40)], vec![("1111", 25)])]
// children undercount the parent
#[case(100, vec![("111", 30)], vec![])]
// nothing disclosed below the parent
#[case(100, vec![], vec![])]
// zero-valued cells throughout
#[case(0, vec![("111", 0)], vec![("1111", 0)])]
fn reconciled_total_always_equals_parent_total(
    #[case] parent_size: u64,
    #[case] children: Vec<(&str, u64)>,
    #[case] grandchildren: Vec<(&str, u64)>,
) {
    let levels = GroupLevels {
        parent: Some(lv("11", Some(parent_size))),
        children: children.iter().map(|(c, v)| lv(c, Some(*v))).collect(),
        grandchildren: grandchildren.iter().map(|(c, v)| lv(c, Some(*v))).collect(),
    };

    let tree = reconcile_group(&levels, &lead()).unwrap();

    assert_eq!(tree.total(), parent_size);
    assert_normalized(&tree);
}

// ============================================================
// Invariant: at most one suppressed node per sibling level
// ============================================================

#[rstest]
#[case(vec![("111", 60), ("112", 40)], vec![("1111", 25)])]
#[case(vec![("111", 10)], vec![])]
#[case(vec![], vec![])]
fn at_most_one_suppressed_node_per_level(
    #[case] children: Vec<(&str, u64)>,
    #[case] grandchildren: Vec<(&str, u64)>,
) {
    let levels = GroupLevels {
        parent: Some(lv("11", Some(500))),
        children: children.iter().map(|(c, v)| lv(c, Some(*v))).collect(),
        grandchildren: grandchildren.iter().map(|(c, v)| lv(c, Some(*v))).collect(),
    };

    let tree = reconcile_group(&levels, &lead()).unwrap();

    fn check(node: &TreeNode) {
        let suppressed = node
            .children
            .iter()
            .filter(|c| c.name == "suppressed")
            .count();
        assert!(suppressed <= 1, "node {} has {suppressed}", node.name);
        node.children.iter().for_each(check);
    }
    check(&tree);
}

// ============================================================
// Re-summing after insertion yields equality at every level
// ============================================================

#[test]
fn suppressed_insertion_restores_equality_at_child_level() {
    let levels = GroupLevels {
        parent: Some(lv("11", Some(100))),
        children: vec![lv("111", Some(60)), lv("112", Some(40))],
        grandchildren: vec![lv("1111", Some(25)), lv("1121", Some(40))],
    };

    let tree = reconcile_group(&levels, &lead()).unwrap();

    let first = tree.children.iter().find(|c| c.name == "111").unwrap();
    let re_sum: u64 = first.children.iter().map(TreeNode::total).sum();
    assert_eq!(re_sum, 60);

    let second = tree.children.iter().find(|c| c.name == "112").unwrap();
    let re_sum: u64 = second.children.iter().map(TreeNode::total).sum();
    assert_eq!(re_sum, 40);
}
