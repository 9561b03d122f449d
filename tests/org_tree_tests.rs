//! Properties of the org chart assembly.
//!
//! The flat table is the source of truth; these tests pin down what the
//! read-time assembly guarantees: nothing lost or duplicated, dangling
//! parents surface as roots, input order does not matter, siblings follow
//! sort_order, and assembly is idempotent.

use chrono::Utc;
use zenga_film_server::org::model::{OrgNode, OrgPosition};
use zenga_film_server::org::tree::build_org_tree;

fn position(id: i32, parent_id: Option<i32>, sort_order: i32) -> OrgPosition {
    let now = Utc::now();
    OrgPosition {
        id,
        title: format!("Pozisyon {}", id),
        name: Some(format!("Kişi {}", id)),
        department: None,
        parent_id,
        photo: None,
        bio: None,
        sort_order,
        created_at: now,
        updated_at: now,
    }
}

fn preorder_ids(nodes: &[OrgNode], out: &mut Vec<i32>) {
    for node in nodes {
        out.push(node.id);
        preorder_ids(&node.children, out);
    }
}

fn edges(nodes: &[OrgNode], parent: Option<i32>, out: &mut Vec<(i32, Option<i32>)>) {
    for node in nodes {
        out.push((node.id, parent));
        edges(&node.children, Some(node.id), out);
    }
}

fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

#[test]
fn flatten_preserves_exact_id_set() {
    let input = vec![
        position(1, None, 0),
        position(2, Some(1), 0),
        position(3, Some(1), 1),
        position(4, Some(3), 0),
        position(5, Some(3), 1),
        position(6, None, 1),
        position(7, Some(6), 0),
    ];
    let mut expected: Vec<i32> = input.iter().map(|p| p.id).collect();
    expected.sort();

    let tree = build_org_tree(input);
    let mut ids = Vec::new();
    preorder_ids(&tree, &mut ids);
    ids.sort();

    assert_eq!(ids, expected);
}

#[test]
fn orphaned_child_appears_as_root() {
    // Parent 10 was deleted; 11 and 12 still point at it.
    let input = vec![
        position(1, None, 0),
        position(11, Some(10), 1),
        position(12, Some(10), 2),
    ];

    let tree = build_org_tree(input);
    let roots: Vec<i32> = tree.iter().map(|n| n.id).collect();
    assert_eq!(roots, vec![1, 11, 12]);
}

#[test]
fn every_permutation_yields_same_structure() {
    let base = vec![
        position(1, None, 0),
        position(2, Some(1), 1),
        position(3, Some(1), 2),
        position(4, Some(2), 0),
    ];

    let mut reference = Vec::new();
    edges(&build_org_tree(base.clone()), None, &mut reference);
    reference.sort();

    for permutation in permutations(&base) {
        let mut got = Vec::new();
        edges(&build_org_tree(permutation), None, &mut got);
        got.sort();
        assert_eq!(got, reference);
    }
}

#[test]
fn siblings_sorted_by_sort_order_regardless_of_input_order() {
    let input = vec![
        position(1, None, 0),
        position(4, Some(1), 30),
        position(2, Some(1), 10),
        position(3, Some(1), 20),
    ];

    for permutation in permutations(&input) {
        let tree = build_org_tree(permutation);
        let root = tree.iter().find(|n| n.id == 1).unwrap();
        let children: Vec<i32> = root.children.iter().map(|n| n.id).collect();
        assert_eq!(children, vec![2, 3, 4]);
    }
}

#[test]
fn assembly_is_idempotent() {
    let input = vec![
        position(1, None, 0),
        position(2, Some(1), 0),
        position(3, Some(2), 0),
        position(4, Some(99), 1),
    ];

    assert_eq!(build_org_tree(input.clone()), build_org_tree(input));
}

#[test]
fn deep_chain_assembles() {
    // A 200-deep management chain is absurd but must not break anything.
    let mut input = vec![position(1, None, 0)];
    for id in 2..=200 {
        input.push(position(id, Some(id - 1), 0));
    }

    let tree = build_org_tree(input);
    assert_eq!(tree.len(), 1);

    let mut ids = Vec::new();
    preorder_ids(&tree, &mut ids);
    assert_eq!(ids, (1..=200).collect::<Vec<i32>>());
}

#[test]
fn cycle_nodes_survive_assembly() {
    // 1 -> 2 -> 3 -> 1 plus a normal root.
    let input = vec![
        position(1, Some(3), 0),
        position(2, Some(1), 0),
        position(3, Some(2), 0),
        position(9, None, 0),
    ];

    let tree = build_org_tree(input);
    let mut ids = Vec::new();
    preorder_ids(&tree, &mut ids);
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 9]);
}
