//! Org chart assembly.
//!
//! The store keeps the chart as a flat table with parent pointers; the
//! nested shape the chart page renders is produced here at read time and
//! never stored. Assembly is a pure function of its input: two passes over
//! the records, no traversal of parent chains, so malformed data (dangling
//! parents, self-references, cycles) can shift nodes to the root level but
//! can never loop, drop, or duplicate a node.

use std::collections::HashMap;

use super::model::{OrgNode, OrgPosition};

/// Build the display forest from flat position records.
///
/// A record becomes a root when its `parent_id` is null, refers to an id
/// absent from the input, or refers to itself. Siblings (and roots) are
/// ordered by `sort_order` ascending; ties keep input order. Records caught
/// in a parent cycle are unreachable from any declared root and are
/// promoted to roots in input order.
pub fn build_org_tree(positions: Vec<OrgPosition>) -> Vec<OrgNode> {
    let index_of: HashMap<i32, usize> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    let mut child_indices: Vec<Vec<usize>> = vec![Vec::new(); positions.len()];
    let mut root_indices: Vec<usize> = Vec::new();
    for (i, position) in positions.iter().enumerate() {
        match position.parent_id.and_then(|pid| index_of.get(&pid).copied()) {
            Some(parent) if parent != i => child_indices[parent].push(i),
            _ => root_indices.push(i),
        }
    }

    // Stable sort: equal sort_order keeps encounter order.
    for siblings in child_indices.iter_mut() {
        siblings.sort_by_key(|&i| positions[i].sort_order);
    }
    root_indices.sort_by_key(|&i| positions[i].sort_order);

    let mut slots: Vec<Option<OrgNode>> = positions
        .into_iter()
        .map(|p| Some(OrgNode::from(p)))
        .collect();

    let mut roots: Vec<OrgNode> = Vec::with_capacity(root_indices.len());
    for i in root_indices {
        if let Some(node) = take_subtree(i, &mut slots, &child_indices) {
            roots.push(node);
        }
    }

    // Anything still in a slot sits on a parent cycle: no declared root
    // reaches it. Promote the first such node; taking its subtree drains
    // the rest of the cycle.
    for i in 0..slots.len() {
        if slots[i].is_some() {
            if let Some(node) = take_subtree(i, &mut slots, &child_indices) {
                roots.push(node);
            }
        }
    }

    roots
}

/// Move a node and its descendants out of the slot arena. A consumed slot
/// is skipped, which is what breaks parent cycles.
fn take_subtree(
    i: usize,
    slots: &mut [Option<OrgNode>],
    child_indices: &[Vec<usize>],
) -> Option<OrgNode> {
    let mut node = slots[i].take()?;
    for &child in &child_indices[i] {
        if let Some(child_node) = take_subtree(child, slots, child_indices) {
            node.children.push(child_node);
        }
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn position(id: i32, parent_id: Option<i32>, sort_order: i32) -> OrgPosition {
        let now = Utc::now();
        OrgPosition {
            id,
            title: format!("Pozisyon {}", id),
            name: None,
            department: None,
            parent_id,
            photo: None,
            bio: None,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    fn flatten_ids(nodes: &[OrgNode], out: &mut Vec<i32>) {
        for node in nodes {
            out.push(node.id);
            flatten_ids(&node.children, out);
        }
    }

    fn flatten_edges(nodes: &[OrgNode], parent: Option<i32>, out: &mut Vec<(i32, Option<i32>)>) {
        for node in nodes {
            out.push((node.id, parent));
            flatten_edges(&node.children, Some(node.id), out);
        }
    }

    #[test]
    fn test_no_node_lost_or_duplicated() {
        let input = vec![
            position(1, None, 0),
            position(2, Some(1), 0),
            position(3, Some(1), 1),
            position(4, Some(2), 0),
            position(5, None, 1),
        ];

        let tree = build_org_tree(input);
        let mut ids = Vec::new();
        flatten_ids(&tree, &mut ids);
        ids.sort();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_child_before_parent_in_input() {
        // The child record appears first; the two-pass lookup must still
        // attach it.
        let input = vec![position(2, Some(1), 0), position(1, None, 0)];

        let tree = build_org_tree(input);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].id, 2);
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        // Position 3 points at a deleted parent; it must surface as a
        // root, not vanish.
        let input = vec![position(1, None, 0), position(3, Some(99), 1)];

        let tree = build_org_tree(input);
        let roots: Vec<i32> = tree.iter().map(|n| n.id).collect();
        assert_eq!(roots, vec![1, 3]);
    }

    #[test]
    fn test_sibling_order_follows_sort_order() {
        let input = vec![
            position(1, None, 0),
            position(2, Some(1), 5),
            position(3, Some(1), 1),
            position(4, Some(1), 3),
        ];

        let tree = build_org_tree(input);
        let children: Vec<i32> = tree[0].children.iter().map(|n| n.id).collect();
        assert_eq!(children, vec![3, 4, 2]);
    }

    #[test]
    fn test_sort_order_ties_keep_encounter_order() {
        let input = vec![
            position(1, None, 0),
            position(5, Some(1), 0),
            position(2, Some(1), 0),
            position(9, Some(1), 0),
        ];

        let tree = build_org_tree(input);
        let children: Vec<i32> = tree[0].children.iter().map(|n| n.id).collect();
        assert_eq!(children, vec![5, 2, 9]);
    }

    #[test]
    fn test_root_order_follows_sort_order() {
        let input = vec![position(1, None, 2), position(2, None, 0), position(3, None, 1)];

        let tree = build_org_tree(input);
        let roots: Vec<i32> = tree.iter().map(|n| n.id).collect();
        assert_eq!(roots, vec![2, 3, 1]);
    }

    #[test]
    fn test_shuffled_input_same_structure() {
        let input = vec![
            position(1, None, 0),
            position(2, Some(1), 1),
            position(3, Some(1), 2),
            position(4, Some(2), 0),
            position(5, Some(4), 0),
        ];
        let mut shuffled = input.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        let mut edges_a = Vec::new();
        flatten_edges(&build_org_tree(input), None, &mut edges_a);
        let mut edges_b = Vec::new();
        flatten_edges(&build_org_tree(shuffled), None, &mut edges_b);

        edges_a.sort();
        edges_b.sort();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            position(1, None, 0),
            position(2, Some(1), 0),
            position(3, Some(2), 0),
        ];

        let first = build_org_tree(input.clone());
        let second = build_org_tree(input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_reference_becomes_root() {
        let input = vec![position(1, Some(1), 0), position(2, None, 1)];

        let tree = build_org_tree(input);
        let roots: Vec<i32> = tree.iter().map(|n| n.id).collect();
        assert_eq!(roots, vec![1, 2]);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_two_node_cycle_neither_lost() {
        let input = vec![
            position(1, Some(2), 0),
            position(2, Some(1), 0),
            position(3, None, 0),
        ];

        let tree = build_org_tree(input);
        let mut ids = Vec::new();
        flatten_ids(&tree, &mut ids);
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);

        // The first cycle member is promoted and keeps its partner below it.
        let promoted = tree.iter().find(|n| n.id == 1).unwrap();
        assert_eq!(promoted.children.len(), 1);
        assert_eq!(promoted.children[0].id, 2);
    }

    #[test]
    fn test_cycle_with_hanging_subtree() {
        // 4 reports into the cycle; it must come out under its parent.
        let input = vec![
            position(1, Some(2), 0),
            position(2, Some(1), 0),
            position(4, Some(2), 0),
        ];

        let tree = build_org_tree(input);
        let mut ids = Vec::new();
        flatten_ids(&tree, &mut ids);
        ids.sort();
        assert_eq!(ids, vec![1, 2, 4]);

        let promoted = &tree[0];
        assert_eq!(promoted.id, 1);
        assert_eq!(promoted.children[0].id, 2);
        assert_eq!(promoted.children[0].children[0].id, 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_org_tree(Vec::new()).is_empty());
    }
}
