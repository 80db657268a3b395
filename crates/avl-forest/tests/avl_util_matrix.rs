use avl_forest::avl::{assert_avl_tree, insert, remove, swap_nodes, AvlNode, Inserted};
use avl_forest::util::{find, height, prev, size};
use avl_forest::Arena;

type N = AvlNode<i32, i32>;

fn avl_key(node: &N) -> &i32 {
    &node.k
}

fn insert_value(arena: &mut Arena<N>, root: Option<u32>, value: i32) -> Option<u32> {
    let (root, _) = insert(arena, root, value, value, &i32::cmp, AvlNode::new);
    if let Err(err) = assert_avl_tree(arena, root, &i32::cmp) {
        panic!("invalid AVL tree after insert({value}): {err}");
    }
    root
}

fn delete_value(arena: &mut Arena<N>, root: Option<u32>, value: i32) -> Option<u32> {
    let Some(idx) = find(arena, root, &value, avl_key, i32::cmp) else {
        return root;
    };
    let (root, node) = remove(arena, root.unwrap(), idx);
    assert_eq!(node.k, value);
    if let Err(err) = assert_avl_tree(arena, root, &i32::cmp) {
        panic!("invalid AVL tree after delete({value}): {err}");
    }
    root
}

#[test]
fn avl_util_insert_delete_various_numbers_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(size(&arena, root), 13);

    root = delete_value(&mut arena, root, 100);
    assert_eq!(size(&arena, root), 12);

    root = delete_value(&mut arena, root, 33);
    root = delete_value(&mut arena, root, 33);
    assert_eq!(size(&arena, root), 11);

    root = delete_value(&mut arena, root, 10);
    root = delete_value(&mut arena, root, 60);
    root = delete_value(&mut arena, root, 22);
    assert_eq!(size(&arena, root), 8);
    assert_eq!(arena.len(), 8);
}

#[test]
fn avl_util_numbers_from_0_to_100_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in 0..=100 {
        root = insert_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    // 101 nodes fit in 7 levels when perfectly packed; AVL allows a little more.
    assert!(height(&arena, root) <= 8);

    for i in 0..=100 {
        root = delete_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert_eq!(root, None);
    assert!(arena.is_empty());
}

#[test]
fn avl_util_duplicate_insert_reports_replacement_matrix() {
    let mut arena = Arena::new();
    let (root, first) = insert(&mut arena, None, 1, 10, &i32::cmp, AvlNode::new);
    let (root, again) = insert(&mut arena, root, 1, 11, &i32::cmp, AvlNode::new);
    assert_eq!(first, Inserted::New(0));
    assert_eq!(again, Inserted::Replaced(0, 10));
    assert_eq!(arena[root.unwrap()].v, 11);
    assert_eq!(arena.len(), 1);
}

#[test]
fn avl_util_swap_nodes_moves_balances_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for value in [4, 2, 6, 1, 3, 5, 7, 0] {
        root = insert_value(&mut arena, root, value);
    }
    let root = root.unwrap();
    let four = find(&arena, Some(root), &4, avl_key, i32::cmp).unwrap();
    let pred = prev(&arena, four).unwrap();
    assert_eq!(arena[pred].k, 3);

    let four_bf = arena[four].bf;
    let pred_bf = arena[pred].bf;
    let root = swap_nodes(&mut arena, root, four, pred);
    assert_eq!(root, pred);
    assert_eq!(arena[pred].bf, four_bf);
    assert_eq!(arena[four].bf, pred_bf);
    assert_eq!(arena[four].p.map(|i| arena[i].k), Some(2));
}
