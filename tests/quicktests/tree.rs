use pointer_structures::BinarySearchTree;

use quickcheck_macros::quickcheck;

#[test]
fn three_two_one_four_five() {
    let mut tree = BinarySearchTree::new();
    for value in [3, 2, 1, 4, 5] {
        tree.insert(value);
    }

    assert_eq!(tree.inorder_traversal(), [1, 2, 3, 4, 5]);
    assert_eq!(tree.preorder_traversal(), [3, 2, 1, 4, 5]);
    assert_eq!(tree.postorder_traversal(), [1, 2, 5, 4, 3]);
}

#[test]
fn strings() {
    let tree: BinarySearchTree<String> = ["m", "c", "x", "a", "e"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(tree.inorder_traversal(), ["a", "c", "e", "m", "x"]);
    assert_eq!(tree.postorder_traversal(), ["a", "e", "c", "x", "m"]);
}

#[quickcheck]
fn inorder_is_non_decreasing(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    tree.inorder_traversal().windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn preorder_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    let mut rebuilt = BinarySearchTree::new();
    for value in tree.preorder_traversal() {
        rebuilt.insert(value);
    }

    rebuilt.preorder_traversal() == tree.preorder_traversal()
        && rebuilt.postorder_traversal() == tree.postorder_traversal()
        && rebuilt.height() == tree.height()
}

#[quickcheck]
fn traversals_keep_duplicates(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort();
    let mut preorder = tree.preorder_traversal();
    preorder.sort();
    let mut postorder = tree.postorder_traversal();
    postorder.sort();

    tree.len() == expected.len()
        && tree.inorder_traversal() == expected
        && preorder == expected
        && postorder == expected
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    nots.iter()
        .filter(|x| !xs.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn min_max(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
