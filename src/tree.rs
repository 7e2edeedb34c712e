//! An unbalanced Binary Search Tree. Nodes own their children through `Box`es and the shape of
//! the tree is decided entirely by insertion order, so inserting sorted values degrades it into a
//! linked list. Every walk over the tree (insertion, traversal, teardown) is done with a loop or an
//! explicit stack instead of recursion so such degenerate trees can't blow the call stack.
//!
//! # Examples
//!
//! ```
//! use pointer_structures::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.inorder_traversal().is_empty());
//!
//! for value in [3, 2, 1, 4, 5] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.inorder_traversal(), [1, 2, 3, 4, 5]);
//! assert_eq!(tree.preorder_traversal(), [3, 2, 1, 4, 5]);
//! assert_eq!(tree.postorder_traversal(), [1, 2, 5, 4, 3]);
//!
//! // Duplicates are kept, to the right of their equal.
//! tree.insert(3);
//! assert_eq!(tree.inorder_traversal(), [1, 2, 3, 3, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A `Node` has a value and two children, either of which may be missing. Everything in `left` is
/// less than `value` and everything in `right` is greater than or equal to it.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree without any balancing. Values can be inserted (duplicates included) and
/// read back in inorder, preorder or postorder.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

/// Drops every node below `root` one at a time. Letting `Box` drop the nodes would recurse once
/// per level.
fn teardown<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone + Ord,
{
    /// Rebuilds the tree by inserting the preorder sequence, which reproduces the same shape.
    fn clone(&self) -> Self {
        self.preorder().cloned().collect()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values have been inserted, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }

    /// Inserts `value` as a new leaf. Values less than a node go to its left and everything else,
    /// including equal values, goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointer_structures::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.preorder_traversal(), [2, 1, 2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The smallest value in the tree, found by following left children.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, found by following right children. With duplicates this is
    /// the most recently inserted of the equal largest values.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Borrowing iterator visiting the left subtree, then the node, then the right subtree. This
    /// yields values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self)
    }

    /// Borrowing iterator visiting the node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }

    /// Borrowing iterator visiting the left subtree, then the right subtree, then the node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self)
    }

    /// Same as [`inorder`][Self::inorder].
    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    /// Every value in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointer_structures::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [5, 1, 4, 1].into_iter().collect();
    /// assert_eq!(tree.inorder_traversal(), [1, 1, 4, 5]);
    /// ```
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder().cloned().collect()
    }

    /// Every value in preorder. Inserting these into a fresh tree rebuilds this tree's shape.
    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.preorder().cloned().collect()
    }

    /// Every value in postorder, children before their parent.
    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.postorder().cloned().collect()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Inorder iterator over a [`BinarySearchTree`]. The stack holds the nodes whose left subtree is
/// being (or has been) visited but which haven't been yielded yet.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    fn new(tree: &'a BinarySearchTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}

/// Preorder iterator over a [`BinarySearchTree`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    fn new(tree: &'a BinarySearchTree<T>) -> Self {
        Self {
            stack: tree.root.as_deref().into_iter().collect(),
            remaining: tree.len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}

/// Postorder iterator over a [`BinarySearchTree`].
pub struct Postorder<'a, T> {
    /// Each node is pushed twice: first unexpanded, then, once its children have been pushed
    /// above it, expanded and ready to be yielded.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    fn new(tree: &'a BinarySearchTree<T>) -> Self {
        Self {
            stack: tree.root.as_deref().map(|n| (n, false)).into_iter().collect(),
            remaining: tree.len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn inorder_is_sorted(xs: Vec<i8>) -> bool {
            let tree: BinarySearchTree<_> = xs.iter().copied().collect();

            let mut sorted = xs;
            sorted.sort();
            tree.inorder_traversal() == sorted
        }
    }

    quickcheck::quickcheck! {
        fn orders_are_permutations(xs: Vec<i8>) -> bool {
            let tree: BinarySearchTree<_> = xs.iter().copied().collect();

            let mut preorder = tree.preorder_traversal();
            let mut postorder = tree.postorder_traversal();
            preorder.sort();
            postorder.sort();
            preorder == tree.inorder_traversal() && postorder == preorder && preorder.len() == xs.len()
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: BinarySearchTree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.contains(x))
        }
    }
}
