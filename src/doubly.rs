//! A doubly linked list stored in an arena. Nodes live in a `Vec` owned by the list and refer to
//! each other by index, so the `previous` links are plain back-references rather than a second
//! owner of the node. Slots freed by popping are reused by later pushes.
//!
//! # Examples
//!
//! ```
//! use pointer_structures::doubly::DoublyLinkedList;
//! use pointer_structures::PopError;
//!
//! let mut list = DoublyLinkedList::new();
//! for value in 1..=4 {
//!     list.append(value);
//! }
//!
//! assert_eq!(list.pop(), Ok(4));
//! assert_eq!(list.display().to_string(), "1 -> 2 -> 3");
//! assert_eq!(list.display_reverse().to_string(), "3 -> 2 -> 1");
//!
//! list.pop()?;
//! list.pop()?;
//! list.pop()?;
//! assert_eq!(list.pop(), Err(PopError::Empty));
//! # Ok::<(), PopError>(())
//! ```

use std::fmt;

use crate::error::PopError;
use crate::util::{write_chain, Chain};

/// The index of a node's slot in the arena.
type Link = Option<usize>;

struct Node<T> {
    value: T,
    previous: Link,
    next: Link,
}

/// A doubly linked list with `O(1)` access to both ends.
pub struct DoublyLinkedList<T> {
    /// Every node, indexed by [`Link`]s. `None` marks a slot that is on the free list.
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DoublyLinkedList<T>
where
    T: Clone,
{
    /// The clone's arena is compact, whatever state this list's free list was in.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for DoublyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for DoublyLinkedList<T> where T: Eq {}

impl<T> fmt::Debug for DoublyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values head to tail as `1 -> 2 -> 3`.
impl<T> fmt::Display for DoublyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

impl<T> DoublyLinkedList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generates a new, empty list whose arena can hold `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` after the current tail in `O(1)`.
    pub fn append(&mut self, value: T) {
        let index = self.alloc(Node {
            value,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes the tail in `O(1)` and returns its value. The node before it becomes the new tail,
    /// and popping the last node leaves the list exactly as [`new`][Self::new] would.
    ///
    /// # Errors
    ///
    /// [`PopError::Empty`] if there is nothing to pop. The list is untouched.
    pub fn pop(&mut self) -> Result<T, PopError> {
        let tail = self.tail.ok_or(PopError::Empty)?;
        let node = self.release(tail);
        self.tail = node.previous;
        match node.previous {
            Some(previous) => self.node_mut(previous).next = None,
            None => self.head = None,
        }
        self.shrink_if_empty();
        Ok(node.value)
    }

    /// Adds `value` before the current head in `O(1)`.
    pub fn push_front(&mut self, value: T) {
        let index = self.alloc(Node {
            value,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).previous = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }

    /// Removes the head in `O(1)` and returns its value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.release(head);
        self.head = node.next;
        match node.next {
            Some(next) => self.node_mut(next).previous = None,
            None => self.tail = None,
        }
        self.shrink_if_empty();
        Some(node.value)
    }

    /// The head's value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    /// The tail's value.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// Borrowing iterator from head to tail. Call `.rev()` on it to walk the `previous` links from
    /// the tail instead.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// The values head to tail, rendered as `1 -> 2 -> 3`. Same as the `Display` impl.
    pub fn display(&self) -> impl fmt::Display + '_
    where
        T: fmt::Display,
    {
        Chain(move || self.iter())
    }

    /// The values tail to head, rendered as `3 -> 2 -> 1` by following `previous` links.
    pub fn display_reverse(&self) -> impl fmt::Display + '_
    where
        T: fmt::Display,
    {
        Chain(move || self.iter().rev())
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.nodes[index]
            .as_ref()
            .expect("Linked index points at an occupied slot")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.nodes[index]
            .as_mut()
            .expect("Linked index points at an occupied slot")
    }

    /// Stores `node` in a free slot if there is one, otherwise at the end of the arena.
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list. The caller is
    /// responsible for unlinking it from its neighbours.
    fn release(&mut self, index: usize) -> Node<T> {
        let node = self.nodes[index]
            .take()
            .expect("Released index points at an occupied slot");
        self.free.push(index);
        self.len -= 1;
        node
    }

    /// Once the last node is gone every slot is free, so drop them all and start over.
    fn shrink_if_empty(&mut self) {
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }
    }
}

#[cfg(test)]
impl<T> DoublyLinkedList<T> {
    /// Walks the list both ways and checks that the links agree with each other, with `head`,
    /// `tail` and `len`, and with the free list.
    fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        assert_eq!(self.head.is_none(), self.len == 0);

        let mut previous = None;
        let mut cursor = self.head;
        let mut seen = 0;
        while let Some(index) = cursor {
            let node = self.node(index);
            assert_eq!(node.previous, previous, "Asymmetric previous link at {index}");
            previous = Some(index);
            cursor = node.next;
            seen += 1;
        }
        assert_eq!(previous, self.tail);
        assert_eq!(seen, self.len);

        let occupied = self.nodes.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);
        assert_eq!(self.free.len() + self.len, self.nodes.len());
        assert!(self.free.iter().all(|&index| self.nodes[index].is_none()));
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`]. It can be walked from either end; the two ends
/// stop when they meet.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`DoublyLinkedList`].
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
