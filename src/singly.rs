//! A singly linked list. Each node owns the next one and the list only knows its head, so anything
//! done at the tail first walks the whole list.
//!
//! # Examples
//!
//! ```
//! use pointer_structures::singly::SinglyLinkedList;
//! use pointer_structures::PopError;
//!
//! let mut list = SinglyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! assert_eq!(list.to_string(), "1 -> 2 -> 3");
//!
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list.pop(), Ok(2));
//!
//! // Popping the tail needs the node before it.
//! assert_eq!(list.pop(), Err(PopError::InsufficientElements));
//! assert_eq!(list.to_string(), "1");
//! ```

use std::fmt;

use crate::error::PopError;
use crate::util::{write_chain, Chain};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}

/// A singly linked list with no tail pointer.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    // Unlink one node at a time so a long list doesn't drop recursively.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Clone for SinglyLinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SinglyLinkedList<T> where T: Eq {}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values head to tail as `1 -> 2 -> 3`.
impl<T> fmt::Display for SinglyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

impl<T> SinglyLinkedList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no head.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` after the current tail. The tail is found by walking from the head so this is
    /// `O(n)`.
    pub fn append(&mut self, value: T) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Removes the tail and returns its value.
    ///
    /// The list is walked to find the node before the tail, so there must be at least two nodes.
    /// On an empty list this returns [`PopError::Empty`] and on a single-node list
    /// [`PopError::InsufficientElements`]. Either way the list is left as it was. Use
    /// [`pop_front`][Self::pop_front] to take the last remaining value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointer_structures::singly::SinglyLinkedList;
    /// use pointer_structures::PopError;
    ///
    /// let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert_eq!(list.pop(), Err(PopError::Empty));
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.pop(), Ok(2));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop(&mut self) -> Result<T, PopError> {
        let head = self.head.as_mut().ok_or(PopError::Empty)?;
        if head.next.is_none() {
            return Err(PopError::InsufficientElements);
        }

        let mut before_tail = head;
        while before_tail
            .next
            .as_ref()
            .is_some_and(|next| next.next.is_some())
        {
            before_tail = before_tail
                .next
                .as_mut()
                .expect("Loop condition saw a next node");
        }

        let tail = before_tail
            .next
            .take()
            .expect("Walk stops on the node before the tail");
        self.len -= 1;
        Ok(tail.value)
    }

    /// Adds `value` as the new head in `O(1)`.
    pub fn push_front(&mut self, value: T) {
        let mut node = Node::new_boxed(value);
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the head in `O(1)` and returns its value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// The head's value.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// The tail's value. Walks the list.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
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

    /// The values tail to head, rendered as `3 -> 2 -> 1`.
    ///
    /// Nodes don't know their predecessor, so the values are collected first and rendered
    /// backwards from there.
    pub fn display_reverse(&self) -> impl fmt::Display + '_
    where
        T: fmt::Display,
    {
        Chain(move || {
            let mut values: Vec<&T> = self.iter().collect();
            values.reverse();
            values
        })
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Walks to the tail once and then keeps appending there.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for value in iter {
            let node = slot.insert(Node::new_boxed(value));
            slot = &mut node.next;
            self.len += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`SinglyLinkedList`], taking values from the head.
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
