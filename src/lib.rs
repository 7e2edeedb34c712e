//! This crate exposes three classic pointer-based containers
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A [`BinarySearchTree`] stores values in `Node`s that each have up to two
//! children. For every `Node`:
//!
//! 1. all the `Node`s in its left subtree have a value less than its own value.
//! 2. all the `Node`s in its right subtree have a value greater than or equal
//!    to its own value, so duplicates are kept.
//!
//! No balancing is done. Inserting already sorted values builds a tree whose
//! height equals its size, which is why every walk over the tree uses an
//! explicit stack rather than recursion.
//!
//! ## Singly Linked List
//!
//! A [`SinglyLinkedList`] only knows its head. Appending and popping at the tail
//! walk the whole list, and popping the tail needs the node before it.
//!
//! ## Doubly Linked List
//!
//! A [`DoublyLinkedList`] knows both ends and every node knows its predecessor,
//! so both ends can be pushed to and popped from in `O(1)` and the list can be
//! read backwards. Its nodes are kept in an index-based arena so that the
//! `previous` links never own anything.
//!
//! Popping from a list that can't be popped returns a [`PopError`] and leaves
//! the list untouched.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod doubly;
mod error;
pub mod singly;
pub mod tree;
mod util;

pub use doubly::DoublyLinkedList;
pub use error::PopError;
pub use singly::SinglyLinkedList;
pub use tree::BinarySearchTree;
