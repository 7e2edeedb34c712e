use std::collections::VecDeque;

use pointer_structures::{DoublyLinkedList, PopError, SinglyLinkedList};

use quickcheck_macros::quickcheck;

use crate::Op;

#[test]
fn doubly_append_pop_scenario() {
    let mut list = DoublyLinkedList::new();
    for value in [1, 2, 3, 4] {
        list.append(value);
    }

    assert_eq!(list.pop(), Ok(4));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn doubly_pop_to_empty_then_reuse() {
    let mut list: DoublyLinkedList<_> = (1..=3).collect();
    assert_eq!(list.pop(), Ok(3));
    assert_eq!(list.pop(), Ok(2));
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.pop(), Err(PopError::Empty));
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.append(9);
    assert_eq!(list, [9].into_iter().collect::<DoublyLinkedList<_>>());
    assert_eq!(list.front(), Some(&9));
    assert_eq!(list.back(), Some(&9));
}

#[test]
fn singly_pop_errors_leave_list_alone() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.pop(), Err(PopError::Empty));

    list.append('x');
    assert_eq!(list.pop(), Err(PopError::InsufficientElements));
    assert_eq!(list.to_string(), "x");
}

#[test]
fn error_propagates_with_question_mark() {
    fn pop_two(list: &mut DoublyLinkedList<u8>) -> Result<(u8, u8), PopError> {
        Ok((list.pop()?, list.pop()?))
    }

    let mut list: DoublyLinkedList<_> = [1, 2].into_iter().collect();
    assert_eq!(pop_two(&mut list), Ok((2, 1)));
    assert_eq!(pop_two(&mut list), Err(PopError::Empty));
}

#[quickcheck]
fn append_reads_forward(xs: Vec<u8>) -> bool {
    let singly: SinglyLinkedList<_> = xs.iter().copied().collect();
    let doubly: DoublyLinkedList<_> = xs.iter().copied().collect();

    singly.iter().eq(xs.iter())
        && doubly.iter().eq(xs.iter())
        && doubly.iter().rev().eq(xs.iter().rev())
}

#[quickcheck]
fn pop_returns_last(xs: Vec<u8>) -> bool {
    let mut doubly: DoublyLinkedList<_> = xs.iter().copied().collect();
    let mut singly: SinglyLinkedList<_> = xs.iter().copied().collect();

    let doubly_ok =
        doubly.pop().ok() == xs.last().copied() && doubly.len() == xs.len().saturating_sub(1);
    let singly_ok = match xs.len() {
        0 => singly.pop() == Err(PopError::Empty),
        1 => singly.pop() == Err(PopError::InsufficientElements) && singly.len() == 1,
        n => singly.pop().ok() == xs.last().copied() && singly.len() == n - 1,
    };
    doubly_ok && singly_ok
}

/// Applies the same operations to both lists and a `VecDeque`. The singly linked list refuses to
/// pop the tail of a single-node list, so that node is taken from the front instead.
#[quickcheck]
fn lists_agree_with_deque(ops: Vec<Op<i8>>) -> bool {
    let mut singly = SinglyLinkedList::new();
    let mut doubly = DoublyLinkedList::new();
    let mut model = VecDeque::new();

    for op in ops {
        match op {
            Op::Append(value) => {
                singly.append(value);
                doubly.append(value);
                model.push_back(value);
            }
            Op::Pop => {
                if model.len() == 1 {
                    // The lone node can't be popped from the tail, only from the front.
                    if singly.pop() != Err(PopError::InsufficientElements) {
                        return false;
                    }
                    singly.pop_front();
                } else if singly.pop().ok() != model.back().copied() {
                    return false;
                }
                if doubly.pop().ok() != model.pop_back() {
                    return false;
                }
            }
            Op::PopFront => {
                let front = model.pop_front();
                if singly.pop_front() != front || doubly.pop_front() != front {
                    return false;
                }
            }
        }
    }

    singly.iter().eq(model.iter()) && doubly.iter().eq(model.iter())
}
