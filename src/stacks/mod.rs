//! Explicit last-in-first-out stacks used in place of the call stack.
//!
//! [`Stack`] is the minimal interface the counting loop in [`recursion`](crate::recursion)
//! needs. It is implemented for the standard containers the experiment compares and for
//! [`BoundedStack`], a fixed-capacity inline stack.
//!
//! | Backend | Storage | Growth |
//! |---------|---------|--------|
//! | `VecDeque<T>` | Heap ring buffer | Doubling |
//! | `Vec<T>` | Heap array | Doubling |
//! | `Vec<T>` built with `with_capacity` | Heap array | None while within the reservation |
//! | `LinkedList<T>` | One heap node per element | Per push |
//! | `BoundedStack<T, N>` | Inline array | None; push fails when full |

mod bounded;

pub use bounded::BoundedStack;

use crate::error::CapacityExceeded;
use std::collections::{LinkedList, VecDeque};

/// A last-in-first-out container.
///
/// `push` is fallible so that fixed-capacity backends can refuse an element instead of
/// overwriting memory. Growable backends always return `Ok(())`.
pub trait Stack<T> {
    /// Pushes `item` on top of the stack.
    fn push(&mut self, item: T) -> Result<(), CapacityExceeded>;

    /// Removes and returns the top element, or `None` if the stack is empty.
    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Stack<T> for Vec<T> {
    #[inline(always)]
    fn push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        Vec::push(self, item);
        Ok(())
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Stack<T> for VecDeque<T> {
    #[inline(always)]
    fn push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        self.push_back(item);
        Ok(())
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Stack<T> for LinkedList<T> {
    #[inline(always)]
    fn push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        self.push_back(item);
        Ok(())
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: Stack<i32>>(mut stack: S) {
        assert!(stack.is_empty());
        for i in 0..10 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.len(), 10);
        for i in (0..10).rev() {
            assert_eq!(stack.pop(), Some(i));
        }
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stacks_lifo_order_all_backends() {
        exercise(Vec::new());
        exercise(Vec::with_capacity(32));
        exercise(VecDeque::new());
        exercise(LinkedList::new());
        exercise(BoundedStack::<i32, 16>::new());
    }

    #[test]
    fn test_stacks_interleaved_push_pop() {
        let mut stack: VecDeque<i32> = VecDeque::new();
        Stack::push(&mut stack, 1).unwrap();
        Stack::push(&mut stack, 2).unwrap();
        assert_eq!(Stack::pop(&mut stack), Some(2));
        Stack::push(&mut stack, 3).unwrap();
        assert_eq!(Stack::pop(&mut stack), Some(3));
        assert_eq!(Stack::pop(&mut stack), Some(1));
    }
}
