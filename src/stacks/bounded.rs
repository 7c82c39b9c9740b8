//! Fixed-capacity stack stored inline in a `heapless::Vec`.

use super::Stack;
use crate::error::CapacityExceeded;
use heapless::Vec as HeaplessVec;

/// A **stack-allocated** LIFO stack holding at most `N` elements.
///
/// # Overflow protocol
/// When the stack already holds `N` elements, [`push`](BoundedStack::push) leaves the stack
/// untouched and returns [`CapacityExceeded`]. The caller must size `N` for the deepest
/// traversal it performs; [`required_capacity`](crate::recursion::required_capacity) gives
/// that bound for the counting recursion.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `T` | Element type |
/// | `N` | Capacity (number of elements) |
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    buf: HeaplessVec<T, N>,
}

impl<T, const N: usize> BoundedStack<T, N> {
    /// Creates an empty stack. No allocation occurs.
    pub fn new() -> Self {
        Self {
            buf: HeaplessVec::new(),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the next push would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Stack<T> for BoundedStack<T, N> {
    #[inline(always)]
    fn push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        self.buf.push(item).map_err(|_| {
            tracing::warn!(capacity = N, "bounded stack is full, push rejected");
            CapacityExceeded { capacity: N }
        })
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.buf.len()
    }
}
