//! A singly linked FIFO queue. Elements are pushed at the tail and popped
//! from the head, both in `O(1)`.
//!
//! An `O(1)` tail append needs a tail pointer into the owned chain, so the
//! links are `NonNull` raw pointers rather than `Option<Box<...>>` - the same
//! trade the tree would have to make if it kept parent pointers. Every
//! element is still exclusively owned by the queue: it is allocated with a
//! `Box` in [`push`][Queue::push] and reclaimed with `Box::from_raw` in
//! exactly one place.
//!
//! # Examples
//!
//! ```
//! use bstree::queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.push("a");
//! queue.push("b");
//! queue.push("c");
//!
//! // Strictly first-in-first-out.
//! assert_eq!(queue.pop(), Some("a"));
//! assert_eq!(queue.pop(), Some("b"));
//! assert_eq!(queue.pop(), Some("c"));
//! assert_eq!(queue.pop(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Element<T> {
    value: T,
    next: Option<NonNull<Element<T>>>,
}

/// A singly linked FIFO queue of opaque values.
///
/// Values are moved in on [`push`][Queue::push] and handed back out on
/// [`pop`][Queue::pop] in the order they arrived; the queue never inspects
/// or copies them. The queue is unsynchronized (and `!Send`/`!Sync`) - a
/// caller that needs concurrent access wraps it in a lock.
pub struct Queue<T> {
    first: Option<NonNull<Element<T>>>,
    last: Option<NonNull<Element<T>>>,
    len: usize,
    /// The queue logically owns `Box<Element<T>>`s even though it only holds
    /// raw pointers to them.
    marker: PhantomData<Box<Element<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.first;
        while let Some(element) = current {
            // SAFETY: Every pointer in the chain was created from a live
            // `Box` in `push` and is only invalidated when `pop` reclaims
            // it, which can't happen while `&self` is borrowed.
            let element = unsafe { element.as_ref() };
            list.entry(&element.value);
            current = element.next;
        }
        list.finish()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends a value at the tail of the queue. If the queue was empty, the
    /// new element becomes both head and tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, value: T) {
        let element = NonNull::from(Box::leak(Box::new(Element { value, next: None })));

        match self.last {
            // SAFETY: `last` points at the element most recently pushed,
            // which is still owned by this queue and not aliased - `pop`
            // clears `last` before the final element is reclaimed.
            Some(mut last) => unsafe { last.as_mut().next = Some(element) },
            None => self.first = Some(element),
        }

        self.last = Some(element);
        self.len += 1;
    }

    /// Removes and returns the value at the head of the queue, or `None` if
    /// the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop(), None);
    ///
    /// queue.push(1);
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let first = self.first?;

        // SAFETY: `first` was allocated with `Box::new` in `push` and the
        // queue is its only owner. `first` and `last` are rewritten below
        // before anything else can observe them, so the element is reclaimed
        // exactly once.
        let element = unsafe { Box::from_raw(first.as_ptr()) };

        self.first = element.next;
        if self.first.is_none() {
            self.last = None;
        }
        self.len -= 1;

        Some(element.value)
    }

    /// Borrows the value at the head of the queue without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.peek(), None);
    ///
    /// queue.push(1);
    /// assert_eq!(queue.peek(), Some(&1));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `first` points at a live element owned by this queue, and
        // holding `&self` keeps `pop` from reclaiming it while the returned
        // borrow is alive.
        self.first.map(|first| unsafe { &(*first.as_ptr()).value })
    }

    /// The number of values currently in the queue. This is a maintained
    /// counter, not a traversal.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every element from head to tail, leaving the queue in the
    /// same state as a freshly constructed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// queue.clear();
    /// assert_eq!(queue.len(), 0);
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}
