//! Doubly-linked list over external storage.
//!
//! The list tracks `head`, `tail`, and a length; nodes live in
//! caller-provided storage and the list only rewires their links. Clearing
//! or dropping a list therefore never frees node data; the storage's
//! owner decides when values die.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Passing a different storage is undefined behavior in the sense of
//! corrupted links, though never memory unsafety. This is the caller's
//! responsibility to enforce (same discipline as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use linkq::{List, Node, Storage, VecStorage};
//!
//! let mut storage: VecStorage<Node<u64>> = VecStorage::new();
//! let mut list: List<u64, VecStorage<Node<u64>>> = List::new();
//!
//! let a = storage.insert(Node::new(1));
//! let b = storage.insert(Node::new(2));
//!
//! list.push_front(&mut storage, a);
//! list.push_front(&mut storage, b);
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.head(), Some(b));
//! assert_eq!(list.get(&storage, a), Some(&1));
//!
//! assert_eq!(list.remove(&mut storage, b), Some(b));
//! assert_eq!(list.len(), 1);
//! ```

use std::marker::PhantomData;

use crate::{Key, Node, Storage};

/// A doubly-linked list over external storage.
///
/// The list stores head and tail keys plus a length. All operations take
/// the backing storage explicitly; the list never inserts into or removes
/// from storage, it only rewires node links.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g. [`VecStorage<Node<T>>`](crate::VecStorage))
/// - `K`: Key type (default `u32`)
#[derive(Debug)]
pub struct List<T, S, K: Key = u32>
where
    S: Storage<Node<T, K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for List<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K: Key> List<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<K> {
        if self.head.is_none() {
            None
        } else {
            Some(self.head)
        }
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<K> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.tail)
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Splices a node, and any pre-linked run reachable through its `next`
    /// key, in front of the current head.
    ///
    /// The node(s) must already exist in storage and must not belong to a
    /// list. A single detached node takes an O(1) path; a node carrying a
    /// pre-linked run is walked to its end (counting nodes) and the whole
    /// run is spliced in at once, taking the run's interior links as given.
    ///
    /// Returns the key on success, or `None` (a no-op) if `key` is not in
    /// storage.
    pub fn push_front(&mut self, storage: &mut S, key: K) -> Option<K> {
        let first_next = storage.get(key)?.next();

        // The pushed node becomes the head; anything it used to point back
        // at is stale.
        storage.get_mut(key).unwrap().set_prev(K::NONE);

        let (run_tail, count) = if first_next.is_none() {
            (key, 1)
        } else {
            let mut tail = first_next;
            let mut count = 2;
            loop {
                let next = storage.get(tail).expect("invalid key in pre-linked run").next();
                if next.is_none() {
                    break;
                }
                tail = next;
                count += 1;
            }
            (tail, count)
        };

        if self.head.is_some() {
            let old_head = self.head;
            storage.get_mut(run_tail).unwrap().set_next(old_head);
            storage.get_mut(old_head).unwrap().set_prev(run_tail);
        } else {
            self.tail = run_tail;
        }

        self.head = key;
        self.len += count;
        Some(key)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Unlinks a node from the list.
    ///
    /// Fixes the neighbors' links and the `head`/`tail` endpoints, clears
    /// the node's own links, and decrements the length. The node stays in
    /// storage; ownership of its value is unchanged.
    ///
    /// Returns `None` (a no-op) if `key` is not in storage, or if the node
    /// is detached and not this list's sole head. A node that carries links
    /// into a *different* list backed by the same storage cannot be told
    /// apart from one of ours; passing one is a precondition violation that
    /// corrupts that other list.
    pub fn remove(&mut self, storage: &mut S, key: K) -> Option<K> {
        let node = storage.get(key)?;
        let prev = node.prev();
        let next = node.next();

        if prev.is_none() && next.is_none() && self.head != key {
            return None;
        }

        if prev.is_some() {
            storage.get_mut(prev).expect("corrupt prev link").set_next(next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            storage.get_mut(next).expect("corrupt next link").set_prev(prev);
        } else {
            self.tail = prev;
        }

        let node = storage.get_mut(key).unwrap();
        node.set_prev(K::NONE);
        node.set_next(K::NONE);

        self.len -= 1;
        Some(key)
    }

    /// Unlinks and returns the head node's key.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<K> {
        if self.head.is_none() {
            return None;
        }

        let head = self.head;
        self.remove(storage, head)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the key of the node `n` positions before the tail
    /// (`n = 0` is the tail itself).
    ///
    /// Returns `None` if the list has fewer than `n + 1` nodes.
    ///
    /// Uses the two-pointer lag technique over `next` links only: a lead
    /// cursor runs `n + 1` steps ahead, then both cursors advance until the
    /// lead falls off the tail. Because `prev` links are never read, the
    /// answer is correct even when a spliced run's backward links are
    /// inconsistent.
    pub fn nth_from_back(&self, storage: &S, n: usize) -> Option<K> {
        let mut lead = self.head;
        for _ in 0..=n {
            if lead.is_none() {
                return None;
            }
            lead = storage.get(lead).expect("corrupt next link").next();
        }

        let mut trail = self.head;
        while lead.is_some() {
            trail = storage.get(trail).expect("corrupt next link").next();
            lead = storage.get(lead).expect("corrupt next link").next();
        }

        Some(trail)
    }

    /// Returns a reference to the value at `key`.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, key: K) -> Option<&'a T>
    where
        K: 'a,
    {
        storage.get(key).map(Node::value)
    }

    /// Returns a mutable reference to the value at `key`.
    #[inline]
    pub fn get_mut<'a>(&self, storage: &'a mut S, key: K) -> Option<&'a mut T>
    where
        K: 'a,
    {
        storage.get_mut(key).map(Node::value_mut)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Empties the list, detaching every remaining node's links.
    ///
    /// Nodes stay in storage with cleared links; the storage's owner keeps
    /// ownership of the values.
    pub fn clear(&mut self, storage: &mut S) {
        let mut key = self.head;
        while key.is_some() {
            let node = storage.get_mut(key).expect("corrupt next link");
            let next = node.next();
            node.set_prev(K::NONE);
            node.set_next(K::NONE);
            key = next;
        }

        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }
}
