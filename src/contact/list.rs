use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::config::Config;
use crate::contact::array::ArrayFactory;
use crate::contact::node::{ContactNode, Link};
use crate::error::{ListError, Rejected};

/// A doubly linked list of contacts with a movable cursor.
///
/// Contacts are appended at the tail in insertion order and their ids are
/// unique within a list. The cursor (`current`) is what `delete_current`,
/// `advance` and `retreat` operate on; it is set to the first contact ever
/// inserted into an empty list and otherwise only moves when asked to.
pub struct ContactList<A> {
    head: Link<A>,
    tail: Link<A>,
    current: Link<A>,
    len: usize,
    config: Config,
    marker: PhantomData<Box<ContactNode<A>>>,
}

pub struct Iter<'a, A: 'a> {
    head: Link<A>,
    tail: Link<A>,
    len: usize,
    marker: PhantomData<&'a ContactNode<A>>,
}

impl<A> ContactList<A> {
    fn push_back_node(&mut self, mut node: Box<ContactNode<A>>) {
        unsafe {
            node.next = None;
            node.prev = self.tail;
            let node = Some(Box::into_raw(node));

            match self.tail {
                None => {
                    self.head = node;
                    self.current = node;
                }
                Some(tail) => (*tail).next = node,
            }

            self.tail = node;
        }
        self.len += 1;
    }

    fn pop_front_node(&mut self) -> Option<Box<ContactNode<A>>> {
        self.head.map(|node| unsafe {
            let node = Box::from_raw(node);
            self.head = node.next;

            match self.head {
                None => self.tail = None,
                Some(head) => (*head).prev = None,
            }

            self.len -= 1;
            node
        })
    }

    unsafe fn unlink_node(&mut self, node: *mut ContactNode<A>) {
        match (*node).prev {
            Some(prev) => (*prev).next = (*node).next,
            None => self.head = (*node).next,
        }

        match (*node).next {
            Some(next) => (*next).prev = (*node).prev,
            None => self.tail = (*node).prev,
        }

        (*node).prev = None;
        (*node).next = None;
        self.len -= 1;
    }

    fn find_node<P>(&self, pred: P) -> Link<A>
        where P: Fn(&ContactNode<A>) -> bool {
        let mut node = self.head;
        while let Some(ptr) = node {
            unsafe {
                if pred(&*ptr) {
                    return Some(ptr);
                }
                node = (*ptr).next;
            }
        }
        None
    }

    /// Moves the cursor `n` links along `step`, or not at all.
    fn walk<S>(&mut self, n: usize, step: S) -> Result<(), ListError>
        where S: Fn(&ContactNode<A>) -> Link<A> {
        if n == 0 {
            return Ok(());
        }
        let mut node = self.current.ok_or(ListError::InvalidReference)?;
        for i in 0..n {
            node = match unsafe { step(&*node) } {
                Some(next) => next,
                None => {
                    debug!("cursor stopped after {} of {} steps, not moved", i, n);
                    return Err(ListError::NotFound);
                }
            };
        }
        self.current = Some(node);
        Ok(())
    }
}

impl<A> ContactList<A> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        ContactList {
            head: None,
            tail: None,
            current: None,
            len: 0,
            config,
            marker: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    pub fn ids(&self) -> Vec<i32> {
        self.iter().map(ContactNode::id).collect()
    }

    pub fn head(&self) -> Option<&ContactNode<A>> {
        unsafe { self.head.map(|node| &*node) }
    }

    pub fn tail(&self) -> Option<&ContactNode<A>> {
        unsafe { self.tail.map(|node| &*node) }
    }

    pub fn current(&self) -> Option<&ContactNode<A>> {
        unsafe { self.current.map(|node| &*node) }
    }

    /// The current contact's array. Linked nodes are never handed out
    /// mutably, only their arrays.
    pub fn current_array_mut(&mut self) -> Option<&mut A> {
        unsafe { self.current.map(|node| (*node).array_mut()) }
    }

    /// Drops every contact, head to tail. The list stays usable.
    pub fn clear(&mut self) {
        let n = self.len;
        while let Some(_) = self.pop_front_node() {}
        self.current = None;
        trace!("released {} contacts", n);
    }

    /// Appends `node` at the tail.
    ///
    /// A node whose id is already in the list is handed back inside the
    /// error; the list is left untouched.
    pub fn insert(&mut self, node: ContactNode<A>) -> Result<(), Rejected<A>> {
        if !self.is_empty() && self.contains_id(node.id()) {
            debug!("rejected contact {}: id already present", node.id());
            return Err(Rejected::new(node));
        }
        trace!("inserting contact {} at position {}", node.id(), self.len);
        self.push_back_node(Box::new(node));
        Ok(())
    }

    /// Builds a node from the list's config and inserts it. A duplicate is
    /// dropped together with its array.
    pub fn push<F>(&mut self, id: i32, name: &str, factory: &mut F) -> Result<(), ListError>
        where F: ArrayFactory<Array=A> {
        let node = ContactNode::with_config(id, name, &self.config, factory)?;
        self.insert(node).map_err(ListError::from)
    }

    /// Unlinks the current node and gives it back.
    ///
    /// The cursor moves to the previous node, or to the next one when the
    /// head was taken, and becomes `None` once the list is empty.
    pub fn take_current(&mut self) -> Result<ContactNode<A>, ListError> {
        let node = self.current.ok_or(ListError::InvalidReference)?;
        unsafe {
            self.current = match ((*node).prev, (*node).next) {
                (Some(prev), _) => Some(prev),
                (None, next) => next,
            };
            self.unlink_node(node);
            Ok(*Box::from_raw(node))
        }
    }

    pub fn delete_current(&mut self) -> Result<(), ListError> {
        let node = self.take_current()?;
        debug!("deleted contact {}, {} left", node.id(), self.len);
        Ok(())
    }

    pub fn advance(&mut self, n: usize) -> Result<(), ListError> {
        self.walk(n, |node| node.next)
    }

    pub fn retreat(&mut self, n: usize) -> Result<(), ListError> {
        self.walk(n, |node| node.prev)
    }

    pub fn rewind(&mut self) {
        self.current = self.head;
    }

    pub fn find_by_id(&self, id: i32) -> Option<&ContactNode<A>> {
        unsafe { self.find_node(|node| node.id() == id).map(|node| &*node) }
    }

    pub fn array_by_id_mut(&mut self, id: i32) -> Option<&mut A> {
        unsafe { self.find_node(|node| node.id() == id).map(|node| (*node).array_mut()) }
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.find_node(|node| node.id() == id).is_some()
    }

    /// First contact whose name matches exactly. The cursor is not moved.
    pub fn find_by_name(&self, name: &str) -> Option<&ContactNode<A>> {
        unsafe { self.find_node(|node| node.name() == name).map(|node| &*node) }
    }

    pub fn seek_by_id(&mut self, id: i32) -> Result<&ContactNode<A>, ListError> {
        let node = self.find_node(|node| node.id() == id).ok_or(ListError::NotFound)?;
        self.current = Some(node);
        unsafe { Ok(&*node) }
    }

    pub fn seek_by_name(&mut self, name: &str) -> Result<&ContactNode<A>, ListError> {
        let node = self.find_node(|node| node.name() == name).ok_or(ListError::NotFound)?;
        self.current = Some(node);
        unsafe { Ok(&*node) }
    }
}

impl<A> Default for ContactList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for ContactList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> Drop for ContactList<A> {
    fn drop(&mut self) {
        while let Some(_) = self.pop_front_node() {}
    }
}

impl<'a, A> IntoIterator for &'a ContactList<A> {
    type Item = &'a ContactNode<A>;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a ContactNode<A>;

    fn next(&mut self) -> Option<&'a ContactNode<A>> {
        if self.len == 0 {
            None
        } else {
            self.head.map(|node| unsafe {
                // Need an unbound lifetime to get 'a
                self.len -= 1;
                self.head = (*node).next;
                &*node
            })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<&'a ContactNode<A>> {
        if self.len == 0 {
            None
        } else {
            self.tail.map(|node| unsafe {
                self.len -= 1;
                self.tail = (*node).prev;
                &*node
            })
        }
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}
