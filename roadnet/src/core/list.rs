//! Singly-linked positional list.
//!
//! Positions are zero-based. Access requires `position < len`, insertion
//! `position <= len`; anything else is [`GraphError::IndexOutOfRange`].
//!
//! Besides the borrowing [`Iter`], the list hands out two cursors that can
//! mutate it mid-traversal: [`Cursor`] (forward, `remove`) and [`ListCursor`]
//! (bidirectional, `remove`/`set`/`insert`). Both gate mutation on
//! [`CursorState`].

use std::fmt;

use crate::core::error::{GraphError, GraphResult};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Insert `value` so that it ends up at `position`.
    pub fn insert(&mut self, position: usize, value: T) -> GraphResult<()> {
        if position > self.len {
            return Err(self.out_of_range(position));
        }
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn remove(&mut self, position: usize) -> GraphResult<T> {
        if position >= self.len {
            return Err(self.out_of_range(position));
        }
        let len = self.len;
        let link = self.link_at(position);
        let Some(node) = link.take() else {
            return Err(GraphError::IndexOutOfRange {
                index: position,
                len,
            });
        };
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn get(&self, position: usize) -> GraphResult<&T> {
        self.iter()
            .nth(position)
            .ok_or_else(|| self.out_of_range(position))
    }

    pub fn get_mut(&mut self, position: usize) -> GraphResult<&mut T> {
        let err = self.out_of_range(position);
        self.iter_mut().nth(position).ok_or(err)
    }

    /// Replace the value at `position`, returning the old one.
    pub fn replace(&mut self, position: usize, value: T) -> GraphResult<T> {
        let slot = self.get_mut(position)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Position of the first value matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Forward cursor whose `remove` deletes the last yielded value.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            next_position: 0,
            state: CursorState::Fresh,
        }
    }

    /// Bidirectional cursor with in-place `insert`, `remove` and `set`.
    pub fn list_cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            next_position: 0,
            state: CursorState::Fresh,
        }
    }

    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn out_of_range(&self, position: usize) -> GraphError {
        GraphError::IndexOutOfRange {
            index: position,
            len: self.len,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Entries in list order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(value) = values.pop() {
            let next = list.head.take();
            list.head = Some(Box::new(Node { value, next }));
            list.len += 1;
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

/// Where a cursor stands relative to its last navigation.
///
/// `remove` and `set` are only legal in the two `Navigated*` states; every
/// mutation through the cursor moves it to `Dirty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Fresh,
    NavigatedForward,
    NavigatedBackward,
    Dirty,
}

pub struct Cursor<'a, T> {
    list: &'a mut LinkedList<T>,
    next_position: usize,
    state: CursorState,
}

impl<T> Cursor<'_, T> {
    pub fn has_next(&self) -> bool {
        self.next_position < self.list.len
    }

    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.next_position += 1;
        self.state = CursorState::NavigatedForward;
        self.list.get(self.next_position - 1).ok()
    }

    /// Remove the value returned by the last `next`.
    pub fn remove(&mut self) -> GraphResult<T> {
        if self.state != CursorState::NavigatedForward {
            return Err(GraphError::InvalidState("remove requires a preceding next"));
        }
        self.next_position -= 1;
        self.state = CursorState::Dirty;
        self.list.remove(self.next_position)
    }

    pub fn state(&self) -> CursorState {
        self.state
    }
}

pub struct ListCursor<'a, T> {
    list: &'a mut LinkedList<T>,
    next_position: usize,
    state: CursorState,
}

impl<T> ListCursor<'_, T> {
    pub fn has_next(&self) -> bool {
        self.next_position < self.list.len
    }

    pub fn has_previous(&self) -> bool {
        self.next_position > 0
    }

    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.next_position += 1;
        self.state = CursorState::NavigatedForward;
        self.list.get(self.next_position - 1).ok()
    }

    pub fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.next_position -= 1;
        self.state = CursorState::NavigatedBackward;
        self.list.get(self.next_position).ok()
    }

    /// Position `next` would yield, or `len` at the end.
    pub fn next_index(&self) -> usize {
        self.next_position
    }

    /// Position `previous` would yield, `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.next_position.checked_sub(1)
    }

    /// Insert before the value `next` would yield.
    pub fn insert(&mut self, value: T) -> GraphResult<()> {
        self.list.insert(self.next_position, value)?;
        self.next_position += 1;
        self.state = CursorState::Dirty;
        Ok(())
    }

    /// Remove the value returned by the last `next` or `previous`.
    pub fn remove(&mut self) -> GraphResult<T> {
        let position = self.last_visited("remove requires a preceding next or previous")?;
        let removed = self.list.remove(position)?;
        self.next_position = position;
        self.state = CursorState::Dirty;
        Ok(removed)
    }

    /// Overwrite the value returned by the last `next` or `previous`.
    pub fn set(&mut self, value: T) -> GraphResult<T> {
        let position = self.last_visited("set requires a preceding next or previous")?;
        let old = self.list.replace(position, value)?;
        self.state = CursorState::Dirty;
        Ok(old)
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    fn last_visited(&self, violation: &'static str) -> GraphResult<usize> {
        match self.state {
            CursorState::NavigatedForward => Ok(self.next_position - 1),
            CursorState::NavigatedBackward => Ok(self.next_position),
            CursorState::Fresh | CursorState::Dirty => Err(GraphError::InvalidState(violation)),
        }
    }
}
