//! Linked LIFO stack used to accumulate path segments.

use crate::core::error::{GraphError, GraphResult};

type Link<T> = Option<Box<Frame<T>>>;

struct Frame<T> {
    value: T,
    below: Link<T>,
}

pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Frame { value, below }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> GraphResult<T> {
        let frame = self.top.take().ok_or(GraphError::EmptyCollection)?;
        let Frame { value, below } = *frame;
        self.top = below;
        self.len -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> GraphResult<&T> {
        self.top
            .as_deref()
            .map(|frame| &frame.value)
            .ok_or(GraphError::EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut frame) = link {
            link = frame.below.take();
        }
        self.len = 0;
    }

    /// Drain the stack, top first.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        while let Ok(value) = self.pop() {
            values.push(value);
        }
        values
    }
}

impl<T: Clone> LinkedStack<T> {
    /// Copy of the entries, top first.
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut current = self.top.as_deref();
        while let Some(frame) = current {
            values.push(frame.value.clone());
            current = frame.below.as_deref();
        }
        values
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
