use alloc::{
  boxed::Box,
  string::{String, ToString},
};
use core::{fmt, ptr::NonNull};

use crate::collections::{
  Element,
  chain::{
    ChainBase, ChainError, ChainKind, ChainMut, ChainRef, LINK_SEPARATOR,
    chain_node::{ChainNode, Link},
  },
};


/// Singly linked FIFO container.
///
/// Elements are appended after the back node and removed from the front node, so `pop` returns
/// elements in the order they were pushed. The back pointer always refers to the last node owned
/// by the `front` chain, which keeps appends O(1).
pub struct LinkedQueue<E>
where
  E: Element, {
  front: Link<E>,
  back:  Option<NonNull<ChainNode<E>>>,
  len:   usize,
}

impl<E> LinkedQueue<E>
where
  E: Element,
{
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { front: None, back: None, len: 0 }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Appends `value` after the current back node.
  pub fn push(&mut self, value: E) {
    let node = Box::new(ChainNode::terminal(value));
    let slot = match self.back {
      // The back node is still owned by the front chain, so the pointer targets a live node.
      | Some(mut back) => unsafe { &mut back.as_mut().next },
      | None => &mut self.front,
    };
    let installed = slot.insert(node);
    self.back = Some(NonNull::from(&mut **installed));
    self.len += 1;
  }

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the queue is empty.
  pub fn pop(&mut self) -> Result<E, ChainError> {
    let node = self.front.take().ok_or(ChainError::Underflow)?;
    let ChainNode { value, next } = *node;
    self.front = next;
    self.len -= 1;
    if self.front.is_none() {
      // The last node is gone; the back pointer must not outlive it.
      self.back = None;
    }
    Ok(value)
  }

  /// Returns a copy of the front element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the queue is empty.
  pub fn peek_front(&self) -> Result<E, ChainError> {
    self.front.as_deref().map(|node| node.value.clone()).ok_or(ChainError::Underflow)
  }

  /// Removes every element, leaving the queue empty.
  pub fn clear(&mut self) {
    // Nodes are unlinked one at a time; dropping the front as a whole chain would recurse per node.
    let mut cursor = self.front.take();
    while let Some(mut node) = cursor {
      cursor = node.next.take();
    }
    self.back = None;
    self.len = 0;
  }

  /// Renders the queue front-to-back, elements joined by `->`.
  #[must_use]
  pub fn render(&self) -> String
  where
    E: fmt::Display, {
    self.to_string()
  }
}

impl<E> Clone for LinkedQueue<E>
where
  E: Element,
{
  fn clone(&self) -> Self {
    let mut copy = Self::new();
    copy.clone_from(self);
    copy
  }

  fn clone_from(&mut self, source: &Self) {
    self.clear();

    // One front-to-back pass preserves FIFO order: appending at the back matches traversal order.
    let mut cursor = source.front.as_deref();
    while let Some(node) = cursor {
      self.push(node.value.clone());
      cursor = node.next.as_deref();
    }
  }
}

impl<E> Default for LinkedQueue<E>
where
  E: Element,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Drop for LinkedQueue<E>
where
  E: Element,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<E> fmt::Debug for LinkedQueue<E>
where
  E: Element,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut entries = f.debug_list();
    let mut cursor = self.front.as_deref();
    while let Some(node) = cursor {
      entries.entry(&node.value);
      cursor = node.next.as_deref();
    }
    entries.finish()
  }
}

impl<E> fmt::Display for LinkedQueue<E>
where
  E: Element + fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut cursor = self.front.as_deref();
    while let Some(node) = cursor {
      write!(f, "{}", node.value)?;
      if node.next.is_some() {
        f.write_str(LINK_SEPARATOR)?;
      }
      cursor = node.next.as_deref();
    }
    Ok(())
  }
}

impl<E> ChainBase<E> for LinkedQueue<E>
where
  E: Element,
{
  fn kind(&self) -> ChainKind {
    ChainKind::Fifo
  }

  fn chain_ref(&self) -> ChainRef<'_, E> {
    ChainRef::Fifo(self)
  }

  fn len(&self) -> usize {
    self.len
  }

  fn peek_front(&self) -> Result<E, ChainError> {
    self.peek_front()
  }

  fn render(&self) -> String
  where
    E: fmt::Display, {
    self.render()
  }
}

impl<E> ChainMut<E> for LinkedQueue<E>
where
  E: Element,
{
  fn push(&mut self, value: E) {
    self.push(value);
  }

  fn pop(&mut self) -> Result<E, ChainError> {
    self.pop()
  }

  fn clear(&mut self) {
    self.clear();
  }

  fn assign_from(&mut self, other: &dyn ChainBase<E>) -> Result<(), ChainError> {
    match other.chain_ref() {
      | ChainRef::Fifo(source) => {
        self.clone_from(source);
        Ok(())
      },
      | ChainRef::Lifo(_) => Err(ChainError::KindMismatch { expected: ChainKind::Fifo, found: ChainKind::Lifo }),
    }
  }
}
