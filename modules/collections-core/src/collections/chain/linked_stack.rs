use alloc::{
  boxed::Box,
  string::{String, ToString},
};
use core::fmt;

use crate::collections::{
  Element,
  chain::{
    ChainBase, ChainError, ChainKind, ChainMut, ChainRef, LINK_SEPARATOR,
    chain_node::{ChainNode, Link},
  },
};


/// Singly linked LIFO container.
///
/// The topmost node is both the insertion and the removal end: `push` prepends a new head and
/// `pop` removes the most recently pushed element.
pub struct LinkedStack<E>
where
  E: Element, {
  head: Link<E>,
  len:  usize,
}

impl<E> LinkedStack<E>
where
  E: Element,
{
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, len: 0 }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Pushes `value` onto the top of the stack.
  pub fn push(&mut self, value: E) {
    self.head = Some(Box::new(ChainNode::new(value, self.head.take())));
    self.len += 1;
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the stack is empty.
  pub fn pop(&mut self) -> Result<E, ChainError> {
    let node = self.head.take().ok_or(ChainError::Underflow)?;
    let ChainNode { value, next } = *node;
    self.head = next;
    self.len -= 1;
    Ok(value)
  }

  /// Returns a copy of the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the stack is empty.
  pub fn peek_front(&self) -> Result<E, ChainError> {
    self.head.as_deref().map(|node| node.value.clone()).ok_or(ChainError::Underflow)
  }

  /// Removes every element, leaving the stack empty.
  pub fn clear(&mut self) {
    // Nodes are unlinked one at a time; dropping the head as a whole chain would recurse per node.
    let mut cursor = self.head.take();
    while let Some(mut node) = cursor {
      cursor = node.next.take();
    }
    self.len = 0;
  }

  /// Renders the stack top-to-bottom, elements joined by `->`.
  #[must_use]
  pub fn render(&self) -> String
  where
    E: fmt::Display, {
    self.to_string()
  }
}

impl<E> Clone for LinkedStack<E>
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

    // Two passes keep the source's top-to-bottom order: prepending a copy of each source node
    // yields that order reversed, and reversing the temporary chain in place restores it.
    let mut reversed: Link<E> = None;
    let mut cursor = source.head.as_deref();
    while let Some(node) = cursor {
      reversed = Some(Box::new(ChainNode::new(node.value.clone(), reversed)));
      cursor = node.next.as_deref();
    }

    let mut restored: Link<E> = None;
    while let Some(mut node) = reversed {
      reversed = node.next.take();
      node.next = restored;
      restored = Some(node);
    }
    self.head = restored;

    // The length is recounted from the installed chain, not taken from the source counter.
    let mut count = 0;
    let mut cursor = self.head.as_deref();
    while let Some(node) = cursor {
      count += 1;
      cursor = node.next.as_deref();
    }
    self.len = count;
  }
}

impl<E> Default for LinkedStack<E>
where
  E: Element,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Drop for LinkedStack<E>
where
  E: Element,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<E> fmt::Debug for LinkedStack<E>
where
  E: Element,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut entries = f.debug_list();
    let mut cursor = self.head.as_deref();
    while let Some(node) = cursor {
      entries.entry(&node.value);
      cursor = node.next.as_deref();
    }
    entries.finish()
  }
}

impl<E> fmt::Display for LinkedStack<E>
where
  E: Element + fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut cursor = self.head.as_deref();
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

impl<E> ChainBase<E> for LinkedStack<E>
where
  E: Element,
{
  fn kind(&self) -> ChainKind {
    ChainKind::Lifo
  }

  fn chain_ref(&self) -> ChainRef<'_, E> {
    ChainRef::Lifo(self)
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

impl<E> ChainMut<E> for LinkedStack<E>
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
      | ChainRef::Lifo(source) => {
        self.clone_from(source);
        Ok(())
      },
      | ChainRef::Fifo(_) => Err(ChainError::KindMismatch { expected: ChainKind::Lifo, found: ChainKind::Fifo }),
    }
  }
}
