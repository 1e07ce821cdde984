use alloc::string::String;
use core::fmt;

use crate::collections::{
  Element,
  chain::{ChainError, ChainKind, ChainRef},
};

/// Read-only capabilities shared by every chain container.
pub trait ChainBase<E>
where
  E: Element, {
  /// Returns the kind tag identifying the concrete variant.
  fn kind(&self) -> ChainKind;

  /// Returns the borrowed concrete-variant view used for runtime kind checks.
  fn chain_ref(&self) -> ChainRef<'_, E>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the chain is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns a copy of the element at the removal end without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the chain holds no elements.
  fn peek_front(&self) -> Result<E, ChainError>;

  /// Renders the chain in removal-to-insertion order, elements joined by
  /// [`LINK_SEPARATOR`](crate::collections::chain::LINK_SEPARATOR) with no trailing separator.
  fn render(&self) -> String
  where
    E: fmt::Display;
}
