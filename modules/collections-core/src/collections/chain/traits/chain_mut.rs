use core::str::FromStr;

use crate::collections::{
  Element,
  chain::{ChainError, traits::chain_base::ChainBase},
};

/// Mutating capabilities shared by every chain container.
pub trait ChainMut<E>: ChainBase<E>
where
  E: Element, {
  /// Inserts one element at the variant's insertion end.
  fn push(&mut self, value: E);

  /// Removes and returns the element at the variant's removal end.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::Underflow`] when the chain holds no elements; the chain is left
  /// unchanged.
  fn pop(&mut self) -> Result<E, ChainError>;

  /// Removes every element, leaving the chain empty.
  fn clear(&mut self);

  /// Replaces this chain's contents with a copy of `other`'s contents.
  ///
  /// The runtime variant of `other` is checked before any mutation, so a rejected assignment
  /// leaves the receiver untouched.
  ///
  /// # Errors
  ///
  /// Returns [`ChainError::KindMismatch`] when `other` is a different concrete variant.
  fn assign_from(&mut self, other: &dyn ChainBase<E>) -> Result<(), ChainError>;

  /// Parses one value from `token` and pushes it at the insertion end.
  ///
  /// # Errors
  ///
  /// Propagates the element type's parse error; nothing is pushed in that case.
  fn push_parsed(&mut self, token: &str) -> Result<(), E::Err>
  where
    E: FromStr, {
    let value = token.trim().parse::<E>()?;
    self.push(value);
    Ok(())
  }
}
