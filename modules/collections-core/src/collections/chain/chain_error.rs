use crate::collections::chain::ChainKind;

/// Errors produced by chain operations.
///
/// Both variants are recoverable; the failing operation leaves the container unchanged.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
  /// Removal or peek was attempted while the chain held no elements.
  #[error("chain underflow: the chain holds no elements")]
  Underflow,
  /// Interface-level assignment was attempted between chains of different kinds.
  #[error("kind mismatch: cannot assign {found} chain contents onto a {expected} chain")]
  KindMismatch {
    /// Kind of the receiving chain.
    expected: ChainKind,
    /// Kind of the assignment source.
    found:    ChainKind,
  },
}
