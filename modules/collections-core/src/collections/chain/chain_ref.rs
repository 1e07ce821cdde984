use crate::collections::{
  Element,
  chain::{ChainKind, LinkedQueue, LinkedStack},
};

/// Borrowed view of a chain's concrete variant.
///
/// The variant set is closed, so interface-level assignment can check the runtime kind of its
/// source with an ordinary pattern match.
pub enum ChainRef<'a, E>
where
  E: Element, {
  /// The chain is a [`LinkedStack`].
  Lifo(&'a LinkedStack<E>),
  /// The chain is a [`LinkedQueue`].
  Fifo(&'a LinkedQueue<E>),
}

impl<'a, E> ChainRef<'a, E>
where
  E: Element,
{
  /// Returns the kind tag of the referenced chain.
  #[must_use]
  pub const fn kind(&self) -> ChainKind {
    match self {
      | ChainRef::Lifo(_) => ChainKind::Lifo,
      | ChainRef::Fifo(_) => ChainKind::Fifo,
    }
  }
}
