use core::fmt;

/// Discipline tag identifying a chain container's concrete variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainKind {
  /// Last in, first out: insertion and removal share the top end.
  Lifo,
  /// First in, first out: insertion at the back, removal at the front.
  Fifo,
}

impl fmt::Display for ChainKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ChainKind::Lifo => f.write_str("lifo"),
      | ChainKind::Fifo => f.write_str("fifo"),
    }
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn chain_kind_renders_lowercase_names() {
    assert_eq!(ChainKind::Lifo.to_string(), "lifo");
    assert_eq!(ChainKind::Fifo.to_string(), "fifo");
  }

  #[test]
  fn chain_kind_equality() {
    assert_eq!(ChainKind::Lifo, ChainKind::Lifo);
    assert_ne!(ChainKind::Lifo, ChainKind::Fifo);
  }
}
