pub mod chain;
mod element;

pub use chain::{ChainBase, ChainError, ChainKind, ChainMut, ChainRef, LINK_SEPARATOR, LinkedQueue, LinkedStack};
pub use element::Element;
