mod chain_base;
mod chain_mut;

pub use chain_base::ChainBase;
pub use chain_mut::ChainMut;
