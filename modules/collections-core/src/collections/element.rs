use core::fmt::Debug;

/// Fundamental constraints for values stored in chain containers.
///
/// Chains copy their elements node by node during cloning and assignment, so `Clone` is part of
/// the base contract; `Debug` keeps container diagnostics printable.
pub trait Element: Clone + Debug {}

impl<T> Element for T where T: Clone + Debug {}
