//! Structural self-checks for the embedding and witness types.
//!
//! Builders call [`debug_invariants!`](crate::debug_invariants) right after
//! producing a result; release builds skip the check unless one of the
//! `strict-invariants` / `check-invariants` features is on.

use crate::planarity_error::PlanarityError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Panic with a diagnostic if [`validate_invariants`](Self::validate_invariants) fails.
    fn debug_assert_invariants(&self) {
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {}: {e}", std::any::type_name::<Self>());
        }
    }
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), PlanarityError>;
}

/// Validate `$target` and panic with `$ctx` on error when invariant checking
/// is enabled. Expands to nothing in plain release builds.
#[macro_export]
macro_rules! debug_invariants {
    ($target:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $crate::debug_invariants::DebugInvariants::validate_invariants($target) {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
