//! Constants and numeric context shared with the evaluator
//!
//! The evaluator consumes the classified tree; the values here pin down
//! the numeric behaviour and recursion bounds it must honour.
pub mod error;

use bigdecimal::Context;
use std::num::NonZeroU64;

/// An arbitrary-precision decimal number.
///
/// Aliased so the underlying representation can change without touching
/// consumers.
pub type Decimal = bigdecimal::BigDecimal;

/// Maximum evaluation depth, used to break cycles in the absence of
/// cycle detection. Registered centrally so every brute-force
/// cycle-break shares the same bound.
pub const MAX_DEPTH: usize = 20;

lazy_static! {
    /// Default context for decimal arithmetic: 24 significant digits
    pub static ref BASE_CONTEXT: Context =
        Context::default().with_precision(NonZeroU64::new(24).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;

    #[test]
    pub fn test_base_context_precision() {
        assert_eq!(BASE_CONTEXT.precision().get(), 24);
    }

    #[test]
    pub fn test_base_context_default_rounding() {
        assert_eq!(BASE_CONTEXT.rounding_mode(), RoundingMode::HalfEven);
    }
}
