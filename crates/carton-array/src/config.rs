//! Capacity policy parameters.

use carton_core::{AllocError, ArrayError};

/// Growth and shrink policy for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the minimal allocation made by default construction and
/// `clear`, the multiplier applied when growing, and the threshold that
/// triggers shrinking after removals. Validated when an array is built
/// with an explicit policy; immutable for the lifetime of the array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Slots allocated by default construction and by `clear`.
    ///
    /// Default: 10. Zero is allowed: the array then starts with no
    /// storage at all and allocates on the first insertion.
    pub initial_capacity: usize,

    /// Multiplier applied to a required size to pick a new capacity.
    ///
    /// Default: 2. Must be at least 2, so that a grown capacity is always
    /// strictly greater than the length that triggered the growth.
    pub growth_factor: usize,

    /// Removals shrink the buffer to `len * growth_factor` once
    /// `capacity > len * shrink_factor`.
    ///
    /// Default: 4 (`growth_factor * 2`). Must be greater than
    /// `growth_factor`, otherwise a freshly shrunk buffer would already
    /// qualify for the next shrink.
    pub shrink_factor: usize,
}

impl GrowthPolicy {
    /// Default minimal allocation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink threshold multiplier.
    pub const DEFAULT_SHRINK_FACTOR: usize = Self::DEFAULT_GROWTH_FACTOR * 2;

    /// The default policy.
    pub const DEFAULT: Self = Self {
        initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        shrink_factor: Self::DEFAULT_SHRINK_FACTOR,
    };

    /// Check the policy's internal constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `growth_factor < 2` or
    /// `shrink_factor <= growth_factor`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.growth_factor < 2 {
            return Err(ArrayError::invalid_argument(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.shrink_factor <= self.growth_factor {
            return Err(ArrayError::invalid_argument(format!(
                "shrink_factor ({}) must exceed growth_factor ({})",
                self.shrink_factor, self.growth_factor
            )));
        }
        Ok(())
    }

    /// Capacity to allocate when `required` slots must fit.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] if the product overflows.
    pub fn grown(&self, required: usize) -> Result<usize, AllocError> {
        required
            .checked_mul(self.growth_factor)
            .ok_or(AllocError::CapacityOverflow { slots: required })
    }

    /// Capacity for an array constructed holding `len` elements.
    ///
    /// An empty construction gets the minimal allocation.
    pub(crate) fn sized(&self, len: usize) -> Result<usize, AllocError> {
        if len == 0 {
            Ok(self.initial_capacity)
        } else {
            self.grown(len)
        }
    }

    /// Whether a buffer of `capacity` slots holding `len` elements is
    /// wasteful enough to shrink.
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        capacity > len.saturating_mul(self.shrink_factor)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_constants() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.initial_capacity, 10);
        assert_eq!(policy.growth_factor, 2);
        assert_eq!(policy.shrink_factor, 4);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn growth_factor_below_two_rejected() {
        let policy = GrowthPolicy {
            growth_factor: 1,
            ..GrowthPolicy::DEFAULT
        };
        assert!(matches!(
            policy.validate(),
            Err(ArrayError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn shrink_factor_must_exceed_growth() {
        let policy = GrowthPolicy {
            growth_factor: 3,
            shrink_factor: 3,
            ..GrowthPolicy::DEFAULT
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn grown_detects_overflow() {
        let policy = GrowthPolicy::DEFAULT;
        assert_eq!(policy.grown(5), Ok(10));
        assert_eq!(
            policy.grown(usize::MAX),
            Err(AllocError::CapacityOverflow { slots: usize::MAX })
        );
    }

    #[test]
    fn sized_empty_uses_initial_capacity() {
        let policy = GrowthPolicy::DEFAULT;
        assert_eq!(policy.sized(0), Ok(10));
        assert_eq!(policy.sized(9), Ok(18));
    }

    #[test]
    fn shrink_threshold_is_strict() {
        let policy = GrowthPolicy::DEFAULT;
        assert!(!policy.should_shrink(5, 20));
        assert!(policy.should_shrink(5, 21));
        assert!(policy.should_shrink(0, 1));
        assert!(!policy.should_shrink(0, 0));
    }
}
