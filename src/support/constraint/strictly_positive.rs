use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// # Examples
///
/// ```
/// use twine_fin::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};
///
/// let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(50.0);
/// assert!(StrictlyPositive::new(h).is_ok());
///
/// let still_air = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
/// assert!(Constrained::<_, StrictlyPositive>::new(still_air).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> ConstraintResult<()> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two strictly positive values.
///
/// The sum of two positive values is positive for `f64` and `uom` quantities.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly non-positive.
impl<T> Add for Constrained<T, StrictlyPositive>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value > T::zero(),
            "Addition produced a non-positive value, violating StrictlyPositive bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}
