use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the open unit interval `0 < x < 1`.
///
/// Use this type with [`Constrained<T, UnitIntervalOpen>`] for quantities that
/// must be proper fractions, such as blending or damping factors.
///
/// # Examples
///
/// ```
/// use borefield_models::support::constraint::{Constrained, UnitIntervalOpen};
///
/// // Generic constructor:
/// let x = Constrained::<_, UnitIntervalOpen>::new(0.5).unwrap();
/// assert_eq!(x.into_inner(), 0.5);
///
/// // Associated constructor:
/// let y = UnitIntervalOpen::new(0.73214).unwrap();
/// assert_eq!(y.into_inner(), 0.73214);
///
/// // Error cases:
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// assert!(UnitIntervalOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs a [`Constrained<T, UnitIntervalOpen>`] if the value lies in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the open interval or not a
    /// number (`NaN`).
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal | Ordering::Less) => return Err(ConstraintError::BelowMinimum),
            None => return Err(ConstraintError::NotANumber),
        }
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Less) => Ok(()),
            Some(Ordering::Equal | Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
