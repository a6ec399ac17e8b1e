//! Key ordering capability for matrix axes
//!
//! Row and column keys only need a total order (`Ord`) to be stored and
//! traversed. The bounding-box queries additionally need to name the key
//! just past the largest stored one, which is what [`MatrixKey`] adds.

/// A totally ordered key with an origin and a successor
///
/// Implemented for all primitive integer types. Custom key types opt in by
/// implementing it; keys that have no natural successor can still be used
/// everywhere except the half-open bound queries.
pub trait MatrixKey: Ord + Clone {
    /// Key reported as both ends of the bounds of an empty axis
    fn origin() -> Self;

    /// The key immediately following `self` in order
    ///
    /// # Panics
    ///
    /// Panics if `self` is the largest value of the key type.
    fn successor(&self) -> Self;
}

macro_rules! impl_matrix_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MatrixKey for $ty {
                fn origin() -> Self {
                    0
                }

                fn successor(&self) -> Self {
                    match self.checked_add(1) {
                        Some(next) => next,
                        None => panic!("matrix key {} has no successor", self),
                    }
                }
            }
        )*
    };
}

impl_matrix_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_keys() {
        assert_eq!(usize::origin(), 0);
        assert_eq!(7usize.successor(), 8);
        assert_eq!((-1i32).successor(), 0);
        assert_eq!(i64::origin(), 0);
    }

    #[test]
    #[should_panic(expected = "has no successor")]
    fn test_successor_overflow_panics() {
        let _ = u8::MAX.successor();
    }
}
