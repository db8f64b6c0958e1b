//! Position arguments accepted by the forward conversions.
//!
//! Positions arrive as whatever numeric type the caller holds. Anything that
//! is not an integer in `1..=len` is rejected here, before a table is touched.

/// A candidate 1-based position.
pub trait Ordinal: Copy {
    /// Zero-based table index for a position in `1..=len`, `None` otherwise.
    fn checked_index(self, len: usize) -> Option<usize>;

    /// Text used when reporting a rejected position.
    fn describe(self) -> String;
}

macro_rules! impl_ordinal_int {
    ($($t:ty),*) => {
        $(
            impl Ordinal for $t {
                fn checked_index(self, len: usize) -> Option<usize> {
                    let position = usize::try_from(self).ok()?;
                    (1..=len).contains(&position).then(|| position - 1)
                }

                fn describe(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! impl_ordinal_float {
    ($($t:ty),*) => {
        $(
            impl Ordinal for $t {
                fn checked_index(self, len: usize) -> Option<usize> {
                    // NaN fails every comparison below.
                    if !self.is_finite() || self.fract() != 0.0 {
                        return None;
                    }
                    if self < 1.0 || self > len as $t {
                        return None;
                    }
                    Some(self as usize - 1)
                }

                fn describe(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_ordinal_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_ordinal_float!(f32, f64);
