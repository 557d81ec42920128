/// Fixed decimal precision used for every floating comparison of the
/// sweep.
///
/// Values are rounded toward negative infinity, so `round(v)` is the
/// largest multiple of `10^-digits` not greater than `v`. Both sides of
/// a comparison must go through the same instance.
///
/// At most [`Precision::MAX_DIGITS`] digits are kept: beyond that the
/// scale no longer fits the mantissa of an `f64` and rounding turns
/// into noise (or overflows to infinity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    digits: u32,
    scale: f64,
}

impl Precision {
    pub const MAX_DIGITS: u32 = 15;

    /// Keep `digits` decimals, clamped to [`Precision::MAX_DIGITS`].
    pub fn new(digits: u32) -> Self {
        let digits = digits.min(Self::MAX_DIGITS);
        Precision {
            digits,
            scale: 10f64.powi(digits as i32),
        }
    }

    /// Number of decimal digits kept.
    #[inline]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Round `value` down to the configured number of decimals.
    #[inline]
    pub fn round(&self, value: f64) -> f64 {
        if value.is_infinite() {
            return value;
        }
        (value * self.scale).floor() / self.scale
    }

    /// Equality after rounding both sides.
    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        self.round(a) == self.round(b)
    }

    /// `lo <= value <= hi`, all three rounded.
    #[inline]
    pub fn within(&self, value: f64, lo: f64, hi: f64) -> bool {
        let value = self.round(value);
        self.round(lo) <= value && value <= self.round(hi)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::new(5)
    }
}
