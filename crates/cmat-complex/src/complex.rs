//! Complex scalars with rounded storage and a cached polar form.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::iter::{Product, Sum};

use crate::error::{ComplexError, Result};
use crate::precision::{self, COMPARISON_DIGITS, SNAP_EPSILON};

/// Selects how products, quotients and powers are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComputeForm {
    /// Multiply magnitudes and add angles.
    ///
    /// Repeated powers do not compound cartesian rounding in this form.
    #[default]
    Polar,
    /// Expand `(a + bi)(c + di)` component-wise.
    Cartesian,
}

/// An immutable complex number.
///
/// Both components are rounded to [`precision::STORAGE_DIGITS`] significant
/// digits on construction and the polar pair `(r, theta)` is recomputed from
/// the rounded cartesian values, so the two forms never disagree.
///
/// `PartialEq` compares at [`COMPARISON_DIGITS`] significant digits; use
/// [`Complex::equals`] to choose another precision.
#[derive(Clone, Copy, Debug)]
pub struct Complex {
    re: f64,
    im: f64,
    r: f64,
    theta: f64,
}

impl Complex {
    /// `0`.
    pub const ZERO: Self = Self {
        re: 0.0,
        im: 0.0,
        r: 0.0,
        theta: 0.0,
    };

    /// `1`.
    pub const ONE: Self = Self {
        re: 1.0,
        im: 0.0,
        r: 1.0,
        theta: 0.0,
    };

    /// `-1`.
    pub const MINUS_ONE: Self = Self {
        re: -1.0,
        im: 0.0,
        r: 1.0,
        theta: PI,
    };

    /// The imaginary unit.
    pub const I: Self = Self {
        re: 0.0,
        im: 1.0,
        r: 1.0,
        theta: FRAC_PI_2,
    };

    /// `-i`.
    pub const MINUS_I: Self = Self {
        re: 0.0,
        im: -1.0,
        r: 1.0,
        theta: -FRAC_PI_2,
    };

    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub fn from_cartesian(real: f64, imaginary: f64) -> Self {
        let re = precision::round_storage(real);
        let im = precision::round_storage(imaginary);
        Self {
            re,
            im,
            r: re.hypot(im),
            theta: im.atan2(re),
        }
    }

    /// Creates a complex number from its magnitude and angle.
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let c = precision::round_storage(theta.cos());
        let s = precision::round_storage(theta.sin());
        Self::from_cartesian(r * c, r * s)
    }

    /// Creates a real number.
    #[must_use]
    pub fn from_real(value: f64) -> Self {
        Self::from_cartesian(value, 0.0)
    }

    /// Returns the real part.
    #[must_use]
    pub fn real(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn imaginary(&self) -> f64 {
        self.im
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the angle in `(-π, π]`.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns `(real, imaginary)`.
    #[must_use]
    pub fn cartesian(&self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Returns `(r, theta)`.
    #[must_use]
    pub fn polar(&self) -> (f64, f64) {
        (self.r, self.theta)
    }

    /// Returns `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_cartesian(self.re + other.re, self.im + other.im)
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self::from_cartesian(self.re - other.re, self.im - other.im)
    }

    /// Returns `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self, form: ComputeForm) -> Self {
        match form {
            ComputeForm::Polar => Self::from_polar(self.r * other.r, self.theta + other.theta),
            ComputeForm::Cartesian => Self::from_cartesian(
                self.re * other.re - self.im * other.im,
                self.re * other.im + self.im * other.re,
            ),
        }
    }

    /// Returns `self / other`.
    ///
    /// Dividing by an exact zero follows IEEE semantics and yields non-finite
    /// components.
    #[must_use]
    pub fn divide(&self, other: &Self, form: ComputeForm) -> Self {
        match form {
            ComputeForm::Polar => Self::from_polar(self.r / other.r, self.theta - other.theta),
            ComputeForm::Cartesian => {
                let denominator = other.re * other.re + other.im * other.im;
                Self::from_cartesian(
                    (self.re * other.re + self.im * other.im) / denominator,
                    (self.im * other.re - self.re * other.im) / denominator,
                )
            }
        }
    }

    /// Returns the multiplicative inverse.
    #[must_use]
    pub fn reciprocal(&self, form: ComputeForm) -> Self {
        match form {
            ComputeForm::Polar => Self::from_polar(1.0 / self.r, -self.theta),
            ComputeForm::Cartesian => {
                let denominator = self.re * self.re + self.im * self.im;
                Self::from_cartesian(self.re / denominator, -self.im / denominator)
            }
        }
    }

    /// Raises `self` to an integer power.
    ///
    /// Negative exponents compute the reciprocal of the positive power.
    #[must_use]
    pub fn powi(&self, n: i32, form: ComputeForm) -> Self {
        match form {
            ComputeForm::Polar => Self::from_polar(self.r.powi(n), f64::from(n) * self.theta),
            ComputeForm::Cartesian => {
                let mut result = Self::ONE;
                let mut base = *self;
                let mut exponent = n.unsigned_abs();
                while exponent > 0 {
                    if exponent & 1 == 1 {
                        result = result.multiply(&base, ComputeForm::Cartesian);
                    }
                    exponent >>= 1;
                    if exponent > 0 {
                        base = base.multiply(&base, ComputeForm::Cartesian);
                    }
                }
                if n < 0 {
                    result.reciprocal(ComputeForm::Cartesian)
                } else {
                    result
                }
            }
        }
    }

    /// Raises `self` to the power `n`, which must be an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::NonIntegerExponent`] if `n` has a fractional
    /// part, is not finite, or does not fit in an `i32`.
    pub fn power(&self, n: f64, form: ComputeForm) -> Result<Self> {
        if !n.is_finite() || n.fract() != 0.0 || n.abs() > f64::from(i32::MAX) {
            return Err(ComplexError::NonIntegerExponent(n));
        }
        #[allow(clippy::cast_possible_truncation)]
        let exponent = n as i32;
        Ok(self.powi(exponent, form))
    }

    /// Returns the `n` distinct `n`-th roots of `self`.
    ///
    /// Root `k` has angle `(theta + 2πk) / n`, so the first one is the
    /// principal root.
    #[must_use]
    pub fn roots(&self, n: usize) -> Vec<Self> {
        if n == 0 {
            return Vec::new();
        }
        #[allow(clippy::cast_precision_loss)]
        let nf = n as f64;
        let magnitude = self.r.powf(1.0 / nf);
        (0..n)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let offset = 2.0 * PI * k as f64;
                Self::from_polar(magnitude, (self.theta + offset) / nf)
            })
            .collect()
    }

    /// Returns the principal square root.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Self::from_polar(self.r.sqrt(), self.theta / 2.0)
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from_cartesian(self.re, -self.im)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.r
    }

    /// Compares both components rounded to `digits` significant digits.
    #[must_use]
    pub fn equals(&self, other: &Self, digits: usize) -> bool {
        precision::round_significant(self.re, digits)
            == precision::round_significant(other.re, digits)
            && precision::round_significant(self.im, digits)
                == precision::round_significant(other.im, digits)
    }

    /// Returns true if the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// Returns true if the real part is zero.
    #[must_use]
    pub fn is_pure_imaginary(&self) -> bool {
        self.re == 0.0
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.r == 0.0
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Rounds both components to `digits` significant digits.
    #[must_use]
    pub fn rounded(&self, digits: usize) -> Self {
        Self::from_cartesian(
            precision::round_with_snap(self.re, digits, SNAP_EPSILON),
            precision::round_with_snap(self.im, digits, SNAP_EPSILON),
        )
    }

    /// Rounds both components to `decimals` places after the decimal point.
    #[must_use]
    pub fn fixed(&self, decimals: u32) -> Self {
        Self::from_cartesian(
            precision::round_decimals(self.re, decimals),
            precision::round_decimals(self.im, decimals),
        )
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, COMPARISON_DIGITS)
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::from_real(value)
    }
}

impl From<i32> for Complex {
    fn from(value: i32) -> Self {
        Self::from_real(f64::from(value))
    }
}

impl From<i64> for Complex {
    fn from(value: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self::from_real(value as f64)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::from_cartesian(re, im)
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::add(&self, &rhs)
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::subtract(&self, &rhs)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::multiply(&self, &rhs, ComputeForm::Polar)
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_cartesian(self.re * rhs, self.im * rhs)
    }
}

impl std::ops::Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Complex::divide(&self, &rhs, ComputeForm::Polar)
    }
}

impl std::ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_cartesian(-self.re, -self.im)
    }
}

impl std::ops::AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = Complex::add(self, &rhs);
    }
}

impl std::ops::SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Complex::subtract(self, &rhs);
    }
}

impl std::ops::MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Complex::multiply(self, &rhs, ComputeForm::Polar);
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, c| acc * c)
    }
}

impl num_traits::Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl num_traits::One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            return write!(f, "{}", self.re);
        }

        let magnitude = self.im.abs();
        let imaginary = if magnitude == 1.0 {
            "i".to_string()
        } else {
            format!("{magnitude}i")
        };

        if self.is_pure_imaginary() {
            let sign = if self.im < 0.0 { "-" } else { "" };
            write!(f, "{sign}{imaginary}")
        } else {
            let sign = if self.im < 0.0 { '-' } else { '+' };
            write!(f, "{} {sign} {imaginary}", self.re)
        }
    }
}
