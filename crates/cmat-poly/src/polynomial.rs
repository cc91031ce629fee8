//! Sparse univariate polynomials with complex coefficients.
//!
//! Terms are kept in a map from power to coefficient. Zero coefficients are
//! never stored, so the zero polynomial has no terms and no degree.

use std::collections::BTreeMap;
use std::fmt;

use cmat_complex::{Complex, ComputeForm};

use crate::error::{PolyError, Result};

/// A sparse univariate polynomial over the complex numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    /// Non-zero coefficients keyed by power.
    terms: BTreeMap<usize, Complex>,
}

impl Polynomial {
    /// Creates a polynomial from `(power, coefficient)` pairs.
    ///
    /// Repeated powers are summed and zero coefficients are dropped.
    #[must_use]
    pub fn from_terms<I, C>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, C)>,
        C: Into<Complex>,
    {
        let mut poly = Self::zero();
        for (power, coefficient) in terms {
            poly.accumulate(power, coefficient.into());
        }
        poly
    }

    /// Creates a polynomial from coefficients in ascending powers.
    ///
    /// `[c0, c1, c2]` is `c2 x^2 + c1 x + c0`.
    #[must_use]
    pub fn from_coefficients<I, C>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Complex>,
    {
        Self::from_terms(coefficients.into_iter().enumerate())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: impl Into<Complex>) -> Self {
        Self::from_terms([(0, c.into())])
    }

    /// Creates the monomial `c x^power`.
    #[must_use]
    pub fn monomial(c: impl Into<Complex>, power: usize) -> Self {
        Self::from_terms([(power, c.into())])
    }

    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(Complex::ONE, 1)
    }

    /// Creates the monic linear factor `x - root`.
    #[must_use]
    pub fn linear_monic(root: impl Into<Complex>) -> Self {
        let root = root.into();
        Self::from_terms([(1, Complex::ONE), (0, -root)])
    }

    /// Adds `c` to the coefficient of `x^power`, dropping it if it cancels.
    fn accumulate(&mut self, power: usize, c: Complex) {
        let sum = match self.terms.get(&power) {
            Some(existing) => existing.add(&c),
            None => c,
        };
        if sum.is_zero() {
            self.terms.remove(&power);
        } else {
            self.terms.insert(power, sum);
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the lowest power with a non-zero coefficient.
    #[must_use]
    pub fn lowest_power(&self) -> Option<usize> {
        self.terms.keys().next().copied()
    }

    /// Returns the coefficient of the highest power.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<Complex> {
        self.terms.values().next_back().copied()
    }

    /// Returns the coefficient of `x^power` (zero when absent).
    #[must_use]
    pub fn coefficient(&self, power: usize) -> Complex {
        self.terms.get(&power).copied().unwrap_or(Complex::ZERO)
    }

    /// Returns the non-zero terms keyed by power.
    #[must_use]
    pub fn terms(&self) -> &BTreeMap<usize, Complex> {
        &self.terms
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (&power, &c) in &other.terms {
            result.accumulate(power, c);
        }
        result
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(&p, &c)| (p, -c)).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self, form: ComputeForm) -> Self {
        let mut result = Self::zero();
        for (&p1, c1) in &self.terms {
            for (&p2, c2) in &other.terms {
                result.accumulate(p1 + p2, c1.multiply(c2, form));
            }
        }
        result
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: impl Into<Complex>) -> Self {
        let mut result = self.clone();
        result.accumulate(0, c.into());
        result
    }

    /// Subtracts a scalar from the constant term.
    #[must_use]
    pub fn sub_scalar(&self, c: impl Into<Complex>) -> Self {
        self.add_scalar(-c.into())
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, c: impl Into<Complex>, form: ComputeForm) -> Self {
        let c = c.into();
        let mut result = Self::zero();
        for (&power, coefficient) in &self.terms {
            result.accumulate(power, coefficient.multiply(&c, form));
        }
        result
    }

    /// Divides every coefficient by a scalar.
    #[must_use]
    pub fn div_scalar(&self, c: impl Into<Complex>, form: ComputeForm) -> Self {
        self.mul_scalar(c.into().reciprocal(form), form)
    }

    /// Multiplies by `x^shift`.
    #[must_use]
    pub fn shift(&self, shift: usize) -> Self {
        Self {
            terms: self.terms.iter().map(|(&p, &c)| (p + shift, c)).collect(),
        }
    }

    /// Returns the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .filter(|&(&power, _)| power > 0)
                .map(|(&power, &c)| {
                    #[allow(clippy::cast_precision_loss)]
                    let factor = power as f64;
                    (power - 1, c * factor)
                }),
        )
    }

    /// Polynomial long division, returning the quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self, form: ComputeForm) -> Result<(Self, Self)> {
        let (Some(divisor_degree), Some(divisor_lead)) =
            (divisor.degree(), divisor.leading_coefficient())
        else {
            return Err(PolyError::DivisionByZero);
        };

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while let Some(degree) = remainder.degree() {
            if degree < divisor_degree {
                break;
            }
            let shift = degree - divisor_degree;
            let ratio = remainder.coefficient(degree).divide(&divisor_lead, form);
            remainder = remainder.sub(&divisor.mul_scalar(ratio, form).shift(shift));
            // The leading term cancels exactly; drop any rounding residue.
            remainder.terms.remove(&degree);
            quotient.accumulate(shift, ratio);
        }

        Ok((quotient, remainder))
    }

    /// Polynomial long division, returning the quotient only.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] when `divisor` is zero.
    pub fn div(&self, divisor: &Self, form: ComputeForm) -> Result<Self> {
        self.div_rem(divisor, form).map(|(q, _)| q)
    }

    /// Divides by the monic factor `x - root` with synthetic division.
    ///
    /// The remainder is discarded.
    #[must_use]
    pub fn deflate(&self, root: &Complex, form: ComputeForm) -> Self {
        let Some(degree) = self.degree() else {
            return Self::zero();
        };
        let mut quotient = Self::zero();
        let mut carry = Complex::ZERO;
        for power in (1..=degree).rev() {
            carry = self.coefficient(power).add(&carry.multiply(root, form));
            quotient.accumulate(power - 1, carry);
        }
        quotient
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    ///
    /// Gaps between stored powers are bridged with a single power of `x`.
    #[must_use]
    pub fn substitute(&self, x: &Complex, form: ComputeForm) -> Complex {
        let mut terms = self.terms.iter().rev();
        let Some((&top, &leading)) = terms.next() else {
            return Complex::ZERO;
        };

        let mut acc = leading;
        let mut previous = top;
        for (&power, c) in terms {
            acc = acc.multiply(&power_of(x, previous - power, form), form).add(c);
            previous = power;
        }
        acc.multiply(&power_of(x, previous, form), form)
    }
}

fn power_of(x: &Complex, exponent: usize, form: ComputeForm) -> Complex {
    x.powi(i32::try_from(exponent).unwrap_or(i32::MAX), form)
}

fn is_compound(c: &Complex) -> bool {
    !c.is_real() && !c.is_pure_imaginary()
}

fn write_variable(f: &mut fmt::Formatter<'_>, power: usize) -> fmt::Result {
    match power {
        0 => Ok(()),
        1 => write!(f, "x"),
        _ => write!(f, "x^{power}"),
    }
}

impl fmt::Display for Polynomial {
    /// Renders terms in descending powers, e.g. `x^2 + (1 + 2i)x - 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (index, (&power, c)) in self.terms.iter().rev().enumerate() {
            let first = index == 0;
            let negative = (c.is_real() && c.real() < 0.0)
                || (c.is_pure_imaginary() && c.imaginary() < 0.0);
            let magnitude = if negative { -*c } else { *c };

            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            if magnitude == Complex::ONE && power > 0 {
                // Unit coefficients are implied.
            } else if is_compound(&magnitude) && power > 0 {
                write!(f, "({magnitude})")?;
            } else {
                write!(f, "{magnitude}")?;
            }
            write_variable(f, power)?;
        }
        Ok(())
    }
}
