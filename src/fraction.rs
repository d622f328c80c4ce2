use std::fmt;

use num::Integer;

use crate::error::{ArithmeticError, Result};

/// A rational number kept in lowest terms.
///
/// The denominator is always positive and the sign lives in the numerator,
/// so two fractions are equal exactly when their fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

impl Fraction {
  pub fn new(numerator: i64, denominator: i64) -> Result<Fraction> {
    Self::reduced(numerator.into(), denominator.into())
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }
  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  pub fn checked_add(&self, other: &Fraction) -> Result<Fraction> {
    let (a, b, c, d) = self.widen(other);
    Self::reduced(a * d + c * b, b * d)
  }

  pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction> {
    let (a, b, c, d) = self.widen(other);
    Self::reduced(a * d - c * b, b * d)
  }

  pub fn checked_mul(&self, other: &Fraction) -> Result<Fraction> {
    let (a, b, c, d) = self.widen(other);
    Self::reduced(a * c, b * d)
  }

  pub fn checked_div(&self, other: &Fraction) -> Result<Fraction> {
    if other.numerator() == 0 {
      return Err(ArithmeticError::InvalidArgument(
        "Division by zero.".to_string(),
      ));
    }
    let (a, b, c, d) = self.widen(other);
    Self::reduced(a * d, b * c)
  }

  // Products of two i64 always fit in i128, and so do sums of two such products.
  fn widen(&self, other: &Fraction) -> (i128, i128, i128, i128) {
    (
      self.numerator().into(),
      self.denominator().into(),
      other.numerator().into(),
      other.denominator().into(),
    )
  }

  fn reduced(numerator: i128, denominator: i128) -> Result<Fraction> {
    if denominator == 0 {
      return Err(ArithmeticError::InvalidArgument(
        "Denominator cannot be zero.".to_string(),
      ));
    }
    if numerator == 0 {
      return Ok(Fraction::default());
    }
    let gcd = numerator.gcd(&denominator);
    let (mut numer, mut denom) = (numerator / gcd, denominator / gcd);
    if denom < 0 {
      numer = -numer;
      denom = -denom;
    }
    log::debug!("Reduced {numerator}/{denominator} to {numer}/{denom}");
    match (i64::try_from(numer), i64::try_from(denom)) {
      (Ok(numerator), Ok(denominator)) => Ok(Fraction {
        numerator,
        denominator,
      }),
      _ => Err(ArithmeticError::Overflow(format!(
        "{numer}/{denom} does not fit in a 64 bit fraction"
      ))),
    }
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Fraction {
      numerator: 0,
      denominator: 1,
    }
  }
}

impl From<i64> for Fraction {
  fn from(value: i64) -> Self {
    Fraction {
      numerator: value,
      denominator: 1,
    }
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}
