use std::fmt::Display;

use crate::{complex::Complex, error::Result, fraction::Fraction};

pub const FRACTION_HEADER: &str = "Fraction operations:";
pub const COMPLEX_HEADER: &str = "Complex number operations:";

/// The sample computations printed by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
  pub fractions: Vec<Line>,
  pub complexes: Vec<Line>,
}

/// One computation, e.g. `3/4 + 2/5` and its result `23/20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
  pub expression: String,
  pub result: String,
}

pub fn demo() -> Result<Report> {
  let fractions = fraction_report(&Fraction::new(3, 4)?, &Fraction::new(2, 5)?)?;
  let complexes = complex_report(&Complex::new(3.0, 4.0), &Complex::new(1.0, -2.0))?;
  Ok(Report {
    fractions,
    complexes,
  })
}

pub fn fraction_report(a: &Fraction, b: &Fraction) -> Result<Vec<Line>> {
  Ok(vec![
    line(a, "+", b, a.checked_add(b)?),
    line(a, "-", b, a.checked_sub(b)?),
    line(a, "*", b, a.checked_mul(b)?),
    line(a, "/", b, a.checked_div(b)?),
  ])
}

pub fn complex_report(a: &Complex, b: &Complex) -> Result<Vec<Line>> {
  Ok(vec![
    line(a, "+", b, *a + *b),
    line(a, "-", b, *a - *b),
    line(a, "*", b, *a * *b),
    line(a, "/", b, a.checked_div(b)?),
  ])
}

fn line<T: Display>(left: &T, operator: &str, right: &T, result: T) -> Line {
  let line = Line {
    expression: format!("{left} {operator} {right}"),
    result: result.to_string(),
  };
  log::debug!("Computed {line}");
  line
}

impl Display for Line {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} = {}", self.expression, self.result)
  }
}

impl Display for Report {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{FRACTION_HEADER}")?;
    for line in &self.fractions {
      writeln!(f, "{line}")?;
    }
    writeln!(f, "\n{COMPLEX_HEADER}")?;
    for line in &self.complexes {
      writeln!(f, "{line}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ArithmeticError;

  #[test]
  fn demo_matches_expected_output() {
    let expected = "\
Fraction operations:
3/4 + 2/5 = 23/20
3/4 - 2/5 = 7/20
3/4 * 2/5 = 3/10
3/4 / 2/5 = 15/8

Complex number operations:
3 + 4i + 1 - 2i = 4 + 2i
3 + 4i - 1 - 2i = 2 + 6i
3 + 4i * 1 - 2i = 11 - 2i
3 + 4i / 1 - 2i = -1 + 2i
";
    assert_eq!(demo().unwrap().to_string(), expected);
  }

  #[test]
  fn failing_division_aborts_report() {
    let zero = Fraction::new(0, 9).unwrap();
    assert!(matches!(
      fraction_report(&Fraction::from(1), &zero),
      Err(ArithmeticError::InvalidArgument(_))
    ));
    assert!(complex_report(&Complex::new(1.0, 1.0), &Complex::default()).is_err());
  }
}
