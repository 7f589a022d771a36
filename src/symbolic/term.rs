//! # Term
//!
//! A single monomial `c*x^e` with integer coefficient and integer (possibly negative) exponent.
//! Terms are plain `Copy` values: every accessor of a [`Polynomial`](crate::symbolic::polynomial::Polynomial)
//! hands out an independent copy, so a stored term can never be changed from outside.
//!
//! Text form is `[sign]coefficient['x'['^'exponent]]`, for example `+5`, `+x`, `-x^3`, `-54x^-17`.

use crate::error::PolyError;
use crate::symbolic::term_parser::parse_term;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const VARIABLE_SYMBOL: char = 'x';
pub const EXPONENT_SYMBOL: char = '^';
pub const PLUS_SYMBOL: char = '+';
pub const MINUS_SYMBOL: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: i64,
    exponent: i64,
}

/// the unit monomial `x`
impl Default for Term {
    fn default() -> Self {
        Term::new(1, 1)
    }
}

impl Term {
    pub fn new(coefficient: i64, exponent: i64) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    /// constant term `c*x^0`
    pub fn constant(coefficient: i64) -> Self {
        Term::new(coefficient, 0)
    }

    /// parse a term from text, see [`parse_term`] for the grammar
    pub fn parse(text: &str) -> Result<Self, PolyError> {
        parse_term(text)
    }

    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// copy of this term with another coefficient
    pub fn with_coefficient(&self, coefficient: i64) -> Self {
        Term::new(coefficient, self.exponent)
    }

    /// copy of this term with another exponent
    pub fn with_exponent(&self, exponent: i64) -> Self {
        Term::new(self.coefficient, exponent)
    }

    /// Orders two terms by exponent only, the coefficient plays no role.
    /// `Term` does not implement `Ord` because this ordering disagrees with `==`.
    pub fn cmp_exponent(&self, other: &Term) -> Ordering {
        self.exponent.cmp(&other.exponent)
    }

    pub fn plus(&self, other: &Term) -> Option<Term> {
        Term::sum_of(self, other)
    }

    /// Sum of two terms with the same exponent.
    /// Returns `None` when the exponents differ or when the coefficients cancel out,
    /// a zero-coefficient term is never produced. Coefficients wrap around on overflow,
    /// so `i64::MAX + 1` gives `i64::MIN`.
    pub fn sum_of(a: &Term, b: &Term) -> Option<Term> {
        if a.exponent != b.exponent {
            return None;
        }
        let coefficient = a.coefficient.wrapping_add(b.coefficient);
        if coefficient == 0 {
            None
        } else {
            Some(Term::new(coefficient, a.exponent))
        }
    }

    /// value of the term at integer `x`, `None` on overflow or a negative exponent
    pub fn eval(&self, x: i64) -> Option<i64> {
        if self.exponent < 0 {
            return None;
        }
        // powers of 0, 1 and -1 never overflow, whatever the exponent
        let power = match x {
            0 if self.exponent == 0 => 1,
            0 => 0,
            1 => 1,
            -1 if self.exponent % 2 == 0 => 1,
            -1 => -1,
            _ => x.checked_pow(u32::try_from(self.exponent).ok()?)?,
        };
        power.checked_mul(self.coefficient)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // zero terms contribute nothing to a polynomial
        if self.coefficient == 0 {
            return Ok(());
        }
        match self.coefficient {
            1 if self.exponent != 0 => write!(f, "{}", PLUS_SYMBOL)?,
            -1 if self.exponent != 0 => write!(f, "{}", MINUS_SYMBOL)?,
            c if c > 0 => write!(f, "{}{}", PLUS_SYMBOL, c)?,
            c => write!(f, "{}", c)?,
        }
        match self.exponent {
            0 => Ok(()),
            1 => write!(f, "{}", VARIABLE_SYMBOL),
            e => write!(f, "{}{}{}", VARIABLE_SYMBOL, EXPONENT_SYMBOL, e),
        }
    }
}

impl FromStr for Term {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_term(s)
    }
}

impl From<i64> for Term {
    fn from(coefficient: i64) -> Self {
        Term::constant(coefficient)
    }
}

/// wraps like the coefficient sum: `-i64::MIN` stays `i64::MIN`
impl std::ops::Neg for Term {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Term::new(self.coefficient.wrapping_neg(), self.exponent)
    }
}
