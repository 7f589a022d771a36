//! # Polynomial
//!
//! A single-variable polynomial kept as a list of [`Term`]s ordered from the highest exponent to
//! the lowest. After every public operation
//! 1) exponents are strictly decreasing, so no exponent appears twice;
//! 2) no stored term has a zero coefficient.
//!
//! Terms are inserted one at a time by [`Polynomial::add_term`]: a term whose exponent is already
//! present is added to the stored one, and when the coefficients cancel the stored term is removed.
//! Adding polynomials is nothing more than inserting the terms of one into the other.
//!
//! ```
//! use RustedPoly::symbolic::polynomial::Polynomial;
//! use RustedPoly::symbolic::term::Term;
//! let mut p = Polynomial::new();
//! p.add_term(Term::new(2, 0));
//! p.add_term(Term::new(3, 2));
//! p.add_term(Term::new(-5, 1));
//! assert_eq!(p.to_string(), "3x^2-5x+2");
//! p.add_term(Term::new(-3, 2));
//! assert_eq!(p.to_string(), "-5x+2");
//! ```

use crate::error::PolyError;
use crate::symbolic::term::{PLUS_SYMBOL, Term};
use crate::symbolic::term_parser::split_terms;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// the zero polynomial, it has no terms
    pub fn new() -> Self {
        Polynomial { terms: Vec::new() }
    }

    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.extend(terms);
        polynomial
    }

    /// Inserts `term` at its place in descending exponent order.
    ///
    /// The list is scanned pairwise `(current, next)`:
    /// - exponent above `current`: the term goes in front of `current`;
    /// - exponent equal to `current`: both are summed in place, a zero sum removes `current`;
    /// - exponent strictly between `current` and `next`: the term goes right after `current`.
    ///
    /// If the scan finds no place the term is compared with the last stored term: equal exponents
    /// are summed, a higher exponent (only possible for a one-term polynomial) goes in front,
    /// otherwise the term is appended as the new lowest-degree term.
    /// Terms with a zero coefficient are ignored.
    pub fn add_term(&mut self, term: Term) {
        if term.is_zero() {
            debug!("zero term {:?} ignored", term);
            return;
        }
        if self.terms.is_empty() {
            debug!("{:?} is the first term", term);
            self.terms.push(term);
            return;
        }
        for i in 0..self.terms.len() - 1 {
            let current = self.terms[i];
            let next = self.terms[i + 1];
            match term.cmp_exponent(&current) {
                Ordering::Greater => {
                    debug!("{:?} inserted before position {}", term, i);
                    self.terms.insert(i, term);
                    return;
                }
                Ordering::Equal => {
                    self.merge_at(i, &term);
                    return;
                }
                Ordering::Less if term.cmp_exponent(&next) == Ordering::Greater => {
                    debug!("{:?} inserted between positions {} and {}", term, i, i + 1);
                    self.terms.insert(i + 1, term);
                    return;
                }
                Ordering::Less => {}
            }
        }
        let last = self.terms.len() - 1;
        match term.cmp_exponent(&self.terms[last]) {
            Ordering::Equal => self.merge_at(last, &term),
            Ordering::Greater => {
                debug!("{:?} inserted before the only term", term);
                self.terms.insert(last, term);
            }
            Ordering::Less => {
                debug!("{:?} appended as the lowest term", term);
                self.terms.push(term);
            }
        }
    }

    // sums `term` into the stored term at `index`, the exponents are known to be equal
    fn merge_at(&mut self, index: usize, term: &Term) {
        match Term::sum_of(term, &self.terms[index]) {
            Some(sum) => {
                debug!("{:?} merged at position {} into {:?}", term, index, sum);
                self.terms[index] = sum;
            }
            None => {
                debug!("{:?} cancelled the term at position {}", term, index);
                self.terms.remove(index);
            }
        }
    }

    /// adds every term of `other`, in its order, to this polynomial
    pub fn add(&mut self, other: &Polynomial) {
        for term in other.iter() {
            self.add_term(term);
        }
    }

    /// Removes the term at `index` and returns it. Out of range gives `None` and leaves the
    /// polynomial untouched.
    pub fn remove(&mut self, index: usize) -> Option<Term> {
        if index < self.terms.len() {
            Some(self.terms.remove(index))
        } else {
            None
        }
    }

    /// copy of the term at `index`
    pub fn get_term(&self, index: usize) -> Option<Term> {
        self.terms.get(index).copied()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// copies of the terms from the highest exponent to the lowest
    pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().copied()
    }

    pub fn leading_term(&self) -> Option<Term> {
        self.terms.first().copied()
    }

    /// highest exponent, `None` for the zero polynomial
    pub fn degree(&self) -> Option<i64> {
        self.leading_term().map(|t| t.exponent())
    }

    /// value at integer `x`, `None` on overflow or if some term has a negative exponent
    pub fn eval(&self, x: i64) -> Option<i64> {
        self.terms
            .iter()
            .try_fold(0i64, |acc, t| acc.checked_add(t.eval(x)?))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let rendered: String = self.terms.iter().map(|t| t.to_string()).collect();
        // the first term never shows an explicit plus
        let rendered = rendered.strip_prefix(PLUS_SYMBOL).unwrap_or(rendered.as_str());
        write!(f, "{}", rendered)
    }
}

/// Parses a rendered polynomial such as `"3x^2-5x+2"`. All terms are parsed before any is
/// inserted, so a bad term leaves nothing half built.
impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let terms = split_terms(s)?
            .iter()
            .map(|chunk| chunk.parse::<Term>())
            .collect::<Result<Vec<Term>, PolyError>>()?;
        Ok(Polynomial::from_terms(terms))
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term);
        }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Polynomial::from_terms(iter)
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Polynomial::from_terms([term])
    }
}

impl std::ops::AddAssign<Term> for Polynomial {
    fn add_assign(&mut self, rhs: Term) {
        self.add_term(rhs);
    }
}

impl std::ops::AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        self.add(rhs);
    }
}

impl std::ops::Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        Polynomial::add(&mut self, &rhs);
        self
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial {
            terms: self.terms.into_iter().map(|t| -t).collect(),
        }
    }
}
