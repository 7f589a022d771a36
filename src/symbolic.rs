#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Term
/// a single monomial c*x^e with integer coefficient and exponent, its text form and the sum of like terms
///# Example
/// ```
/// use RustedPoly::symbolic::term::Term;
/// let t: Term = "-54x^-17".parse().unwrap();
/// assert_eq!(t, Term::new(-54, -17));
/// assert_eq!(t.to_string(), "-54x^-17");
/// assert_eq!(Term::new(3, 2).plus(&Term::new(-3, 2)), None);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod term;
/// nom parsers turning "-x^3" into a term and "3x^2-5x+2" into the texts of its terms
pub mod term_parser;
///____________________________________________________________________________________________________________________________
/// # Polynomial
/// ordered list of terms with merging of like exponents
///# Example
/// ```
/// use RustedPoly::symbolic::polynomial::Polynomial;
/// use RustedPoly::symbolic::term::Term;
/// let mut p: Polynomial = "3x^2-5x+2".parse().unwrap();
/// let q = Polynomial::from_terms([Term::new(5, 1), Term::new(-3, 2)]);
/// p += &q;
/// assert_eq!(p.to_string(), "2");
/// assert_eq!(p.remove(5), None);
/// ```
pub mod polynomial;

mod proptests;
