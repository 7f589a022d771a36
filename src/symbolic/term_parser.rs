//! nom parsers for the text form of terms and polynomials
//!
//! term grammar:            `[sign]coefficient['x'['^'exponent]]`
//!   "+5"      -> ( 5, 0)        "-7"      -> (-7, 0)
//!   "+x"      -> ( 1, 1)        "-x^3"    -> (-1, 3)
//!   "x"       -> ( 1, 1)        "-54x^-17"-> (-54, -17)
//!   ""        -> ( 0, 0)
//! polynomial grammar: a run of terms where every term but the first starts with a sign,
//! whitespace is only allowed around the signs
//! "3x^2-5x+2" -> ["3x^2", "-5x", "+2"]   "3x^2 - 5x" -> ["3x^2", "-5x"]   "3x^2 5" -> error
use crate::error::PolyError;
use crate::symbolic::term::{EXPONENT_SYMBOL, MINUS_SYMBOL, PLUS_SYMBOL, Term, VARIABLE_SYMBOL};
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value, verify},
    multi::many0,
    sequence::{pair, preceded},
};

fn sign(input: &str) -> IResult<&str, char> {
    one_of("+-").parse(input)
}

/// optional sign followed by digits, "+12" and "-3" included
pub(crate) fn signed_integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(sign), digit1)), |s: &str| s.parse::<i64>()).parse(input)
}

/// coefficient standing in front of the variable: a lone sign means magnitude 1
fn variable_coefficient(input: &str) -> IResult<&str, i64> {
    alt((
        signed_integer,
        value(-1, char(MINUS_SYMBOL)),
        value(1, opt(char(PLUS_SYMBOL))),
    ))
    .parse(input)
}

fn variable_term(input: &str) -> IResult<&str, Term> {
    let (input, coefficient) = variable_coefficient(input)?;
    let (input, _) = char(VARIABLE_SYMBOL).parse(input)?;
    let (input, exponent) = opt(preceded(char(EXPONENT_SYMBOL), signed_integer)).parse(input)?;
    Ok((input, Term::new(coefficient, exponent.unwrap_or(1))))
}

fn constant_term(input: &str) -> IResult<&str, Term> {
    map(signed_integer, Term::constant).parse(input)
}

pub(crate) fn term(input: &str) -> IResult<&str, Term> {
    alt((variable_term, constant_term)).parse(input)
}

/// Parses the text form of one term.
/// Empty (or blank) text is the zero term `(0, 0)`; anything that is not a complete term,
/// including trailing characters and numbers that do not fit into `i64`, is an error.
pub fn parse_term(text: &str) -> Result<Term, PolyError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Term::new(0, 0));
    }
    match all_consuming(term).parse(trimmed) {
        Ok((_, parsed)) => Ok(parsed),
        Err(e) => Err(PolyError::TermParse {
            input: text.to_string(),
            reason: describe_error(e),
        }),
    }
}

/// unsigned body of a term ("3x^2", "x", "7"), may be empty
fn term_body(input: &str) -> IResult<&str, &str> {
    recognize((
        digit0,
        opt(preceded(
            char(VARIABLE_SYMBOL),
            opt((char(EXPONENT_SYMBOL), opt(sign), digit1)),
        )),
    ))
    .parse(input)
}

fn chunk_text(sign: Option<char>, body: &str) -> String {
    let mut chunk = String::with_capacity(body.len() + 1);
    if let Some(sign) = sign {
        chunk.push(sign);
    }
    chunk.push_str(body);
    chunk
}

/// first term of a polynomial, its sign is optional
fn leading_chunk(input: &str) -> IResult<&str, String> {
    verify(
        map(
            (multispace0, opt(sign), multispace0, term_body),
            |(_, sign, _, body)| chunk_text(sign, body),
        ),
        |chunk: &str| !chunk.is_empty(),
    )
    .parse(input)
}

/// every later term must start with a sign, whitespace is allowed around the sign only
fn signed_chunk(input: &str) -> IResult<&str, String> {
    map(
        (multispace0, sign, multispace0, term_body),
        |(_, sign, _, body)| chunk_text(Some(sign), body),
    )
    .parse(input)
}

/// Splits polynomial text into the texts of its terms.
/// `"3x^2 - 5x + 2"` gives `["3x^2", "-5x", "+2"]`; whitespace may stand around signs but never
/// inside a term or between two terms without a sign, so `"3x^2 5"` is an error.
pub fn split_terms(text: &str) -> Result<Vec<String>, PolyError> {
    match all_consuming((opt(leading_chunk), many0(signed_chunk), multispace0)).parse(text) {
        Ok((_, (first, rest, _))) => Ok(first.into_iter().chain(rest).collect()),
        Err(e) => Err(PolyError::PolynomialParse {
            input: text.to_string(),
            reason: describe_error(e),
        }),
    }
}

fn describe_error(e: nom::Err<nom::error::Error<&str>>) -> String {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) if e.input.is_empty() => {
            format!("unexpected end of input ({:?})", e.code)
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            format!("unexpected '{}' ({:?})", e.input, e.code)
        }
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
    }
}
