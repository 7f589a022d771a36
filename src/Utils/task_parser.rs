//! parse task document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
//! pairs key-vector of values. Values are kept as raw strings, so a term like "-54x^-17" is one value.
//!
//! polynomials
//!    p: 3x^2, -5x, 2
//!    q: -3x^2, 5x
//! options
//!    loglevel: debug
//!
use crate::error::PolyError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::BTreeMap;

pub type SectionMap = BTreeMap<String, Vec<String>>;
pub type DocumentMap = BTreeMap<String, SectionMap>;

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

/// Parses a title (word characters without spaces), trailing whitespace and newlines are dropped
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = identifier(input)?;
    Ok((input.trim_start(), result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

/// a single value - everything up to a comma, whitespace or semicolon
pub(crate) fn parse_value(input: &str) -> IResult<&str, String> {
    let mut value_parser = map(
        take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';')),
        String::from,
    );
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<String>> {
    // values are separated by commas, spaces around a comma are dropped
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list1(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<String>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim_start(), result))
}

/// Parses a section with a title and one or more key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, Vec<(String, Vec<String>)>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// raw sections in document order
pub(crate) fn parse_sections(input: &str) -> IResult<&str, Vec<(String, Vec<(String, Vec<String>)>)>> {
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    parser.parse(input)
}

/// Parses the whole document into title -> key -> values.
/// Comments are removed first; text left unparsed and repeated titles or keys are errors.
pub fn parse_document(input: &str) -> Result<DocumentMap, PolyError> {
    let filtered = filter_comments(input);
    let (remaining, sections) = match parse_sections(&filtered) {
        Ok(parsed) => parsed,
        Err(e) => return Err(PolyError::Task(format!("parsing error: {:?}", e))),
    };
    if !remaining.trim().is_empty() {
        return Err(PolyError::Task(format!(
            "failed to parse entire document. Remaining: '{}'",
            remaining
        )));
    }

    let mut document = DocumentMap::new();
    for (title, pairs) in sections {
        if document.contains_key(&title) {
            return Err(PolyError::Task(format!("section '{}' appears twice", title)));
        }
        let mut section = SectionMap::new();
        for (key, values) in pairs {
            if section.insert(key.clone(), values).is_some() {
                return Err(PolyError::Task(format!(
                    "key '{}' appears twice in section '{}'",
                    key, title
                )));
            }
        }
        document.insert(title, section);
    }
    Ok(document)
}
