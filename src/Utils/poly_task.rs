//! A task document names the polynomials to build and the options of the run:
//!
//! ```text
//! polynomials
//!   p: 3x^2, -5x, 2
//!   q: -3x^2, 5x, 1
//! options
//!   loglevel: info
//!   sum: true
//! ```
//! Every value in the `polynomials` section is one term in the text form accepted by
//! [`Term::parse`](crate::symbolic::term::Term::parse); the terms of a key are inserted in the
//! order they are written.
use crate::Utils::logger::LogLevel;
use crate::Utils::task_parser::{DocumentMap, parse_document};
use crate::error::PolyError;
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::term::Term;
use log::info;
use std::path::Path;
use tabled::Tabled;
use tabled::settings::Style;
use tabled::Table;

pub const POLYNOMIALS_SECTION: &str = "polynomials";
pub const OPTIONS_SECTION: &str = "options";

pub const DEMO_TASK: &str = "
// polynomials from the worked examples
polynomials
  p: 3x^2, -5x, 2
  q: -3x^2, 5x, 1
  r: -x^3, +7, x^-1
options
  loglevel: info
  sum: true
";

#[derive(Debug, Clone, PartialEq)]
pub struct PolyTask {
    /// named polynomials, sorted by name
    pub polynomials: Vec<(String, Polynomial)>,
    pub loglevel: LogLevel,
    /// also report the sum of all polynomials
    pub sum: bool,
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct PolyRow {
    name: String,
    polynomial: String,
    terms: usize,
    degree: String,
}

impl PolyRow {
    fn new(name: &str, polynomial: &Polynomial) -> Self {
        PolyRow {
            name: name.to_string(),
            polynomial: polynomial.to_string(),
            terms: polynomial.num_terms(),
            degree: polynomial
                .degree()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl PolyTask {
    pub fn from_document(input: &str) -> Result<Self, PolyError> {
        let document = parse_document(input)?;
        PolyTask::from_map(&document)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolyError> {
        let content = std::fs::read_to_string(path)?;
        PolyTask::from_document(&content)
    }

    fn from_map(document: &DocumentMap) -> Result<Self, PolyError> {
        if let Some(unknown) = document
            .keys()
            .find(|title| title.as_str() != POLYNOMIALS_SECTION && title.as_str() != OPTIONS_SECTION)
        {
            return Err(PolyError::Task(format!("unknown section '{}'", unknown)));
        }
        let section = document
            .get(POLYNOMIALS_SECTION)
            .ok_or_else(|| PolyError::Task(format!("section '{}' is missing", POLYNOMIALS_SECTION)))?;

        let mut polynomials = Vec::with_capacity(section.len());
        for (name, values) in section {
            let terms = values
                .iter()
                .map(|value| Term::parse(value))
                .collect::<Result<Vec<Term>, PolyError>>()?;
            polynomials.push((name.clone(), Polynomial::from_terms(terms)));
        }

        let mut task = PolyTask {
            polynomials,
            loglevel: LogLevel::default(),
            sum: true,
        };
        if let Some(options) = document.get(OPTIONS_SECTION) {
            for (key, values) in options {
                let value = single_value(key, values)?;
                match key.as_str() {
                    "loglevel" => task.loglevel = LogLevel::parse(value)?,
                    "sum" => {
                        task.sum = value.parse::<bool>().map_err(|_| {
                            PolyError::Task(format!("option 'sum' expects true or false, got '{}'", value))
                        })?
                    }
                    other => return Err(PolyError::Task(format!("unknown option '{}'", other))),
                }
            }
        }
        Ok(task)
    }

    /// sum of every polynomial of the task
    pub fn total(&self) -> Polynomial {
        let mut total = Polynomial::new();
        for (_, polynomial) in &self.polynomials {
            total += polynomial;
        }
        total
    }

    pub fn rows(&self) -> Vec<PolyRow> {
        let mut rows: Vec<PolyRow> = self
            .polynomials
            .iter()
            .map(|(name, polynomial)| PolyRow::new(name, polynomial))
            .collect();
        if self.sum {
            rows.push(PolyRow::new("sum", &self.total()));
        }
        rows
    }

    /// table of the task results, ready for printing
    pub fn report(&self) -> String {
        info!("building report for {} polynomials", self.polynomials.len());
        let mut table = Table::new(self.rows());
        table.with(Style::modern_rounded());
        table.to_string()
    }
}

fn single_value<'a>(key: &str, values: &'a [String]) -> Result<&'a str, PolyError> {
    match values {
        [value] => Ok(value.as_str()),
        _ => Err(PolyError::Task(format!(
            "option '{}' expects exactly one value, got {}",
            key,
            values.len()
        ))),
    }
}
