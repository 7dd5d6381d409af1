//! Chemical formula parsing
//!
//! Converts a textual formula such as `Al2(SO4)3·18H2O` into element counts:
//!
//! ```text
//! Raw input
//!      |
//!   Normalizer -> separators unified, whitespace stripped, structure checked
//!      |
//!   Parser -> recursive descent over groups and hydrate segments
//!      |
//! ElementCounts
//! ```
//!
//! ```
//! let counts = ferrum_chemform::parse_formula("CuSO4·5H2O").unwrap();
//! assert_eq!(counts.get("H"), Some(10));
//! assert_eq!(counts.get("O"), Some(9));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod counts;
pub mod elements;
pub mod error;
pub mod normalize;
pub mod parser;

pub use config::ParseOptions;
pub use counts::ElementCounts;
pub use elements::{atomic_number, is_valid_symbol, symbol_for};
pub use error::{Error, ErrorKind, Result};
pub use parser::{FormulaParser, Scope};

/// Parse a formula with default options.
pub fn parse_formula(input: &str) -> Result<ElementCounts> {
    parse_formula_with(input, &ParseOptions::default())
}

/// Parse a formula with explicit options.
pub fn parse_formula_with(input: &str, options: &ParseOptions) -> Result<ElementCounts> {
    let result = FormulaParser::new(options.clone()).parse(input);
    match &result {
        Ok(counts) => tracing::debug!(formula = input, elements = counts.len(), "parsed formula"),
        Err(e) => tracing::debug!(formula = input, error = %e, "failed to parse formula"),
    }
    result
}
