//! Chemical formula parser - converts formula strings to element counts
//!
//! Recursive descent over a normalized formula. Each recursion enters a new [`Scope`]:
//!
//! ```text
//! Al2(SO4)3·18H2O
//! ^^ ^^^^^^ ^^^^^
//! |  |      hydrate segment: multiplier = scope_multiplier * 18
//! |  group: multiplier = scope_multiplier = multiplier * 3
//! element: count * multiplier
//! ```
//!
//! A hydrate segment consumes the rest of its scope, so a chain `a·2b·3c` recurses
//! `a -> b -> c`. Every link restarts from the enclosing group's `scope_multiplier`,
//! which keeps `2` from leaking into `c` while still applying an outer `(...)n` to all
//! of them.

use crate::config::ParseOptions;
use crate::counts::ElementCounts;
use crate::elements;
use crate::error::{Error, Result};
use crate::normalize::{self, HYDRATE_SEPARATOR};
use tracing::trace;

/// Multipliers in effect for one nesting level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scope {
    /// Product of every enclosing group and hydrate multiplier
    pub multiplier: u64,
    /// Product of enclosing group multipliers only; baseline for hydrate segments
    pub scope_multiplier: u64,
}

impl Scope {
    pub const ROOT: Scope = Scope {
        multiplier: 1,
        scope_multiplier: 1,
    };

    /// Scope for the contents of `(...)m`.
    pub fn enter_group(self, group_multiplier: u64) -> Result<Scope> {
        let cascaded = self
            .multiplier
            .checked_mul(group_multiplier)
            .ok_or(Error::Overflow)?;
        Ok(Scope {
            multiplier: cascaded,
            scope_multiplier: cascaded,
        })
    }

    /// Scope for the segment following `·h`.
    pub fn enter_hydrate(self, hydrate_multiplier: u64) -> Result<Scope> {
        let multiplier = self
            .scope_multiplier
            .checked_mul(hydrate_multiplier)
            .ok_or(Error::Overflow)?;
        Ok(Scope {
            multiplier,
            scope_multiplier: self.scope_multiplier,
        })
    }
}

/// Parser for chemical formulas
pub struct FormulaParser {
    options: ParseOptions,
    recursion_depth: usize,
}

impl FormulaParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            recursion_depth: 0,
        }
    }

    /// Parse a raw formula into element counts.
    pub fn parse(&mut self, input: &str) -> Result<ElementCounts> {
        let formula = normalize::normalize_and_validate(input)?;
        let mut counts = ElementCounts::new();
        self.parse_group(&formula, Scope::ROOT, &mut counts)?;
        Ok(counts)
    }

    /// Parse a nested scope one level deeper, restoring the depth on every exit path
    fn descend(
        &mut self,
        formula: &str,
        scope: Scope,
        counts: &mut ElementCounts,
    ) -> Result<()> {
        if self.recursion_depth >= self.options.max_depth {
            return Err(Error::TooDeeplyNested {
                max_depth: self.options.max_depth,
            });
        }
        self.recursion_depth += 1;
        let result = self.parse_group(formula, scope, counts);
        self.recursion_depth -= 1;
        result
    }

    /// Parse `formula` with `scope`, adding into `counts`.
    ///
    /// `formula` must already be normalized and structurally validated.
    pub(crate) fn parse_group(
        &mut self,
        formula: &str,
        scope: Scope,
        counts: &mut ElementCounts,
    ) -> Result<()> {
        let chars: Vec<char> = formula.chars().collect();
        let mut pos = 0;

        while pos < chars.len() {
            let c = chars[pos];

            if c.is_ascii_uppercase() {
                pos = self.parse_element(&chars, pos, scope, counts)?;
            } else if c == '(' {
                pos = self.parse_parenthesized(&chars, pos, scope, counts)?;
            } else if c == HYDRATE_SEPARATOR {
                // The hydrate segment owns the remainder of this scope.
                return self.parse_hydrate(&chars, pos, scope, counts);
            } else {
                return Err(Error::InvalidCharacter(c));
            }
        }

        Ok(())
    }

    /// Element symbol plus optional subscript, starting at an uppercase letter.
    fn parse_element(
        &mut self,
        chars: &[char],
        start: usize,
        scope: Scope,
        counts: &mut ElementCounts,
    ) -> Result<usize> {
        let mut pos = start + 1;
        while pos < chars.len() && chars[pos].is_ascii_lowercase() {
            pos += 1;
        }

        let symbol: String = chars[start..pos].iter().collect();
        if !elements::is_valid_symbol(&symbol) {
            return Err(Error::UnknownElement(symbol));
        }

        let (subscript, pos) = read_count(chars, pos, Error::InvalidSubscript)?;
        let atoms = subscript
            .checked_mul(scope.multiplier)
            .ok_or(Error::Overflow)?;
        trace!(symbol = %symbol, atoms, "element");
        counts.add(&symbol, atoms)?;

        Ok(pos)
    }

    /// `( ... )` with optional trailing multiplier, starting at the open paren.
    fn parse_parenthesized(
        &mut self,
        chars: &[char],
        open: usize,
        scope: Scope,
        counts: &mut ElementCounts,
    ) -> Result<usize> {
        let close = find_matching_paren(chars, open)?;
        let content = &chars[open + 1..close];

        if content.is_empty() {
            return Err(Error::EmptyParenthesis);
        }
        if content.last() == Some(&HYDRATE_SEPARATOR) {
            return Err(Error::EmptyHydrateSegment);
        }
        let content: String = content.iter().collect();
        let content = normalize::normalize_and_validate(&content)?;

        let (group_multiplier, pos) = read_count(chars, close + 1, Error::InvalidSubscript)?;
        let inner = scope.enter_group(group_multiplier)?;
        trace!(
            group = %content,
            multiplier = inner.multiplier,
            "entering group"
        );

        self.descend(&content, inner, counts)?;

        Ok(pos)
    }

    /// `·h rest`, starting at the separator. Consumes the rest of the scope.
    fn parse_hydrate(
        &mut self,
        chars: &[char],
        separator: usize,
        scope: Scope,
        counts: &mut ElementCounts,
    ) -> Result<()> {
        let (hydrate_multiplier, pos) =
            read_count(chars, separator + 1, Error::InvalidHydrateMultiplier)?;

        let rest = &chars[pos..];
        if rest.first().map_or(true, |c| *c == ')') {
            return Err(Error::EmptyHydrateSegment);
        }
        let rest: String = rest.iter().collect();
        let rest = normalize::normalize_and_validate(&rest)?;

        let inner = scope.enter_hydrate(hydrate_multiplier)?;
        trace!(
            segment = %rest,
            multiplier = inner.multiplier,
            "entering hydrate segment"
        );

        self.descend(&rest, inner, counts)?;

        Ok(())
    }
}

impl Default for FormulaParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Index of the `)` matching the `(` at `open`.
fn find_matching_paren(chars: &[char], open: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (offset, c) in chars[open..].iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + offset);
                }
            }
            _ => {}
        }
    }
    Err(Error::UnmatchedParenthesis)
}

/// Read an optional run of ASCII digits at `start`.
///
/// Returns the count (1 when absent) and the position after the run. Zero and values
/// that do not fit in a `u64` are rejected with `invalid`.
fn read_count(
    chars: &[char],
    start: usize,
    invalid: fn(String) -> Error,
) -> Result<(u64, usize)> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return Ok((1, start));
    }

    let digits: String = chars[start..end].iter().collect();
    match digits.parse::<u64>() {
        Ok(value) if value >= 1 => Ok((value, end)),
        _ => Err(invalid(digits)),
    }
}
