//! Filter clause compiler.
//!
//! A clause is exactly three whitespace-separated tokens:
//!
//! ```text
//! $opportunity < 1000000
//! $state $eq success
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{Comparator, FilterCondition, FilterValue, Stage},
    error::{CompileError, CompileResult},
};

/// A `$` marker followed by word characters, nothing else.
static FIELD_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$(\w+)$").expect("field reference pattern"));

/// Strips the marker off a field reference, `None` if it is not one.
pub(crate) fn field_name(reference: &str) -> Option<&str> {
    FIELD_REF
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a single filter clause.
pub fn parse_clause(clause: &str) -> CompileResult<FilterCondition> {
    let parts: Vec<&str> = clause.split_whitespace().collect();
    let [field, symbol, value] = parts.as_slice() else {
        return Err(CompileError::filter(
            clause,
            format!("expected 3 tokens, found {}", parts.len()),
        ));
    };

    let field = field_name(field)
        .ok_or_else(|| CompileError::filter(clause, format!("'{}' is not a field reference", field)))?;

    let comparator = Comparator::from_symbol(symbol)
        .ok_or_else(|| CompileError::filter(clause, format!("unknown comparator '{}'", symbol)))?;

    Ok(FilterCondition {
        field: field.to_string(),
        comparator,
        value: parse_value(value),
    })
}

/// Numeric when the token parses as a finite float, otherwise a string.
/// Single underscores between digits are accepted as separators (`1_000`).
pub fn parse_value(raw: &str) -> FilterValue {
    match strip_digit_separators(raw).parse::<f64>() {
        Ok(n) if n.is_finite() => FilterValue::Number(n),
        _ => FilterValue::String(raw.to_string()),
    }
}

fn strip_digit_separators(raw: &str) -> std::borrow::Cow<'_, str> {
    let chars: Vec<char> = raw.chars().collect();
    let separators_ok = chars.iter().enumerate().all(|(i, &c)| {
        c != '_'
            || (i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
    });
    if raw.contains('_') && separators_ok {
        raw.replace('_', "").into()
    } else {
        raw.into()
    }
}

/// Builds the match stage for a list of clauses, `None` when there are none.
pub fn compile_filters(filters: &[String]) -> CompileResult<Option<Stage>> {
    if filters.is_empty() {
        return Ok(None);
    }
    let conditions = filters
        .iter()
        .map(|clause| parse_clause(clause))
        .collect::<CompileResult<Vec<_>>>()?;
    Ok(Some(Stage::Match(conditions)))
}
