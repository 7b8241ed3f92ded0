//! Pipeline assembler.
//!
//! Stages are always emitted in the order
//!
//! ```text
//! $match? -> $group? -> $sort? -> $project?
//! ```
//!
//! `$sort` exists exactly when `$group` does. `$project` needs both a group
//! field and a calculate expression.
//!
//! Two inputs are dropped by policy rather than compiled: group fields past
//! the first, and a calculate expression without a group field. Both are
//! logged as warnings, or rejected when [`CompileOptions::strict`] is set.

use tracing::{debug, warn};

use crate::{
    ast::{Accumulator, GroupKey, Pipeline, Projection, QueryDsl, SortDirection, Stage},
    error::{CompileError, CompileResult},
    filter::{compile_filters, field_name},
    lexer::Lexer,
    parser::{ParseError, parse_expression},
};

/// Name of the count accumulator, also usable as `$count` in calculate.
pub const COUNT_FIELD: &str = "count";

/// Output field holding the compiled calculate expression.
pub const CALCULATE_FIELD: &str = "calculate";

/// Internal group key field.
pub const GROUP_ID: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Group field that is bucketed by day instead of grouped raw
    pub date_field: String,
    /// `$dateToString` pattern for the date bucket
    pub date_format: String,
    /// Reject input the default policy would drop
    pub strict: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            date_field: "date".to_string(),
            date_format: "%d.%m.%Y".to_string(),
            strict: false,
        }
    }
}

/// Query compiler configured with [`CompileOptions`].
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Compiler { options }
    }

    /// Decodes a JSON query document and compiles it.
    pub fn compile_str(&self, input: &str) -> CompileResult<Pipeline> {
        let query: QueryDsl = serde_json::from_str(input)?;
        self.compile(&query)
    }

    /// Compiles a decoded query into its stage sequence.
    pub fn compile(&self, query: &QueryDsl) -> CompileResult<Pipeline> {
        let mut stages = Vec::new();

        if let Some(stage) = compile_filters(query.filters.as_deref().unwrap_or_default())? {
            stages.push(stage);
        }

        let group_field = self.group_field(query)?;
        let calculate = query.calculate.as_deref();

        if let Some(field) = group_field {
            let group = self.compile_group(field, calculate)?;
            stages.push(group);
            stages.push(Stage::Sort {
                key: GROUP_ID.to_string(),
                direction: SortDirection::Ascending,
            });
        }

        match (group_field, calculate) {
            (Some(field), Some(calculate)) => stages.push(compile_project(field, calculate)?),
            (None, Some(calculate)) => {
                if self.options.strict {
                    return Err(CompileError::UnsupportedQuery(
                        "calculate requires a group field".to_string(),
                    ));
                }
                warn!(calculate, "calculate ignored: no group field");
            }
            _ => {}
        }

        for stage in &stages {
            debug!(stage = %crate::output::stage_to_json(stage), "compiled stage");
        }

        Ok(Pipeline { stages })
    }

    /// First group field without its marker, `None` when grouping is off.
    fn group_field<'q>(&self, query: &'q QueryDsl) -> CompileResult<Option<&'q str>> {
        let Some((first, rest)) = query.group.as_deref().and_then(<[String]>::split_first) else {
            return Ok(None);
        };

        if !rest.is_empty() {
            if self.options.strict {
                return Err(CompileError::UnsupportedQuery(format!(
                    "grouping by {} fields, only one is supported",
                    rest.len() + 1
                )));
            }
            warn!(ignored = ?rest, "only the first group field is used");
        }

        let reference = first.trim();
        let field = field_name(reference).ok_or_else(|| {
            CompileError::MalformedDsl(format!(
                "group field '{}' is not a field reference",
                reference
            ))
        })?;

        if field == GROUP_ID || field == CALCULATE_FIELD {
            return Err(CompileError::MalformedDsl(format!(
                "group field '{}' collides with a reserved output field",
                reference
            )));
        }
        Ok(Some(field))
    }

    /// Group stage: `_id`, `count`, then one sum per field of `calculate`.
    pub fn compile_group(&self, field: &str, calculate: Option<&str>) -> CompileResult<Stage> {
        let key = if field == self.options.date_field {
            GroupKey::DateString {
                field: field.to_string(),
                format: self.options.date_format.clone(),
            }
        } else {
            GroupKey::Field(field.to_string())
        };

        let mut accumulators = vec![(COUNT_FIELD.to_string(), Accumulator::Count)];
        if let Some(calculate) = calculate {
            let fields = Lexer::field_refs(calculate).map_err(ParseError::from)?;
            if fields.iter().any(|name| name == GROUP_ID) {
                return Err(ParseError::ReservedField {
                    name: GROUP_ID.to_string(),
                }
                .into());
            }
            accumulators.extend(
                fields
                    .into_iter()
                    .filter(|name| name != COUNT_FIELD)
                    .map(|name| (name.clone(), Accumulator::SumField(name))),
            );
        }

        Ok(Stage::Group { key, accumulators })
    }
}

/// Project stage: group key back under its field name, `_id` dropped, and
/// the compiled calculate expression attached.
pub fn compile_project(field: &str, calculate: &str) -> CompileResult<Stage> {
    let expr = parse_expression(calculate)?;
    debug!(calculate, tree = ?expr, "compiled calculate expression");

    Ok(Stage::Project(vec![
        (field.to_string(), Projection::Rename(GROUP_ID.to_string())),
        (GROUP_ID.to_string(), Projection::Exclude),
        (CALCULATE_FIELD.to_string(), Projection::Computed(expr)),
    ]))
}

/// Compiles a JSON query document with default options.
pub fn compile(input: &str) -> CompileResult<Pipeline> {
    Compiler::default().compile_str(input)
}
