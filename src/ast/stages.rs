use serde_json::Value as Json;

use crate::ast::{Comparator, Expr};

/// One filter clause after parsing: `$field <comparator> value`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    /// Field name without its `$` marker
    pub field: String,
    pub comparator: Comparator,
    pub value: FilterValue,
}

/// Right-hand side of a filter clause.
///
/// Anything that parses as a finite float is a number; everything else is
/// kept verbatim as a string.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Number(f64),
    String(String),
}

/// Key of a group stage.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupKey {
    /// Group on the raw field value (`"$state"`)
    Field(String),

    /// Group on the date rendered with a format pattern (`$dateToString`)
    DateString { field: String, format: String },
}

/// Per-group aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    /// `{"$sum": 1}`
    Count,
    /// `{"$sum": "$field"}`
    SumField(String),
}

/// Sort order; the group key is always sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
}

impl SortDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
        }
    }
}

/// Value assigned to a field by a project stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Copy another field (`"$_id"`)
    Rename(String),
    /// Suppress the field (`0`)
    Exclude,
    /// Computed arithmetic expression
    Computed(Expr),
}

/// A single stage of an aggregation pipeline.
///
/// Stages are built once per compile call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// `$match`; one condition is held directly, more are wrapped in `$and`
    Match(Vec<FilterCondition>),

    /// `$group` with `_id` and accumulators in insertion order
    Group {
        key: GroupKey,
        accumulators: Vec<(String, Accumulator)>,
    },

    /// `$sort`
    Sort { key: String, direction: SortDirection },

    /// `$project`, fields in insertion order
    Project(Vec<(String, Projection)>),
}

impl Stage {
    /// Name of the pipeline operator of this stage.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Match(_) => "$match",
            Stage::Group { .. } => "$group",
            Stage::Sort { .. } => "$sort",
            Stage::Project(_) => "$project",
        }
    }
}

/// Ordered stage sequence produced by one compile call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage operator names in order, e.g. `["$match", "$group"]`.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Pipeline as a JSON array of stage documents.
    pub fn to_json(&self) -> Json {
        Json::Array(self.stages.iter().map(crate::output::stage_to_json).collect())
    }
}
