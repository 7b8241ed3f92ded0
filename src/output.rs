//! Emission of compiled expressions and stages as aggregation-pipeline JSON.
//!
//! Object keys keep insertion order, so rendering the same pipeline twice
//! yields byte-identical text.
//!
//! # Examples
//!
//! ```
//! use pipegen::parser::parse_expression;
//! use pipegen::output::expr_to_json;
//!
//! let expr = parse_expression("$a + $b * $c").unwrap();
//! assert_eq!(
//!     expr_to_json(&expr).to_string(),
//!     r#"{"$sum":["$a",{"$multiply":["$b","$c"]}]}"#
//! );
//! ```

use serde_json::{Map, Number, Value as Json, json};

use crate::{
    ast::{
        Accumulator, Expr, FilterCondition, FilterValue, GroupKey, Pipeline, Projection,
        Comparator, Stage,
    },
    lexer::FIELD_MARKER,
};

/// Renders a field name as a field path (`"$name"`).
pub fn field_path(name: &str) -> Json {
    Json::String(format!("{}{}", FIELD_MARKER, name))
}

/// Renders an expression tree as nested arithmetic operators.
pub fn expr_to_json(expr: &Expr) -> Json {
    match expr {
        Expr::FieldRef(name) => field_path(name),
        Expr::Number(raw) => number_literal(raw),
        Expr::Word(word) => Json::String(word.clone()),
        Expr::BinaryOp { op, left, right } => {
            json!({ op.pipeline_operator(): [expr_to_json(left), expr_to_json(right)] })
        }
    }
}

fn number_literal(raw: &str) -> Json {
    if let Ok(n) = raw.parse::<i64>() {
        return Json::from(n);
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Json::Number)
        .unwrap_or_else(|| Json::String(raw.to_string()))
}

fn filter_value_to_json(value: &FilterValue) -> Json {
    match value {
        FilterValue::Number(n) => Number::from_f64(*n)
            .map(Json::Number)
            .unwrap_or_else(|| Json::String(n.to_string())),
        FilterValue::String(s) => Json::String(s.clone()),
    }
}

/// Renders one condition: equality as a direct pair, others wrapped in
/// their comparator.
pub fn condition_to_json(condition: &FilterCondition) -> Json {
    let value = filter_value_to_json(&condition.value);
    let value = match condition.comparator {
        Comparator::Eq => value,
        other => json!({ other.pipeline_operator(): value }),
    };
    json!({ condition.field.as_str(): value })
}

fn group_key_to_json(key: &GroupKey) -> Json {
    match key {
        GroupKey::Field(field) => field_path(field),
        GroupKey::DateString { field, format } => json!({
            "$dateToString": { "format": format, "date": field_path(field) }
        }),
    }
}

fn accumulator_to_json(accumulator: &Accumulator) -> Json {
    match accumulator {
        Accumulator::Count => json!({ "$sum": 1 }),
        Accumulator::SumField(field) => json!({ "$sum": field_path(field) }),
    }
}

fn projection_to_json(projection: &Projection) -> Json {
    match projection {
        Projection::Rename(source) => field_path(source),
        Projection::Exclude => Json::from(0),
        Projection::Computed(expr) => expr_to_json(expr),
    }
}

/// Renders a stage as a single-key document, e.g. `{"$sort": {"_id": 1}}`.
pub fn stage_to_json(stage: &Stage) -> Json {
    let body = match stage {
        Stage::Match(conditions) => match conditions.as_slice() {
            [single] => condition_to_json(single),
            many => json!({ "$and": many.iter().map(condition_to_json).collect::<Vec<_>>() }),
        },
        Stage::Group { key, accumulators } => {
            let mut doc = Map::new();
            doc.insert("_id".to_string(), group_key_to_json(key));
            for (name, accumulator) in accumulators {
                doc.insert(name.clone(), accumulator_to_json(accumulator));
            }
            Json::Object(doc)
        }
        Stage::Sort { key, direction } => json!({ key.as_str(): direction.as_i32() }),
        Stage::Project(fields) => Json::Object(
            fields
                .iter()
                .map(|(name, projection)| (name.clone(), projection_to_json(projection)))
                .collect(),
        ),
    };
    json!({ stage.name(): body })
}

/// Compact JSON text of a pipeline.
pub fn to_json(pipeline: &Pipeline) -> String {
    pipeline.to_json().to_string()
}

/// Pretty-printed JSON text of a pipeline, 2-space indentation.
pub fn to_json_pretty(pipeline: &Pipeline) -> String {
    // Value serialization is infallible
    serde_json::to_string_pretty(&pipeline.to_json()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SortDirection;

    fn condition(field: &str, comparator: Comparator, value: FilterValue) -> FilterCondition {
        FilterCondition {
            field: field.to_string(),
            comparator,
            value,
        }
    }

    #[test]
    fn sort_direction() {
        let stage = Stage::Sort {
            key: "_id".into(),
            direction: SortDirection::Ascending,
        };
        assert_eq!(stage_to_json(&stage), json!({ "$sort": { "_id": 1 } }));
    }

    #[test]
    fn equality_is_direct_pair() {
        let eq = condition("state", Comparator::Eq, FilterValue::String("fail".into()));
        assert_eq!(condition_to_json(&eq), json!({ "state": "fail" }));

        let gt = condition("n", Comparator::Gt, FilterValue::Number(2.0));
        assert_eq!(condition_to_json(&gt), json!({ "n": { "$gt": 2.0 } }));
    }

    #[test]
    fn number_literal_forms() {
        assert_eq!(number_literal("10"), json!(10));
        assert_eq!(number_literal("2.5"), json!(2.5));
    }
}
