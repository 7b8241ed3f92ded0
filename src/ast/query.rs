use serde::{Deserialize, Deserializer};

/// Declarative query document.
///
/// All three keys must be present; any of them may be `null`.
///
/// ```text
/// {"group": ["$date"],
///  "filters": ["$opportunity < 1000000", "$state $eq success"],
///  "calculate": "($opportunity + $deal_price) * $count"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryDsl {
    /// Grouping fields; only the first one is used
    #[serde(deserialize_with = "present_or_null")]
    pub group: Option<Vec<String>>,

    /// Filter clauses, combined with logical AND
    #[serde(deserialize_with = "present_or_null")]
    pub filters: Option<Vec<String>>,

    /// Arithmetic expression over the grouped fields
    #[serde(deserialize_with = "present_or_null")]
    pub calculate: Option<String>,
}

// A field with `deserialize_with` and no `default` is required by serde, so
// this keeps `null` legal while rejecting a missing key.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
