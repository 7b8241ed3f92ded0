//! Documentation content for pipegen CLI

/// Get the query language reference
pub fn get_docs_overview() -> &'static str {
    r#"PIPEGEN QUERY DOCUMENTS

A query is a JSON object with three keys. Every key must be present; any of
them may be null.

  {"group": ["$date"],
   "filters": ["$opportunity < 1000000", "$state $eq success"],
   "calculate": "($opportunity + $deal_price) * $count"}

GROUP
-----
A list of field references. Only the first one is used; the rest are ignored
with a warning (rejected under --strict).

  ["$state"]        _id: "$state"
  ["$date"]         _id: {"$dateToString": {"format": "%d.%m.%Y", "date": "$date"}}

A group stage always carries count: {"$sum": 1} plus one {"$sum": "$field"}
per distinct field used in calculate, and is always followed by
{"$sort": {"_id": 1}}.

FILTERS
-------
Each clause is exactly three tokens: field, comparator, value.

  <   $lt        <=  $lte
  >   $gt        >=  $gte
  =   $eq        $eq $eq

Values that parse as numbers become numbers; anything else is a string.
One clause is matched directly, several are combined with $and.

CALCULATE
---------
Infix arithmetic over field references and numbers.

  +  $sum        -  $subtract
  *  $multiply   /  $divide

* and / bind tighter than + and -; equal precedence associates left.
Parentheses group. $count refers to the group's record count.

The result is attached as "calculate" in a $project stage that also restores
the group field under its own name. Without a group field, calculate is
ignored with a warning (rejected under --strict).

COMMANDS
--------
  pipegen compile '<query>'      Compile a query (or pipe it on stdin)
  pipegen compile --example      Compile the bundled example query
  pipegen expr '$a + $b * 2'     Compile a single calculate expression
  pipegen sample --count 100     Generate sample deal records
"#
}
