//! Search request assembly.
//!
//! Maps a parsed [`Query`] onto the JSON body of a `_search` request:
//!
//! | statement part      | request field                                   |
//! |---------------------|-------------------------------------------------|
//! | `WHERE expr`        | `query.query_string` (else `query.match_all`)   |
//! | `FILTER EXIST f`    | `filter.exists.field`                           |
//! | `FILTER MISSING f`  | `filter.missing.field`                          |
//! | `FILTER expr`       | `filter.query.query_string`                     |
//! | `FACETS f, ...`     | `facets.<f>.terms.field`                        |
//! | `SCRIPT id = "s"`   | `script_fields.<id>.script`                     |
//! | `SELECT f, ...`     | `fields`                                        |
//! | `ORDER BY f DESC`   | `sort: [{"f": "desc"}]`                         |
//! | `LIMIT n, m`        | `from: n, size: m`                              |

use crate::ast::{Expression, Query};
use crate::config::ClientConfig;
use crate::render::render;
use serde_json::{json, Map, Value};
use tracing::debug;

/// A compiled request: target URL plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub url: String,
    pub body: Value,
}

impl SearchRequest {
    pub fn new(config: &ClientConfig, query: &Query) -> Self {
        let request = SearchRequest {
            url: config.search_url(&query.index),
            body: build_body(query),
        };
        debug!(url = %request.url, body = %request.body, "compiled search request");
        request
    }
}

fn query_string(expr: &Expression) -> Value {
    json!({
        "query_string": {
            "query": render(expr).unwrap_or_default(),
            "default_operator": "AND",
        }
    })
}

fn build_filter(expr: &Expression) -> Value {
    match expr {
        Expression::Exists { field } => json!({ "exists": { "field": field } }),
        Expression::Missing { field } => json!({ "missing": { "field": field } }),
        other => json!({ "query": query_string(other) }),
    }
}

/// Build the `_search` body for a query.
pub fn build_body(query: &Query) -> Value {
    let mut body = Map::new();

    let main = match &query.where_expr {
        Some(expr) => query_string(expr),
        None => json!({ "match_all": {} }),
    };
    body.insert("query".into(), main);

    if let Some(expr) = &query.filter_expr {
        body.insert("filter".into(), build_filter(expr));
    }

    if let Some(facets) = &query.facet_fields {
        let facets: Map<String, Value> = facets
            .iter()
            .map(|field| (field.clone(), json!({ "terms": { "field": field } })))
            .collect();
        body.insert("facets".into(), Value::Object(facets));
    }

    if let Some(script) = &query.script {
        body.insert(
            "script_fields".into(),
            json!({ script.name.clone(): { "script": script.value } }),
        );
    }

    if let Some(fields) = &query.select_fields {
        body.insert("fields".into(), json!(fields));
    }

    if let Some(order) = &query.order_by {
        let sort: Vec<Value> = order
            .iter()
            .map(|field| json!({ field.name.clone(): field.value.as_str() }))
            .collect();
        body.insert("sort".into(), Value::Array(sort));
    }

    body.insert("from".into(), json!(query.offset));
    body.insert("size".into(), json!(query.limit));

    Value::Object(body)
}
