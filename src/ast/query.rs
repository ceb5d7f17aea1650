use crate::ast::Expression;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Offset used when the statement has no `LIMIT n,m`.
pub const DEFAULT_OFFSET: u32 = 0;
/// Page size used when the statement has no `LIMIT`.
pub const DEFAULT_LIMIT: u32 = 10;

/// A field name bound to a value: comparison operands, sort keys and
/// script bindings all share this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameValue<V> {
    pub name: String,
    pub value: V,
}

impl<V> NameValue<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        NameValue {
            name: name.into(),
            value,
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Quoted string or digit-leading word, kept verbatim
    Text(String),
    Number(Decimal),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(text) => f.write_str(text),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `SCRIPT id = "body"`
pub type ScriptBinding = NameValue<String>;

/// `ORDER BY field [ASC|DESC]`
pub type SortField = NameValue<SortOrder>;

/// A parsed statement.
///
/// Produced once per input string and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    /// Projected fields, `None` for `SELECT *`
    pub select_fields: Option<Vec<String>>,

    /// Fields to aggregate terms over
    pub facet_fields: Option<Vec<String>>,

    pub script: Option<ScriptBinding>,

    /// Index named after `FROM`
    pub index: String,

    pub where_expr: Option<Expression>,

    pub filter_expr: Option<Expression>,

    pub order_by: Option<Vec<SortField>>,

    pub offset: u32,

    pub limit: u32,
}

impl Query {
    /// An unconstrained query against `index`: all fields, default paging.
    pub fn new(index: impl Into<String>) -> Self {
        Query {
            select_fields: None,
            facet_fields: None,
            script: None,
            index: index.into(),
            where_expr: None,
            filter_expr: None,
            order_by: None,
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}
