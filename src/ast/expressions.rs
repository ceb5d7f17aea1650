use crate::ast::{BoolOp, CompareOp, Literal, NameValue};
use serde::Serialize;
use std::fmt;

/// Boolean expression of a WHERE or FILTER clause.
///
/// Trees are strictly owned: every child belongs to exactly one parent,
/// and nodes are never modified once the parser hands them out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    /// Free-text query fragment, passed through untouched
    ///
    /// # Examples
    /// ```text
    /// WHERE "error AND (disk OR cpu)"
    /// ```
    StringLiteral { text: String },

    /// `FILTER EXIST field`
    Exists { field: String },

    /// `FILTER MISSING field`
    Missing { field: String },

    /// `NOT term`, binds to a single term only
    Not { expr: Box<Expression> },

    /// N-ary conjunction
    And { children: Vec<Expression> },

    /// N-ary disjunction
    Or { children: Vec<Expression> },

    /// `field <op> value`
    Comparison {
        op: CompareOp,
        operand: NameValue<Literal>,
    },
}

impl Expression {
    pub fn string_literal(text: impl Into<String>) -> Self {
        Expression::StringLiteral { text: text.into() }
    }

    pub fn exists(field: impl Into<String>) -> Self {
        Expression::Exists {
            field: field.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Expression::Missing {
            field: field.into(),
        }
    }

    pub fn negate(expr: Expression) -> Self {
        Expression::Not {
            expr: Box::new(expr),
        }
    }

    pub fn compare(op: CompareOp, name: impl Into<String>, value: Literal) -> Self {
        Expression::Comparison {
            op,
            operand: NameValue::new(name, value),
        }
    }

    /// Build an n-ary node of the given connective.
    pub fn group(op: BoolOp, children: Vec<Expression>) -> Self {
        match op {
            BoolOp::And => Expression::And { children },
            BoolOp::Or => Expression::Or { children },
        }
    }

    /// True for `EXIST`/`MISSING`, which have no query-string form.
    pub fn is_presence_check(&self) -> bool {
        matches!(self, Expression::Exists { .. } | Expression::Missing { .. })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Exists { field } => write!(f, "EXIST {}", field),
            Expression::Missing { field } => write!(f, "MISSING {}", field),
            other => f.write_str(&crate::render::render(other).unwrap_or_default()),
        }
    }
}
