//! Query-string rendering for ELSEQL expressions.
//!
//! [`render()`] turns an expression tree into the Lucene-style query string
//! understood by the search engine's `query_string` query. [`to_source()`]
//! goes the other way and prints a tree back as ELSEQL. For trees the parser
//! produced, parsing that text again gives the same tree; hand-built trees
//! such as `Or[a, And[b, c]]` regroup to `And[Or[a, b], c]`.
//!
//! # Examples
//!
//! ```
//! use elseql::{parse, render};
//!
//! let query = parse("SELECT * FROM logs WHERE level = 'error' AND took >= 500").unwrap();
//! let rendered = render(query.where_expr.as_ref().unwrap());
//!
//! assert_eq!(rendered.as_deref(), Some("level:error AND took:[500 TO *]"));
//! ```

use crate::ast::{CompareOp, Expression, Literal, NameValue};

/// Render an expression as a query string.
///
/// Returns `None` if the tree contains an `EXIST`/`MISSING` check; those are
/// sent to the engine as dedicated clauses instead.
pub fn render(expr: &Expression) -> Option<String> {
    match expr {
        Expression::StringLiteral { text } => Some(text.clone()),
        Expression::Exists { .. } | Expression::Missing { .. } => None,
        Expression::Not { expr } => Some(format!("NOT {}", render(expr)?)),
        Expression::And { children } => join(children, " AND "),
        Expression::Or { children } => join(children, " OR "),
        Expression::Comparison { op, operand } => Some(render_comparison(*op, operand)),
    }
}

fn join(children: &[Expression], separator: &str) -> Option<String> {
    let parts = children.iter().map(render).collect::<Option<Vec<_>>>()?;
    Some(parts.join(separator))
}

fn render_comparison(op: CompareOp, operand: &NameValue<Literal>) -> String {
    let NameValue { name, value } = operand;
    match op {
        CompareOp::Eq => format!("{}:{}", name, value),
        CompareOp::Ne => format!("NOT {}:{}", name, value),
        CompareOp::Lt => format!("{}:{{* TO {}}}", name, value),
        CompareOp::Lte => format!("{}:[* TO {}]", name, value),
        CompareOp::Gt => format!("{}:{{{} TO *}}", name, value),
        CompareOp::Gte => format!("{}:[{} TO *]", name, value),
    }
}

/// Print an expression back as ELSEQL source.
///
/// Text values are always quoted so that digit-leading words such as `007`
/// survive a second parse unchanged.
pub fn to_source(expr: &Expression) -> String {
    match expr {
        Expression::StringLiteral { text } => quote(text),
        Expression::Exists { field } => format!("EXIST {}", field),
        Expression::Missing { field } => format!("MISSING {}", field),
        Expression::Not { expr } => format!("NOT {}", to_source(expr)),
        Expression::And { children } => source_join(children, " AND "),
        Expression::Or { children } => source_join(children, " OR "),
        Expression::Comparison { op, operand } => {
            let value = match &operand.value {
                Literal::Text(text) => quote(text),
                Literal::Number(n) => n.to_string(),
            };
            format!("{} {} {}", operand.name, op, value)
        }
    }
}

fn source_join(children: &[Expression], separator: &str) -> String {
    children.iter().map(to_source).collect::<Vec<_>>().join(separator)
}

fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for ch in text.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\tmp"), r#""C:\\tmp""#);
    }

    #[test]
    fn test_nested_presence_check_is_not_renderable() {
        let expr = Expression::negate(Expression::exists("user"));
        assert_eq!(render(&expr), None);
    }
}
