pub mod ast;
pub mod cli;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod request;

pub use ast::{BoolOp, CompareOp, Expression, Keyword, Literal, NameValue, Query, SortOrder, Token};
pub use config::ClientConfig;
pub use lexer::{Lexer, Position};
pub use parser::{ParseError, Parser};
pub use render::{render, to_source};
pub use request::SearchRequest;

/// Parse one ELSEQL statement.
///
/// # Examples
///
/// ```
/// let query = elseql::parse("SELECT a, b FROM t LIMIT 5, 20").unwrap();
///
/// assert_eq!(query.index, "t");
/// assert_eq!(query.select_fields, Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!((query.offset, query.limit), (5, 20));
/// ```
pub fn parse(text: &str) -> Result<Query, ParseError> {
    Parser::new(Lexer::new(text)).parse()
}
