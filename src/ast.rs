//! # ELSEQL - Abstract Syntax Tree
//!
//! This module defines the syntax tree produced by the ELSEQL parser: a
//! SQL-flavored statement that compiles down to a search-engine request
//! with a Lucene-style query string.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and the reserved keyword table
//! - **[operators]** - Comparison and boolean connectives
//! - **[expressions]** - WHERE/FILTER expression trees
//! - **[query]** - The complete parsed statement
//!
//! ## Quick Start
//!
//! ```text
//! SELECT name, price FROM products WHERE price >= 10 AND category = "books" LIMIT 20
//! ```
//!
//! ## Statement Shape
//!
//! ```text
//! SELECT (* | fields) [FACETS fields] [SCRIPT id = "body"] FROM index
//!     [WHERE expr] [FILTER (EXIST field | MISSING field | expr)]
//!     [ORDER BY field [ASC|DESC], ...] [LIMIT [offset,] limit]
//! ```
//!
//! ## Operator Grouping
//!
//! There are no parentheses. Terms are folded left to right into n-ary
//! `AND`/`OR` nodes; when the connective changes, everything collected so
//! far becomes the first child of a node of the new connective:
//!
//! ```text
//! a=1 AND b=2 OR c=3   =>  Or[And[a=1, b=2], c=3]
//! a=1 OR b=2 AND c=3   =>  And[Or[a=1, b=2], c=3]
//! ```
pub mod expressions;
pub mod operators;
pub mod query;
pub mod tokens;

pub use expressions::Expression;
pub use operators::{BoolOp, CompareOp};
pub use query::{Literal, NameValue, Query, ScriptBinding, SortField, SortOrder};
pub use tokens::{Keyword, Token};
