//! Documentation content for the elseql CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Expressions,
    Filters,
    Ordering,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "select" => Some(Self::Syntax),
            "expressions" | "expression" | "where" | "ops" => Some(Self::Expressions),
            "filters" | "filter" => Some(Self::Filters),
            "ordering" | "order" | "limit" | "paging" => Some(Self::Ordering),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ELSEQL DOCUMENTATION

ELSEQL is a SQL-flavored query language for search engines. Statements are
compiled into a search request whose main query is a Lucene-style query
string.

DOCUMENTATION CATEGORIES

  syntax            Statement layout, field lists, facets and scripts
  expressions       WHERE terms, comparison operators, AND/OR/NOT grouping
  filters           FILTER clauses, EXIST and MISSING
  ordering          ORDER BY and LIMIT

QUICK REFERENCE

  SELECT *                      All fields
  SELECT a, b.c                 Field projection
  FACETS f                      Term aggregation over f
  SCRIPT id = "expr"            Scripted field
  FROM index                    Target index (required)
  WHERE a = 1 AND b > 2         Query string
  FILTER EXIST f                Field presence filter
  ORDER BY a, b DESC            Sort
  LIMIT 10, 20                  Offset 10, page size 20

Run 'elseql doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Expressions) => Ok(EXPRESSIONS_DOC),
        Some(DocCategory::Filters) => Ok(FILTERS_DOC),
        Some(DocCategory::Ordering) => Ok(ORDERING_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Statement Layout

STATEMENT
  SELECT (* | fields) [FACETS fields] [SCRIPT id = "body"] FROM index
      [WHERE expr] [FILTER filter] [ORDER BY sort] [LIMIT [offset,] size]

  Clauses must appear in this order. Keywords are case-insensitive.

FIELD LISTS
  SELECT name, address.city FROM users
    Comma separated, at least one entry. Dots are part of the name.

  SELECT * FROM users
    Returns every stored field.

FACETS
  SELECT * FACETS status, country FROM orders
    Adds a terms aggregation per field.

SCRIPT
  SELECT * SCRIPT total = "doc['price'].value * 2" FROM orders
    Adds a scripted field named 'total'. Only '=' is accepted.

COMMENTS
  Everything from '#' to the end of the line is ignored.

  Constraints:
    - Reserved words (SELECT, FROM, AND, IN, BETWEEN, ...) cannot be names
    - Names use letters, digits, '_', '.', and Latin-1 letters
"#;

const EXPRESSIONS_DOC: &str = r#"EXPRESSIONS - WHERE Clauses

TERMS
  field = value          field:value
  field != value         NOT field:value
  field < value          field:{* TO value}
  field <= value         field:[* TO value]
  field > value          field:{value TO *}
  field >= value         field:[value TO *]
  "free text"            passed through as-is

  Values are quoted strings, numbers, or words starting with a digit
  (2024.01.31, 007).

NOT
  NOT status = closed    NOT status:closed
    Negates the single term that follows it.

AND / OR
  Terms are joined left to right. There are no parentheses.

  a = 1 AND b = 2 OR c = 3
    Groups as (a AND b) OR c

  a = 1 OR b = 2 AND c = 3
    Groups as (a OR b) AND c

  A change of connective wraps everything before it.
"#;

const FILTERS_DOC: &str = r#"FILTERS - FILTER Clauses

EXPRESSION FILTER
  SELECT * FROM logs FILTER level = error
    Same term syntax as WHERE; sent as a filter query.

PRESENCE
  SELECT * FROM users FILTER EXIST email
    Documents that have a value for 'email'.

  SELECT * FROM users FILTER MISSING email
    Documents without a value for 'email'.

  Constraints:
    - EXIST and MISSING take exactly one field
    - They cannot be combined with AND/OR
"#;

const ORDERING_DOC: &str = r#"ORDERING - ORDER BY and LIMIT

ORDER BY
  ORDER BY created DESC, name
    Each field may carry ASC or DESC. ASC is the default.

LIMIT
  LIMIT 20
    First 20 hits.

  LIMIT 40, 20
    Skip 40 hits, return the next 20.

  Without LIMIT the offset is 0 and the page size is 10.
"#;
