use crate::{
    ast::{
        BoolOp, CompareOp, Expression, Keyword, Literal, NameValue, Query, ScriptBinding,
        SortField, SortOrder, Token,
    },
    lexer::{Lexer, Position},
};
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;
use tracing::trace;

const LIST_SEPARATOR: char = ',';
const ALL_FIELDS: char = '*';

/// The single error kind of the parser. The message reads
/// `Expected <what>, got <found>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// Character offset of the offending token
    pub position: Position,
}

impl ParseError {
    pub fn expected(expected: &str, found: &Token, position: Position) -> Self {
        ParseError {
            message: format!("Expected {}, got {}", expected, found),
            position,
        }
    }
}

/// Folds a flat run of terms into n-ary AND/OR nodes.
///
/// Terms accumulate under the open connective. When the connective
/// changes, the node built so far is closed and becomes the first child of
/// a node of the new connective.
#[derive(Debug, Default)]
struct Grouping {
    open: Option<(BoolOp, Vec<Expression>)>,
}

impl Grouping {
    /// Add a term that is followed by `connector`.
    fn push(self, term: Expression, connector: BoolOp) -> Self {
        let open = match self.open {
            None => (connector, vec![term]),
            Some((op, mut children)) => {
                children.push(term);
                if op == connector {
                    (op, children)
                } else {
                    (connector, vec![Expression::group(op, children)])
                }
            }
        };
        Grouping { open: Some(open) }
    }

    /// Add the last term and return the root.
    fn finish(self, term: Expression) -> Expression {
        match self.open {
            None => term,
            Some((op, mut children)) => {
                children.push(term);
                Expression::group(op, children)
            }
        }
    }
}

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    fn error(&self, expected: &str, found: &Token) -> ParseError {
        ParseError::expected(expected, found, self.lexer.token_position())
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        let token = self.lexer.next_token();
        if token.is_keyword(keyword) {
            trace!(%keyword, "keyword");
            Ok(())
        } else {
            Err(self.error(keyword.as_str(), &token))
        }
    }

    /// Consume `keyword` if it is next; otherwise leave the stream as is.
    fn accept_keyword(&mut self, keyword: Keyword) -> bool {
        self.accept_keywords(&[keyword]).is_some()
    }

    fn accept_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        let token = self.lexer.next_token();
        match token.keyword() {
            Some(keyword) if keywords.contains(&keyword) => {
                trace!(%keyword, "keyword");
                Some(keyword)
            }
            _ => {
                self.lexer.push_back();
                None
            }
        }
    }

    fn accept_punct(&mut self, expected: char) -> bool {
        if self.lexer.next_token() == Token::Punct(expected) {
            true
        } else {
            self.lexer.push_back();
            false
        }
    }

    /// A word that is not reserved. All-digit names such as `2024` come
    /// back from the lexer as numbers and are accepted too.
    fn parse_id(&mut self) -> Option<String> {
        match self.lexer.next_token() {
            Token::Word(word) if Keyword::lookup(&word).is_none() => {
                trace!(%word, "identifier");
                Some(word)
            }
            Token::Number(n) => {
                let word = n.to_string();
                trace!(%word, "identifier");
                Some(word)
            }
            _ => {
                self.lexer.push_back();
                None
            }
        }
    }

    /// Dotted field or index name, e.g. `user.address.city`
    pub fn parse_identifier(&mut self) -> Result<String, ParseError> {
        match self.parse_id() {
            Some(id) => Ok(id),
            None => {
                let found = self.lexer.next_token();
                Err(self.error("identifier", &found))
            }
        }
    }

    /// Identifier with an optional `ASC`/`DESC` suffix.
    fn parse_sort_identifier(&mut self) -> Result<SortField, ParseError> {
        let name = self.parse_identifier()?;
        let order = match self.accept_keywords(&[Keyword::Asc, Keyword::Desc]) {
            Some(Keyword::Desc) => SortOrder::Desc,
            _ => SortOrder::Asc,
        };
        Ok(NameValue::new(name, order))
    }

    /// Non-empty comma separated list of identifiers
    pub fn parse_identifiers(&mut self) -> Result<Vec<String>, ParseError> {
        let mut result = vec![self.parse_identifier()?];
        while self.accept_punct(LIST_SEPARATOR) {
            result.push(self.parse_identifier()?);
        }
        Ok(result)
    }

    fn parse_sort_identifiers(&mut self) -> Result<Vec<SortField>, ParseError> {
        let mut result = vec![self.parse_sort_identifier()?];
        while self.accept_punct(LIST_SEPARATOR) {
            result.push(self.parse_sort_identifier()?);
        }
        Ok(result)
    }

    /// Non-negative integer, either a number token or an all-digit word.
    pub fn parse_integer(&mut self) -> Result<u32, ParseError> {
        let token = self.lexer.next_token();
        let value = match &token {
            Token::Number(n) if n.scale() == 0 => n.to_u32(),
            Token::Word(word) if word.bytes().all(|b| b.is_ascii_digit()) => word.parse().ok(),
            _ => None,
        };
        value.ok_or_else(|| self.error("integer", &token))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        match self.lexer.next_token() {
            Token::Quoted(text) => Ok(text),
            token => Err(self.error("quoted string", &token)),
        }
    }

    fn parse_optional_string(&mut self) -> Option<String> {
        match self.lexer.next_token() {
            Token::Quoted(text) => Some(text),
            _ => {
                self.lexer.push_back();
                None
            }
        }
    }

    /// Right-hand side of a comparison: quoted string, number, or a word
    /// starting with a digit such as `2024.01.31` or `007`.
    pub fn parse_value(&mut self) -> Result<Literal, ParseError> {
        let value = match self.lexer.next_token() {
            Token::Quoted(text) => Literal::Text(text),
            Token::Number(n) => Literal::Number(n),
            Token::Word(word) if word.starts_with(|c: char| c.is_ascii_digit()) => Literal::Text(word),
            token => return Err(self.error("value", &token)),
        };
        trace!(%value, "value");
        Ok(value)
    }

    pub fn parse_operator(&mut self) -> Result<CompareOp, ParseError> {
        let token = self.lexer.next_token();
        let op = match token {
            Token::Punct('=') => CompareOp::Eq,
            Token::Punct('!') => match self.lexer.next_token() {
                Token::Punct('=') => CompareOp::Ne,
                token => return Err(self.error("'='", &token)),
            },
            Token::Punct(c @ ('<' | '>')) => {
                let inclusive = self.accept_punct('=');
                match (c, inclusive) {
                    ('<', false) => CompareOp::Lt,
                    ('<', true) => CompareOp::Lte,
                    (_, false) => CompareOp::Gt,
                    (_, true) => CompareOp::Gte,
                }
            }
            token => return Err(self.error("operator", &token)),
        };
        trace!(%op, "operator");
        Ok(op)
    }

    fn parse_end(&mut self) -> Result<(), ParseError> {
        match self.lexer.next_token() {
            Token::Eof => Ok(()),
            token => Err(self.error("end of input", &token)),
        }
    }

    /// `NOT? ( "text" | identifier op value )`
    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let negated = self.accept_keyword(Keyword::Not);

        let term = match self.parse_optional_string() {
            Some(text) => Expression::string_literal(text),
            None => {
                let name = self.parse_identifier()?;
                let op = self.parse_operator()?;
                let value = self.parse_value()?;
                Expression::compare(op, name, value)
            }
        };

        Ok(if negated { Expression::negate(term) } else { term })
    }

    /// Terms joined by `AND`/`OR`, grouped left to right.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut grouping = Grouping::default();

        loop {
            let term = self.parse_term()?;
            match self.accept_keywords(&[Keyword::And, Keyword::Or]) {
                Some(Keyword::And) => grouping = grouping.push(term, BoolOp::And),
                Some(_) => grouping = grouping.push(term, BoolOp::Or),
                None => return Ok(grouping.finish(term)),
            }
        }
    }

    /// `EXIST field | MISSING field | expression`
    fn parse_filter(&mut self) -> Result<Expression, ParseError> {
        if self.accept_keyword(Keyword::Exist) {
            Ok(Expression::exists(self.parse_identifier()?))
        } else if self.accept_keyword(Keyword::Missing) {
            Ok(Expression::missing(self.parse_identifier()?))
        } else {
            self.parse_expression()
        }
    }

    /// `id = "script body"`
    fn parse_script(&mut self) -> Result<ScriptBinding, ParseError> {
        let id = self.parse_identifier()?;

        self.lexer.next_token();
        let position = self.lexer.token_position();
        self.lexer.push_back();

        let op = self.parse_operator()?;
        if op != CompareOp::Eq {
            return Err(ParseError {
                message: format!("Expected '=', got {}", op),
                position,
            });
        }

        let body = self.parse_string()?;
        Ok(NameValue::new(id, body))
    }

    /// Parse a complete statement, which must span the whole input.
    pub fn parse(&mut self) -> Result<Query, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let select_fields = if self.accept_punct(ALL_FIELDS) {
            None
        } else {
            Some(self.parse_identifiers()?)
        };

        let facet_fields = if self.accept_keyword(Keyword::Facets) {
            Some(self.parse_identifiers()?)
        } else {
            None
        };

        let script = if self.accept_keyword(Keyword::Script) {
            Some(self.parse_script()?)
        } else {
            None
        };

        self.expect_keyword(Keyword::From)?;
        let mut query = Query::new(self.parse_identifier()?);
        query.select_fields = select_fields;
        query.facet_fields = facet_fields;
        query.script = script;

        if self.accept_keyword(Keyword::Where) {
            query.where_expr = Some(self.parse_expression()?);
        }

        if self.accept_keyword(Keyword::Filter) {
            query.filter_expr = Some(self.parse_filter()?);
        }

        if self.accept_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            query.order_by = Some(self.parse_sort_identifiers()?);
        }

        if self.accept_keyword(Keyword::Limit) {
            let first = self.parse_integer()?;
            if self.accept_punct(LIST_SEPARATOR) {
                query.offset = first;
                query.limit = self.parse_integer()?;
            } else {
                query.limit = first;
            }
        }

        self.parse_end()?;
        trace!(index = %query.index, "parsed statement");
        Ok(query)
    }
}
