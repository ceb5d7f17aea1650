use crate::ast::Token;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Character offset of a token in the source text.
pub type Position = usize;

/// One token of pushback: either nothing is buffered, or the most recently
/// read token is waiting to be read again.
#[derive(Debug, Clone, PartialEq)]
enum Lookahead {
    Empty,
    Buffered(Token, Position),
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    /// Last token handed out, eligible for `push_back`
    last: Option<(Token, Position)>,
    lookahead: Lookahead,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            last: None,
            lookahead: Lookahead::Empty,
        }
    }

    /// Control characters through space.
    pub fn is_whitespace(ch: char) -> bool {
        ch <= ' '
    }

    /// ASCII letters and digits, `_`, `.`, and the Latin-1 range 0xA0-0xFF.
    pub fn is_word_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' || ('\u{a0}'..='\u{ff}').contains(&ch)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Skips whitespace and `#` comments.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if Self::is_whitespace(ch) {
                self.advance();
            } else if ch == '#' {
                while let Some(ch) = self.current_char() {
                    if ch == '\n' || ch == '\r' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if Self::is_word_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads up to the closing quote, a line break or end of input.
    fn read_string(&mut self, quote: char) -> String {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return result;
                }
                '\n' | '\r' => return result,
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some(ch) => result.push(ch),
                        None => return result,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        result
    }

    /// A word is a number only if it reads back exactly as written, so
    /// `007` or `1.2.3` stay words.
    fn classify_word(word: String) -> Token {
        if word.starts_with(|c: char| c.is_ascii_digit()) {
            if let Ok(n) = Decimal::from_str(&word) {
                if n.to_string() == word {
                    return Token::Number(n);
                }
            }
        }
        Token::Word(word)
    }

    fn scan(&mut self) -> (Token, Position) {
        self.skip_whitespace();
        let start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some(quote @ ('"' | '\'')) => Token::Quoted(self.read_string(quote)),
            Some(ch) if Self::is_word_char(ch) => {
                let word = self.read_word();
                Self::classify_word(word)
            }
            Some(ch) => {
                self.advance();
                Token::Punct(ch)
            }
        };

        (token, start)
    }

    /// Read the next token, replaying a pushed-back one first.
    pub fn next_token(&mut self) -> Token {
        let (token, start) = match std::mem::replace(&mut self.lookahead, Lookahead::Empty) {
            Lookahead::Buffered(token, start) => (token, start),
            Lookahead::Empty => self.scan(),
        };
        self.last = Some((token.clone(), start));
        token
    }

    /// Unread the most recent token. Only one token can be pushed back;
    /// a second call before the next read does nothing.
    pub fn push_back(&mut self) {
        if let Some((token, start)) = self.last.take() {
            self.lookahead = Lookahead::Buffered(token, start);
        }
    }

    /// Start of the most recently read token
    pub fn token_position(&self) -> Position {
        match (&self.lookahead, &self.last) {
            (Lookahead::Buffered(_, start), _) => *start,
            (_, Some((_, start))) => *start,
            _ => self.position,
        }
    }
}

#[test]
fn test_keywords_are_words() {
    let mut lexer = Lexer::new("select FROM Where");
    assert_eq!(lexer.next_token(), Token::Word("select".into()));
    assert_eq!(lexer.next_token(), Token::Word("FROM".into()));
    assert_eq!(lexer.next_token(), Token::Word("Where".into()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_push_back() {
    let mut lexer = Lexer::new("a , b");
    assert_eq!(lexer.next_token(), Token::Word("a".into()));
    assert_eq!(lexer.next_token(), Token::Punct(','));
    lexer.push_back();
    lexer.push_back();
    assert_eq!(lexer.next_token(), Token::Punct(','));
    assert_eq!(lexer.next_token(), Token::Word("b".into()));
}
