use rust_decimal::Decimal;
use std::fmt;

/// Reserved words of the language.
///
/// Keywords are matched case-insensitively; `SELECT`, `select` and `Select`
/// all resolve to [`Keyword::Select`]. A reserved word can never be used as
/// a field or index name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    Facets,
    Script,
    From,
    Where,
    Filter,
    Exist,
    Missing,
    Order,
    By,
    Limit,
    Asc,
    Desc,
    And,
    Or,
    Not,
    /// Reserved, no grammar yet
    In,
    /// Reserved, no grammar yet
    Between,
}

/// Upper-case spelling to keyword, fixed for the lifetime of the process.
static KEYWORDS: &[(&str, Keyword)] = &[
    ("SELECT", Keyword::Select),
    ("FACETS", Keyword::Facets),
    ("SCRIPT", Keyword::Script),
    ("FROM", Keyword::From),
    ("WHERE", Keyword::Where),
    ("FILTER", Keyword::Filter),
    ("EXIST", Keyword::Exist),
    ("MISSING", Keyword::Missing),
    ("ORDER", Keyword::Order),
    ("BY", Keyword::By),
    ("LIMIT", Keyword::Limit),
    ("ASC", Keyword::Asc),
    ("DESC", Keyword::Desc),
    ("AND", Keyword::And),
    ("OR", Keyword::Or),
    ("NOT", Keyword::Not),
    ("IN", Keyword::In),
    ("BETWEEN", Keyword::Between),
];

impl Keyword {
    /// Look up a word, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use elseql::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("order"), Some(Keyword::Order));
    /// assert_eq!(Keyword::lookup("price"), None);
    /// ```
    pub fn lookup(word: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
            .map(|(_, keyword)| *keyword)
    }

    /// Canonical upper-case spelling
    pub fn as_str(&self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, keyword)| keyword == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or_default()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Run of word characters: letters, digits, `_`, `.` and Latin-1
    /// letters. Keywords are words too; the parser decides.
    ///
    /// # Examples
    /// ```text
    /// SELECT
    /// user.name
    /// café
    /// 007
    /// ```
    Word(String),

    /// Single- or double-quoted string, quotes stripped
    ///
    /// # Examples
    /// ```text
    /// "error AND timeout"
    /// 'doc.price * 2'
    /// ```
    Quoted(String),

    /// Word that is exactly a decimal number. Scale is preserved, so
    /// `2.50` stays `2.50`.
    Number(Decimal),

    /// Any other single character: `*`, `,`, `=`, `!`, `<`, `>`
    Punct(char),

    /// End of input
    Eof,
}

impl Token {
    /// Keyword this token spells, if any
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Word(word) => Keyword::lookup(word),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }
}

/// Renders a token the way it shows up in error messages.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
            Token::Quoted(text) => write!(f, "\"{}\"", text),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Punct(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "EOF"),
        }
    }
}
