// tests/lexer_tests.rs

use elseql::ast::Token;
use elseql::lexer::Lexer;
use rust_decimal::Decimal;
use std::str::FromStr;

fn tokens(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut result = vec![];
    loop {
        let token = lexer.next_token();
        if token == Token::Eof {
            break;
        }
        result.push(token);
    }
    result
}

fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

fn number(s: &str) -> Token {
    Token::Number(Decimal::from_str(s).unwrap())
}

// ============================================================================
// Punctuation
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec!["*", ",", "=", "!", "<", ">", "(", ")", "-", ":"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        let expected = Token::Punct(input.chars().next().unwrap());
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_operators_are_single_chars() {
    assert_eq!(
        tokens("a>=1"),
        vec![word("a"), Token::Punct('>'), Token::Punct('='), number("1")]
    );
    assert_eq!(
        tokens("a != 'x'"),
        vec![
            word("a"),
            Token::Punct('!'),
            Token::Punct('='),
            Token::Quoted("x".into())
        ]
    );
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_dotted_identifier_is_one_word() {
    assert_eq!(tokens("user.address.city"), vec![word("user.address.city")]);
}

#[test]
fn test_latin1_word_chars() {
    assert_eq!(tokens("café = 1"), vec![word("café"), Token::Punct('='), number("1")]);
}

#[test]
fn test_non_latin1_is_punct() {
    assert_eq!(tokens("a€b"), vec![word("a"), Token::Punct('€'), word("b")]);
}

#[test]
fn test_underscore_and_digits() {
    assert_eq!(tokens("_id field2"), vec![word("_id"), word("field2")]);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(tokens("42"), vec![number("42")]);
    assert_eq!(tokens("2.50"), vec![number("2.50")]);
}

#[test]
fn test_number_keeps_scale() {
    match tokens("2.50").as_slice() {
        [Token::Number(n)] => assert_eq!(n.to_string(), "2.50"),
        other => panic!("Expected number, got {:?}", other),
    }
}

#[test]
fn test_digit_words_that_are_not_numbers() {
    assert_eq!(tokens("007"), vec![word("007")]);
    assert_eq!(tokens("2024.01.31"), vec![word("2024.01.31")]);
    assert_eq!(tokens("12abc"), vec![word("12abc")]);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_quoted_strings() {
    assert_eq!(tokens(r#""hello world""#), vec![Token::Quoted("hello world".into())]);
    assert_eq!(tokens("'single'"), vec![Token::Quoted("single".into())]);
    assert_eq!(tokens(r#"'it"s'"#), vec![Token::Quoted("it\"s".into())]);
}

#[test]
fn test_string_escapes() {
    assert_eq!(tokens(r#""a\"b""#), vec![Token::Quoted("a\"b".into())]);
    assert_eq!(tokens(r#""tab\there""#), vec![Token::Quoted("tab\there".into())]);
}

#[test]
fn test_unterminated_string_ends_at_eof() {
    assert_eq!(tokens("'open"), vec![Token::Quoted("open".into())]);
}

#[test]
fn test_keywords_inside_strings_stay_text() {
    assert_eq!(tokens("'a AND b'"), vec![Token::Quoted("a AND b".into())]);
}

// ============================================================================
// Whitespace and comments
// ============================================================================

#[test]
fn test_control_chars_are_whitespace() {
    assert_eq!(tokens("a\t\r\n\u{1}b"), vec![word("a"), word("b")]);
}

#[test]
fn test_comment() {
    assert_eq!(tokens("a # the rest is ignored"), vec![word("a")]);
    assert_eq!(tokens("a # comment\nb"), vec![word("a"), word("b")]);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Pushback
// ============================================================================

#[test]
fn test_push_back_replays_token() {
    let mut lexer = Lexer::new("SELECT *");
    assert_eq!(lexer.next_token(), word("SELECT"));
    lexer.push_back();
    assert_eq!(lexer.next_token(), word("SELECT"));
    assert_eq!(lexer.next_token(), Token::Punct('*'));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_push_back_eof() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token(), word("x"));
    assert_eq!(lexer.next_token(), Token::Eof);
    lexer.push_back();
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_token_position() {
    let mut lexer = Lexer::new("SELECT  name");
    lexer.next_token();
    assert_eq!(lexer.token_position(), 0);
    lexer.next_token();
    assert_eq!(lexer.token_position(), 8);
    lexer.push_back();
    assert_eq!(lexer.token_position(), 8);
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keyword_lookup_ignores_case() {
    use elseql::Keyword;

    assert_eq!(word("select").keyword(), Some(Keyword::Select));
    assert_eq!(word("Missing").keyword(), Some(Keyword::Missing));
    assert_eq!(word("between").keyword(), Some(Keyword::Between));
    assert_eq!(word("selection").keyword(), None);
    assert_eq!(Token::Quoted("SELECT".into()).keyword(), None);
}
