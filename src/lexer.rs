use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

#[must_use]
/// Check if `c` terminates a name or number token.
///
/// Delimiters are also emitted as one-character tokens of their own: the
/// operators, `=`, parentheses and the comma. End of input counts as a
/// delimiter too, but is reported as [`Token::end`] rather than scanned.
///
/// # Examples
///
/// ```
/// # use reckon::is_delim;
///
/// assert_eq!(is_delim('+'), true);
/// assert_eq!(is_delim('3'), false);
/// ```
pub fn is_delim(c: char) -> bool {
    matches!(
        c,
        ' ' | '+' | '-' | '/' | '*' | '%' | '^' | '=' | '(' | ')' | ',' | '\t' | '\r'
    )
}

/// An helper struct for scanning the input one token at a time
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `string`, positioned at its start
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Scan and return the next token, advancing past it.
    ///
    /// Leading whitespace is skipped. At the end of the input, or on a
    /// character no token can start with, this returns [`Token::end`] and
    /// does not advance, so further calls keep returning the same answer.
    pub fn next_token(&mut self) -> Token {
        while matches!(self.input.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.input.next();
        }
        let c = match self.input.peek() {
            Some(&c) => c,
            None => return Token::end(),
        };
        if is_delim(c) {
            self.input.next();
            Token::new(TokenKind::Delimiter, c.to_string())
        } else if c.is_ascii_alphabetic() {
            Token::new(TokenKind::Name, self.scan())
        } else if c.is_ascii_digit() || c == '.' {
            Token::new(TokenKind::Number, self.scan())
        } else {
            Token::end()
        }
    }

    /// Consume characters up to the next delimiter
    fn scan(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.input.peek() {
            if is_delim(c) {
                break;
            }
            self.input.next();
            text.push(c);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use test_case::test_case;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_end() {
                return tokens;
            }
            tokens.push(token);
        }
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).iter().map(|t| t.text.clone()).collect()
    }

    #[test_case("2 + 2" => vec!["2", "+", "2"] ; "addition is scanned properly")]
    #[test_case("2+2" => vec!["2", "+", "2"] ; "spaces are not required")]
    #[test_case("x1 = .5" => vec!["x1", "=", ".5"] ; "names may embed digits")]
    #[test_case("sqrt(16)" => vec!["sqrt", "(", "16", ")"] ; "call syntax")]
    #[test_case("a*(b-c)" => vec!["a", "*", "(", "b", "-", "c", ")"] ; "every delimiter is its own token")]
    #[test_case("1.2.3" => vec!["1.2.3"] ; "dots do not split a number")]
    fn scan(input: &str) -> Vec<String> {
        texts(input)
    }

    #[test]
    fn categories() {
        assert_eq!(
            kinds("pi + 3.5"),
            [TokenKind::Name, TokenKind::Delimiter, TokenKind::Number]
        );
        assert_eq!(kinds("%^=(),"), vec![TokenKind::Delimiter; 6]);
    }

    #[test]
    fn end_of_input() {
        let mut lexer = Lexer::new("   \t ");
        assert!(lexer.next_token().is_end());
        // still at the end on the next call
        assert!(lexer.next_token().is_end());

        assert!(Lexer::new("").next_token().is_end());
    }

    #[test]
    fn unknown_character_stops_the_scan() {
        let mut lexer = Lexer::new("5 @ 6");
        assert_eq!(lexer.next_token().text, "5");
        // '@' cannot start a token: the lexer reports the end of the
        // usable input and stays put
        assert!(lexer.next_token().is_end());
        assert!(lexer.next_token().is_end());
    }

    #[test]
    fn delimiters() {
        for c in [' ', '+', '-', '/', '*', '%', '^', '=', '(', ')', ',', '\t', '\r'].iter() {
            assert!(is_delim(*c));
        }
        for c in ['3', 'a', '.', '_', '!'].iter() {
            assert!(!is_delim(*c));
        }
    }
}
