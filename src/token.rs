/// Lexical categories of the tokens found in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A one-character operator or punctuation mark
    Delimiter,
    /// A variable or function name
    Name,
    /// A numeric literal
    Number,
    /// End of input, or a character no token can start with
    End,
}

/// A single token scanned from the input string
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category of this token
    pub kind: TokenKind,
    /// The raw text of the token, exactly as it appears in the input
    pub text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: String) -> Self {
        Token { kind, text }
    }

    /// The token marking the end of the input
    #[must_use]
    pub fn end() -> Self {
        Token {
            kind: TokenKind::End,
            text: String::new(),
        }
    }

    /// Check if this token marks the end of the input
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Check if this token is the one-character delimiter `ch`
    #[must_use]
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.kind == TokenKind::Delimiter && self.text.chars().next() == Some(ch)
    }
}
