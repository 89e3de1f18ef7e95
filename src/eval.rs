use crate::context::Context;
use crate::error::{Error, ErrorKind};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Longest name or number the evaluator accepts, in characters
pub const MAX_TOKEN_LEN: usize = 79;

/// The outcome of evaluating one expression.
///
/// The descent never aborts: it keeps computing after an error has been
/// raised, so a value is always produced. When `error` is set, the error is
/// authoritative and the value must not be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed numeric result
    pub value: f64,
    /// The first error raised during this evaluation, if any
    pub error: Option<Error>,
}

/// Evaluate a single expression against `context`.
///
/// Returns the numeric result together with the first error raised, if
/// any. Variables assigned by the expression persist in `context` for
/// later calls.
///
/// # Examples
///
/// ```
/// use reckon::{evaluate, Context};
///
/// let mut context = Context::new();
/// assert_eq!(evaluate("3 + 5 * 2", &mut context).value, 13.0);
///
/// evaluate("a = -5", &mut context);
/// assert_eq!(evaluate("3 * a", &mut context).value, -15.0);
/// ```
///
/// Names that match neither a function nor a defined variable quietly
/// evaluate to zero:
///
/// ```
/// # use reckon::{evaluate, Context};
/// let mut context = Context::new();
/// let outcome = evaluate("nowhere + 1", &mut context);
/// assert_eq!(outcome.value, 1.0);
/// assert!(outcome.error.is_none());
/// ```
pub fn evaluate(input: &str, context: &mut Context) -> Evaluation {
    let mut evaluator = Evaluator::new(input, context);
    evaluator.advance();
    if evaluator.token.is_end() {
        evaluator.latch(ErrorKind::NoToken, "");
        return Evaluation {
            value: 0.0,
            error: evaluator.error,
        };
    }
    let value = evaluator.assignment();
    Evaluation {
        value,
        error: evaluator.error,
    }
}

/// Recursive descent over six precedence levels, lowest first:
/// assignment, `+ -`, `* / %`, `^`, leading sign, grouping and atoms.
///
/// Each level runs with the current token already fetched and leaves the
/// first token it does not understand as the current one.
struct Evaluator<'a> {
    lexer: Lexer<'a>,
    context: &'a mut Context,
    token: Token,
    pending: Option<Token>,
    error: Option<Error>,
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str, context: &'a mut Context) -> Self {
        Evaluator {
            lexer: Lexer::new(input),
            context,
            token: Token::end(),
            pending: None,
            error: None,
        }
    }

    /// Record `kind` unless an earlier error is already latched
    fn latch(&mut self, kind: ErrorKind, context: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(Error::new(kind, context));
        }
    }

    /// Make the next token current, preferring a token given back by
    /// [`unread`](Self::unread) over scanning a fresh one
    fn advance(&mut self) {
        self.token = match self.pending.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        };
        if self.token.text.chars().count() > MAX_TOKEN_LEN {
            let text = self.token.text.clone();
            self.latch(ErrorKind::NameTooLong, text);
        }
    }

    /// Give the current token back to the stream and make `token` current
    /// instead
    fn unread(&mut self, token: Token) {
        self.pending = Some(std::mem::replace(&mut self.token, token));
    }

    /// Assignment: `name = <additive>`. Nothing binds above an assignment,
    /// and its value is the value of the right-hand side.
    fn assignment(&mut self) -> f64 {
        if self.token.kind == TokenKind::Name {
            let target = self.token.clone();
            self.advance();
            if self.token.is_delimiter('=') {
                self.advance();
                let value = self.additive();
                if let Err(kind) = self.context.set(&target.text, value) {
                    self.latch(kind, target.text);
                }
                return value;
            }
            // Not an assignment: the name must be seen again by the levels
            // below, with the token just fetched still next in line
            self.unread(target);
        }
        self.additive()
    }

    /// Left-associative `+` and `-`
    fn additive(&mut self) -> f64 {
        let mut value = self.multiplicative();
        loop {
            if self.token.is_delimiter('+') {
                self.advance();
                value += self.multiplicative();
            } else if self.token.is_delimiter('-') {
                self.advance();
                value -= self.multiplicative();
            } else {
                return value;
            }
        }
    }

    /// Left-associative `*`, `/` and `%`.
    ///
    /// `%` truncates both operands to 16-bit integers before taking the
    /// remainder, losing precision on purpose. A divisor that truncates to
    /// zero yields NaN.
    fn multiplicative(&mut self) -> f64 {
        let mut value = self.exponent();
        loop {
            if self.token.is_delimiter('*') {
                self.advance();
                value *= self.exponent();
            } else if self.token.is_delimiter('/') {
                self.advance();
                value /= self.exponent();
            } else if self.token.is_delimiter('%') {
                self.advance();
                let divisor = self.exponent();
                value = match (value as i16).checked_rem(divisor as i16) {
                    Some(remainder) => f64::from(remainder),
                    None => f64::NAN,
                };
            } else {
                return value;
            }
        }
    }

    /// Right-associative `^`: the right operand re-enters this level, so
    /// `2^3^2` is `2^(3^2)`
    fn exponent(&mut self) -> f64 {
        let base = self.sign();
        if self.token.is_delimiter('^') {
            self.advance();
            let power = self.exponent();
            return libm::pow(base, power);
        }
        base
    }

    /// An optional leading `+` or `-`
    fn sign(&mut self) -> f64 {
        let mut negate = false;
        if self.token.is_delimiter('+') || self.token.is_delimiter('-') {
            negate = self.token.is_delimiter('-');
            self.advance();
        }
        let value = self.grouping();
        if negate {
            -value
        } else {
            value
        }
    }

    /// A parenthesized sub-expression, or an atom
    fn grouping(&mut self) -> f64 {
        if self.token.is_delimiter('(') {
            self.advance();
            let value = self.additive();
            if !self.token.is_delimiter(')') {
                let text = self.token.text.clone();
                self.latch(ErrorKind::MissingCloseParen, text);
            }
            self.advance();
            return value;
        }
        self.atom()
    }

    /// A name or a numeric literal
    fn atom(&mut self) -> f64 {
        match self.token.kind {
            TokenKind::Name => {
                let value = self.resolve_name();
                self.advance();
                value
            }
            TokenKind::Number => {
                let value = number_value(&self.token.text);
                self.advance();
                value
            }
            _ => {
                let text = self.token.text.clone();
                self.latch(ErrorKind::UnrecognizedAtom, text);
                0.0
            }
        }
    }

    /// Resolve the current name token: a function call when the name is in
    /// the registry, the stored value of a variable otherwise. Names that
    /// match nothing quietly resolve to zero.
    ///
    /// On return the current token is the last one belonging to the name
    /// (the name itself, or the closing `)` of a call); [`atom`](Self::atom)
    /// advances past it.
    fn resolve_name(&mut self) -> f64 {
        let name = self.token.text.clone();
        if let Some(function) = self.context.function(&name) {
            self.advance();
            if !self.token.is_delimiter('(') {
                self.latch(ErrorKind::MissingOpenParen, name.as_str());
                return 0.0;
            }
            self.advance();
            let mut args = Vec::with_capacity(function.arity());
            for count in 0..function.arity() {
                if self.token.is_delimiter(')') {
                    self.latch(ErrorKind::MissingParameters, name.as_str());
                    return 0.0;
                }
                args.push(self.additive());
                if count + 1 < function.arity() {
                    if !self.token.is_delimiter(',') {
                        self.latch(ErrorKind::MissingParameters, name.as_str());
                        return 0.0;
                    }
                    self.advance();
                }
            }
            if !self.token.is_delimiter(')') {
                self.latch(ErrorKind::MissingCloseParen, name.as_str());
                return 0.0;
            }
            return function.call(&args);
        }
        self.context.get(&name).unwrap_or(0.0)
    }
}

/// Convert the text of a number token, reading the longest prefix that
/// forms a valid floating-point literal and ignoring the rest, the way
/// `strtod` does. Text with no usable prefix converts to zero.
fn number_value(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        if cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            end = cursor;
        }
    }
    text[..end].parse().unwrap_or(0.0)
}
