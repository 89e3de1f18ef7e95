#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::cast_possible_truncation
)]

//! Reckon, a small calculator engine for interactive evaluation of
//! arithmetic expressions.
//!
//! Expressions are evaluated directly from their text against a
//! [`Context`](struct.Context.html) that persists between calls, so
//! variables assigned by one expression are visible to the next. The
//! entry point is the [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! use reckon::{evaluate, Context};
//!
//! let mut context = Context::new();
//! assert_eq!(evaluate("3 + 5 * 2", &mut context).value, 13.0);
//!
//! evaluate("a = 3.5", &mut context);
//! assert_eq!(evaluate("2 * a", &mut context).value, 7.0);
//! ```
//!
//! Evaluation never bails out early: the whole expression is always
//! walked, a numeric value is always produced, and the first problem
//! found along the way is reported next to it:
//!
//! ```
//! use reckon::{evaluate, Context, ErrorKind};
//!
//! let mut context = Context::new();
//! let outcome = evaluate("sqrt 2", &mut context);
//! assert_eq!(outcome.error.unwrap().kind(), ErrorKind::MissingOpenParen);
//! ```
//!
//! # Language definition
//!
//! The language implemented by reckon contains the following elements:
//!
//! - float literal values: `12.456`, `0.0045e78`, ...;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division, `%` for 16-bit integer
//!   remainder and `^` for exponentiation;
//! - assignment with `=`. The target must be a bare name; everything on
//!   the right of the `=` is the assigned value, and the builtin
//!   constants `pi` and `e` cannot be assigned to;
//! - variables. Names start with an ASCII letter and run to the next
//!   operator or space, so digits are allowed after the first character
//!   (`x1` is one name). A name that matches nothing evaluates to `0`;
//! - function calls: `sin(a)`, `atan(22.0)`. The following unary
//!   functions are accessible, with the same meaning as the
//!   corresponding `libm` function: `sqrt`, `log`, `exp`, `log10`,
//!   `sin`, `cos`, `tan`, `asin`, `acos`, `atan`.
//!
//! # Technical details
//!
//! reckon is a tokenizer feeding a six-level recursive descent that
//! computes values as it parses, with no intermediate syntax tree. The
//! widest native float (`f64`) carries every value. Errors latch: only
//! the first one is kept and parsing continues to the end of the
//! expression regardless.

#[macro_use]
extern crate lazy_static;

mod context;
mod display;
mod error;
mod eval;
mod lexer;
mod token;
mod util;

pub use context::{Context, DEFAULT_VARIABLE_LIMIT};
pub use display::render;
pub use error::{Error, ErrorKind};
pub use eval::{evaluate, Evaluation, MAX_TOKEN_LEN};
pub use lexer::{is_delim, Lexer};
pub use token::{Token, TokenKind};
pub use util::{Function, FUNCTIONS};
