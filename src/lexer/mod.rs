//! # GraphQL Lexer
//!
//! The `graphql_parse::lexer` module turns GraphQL source text into a stream of
//! [`Token`]s, each a kind-tagged zero-copy slice of the source annotated with its
//! byte offset. The scanner is a hand-written state machine over the source bytes;
//! nothing is copied or unescaped, so concatenating the emitted token data — trivia
//! and all — reproduces the source text, terminated by a single [`TokenKind::End`]
//! token.
//!
//! The [`Lexer`] supports three complementary ways of producing tokens from the same
//! state, chosen per call rather than per configuration:
//!
//! - the [`Iterator`] implementation streams tokens and stops after the end,
//! - [`Lexer::read`] streams tokens but treats reading past the end as an error,
//! - [`Lexer::lex`] drains the source into parallel arena-allocated sequences of
//!   tokens and recoverable lexing errors.
//!
//! A lexer can carry an upper bound on the number of tokens it will produce, which
//! puts a hard ceiling on the work malicious documents can cause downstream:
//!
//! ```
//! use graphql_parse::lexer::{Lexer, LexerError};
//!
//! let mut lexer = Lexer::new("{ hello }").with_limit(2);
//! assert!(lexer.next().unwrap().is_ok());
//! assert!(lexer.next().unwrap().is_ok());
//! assert_eq!(lexer.next(), Some(Err(LexerError::LimitReached)));
//! ```

mod cursor;
mod error;
mod token;

pub use error::LexerError;
pub use token::{Token, TokenKind};

use crate::ast::ASTContext;
use bumpalo::collections::Vec;
use cursor::Cursor;

/// A resumable tokenizer over a GraphQL source text.
///
/// The lexer is a plain value: cloning it is cheap and yields an independent stream
/// position, which the parser exploits for lookahead without mutation.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
    taken: usize,
    limit: usize,
}

/// The result of draining a [`Lexer`] to completion in batch mode.
///
/// Tokens and errors are collected into parallel sequences; a recoverable lexing
/// error skips the malformed token and scanning continues, so a single bad literal
/// doesn't hide the rest of the stream.
#[derive(Debug)]
pub struct Lexed<'a> {
    pub tokens: Vec<'a, Token<'a>>,
    pub errors: Vec<'a, LexerError>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the given source text with no token limit.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            finished: false,
            taken: 0,
            limit: usize::MAX,
        }
    }

    /// Derive a lexer with an upper bound on the number of tokens it will produce,
    /// preserving the current stream position and finished state.
    ///
    /// Once the counter passes the limit the lexer finishes and fails with
    /// [`LexerError::LimitReached`].
    pub fn with_limit(self, limit: usize) -> Self {
        Lexer { limit, ..self }
    }

    /// The source text this lexer is scanning.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Whether the lexer has emitted its final token.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next token, treating an already finished stream as an error.
    ///
    /// This behaves like the [`Iterator`] implementation otherwise; it's the
    /// preferred form for consumers that know how many tokens they still expect,
    /// like the parser.
    #[inline]
    pub fn read(&mut self) -> Result<Token<'a>, LexerError> {
        self.next().unwrap_or(Err(LexerError::ReadAfterFinished))
    }

    /// Drain the lexer, gathering every token and every recoverable lexing error
    /// into sequences allocated in the given context's arena.
    ///
    /// Hitting the token limit stops the scan, since the limit exists to bound the
    /// amount of work done; any other lexing error is recorded and scanning
    /// continues behind the malformed token.
    pub fn lex(mut self, ctx: &'a ASTContext) -> Lexed<'a> {
        let mut tokens = Vec::new_in(&ctx.arena);
        let mut errors = Vec::new_in(&ctx.arena);
        for result in &mut self {
            match result {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    let limit_reached = error == LexerError::LimitReached;
                    errors.push(error);
                    if limit_reached {
                        break;
                    }
                }
            }
        }
        Lexed { tokens, errors }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.taken += 1;
        if self.taken > self.limit {
            self.finished = true;
            return Some(Err(LexerError::LimitReached));
        }
        match self.cursor.advance() {
            Ok(token) => {
                if token.kind == TokenKind::End {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
