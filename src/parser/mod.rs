//! # GraphQL Parser
//!
//! The `graphql_parse::parser` module turns a token stream into the AST of the
//! [`ast`](crate::ast) module using recursive descent with a single token of
//! lookahead. Whitespace, commas, and comments never reach the grammar; the parser
//! skips them as it pulls tokens from the [`Lexer`].
//!
//! The two free functions are all that most consumers need:
//!
//! ```
//! use graphql_parse::ast::ASTContext;
//! use graphql_parse::parser::parse;
//!
//! let ctx = ASTContext::new();
//! let document = parse(&ctx, "{ user { id } }").unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```
//!
//! [`parse_with_limit`] additionally caps the number of tokens the underlying lexer
//! may produce, which bounds parsing work on untrusted inputs. For finer control a
//! [`Parser`] can be constructed directly.
//!
//! With the `trace` cargo feature enabled, every grammar procedure emits a
//! `tracing` event with the token it's looking at on entry; without the feature
//! the instrumentation compiles away entirely.

mod document;
mod error;
#[cfg(test)]
mod tests;
mod type_system;

pub use error::{ParseResult, SyntaxError};

use crate::ast::{ASTContext, Definition, Document, TypeDefinition};
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use bumpalo::collections::Vec;
use std::ops::Range;

/// The closed set of keywords the grammar dispatches on.
///
/// GraphQL keywords are not reserved: contextually they're ordinary [`TokenKind::Name`]
/// tokens, and a field or type may well be called `query`. The parser therefore maps
/// name tokens through this dictionary only in keyword position.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum Keyword {
    Directive,
    Enum,
    Extend,
    Fragment,
    Implements,
    Input,
    Interface,
    Mutation,
    On,
    Query,
    Repeatable,
    Scalar,
    Schema,
    Subscription,
    Type,
    Union,
}

impl Keyword {
    pub(crate) fn from_name(name: &str) -> Option<Keyword> {
        match name {
            "directive" => Some(Keyword::Directive),
            "enum" => Some(Keyword::Enum),
            "extend" => Some(Keyword::Extend),
            "fragment" => Some(Keyword::Fragment),
            "implements" => Some(Keyword::Implements),
            "input" => Some(Keyword::Input),
            "interface" => Some(Keyword::Interface),
            "mutation" => Some(Keyword::Mutation),
            "on" => Some(Keyword::On),
            "query" => Some(Keyword::Query),
            "repeatable" => Some(Keyword::Repeatable),
            "scalar" => Some(Keyword::Scalar),
            "schema" => Some(Keyword::Schema),
            "subscription" => Some(Keyword::Subscription),
            "type" => Some(Keyword::Type),
            "union" => Some(Keyword::Union),
            _ => None,
        }
    }
}

/// A recursive-descent parser over a GraphQL source text.
///
/// The parser owns a [`Lexer`] and a single slot of lookahead, and allocates every
/// AST node it produces into the arena of the [`ASTContext`] it was created with.
pub struct Parser<'a> {
    pub(crate) ctx: &'a ASTContext,
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
    /// Byte range of the token under examination, for error rendering
    span: Range<usize>,
}

/// Parse a source text into a [`Document`] allocated in the given context's arena.
pub fn parse<'a, T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Document<'a>> {
    let source = ctx.alloc_string(source.to_string());
    Parser::new(ctx, source).parse()
}

/// Parse a source text into a [`Document`], capping the number of tokens the lexer
/// may produce.
///
/// Parsing fails with a token limit error as soon as the cap is exceeded, which
/// bounds the work a hostile document can cause.
pub fn parse_with_limit<'a, T: ToString>(
    ctx: &'a ASTContext,
    source: T,
    limit: usize,
) -> Result<&'a Document<'a>> {
    let source = ctx.alloc_string(source.to_string());
    Parser::new(ctx, source).with_limit(limit).parse()
}

impl<'a> Parser<'a> {
    /// Create a parser over the given source text with an unlimited token budget.
    pub fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
        Parser {
            ctx,
            lexer: Lexer::new(source),
            peeked: None,
            span: 0..0,
        }
    }

    /// Derive a parser whose lexer is capped to the given number of tokens.
    pub fn with_limit(self, limit: usize) -> Self {
        Parser {
            lexer: self.lexer.with_limit(limit),
            ..self
        }
    }

    /// Run the parser to completion and return the parsed [`Document`].
    pub fn parse(mut self) -> Result<&'a Document<'a>> {
        let source = self.lexer.source();
        match self.parse_document() {
            Ok(document) => Ok(self.ctx.alloc(document)),
            Err(error) => {
                let error_type = match error {
                    SyntaxError::Lexer(_) => ErrorType::Lexical,
                    _ => ErrorType::Syntax,
                };
                Err(Error::new_with_context(
                    error.to_string(),
                    Some(get_location(source, self.span.clone())),
                    print_span(source, self.span.clone()),
                    Some(error_type),
                ))
            }
        }
    }

    /// Announce entry into a grammar procedure when the `trace` feature is enabled.
    #[inline(always)]
    pub(crate) fn trace(&self, _rule: &'static str) {
        #[cfg(feature = "trace")]
        tracing::trace!(rule = _rule, token = ?self.peeked, "enter");
    }

    /// Pull the next grammatically significant token from the lexer.
    fn read_token(&mut self) -> ParseResult<Token<'a>> {
        loop {
            let token = self.lexer.read()?;
            if !token.kind.is_trivia() {
                self.span = token.index..token.index + token.data.len();
                return Ok(token);
            }
        }
    }

    /// The token under examination, pulling one from the lexer if none is cached.
    pub(crate) fn peek(&mut self) -> ParseResult<Token<'a>> {
        match self.peeked {
            Some(token) => Ok(token),
            None => {
                let token = self.read_token()?;
                self.peeked = Some(token);
                Ok(token)
            }
        }
    }

    /// The token under examination, clearing the lookahead slot.
    pub(crate) fn pop(&mut self) -> ParseResult<Token<'a>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    /// Whether the token under examination has the given kind.
    pub(crate) fn peek_kind(&mut self, kind: TokenKind) -> ParseResult<bool> {
        Ok(self.peek()?.kind == kind)
    }

    /// Consume the token under examination iff it has the given kind.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        let token = self.pop()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(SyntaxError::unexpected_token(&token))
        }
    }

    /// Consume the token under examination and report whether it had the given kind,
    /// leaving it in place otherwise.
    pub(crate) fn expect_optional(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.peek()?.kind == kind {
            self.pop()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a name token that maps to the given keyword.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        let token = self.pop()?;
        if token.kind != TokenKind::Name {
            return Err(SyntaxError::unexpected_token(&token));
        }
        match Keyword::from_name(token.data) {
            Some(found) if found == keyword => Ok(()),
            Some(_) => Err(SyntaxError::UnexpectedKeyword(token.data.into())),
            None => Err(SyntaxError::UnknownKeyword(token.data.into())),
        }
    }

    /// Consume a name token iff it maps to the given keyword, reporting whether it
    /// did.
    pub(crate) fn expect_optional_keyword(&mut self, keyword: Keyword) -> ParseResult<bool> {
        let token = self.peek()?;
        if token.kind == TokenKind::Name && Keyword::from_name(token.data) == Some(keyword) {
            self.pop()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The grammatically significant token following the one under examination,
    /// without consuming anything.
    ///
    /// The lexer is a plain value, so peeking past the lookahead slot is a matter of
    /// pulling from a throwaway copy of it.
    pub(crate) fn lookahead(&mut self) -> ParseResult<Token<'a>> {
        self.peek()?;
        let mut lexer = self.lexer.clone();
        loop {
            let token = lexer.read()?;
            if !token.kind.is_trivia() {
                return Ok(token);
            }
        }
    }

    /// Parses a `Document`, the root of the grammar.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Document)
    pub(crate) fn parse_document(&mut self) -> ParseResult<Document<'a>> {
        self.trace("document");
        let mut definitions = Vec::new_in(&self.ctx.arena);
        loop {
            if self.expect_optional(TokenKind::End)? {
                break;
            }
            definitions.push(self.parse_definition()?);
        }
        Ok(Document {
            definitions,
            size_hint: self.lexer.source().len(),
        })
    }

    /// Parses a single `Definition` of any of the three families.
    ///
    /// A leading string literal is a description and belongs to the definition that
    /// follows it, so dispatch looks ahead past it; only type-system definitions may
    /// carry one.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#Definition)
    pub(crate) fn parse_definition(&mut self) -> ParseResult<Definition<'a>> {
        self.trace("definition");
        let token = self.peek()?;
        let described = token.kind == TokenKind::String;
        let dispatch = if described { self.lookahead()? } else { token };
        match dispatch.kind {
            TokenKind::BraceOpen if !described => {
                Ok(self.parse_operation_definition()?.into())
            }
            TokenKind::Name => match Keyword::from_name(dispatch.data) {
                Some(Keyword::Query | Keyword::Mutation | Keyword::Subscription)
                    if !described =>
                {
                    Ok(self.parse_operation_definition()?.into())
                }
                Some(Keyword::Fragment) if !described => {
                    Ok(self.parse_fragment_definition()?.into())
                }
                Some(Keyword::Schema) => Ok(self.parse_schema_definition()?.into()),
                Some(Keyword::Scalar) => {
                    Ok(TypeDefinition::Scalar(self.parse_scalar_type_definition()?).into())
                }
                Some(Keyword::Type) => {
                    Ok(TypeDefinition::Object(self.parse_object_type_definition()?).into())
                }
                Some(Keyword::Interface) => {
                    Ok(TypeDefinition::Interface(self.parse_interface_type_definition()?).into())
                }
                Some(Keyword::Union) => {
                    Ok(TypeDefinition::Union(self.parse_union_type_definition()?).into())
                }
                Some(Keyword::Enum) => {
                    Ok(TypeDefinition::Enum(self.parse_enum_type_definition()?).into())
                }
                Some(Keyword::Input) => {
                    Ok(TypeDefinition::InputObject(self.parse_input_object_type_definition()?)
                        .into())
                }
                Some(Keyword::Directive) => Ok(self.parse_directive_definition()?.into()),
                Some(Keyword::Extend) if !described => self.parse_type_system_extension(),
                Some(_) => Err(SyntaxError::UnexpectedKeyword(dispatch.data.into())),
                None => Err(SyntaxError::UnknownDefinition(dispatch.data.into())),
            },
            _ => Err(SyntaxError::unexpected_token(&dispatch)),
        }
    }
}
