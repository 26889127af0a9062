//! `graphql_parse`
//! =========
//!
//! _Stupendously fast and easy GraphQL document parsing._
//!
//! The **`graphql_parse`** library follows two goals:
//!
//! - To support a pleasant-to-use API for parsing the GraphQL language
//! - To be stupendously fast at turning GraphQL source text into ASTs
//!
//! In short, _surprise!_ The `graphql_parse` crate handles the syntax of GraphQL and
//! nothing else. It accepts both executable documents — the operations and fragments
//! clients send to a GraphQL service — and type-system documents, i.e. schema
//! definitions and extensions, as specified by the GraphQL October 2021 specification.
//! It does not validate documents against a schema, execute them, or print them back;
//! those are jobs for the layers above a parser, and compared to the volume of
//! documents an intermediary GraphQL layer has to chew through they're one-off
//! operations.
//!
//! A harder focus is to optimize how documents are turned into ASTs and how little
//! memory that takes. Every AST is allocated into an arena held by an
//! [`ASTContext`](ast::ASTContext), every string in the AST borrows from the original
//! source text, and dropping the context frees the whole document in one step.
//!
//! The pipeline is made of three layers, each usable on its own:
//!
//! - a byte-level scanner producing [`Token`](lexer::Token)s with zero-copy slices
//!   into the source,
//! - a [`Lexer`](lexer::Lexer) adding an optional token budget and batch lexing,
//! - and a recursive-descent [`Parser`](parser::Parser) with single-token lookahead
//!   that builds the [`Document`](ast::Document) AST.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use bumpalo;
