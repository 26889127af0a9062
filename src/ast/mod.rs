//! # GraphQL Document AST
//!
//! The `graphql_parse::ast` module contains the GraphQL document AST and the arena
//! context that owns it. The AST covers the full October 2021 language: executable
//! documents — the operations and fragments clients send to a GraphQL service — as
//! well as type-system definitions and extensions.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its two main
//! parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - the node structures themselves, rooted in [`Document`]
//!
//! The following workflow describes the minimum that's done using this module and
//! while an AST Context is active in the given scope.
//!
//! ```
//! use graphql_parse::ast::*;
//! use graphql_parse::parser::parse;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = parse(&ctx, "{ field }").unwrap();
//!
//! assert_eq!(ast.definitions.len(), 1);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod type_system;

pub use ast::*;
pub use type_system::*;
