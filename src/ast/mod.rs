//! # GraphQL Query Language AST
//!
//! The `graphql_walker::ast` module contains the GraphQL query language AST that the
//! [walker](crate::walk) traverses. The AST implemented in this crate is specialized to only
//! implement the client-side GraphQL query language that clients use to make requests to a
//! GraphQL service.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! All nodes are allocated in the arena of an [`ASTContext`], which defines the lifetime of an AST.
//! This crate doesn't parse source text, so documents are either handed over from a parser
//! or built up using the nodes' constructors:
//!
//! ```
//! use graphql_walker::ast::*;
//!
//! let ctx = ASTContext::new();
//!
//! let mut pet = Field::new_leaf(&ctx, "pet");
//! pet.selection_set.selections.push(Field::new_leaf(&ctx, "name").into());
//!
//! let mut query = OperationDefinition::new(&ctx, OperationKind::Query, None);
//! query.selection_set.selections.push(pet.into());
//!
//! let mut document = Document::default_in(&ctx.arena);
//! document.definitions.push(query.into());
//! assert_eq!(document.operations().count(), 1);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;

pub use ast::*;
