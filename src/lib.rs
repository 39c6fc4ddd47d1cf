//! `graphql_walker`
//! =========
//!
//! _Walk GraphQL documents against a schema and validate them in a single pass._
//!
//! The **`graphql_walker`** library follows two goals:
//!
//! - To resolve every node of a GraphQL Query Language document against a client-side schema
//!   while traversing it once
//! - To let any number of observers, like validation rules, share that single traversal
//!
//! Documents and schemas are allocated in an arena that an [`ASTContext`](ast::ASTContext) owns,
//! which means that all nodes and the context that's resolved for them are plain references that
//! observers may hold on to for as long as the context lives.
//!
//! The crate is split into these modules:
//!
//! - [ast]: the AST of GraphQL documents, which other tools parse into or build up directly
//! - [schema]: the type information that documents are resolved against
//! - [walk]: the [`Events`](walk::Events) registry and the walker that calls its observers
//! - [validate]: validation rules built on top of [walk] and a [`RuleSet`](validate::RuleSet) to
//!   run them
//!
//! Walking never fails. Unknown types, fields, fragments, directives, and arguments are handed to
//! observers as absent values, and only [validation](validate) turns them into an
//! [Error](error::Error).
//!
//! [A good place to start learning more about this crate is the `walk` module...](walk)

pub mod ast;
pub mod error;
pub mod schema;
pub mod validate;
pub mod walk;

pub use bumpalo;

#[cfg(test)]
mod fixtures;
