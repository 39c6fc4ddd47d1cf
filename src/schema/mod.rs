//! # Using Schema Definitions
//!
//! The `graphql_walker::schema` module contains the client-side schema that documents are
//! walked against. The schema only carries type information: the named types, their fields and
//! arguments, the directives it defines, and which object types are the roots of operations.
//!
//! Every schema starts out with GraphQL's built-in scalars and the `@skip` and `@include`
//! directives, and is then filled in by its builder:
//!
//! ```
//! use graphql_walker::{ast::*, schema::*};
//!
//! let ctx = ASTContext::new();
//! let mut schema = Schema::new(&ctx);
//!
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "hello", ctx.alloc(Type::named("String"))));
//! schema.set_query_type(ctx.alloc(query));
//!
//! let query = schema.get_type("Query").unwrap();
//! assert_eq!(query.field("hello").unwrap().output_type.name(), "String");
//! ```
//!
//! [More information on the Schema struct.](Schema)

mod directive;
#[allow(clippy::module_inception)]
pub mod schema;

pub use directive::*;
pub use schema::*;
