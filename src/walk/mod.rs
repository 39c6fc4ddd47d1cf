//! # Walking GraphQL Documents against a Schema
//!
//! The `graphql_walker::walk` module traverses a [Document](crate::ast::Document) once while
//! resolving every node against a [Schema](crate::schema::Schema), and calls observers that are
//! registered on an [`Events`] registry for each kind of node it encounters. Observers receive the
//! node together with its resolved context, e.g. the type a field is selected on and the field's
//! definition, or the type that's expected for a value. Any of these may be absent when the
//! document refers to something the schema doesn't define, and observers decide whether that's
//! worth reporting.
//!
//! The walk visits every operation in document order and then every fragment definition in
//! document order. Below each of these roots it walks depth-first and calls observers before
//! descending into a node's children, with two exceptions: a field's directives are visited after
//! the field's selection set, and `on_operation_leave` observers are called after an operation's
//! children. Fragment spreads are followed into the fragment they refer to, but each fragment is
//! only walked into once per root, which means that cyclic fragments can't cause the walk to
//! recurse endlessly.
//!
//! In this example we'll count all fields that the schema doesn't know about:
//!
//! ```
//! use graphql_walker::{ast::*, schema::*, walk::*};
//! use std::cell::Cell;
//!
//! let ctx = ASTContext::new();
//! let mut schema = Schema::new(&ctx);
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "hello", ctx.alloc(Type::named("String"))));
//! schema.set_query_type(ctx.alloc(query));
//!
//! let mut operation = OperationDefinition::new(&ctx, OperationKind::Query, None);
//! operation.selection_set.selections.push(Field::new_leaf(&ctx, "hello").into());
//! operation.selection_set.selections.push(Field::new_leaf(&ctx, "goodbye").into());
//! let mut document = Document::default_in(&ctx.arena);
//! document.definitions.push(operation.into());
//! let document = ctx.alloc(document);
//!
//! let unknown_fields = Cell::new(0);
//! let mut events = Events::new();
//! events.on_field(|_walker, _parent_type, field_def, _field| {
//!     if field_def.is_none() {
//!         unknown_fields.set(unknown_fields.get() + 1);
//!     }
//! });
//!
//! walk(&schema, document, &events);
//! assert_eq!(unknown_fields.get(), 1);
//! ```

mod events;
mod walker;


pub use events::*;
pub use walker::{walk, Walker};
