//! # Validation Rules for GraphQL ASTs
//!
//! This module validates GraphQL Query Language documents against a
//! [Schema](crate::schema::Schema). Every rule registers observers on the [walk](crate::walk)
//! module's [`Events`](crate::walk::Events), so any number of rules are checked in a single walk
//! over a document.
//!
//! The rules this module comes with are grouped into [`specified_rules`](rules::specified_rules),
//! which is also the [`RuleSet::default`]:
//!
//! - [`rules::fields_on_correct_type`]: validates that selected fields exist on their parent type
//! - [`rules::known_argument_names`]: validates that arguments are defined on their field or directive
//! - [`rules::known_directives`]: validates that directives are defined and placed where they're allowed
//! - [`rules::known_fragment_names`]: validates that all spread fragments are defined
//! - [`rules::known_type_names`]: validates that variables and type conditions refer to known types
//! - [`rules::lone_anonymous_operation`]: validates that a document only contains a single anonymous operation
//! - [`rules::no_fragment_cycles`]: validates that no fragment is spread in on itself
//! - [`rules::no_undefined_variables`]: checks that all used variables are defined per operation
//! - [`rules::no_unused_fragments`]: validates that all fragments in a document are used at least once
//! - [`rules::no_unused_variables`]: checks that all defined variables are used per operation
//! - [`rules::possible_fragment_spreads`]: checks that fragments are only spread where their type may apply
//! - [`rules::unique_argument_names`]: checks that no argument is passed twice
//! - [`rules::unique_directives_per_location`]: checks that non-repeatable directives are only placed once
//! - [`rules::unique_fragment_names`]: checks that no fragments share the same name
//! - [`rules::unique_operation_names`]: checks that no operations share the same name
//! - [`rules::unique_variable_names`]: checks that no variables share the same name
//!
//! A rule is a function that receives the [`Events`](crate::walk::Events) registry and an
//! [`ErrorReporter`]. Errors are collected on a [`ValidationContext`], tagged with the name of the
//! rule that has reported them, and folded into a single [Error](crate::error::Error) once the
//! walk is done.
//!
//! For example, this runs all default rules on a document:
//!
//! ```
//! use graphql_walker::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let mut schema = Schema::new(&ctx);
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "hello", ctx.alloc(Type::named("String"))));
//! schema.set_query_type(ctx.alloc(query));
//!
//! let mut operation = OperationDefinition::new(&ctx, OperationKind::Query, None);
//! operation.selection_set.selections.push(Field::new_leaf(&ctx, "hello").into());
//! let mut document = Document::default_in(&ctx.arena);
//! document.definitions.push(operation.into());
//! let document = ctx.alloc(document);
//!
//! document.validate(&ctx, &schema).unwrap();
//! ```
//!
//! Custom rules are added to a [`RuleSet`] and run with [`ValidateNode::validate_with`] or
//! [`collect_errors`]:
//!
//! ```
//! use graphql_walker::{ast::*, schema::*, validate::*, walk::Events};
//!
//! fn no_mutations<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
//!     events.on_operation(move |_, operation| {
//!         if operation.operation == OperationKind::Mutation {
//!             reporter.report("Mutations aren't allowed.");
//!         }
//!     });
//! }
//!
//! let ctx = ASTContext::new();
//! let schema = Schema::new(&ctx);
//! let mut document = Document::default_in(&ctx.arena);
//! let operation = OperationDefinition::new(&ctx, OperationKind::Mutation, None);
//! document.definitions.push(operation.into());
//! let document = ctx.alloc(document);
//!
//! let mut rules = RuleSet::new();
//! rules.add_rule("NoMutations", no_mutations);
//! let errors = collect_errors(&ctx, &schema, document, &rules);
//! assert_eq!(errors[0].rule, "NoMutations");
//! assert_eq!(errors[0].message, "Mutations aren't allowed.");
//! ```

#[allow(clippy::module_inception)]
mod validate;

mod context;
mod suggestion;

pub mod rules;
pub use context::{ErrorReporter, ValidationContext, ValidationError};
pub use suggestion::*;
pub use validate::*;
