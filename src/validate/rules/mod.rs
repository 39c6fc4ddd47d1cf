//! # Built-in Validation Rules
//!
//! Each rule is a plain function which registers its observers on
//! [`Events`](crate::walk::Events) and reports errors through an
//! [`ErrorReporter`](super::ErrorReporter). All rules in this module are part of
//! [`specified_rules`], which is also the [`RuleSet::default`].

use super::RuleSet;
use crate::ast::Value;

mod fields_on_correct_type;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod possible_fragment_spreads;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_operation_names;
mod unique_variable_names;

pub use fields_on_correct_type::*;
pub use known_argument_names::*;
pub use known_directives::*;
pub use known_fragment_names::*;
pub use known_type_names::*;
pub use lone_anonymous_operation::*;
pub use no_fragment_cycles::*;
pub use no_undefined_variables::*;
pub use no_unused_fragments::*;
pub use no_unused_variables::*;
pub use possible_fragment_spreads::*;
pub use unique_argument_names::*;
pub use unique_directives_per_location::*;
pub use unique_fragment_names::*;
pub use unique_operation_names::*;
pub use unique_variable_names::*;

/// Calls `f` with the name of every variable in `value` that the walker doesn't visit separately.
///
/// The walker already visits each field of an object value on its own, but never the items of a
/// list value, so lists are searched in full, including any objects nested inside them.
pub(crate) fn for_each_variable<'a, F: FnMut(&'a str)>(value: &'a Value<'a>, f: &mut F) {
    match value {
        Value::Variable(variable) => f(variable.name),
        Value::List(list) => {
            for item in &list.children {
                for_each_nested_variable(item, f);
            }
        }
        _ => {}
    }
}

fn for_each_nested_variable<'a, F: FnMut(&'a str)>(value: &'a Value<'a>, f: &mut F) {
    match value {
        Value::Variable(variable) => f(variable.name),
        Value::List(list) => {
            for item in &list.children {
                for_each_nested_variable(item, f);
            }
        }
        Value::Object(object) => {
            for field in &object.children {
                for_each_nested_variable(&field.value, f);
            }
        }
        _ => {}
    }
}

/// Returns a [`RuleSet`] with every rule this crate comes with, in alphabetical order.
pub fn specified_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules
        .add_rule("FieldsOnCorrectType", fields_on_correct_type)
        .add_rule("KnownArgumentNames", known_argument_names)
        .add_rule("KnownDirectives", known_directives)
        .add_rule("KnownFragmentNames", known_fragment_names)
        .add_rule("KnownTypeNames", known_type_names)
        .add_rule("LoneAnonymousOperation", lone_anonymous_operation)
        .add_rule("NoFragmentCycles", no_fragment_cycles)
        .add_rule("NoUndefinedVariables", no_undefined_variables)
        .add_rule("NoUnusedFragments", no_unused_fragments)
        .add_rule("NoUnusedVariables", no_unused_variables)
        .add_rule("PossibleFragmentSpreads", possible_fragment_spreads)
        .add_rule("UniqueArgumentNames", unique_argument_names)
        .add_rule("UniqueDirectivesPerLocation", unique_directives_per_location)
        .add_rule("UniqueFragmentNames", unique_fragment_names)
        .add_rule("UniqueOperationNames", unique_operation_names)
        .add_rule("UniqueVariableNames", unique_variable_names);
    rules
}
