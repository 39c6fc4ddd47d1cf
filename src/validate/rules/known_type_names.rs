use super::super::{did_you_mean, suggestion_list, ErrorReporter};
use crate::ast::NamedType;
use crate::walk::Events;

/// Validates that variable types and type conditions refer to types the schema defines.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence)
pub fn known_type_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_variable(move |_, of_type, type_def, _| {
        if type_def.is_none() {
            reporter.report(format!("Unknown type \"{}\".", of_type.name()));
        }
    });

    events.on_inline_fragment(move |walker, _, fragment| {
        let Some(NamedType { name }) = fragment.type_condition else {
            return;
        };
        if !name.is_empty() && walker.schema().get_type(name).is_none() {
            reporter.report(format!("Unknown type \"{}\".", name));
        }
    });

    events.on_fragment(move |walker, type_def, fragment| {
        if type_def.is_some() {
            return;
        }
        let name = fragment.type_condition.name;
        let suggestions = suggestion_list(name, walker.schema().type_names());
        reporter.report(format!(
            "Unknown type \"{}\".{}",
            name,
            did_you_mean(&suggestions)
        ));
    });
}
