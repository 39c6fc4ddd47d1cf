use super::super::{did_you_mean, quoted_or_list, suggestion_list, ErrorReporter};
use crate::schema::SchemaType;
use crate::walk::Events;

/// Validates that every selected field is defined on the type it's selected on.
///
/// When the field is missing on an abstract type, the error suggests the possible types that do
/// define it, and otherwise it suggests similarly named fields.
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
pub fn fields_on_correct_type<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_field(move |walker, parent_type, field_def, field| {
        let Some(parent_type) = parent_type else {
            return;
        };
        if field_def.is_some() {
            return;
        }

        let schema = walker.schema();
        let suggestion = match parent_type {
            SchemaType::Interface(_) | SchemaType::Union(_) => {
                let possible_types: Vec<&str> = schema
                    .possible_type_names(parent_type)
                    .into_iter()
                    .filter(|name| {
                        schema
                            .get_type(name)
                            .and_then(|possible_type| possible_type.field(field.name))
                            .is_some()
                    })
                    .collect();
                if possible_types.is_empty() {
                    String::new()
                } else {
                    format!(
                        " Did you mean to use an inline fragment on {}?",
                        quoted_or_list(&possible_types)
                    )
                }
            }
            _ => did_you_mean(&suggestion_list(field.name, parent_type.field_names())),
        };

        reporter.report(format!(
            "Cannot query field \"{}\" on type \"{}\".{}",
            field.name,
            parent_type.name(),
            suggestion
        ));
    });
}
