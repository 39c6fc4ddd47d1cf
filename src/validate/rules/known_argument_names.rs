use super::super::{did_you_mean, suggestion_list, ErrorReporter};
use crate::walk::Events;

/// Validates that fields and directives are only passed arguments that they define.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Names)
pub fn known_argument_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_field(move |_, parent_type, field_def, field| {
        let Some(field_def) = field_def else {
            return;
        };
        for argument in &field.arguments {
            if field_def.get_argument(argument.name).is_some() {
                continue;
            }
            let field_path = match parent_type {
                Some(parent_type) => format!("{}.{}", parent_type.name(), field.name),
                None => field.name.to_string(),
            };
            let suggestions = suggestion_list(argument.name, field_def.arguments.keys());
            reporter.report(format!(
                "Unknown argument \"{}\" on field \"{}\".{}",
                argument.name,
                field_path,
                did_you_mean(&suggestions)
            ));
        }
    });

    events.on_directive(move |_, _, directive_def, directive, _| {
        let Some(directive_def) = directive_def else {
            return;
        };
        for argument in &directive.arguments {
            if directive_def.get_argument(argument.name).is_some() {
                continue;
            }
            let suggestions = suggestion_list(argument.name, directive_def.arguments.keys());
            reporter.report(format!(
                "Unknown argument \"{}\" on directive \"@{}\".{}",
                argument.name,
                directive.name,
                did_you_mean(&suggestions)
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    #[test]
    fn known_arguments() {
        let ctx = ASTContext::new();
        let pet = Field {
            arguments: arguments(&ctx, [("id", string("1"))]),
            directives: directives(&ctx, [directive(&ctx, "cached", [("ttl", int("60"))])]),
            ..field_node(&ctx, "pet", [leaf(&ctx, "name")])
        };
        let document = document(&ctx, [query(&ctx, [Selection::Field(pet)])]);
        assert!(rule_errors(&ctx, document, known_argument_names).is_empty());
    }

    #[test]
    fn unknown_arguments() {
        let ctx = ASTContext::new();
        let pet = Field {
            arguments: arguments(&ctx, [("id", string("1")), ("idd", string("2"))]),
            directives: directives(
                &ctx,
                [
                    directive(&ctx, "cached", [("tll", int("60"))]),
                    directive(&ctx, "unknown", [("arg", int("1"))]),
                ],
            ),
            ..field_node(&ctx, "pet", [leaf(&ctx, "name")])
        };
        let unknown = Field {
            arguments: arguments(&ctx, [("id", string("1"))]),
            ..Field::new_leaf(&ctx, "unknown")
        };
        let document = document(
            &ctx,
            [query(&ctx, [Selection::Field(pet), Selection::Field(unknown)])],
        );
        assert_eq!(
            rule_errors(&ctx, document, known_argument_names),
            [
                "Unknown argument \"idd\" on field \"Query.pet\". Did you mean \"id\"?",
                "Unknown argument \"tll\" on directive \"@cached\". Did you mean \"ttl\"?",
            ]
        );
    }
}
