use super::super::ErrorReporter;
use crate::walk::Events;

/// Validates that all directives are defined by the schema and are placed on locations they
/// allow.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
pub fn known_directives<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_directive(move |_, _, directive_def, directive, location| match directive_def {
        None => reporter.report(format!("Unknown directive \"@{}\".", directive.name)),
        Some(directive_def) if !directive_def.allows_location(location) => {
            reporter.report(format!(
                "Directive \"@{}\" may not be used on {}.",
                directive.name, location
            ));
        }
        Some(_) => {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    #[test]
    fn directives_on_allowed_locations() {
        let ctx = ASTContext::new();
        let name = Field {
            directives: directives(&ctx, [directive(&ctx, "skip", [("if", boolean(true))])]),
            ..Field::new_leaf(&ctx, "name")
        };
        let mut operation = operation_node(
            &ctx,
            OperationKind::Query,
            Some("Cached"),
            [field(&ctx, "pet", [Selection::Field(name)])],
        );
        operation.directives = directives(&ctx, [Directive::new(&ctx, "cached")]);
        let document = document(&ctx, [Definition::Operation(operation)]);
        assert!(rule_errors(&ctx, document, known_directives).is_empty());
    }

    #[test]
    fn unknown_or_misplaced_directives() {
        let ctx = ASTContext::new();
        let pet = Field {
            directives: directives(
                &ctx,
                [Directive::new(&ctx, "cached"), Directive::new(&ctx, "nope")],
            ),
            ..field_node(&ctx, "pet", [leaf(&ctx, "name")])
        };
        let mut operation =
            operation_node(&ctx, OperationKind::Mutation, None, [Selection::Field(pet)]);
        operation.directives = directives(&ctx, [Directive::new(&ctx, "skip")]);
        let names = FragmentDefinition {
            directives: directives(&ctx, [Directive::new(&ctx, "cached")]),
            ..fragment_node(&ctx, "Names", "Pet", [leaf(&ctx, "name")])
        };
        let document = document(
            &ctx,
            [Definition::Operation(operation), Definition::Fragment(names)],
        );
        assert_eq!(
            rule_errors(&ctx, document, known_directives),
            [
                "Directive \"@skip\" may not be used on MUTATION.",
                "Unknown directive \"@nope\".",
                "Directive \"@cached\" may not be used on FRAGMENT_DEFINITION.",
            ]
        );
    }
}
