use super::super::ErrorReporter;
use crate::walk::Events;

/// Validates that every fragment spread refers to a fragment defined in the document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
pub fn known_fragment_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_fragment_spread(move |_, _, fragment, spread| {
        if fragment.is_none() {
            reporter.report(format!("Unknown fragment \"{}\".", spread.name.name));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    #[test]
    fn defined_fragments() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(&ctx, [field(&ctx, "pet", [spread(&ctx, "Names")])]),
                fragment(&ctx, "Names", "Pet", [leaf(&ctx, "name")]),
            ],
        );
        assert!(rule_errors(&ctx, document, known_fragment_names).is_empty());
    }

    #[test]
    fn undefined_fragments() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(
                    &ctx,
                    [field(&ctx, "pet", [spread(&ctx, "Names"), spread(&ctx, "Missing")])],
                ),
                fragment(&ctx, "Names", "Pet", [spread(&ctx, "Other")]),
            ],
        );
        assert_eq!(
            rule_errors(&ctx, document, known_fragment_names),
            ["Unknown fragment \"Other\".", "Unknown fragment \"Missing\"."]
        );
    }
}
