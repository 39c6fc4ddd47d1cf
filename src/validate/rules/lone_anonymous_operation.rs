use super::super::ErrorReporter;
use crate::walk::Events;

/// Validates that an anonymous operation is the only operation in its document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
pub fn lone_anonymous_operation<'a, 'v>(
    events: &mut Events<'a, 'v>,
    reporter: ErrorReporter<'a, 'v>,
) {
    events.on_operation(move |walker, operation| {
        if operation.name.is_none() && walker.document().operations().count() > 1 {
            reporter.report("This anonymous operation must be the only defined operation.");
        }
    });
}
