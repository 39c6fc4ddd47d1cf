use super::super::ErrorReporter;
use crate::walk::Events;
use hashbrown::HashSet;
use std::cell::RefCell;

/// Validates that no two named operations in a document share the same name.
///
/// Anonymous operations are left to [`lone_anonymous_operation`](super::lone_anonymous_operation).
/// [Reference](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
pub fn unique_operation_names<'a, 'v>(
    events: &mut Events<'a, 'v>,
    reporter: ErrorReporter<'a, 'v>,
) {
    let seen: RefCell<HashSet<&'a str>> = RefCell::default();
    events.on_operation(move |_, operation| {
        let Some(name) = operation.name else {
            return;
        };
        if !seen.borrow_mut().insert(name.name) {
            reporter.report(format!(
                "There can be only one operation named \"{}\".",
                name.name
            ));
        }
    });
}
