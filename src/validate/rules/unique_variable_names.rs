use super::super::ErrorReporter;
use crate::walk::Events;
use hashbrown::HashSet;

/// Validates that no operation defines the same variable more than once.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Variable-Uniqueness)
pub fn unique_variable_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_operation(move |_, operation| {
        let mut seen = HashSet::new();
        for var_def in &operation.variable_definitions {
            let name = var_def.variable.name;
            if !seen.insert(name) {
                reporter.report(format!("There can be only one variable named \"${}\".", name));
            }
        }
    });
}
