use super::super::ErrorReporter;
use crate::ast::Arguments;
use crate::walk::Events;
use hashbrown::HashSet;

fn check_arguments(reporter: ErrorReporter, arguments: &Arguments) {
    let mut seen = HashSet::new();
    for argument in arguments {
        if !seen.insert(argument.name) {
            reporter.report(format!(
                "There can be only one argument named \"{}\".",
                argument.name
            ));
        }
    }
}

/// Validates that no field or directive is passed the same argument more than once.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
pub fn unique_argument_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    events.on_field(move |_, _, _, field| check_arguments(reporter, &field.arguments));
    events.on_directive(move |_, _, _, directive, _| check_arguments(reporter, &directive.arguments));
}
