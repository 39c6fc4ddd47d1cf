use super::super::ErrorReporter;
use crate::walk::Events;
use std::cell::Cell;
use std::rc::Rc;

/// Validate that a document does not contain fragments that are spread within themselves,
/// creating a loop.
///
/// Every fragment definition is walked as a root of its own, during which every fragment it
/// reaches is expanded once. A fragment is therefore part of a cycle exactly when it's spread
/// while its own definition is being walked.
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles)
pub fn no_fragment_cycles<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    let current_fragment: Rc<Cell<Option<&'a str>>> = Rc::default();

    let current = current_fragment.clone();
    events.on_operation(move |_, _| current.set(None));

    let current = current_fragment.clone();
    events.on_fragment(move |_, _, fragment| current.set(Some(fragment.name.name)));

    events.on_fragment_spread(move |_, _, fragment, spread| {
        if fragment.is_some() && current_fragment.get() == Some(spread.name.name) {
            reporter.report(format!(
                "Cannot spread fragment \"{}\" within itself.",
                spread.name.name
            ));
        }
    });
}
