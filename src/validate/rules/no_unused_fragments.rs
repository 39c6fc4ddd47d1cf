use super::super::ErrorReporter;
use crate::walk::Events;
use hashbrown::HashSet;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct FragmentUsage<'a> {
    walking_fragments: bool,
    spread_fragments: HashSet<&'a str>,
}

/// Validates that every fragment is spread by at least one operation, either directly or
/// through other fragments.
///
/// Operations are walked before any fragment, so every spread that's seen before the first
/// fragment definition is reachable from an operation.
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used)
pub fn no_unused_fragments<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    let usage: Rc<RefCell<FragmentUsage<'a>>> = Rc::default();

    let spread_usage = usage.clone();
    events.on_fragment_spread(move |_, _, _, spread| {
        let mut usage = spread_usage.borrow_mut();
        if !usage.walking_fragments {
            usage.spread_fragments.insert(spread.name.name);
        }
    });

    events.on_fragment(move |_, _, fragment| {
        let mut usage = usage.borrow_mut();
        usage.walking_fragments = true;
        if !usage.spread_fragments.contains(fragment.name.name) {
            reporter.report(format!("Fragment \"{}\" is never used.", fragment.name.name));
        }
    });
}
