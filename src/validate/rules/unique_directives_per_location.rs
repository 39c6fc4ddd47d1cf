use super::super::ErrorReporter;
use crate::walk::Events;
use hashbrown::HashSet;

/// Validates that directives which aren't repeatable are placed at most once per location.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location)
pub fn unique_directives_per_location<'a, 'v>(
    events: &mut Events<'a, 'v>,
    reporter: ErrorReporter<'a, 'v>,
) {
    events.on_directive_list(move |walker, _, directives, _| {
        let mut seen = HashSet::new();
        for directive in directives {
            let Some(directive_def) = walker.schema().get_directive(directive.name) else {
                continue;
            };
            if !directive_def.is_repeatable && !seen.insert(directive.name) {
                reporter.report(format!(
                    "The directive \"@{}\" can only be used once at this location.",
                    directive.name
                ));
            }
        }
    });
}
