use super::super::ErrorReporter;
use crate::walk::Events;
use hashbrown::HashSet;
use std::cell::RefCell;

/// Validates that no two fragments in a document share the same name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness)
pub fn unique_fragment_names<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    let seen: RefCell<HashSet<&'a str>> = RefCell::default();
    events.on_fragment(move |_, _, fragment| {
        let name = fragment.name.name;
        if !seen.borrow_mut().insert(name) {
            reporter.report(format!("There can be only one fragment named \"{}\".", name));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    #[test]
    fn unique_fragments() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(&ctx, [field(&ctx, "pet", [spread(&ctx, "A"), spread(&ctx, "B")])]),
                fragment(&ctx, "A", "Pet", [leaf(&ctx, "name")]),
                fragment(&ctx, "B", "Pet", [leaf(&ctx, "id")]),
            ],
        );
        assert!(rule_errors(&ctx, document, unique_fragment_names).is_empty());
    }

    #[test]
    fn duplicate_fragments() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(&ctx, [field(&ctx, "pet", [spread(&ctx, "A")])]),
                fragment(&ctx, "A", "Pet", [leaf(&ctx, "name")]),
                fragment(&ctx, "A", "Pet", [leaf(&ctx, "id")]),
            ],
        );
        assert_eq!(
            rule_errors(&ctx, document, unique_fragment_names),
            ["There can be only one fragment named \"A\"."]
        );
    }
}
