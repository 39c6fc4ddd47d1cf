use super::super::ErrorReporter;
use crate::ast::NamedType;
use crate::schema::{Schema, SchemaType};
use crate::walk::Events;

fn can_never_overlap<'a>(schema: &Schema<'a>, parent_type: SchemaType<'a>, fragment_type: SchemaType<'a>) -> bool {
    parent_type.is_composite()
        && fragment_type.is_composite()
        && !schema.types_overlap(parent_type, fragment_type)
}

/// Validates that fragments are only spread where their type condition can apply, i.e. where the
/// parent type and the type condition share at least one possible object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible)
pub fn possible_fragment_spreads<'a, 'v>(
    events: &mut Events<'a, 'v>,
    reporter: ErrorReporter<'a, 'v>,
) {
    events.on_inline_fragment(move |walker, parent_type, fragment| {
        let (Some(parent_type), Some(NamedType { name })) = (parent_type, fragment.type_condition)
        else {
            return;
        };
        let Some(fragment_type) = walker.schema().get_type(name) else {
            return;
        };
        if can_never_overlap(walker.schema(), parent_type, fragment_type) {
            reporter.report(format!(
                "Fragment cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                parent_type.name(),
                fragment_type.name()
            ));
        }
    });

    events.on_fragment_spread(move |walker, parent_type, fragment, spread| {
        let (Some(parent_type), Some(fragment)) = (parent_type, fragment) else {
            return;
        };
        let Some(fragment_type) = walker.schema().get_type(fragment.type_condition.name) else {
            return;
        };
        if can_never_overlap(walker.schema(), parent_type, fragment_type) {
            reporter.report(format!(
                "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                spread.name.name,
                parent_type.name(),
                fragment_type.name()
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    #[test]
    fn overlapping_spreads() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(
                    &ctx,
                    [
                        field(
                            &ctx,
                            "pet",
                            [
                                inline(&ctx, Some("Node"), [leaf(&ctx, "id")]),
                                inline(&ctx, None, [leaf(&ctx, "name")]),
                                spread(&ctx, "SearchFields"),
                            ],
                        ),
                        field(&ctx, "search", [inline(&ctx, Some("Human"), [leaf(&ctx, "name")])]),
                        field(&ctx, "node", [spread(&ctx, "SearchFields")]),
                    ],
                ),
                fragment(&ctx, "SearchFields", "SearchResult", [leaf(&ctx, "__typename")]),
            ],
        );
        assert!(rule_errors(&ctx, document, possible_fragment_spreads).is_empty());
    }

    #[test]
    fn impossible_spreads() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                query(
                    &ctx,
                    [field(
                        &ctx,
                        "pet",
                        [
                            inline(&ctx, Some("Human"), [leaf(&ctx, "name")]),
                            spread(&ctx, "HumanFields"),
                            inline(&ctx, Some("Unknown"), [leaf(&ctx, "name")]),
                        ],
                    )],
                ),
                fragment(&ctx, "HumanFields", "Human", [leaf(&ctx, "name")]),
            ],
        );
        assert_eq!(
            rule_errors(&ctx, document, possible_fragment_spreads),
            [
                "Fragment cannot be spread here as objects of type \"Pet\" can never be of type \"Human\".",
                "Fragment \"HumanFields\" cannot be spread here as objects of type \"Pet\" can never be of type \"Human\".",
            ]
        );
    }
}
