use super::super::ErrorReporter;
use super::for_each_variable;
use crate::walk::Events;
use hashbrown::HashSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Validates that every variable an operation defines is used by the operation or by the
/// fragments it spreads.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variables-Used)
pub fn no_unused_variables<'a, 'v>(events: &mut Events<'a, 'v>, reporter: ErrorReporter<'a, 'v>) {
    let used_variables: Rc<RefCell<HashSet<&'a str>>> = Rc::default();

    let used = used_variables.clone();
    events.on_operation(move |_, _| used.borrow_mut().clear());

    let used = used_variables.clone();
    events.on_value(move |_, _, _, value| {
        let mut used = used.borrow_mut();
        for_each_variable(value, &mut |name| {
            used.insert(name);
        });
    });

    events.on_operation_leave(move |_, operation| {
        let used = used_variables.borrow();
        for var_def in &operation.variable_definitions {
            let name = var_def.variable.name;
            if used.contains(name) {
                continue;
            }
            match operation.name {
                Some(operation_name) => reporter.report(format!(
                    "Variable \"${}\" is never used in operation \"{}\".",
                    name, operation_name.name
                )),
                None => reporter.report(format!("Variable \"${}\" is never used.", name)),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::fixtures::*;

    fn operation_with_variables<'a>(
        ctx: &'a ASTContext,
        name: Option<&'a str>,
        variables: &[&'a str],
    ) -> OperationDefinition<'a> {
        let pet = Field {
            arguments: arguments(ctx, [("id", variable("a"))]),
            ..field_node(ctx, "pet", [spread(ctx, "Owner")])
        };
        let mut operation = operation_node(ctx, OperationKind::Query, name, [Selection::Field(pet)]);
        for &name in variables {
            operation
                .variable_definitions
                .children
                .push(VariableDefinition::new(ctx, name, Type::named("Int")));
        }
        operation
    }

    fn owner_fragment(ctx: &ASTContext) -> Definition<'_> {
        let pets = Field {
            arguments: arguments(ctx, [("first", variable("b"))]),
            ..field_node(ctx, "pets", [leaf(ctx, "name")])
        };
        fragment(ctx, "Owner", "Pet", [field(ctx, "owner", [Selection::Field(pets)])])
    }

    #[test]
    fn used_variables() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                Definition::Operation(operation_with_variables(&ctx, Some("Q"), &["a", "b"])),
                owner_fragment(&ctx),
            ],
        );
        assert!(rule_errors(&ctx, document, no_unused_variables).is_empty());
    }

    #[test]
    fn unused_variables() {
        let ctx = ASTContext::new();
        let document = document(
            &ctx,
            [
                Definition::Operation(operation_with_variables(&ctx, Some("Q"), &["a", "b", "c"])),
                Definition::Operation(operation_with_variables(&ctx, None, &["a", "b", "d"])),
                owner_fragment(&ctx),
            ],
        );
        assert_eq!(
            rule_errors(&ctx, document, no_unused_variables),
            [
                "Variable \"$c\" is never used in operation \"Q\".",
                "Variable \"$d\" is never used.",
            ]
        );
    }
}
