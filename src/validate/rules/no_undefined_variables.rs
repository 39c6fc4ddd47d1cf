use super::super::ErrorReporter;
use super::for_each_variable;
use crate::walk::Events;
use hashbrown::HashSet;
use std::cell::RefCell;
use std::rc::Rc;

struct OperationScope<'a> {
    name: Option<&'a str>,
    defined: HashSet<&'a str>,
}

/// Validates that every variable used in an operation, including the fragments it spreads, is
/// defined by that operation.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined)
pub fn no_undefined_variables<'a, 'v>(
    events: &mut Events<'a, 'v>,
    reporter: ErrorReporter<'a, 'v>,
) {
    let scope: Rc<RefCell<Option<OperationScope<'a>>>> = Rc::default();

    let operation_scope = scope.clone();
    events.on_operation(move |_, operation| {
        let defined = operation
            .variable_definitions
            .children
            .iter()
            .map(|var_def| var_def.variable.name)
            .collect();
        *operation_scope.borrow_mut() = Some(OperationScope {
            name: operation.name.map(|name| name.name),
            defined,
        });
    });

    // Fragments walked on their own are only checked in the context of the operations
    let fragment_scope = scope.clone();
    events.on_fragment(move |_, _, _| {
        *fragment_scope.borrow_mut() = None;
    });

    events.on_value(move |_, _, _, value| {
        let scope = scope.borrow();
        let Some(scope) = scope.as_ref() else {
            return;
        };
        for_each_variable(value, &mut |name| {
            if scope.defined.contains(name) {
                return;
            }
            match scope.name {
                Some(operation) => reporter.report(format!(
                    "Variable \"${}\" is not defined by operation \"{}\".",
                    name, operation
                )),
                None => reporter.report(format!("Variable \"${}\" is not defined.", name)),
            }
        });
    });
}
