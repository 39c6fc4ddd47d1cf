use super::ast::*;
use bumpalo::collections::Vec;

/// Trait for AST nodes that have an empty default, which must be allocated in an arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_ctx: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

macro_rules! list_node {
    ($node:ident, $field:ident, $item:ident) => {
        impl<'a> DefaultIn<'a> for $node<'a> {
            #[inline]
            fn default_in(arena: &'a bumpalo::Bump) -> Self {
                $node {
                    $field: Vec::new_in(arena),
                }
            }
        }

        impl<'a, 'b> IntoIterator for &'b $node<'a> {
            type Item = &'b $item<'a>;
            type IntoIter = std::slice::Iter<'b, $item<'a>>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.$field.iter()
            }
        }
    };
}

list_node!(Document, definitions, Definition);
list_node!(VariableDefinitions, children, VariableDefinition);
list_node!(SelectionSet, selections, Selection);
list_node!(Directives, children, Directive);
list_node!(Arguments, children, Argument);
list_node!(ObjectValue, children, ObjectField);
list_node!(ListValue, children, Value);
