use super::walker::Walker;
use crate::ast::*;
use crate::schema::{DirectiveLocation, SchemaDirective, SchemaField, SchemaType};
use std::fmt;

pub type OperationObserver<'a, 'e> = Box<dyn Fn(&Walker<'a>, &'a OperationDefinition<'a>) + 'e>;

pub type FieldObserver<'a, 'e> = Box<
    dyn Fn(&Walker<'a>, Option<SchemaType<'a>>, Option<&'a SchemaField<'a>>, &'a Field<'a>) + 'e,
>;

pub type FragmentObserver<'a, 'e> =
    Box<dyn Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a FragmentDefinition<'a>) + 'e>;

pub type InlineFragmentObserver<'a, 'e> =
    Box<dyn Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a InlineFragment<'a>) + 'e>;

pub type FragmentSpreadObserver<'a, 'e> = Box<
    dyn Fn(
            &Walker<'a>,
            Option<SchemaType<'a>>,
            Option<&'a FragmentDefinition<'a>>,
            &'a FragmentSpread<'a>,
        ) + 'e,
>;

pub type DirectiveObserver<'a, 'e> = Box<
    dyn Fn(
            &Walker<'a>,
            Option<SchemaType<'a>>,
            Option<&'a SchemaDirective<'a>>,
            &'a Directive<'a>,
            DirectiveLocation,
        ) + 'e,
>;

pub type DirectiveListObserver<'a, 'e> = Box<
    dyn Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a Directives<'a>, DirectiveLocation) + 'e,
>;

pub type ArgumentObserver<'a, 'e> = Box<dyn Fn(&Walker<'a>, &'a Argument<'a>) + 'e>;

pub type ValueObserver<'a, 'e> = Box<
    dyn Fn(&Walker<'a>, Option<&'a Type<'a>>, Option<SchemaType<'a>>, &'a Value<'a>) + 'e,
>;

pub type VariableObserver<'a, 'e> = Box<
    dyn Fn(&Walker<'a>, &'a Type<'a>, Option<SchemaType<'a>>, &'a VariableDefinition<'a>) + 'e,
>;

/// A registry of observers that are called while a document is walked.
///
/// Observers are grouped by the kind of AST node they observe. Registering an observer appends
/// it to the list of its kind and the walker calls each list in registration order. Registering
/// the same observer twice means it's called twice. There's no way to unregister an observer.
///
/// Observers only get shared access to the walk, so any state they keep or any errors they
/// record must be held in a [`Cell`](std::cell::Cell) or [`RefCell`](std::cell::RefCell) that
/// they capture. The `'e` lifetime bounds what observers may borrow from their surroundings.
///
/// The [`Walker`] that's passed to every observer carries the schema and the document that are
/// being walked.
#[derive(Default)]
pub struct Events<'a, 'e> {
    pub(crate) operation: Vec<OperationObserver<'a, 'e>>,
    pub(crate) operation_leave: Vec<OperationObserver<'a, 'e>>,
    pub(crate) field: Vec<FieldObserver<'a, 'e>>,
    pub(crate) fragment: Vec<FragmentObserver<'a, 'e>>,
    pub(crate) inline_fragment: Vec<InlineFragmentObserver<'a, 'e>>,
    pub(crate) fragment_spread: Vec<FragmentSpreadObserver<'a, 'e>>,
    pub(crate) directive: Vec<DirectiveObserver<'a, 'e>>,
    pub(crate) directive_list: Vec<DirectiveListObserver<'a, 'e>>,
    pub(crate) argument: Vec<ArgumentObserver<'a, 'e>>,
    pub(crate) value: Vec<ValueObserver<'a, 'e>>,
    pub(crate) variable: Vec<VariableObserver<'a, 'e>>,
}

impl<'a, 'e> Events<'a, 'e> {
    /// Create an empty registry without any observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with every [`OperationDefinition`] before any of its children are walked.
    pub fn on_operation<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, &'a OperationDefinition<'a>) + 'e,
    {
        self.operation.push(Box::new(observer));
    }

    /// Called with every [`OperationDefinition`] after all of its children were walked.
    pub fn on_operation_leave<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, &'a OperationDefinition<'a>) + 'e,
    {
        self.operation_leave.push(Box::new(observer));
    }

    /// Called with every [`Field`], the type it's selected on, and the field's definition on that
    /// type. `__typename` always resolves to a definition of type `String`.
    pub fn on_field<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, Option<SchemaType<'a>>, Option<&'a SchemaField<'a>>, &'a Field<'a>)
            + 'e,
    {
        self.field.push(Box::new(observer));
    }

    /// Called with every [`FragmentDefinition`] and the type of its type condition.
    ///
    /// This is only called once per definition, when the fragment is walked on its own, and
    /// never for the places it's spread into.
    pub fn on_fragment<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a FragmentDefinition<'a>) + 'e,
    {
        self.fragment.push(Box::new(observer));
    }

    /// Called with every [`InlineFragment`] and the type it's placed on.
    pub fn on_inline_fragment<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a InlineFragment<'a>) + 'e,
    {
        self.inline_fragment.push(Box::new(observer));
    }

    /// Called with every [`FragmentSpread`], the type it's placed on, and the fragment it refers
    /// to. This is called every time a spread is encountered, even when the fragment it spreads
    /// isn't walked into again.
    pub fn on_fragment_spread<F>(&mut self, observer: F)
    where
        F: Fn(
                &Walker<'a>,
                Option<SchemaType<'a>>,
                Option<&'a FragmentDefinition<'a>>,
                &'a FragmentSpread<'a>,
            ) + 'e,
    {
        self.fragment_spread.push(Box::new(observer));
    }

    /// Called with every [`Directive`], its definition, and the location it annotates.
    pub fn on_directive<F>(&mut self, observer: F)
    where
        F: Fn(
                &Walker<'a>,
                Option<SchemaType<'a>>,
                Option<&'a SchemaDirective<'a>>,
                &'a Directive<'a>,
                DirectiveLocation,
            ) + 'e,
    {
        self.directive.push(Box::new(observer));
    }

    /// Called once with every list of [`Directives`], including empty ones, before the
    /// directives in it are visited.
    pub fn on_directive_list<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, Option<SchemaType<'a>>, &'a Directives<'a>, DirectiveLocation) + 'e,
    {
        self.directive_list.push(Box::new(observer));
    }

    /// Called with every [`Argument`] of a field or directive.
    pub fn on_argument<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, &'a Argument<'a>) + 'e,
    {
        self.argument.push(Box::new(observer));
    }

    /// Called with every [`Value`], including the values nested in object values, along with the
    /// type that's expected in its place and that type's definition.
    pub fn on_value<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, Option<&'a Type<'a>>, Option<SchemaType<'a>>, &'a Value<'a>) + 'e,
    {
        self.value.push(Box::new(observer));
    }

    /// Called with every [`VariableDefinition`], its declared type, and that type's definition.
    pub fn on_variable<F>(&mut self, observer: F)
    where
        F: Fn(&Walker<'a>, &'a Type<'a>, Option<SchemaType<'a>>, &'a VariableDefinition<'a>)
            + 'e,
    {
        self.variable.push(Box::new(observer));
    }

    /// Returns the total number of registered observers.
    pub fn len(&self) -> usize {
        self.operation.len()
            + self.operation_leave.len()
            + self.field.len()
            + self.fragment.len()
            + self.inline_fragment.len()
            + self.fragment_spread.len()
            + self.directive.len()
            + self.directive_list.len()
            + self.argument.len()
            + self.value.len()
            + self.variable.len()
    }

    /// Checks whether no observers have been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, 'e> fmt::Debug for Events<'a, 'e> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("operation", &self.operation.len())
            .field("operation_leave", &self.operation_leave.len())
            .field("field", &self.field.len())
            .field("fragment", &self.fragment.len())
            .field("inline_fragment", &self.inline_fragment.len())
            .field("fragment_spread", &self.fragment_spread.len())
            .field("directive", &self.directive.len())
            .field("directive_list", &self.directive_list.len())
            .field("argument", &self.argument.len())
            .field("value", &self.value.len())
            .field("variable", &self.variable.len())
            .finish()
    }
}
