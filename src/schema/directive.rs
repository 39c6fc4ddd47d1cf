use super::schema::{InputFieldMap, SchemaInputField};
use crate::ast::{ASTContext, OperationKind};
use bumpalo::collections::Vec;
use hashbrown::HashMap;
use std::fmt;

/// The places in an executable document that a directive may annotate.
///
/// The [walker](crate::walk) reports one of these alongside every directive it visits, so that
/// rules can compare it against a [SchemaDirective]'s allowed locations.
/// [Reference](https://spec.graphql.org/October2021/#ExecutableDirectiveLocation)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
}

impl From<OperationKind> for DirectiveLocation {
    #[inline]
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveLocation::Query => f.write_str("QUERY"),
            DirectiveLocation::Mutation => f.write_str("MUTATION"),
            DirectiveLocation::Subscription => f.write_str("SUBSCRIPTION"),
            DirectiveLocation::Field => f.write_str("FIELD"),
            DirectiveLocation::FragmentDefinition => f.write_str("FRAGMENT_DEFINITION"),
            DirectiveLocation::FragmentSpread => f.write_str("FRAGMENT_SPREAD"),
            DirectiveLocation::InlineFragment => f.write_str("INLINE_FRAGMENT"),
            DirectiveLocation::VariableDefinition => f.write_str("VARIABLE_DEFINITION"),
        }
    }
}

/// A Directive definition.
///
/// Directives declare the arguments they accept and the locations they may be placed on.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone)]
pub struct SchemaDirective<'a> {
    pub name: &'a str,
    pub arguments: InputFieldMap<'a>,
    pub locations: Vec<'a, DirectiveLocation>,
    pub is_repeatable: bool,
}

impl<'a> SchemaDirective<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaDirective {
            name,
            arguments: HashMap::new_in(&ctx.arena),
            locations: Vec::new_in(&ctx.arena),
            is_repeatable: false,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }

    pub fn add_location(&mut self, location: DirectiveLocation) {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
    }

    /// Checks whether this directive may be placed on the given location.
    #[inline]
    pub fn allows_location(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}
