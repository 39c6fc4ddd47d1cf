pub use super::ast_conversion::*;
use bumpalo::collections::Vec;

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of building, storing, walking, and validating an AST its performant and
/// convenient to allocate memory in one chunk for the AST's operations. This context represents
/// the lifetime of an AST and its derivatives, including a [Schema](crate::schema::Schema) that
/// is built alongside it.
///
/// An AST Context in other words represents the memory a query and the operations you perform on
/// it take up. This is efficient since once you're done with the query this entire allocated
/// memory can be dropped all at once.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// AST Node of an integer value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
}

/// AST Node of a floating point value.
///
/// The value is kept in its source representation, so two floats compare equal only when
/// they're spelled the same.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
}

/// AST Node of a string value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
        }
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments and variables may declare a default
/// value. Only [`ObjectValue`]s are walked into by the [walker](crate::walk), since only
/// their fields can be matched up against an input type's fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values
    Null,
}

impl<'a> Value<'a> {
    /// Helper method to return the [`ObjectValue`] if the Value is an `Object`.
    #[inline]
    pub fn object(&self) -> Option<&ObjectValue<'a>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// AST Node for a List of values.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: Vec<'a, Value<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// Objects in GraphQL are keyed input values and serialize to JSON objects. This AST keeps them
/// in the order they were written in.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: Vec<'a, ObjectField<'a>>,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, `@include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
}

impl<'a> Directive<'a> {
    /// Creates a new directive with the given `name` and no arguments.
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        Directive {
            name,
            arguments: Arguments::default_in(&ctx.arena),
        }
    }
}

/// AST Node for lists of GraphQL Directives.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of Directives in this list.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: Vec<'a, Selection<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// All sub-lists, like `arguments`, `directives` and `selection_set` will be created as empty
    /// defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }

    /// Creates a new leaf field with the given `name` and `alias`.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ASTContext, alias: &'a str, name: &'a str) -> Self {
        Field {
            alias: Some(alias),
            ..Field::new_leaf(ctx, name)
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: NamedType<'a>,
    /// Directives that are annotating this Fragment Spread.
    pub directives: Directives<'a>,
}

impl<'a> FragmentSpread<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        FragmentSpread {
            name: NamedType { name },
            directives: Directives::default_in(&ctx.arena),
        }
    }
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API. On inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    /// Directives that are annotating this Inline Fragment.
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> InlineFragment<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, type_condition: Option<&'a str>) -> Self {
        InlineFragment {
            type_condition: type_condition.map(|name| NamedType { name }),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments, and nothing
/// else, which is why traversals may always match on all three exhaustively.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&self) -> Option<&Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&self) -> Option<&FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&self) -> Option<&InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

impl<'a> From<Field<'a>> for Selection<'a> {
    #[inline]
    fn from(field: Field<'a>) -> Self {
        Selection::Field(field)
    }
}

impl<'a> From<FragmentSpread<'a>> for Selection<'a> {
    #[inline]
    fn from(spread: FragmentSpread<'a>) -> Self {
        Selection::FragmentSpread(spread)
    }
}

impl<'a> From<InlineFragment<'a>> for Selection<'a> {
    #[inline]
    fn from(fragment: InlineFragment<'a>) -> Self {
        Selection::InlineFragment(fragment)
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str`
/// slice whenever the AST refers to a concrete object type, input type, fragment
/// name, or operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] must describe their type when they're defined, including whether they
/// expect lists, non-null values, or a type reference, which is a recursive type definition.
/// The [schema](crate::schema) uses the same structure to declare the types of fields, arguments,
/// and input fields.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Creates an unwrapped reference to the named type `name`.
    #[inline]
    pub fn named(name: &'a str) -> Type<'a> {
        Type::NamedType(NamedType { name })
    }

    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// A non-null node wrapper for a Type, indicating that a GraphQL API may not pass `null` instead
    /// of the conained type.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(ctx.alloc(self))
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(of_type) | Type::NonNullType(of_type) => of_type.of_type(),
        }
    }

    /// Returns the name of the innermost named type, e.g. `Pet` for `[Pet!]!`.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.of_type().name
    }
}

/// AST Node for a variable definition.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A GraphQL variable may be replaced by a default value, when it's not passed.
    /// An explicit `= null` default is kept as `Some(Value::Null)`.
    pub default_value: Option<Value<'a>>,
    /// Directives that are annotating this Variable Definition.
    pub directives: Directives<'a>,
}

impl<'a> VariableDefinition<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, of_type: Type<'a>) -> Self {
        VariableDefinition {
            variable: Variable { name },
            of_type,
            default_value: None,
            directives: Directives::default_in(&ctx.arena),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: NamedType<'a>,
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API.
    pub type_condition: NamedType<'a>,
    /// Directives that are annotating this Fragment.
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> FragmentDefinition<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, type_condition: &'a str) -> Self {
        FragmentDefinition {
            name: NamedType { name },
            type_condition: NamedType {
                name: type_condition,
            },
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// The anonymous shorthand form of a query, `{ field }`, is represented as `Query`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name, as given to the operation definition.
    ///
    /// A [Document] may contain multiple Operation Definitions from which a single one can be
    /// selected during execution. When a Document contains only a single operation, it doesn't
    /// have to have a name.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: VariableDefinitions<'a>,
    /// Directives that are annotating this Operation Definition.
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> OperationDefinition<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, operation: OperationKind, name: Option<&'a str>) -> Self {
        OperationDefinition {
            operation,
            name: name.map(|name| NamedType { name }),
            variable_definitions: VariableDefinitions::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions of
/// fragments or operations.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: Vec<'a, Definition<'a>>,
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns all operation definitions in the order they appear in.
    #[inline]
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'a>> {
        self.definitions
            .iter()
            .filter_map(|definition| definition.operation())
    }

    /// Returns all fragment definitions in the order they appear in.
    #[inline]
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'a>> {
        self.definitions
            .iter()
            .filter_map(|definition| definition.fragment())
    }

    /// Finds the first fragment definition called `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition<'a>> {
        self.fragments().find(|fragment| fragment.name.name == name)
    }
}

/// AST Node for a Definition inside a query language document, which may either be an Operation
/// Definition or a Fragment Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        }
    }
}

impl<'a> From<OperationDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(operation: OperationDefinition<'a>) -> Self {
        Definition::Operation(operation)
    }
}

impl<'a> From<FragmentDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(fragment: FragmentDefinition<'a>) -> Self {
        Definition::Fragment(fragment)
    }
}

/// Trait implemented by all ast nodes that can have directives attached.
pub trait WithDirectives<'arena> {
    fn directives(&self) -> &Directives<'arena>;
}

macro_rules! with_directives {
    ($($for_type:ident),+) => {
        $(
            impl<'arena> WithDirectives<'arena> for $for_type<'arena> {
                #[inline]
                fn directives(&self) -> &Directives<'arena> {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Field,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition
);

impl<'arena> WithDirectives<'arena> for Selection<'arena> {
    /// Helper method to get all Directives for a given selection directly.
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

impl<'arena> WithDirectives<'arena> for Definition<'arena> {
    /// Helper method to get all Directives for a given definition directly.
    #[inline]
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Definition::Operation(operation) => &operation.directives,
            Definition::Fragment(fragment) => &fragment.directives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_unwraps_wrappers() {
        let ctx = ASTContext::new();
        let of_type = Type::named("Pet")
            .into_nonnull(&ctx)
            .into_list(&ctx)
            .into_nonnull(&ctx);
        assert_eq!(of_type.name(), "Pet");
        assert_eq!(of_type.of_type(), &NamedType { name: "Pet" });
        assert_eq!(Type::named("ID").name(), "ID");
    }

    #[test]
    fn document_definitions_in_order() {
        let ctx = ASTContext::new();
        let mut document = Document::default_in(&ctx.arena);
        document
            .definitions
            .push(FragmentDefinition::new(&ctx, "First", "Query").into());
        document
            .definitions
            .push(OperationDefinition::new(&ctx, OperationKind::Query, Some("A")).into());
        document
            .definitions
            .push(FragmentDefinition::new(&ctx, "First", "Pet").into());
        document
            .definitions
            .push(OperationDefinition::new(&ctx, OperationKind::Mutation, Some("B")).into());

        let names: std::vec::Vec<_> = document
            .operations()
            .filter_map(|operation| operation.name.map(|name| name.name))
            .collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(document.fragments().count(), 2);
        assert_eq!(
            document.fragment("First").map(|f| f.type_condition.name),
            Some("Query")
        );
        assert!(document.fragment("Missing").is_none());
    }

    #[test]
    fn aliased_leaf() {
        let ctx = ASTContext::new();
        let field = Field::new_aliased_leaf(&ctx, "friend", "pet");
        assert_eq!(field.alias_or_name(), "friend");
        assert_eq!(Field::new_leaf(&ctx, "pet").alias_or_name(), "pet");
        assert!(field.selection_set.is_empty());
    }
}
