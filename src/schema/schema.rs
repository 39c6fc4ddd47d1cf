use super::directive::{DirectiveLocation, SchemaDirective};
use crate::ast::{ASTContext, OperationKind, Type};
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::{HashMap, HashSet};

/// Name of the meta-field that may be selected on any composite type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-Name-Introspection)
pub const TYPENAME_FIELD: &str = "__typename";

/// Names of the scalars every schema has without declaring them.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars)
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

pub type FieldMap<'a> = HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a Bump>;
pub type InputFieldMap<'a> = HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, &'a Bump>;

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and is then used against
/// AST documents for validation. In this library the schema is never executable and
/// serves only for metadata and type information. It is hence a "Client Schema".
///
/// Every lookup on a schema returns an `Option`, since documents may refer to types, fields,
/// or directives that the schema doesn't know about.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone)]
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a SchemaObject<'a>>,
    pub(crate) mutation_type: Option<&'a SchemaObject<'a>>,
    pub(crate) subscription_type: Option<&'a SchemaObject<'a>>,
    pub(crate) types: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
    pub(crate) directives: HashMap<&'a str, &'a SchemaDirective<'a>, DefaultHashBuilder, &'a Bump>,
    typename_field: &'a SchemaField<'a>,
}

impl<'a> Schema<'a> {
    /// Create a new schema that only contains GraphQL's built-in scalars and the `@skip` and
    /// `@include` directives.
    pub fn new(ctx: &'a ASTContext) -> Self {
        let typename_field = ctx.alloc(SchemaField::new(
            ctx,
            TYPENAME_FIELD,
            ctx.alloc(Type::named("String")),
        ));

        let mut schema = Schema {
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            types: HashMap::new_in(&ctx.arena),
            directives: HashMap::new_in(&ctx.arena),
            typename_field,
        };

        for name in BUILTIN_SCALARS {
            schema.add_type(SchemaType::Scalar(ctx.alloc(SchemaScalar::new(name))));
        }

        let if_type = ctx.alloc(Type::named("Boolean").into_nonnull(ctx));
        for name in ["skip", "include"] {
            let mut directive = SchemaDirective::new(ctx, name);
            directive.add_argument(SchemaInputField::new("if", if_type));
            directive.add_location(DirectiveLocation::Field);
            directive.add_location(DirectiveLocation::FragmentSpread);
            directive.add_location(DirectiveLocation::InlineFragment);
            schema.add_directive(ctx.alloc(directive));
        }

        schema
    }

    /// Adds a named type to the schema, replacing any previous type of the same name.
    pub fn add_type(&mut self, schema_type: SchemaType<'a>) {
        self.types.insert(schema_type.name(), schema_type);
    }

    /// Adds a directive definition to the schema, replacing any previous one of the same name.
    pub fn add_directive(&mut self, directive: &'a SchemaDirective<'a>) {
        self.directives.insert(directive.name, directive);
    }

    /// Sets the root object type for query operations and adds it to the schema's types.
    pub fn set_query_type(&mut self, object: &'a SchemaObject<'a>) {
        self.add_type(SchemaType::Object(object));
        self.query_type = Some(object);
    }

    /// Sets the root object type for mutation operations and adds it to the schema's types.
    pub fn set_mutation_type(&mut self, object: &'a SchemaObject<'a>) {
        self.add_type(SchemaType::Object(object));
        self.mutation_type = Some(object);
    }

    /// Sets the root object type for subscription operations and adds it to the schema's types.
    pub fn set_subscription_type(&mut self, object: &'a SchemaObject<'a>) {
        self.add_type(SchemaType::Object(object));
        self.subscription_type = Some(object);
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type
    }

    /// Returns the root object type for subscription operations
    #[inline]
    pub fn subscription_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.subscription_type
    }

    /// Returns the appropriate object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Retrieves a directive definition by name.
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives.get(name).copied()
    }

    /// Returns the names of all known types, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types.keys().copied()
    }

    /// Returns the definition of the `__typename` meta-field, which every composite type has
    /// regardless of what the schema declares.
    #[inline]
    pub fn typename_field(&self) -> &'a SchemaField<'a> {
        self.typename_field
    }

    /// Returns the names of all object types that the given type may resolve to.
    ///
    /// An object type only resolves to itself, while abstract types resolve to their possible
    /// types. Input types never resolve to any object.
    pub fn possible_type_names(&self, schema_type: SchemaType<'a>) -> std::vec::Vec<&'a str> {
        match schema_type {
            SchemaType::Object(object) => vec![object.name],
            SchemaType::Interface(interface) => interface.get_possible_types().to_vec(),
            SchemaType::Union(union_type) => union_type.get_possible_types().to_vec(),
            _ => vec![],
        }
    }

    /// Checks whether two composite types have any possible object type in common.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetPossibleTypes())
    pub fn types_overlap(&self, left: SchemaType<'a>, right: SchemaType<'a>) -> bool {
        if left.name() == right.name() {
            return true;
        }
        let left_types = self.possible_type_names(left);
        self.possible_type_names(right)
            .into_iter()
            .any(|name| left_types.contains(&name))
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>);

    /// Get a map of all fields
    fn get_fields(&self) -> &FieldMap<'a>;

    /// Get a known field by name
    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.get_fields().get(name).copied()
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Add a new [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, interface: &'a str);

    /// Get list of implemented [SchemaInterface]s
    fn get_interfaces(&self) -> &[&'a str];

    /// Checks whether the given [SchemaInterface] is implemented
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .iter()
            .any(|interface| *interface == schema_interface.name)
    }
}

/// Generic trait for any abstract schema type that may resolve to several object types
pub trait SchemaPossibleTypes<'a>: Sized {
    /// Add a new [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, object: &'a str);

    /// Get list of possible [SchemaObject] types
    fn get_possible_types(&self) -> &[&'a str];

    /// Checks whether given [SchemaObject] is a possible subtype
    #[inline]
    fn is_possible_type(&self, schema_object: &SchemaObject<'a>) -> bool {
        self.get_possible_types()
            .iter()
            .any(|possible_type| *possible_type == schema_object.name)
    }
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub(crate) fields: FieldMap<'a>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaObject {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(&self) -> &FieldMap<'a> {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface. A field that returns an interface as its return type may return
/// any object that implements this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub(crate) fields: FieldMap<'a>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub(crate) possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInterface {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(&self) -> &FieldMap<'a> {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaInterface<'a> {
    fn add_possible_type(&mut self, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &[&'a str] {
        &self.possible_types
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub arguments: InputFieldMap<'a>,
    pub output_type: &'a Type<'a>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, output_type: &'a Type<'a>) -> Self {
        SchemaField {
            name,
            arguments: HashMap::new_in(&ctx.arena),
            output_type,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when its defined as
/// an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaUnion {
            name,
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaUnion<'a> {
    fn add_possible_type(&mut self, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &[&'a str] {
        &self.possible_types
    }
}

/// A Scalar type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar { name }
    }
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub values: HashSet<&'a str, DefaultHashBuilder, &'a Bump>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaEnum {
            name,
            values: HashSet::new_in(&ctx.arena),
        }
    }

    pub fn add_value(&mut self, value: &'a str) {
        self.values.insert(value);
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub fields: InputFieldMap<'a>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInputObject {
            name,
            fields: HashMap::new_in(&ctx.arena),
        }
    }

    pub fn add_field(&mut self, field: SchemaInputField<'a>) {
        self.fields.insert(field.name, field);
    }
}

/// An argument or input object field definition, which carries a declared input type.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: &'a Type<'a>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: &'a Type<'a>) -> Self {
        SchemaInputField { name, input_type }
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    /// Whether this is an object, interface, or union type, which selection sets may select on.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            SchemaType::Object(_) | SchemaType::Interface(_) | SchemaType::Union(_)
        )
    }

    /// Resolves an output field by name on an object or interface type.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        match self {
            SchemaType::Object(x) => x.get_field(name),
            SchemaType::Interface(x) => x.get_field(name),
            _ => None,
        }
    }

    /// Resolves the declared type of a named field on an input object, object, or interface.
    #[inline]
    pub fn field_type(&self, name: &str) -> Option<&'a Type<'a>> {
        match self {
            SchemaType::InputObject(x) => x.fields.get(name).map(|field| field.input_type),
            _ => self.field(name).map(|field| field.output_type),
        }
    }

    /// Returns the names of all fields on this type, in no particular order.
    pub fn field_names(&self) -> std::vec::Vec<&'a str> {
        match self {
            SchemaType::Object(x) => x.fields.keys().copied().collect(),
            SchemaType::Interface(x) => x.fields.keys().copied().collect(),
            SchemaType::InputObject(x) => x.fields.keys().copied().collect(),
            _ => vec![],
        }
    }
}

/// Schema types are identified by their names, since a schema may only contain one type per name.
impl<'a> PartialEq for SchemaType<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl<'a> From<&'a SchemaInputObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(input_object: &'a SchemaInputObject<'a>) -> Self {
        SchemaType::InputObject(input_object)
    }
}

impl<'a> From<&'a SchemaScalar<'a>> for SchemaType<'a> {
    #[inline]
    fn from(scalar: &'a SchemaScalar<'a>) -> Self {
        SchemaType::Scalar(scalar)
    }
}

impl<'a> From<&'a SchemaEnum<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_enum: &'a SchemaEnum<'a>) -> Self {
        SchemaType::Enum(schema_enum)
    }
}
