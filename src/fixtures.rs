//! Schema and document builders shared by this crate's tests.

use crate::ast::*;
use crate::schema::*;
use crate::validate::{collect_errors, RegisterRule, RuleSet};
use bumpalo::collections::Vec;

/// Builds the schema that tests walk documents against:
///
/// ```graphql
/// type Query { pet(id: ID): Pet, pets(filter: PetFilter): [Pet!]!, node: Node, search: SearchResult }
/// type Mutation { adopt(petId: ID!): Pet }
/// interface Node { id: ID }
/// type Pet implements Node { id: ID, name: String, owner: Human }
/// type Human implements Node { id: ID, name: String, pets(first: Int): [Pet] }
/// union SearchResult = Pet | Human
/// input PetFilter { name: String, owner: OwnerFilter }
/// input OwnerFilter { name: String }
/// directive @cached(ttl: Int) on QUERY | FIELD
/// directive @tag(name: String) repeatable on FIELD | FRAGMENT_DEFINITION
/// ```
pub(crate) fn pet_schema(ctx: &ASTContext) -> &Schema<'_> {
    let named = |name| ctx.alloc(Type::named(name));
    let mut schema = Schema::new(ctx);

    let mut node = SchemaInterface::new(ctx, "Node");
    node.add_field(ctx, SchemaField::new(ctx, "id", named("ID")));
    node.add_possible_type("Pet");
    node.add_possible_type("Human");
    schema.add_type(SchemaType::Interface(ctx.alloc(node)));

    let mut pet = SchemaObject::new(ctx, "Pet");
    pet.add_interface("Node");
    pet.add_field(ctx, SchemaField::new(ctx, "id", named("ID")));
    pet.add_field(ctx, SchemaField::new(ctx, "name", named("String")));
    pet.add_field(ctx, SchemaField::new(ctx, "owner", named("Human")));
    schema.add_type(SchemaType::Object(ctx.alloc(pet)));

    let mut human = SchemaObject::new(ctx, "Human");
    human.add_interface("Node");
    human.add_field(ctx, SchemaField::new(ctx, "id", named("ID")));
    human.add_field(ctx, SchemaField::new(ctx, "name", named("String")));
    let mut pets = SchemaField::new(ctx, "pets", ctx.alloc(Type::named("Pet").into_list(ctx)));
    pets.add_argument(SchemaInputField::new("first", named("Int")));
    human.add_field(ctx, pets);
    schema.add_type(SchemaType::Object(ctx.alloc(human)));

    let mut search = SchemaUnion::new(ctx, "SearchResult");
    search.add_possible_type("Pet");
    search.add_possible_type("Human");
    schema.add_type(SchemaType::Union(ctx.alloc(search)));

    let mut owner_filter = SchemaInputObject::new(ctx, "OwnerFilter");
    owner_filter.add_field(SchemaInputField::new("name", named("String")));
    schema.add_type(SchemaType::InputObject(ctx.alloc(owner_filter)));

    let mut pet_filter = SchemaInputObject::new(ctx, "PetFilter");
    pet_filter.add_field(SchemaInputField::new("name", named("String")));
    pet_filter.add_field(SchemaInputField::new("owner", named("OwnerFilter")));
    schema.add_type(SchemaType::InputObject(ctx.alloc(pet_filter)));

    let mut query = SchemaObject::new(ctx, "Query");
    let mut pet = SchemaField::new(ctx, "pet", named("Pet"));
    pet.add_argument(SchemaInputField::new("id", named("ID")));
    query.add_field(ctx, pet);
    let pets_type = Type::named("Pet")
        .into_nonnull(ctx)
        .into_list(ctx)
        .into_nonnull(ctx);
    let mut pets = SchemaField::new(ctx, "pets", ctx.alloc(pets_type));
    pets.add_argument(SchemaInputField::new("filter", named("PetFilter")));
    query.add_field(ctx, pets);
    query.add_field(ctx, SchemaField::new(ctx, "node", named("Node")));
    query.add_field(ctx, SchemaField::new(ctx, "search", named("SearchResult")));
    schema.set_query_type(ctx.alloc(query));

    let mut mutation = SchemaObject::new(ctx, "Mutation");
    let mut adopt = SchemaField::new(ctx, "adopt", named("Pet"));
    adopt.add_argument(SchemaInputField::new(
        "petId",
        ctx.alloc(Type::named("ID").into_nonnull(ctx)),
    ));
    mutation.add_field(ctx, adopt);
    schema.set_mutation_type(ctx.alloc(mutation));

    let mut cached = SchemaDirective::new(ctx, "cached");
    cached.add_argument(SchemaInputField::new("ttl", named("Int")));
    cached.add_location(DirectiveLocation::Query);
    cached.add_location(DirectiveLocation::Field);
    schema.add_directive(ctx.alloc(cached));

    let mut tag = SchemaDirective::new(ctx, "tag");
    tag.add_argument(SchemaInputField::new("name", named("String")));
    tag.add_location(DirectiveLocation::Field);
    tag.add_location(DirectiveLocation::FragmentDefinition);
    tag.is_repeatable = true;
    schema.add_directive(ctx.alloc(tag));

    ctx.alloc(schema)
}

pub(crate) fn document<'a>(
    ctx: &'a ASTContext,
    definitions: impl IntoIterator<Item = Definition<'a>>,
) -> &'a Document<'a> {
    ctx.alloc(Document {
        definitions: Vec::from_iter_in(definitions, &ctx.arena),
    })
}

pub(crate) fn selection_set<'a>(
    ctx: &'a ASTContext,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> SelectionSet<'a> {
    SelectionSet {
        selections: Vec::from_iter_in(selections, &ctx.arena),
    }
}

pub(crate) fn operation_node<'a>(
    ctx: &'a ASTContext,
    kind: OperationKind,
    name: Option<&'a str>,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> OperationDefinition<'a> {
    OperationDefinition {
        selection_set: selection_set(ctx, selections),
        ..OperationDefinition::new(ctx, kind, name)
    }
}

pub(crate) fn query<'a>(
    ctx: &'a ASTContext,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> Definition<'a> {
    operation_node(ctx, OperationKind::Query, None, selections).into()
}

pub(crate) fn fragment<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    type_condition: &'a str,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> Definition<'a> {
    fragment_node(ctx, name, type_condition, selections).into()
}

pub(crate) fn fragment_node<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    type_condition: &'a str,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> FragmentDefinition<'a> {
    FragmentDefinition {
        selection_set: selection_set(ctx, selections),
        ..FragmentDefinition::new(ctx, name, type_condition)
    }
}

pub(crate) fn field<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> Selection<'a> {
    field_node(ctx, name, selections).into()
}

pub(crate) fn field_node<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> Field<'a> {
    Field {
        selection_set: selection_set(ctx, selections),
        ..Field::new_leaf(ctx, name)
    }
}

pub(crate) fn leaf<'a>(ctx: &'a ASTContext, name: &'a str) -> Selection<'a> {
    Field::new_leaf(ctx, name).into()
}

pub(crate) fn spread<'a>(ctx: &'a ASTContext, name: &'a str) -> Selection<'a> {
    FragmentSpread::new(ctx, name).into()
}

pub(crate) fn inline<'a>(
    ctx: &'a ASTContext,
    type_condition: Option<&'a str>,
    selections: impl IntoIterator<Item = Selection<'a>>,
) -> Selection<'a> {
    InlineFragment {
        selection_set: selection_set(ctx, selections),
        ..InlineFragment::new(ctx, type_condition)
    }
    .into()
}

pub(crate) fn arguments<'a>(
    ctx: &'a ASTContext,
    arguments: impl IntoIterator<Item = (&'a str, Value<'a>)>,
) -> Arguments<'a> {
    Arguments {
        children: Vec::from_iter_in(
            arguments
                .into_iter()
                .map(|(name, value)| Argument { name, value }),
            &ctx.arena,
        ),
    }
}

pub(crate) fn directive<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    args: impl IntoIterator<Item = (&'a str, Value<'a>)>,
) -> Directive<'a> {
    Directive {
        name,
        arguments: arguments(ctx, args),
    }
}

pub(crate) fn directives<'a>(
    ctx: &'a ASTContext,
    directives: impl IntoIterator<Item = Directive<'a>>,
) -> Directives<'a> {
    Directives {
        children: Vec::from_iter_in(directives, &ctx.arena),
    }
}

pub(crate) fn object<'a>(
    ctx: &'a ASTContext,
    fields: impl IntoIterator<Item = (&'a str, Value<'a>)>,
) -> Value<'a> {
    Value::Object(ObjectValue {
        children: Vec::from_iter_in(
            fields
                .into_iter()
                .map(|(name, value)| ObjectField { name, value }),
            &ctx.arena,
        ),
    })
}

pub(crate) fn string(value: &str) -> Value<'_> {
    Value::String(StringValue { value })
}

pub(crate) fn int(value: &str) -> Value<'_> {
    Value::Int(IntValue { value })
}

pub(crate) fn variable(name: &str) -> Value<'_> {
    Value::Variable(Variable { name })
}

/// Prints the name of a resolved type, or `-` when it couldn't be resolved.
pub(crate) fn type_name(schema_type: Option<SchemaType<'_>>) -> &str {
    schema_type.map_or("-", |schema_type| schema_type.name())
}

pub(crate) fn list<'a>(ctx: &'a ASTContext, values: impl IntoIterator<Item = Value<'a>>) -> Value<'a> {
    Value::List(ListValue {
        children: Vec::from_iter_in(values, &ctx.arena),
    })
}

pub(crate) fn boolean(value: bool) -> Value<'static> {
    Value::Boolean(BooleanValue { value })
}

/// Runs a single rule against `document` on the [pet schema](pet_schema) and returns the messages
/// it has reported.
pub(crate) fn rule_errors<'a>(
    ctx: &'a ASTContext,
    document: &'a Document<'a>,
    register: RegisterRule,
) -> std::vec::Vec<&'a str> {
    let mut rules = RuleSet::new();
    rules.add_rule("Test", register);
    collect_errors(ctx, pet_schema(ctx), document, &rules)
        .into_iter()
        .map(|error| error.message)
        .collect()
}
