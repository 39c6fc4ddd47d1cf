#[macro_use]
extern crate bencher;

use bencher::Bencher;
use graphql_walker::ast::*;
use graphql_walker::schema::*;

fn build_schema(ctx: &ASTContext) -> &Schema<'_> {
    let named = |name| ctx.alloc(Type::named(name));
    let mut schema = Schema::new(ctx);

    let mut node = SchemaInterface::new(ctx, "Node");
    node.add_field(ctx, SchemaField::new(ctx, "id", named("ID")));
    node.add_possible_type("Item");
    schema.add_type(SchemaType::Interface(ctx.alloc(node)));

    let mut item = SchemaObject::new(ctx, "Item");
    item.add_interface("Node");
    item.add_field(ctx, SchemaField::new(ctx, "id", named("ID")));
    item.add_field(ctx, SchemaField::new(ctx, "name", named("String")));
    let mut children = SchemaField::new(ctx, "children", ctx.alloc(Type::named("Item").into_list(ctx)));
    children.add_argument(SchemaInputField::new("first", named("Int")));
    item.add_field(ctx, children);
    schema.add_type(SchemaType::Object(ctx.alloc(item)));

    let mut query = SchemaObject::new(ctx, "Query");
    let mut items = SchemaField::new(ctx, "items", ctx.alloc(Type::named("Item").into_list(ctx)));
    items.add_argument(SchemaInputField::new("first", named("Int")));
    query.add_field(ctx, items);
    query.add_field(ctx, SchemaField::new(ctx, "node", named("Node")));
    schema.set_query_type(ctx.alloc(query));

    ctx.alloc(schema)
}

/// Builds `query Items($first: Int) { items(first: $first) { ...Item children { ...Item children { ...Item } } } node { ... on Item { ...Item } } }`
/// with `fragment Item on Item { id name __typename children(first: $first) { id } }`.
fn build_document(ctx: &ASTContext) -> &Document<'_> {
    fn item_selections<'a>(ctx: &'a ASTContext, depth: usize) -> SelectionSet<'a> {
        let mut selection_set = SelectionSet::default_in(&ctx.arena);
        selection_set
            .selections
            .push(FragmentSpread::new(ctx, "Item").into());
        if depth > 0 {
            let mut children = Field::new_leaf(ctx, "children");
            children.selection_set = item_selections(ctx, depth - 1);
            selection_set.selections.push(children.into());
        }
        selection_set
    }

    fn first_argument(ctx: &ASTContext) -> Arguments<'_> {
        let mut arguments = Arguments::default_in(&ctx.arena);
        arguments.children.push(Argument {
            name: "first",
            value: Value::Variable(Variable { name: "first" }),
        });
        arguments
    }

    let mut operation = OperationDefinition::new(ctx, OperationKind::Query, Some("Items"));
    operation
        .variable_definitions
        .children
        .push(VariableDefinition::new(ctx, "first", Type::named("Int")));

    let mut items = Field::new_leaf(ctx, "items");
    items.arguments = first_argument(ctx);
    items.selection_set = item_selections(ctx, 2);
    operation.selection_set.selections.push(items.into());

    let mut on_item = InlineFragment::new(ctx, Some("Item"));
    on_item
        .selection_set
        .selections
        .push(FragmentSpread::new(ctx, "Item").into());
    let mut node = Field::new_leaf(ctx, "node");
    node.selection_set.selections.push(on_item.into());
    operation.selection_set.selections.push(node.into());

    let mut fragment = FragmentDefinition::new(ctx, "Item", "Item");
    for name in ["id", "name", "__typename"] {
        fragment
            .selection_set
            .selections
            .push(Field::new_leaf(ctx, name).into());
    }
    let mut children = Field::new_leaf(ctx, "children");
    children.arguments = first_argument(ctx);
    children
        .selection_set
        .selections
        .push(Field::new_leaf(ctx, "id").into());
    fragment.selection_set.selections.push(children.into());

    let mut document = Document::default_in(&ctx.arena);
    document.definitions.push(operation.into());
    document.definitions.push(fragment.into());
    ctx.alloc(document)
}

fn walk_without_observers(bench: &mut Bencher) {
    use graphql_walker::walk::*;
    let ctx = ASTContext::new();
    let schema = build_schema(&ctx);
    let document = build_document(&ctx);
    let events = Events::new();
    bench.iter(|| walk(schema, document, &events));
}

fn walk_counting_fields(bench: &mut Bencher) {
    use graphql_walker::walk::*;
    use std::cell::Cell;
    let ctx = ASTContext::new();
    let schema = build_schema(&ctx);
    let document = build_document(&ctx);
    let fields = Cell::new(0usize);
    let mut events = Events::new();
    events.on_field(|_, _, _, _| fields.set(fields.get() + 1));
    bench.iter(|| walk(schema, document, &events));
}

fn validate_default_rules(bench: &mut Bencher) {
    use graphql_walker::validate::*;
    let ctx = ASTContext::new();
    let schema = build_schema(&ctx);
    let document = build_document(&ctx);
    let rules = RuleSet::default();
    bench.iter(|| validate(&ctx, schema, document, &rules).unwrap());
}

benchmark_group!(
    walker,
    walk_without_observers,
    walk_counting_fields,
    validate_default_rules
);

benchmark_main!(walker);
