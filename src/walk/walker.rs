use super::events::Events;
use crate::ast::*;
use crate::schema::{DirectiveLocation, Schema, SchemaInputField, SchemaType, TYPENAME_FIELD};
use hashbrown::{HashMap, HashSet};

/// Walk all operations and then all fragments of `document`, resolving each node against `schema`
/// and calling the observers registered on `events` along the way.
///
/// This is a shorthand for [`Walker::new`] followed by [`Walker::walk`].
#[inline]
pub fn walk<'a>(schema: &'a Schema<'a>, document: &'a Document<'a>, events: &Events<'a, '_>) {
    Walker::new(schema, document).walk(events)
}

/// The handle of a single walk over a document, which is passed to every observer.
///
/// It gives observers access to the [`Schema`] and [`Document`] that are being walked and lets
/// them resolve fragment spreads the same way the walk does.
pub struct Walker<'a> {
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    fragments: HashMap<&'a str, &'a FragmentDefinition<'a>>,
}

impl<'a> Walker<'a> {
    /// Create a walker for a given document and the schema it's resolved against.
    pub fn new(schema: &'a Schema<'a>, document: &'a Document<'a>) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.entry(fragment.name.name).or_insert(fragment);
        }
        Walker {
            schema,
            document,
            fragments,
        }
    }

    /// Returns the schema that the document is walked against.
    #[inline]
    pub fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    /// Returns the document that's being walked.
    #[inline]
    pub fn document(&self) -> &'a Document<'a> {
        self.document
    }

    /// Resolves a fragment name to the first fragment definition of that name in the document.
    #[inline]
    pub fn fragment(&self, name: &str) -> Option<&'a FragmentDefinition<'a>> {
        self.fragments.get(name).copied()
    }

    /// Walk every operation in document order and then every fragment in document order.
    ///
    /// Each of these definitions is a root of its own and fragments spread anywhere below a root
    /// are walked into at most once per root.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operations = self.document.operations().count(), fragments = self.fragments.len())
    )]
    pub fn walk(&self, events: &Events<'a, '_>) {
        for operation in self.document.operations() {
            tracing::trace!(name = ?operation.name.map(|name| name.name), "walking operation");
            Traversal::new(self, events).walk_operation(operation);
        }
        for fragment in self.document.fragments() {
            tracing::trace!(name = fragment.name.name, "walking fragment");
            Traversal::new(self, events).walk_fragment(fragment);
        }
    }
}

/// The state of walking a single root definition.
struct Traversal<'w, 'a, 'e> {
    walker: &'w Walker<'a>,
    events: &'w Events<'a, 'e>,
    expanded_fragments: HashSet<&'a str>,
}

impl<'w, 'a, 'e> Traversal<'w, 'a, 'e> {
    fn new(walker: &'w Walker<'a>, events: &'w Events<'a, 'e>) -> Self {
        Traversal {
            walker,
            events,
            expanded_fragments: HashSet::new(),
        }
    }

    fn walk_operation(&mut self, operation: &'a OperationDefinition<'a>) {
        let walker = self.walker;
        for observer in &self.events.operation {
            observer(walker, operation);
        }

        let parent_type = walker
            .schema
            .get_root_type(operation.operation)
            .map(SchemaType::Object);
        let location = DirectiveLocation::from(operation.operation);

        self.walk_directives(parent_type, &operation.directives, location);

        for var_def in &operation.variable_definitions {
            let of_type = &var_def.of_type;
            let type_def = walker.schema.get_type(of_type.name());
            for observer in &self.events.variable {
                observer(walker, of_type, type_def, var_def);
            }
            if let Some(default_value) = &var_def.default_value {
                self.walk_value(Some(of_type), default_value);
            }
        }

        for selection in &operation.selection_set {
            self.walk_selection(parent_type, selection);
        }

        for observer in &self.events.operation_leave {
            observer(walker, operation);
        }
    }

    fn walk_fragment(&mut self, fragment: &'a FragmentDefinition<'a>) {
        let parent_type = self.walker.schema.get_type(fragment.type_condition.name);

        self.walk_directives(
            parent_type,
            &fragment.directives,
            DirectiveLocation::FragmentDefinition,
        );

        for observer in &self.events.fragment {
            observer(self.walker, parent_type, fragment);
        }

        for selection in &fragment.selection_set {
            self.walk_selection(parent_type, selection);
        }
    }

    fn walk_directives(
        &self,
        parent_type: Option<SchemaType<'a>>,
        directives: &'a Directives<'a>,
        location: DirectiveLocation,
    ) {
        let walker = self.walker;
        for observer in &self.events.directive_list {
            observer(walker, parent_type, directives, location);
        }

        for directive in directives {
            let directive_def = walker.schema.get_directive(directive.name);
            for observer in &self.events.directive {
                observer(walker, parent_type, directive_def, directive, location);
            }

            for argument in &directive.arguments {
                let arg_def = directive_def.and_then(|def| def.get_argument(argument.name));
                self.walk_argument(arg_def, argument);
            }
        }
    }

    fn walk_argument(&self, arg_def: Option<&'a SchemaInputField<'a>>, argument: &'a Argument<'a>) {
        for observer in &self.events.argument {
            observer(self.walker, argument);
        }

        let arg_type = arg_def.map(|def| def.input_type);
        self.walk_value(arg_type, &argument.value);
    }

    fn walk_value(&self, value_type: Option<&'a Type<'a>>, value: &'a Value<'a>) {
        let walker = self.walker;
        let type_def = value_type.and_then(|of_type| walker.schema.get_type(of_type.name()));

        for observer in &self.events.value {
            observer(walker, value_type, type_def, value);
        }

        if let Value::Object(object) = value {
            for field in object {
                let field_type = type_def.and_then(|def| def.field_type(field.name));
                self.walk_value(field_type, &field.value);
            }
        }
    }

    fn walk_selection(&mut self, parent_type: Option<SchemaType<'a>>, selection: &'a Selection<'a>) {
        let walker = self.walker;
        match selection {
            Selection::Field(field) => {
                let field_def = if field.name == TYPENAME_FIELD {
                    Some(walker.schema.typename_field())
                } else {
                    parent_type.and_then(|parent| parent.field(field.name))
                };

                for observer in &self.events.field {
                    observer(walker, parent_type, field_def, field);
                }

                let next_parent_type =
                    field_def.and_then(|def| walker.schema.get_type(def.output_type.name()));

                for argument in &field.arguments {
                    let arg_def = field_def.and_then(|def| def.get_argument(argument.name));
                    self.walk_argument(arg_def, argument);
                }

                for selection in &field.selection_set {
                    self.walk_selection(next_parent_type, selection);
                }

                // A field's directives are only visited once its whole subtree has been walked
                self.walk_directives(next_parent_type, &field.directives, DirectiveLocation::Field);
            }

            Selection::InlineFragment(fragment) => {
                for observer in &self.events.inline_fragment {
                    observer(walker, parent_type, fragment);
                }

                let next_parent_type = match fragment.type_condition {
                    Some(NamedType { name }) if !name.is_empty() => walker.schema.get_type(name),
                    _ => parent_type,
                };

                self.walk_directives(
                    next_parent_type,
                    &fragment.directives,
                    DirectiveLocation::InlineFragment,
                );

                for selection in &fragment.selection_set {
                    self.walk_selection(next_parent_type, selection);
                }
            }

            Selection::FragmentSpread(spread) => {
                let fragment = walker.fragment(spread.name.name);

                for observer in &self.events.fragment_spread {
                    observer(walker, parent_type, fragment, spread);
                }

                let next_parent_type =
                    fragment.and_then(|fragment| walker.schema.get_type(fragment.type_condition.name));

                self.walk_directives(
                    next_parent_type,
                    &spread.directives,
                    DirectiveLocation::FragmentSpread,
                );

                let Some(fragment) = fragment else {
                    return;
                };
                if self.expanded_fragments.insert(fragment.name.name) {
                    for selection in &fragment.selection_set {
                        self.walk_selection(next_parent_type, selection);
                    }
                } else {
                    tracing::trace!(
                        fragment = fragment.name.name,
                        "fragment was already walked into from this root"
                    );
                }
            }
        }
    }
}
