use super::{ParseResult, Parser, SyntaxError};
use crate::ast::*;
use crate::error::ErrorType;
use crate::lexer::LexerError;
use crate::parser::{parse, parse_with_limit};
use bumpalo::collections::Vec;
use indoc::indoc;

fn parse_doc<'a>(ctx: &'a ASTContext, source: &'a str) -> ParseResult<Document<'a>> {
    Parser::new(ctx, source).parse_document()
}

fn parse_rule<'a, T>(
    ctx: &'a ASTContext,
    source: &'a str,
    rule: impl FnOnce(&mut Parser<'a>) -> ParseResult<T>,
) -> ParseResult<T> {
    let mut parser = Parser::new(ctx, source);
    rule(&mut parser)
}

fn empty_arguments(ctx: &ASTContext) -> Arguments<'_> {
    Arguments {
        children: Vec::new_in(&ctx.arena),
    }
}

fn empty_directives(ctx: &ASTContext) -> Directives<'_> {
    Directives {
        children: Vec::new_in(&ctx.arena),
    }
}

#[test]
fn anonymous_query_shorthand() {
    let ctx = ASTContext::new();
    let doc = parse(&ctx, "{ user { id } }").unwrap();
    assert_eq!(doc.size_hint, 15);

    let expected = Definition::from(OperationDefinition {
        operation: OperationKind::Query,
        name: None,
        variable_definitions: VariableDefinitions {
            children: Vec::new_in(&ctx.arena),
        },
        directives: empty_directives(&ctx),
        selection_set: SelectionSet {
            selections: Vec::from_iter_in(
                [Selection::Field(Field {
                    alias: None,
                    name: "user",
                    arguments: empty_arguments(&ctx),
                    directives: empty_directives(&ctx),
                    selection_set: SelectionSet {
                        selections: Vec::from_iter_in(
                            [Selection::Field(Field::new_leaf(&ctx, "id"))],
                            &ctx.arena,
                        ),
                    },
                })],
                &ctx.arena,
            ),
        },
    });
    assert_eq!(doc.definitions.as_slice(), &[expected]);
}

#[test]
fn named_operations() {
    let ctx = ASTContext::new();
    for (source, operation) in [
        ("query Q { f }", OperationKind::Query),
        ("mutation M { f }", OperationKind::Mutation),
        ("subscription S { f }", OperationKind::Subscription),
    ] {
        let doc = parse_doc(&ctx, source).unwrap();
        let parsed = doc.definitions[0].operation().unwrap();
        assert_eq!(parsed.operation, operation);
        assert!(parsed.name.is_some());
        assert!(parsed.variable_definitions.is_empty());
        assert!(parsed.directives.is_empty());
    }

    let doc = parse_doc(&ctx, "query { f }").unwrap();
    assert_eq!(doc.definitions[0].operation().unwrap().name, None);
}

#[test]
fn operations_with_variables_and_directives() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "query Q($id: ID!, $n: Int = 10 @tag) @cached { f(id: $id) }")
        .unwrap();
    let operation = doc.definitions[0].operation().unwrap();
    assert_eq!(operation.name, Some(NamedType { name: "Q" }));

    let var_defs = &operation.variable_definitions.children;
    assert_eq!(var_defs.len(), 2);
    assert_eq!(var_defs[0].variable, Variable { name: "id" });
    assert_eq!(
        var_defs[0].of_type,
        Type::NonNullType(ctx.alloc(Type::NamedType(NamedType { name: "ID" })))
    );
    assert_eq!(var_defs[0].default_value, None);
    assert_eq!(
        var_defs[1].default_value,
        Some(Value::Int(IntValue { value: "10" }))
    );
    assert_eq!(var_defs[1].directives.children[0].name, "tag");

    assert_eq!(operation.directives.children[0].name, "cached");
    let field = operation.selection_set.selections[0].field().unwrap();
    assert_eq!(
        field.arguments.children.as_slice(),
        &[Argument {
            name: "id",
            value: Value::Variable(Variable { name: "id" }),
        }]
    );
}

#[test]
fn token_limit_aborts_parsing() {
    let ctx = ASTContext::new();
    // the source lexes to 12 tokens including the terminal one
    let error = parse_with_limit(&ctx, "{ user { id } }", 11).unwrap_err();
    assert_eq!(error.message(), "Token limit exceeded");
    assert_eq!(*error.error_type(), ErrorType::Lexical);

    parse_with_limit(&ctx, "{ user { id } }", 12).unwrap();

    let result = {
        let mut parser = Parser::new(&ctx, "{ user { id } }").with_limit(3);
        parser.parse_document()
    };
    assert_eq!(result, Err(SyntaxError::Lexer(LexerError::LimitReached)));
}

#[test]
fn trivia_is_invisible_to_the_grammar() {
    let ctx = ASTContext::new();
    let plain = parse_doc(&ctx, "{ a b(x: [1 2]) }").unwrap();
    let noisy = parse_doc(
        &ctx,
        indoc! {"
            {,, # leading trivia
              a, # field one
              b(x: [1, 2,],),
            ,}
        "},
    )
    .unwrap();
    assert_eq!(plain.definitions, noisy.definitions);
}

#[test]
fn values() {
    let ctx = ASTContext::new();
    let value = |source| parse_rule(&ctx, source, |parser| parser.parse_value(false));

    assert_eq!(value("true"), Ok(Value::Boolean(BooleanValue { value: true })));
    assert_eq!(
        value("false"),
        Ok(Value::Boolean(BooleanValue { value: false }))
    );
    assert_eq!(value("null"), Ok(Value::Null));
    assert_eq!(value("$var"), Ok(Value::Variable(Variable { name: "var" })));
    assert_eq!(value("Opt"), Ok(Value::Enum(EnumValue { value: "Opt" })));
    assert_eq!(value("123"), Ok(Value::Int(IntValue { value: "123" })));
    assert_eq!(value("-1.5e3"), Ok(Value::Float(FloatValue { value: "-1.5e3" })));
    assert_eq!(
        value("\"hello world\""),
        Ok(Value::String(StringValue {
            value: "\"hello world\""
        }))
    );
    assert_eq!(
        value("\"\"\"block\"\"\""),
        Ok(Value::String(StringValue {
            value: "\"\"\"block\"\"\""
        }))
    );

    assert_eq!(
        value("[]"),
        Ok(Value::List(ListValue {
            children: Vec::new_in(&ctx.arena),
        }))
    );
    assert_eq!(
        value("[null, null]"),
        Ok(Value::List(ListValue {
            children: Vec::from_iter_in([Value::Null, Value::Null], &ctx.arena),
        }))
    );
    assert_eq!(
        value("{}"),
        Ok(Value::Object(ObjectValue {
            children: Vec::new_in(&ctx.arena),
        }))
    );
    assert_eq!(
        value("{ test: true }"),
        Ok(Value::Object(ObjectValue {
            children: Vec::from_iter_in(
                [ObjectField {
                    name: "test",
                    value: Value::Boolean(BooleanValue { value: true }),
                }],
                &ctx.arena,
            ),
        }))
    );
}

#[test]
fn const_values_reject_variables() {
    let ctx = ASTContext::new();
    assert_eq!(
        parse_rule(&ctx, "$var", |parser| parser.parse_value(true)),
        Err(SyntaxError::UnexpectedVariable("var".into()))
    );
    assert_eq!(
        parse_rule(&ctx, "[1, [$var]]", |parser| parser.parse_value(true)),
        Err(SyntaxError::UnexpectedVariable("var".into()))
    );
    assert_eq!(
        parse_rule(&ctx, "{ a: $var }", |parser| parser.parse_value(true)),
        Err(SyntaxError::UnexpectedVariable("var".into()))
    );
    // a lone `$` in a constant position isn't even a variable
    assert!(matches!(
        parse_rule(&ctx, "$", |parser| parser.parse_value(true)),
        Err(SyntaxError::UnexpectedToken(_))
    ));

    // variable definition defaults are constant
    parse_doc(&ctx, "query ($a: Int = $b) { f }").unwrap_err();
    // as are directive arguments in type-system positions
    assert_eq!(
        parse_doc(&ctx, "type T { f: Int @deprecated(reason: $var) }"),
        Err(SyntaxError::UnexpectedVariable("var".into()))
    );
    // while field arguments in operations are not
    parse_doc(&ctx, "{ f(x: $var) }").unwrap();
}

#[test]
fn types() {
    let ctx = ASTContext::new();
    let of_type = |source| parse_rule(&ctx, source, |parser| parser.parse_type());

    assert_eq!(of_type("Type"), Ok(Type::NamedType(NamedType { name: "Type" })));
    assert_eq!(
        of_type("Type!"),
        Ok(Type::NonNullType(
            ctx.alloc(Type::NamedType(NamedType { name: "Type" }))
        ))
    );
    assert_eq!(
        of_type("[Type!]"),
        Ok(Type::ListType(ctx.alloc(Type::NonNullType(
            ctx.alloc(Type::NamedType(NamedType { name: "Type" }))
        ))))
    );
    assert_eq!(
        of_type("[[Type]]"),
        Ok(Type::ListType(ctx.alloc(Type::ListType(
            ctx.alloc(Type::NamedType(NamedType { name: "Type" }))
        ))))
    );
    assert!(matches!(of_type("!"), Err(SyntaxError::UnexpectedToken(_))));
    assert!(matches!(of_type("[Type"), Err(SyntaxError::UnexpectedToken(_))));
}

#[test]
fn nonnull_must_not_wrap_nonnull() {
    let ctx = ASTContext::new();
    parse_doc(&ctx, "query ($x: Int!!) { f }").unwrap_err();
    parse_doc(&ctx, "query ($x: [Int!!]) { f }").unwrap_err();
    parse_doc(&ctx, "type T { f: Int!! }").unwrap_err();
}

#[test]
fn nested_list_types_in_field_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "type Post { tags: [String!]! }").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an object type definition");
    };
    assert_eq!(
        object.fields[0].of_type,
        Type::NonNullType(ctx.alloc(Type::ListType(ctx.alloc(Type::NonNullType(
            ctx.alloc(Type::NamedType(NamedType { name: "String" }))
        )))))
    );
}

#[test]
fn selections() {
    let ctx = ASTContext::new();
    let doc = parse_doc(
        &ctx,
        "{ name, ... on Frag { name }, ... OtherFrag @skip(if: true), ... { name }, name2: name }",
    )
    .unwrap();
    let selection_set = &doc.definitions[0].operation().unwrap().selection_set;
    assert_eq!(selection_set.selections.len(), 5);

    assert_eq!(
        selection_set.selections[0],
        Selection::Field(Field::new_leaf(&ctx, "name"))
    );
    let inline = selection_set.selections[1].inline_fragment().unwrap();
    assert_eq!(inline.type_condition, Some(NamedType { name: "Frag" }));
    assert_eq!(inline.selection_set.selections.len(), 1);

    let spread = selection_set.selections[2].fragment_spread().unwrap();
    assert_eq!(spread.name, NamedType { name: "OtherFrag" });
    assert_eq!(
        spread.directives.children.as_slice(),
        &[Directive {
            name: "skip",
            arguments: Arguments {
                children: Vec::from_iter_in(
                    [Argument {
                        name: "if",
                        value: Value::Boolean(BooleanValue { value: true }),
                    }],
                    &ctx.arena,
                ),
            },
        }]
    );

    let inline = selection_set.selections[3].inline_fragment().unwrap();
    assert_eq!(inline.type_condition, None);

    assert_eq!(
        selection_set.selections[4],
        Selection::Field(Field::new_aliased_leaf(&ctx, "name2", "name"))
    );
}

#[test]
fn fragment_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "fragment Test on Type @test { name }").unwrap();
    let fragment = doc.definitions[0].fragment().unwrap();
    assert_eq!(fragment.name, NamedType { name: "Test" });
    assert_eq!(fragment.type_condition, NamedType { name: "Type" });
    assert_eq!(fragment.directives.children[0].name, "test");
    assert_eq!(fragment.selection_set.selections.len(), 1);

    assert_eq!(
        parse_doc(&ctx, "fragment on on Type { name }"),
        Err(SyntaxError::UnexpectedFragmentName)
    );
}

#[test]
fn schema_definitions() {
    let ctx = ASTContext::new();
    let source = indoc! {r#"
        "The service entry points"
        schema @tagged {
            query: Queries
            mutation: Mutations
            subscription: Subscriptions
        }
    "#};
    let doc = parse_doc(&ctx, source).unwrap();
    let Some(TypeSystemDefinition::Schema(schema)) = doc.definitions[0].type_system() else {
        panic!("expected a schema definition");
    };
    assert_eq!(
        schema.description,
        Some(StringValue {
            value: "\"The service entry points\""
        })
    );
    assert_eq!(schema.directives.children[0].name, "tagged");
    assert_eq!(
        schema.operation_types.as_slice(),
        &[
            RootOperationTypeDefinition {
                operation: OperationKind::Query,
                named_type: NamedType { name: "Queries" },
            },
            RootOperationTypeDefinition {
                operation: OperationKind::Mutation,
                named_type: NamedType { name: "Mutations" },
            },
            RootOperationTypeDefinition {
                operation: OperationKind::Subscription,
                named_type: NamedType { name: "Subscriptions" },
            },
        ]
    );

    // the root operation type block is mandatory and non-empty
    parse_doc(&ctx, "schema").unwrap_err();
    parse_doc(&ctx, "schema { }").unwrap_err();
    parse_doc(&ctx, "schema { field: Int }").unwrap_err();
}

#[test]
fn scalar_type_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "\"Opaque time\" scalar DateTime @specifiedBy(url: \"x\")").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Scalar(scalar))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected a scalar type definition");
    };
    assert_eq!(scalar.description, Some(StringValue { value: "\"Opaque time\"" }));
    assert_eq!(scalar.name, "DateTime");
    assert_eq!(scalar.directives.children[0].name, "specifiedBy");
}

#[test]
fn object_type_definitions() {
    let ctx = ASTContext::new();
    let source = indoc! {r#"
        type Person implements & NamedEntity & ValuedEntity @tagged {
            "The person's name"
            name: String
            age(unit: AgeUnit = YEARS): Int!
            picture: Url @deprecated
        }
    "#};
    let doc = parse_doc(&ctx, source).unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.description, None);
    assert_eq!(object.name, "Person");
    assert_eq!(
        object.interfaces.as_slice(),
        &[
            NamedType {
                name: "NamedEntity"
            },
            NamedType {
                name: "ValuedEntity"
            },
        ]
    );
    assert_eq!(object.directives.children[0].name, "tagged");
    assert_eq!(object.fields.len(), 3);

    assert_eq!(
        object.fields[0].description,
        Some(StringValue {
            value: "\"The person's name\""
        })
    );
    assert_eq!(object.fields[0].name, "name");
    assert!(object.fields[0].arguments.is_empty());

    let age = &object.fields[1];
    assert_eq!(
        age.arguments.as_slice(),
        &[InputValueDefinition {
            description: None,
            name: "unit",
            of_type: Type::NamedType(NamedType { name: "AgeUnit" }),
            default_value: Some(Value::Enum(EnumValue { value: "YEARS" })),
            directives: empty_directives(&ctx),
        }]
    );
    assert_eq!(
        age.of_type,
        Type::NonNullType(ctx.alloc(Type::NamedType(NamedType { name: "Int" })))
    );

    assert_eq!(object.fields[2].directives.children[0].name, "deprecated");

    // a body-less object type is a complete definition
    let doc = parse_doc(&ctx, "type Empty").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.name, "Empty");
    assert!(object.interfaces.is_empty());
    assert!(object.directives.is_empty());
    assert!(object.fields.is_empty());

    // but a present fields block must not be empty
    parse_doc(&ctx, "type Empty { }").unwrap_err();
    // and an `implements` clause needs at least one interface
    parse_doc(&ctx, "type Person implements { name: String }").unwrap_err();
}

#[test]
fn descriptions_with_block_strings() {
    let ctx = ASTContext::new();
    let source = "\"\"\"\nThe query root\n\"\"\"\ntype Query { users(): User }";
    let doc = parse_doc(&ctx, source).unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an object type definition");
    };
    let description = object.description.unwrap();
    assert_eq!(description.value, "\"\"\"\nThe query root\n\"\"\"");
    assert!(description.is_block());

    // `users()` carries an empty argument definition list
    assert_eq!(object.fields.len(), 1);
    assert_eq!(object.fields[0].name, "users");
    assert!(object.fields[0].arguments.is_empty());
    assert_eq!(
        object.fields[0].of_type,
        Type::NamedType(NamedType { name: "User" })
    );
}

#[test]
fn interface_type_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "interface Node implements Entity { id: ID! }").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Interface(interface))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an interface type definition");
    };
    assert_eq!(interface.name, "Node");
    assert_eq!(interface.interfaces.as_slice(), &[NamedType { name: "Entity" }]);
    assert_eq!(interface.fields[0].name, "id");
}

#[test]
fn union_type_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(
        &ctx,
        indoc! {"
            union SearchResult @tagged =
                | Photo
                | Person
        "},
    )
    .unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Union(union))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected a union type definition");
    };
    assert_eq!(union.name, "SearchResult");
    assert_eq!(union.directives.children[0].name, "tagged");
    assert_eq!(
        union.members.as_slice(),
        &[NamedType { name: "Photo" }, NamedType { name: "Person" }]
    );

    // a member-less union is a complete definition
    let doc = parse_doc(&ctx, "union Pending").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Union(union))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected a union type definition");
    };
    assert!(union.members.is_empty());

    // a present member list needs at least one member
    parse_doc(&ctx, "union Pending =").unwrap_err();
}

#[test]
fn enum_type_definitions() {
    let ctx = ASTContext::new();
    let source = indoc! {r#"
        enum Direction {
            "Up and away"
            NORTH
            EAST @deprecated
            SOUTH
            WEST
        }
    "#};
    let doc = parse_doc(&ctx, source).unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Enum(r#enum))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an enum type definition");
    };
    assert_eq!(r#enum.name, "Direction");
    assert_eq!(r#enum.values.len(), 4);
    assert_eq!(
        r#enum.values[0].description,
        Some(StringValue {
            value: "\"Up and away\""
        })
    );
    assert_eq!(r#enum.values[0].value, EnumValue { value: "NORTH" });
    assert_eq!(r#enum.values[1].directives.children[0].name, "deprecated");

    for reserved in ["true", "false", "null"] {
        let source = ctx.alloc_string(format!("enum Bad {{ {reserved} }}"));
        assert_eq!(
            parse_doc(&ctx, source),
            Err(SyntaxError::ReservedEnumValueName(reserved.into()))
        );
    }
}

#[test]
fn input_object_type_definitions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "input Point { x: Float = 0.0 y: Float = 0.0 }").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::InputObject(input_object))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected an input object type definition");
    };
    assert_eq!(input_object.name, "Point");
    assert_eq!(
        input_object.fields.as_slice(),
        &[
            InputValueDefinition {
                description: None,
                name: "x",
                of_type: Type::NamedType(NamedType { name: "Float" }),
                default_value: Some(Value::Float(FloatValue { value: "0.0" })),
                directives: empty_directives(&ctx),
            },
            InputValueDefinition {
                description: None,
                name: "y",
                of_type: Type::NamedType(NamedType { name: "Float" }),
                default_value: Some(Value::Float(FloatValue { value: "0.0" })),
                directives: empty_directives(&ctx),
            },
        ]
    );
}

#[test]
fn directive_definitions() {
    let ctx = ASTContext::new();
    let source = "directive @deprecated(reason: String = \"No longer supported\", removeDate: String) on FIELD_DEFINITION | ENUM_VALUE";
    let doc = parse_doc(&ctx, source).unwrap();
    let Some(TypeSystemDefinition::Directive(directive)) = doc.definitions[0].type_system()
    else {
        panic!("expected a directive definition");
    };
    assert_eq!(
        *directive,
        DirectiveDefinition {
            description: None,
            name: "deprecated",
            arguments: Vec::from_iter_in(
                [
                    InputValueDefinition {
                        description: None,
                        name: "reason",
                        of_type: Type::NamedType(NamedType { name: "String" }),
                        default_value: Some(Value::String(StringValue {
                            value: "\"No longer supported\"",
                        })),
                        directives: empty_directives(&ctx),
                    },
                    InputValueDefinition {
                        description: None,
                        name: "removeDate",
                        of_type: Type::NamedType(NamedType { name: "String" }),
                        default_value: None,
                        directives: empty_directives(&ctx),
                    },
                ],
                &ctx.arena,
            ),
            repeatable: false,
            locations: Vec::from_iter_in(
                [
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::EnumValue,
                ],
                &ctx.arena,
            ),
        }
    );

    let doc = parse_doc(&ctx, "directive @tag repeatable on | OBJECT").unwrap();
    let Some(TypeSystemDefinition::Directive(directive)) = doc.definitions[0].type_system()
    else {
        panic!("expected a directive definition");
    };
    assert!(directive.repeatable);
    assert_eq!(directive.locations.as_slice(), &[DirectiveLocation::Object]);

    assert_eq!(
        parse_doc(&ctx, "directive @bad on SIDEWAYS"),
        Err(SyntaxError::UnknownDirectiveLocation("SIDEWAYS".into()))
    );
}

#[test]
fn schema_extensions() {
    let ctx = ASTContext::new();
    let doc = parse_doc(&ctx, "extend schema @tagged").unwrap();
    let Some(TypeSystemExtension::Schema(extension)) = doc.definitions[0].extension() else {
        panic!("expected a schema extension");
    };
    assert_eq!(extension.directives.children[0].name, "tagged");
    assert!(extension.operation_types.is_empty());

    let doc = parse_doc(&ctx, "extend schema { mutation: Mutations }").unwrap();
    let Some(TypeSystemExtension::Schema(extension)) = doc.definitions[0].extension() else {
        panic!("expected a schema extension");
    };
    assert!(extension.directives.is_empty());
    assert_eq!(
        extension.operation_types.as_slice(),
        &[RootOperationTypeDefinition {
            operation: OperationKind::Mutation,
            named_type: NamedType { name: "Mutations" },
        }]
    );

    // an extension that extends nothing is invalid
    parse_doc(&ctx, "extend schema").unwrap_err();
}

#[test]
fn type_extensions() {
    let ctx = ASTContext::new();

    let doc = parse_doc(&ctx, "extend scalar DateTime @specifiedBy(url: \"x\")").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::Scalar(scalar))) =
        doc.definitions[0].extension()
    else {
        panic!("expected a scalar type extension");
    };
    assert_eq!(scalar.name, "DateTime");

    let doc = parse_doc(&ctx, "extend type Person implements Entity { age: Int }").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::Object(object))) =
        doc.definitions[0].extension()
    else {
        panic!("expected an object type extension");
    };
    assert_eq!(object.interfaces.as_slice(), &[NamedType { name: "Entity" }]);
    assert_eq!(object.fields[0].name, "age");

    let doc = parse_doc(&ctx, "extend interface Node @tagged").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::Interface(interface))) =
        doc.definitions[0].extension()
    else {
        panic!("expected an interface type extension");
    };
    assert!(interface.fields.is_empty());

    let doc = parse_doc(&ctx, "extend union SearchResult = Audio").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::Union(union))) =
        doc.definitions[0].extension()
    else {
        panic!("expected a union type extension");
    };
    assert_eq!(union.members.as_slice(), &[NamedType { name: "Audio" }]);

    let doc = parse_doc(&ctx, "extend enum Direction { UP DOWN }").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::Enum(r#enum))) =
        doc.definitions[0].extension()
    else {
        panic!("expected an enum type extension");
    };
    assert_eq!(r#enum.values.len(), 2);

    let doc = parse_doc(&ctx, "extend input Point { z: Float }").unwrap();
    let Some(TypeSystemExtension::Type(TypeExtension::InputObject(input_object))) =
        doc.definitions[0].extension()
    else {
        panic!("expected an input object type extension");
    };
    assert_eq!(input_object.fields[0].name, "z");

    // extensions that extend nothing are invalid, for every kind
    for source in [
        "extend scalar DateTime",
        "extend type Person",
        "extend interface Node",
        "extend union SearchResult",
        "extend enum Direction",
        "extend input Point",
    ] {
        assert!(
            matches!(
                parse_doc(&ctx, source),
                Err(SyntaxError::UnexpectedToken(_))
            ),
            "{source}"
        );
    }
}

#[test]
fn descriptions_only_precede_type_system_definitions() {
    let ctx = ASTContext::new();
    parse_doc(&ctx, "\"doc\" scalar S").unwrap();
    parse_doc(&ctx, "\"doc\" input I { x: Int }").unwrap();
    parse_doc(&ctx, "\"doc\" directive @d on FIELD").unwrap();

    parse_doc(&ctx, "\"doc\" { f }").unwrap_err();
    parse_doc(&ctx, "\"doc\" query Q { f }").unwrap_err();
    parse_doc(&ctx, "\"doc\" fragment F on T { f }").unwrap_err();
    parse_doc(&ctx, "\"doc\" extend scalar S @tag").unwrap_err();
}

#[test]
fn definition_dispatch_errors() {
    let ctx = ASTContext::new();
    assert_eq!(
        parse_doc(&ctx, "frogment F on T { f }"),
        Err(SyntaxError::UnknownDefinition("frogment".into()))
    );
    assert_eq!(
        parse_doc(&ctx, "implements Node { f }"),
        Err(SyntaxError::UnexpectedKeyword("implements".into()))
    );
    assert!(matches!(
        parse_doc(&ctx, "]"),
        Err(SyntaxError::UnexpectedToken(_))
    ));
    assert_eq!(
        parse_doc(&ctx, "extend frag Foo"),
        Err(SyntaxError::UnknownKeyword("frag".into()))
    );
}

#[test]
fn mixed_documents() {
    let ctx = ASTContext::new();
    let source = indoc! {r#"
        query GetUsers {
            users { ...UserParts }
        }

        fragment UserParts on User {
            id
            name
        }

        "A user of the service"
        type User {
            id: ID!
            name: String
        }

        extend type User @tagged
    "#};
    let doc = parse_doc(&ctx, source).unwrap();
    assert_eq!(doc.definitions.len(), 4);
    assert!(doc.definitions[0].operation().is_some());
    assert!(doc.definitions[1].fragment().is_some());
    assert!(doc.definitions[2].type_system().is_some());
    assert!(doc.definitions[3].extension().is_some());
}

#[test]
fn minimal_inputs_leave_optionals_absent() {
    let ctx = ASTContext::new();

    let doc = parse_doc(&ctx, "{ f }").unwrap();
    let operation = doc.definitions[0].operation().unwrap();
    assert_eq!(operation.name, None);
    assert!(operation.variable_definitions.is_empty());
    assert!(operation.directives.is_empty());
    let field = operation.selection_set.selections[0].field().unwrap();
    assert_eq!(field.alias, None);
    assert!(field.arguments.is_empty());
    assert!(field.directives.is_empty());
    assert!(field.selection_set.is_empty());

    let doc = parse_doc(&ctx, "scalar S").unwrap();
    let Some(TypeSystemDefinition::Type(TypeDefinition::Scalar(scalar))) =
        doc.definitions[0].type_system()
    else {
        panic!("expected a scalar type definition");
    };
    assert_eq!(scalar.description, None);
    assert!(scalar.directives.is_empty());

    let definition =
        parse_rule(&ctx, "$v: Int", |parser| parser.parse_variable_definition()).unwrap();
    assert_eq!(definition.default_value, None);
    assert!(definition.directives.is_empty());
}

#[test]
fn empty_documents() {
    let ctx = ASTContext::new();
    assert!(parse_doc(&ctx, "").unwrap().is_empty());
    assert!(parse_doc(&ctx, "# only a comment\n").unwrap().is_empty());
}

#[test]
fn kitchen_sink_fixtures() {
    let query = include_str!("../../fixture/kitchen_sink.graphql");
    let schema = include_str!("../../fixture/schema_kitchen_sink.graphql");

    let ctx = ASTContext::new();
    let lexed = crate::lexer::Lexer::new(query).lex(&ctx);
    assert!(lexed.errors.is_empty());
    let rebuilt: String = lexed.tokens.iter().map(|token| token.data).collect();
    assert_eq!(rebuilt, query);

    let doc = parse_doc(&ctx, query).unwrap();
    assert_eq!(doc.definitions.len(), 5);
    let doc = parse_doc(&ctx, schema).unwrap();
    assert_eq!(doc.definitions.len(), 14);
}

#[test]
fn errors_carry_locations() {
    let ctx = ASTContext::new();
    let error = parse(
        &ctx,
        indoc! {"
            query {
                document {
                    $
                }
            }
        "},
    )
    .unwrap_err();
    assert_eq!(*error.error_type(), ErrorType::Syntax);
    let location = error.location().clone().unwrap();
    assert_eq!(location.line, 3);
}
