use super::ast::{
    with_directives, Directives, EnumValue, NamedType, OperationKind, StringValue, Type, Value,
    WithDirectives,
};
use std::fmt;

/// AST Node for a type-system definition.
///
/// Type-system definitions describe a GraphQL service's schema: the schema block
/// itself, the types it serves, and the directives it understands.
/// [Reference](https://spec.graphql.org/October2021/#TypeSystemDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeSystemDefinition<'a> {
    Schema(SchemaDefinition<'a>),
    Type(TypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
}

/// AST Node for a type-system extension.
///
/// Extensions add clauses to a schema or type defined elsewhere, e.g. by a federated
/// subgraph or a schema stitching layer. An extension must carry at least one clause;
/// the parser rejects extensions that extend nothing.
/// [Reference](https://spec.graphql.org/October2021/#TypeSystemExtension)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeSystemExtension<'a> {
    Schema(SchemaExtension<'a>),
    Type(TypeExtension<'a>),
}

/// AST Node associating an operation kind with the object type serving as its root.
///
/// [Reference](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RootOperationTypeDefinition<'a> {
    pub operation: OperationKind,
    pub named_type: NamedType<'a>,
}

/// AST Node for a Schema Definition, which names the root operation types of a
/// GraphQL service.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    /// An optional description of the schema, carried as the raw string literal.
    pub description: Option<StringValue<'a>>,
    /// Directives that are annotating this Schema Definition; their arguments are
    /// constant.
    pub directives: Directives<'a>,
    /// The root operation types by operation kind; the grammar requires at least one.
    pub operation_types: bumpalo::collections::Vec<'a, RootOperationTypeDefinition<'a>>,
}

/// AST Node for a Schema Extension.
///
/// [Reference](https://spec.graphql.org/October2021/#SchemaExtension)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaExtension<'a> {
    pub directives: Directives<'a>,
    pub operation_types: bumpalo::collections::Vec<'a, RootOperationTypeDefinition<'a>>,
}

/// AST Node for a type definition of one of the six GraphQL type kinds.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

impl<'a> TypeDefinition<'a> {
    /// The name the definition introduces, regardless of its type kind.
    pub fn name(&self) -> &'a str {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.name,
            TypeDefinition::Object(object) => object.name,
            TypeDefinition::Interface(interface) => interface.name,
            TypeDefinition::Union(union) => union.name,
            TypeDefinition::Enum(r#enum) => r#enum.name,
            TypeDefinition::InputObject(input_object) => input_object.name,
        }
    }
}

/// AST Node for a type extension of one of the six GraphQL type kinds.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeExtension)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeExtension<'a> {
    Scalar(ScalarTypeExtension<'a>),
    Object(ObjectTypeExtension<'a>),
    Interface(InterfaceTypeExtension<'a>),
    Union(UnionTypeExtension<'a>),
    Enum(EnumTypeExtension<'a>),
    InputObject(InputObjectTypeExtension<'a>),
}

impl<'a> TypeExtension<'a> {
    /// The name of the type the extension applies to, regardless of its type kind.
    pub fn name(&self) -> &'a str {
        match self {
            TypeExtension::Scalar(scalar) => scalar.name,
            TypeExtension::Object(object) => object.name,
            TypeExtension::Interface(interface) => interface.name,
            TypeExtension::Union(union) => union.name,
            TypeExtension::Enum(r#enum) => r#enum.name,
            TypeExtension::InputObject(input_object) => input_object.name,
        }
    }
}

/// AST Node for a Scalar type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for a Scalar type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for an Object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The interfaces the object type implements; empty when no `implements` clause
    /// is present.
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    /// The fields the object type serves; empty when no fields block is present.
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for an Object type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for an Interface type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for an Interface type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for a Union type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    /// The object types that make up the union; empty when no member clause is
    /// present.
    pub members: bumpalo::collections::Vec<'a, NamedType<'a>>,
}

/// AST Node for a Union type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub members: bumpalo::collections::Vec<'a, NamedType<'a>>,
}

/// AST Node for an Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    /// The values of the enum; empty when no values block is present.
    pub values: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
}

/// AST Node for an Enum type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
}

/// AST Node for one value of an Enum type definition.
///
/// The names `true`, `false`, and `null` are reserved and rejected by the parser.
/// [Reference](https://spec.graphql.org/October2021/#EnumValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub value: EnumValue<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an Input Object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    /// The input fields of the type; empty when no fields block is present.
    pub fields: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

/// AST Node for an Input Object type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

/// AST Node for a field on an Object or Interface type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The arguments the field accepts; empty when no argument parentheses are
    /// present.
    pub arguments: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    /// The output type of the field.
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an input value, as used for field arguments, directive arguments, and
/// input object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The input type of the value.
    pub of_type: Type<'a>,
    /// A constant default value, when one is specified.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
}

/// AST Node for a Directive Definition, which declares a directive a GraphQL service
/// understands.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    /// The directive's name, without the leading `@`.
    pub name: &'a str,
    /// The arguments the directive accepts; empty when no argument parentheses are
    /// present.
    pub arguments: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    /// Whether the directive may be applied repeatedly at a single location.
    pub repeatable: bool,
    /// The locations the directive may be applied at; the grammar requires at least
    /// one.
    pub locations: bumpalo::collections::Vec<'a, DirectiveLocation>,
}

/// The locations a directive may be declared to apply to.
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
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
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Looks a location up by its name in the document, e.g. `FIELD_DEFINITION`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "QUERY" => Some(DirectiveLocation::Query),
            "MUTATION" => Some(DirectiveLocation::Mutation),
            "SUBSCRIPTION" => Some(DirectiveLocation::Subscription),
            "FIELD" => Some(DirectiveLocation::Field),
            "FRAGMENT_DEFINITION" => Some(DirectiveLocation::FragmentDefinition),
            "FRAGMENT_SPREAD" => Some(DirectiveLocation::FragmentSpread),
            "INLINE_FRAGMENT" => Some(DirectiveLocation::InlineFragment),
            "VARIABLE_DEFINITION" => Some(DirectiveLocation::VariableDefinition),
            "SCHEMA" => Some(DirectiveLocation::Schema),
            "SCALAR" => Some(DirectiveLocation::Scalar),
            "OBJECT" => Some(DirectiveLocation::Object),
            "FIELD_DEFINITION" => Some(DirectiveLocation::FieldDefinition),
            "ARGUMENT_DEFINITION" => Some(DirectiveLocation::ArgumentDefinition),
            "INTERFACE" => Some(DirectiveLocation::Interface),
            "UNION" => Some(DirectiveLocation::Union),
            "ENUM" => Some(DirectiveLocation::Enum),
            "ENUM_VALUE" => Some(DirectiveLocation::EnumValue),
            "INPUT_OBJECT" => Some(DirectiveLocation::InputObject),
            "INPUT_FIELD_DEFINITION" => Some(DirectiveLocation::InputFieldDefinition),
            _ => None,
        }
    }

    /// The name of the location as it's written in a document.
    pub fn name(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

with_directives!(
    SchemaDefinition,
    SchemaExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    FieldDefinition,
    InputValueDefinition,
);
