//! Grammar procedures for type-system documents: the schema definition, the six type
//! definition kinds, directive definitions, and extensions of all of them.

use super::{Keyword, ParseResult, Parser, SyntaxError};
use crate::ast::*;
use crate::lexer::TokenKind;
use bumpalo::collections::Vec;

impl<'a> Parser<'a> {
    /// Parses an optional description: a string literal preceding a type-system
    /// definition, carried as its raw lexeme.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Descriptions)
    pub(crate) fn parse_description(&mut self) -> ParseResult<Option<StringValue<'a>>> {
        if self.peek_kind(TokenKind::String)? {
            Ok(Some(StringValue {
                value: self.pop()?.data,
            }))
        } else {
            Ok(None)
        }
    }

    /// Parses a `SchemaDefinition` with its non-empty root operation type block.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
    pub(crate) fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition<'a>> {
        self.trace("schema_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Schema)?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.parse_root_operation_types()?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
        })
    }

    /// Parses the brace-delimited, non-empty list of root operation types.
    pub(crate) fn parse_root_operation_types(
        &mut self,
    ) -> ParseResult<Vec<'a, RootOperationTypeDefinition<'a>>> {
        self.trace("root_operation_types");
        self.expect(TokenKind::BraceOpen)?;
        let mut operation_types = Vec::new_in(&self.ctx.arena);
        loop {
            operation_types.push(self.parse_root_operation_type()?);
            if self.expect_optional(TokenKind::BraceClose)? {
                break;
            }
        }
        Ok(operation_types)
    }

    /// Parses one `operation: Type` pair of a schema definition or extension.
    pub(crate) fn parse_root_operation_type(
        &mut self,
    ) -> ParseResult<RootOperationTypeDefinition<'a>> {
        let operation = self.parse_operation_kind()?;
        self.expect(TokenKind::Colon)?;
        let named_type = NamedType {
            name: self.expect(TokenKind::Name)?.data,
        };
        Ok(RootOperationTypeDefinition {
            operation,
            named_type,
        })
    }

    /// Parses a `ScalarTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
    pub(crate) fn parse_scalar_type_definition(&mut self) -> ParseResult<ScalarTypeDefinition<'a>> {
        self.trace("scalar_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Scalar)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
        })
    }

    /// Parses an `ObjectTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
    pub(crate) fn parse_object_type_definition(&mut self) -> ParseResult<ObjectTypeDefinition<'a>> {
        self.trace("object_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Type)?;
        let name = self.expect(TokenKind::Name)?.data;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses an `InterfaceTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
    pub(crate) fn parse_interface_type_definition(
        &mut self,
    ) -> ParseResult<InterfaceTypeDefinition<'a>> {
        self.trace("interface_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Interface)?;
        let name = self.expect(TokenKind::Name)?.data;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses a `UnionTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
    pub(crate) fn parse_union_type_definition(&mut self) -> ParseResult<UnionTypeDefinition<'a>> {
        self.trace("union_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Union)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let members = self.parse_union_members()?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            members,
        })
    }

    /// Parses an `EnumTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
    pub(crate) fn parse_enum_type_definition(&mut self) -> ParseResult<EnumTypeDefinition<'a>> {
        self.trace("enum_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Enum)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values()?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
        })
    }

    /// Parses an `InputObjectTypeDefinition`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
    pub(crate) fn parse_input_object_type_definition(
        &mut self,
    ) -> ParseResult<InputObjectTypeDefinition<'a>> {
        self.trace("input_object_type_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Input)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields()?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
        })
    }

    /// Parses a `DirectiveDefinition` with its optional `repeatable` flag and
    /// non-empty location list.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
    pub(crate) fn parse_directive_definition(&mut self) -> ParseResult<DirectiveDefinition<'a>> {
        self.trace("directive_definition");
        let description = self.parse_description()?;
        self.expect_keyword(Keyword::Directive)?;
        self.expect(TokenKind::At)?;
        let name = self.expect(TokenKind::Name)?.data;
        let arguments = self.parse_argument_definitions()?;
        let repeatable = self.expect_optional_keyword(Keyword::Repeatable)?;
        self.expect_keyword(Keyword::On)?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    /// Parses a pipe-separated, non-empty list of directive locations, with an
    /// optional leading pipe.
    pub(crate) fn parse_directive_locations(&mut self) -> ParseResult<Vec<'a, DirectiveLocation>> {
        self.trace("directive_locations");
        self.expect_optional(TokenKind::Pipe)?;
        let mut locations = Vec::new_in(&self.ctx.arena);
        loop {
            let token = self.expect(TokenKind::Name)?;
            let location = DirectiveLocation::from_name(token.data)
                .ok_or_else(|| SyntaxError::UnknownDirectiveLocation(token.data.into()))?;
            locations.push(location);
            if !self.expect_optional(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }

    /// Parses an `implements` clause with its ampersand-separated, non-empty
    /// interface list, or nothing.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#ImplementsInterfaces)
    pub(crate) fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<'a, NamedType<'a>>> {
        self.trace("implements_interfaces");
        let mut interfaces = Vec::new_in(&self.ctx.arena);
        if self.expect_optional_keyword(Keyword::Implements)? {
            self.expect_optional(TokenKind::Ampersand)?;
            interfaces.push(NamedType {
                name: self.expect(TokenKind::Name)?.data,
            });
            while self.expect_optional(TokenKind::Ampersand)? {
                interfaces.push(NamedType {
                    name: self.expect(TokenKind::Name)?.data,
                });
            }
        }
        Ok(interfaces)
    }

    /// Parses a brace-delimited, non-empty list of field definitions, or nothing.
    pub(crate) fn parse_field_definitions(&mut self) -> ParseResult<Vec<'a, FieldDefinition<'a>>> {
        self.trace("field_definitions");
        let mut fields = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::BraceOpen)? {
            loop {
                fields.push(self.parse_field_definition()?);
                if self.expect_optional(TokenKind::BraceClose)? {
                    break;
                }
            }
        }
        Ok(fields)
    }

    /// Parses one field of an object or interface type definition.
    pub(crate) fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition<'a>> {
        self.trace("field_definition");
        let description = self.parse_description()?;
        let name = self.expect(TokenKind::Name)?.data;
        let arguments = self.parse_argument_definitions()?;
        self.expect(TokenKind::Colon)?;
        let of_type = self.parse_type()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            of_type,
            directives,
        })
    }

    /// Parses a parenthesized list of input value definitions, or nothing.
    ///
    /// Empty parentheses are tolerated and produce an empty list.
    pub(crate) fn parse_argument_definitions(
        &mut self,
    ) -> ParseResult<Vec<'a, InputValueDefinition<'a>>> {
        self.trace("argument_definitions");
        let mut arguments = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::ParenOpen)? {
            while !self.expect_optional(TokenKind::ParenClose)? {
                arguments.push(self.parse_input_value_definition()?);
            }
        }
        Ok(arguments)
    }

    /// Parses one input value definition, as used for field arguments, directive
    /// arguments, and input object fields.
    pub(crate) fn parse_input_value_definition(
        &mut self,
    ) -> ParseResult<InputValueDefinition<'a>> {
        self.trace("input_value_definition");
        let description = self.parse_description()?;
        let name = self.expect(TokenKind::Name)?.data;
        self.expect(TokenKind::Colon)?;
        let of_type = self.parse_type()?;
        let default_value = if self.expect_optional(TokenKind::Equal)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            of_type,
            default_value,
            directives,
        })
    }

    /// Parses a brace-delimited, non-empty list of enum value definitions, or
    /// nothing.
    pub(crate) fn parse_enum_values(&mut self) -> ParseResult<Vec<'a, EnumValueDefinition<'a>>> {
        self.trace("enum_values");
        let mut values = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::BraceOpen)? {
            loop {
                values.push(self.parse_enum_value_definition()?);
                if self.expect_optional(TokenKind::BraceClose)? {
                    break;
                }
            }
        }
        Ok(values)
    }

    /// Parses one enum value definition; `true`, `false`, and `null` are reserved.
    pub(crate) fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition<'a>> {
        self.trace("enum_value_definition");
        let description = self.parse_description()?;
        let token = self.expect(TokenKind::Name)?;
        if matches!(token.data, "true" | "false" | "null") {
            return Err(SyntaxError::ReservedEnumValueName(token.data.into()));
        }
        let value = EnumValue { value: token.data };
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            value,
            directives,
        })
    }

    /// Parses an `=`-introduced, pipe-separated, non-empty union member list with an
    /// optional leading pipe, or nothing.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#UnionMemberTypes)
    pub(crate) fn parse_union_members(&mut self) -> ParseResult<Vec<'a, NamedType<'a>>> {
        self.trace("union_members");
        let mut members = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::Equal)? {
            self.expect_optional(TokenKind::Pipe)?;
            members.push(NamedType {
                name: self.expect(TokenKind::Name)?.data,
            });
            while self.expect_optional(TokenKind::Pipe)? {
                members.push(NamedType {
                    name: self.expect(TokenKind::Name)?.data,
                });
            }
        }
        Ok(members)
    }

    /// Parses a brace-delimited, non-empty list of input fields, or nothing.
    pub(crate) fn parse_input_fields(&mut self) -> ParseResult<Vec<'a, InputValueDefinition<'a>>> {
        self.trace("input_fields");
        let mut fields = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::BraceOpen)? {
            loop {
                fields.push(self.parse_input_value_definition()?);
                if self.expect_optional(TokenKind::BraceClose)? {
                    break;
                }
            }
        }
        Ok(fields)
    }

    /// Parses a `TypeSystemExtension`, dispatching on the keyword after `extend`.
    ///
    /// Every extension must carry at least one clause; the check lives in the
    /// individual extension procedures since the permitted clauses differ per kind.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#TypeSystemExtension)
    pub(crate) fn parse_type_system_extension(&mut self) -> ParseResult<Definition<'a>> {
        self.trace("type_system_extension");
        self.expect_keyword(Keyword::Extend)?;
        let token = self.peek()?;
        if token.kind != TokenKind::Name {
            return Err(SyntaxError::unexpected_token(&token));
        }
        match Keyword::from_name(token.data) {
            Some(Keyword::Schema) => Ok(self.parse_schema_extension()?.into()),
            Some(Keyword::Scalar) => {
                Ok(TypeExtension::Scalar(self.parse_scalar_type_extension()?).into())
            }
            Some(Keyword::Type) => {
                Ok(TypeExtension::Object(self.parse_object_type_extension()?).into())
            }
            Some(Keyword::Interface) => {
                Ok(TypeExtension::Interface(self.parse_interface_type_extension()?).into())
            }
            Some(Keyword::Union) => {
                Ok(TypeExtension::Union(self.parse_union_type_extension()?).into())
            }
            Some(Keyword::Enum) => {
                Ok(TypeExtension::Enum(self.parse_enum_type_extension()?).into())
            }
            Some(Keyword::Input) => {
                Ok(TypeExtension::InputObject(self.parse_input_object_type_extension()?).into())
            }
            Some(_) => Err(SyntaxError::UnexpectedKeyword(token.data.into())),
            None => Err(SyntaxError::UnknownKeyword(token.data.into())),
        }
    }

    /// Fails with the token that would have had to start an extension clause.
    fn reject_empty_extension<T>(&mut self) -> ParseResult<T> {
        let token = self.peek()?;
        Err(SyntaxError::unexpected_token(&token))
    }

    /// Parses the remainder of a `SchemaExtension` after `extend`.
    pub(crate) fn parse_schema_extension(&mut self) -> ParseResult<SchemaExtension<'a>> {
        self.trace("schema_extension");
        self.expect_keyword(Keyword::Schema)?;
        let directives = self.parse_directives(true)?;
        let operation_types = if self.peek_kind(TokenKind::BraceOpen)? {
            self.parse_root_operation_types()?
        } else {
            Vec::new_in(&self.ctx.arena)
        };
        if directives.is_empty() && operation_types.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
        })
    }

    /// Parses the remainder of a scalar type extension after `extend`.
    pub(crate) fn parse_scalar_type_extension(&mut self) -> ParseResult<ScalarTypeExtension<'a>> {
        self.trace("scalar_type_extension");
        self.expect_keyword(Keyword::Scalar)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        if directives.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(ScalarTypeExtension { name, directives })
    }

    /// Parses the remainder of an object type extension after `extend`.
    pub(crate) fn parse_object_type_extension(&mut self) -> ParseResult<ObjectTypeExtension<'a>> {
        self.trace("object_type_extension");
        self.expect_keyword(Keyword::Type)?;
        let name = self.expect(TokenKind::Name)?.data;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses the remainder of an interface type extension after `extend`.
    pub(crate) fn parse_interface_type_extension(
        &mut self,
    ) -> ParseResult<InterfaceTypeExtension<'a>> {
        self.trace("interface_type_extension");
        self.expect_keyword(Keyword::Interface)?;
        let name = self.expect(TokenKind::Name)?.data;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses the remainder of a union type extension after `extend`.
    pub(crate) fn parse_union_type_extension(&mut self) -> ParseResult<UnionTypeExtension<'a>> {
        self.trace("union_type_extension");
        self.expect_keyword(Keyword::Union)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let members = self.parse_union_members()?;
        if directives.is_empty() && members.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(UnionTypeExtension {
            name,
            directives,
            members,
        })
    }

    /// Parses the remainder of an enum type extension after `extend`.
    pub(crate) fn parse_enum_type_extension(&mut self) -> ParseResult<EnumTypeExtension<'a>> {
        self.trace("enum_type_extension");
        self.expect_keyword(Keyword::Enum)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values()?;
        if directives.is_empty() && values.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(EnumTypeExtension {
            name,
            directives,
            values,
        })
    }

    /// Parses the remainder of an input object type extension after `extend`.
    pub(crate) fn parse_input_object_type_extension(
        &mut self,
    ) -> ParseResult<InputObjectTypeExtension<'a>> {
        self.trace("input_object_type_extension");
        self.expect_keyword(Keyword::Input)?;
        let name = self.expect(TokenKind::Name)?.data;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields()?;
        if directives.is_empty() && fields.is_empty() {
            return self.reject_empty_extension();
        }
        Ok(InputObjectTypeExtension {
            name,
            directives,
            fields,
        })
    }
}
