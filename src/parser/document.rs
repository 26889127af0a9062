//! Grammar procedures for executable documents: operations, fragments, selections,
//! values, and type references.

use super::{Keyword, ParseResult, Parser, SyntaxError};
use crate::ast::*;
use crate::lexer::TokenKind;
use bumpalo::collections::Vec;

impl<'a> Parser<'a> {
    /// Parses an `OperationDefinition`, including the anonymous shorthand form that
    /// consists of nothing but a selection set.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
    pub(crate) fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition<'a>> {
        self.trace("operation_definition");
        if self.peek_kind(TokenKind::BraceOpen)? {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default_in(&self.ctx.arena),
                directives: Directives::default_in(&self.ctx.arena),
                selection_set,
            });
        }
        let operation = self.parse_operation_kind()?;
        let name = if self.peek_kind(TokenKind::Name)? {
            Some(NamedType {
                name: self.pop()?.data,
            })
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Parses one of the three `OperationType` keywords.
    pub(crate) fn parse_operation_kind(&mut self) -> ParseResult<OperationKind> {
        self.trace("operation_kind");
        let token = self.pop()?;
        if token.kind != TokenKind::Name {
            return Err(SyntaxError::unexpected_token(&token));
        }
        match Keyword::from_name(token.data) {
            Some(Keyword::Query) => Ok(OperationKind::Query),
            Some(Keyword::Mutation) => Ok(OperationKind::Mutation),
            Some(Keyword::Subscription) => Ok(OperationKind::Subscription),
            Some(_) => Err(SyntaxError::UnexpectedKeyword(token.data.into())),
            None => Err(SyntaxError::UnknownKeyword(token.data.into())),
        }
    }

    /// Parses a `FragmentDefinition`; the fragment name `on` is reserved.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
    pub(crate) fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition<'a>> {
        self.trace("fragment_definition");
        self.expect_keyword(Keyword::Fragment)?;
        let token = self.expect(TokenKind::Name)?;
        if token.data == "on" {
            return Err(SyntaxError::UnexpectedFragmentName);
        }
        let name = NamedType { name: token.data };
        self.expect_keyword(Keyword::On)?;
        let type_condition = NamedType {
            name: self.expect(TokenKind::Name)?.data,
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses a brace-delimited, non-empty `SelectionSet`.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
    pub(crate) fn parse_selection_set(&mut self) -> ParseResult<SelectionSet<'a>> {
        self.trace("selection_set");
        self.expect(TokenKind::BraceOpen)?;
        let mut selections = Vec::new_in(&self.ctx.arena);
        loop {
            selections.push(self.parse_selection()?);
            if self.expect_optional(TokenKind::BraceClose)? {
                break;
            }
        }
        Ok(SelectionSet { selections })
    }

    /// Parses a selection set if one begins at the current token, and an empty one
    /// otherwise.
    pub(crate) fn parse_optional_selection_set(&mut self) -> ParseResult<SelectionSet<'a>> {
        if self.peek_kind(TokenKind::BraceOpen)? {
            self.parse_selection_set()
        } else {
            Ok(SelectionSet::default_in(&self.ctx.arena))
        }
    }

    /// Parses a single `Selection`.
    ///
    /// After a spread the next token decides between a fragment spread and an inline
    /// fragment: a name other than `on` is a spread, while `on`, a directive, or a
    /// brace opens an inline fragment.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#Selection)
    pub(crate) fn parse_selection(&mut self) -> ParseResult<Selection<'a>> {
        self.trace("selection");
        let token = self.peek()?;
        match token.kind {
            TokenKind::Name => Ok(Selection::Field(self.parse_field()?)),
            TokenKind::Ellipsis => {
                self.pop()?;
                let token = self.peek()?;
                match token.kind {
                    TokenKind::Name if token.data != "on" => {
                        Ok(Selection::FragmentSpread(self.parse_fragment_spread()?))
                    }
                    TokenKind::Name | TokenKind::At | TokenKind::BraceOpen => {
                        Ok(Selection::InlineFragment(self.parse_inline_fragment()?))
                    }
                    _ => Err(SyntaxError::unexpected_token(&token)),
                }
            }
            _ => Err(SyntaxError::unexpected_token(&token)),
        }
    }

    /// Parses a `Field` with an optional alias, arguments, directives, and a nested
    /// selection set.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
    pub(crate) fn parse_field(&mut self) -> ParseResult<Field<'a>> {
        self.trace("field");
        let name_or_alias = self.expect(TokenKind::Name)?.data;
        let (alias, name) = if self.expect_optional(TokenKind::Colon)? {
            (Some(name_or_alias), self.expect(TokenKind::Name)?.data)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_optional_selection_set()?;
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses the remainder of a `FragmentSpread` after its spread token.
    pub(crate) fn parse_fragment_spread(&mut self) -> ParseResult<FragmentSpread<'a>> {
        self.trace("fragment_spread");
        let name = NamedType {
            name: self.expect(TokenKind::Name)?.data,
        };
        let directives = self.parse_directives(false)?;
        Ok(FragmentSpread { name, directives })
    }

    /// Parses the remainder of an `InlineFragment` after its spread token.
    pub(crate) fn parse_inline_fragment(&mut self) -> ParseResult<InlineFragment<'a>> {
        self.trace("inline_fragment");
        let type_condition = if self.expect_optional_keyword(Keyword::On)? {
            Some(NamedType {
                name: self.expect(TokenKind::Name)?.data,
            })
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses a parenthesized argument list, or nothing.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#Arguments)
    pub(crate) fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Arguments<'a>> {
        self.trace("arguments");
        let mut children = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::ParenOpen)? {
            while !self.expect_optional(TokenKind::ParenClose)? {
                let name = self.expect(TokenKind::Name)?.data;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_value(is_const)?;
                children.push(Argument { name, value });
            }
        }
        Ok(Arguments { children })
    }

    /// Parses any number of directive applications, possibly zero.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
    pub(crate) fn parse_directives(&mut self, is_const: bool) -> ParseResult<Directives<'a>> {
        self.trace("directives");
        let mut children = Vec::new_in(&self.ctx.arena);
        while self.peek_kind(TokenKind::At)? {
            children.push(self.parse_directive(is_const)?);
        }
        Ok(Directives { children })
    }

    /// Parses a single directive application.
    pub(crate) fn parse_directive(&mut self, is_const: bool) -> ParseResult<Directive<'a>> {
        self.trace("directive");
        self.expect(TokenKind::At)?;
        let name = self.expect(TokenKind::Name)?.data;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive { name, arguments })
    }

    /// Parses any input `Value`.
    ///
    /// In constant positions, i.e. default values and type-system directive
    /// arguments, variables are rejected.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
    pub(crate) fn parse_value(&mut self, is_const: bool) -> ParseResult<Value<'a>> {
        self.trace("value");
        let token = self.peek()?;
        match token.kind {
            TokenKind::BracketOpen => {
                self.pop()?;
                let mut children = Vec::new_in(&self.ctx.arena);
                while !self.expect_optional(TokenKind::BracketClose)? {
                    children.push(self.parse_value(is_const)?);
                }
                Ok(Value::List(ListValue { children }))
            }
            TokenKind::BraceOpen => {
                self.pop()?;
                let mut children = Vec::new_in(&self.ctx.arena);
                while !self.expect_optional(TokenKind::BraceClose)? {
                    let name = self.expect(TokenKind::Name)?.data;
                    self.expect(TokenKind::Colon)?;
                    let value = self.parse_value(is_const)?;
                    children.push(ObjectField { name, value });
                }
                Ok(Value::Object(ObjectValue { children }))
            }
            TokenKind::Integer => {
                self.pop()?;
                Ok(Value::Int(IntValue { value: token.data }))
            }
            TokenKind::Float => {
                self.pop()?;
                Ok(Value::Float(FloatValue { value: token.data }))
            }
            TokenKind::String => {
                self.pop()?;
                Ok(Value::String(StringValue { value: token.data }))
            }
            TokenKind::Name => {
                self.pop()?;
                match token.data {
                    "true" => Ok(Value::Boolean(BooleanValue { value: true })),
                    "false" => Ok(Value::Boolean(BooleanValue { value: false })),
                    "null" => Ok(Value::Null),
                    value => Ok(Value::Enum(EnumValue { value })),
                }
            }
            TokenKind::Dollar if is_const => {
                self.pop()?;
                let next = self.peek()?;
                if next.kind == TokenKind::Name {
                    Err(SyntaxError::UnexpectedVariable(next.data.into()))
                } else {
                    Err(SyntaxError::unexpected_token(&token))
                }
            }
            TokenKind::Dollar => {
                self.pop()?;
                let name = self.expect(TokenKind::Name)?.data;
                Ok(Value::Variable(Variable { name }))
            }
            _ => Err(SyntaxError::unexpected_token(&token)),
        }
    }

    /// Parses a type reference: a named type, a bracketed list type, or either
    /// wrapped as non-null by a trailing `!`.
    ///
    /// Only one level of non-null wrapping is grammatical; a `!` directly wrapping a
    /// non-null type is left unconsumed here and rejected by the caller's grammar
    /// rule.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type<'a>> {
        self.trace("type");
        let token = self.pop()?;
        let of_type = match token.kind {
            TokenKind::BracketOpen => {
                let inner = self.parse_type()?;
                self.expect(TokenKind::BracketClose)?;
                Type::ListType(self.ctx.alloc(inner))
            }
            TokenKind::Name => Type::NamedType(NamedType { name: token.data }),
            _ => return Err(SyntaxError::unexpected_token(&token)),
        };
        if self.expect_optional(TokenKind::Exclam)? {
            Ok(Type::NonNullType(self.ctx.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }

    /// Parses a parenthesized, non-empty list of variable definitions, or nothing.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
    pub(crate) fn parse_variable_definitions(&mut self) -> ParseResult<VariableDefinitions<'a>> {
        self.trace("variable_definitions");
        let mut children = Vec::new_in(&self.ctx.arena);
        if self.expect_optional(TokenKind::ParenOpen)? {
            loop {
                children.push(self.parse_variable_definition()?);
                if self.expect_optional(TokenKind::ParenClose)? {
                    break;
                }
            }
        }
        Ok(VariableDefinitions { children })
    }

    /// Parses a single variable definition; its default value and directives are
    /// constant, so neither may refer to another variable.
    pub(crate) fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition<'a>> {
        self.trace("variable_definition");
        self.expect(TokenKind::Dollar)?;
        let variable = Variable {
            name: self.expect(TokenKind::Name)?.data,
        };
        self.expect(TokenKind::Colon)?;
        let of_type = self.parse_type()?;
        let default_value = if self.expect_optional(TokenKind::Equal)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
        })
    }
}
