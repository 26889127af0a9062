use std::fmt;

/// The kind of a lexical token.
///
/// Every byte of a GraphQL source text belongs to exactly one token, including
/// whitespace, commas, and comments. The parser later filters the kinds that are
/// insignificant to the grammar, but the lexer reports all of them so that the token
/// stream reproduces the source.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Lexical-Tokens)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    /// A run of ignored whitespace or line terminators
    Whitespace,
    /// A `#` comment up to (excluding) the next line terminator
    Comment,
    /// `!`
    Exclam,
    /// `$`
    Dollar,
    /// `&`
    Ampersand,
    /// `...`
    Ellipsis,
    /// `,`, which GraphQL treats as insignificant
    Comma,
    /// `:`
    Colon,
    /// `=`
    Equal,
    /// `@`
    At,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `|`
    Pipe,
    /// An identifier, keyword, or enum value
    Name,
    /// A quoted or triple-quoted string literal, quotes included
    String,
    /// An integer literal
    Integer,
    /// A floating point literal
    Float,
    /// The end of the source text; emitted exactly once, as the final token
    End,
}

impl TokenKind {
    /// Whether the kind is lexically present but invisible to the grammar.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Whitespace => f.write_str("whitespace"),
            TokenKind::Comment => f.write_str("comment"),
            TokenKind::Exclam => f.write_str("`!`"),
            TokenKind::Dollar => f.write_str("`$`"),
            TokenKind::Ampersand => f.write_str("`&`"),
            TokenKind::Ellipsis => f.write_str("`...`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Colon => f.write_str("`:`"),
            TokenKind::Equal => f.write_str("`=`"),
            TokenKind::At => f.write_str("`@`"),
            TokenKind::ParenOpen => f.write_str("`(`"),
            TokenKind::ParenClose => f.write_str("`)`"),
            TokenKind::BracketOpen => f.write_str("`[`"),
            TokenKind::BracketClose => f.write_str("`]`"),
            TokenKind::BraceOpen => f.write_str("`{`"),
            TokenKind::BraceClose => f.write_str("`}`"),
            TokenKind::Pipe => f.write_str("`|`"),
            TokenKind::Name => f.write_str("name"),
            TokenKind::String => f.write_str("string value"),
            TokenKind::Integer => f.write_str("integer value"),
            TokenKind::Float => f.write_str("float value"),
            TokenKind::End => f.write_str("end of input"),
        }
    }
}

/// A single lexical token.
///
/// The `data` slice borrows the token's bytes directly from the source text; for
/// string values that includes the surrounding quotes, and escape sequences are left
/// uninterpreted. Concatenating the `data` of all tokens in emission order, the
/// terminal [`TokenKind::End`] token included, reproduces the source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The token's bytes, aliasing the source text
    pub data: &'a str,
    /// The byte offset of the token's first byte in the source text
    pub index: usize,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Name
            | TokenKind::String
            | TokenKind::Integer
            | TokenKind::Float => write!(f, "{} `{}`", self.kind, self.data),
            _ => write!(f, "{}", self.kind),
        }
    }
}
