use std::fmt;

/// The kind of a GraphQL token.
///
/// This enumeration is a stable contract: consumers may rely on the set of
/// variants and their order. Payloads (names, literal text, comment text and
/// lexer error messages) live on [`GraphQLToken::value`](crate::token::GraphQLToken::value)
/// rather than on the kind, so kinds are cheap to copy and compare.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g. an `Int`
/// with value `"-123"`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum GraphQLTokenKind {
    /// Synthetic token preceding the first real token of a document.
    StartOfFile,
    /// End of input.
    EndOfFile,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketLeft,
    /// `]`
    BracketRight,
    /// `{`
    BraceLeft,
    /// `|`
    Pipe,
    /// `}`
    BraceRight,
    /// A name matching `/[_A-Za-z][_0-9A-Za-z]*/`. Keywords such as `query`
    /// or `true` are names too.
    Name,
    /// Raw source text of an integer literal, including an optional leading
    /// `-`.
    Int,
    /// Raw source text of a float literal, including an optional leading
    /// `-`.
    Float,
    /// A quoted string literal. The token value is the decoded content.
    String,
    /// A `#` comment running to the end of the line. Never surfaced by
    /// [`GraphQLLexer::next_token()`](crate::GraphQLLexer::next_token).
    Comment,
    /// A lexer error. The token value is a human-readable message.
    LexError,
}

impl GraphQLTokenKind {
    /// Returns the source text of this kind if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::ParenLeft => Some("("),
            GraphQLTokenKind::ParenRight => Some(")"),
            GraphQLTokenKind::Spread => Some("..."),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::BracketLeft => Some("["),
            GraphQLTokenKind::BracketRight => Some("]"),
            GraphQLTokenKind::BraceLeft => Some("{"),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::BraceRight => Some("}"),

            GraphQLTokenKind::StartOfFile
            | GraphQLTokenKind::EndOfFile
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::Int
            | GraphQLTokenKind::Float
            | GraphQLTokenKind::String
            | GraphQLTokenKind::Comment
            | GraphQLTokenKind::LexError => None,
        }
    }

    /// Returns `true` if this kind is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if a token of this kind can stand alone as a literal
    /// value (`Int`, `Float`, `String`, or a `Name` such as `true`, `null` or
    /// an enum value).
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Int
                | GraphQLTokenKind::Float
                | GraphQLTokenKind::String
                | GraphQLTokenKind::Name
        )
    }

    /// Returns a short human-readable description for error messages.
    pub fn description(&self) -> &'static str {
        match self {
            GraphQLTokenKind::StartOfFile => "start of input",
            GraphQLTokenKind::EndOfFile => "end of input",
            GraphQLTokenKind::Name => "name",
            GraphQLTokenKind::Int => "integer",
            GraphQLTokenKind::Float => "float",
            GraphQLTokenKind::String => "string",
            GraphQLTokenKind::Comment => "comment",
            GraphQLTokenKind::LexError => "invalid token",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Dollar => "$",
            GraphQLTokenKind::ParenLeft => "(",
            GraphQLTokenKind::ParenRight => ")",
            GraphQLTokenKind::Spread => "...",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::BracketLeft => "[",
            GraphQLTokenKind::BracketRight => "]",
            GraphQLTokenKind::BraceLeft => "{",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::BraceRight => "}",
        }
    }
}

impl fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_punctuator_str() {
            Some(punctuator) => write!(f, "`{punctuator}`"),
            None => f.write_str(self.description()),
        }
    }
}
