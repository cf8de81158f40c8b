/// Settings shared by [`GraphQLLexer`](crate::GraphQLLexer) and
/// [`GraphQLParser`](crate::GraphQLParser).
///
/// Deserializing fills any missing field with its default, so a config file
/// only needs to mention the settings it changes.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GraphQLParserOptions {
    /// When `true`, a `.` or an exponent marker (after its optional sign)
    /// must be followed by at least one digit. When `false`, literals such
    /// as `1.` and `2e` lex as floats.
    pub strict_number_literals: bool,

    /// How many type references may be nested inside one another (each `[`
    /// adds a level) before parsing fails with
    /// [`NestingTooDeep`](crate::GraphQLParseErrorKind::NestingTooDeep).
    pub max_type_nesting_depth: usize,
}

impl GraphQLParserOptions {
    pub const DEFAULT_MAX_TYPE_NESTING_DEPTH: usize = 64;
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            strict_number_literals: true,
            max_type_nesting_depth: Self::DEFAULT_MAX_TYPE_NESTING_DEPTH,
        }
    }
}
