//! Recursive descent parser for GraphQL executable documents.
//!
//! This module provides [`GraphQLParser`], a parser that works with any
//! token source implementing [`GraphQLTokenSource`].
//!
//! # Architecture
//!
//! Every grammar rule has a corresponding `parse_*` method returning
//! `Result<AstNode, GraphQLParseError>`. The rules are driven by three
//! primitives over the token stream:
//!
//! - [`peek()`](GraphQLParser::peek): is the current token of a kind?
//! - [`expect()`](GraphQLParser::expect): consume a token of a kind or fail
//! - [`skip()`](GraphQLParser::skip): consume a token of a kind if present
//!
//! The first error ends the parse; there is no recovery and no partial AST.
//! A `LexError` token reached anywhere is reported as a
//! [`GraphQLParseErrorKind::LexerError`].

use crate::GraphQLErrorNote;
use crate::GraphQLLexer;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserOptions;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use smallvec::smallvec;

const OPERATION_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Language.Operations";
const FRAGMENT_NAME_SPEC_URL: &str = "https://spec.graphql.org/October2021/#FragmentName";
const NON_NULL_SPEC_URL: &str = "https://spec.graphql.org/October2021/#NonNullType";
const VARIABLE_DEFINITIONS_SPEC_URL: &str = "https://spec.graphql.org/October2021/#VariableDefinitions";

/// A recursive descent parser for GraphQL executable documents.
///
/// Generic over the token source, so the same parser runs over a
/// [`GraphQLLexer`] or any other iterator of [`GraphQLToken`]s.
///
/// # Usage
///
/// ```
/// use gqlscan::GraphQLParser;
/// use gqlscan::ast::OperationKind;
///
/// let parser = GraphQLParser::new("mutation { like }");
/// let document = parser.parse_document().unwrap();
/// let operation = document.operations().next().unwrap();
/// assert_eq!(operation.kind, OperationKind::Mutation);
/// ```
pub struct GraphQLParser<TTokenSource: GraphQLTokenSource> {
    /// The underlying token stream holding the current token.
    token_stream: GraphQLTokenStream<TTokenSource>,

    /// Current nesting depth of type references being parsed.
    recursion_depth: usize,

    /// The deepest type reference nesting allowed.
    max_type_nesting_depth: usize,

    /// End position of the most recently consumed token, used to close the
    /// spans of multi-token nodes.
    last_end_position: SourcePosition,
}

impl<'src> GraphQLParser<GraphQLLexer<'src>> {
    /// Creates a new parser over `source` with default options.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(GraphQLLexer::new(source))
    }

    /// Creates a new parser over `source`, applying `options` to both the
    /// lexer and the parser.
    pub fn with_options(source: &'src str, options: &GraphQLParserOptions) -> Self {
        Self::from_token_source_with_options(
            GraphQLLexer::with_options(source, options),
            options,
        )
    }
}

impl<TTokenSource: GraphQLTokenSource> GraphQLParser<TTokenSource> {
    /// Creates a new parser from a token source with default options.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self::from_token_source_with_options(token_source, &GraphQLParserOptions::default())
    }

    /// Creates a new parser from a token source.
    ///
    /// Only the parser-level settings of `options` apply here; lexical
    /// settings belong to whoever built `token_source`.
    pub fn from_token_source_with_options(
        token_source: TTokenSource,
        options: &GraphQLParserOptions,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
            max_type_nesting_depth: options.max_type_nesting_depth,
            last_end_position: SourcePosition::default(),
        }
    }

    /// Parses a complete document.
    ///
    /// Returns the document, or the first lexical or syntax error.
    pub fn parse_document(mut self) -> Result<ast::Document, GraphQLParseError> {
        log::debug!("parsing GraphQL document");
        let result = self.parse_document_impl();
        match &result {
            Ok(document) => log::debug!(
                "parsed GraphQL document with {} definition(s)",
                document.definitions.len(),
            ),
            Err(error) => log::debug!("GraphQL parse failed: {error}"),
        }
        result
    }

    fn parse_document_impl(&mut self) -> Result<ast::Document, GraphQLParseError> {
        self.expect(GraphQLTokenKind::StartOfFile)?;

        let mut definitions = Vec::new();
        while !self.skip(GraphQLTokenKind::EndOfFile) {
            let definition = self.parse_definition()?;
            log::trace!(
                "parsed definition at byte {}",
                definition.span().start_inclusive.byte_offset(),
            );
            definitions.push(definition);
        }

        Ok(ast::Document { definitions })
    }

    // =========================================================================
    // Token primitives
    // =========================================================================

    /// Checks if the current token is of `kind` without consuming.
    pub fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.token_stream.peek_kind() == kind
    }

    /// Consumes and returns the current token if it is of `kind`; otherwise
    /// fails naming the expected and found kinds.
    pub fn expect(
        &mut self,
        kind: GraphQLTokenKind,
    ) -> Result<GraphQLToken, GraphQLParseError> {
        if self.peek(kind) {
            Ok(self.consume_token())
        } else {
            Err(self.unexpected(vec![kind], &kind.to_string()))
        }
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// Returns whether a token was consumed.
    pub fn skip(&mut self, kind: GraphQLTokenKind) -> bool {
        if self.peek(kind) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    /// Checks if the current token is the name `keyword`.
    fn peek_keyword(&self, keyword: &str) -> bool {
        let token = self.token_stream.peek();
        token.kind == GraphQLTokenKind::Name && token.value == keyword
    }

    /// Consumes the name `keyword` or fails.
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken, GraphQLParseError> {
        if self.peek_keyword(keyword) {
            Ok(self.consume_token())
        } else {
            Err(self.unexpected(vec![GraphQLTokenKind::Name], &format!("`{keyword}`")))
        }
    }

    /// Advances past the current token and tracks its end position.
    fn consume_token(&mut self) -> GraphQLToken {
        let token = self.token_stream.advance();
        self.last_end_position = token.span.end_exclusive;
        token
    }

    /// Builds a span from the start of `start` to the end of the most
    /// recently consumed token.
    fn span_from(&self, start: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        start.to(&start.empty_at(self.last_end_position))
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    /// Builds the error for a current token that does not fit the grammar.
    ///
    /// `what` describes the expectation for the message. A `LexError`
    /// current token takes precedence and is reported as a lexer error.
    fn unexpected(
        &self,
        expected: Vec<GraphQLTokenKind>,
        what: &str,
    ) -> GraphQLParseError {
        let token = self.token_stream.peek();
        match token.kind {
            GraphQLTokenKind::LexError => GraphQLParseError::from_lexer_error(token.clone()),
            GraphQLTokenKind::EndOfFile => GraphQLParseError::new(
                format!("Expected {what}, found end of input"),
                token.span.clone(),
                GraphQLParseErrorKind::UnexpectedEof { expected },
            ),
            found => GraphQLParseError::new(
                format!("Expected {what}, found {}", describe_token(token)),
                token.span.clone(),
                GraphQLParseErrorKind::UnexpectedToken { expected, found },
            ),
        }
    }

    /// Builds the error for a delimiter still open at end of input.
    fn unclosed_delimiter(
        &self,
        delimiter: GraphQLTokenKind,
        open_span: &GraphQLSourceSpan,
    ) -> GraphQLParseError {
        let delimiter = delimiter.as_punctuator_str().unwrap_or_default();
        GraphQLParseError::with_notes(
            format!("Unclosed `{delimiter}`"),
            self.token_stream.peek().span.clone(),
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
            smallvec![GraphQLErrorNote::general_with_span(
                format!("Opening `{delimiter}` here"),
                open_span.clone(),
            )],
        )
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Parses one top-level definition.
    ///
    /// Dispatches on the current token: `{` starts a shorthand query, the
    /// operation keywords start a full operation and `fragment` starts a
    /// fragment definition.
    fn parse_definition(&mut self) -> Result<ast::Definition, GraphQLParseError> {
        let token = self.token_stream.peek();
        match token.kind {
            GraphQLTokenKind::BraceLeft => {
                let selection_set = self.parse_selection_set()?;
                Ok(ast::Definition::Operation(ast::OperationDefinition {
                    kind: ast::OperationKind::Query,
                    name: None,
                    variable_definitions: Vec::new(),
                    span: selection_set.span.clone(),
                    selection_set,
                }))
            },
            GraphQLTokenKind::Name
                if ast::OperationKind::from_keyword(&token.value).is_some() => {
                self.parse_operation_definition().map(ast::Definition::Operation)
            },
            GraphQLTokenKind::Name if token.value == "fragment" => {
                self.parse_fragment_definition().map(ast::Definition::Fragment)
            },
            _ => {
                let mut error = self.unexpected(
                    vec![GraphQLTokenKind::BraceLeft, GraphQLTokenKind::Name],
                    "`{`, `query`, `mutation`, `subscription` or `fragment`",
                );
                if !matches!(error.kind(), GraphQLParseErrorKind::LexerError) {
                    error = GraphQLParseError::with_notes(
                        format!("Invalid operation: {}", lowercase_first(error.message())),
                        error.span().clone(),
                        error.kind().clone(),
                        smallvec![GraphQLErrorNote::spec(OPERATION_SPEC_URL)],
                    );
                }
                Err(error)
            },
        }
    }

    /// Parses `OperationKind Name? VariableDefinitions? SelectionSet`.
    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition, GraphQLParseError> {
        let keyword = self.expect(GraphQLTokenKind::Name)?;
        let Some(kind) = ast::OperationKind::from_keyword(&keyword.value) else {
            return Err(GraphQLParseError::new(
                format!(
                    "Expected `query`, `mutation` or `subscription`, found name `{}`",
                    keyword.value,
                ),
                keyword.span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec![GraphQLTokenKind::Name],
                    found: GraphQLTokenKind::Name,
                },
            ));
        };

        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            span: keyword.span.to(&selection_set.span),
            selection_set,
        })
    }

    /// Parses `fragment Name on NamedType SelectionSet`.
    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition, GraphQLParseError> {
        let keyword = self.expect_keyword("fragment")?;

        let name = self.parse_name()?;
        if name.value == "on" {
            let mut error = GraphQLParseError::new(
                "Fragment name cannot be `on`",
                name.span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_spec(FRAGMENT_NAME_SPEC_URL);
            return Err(error);
        }

        self.expect_keyword("on")?;
        let type_condition = self.parse_name()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            span: keyword.span.to(&selection_set.span),
            selection_set,
        })
    }

    fn parse_name(&mut self) -> Result<ast::Name, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(ast::Name {
            value: token.value,
            span: token.span,
        })
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    /// Parses `( VariableDefinition+ )`, or nothing when the current token is
    /// not `(`.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition>, GraphQLParseError> {
        if !self.peek(GraphQLTokenKind::ParenLeft) {
            return Ok(Vec::new());
        }
        let open = self.consume_token();

        if self.peek(GraphQLTokenKind::ParenRight) {
            let close = self.consume_token();
            let mut error = GraphQLParseError::new(
                "Variable definitions cannot be empty",
                open.span.to(&close.span),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "variable definitions".to_string(),
                },
            );
            error.add_help("Remove the `()` or declare at least one variable");
            error.add_spec(VARIABLE_DEFINITIONS_SPEC_URL);
            return Err(error);
        }

        let mut definitions = Vec::new();
        loop {
            if self.peek(GraphQLTokenKind::EndOfFile) {
                return Err(self.unclosed_delimiter(GraphQLTokenKind::ParenLeft, &open.span));
            }
            definitions.push(self.parse_variable_definition()?);
            if self.skip(GraphQLTokenKind::ParenRight) {
                return Ok(definitions);
            }
        }
    }

    /// Parses `$ Name : Type (= DefaultValue)?`.
    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition, GraphQLParseError> {
        let dollar = self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_reference = self.parse_type_reference()?;

        let default_value = if self.skip(GraphQLTokenKind::Equals) {
            Some(self.parse_default_value()?)
        } else {
            None
        };

        Ok(ast::VariableDefinition {
            name,
            type_reference,
            default_value,
            span: self.span_from(&dollar.span),
        })
    }

    /// Parses the single token after `=`.
    fn parse_default_value(&mut self) -> Result<GraphQLToken, GraphQLParseError> {
        if self.token_stream.peek_kind().is_value() {
            Ok(self.consume_token())
        } else {
            Err(self.unexpected(
                vec![
                    GraphQLTokenKind::Int,
                    GraphQLTokenKind::Float,
                    GraphQLTokenKind::String,
                    GraphQLTokenKind::Name,
                ],
                "a default value",
            ))
        }
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Name`, `[ Type ]` or either followed by `!`.
    ///
    /// Nesting deeper than the configured limit fails with
    /// [`GraphQLParseErrorKind::NestingTooDeep`] instead of growing the
    /// stack without bound.
    fn parse_type_reference(&mut self) -> Result<ast::TypeReference, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> Result<ast::TypeReference, GraphQLParseError> {
        let base = match self.token_stream.peek_kind() {
            GraphQLTokenKind::Name => ast::TypeReference::Named(self.consume_token().value),
            GraphQLTokenKind::BracketLeft => {
                let open = self.consume_token();
                let inner = self.parse_type_reference()?;
                if self.peek(GraphQLTokenKind::EndOfFile) {
                    return Err(self.unclosed_delimiter(GraphQLTokenKind::BracketLeft, &open.span));
                }
                self.expect(GraphQLTokenKind::BracketRight)?;
                ast::TypeReference::List(Box::new(inner))
            },
            _ => {
                return Err(self.unexpected(
                    vec![GraphQLTokenKind::Name, GraphQLTokenKind::BracketLeft],
                    "a type",
                ));
            },
        };

        if !self.skip(GraphQLTokenKind::Bang) {
            return Ok(base);
        }

        if self.peek(GraphQLTokenKind::Bang) {
            let mut error = GraphQLParseError::new(
                format!("Type `{base}!` is already non-null"),
                self.token_stream.peek().span.clone(),
                GraphQLParseErrorKind::RedundantNonNull,
            );
            error.add_help("Remove the extra `!`");
            error.add_spec(NON_NULL_SPEC_URL);
            return Err(error);
        }

        Ok(ast::TypeReference::NonNull(Box::new(base)))
    }

    /// Increments the nesting depth, failing once it passes the limit. The
    /// caller must call `exit_recursion()` after a successful entry.
    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        if self.recursion_depth >= self.max_type_nesting_depth {
            return Err(GraphQLParseError::new(
                format!(
                    "Type reference nested too deeply (limit {})",
                    self.max_type_nesting_depth,
                ),
                self.token_stream.peek().span.clone(),
                GraphQLParseErrorKind::NestingTooDeep {
                    limit: self.max_type_nesting_depth,
                },
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses a braced selection set without interpreting its contents.
    ///
    /// Tokens are consumed up to the `}` matching the opening `{`, tracking
    /// nested braces. A `LexError` inside still fails the parse.
    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, GraphQLParseError> {
        let open = self.expect(GraphQLTokenKind::BraceLeft)?;
        let mut depth = 1usize;

        loop {
            match self.token_stream.peek_kind() {
                GraphQLTokenKind::BraceLeft => {
                    self.consume_token();
                    depth += 1;
                },
                GraphQLTokenKind::BraceRight => {
                    let close = self.consume_token();
                    depth -= 1;
                    if depth == 0 {
                        return Ok(ast::SelectionSet {
                            span: open.span.to(&close.span),
                        });
                    }
                },
                GraphQLTokenKind::EndOfFile => {
                    return Err(self.unclosed_delimiter(GraphQLTokenKind::BraceLeft, &open.span));
                },
                GraphQLTokenKind::LexError => {
                    return Err(GraphQLParseError::from_lexer_error(self.consume_token()));
                },
                _ => {
                    self.consume_token();
                },
            }
        }
    }
}

/// Describes a token for "found ..." messages, e.g. "name `Foo`".
fn describe_token(token: &GraphQLToken) -> String {
    match token.kind {
        GraphQLTokenKind::Name
        | GraphQLTokenKind::Int
        | GraphQLTokenKind::Float => format!("{} `{}`", token.kind, token.value),
        GraphQLTokenKind::String => format!("string {:?}", token.value),
        kind => kind.to_string(),
    }
}

fn lowercase_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
