use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::token::GraphQLToken;

/// The single error that ends a parse.
///
/// Carries a human-readable message, the span where the failure was
/// detected, a [`GraphQLParseErrorKind`] for programmatic matching and any
/// contextual notes. `Display` renders the one-line form; use
/// [`format_detailed()`](Self::format_detailed) for a diagnostic with a
/// source snippet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For syntax errors: the offending token's span
    /// - For lexer errors: the point of failure reported by the lexer
    /// - For unclosed delimiters: the end of input
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions and related
    /// locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self::with_notes(message, span, kind, GraphQLErrorNotes::new())
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Converts a `LexError` token into a parse error, keeping the lexer's
    /// message, span and notes.
    pub fn from_lexer_error(token: GraphQLToken) -> Self {
        Self::with_notes(
            token.value,
            token.span,
            GraphQLParseErrorKind::LexerError,
            token.error_notes,
        )
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Byte offset of the point of failure.
    pub fn position(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: Expected `:` after variable name, found name `Int`
    ///   --> query.graphql:1:13
    ///    |
    ///  1 | query Q($id Int) { x }
    ///    |             ^^^
    ///    = spec: https://spec.graphql.org/October2021/#VariableDefinition
    /// ```
    ///
    /// Without `source` the snippet is omitted but the location line is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!("error: {}\n", self.message);
        output.push_str(&format!("  --> {}\n", self.location()));

        if let Some(src) = source
            && let Some(snippet) = format_primary_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single line.
    ///
    /// ```text
    /// query.graphql:1:13: error: Expected `:` after variable name, found name `Int`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location(), self.message)
    }

    /// `file:line:col` with 1-based line and column.
    fn location(&self) -> String {
        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("{file_name}:{line}:{column}")
    }
}

/// Returns the 0-based `line_num`th line of `source`, treating `\r\n`, `\r`
/// and `\n` as terminators the same way the lexer does.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    source
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .nth(line_num)
}

fn format_primary_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let underline_len = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col_utf8().saturating_sub(col_start).max(1)
    } else {
        line_content.chars().count().saturating_sub(col_start).max(1)
    };

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
    ));
    Some(output)
}

fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);
    let col_start = span.start_inclusive.col_utf8();

    let mut output = String::new();
    output.push_str(&format!("     {display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!("     {:>width$} | {:>col_start$}-\n", "", ""));
    Some(output)
}
