//! A lexer over `&str` input that produces [`GraphQLToken`]s on demand.
//!
//! # Features
//!
//! - **Owned token values**: names, numbers and decoded strings are copied
//!   out of the source so tokens outlive the input buffer
//! - **Dual column tracking**: Reports both UTF-8 character positions (for
//!   display) and UTF-16 code unit positions (for LSP compatibility)
//! - **Comment filtering**: `#` comments are scanned as `Comment` tokens by
//!   the raw scanner but never surfaced by [`GraphQLLexer::next_token()`]
//! - **No aborts**: every malformed input (control characters, bad escapes,
//!   unterminated strings) becomes a `LexError` token
//!
//! # Usage
//!
//! ```rust
//! use gqlscan::GraphQLLexer;
//!
//! let lexer = GraphQLLexer::new("{ name }");
//! for token in lexer {
//!     println!("{token}");
//! }
//! // Output:
//! // BraceLeft
//! // Name("name")
//! // BraceRight
//! // EndOfFile
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParserOptions;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use smallvec::smallvec;
use std::path::Path;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";
const STRING_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-String-Value";

/// A GraphQL lexer over a borrowed `&str`.
///
/// The lexer owns only a scan cursor; it keeps no "current token". Lookahead
/// is the job of [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// See module documentation for details.
pub struct GraphQLLexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`. This
    /// always points at the first unconsumed byte.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current Unicode scalar value column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline.
    last_char_was_cr: bool,

    /// Whether `.` and exponent markers must be followed by a digit.
    strict_number_literals: bool,

    /// Whether the `EndOfFile` token has been yielded by the iterator.
    finished: bool,

    /// Optional file path for spans and error messages.
    file_path: Option<&'src Path>,
}

impl<'src> GraphQLLexer<'src> {
    /// Creates a new lexer over `source` with default options.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gqlscan::GraphQLLexer;
    /// let lexer = GraphQLLexer::new("{ name }");
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, &GraphQLParserOptions::default())
    }

    /// Creates a new lexer over `source` using the lexical settings in
    /// `options`.
    pub fn with_options(source: &'src str, options: &GraphQLParserOptions) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            strict_number_literals: options.strict_number_literals,
            finished: false,
            file_path: None,
        }
    }

    /// Attaches a file path that is recorded in every token span.
    pub fn with_file_path(mut self, path: &'src Path) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Returns the next token that is not a comment.
    ///
    /// Once the input is exhausted this keeps returning `EndOfFile` tokens
    /// positioned at the end of the source.
    pub fn next_token(&mut self) -> GraphQLToken {
        loop {
            let token = self.read_token();
            if token.kind != GraphQLTokenKind::Comment {
                return token;
            }
        }
    }

    /// Returns the byte offset of the first unconsumed byte.
    pub fn byte_offset(&self) -> usize {
        self.curr_byte_offset
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    /// Peeks at the next character without consuming it.
    ///
    /// Returns `None` if at end of input.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    ///
    /// Returns `None` if there aren't enough characters remaining.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Returns `None` (and leaves the cursor untouched) at end of input.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // The \n of a \r\n pair: the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    /// Creates a token whose value is the source text from `start` to the
    /// cursor.
    fn make_sliced_token(
        &self,
        kind: GraphQLTokenKind,
        start: SourcePosition,
    ) -> GraphQLToken {
        let text = &self.source[start.byte_offset()..self.curr_byte_offset];
        GraphQLToken::new(kind, text, self.make_span(start))
    }

    // =========================================================================
    // Lexer main dispatch
    // =========================================================================

    /// Scans exactly one token, comments included.
    ///
    /// Every call either advances the cursor past the returned token or, at
    /// end of input, returns `EndOfFile` without moving.
    pub(crate) fn read_token(&mut self) -> GraphQLToken {
        self.skip_ignored();

        let start = self.curr_position();
        let Some(ch) = self.peek_char() else {
            return GraphQLToken::new(
                GraphQLTokenKind::EndOfFile,
                String::new(),
                self.make_span(start),
            );
        };

        match ch {
            '#' => self.lex_comment(start),

            '!' => self.lex_punctuator(GraphQLTokenKind::Bang, start),
            '$' => self.lex_punctuator(GraphQLTokenKind::Dollar, start),
            '(' => self.lex_punctuator(GraphQLTokenKind::ParenLeft, start),
            ')' => self.lex_punctuator(GraphQLTokenKind::ParenRight, start),
            ':' => self.lex_punctuator(GraphQLTokenKind::Colon, start),
            '=' => self.lex_punctuator(GraphQLTokenKind::Equals, start),
            '@' => self.lex_punctuator(GraphQLTokenKind::At, start),
            '[' => self.lex_punctuator(GraphQLTokenKind::BracketLeft, start),
            ']' => self.lex_punctuator(GraphQLTokenKind::BracketRight, start),
            '{' => self.lex_punctuator(GraphQLTokenKind::BraceLeft, start),
            '|' => self.lex_punctuator(GraphQLTokenKind::Pipe, start),
            '}' => self.lex_punctuator(GraphQLTokenKind::BraceRight, start),

            '.' => self.lex_spread(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => self.lex_name(start),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            _ => self.lex_invalid_character(start),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips "ignored tokens": space, tab, line terminators, commas and the
    /// byte order mark.
    ///
    /// See: <https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        self.consume_while(|ch| {
            matches!(ch, ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}')
        });
    }

    // =========================================================================
    // Simple tokens
    // =========================================================================

    fn lex_punctuator(
        &mut self,
        kind: GraphQLTokenKind,
        start: SourcePosition,
    ) -> GraphQLToken {
        self.consume();
        GraphQLToken::new(kind, String::new(), self.make_span(start))
    }

    /// Lexes a comment: `#` through the end of the line.
    ///
    /// The comment stops at the first character that is neither a tab nor at
    /// least U+0020, so line terminators and stray control characters are
    /// left for the next scan.
    fn lex_comment(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        self.consume_while(|ch| ch >= ' ' || ch == '\t');
        self.make_sliced_token(GraphQLTokenKind::Comment, start)
    }

    /// Lexes `...`, or reports an error for any other run of dots.
    fn lex_spread(&mut self, start: SourcePosition) -> GraphQLToken {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return GraphQLToken::new(
                GraphQLTokenKind::Spread,
                String::new(),
                self.make_span(start),
            );
        }

        self.consume();
        if self.peek_char() == Some('.') {
            self.consume();
            return GraphQLToken::lex_error(
                "Unexpected `..` (use `...` for spread operator)",
                self.make_span(start),
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`",
                )],
            );
        }

        GraphQLToken::lex_error("Unexpected `.`", self.make_span(start), smallvec![])
    }

    /// Lexes a name.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        self.consume_while(is_name_continue);
        self.make_sliced_token(GraphQLTokenKind::Name, start)
    }

    /// Lexes a character that cannot start any token.
    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken {
        let Some(ch) = self.consume() else {
            return GraphQLToken::new(
                GraphQLTokenKind::EndOfFile,
                String::new(),
                self.make_span(start),
            );
        };
        let message = if ch < ' ' {
            format!("Invalid character {}", describe_char(ch))
        } else {
            format!("Unexpected character {}", describe_char(ch))
        };
        GraphQLToken::lex_error(message, self.make_span(start), smallvec![])
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// With lenient number literals the digit runs after `.` and after the
    /// exponent marker may be empty.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit() {
                    return self.lex_number_error(
                        format!("Invalid number, unexpected digit after 0: `{ch}`"),
                        INT_VALUE_SPEC_URL,
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            other => {
                let found = match other {
                    Some(ch) => describe_char(ch),
                    None => "end of input".to_string(),
                };
                return self.lex_number_error(
                    format!("Invalid number, expected digit but found {found}"),
                    INT_VALUE_SPEC_URL,
                );
            },
        }

        if self.peek_char() == Some('.') {
            if self.strict_number_literals
                && !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                self.consume();
                return self.lex_number_error(
                    "Invalid number, expected digit after `.`".to_string(),
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E') {
            is_float = true;
            self.consume();

            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-') {
                self.consume();
            }

            if self.strict_number_literals
                && !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    "Invalid number, exponent must have at least one digit".to_string(),
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        self.make_sliced_token(kind, start)
    }

    /// Creates an error token for an invalid number.
    ///
    /// The error is positioned at the cursor (the point of failure). Any
    /// digits or name characters at the cursor (e.g. the `e5` of `1.e5`) are
    /// consumed so the next scan starts after the malformed literal.
    fn lex_number_error(&mut self, message: String, spec_url: &str) -> GraphQLToken {
        let failure = self.curr_position();
        self.consume_while(is_name_continue);
        GraphQLToken::lex_error(
            message,
            self.make_span(failure),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a quoted string literal, decoding escape sequences.
    ///
    /// Every read is bounds-checked: running out of input is reported as an
    /// unterminated string rather than re-reading the end of the buffer.
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        let mut value = String::new();

        loop {
            let Some(ch) = self.peek_char() else {
                return self.unterminated_string_error(start, None);
            };

            match ch {
                '"' => {
                    self.consume();
                    break;
                },
                '\n' | '\r' => {
                    return self.unterminated_string_error(
                        start,
                        Some(GraphQLErrorNote::general(
                            "Strings cannot contain unescaped line terminators",
                        )),
                    );
                },
                '\\' => {
                    let escape_start = self.curr_position();
                    self.consume();
                    match self.lex_escape_sequence(start, escape_start) {
                        Ok(decoded) => value.push(decoded),
                        Err(error_token) => {
                            self.skip_string_remainder();
                            return error_token;
                        },
                    }
                },
                ch if ch < ' ' && ch != '\t' => {
                    let failure = self.curr_position();
                    self.consume();
                    let error_token = GraphQLToken::lex_error(
                        format!("Invalid character within string: {}", describe_char(ch)),
                        self.make_span(failure),
                        smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
                    );
                    self.skip_string_remainder();
                    return error_token;
                },
                ch => {
                    self.consume();
                    value.push(ch);
                },
            }
        }

        GraphQLToken::new(GraphQLTokenKind::String, value, self.make_span(start))
    }

    /// Consumes the rest of a malformed string through its closing `"`, so
    /// the next scan starts after the literal. Stops before a line terminator
    /// and at end of input, leaving those for the next scan.
    fn skip_string_remainder(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '"' => {
                    self.consume();
                    return;
                },
                '\n' | '\r' => return,
                '\\' => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                _ => {
                    self.consume();
                },
            }
        }
    }

    /// Decodes one escape sequence. The cursor is just past the `\`.
    fn lex_escape_sequence(
        &mut self,
        string_start: SourcePosition,
        escape_start: SourcePosition,
    ) -> Result<char, GraphQLToken> {
        let Some(specifier) = self.peek_char() else {
            return Err(self.unterminated_string_error(string_start, None));
        };

        let decoded = match specifier {
            '"' => '"',
            '/' => '/',
            '\\' => '\\',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.consume();
                return self.lex_unicode_escape(escape_start);
            },
            '\n' | '\r' => {
                return Err(self.unterminated_string_error(string_start, None));
            },
            other => {
                self.consume();
                return Err(GraphQLToken::lex_error(
                    format!("Invalid escape sequence `\\{other}`"),
                    self.make_span(escape_start),
                    smallvec![
                        GraphQLErrorNote::help(
                            "Valid escapes are `\\\"`, `\\\\`, `\\/`, `\\b`, `\\f`, \
                             `\\n`, `\\r`, `\\t` and `\\uXXXX`",
                        ),
                        GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL),
                    ],
                ));
            },
        };
        self.consume();
        Ok(decoded)
    }

    /// Decodes the four hex digits of a `\uXXXX` escape. The cursor is just
    /// past the `u`.
    ///
    /// A high surrogate immediately followed by a `\uXXXX` low surrogate is
    /// combined into a single scalar value.
    fn lex_unicode_escape(
        &mut self,
        escape_start: SourcePosition,
    ) -> Result<char, GraphQLToken> {
        let Some(code_unit) = self.peek_hex4(0) else {
            return Err(self.invalid_unicode_escape_error(escape_start));
        };
        for _ in 0..4 {
            self.consume();
        }

        if let Some(ch) = char::from_u32(code_unit) {
            return Ok(ch);
        }

        if (0xD800..=0xDBFF).contains(&code_unit)
            && self.remaining().starts_with("\\u")
            && let Some(low) = self.peek_hex4(2)
            && (0xDC00..=0xDFFF).contains(&low) {
            for _ in 0..6 {
                self.consume();
            }
            let combined = 0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00);
            if let Some(ch) = char::from_u32(combined) {
                return Ok(ch);
            }
        }

        Err(self.invalid_unicode_escape_error(escape_start))
    }

    /// Reads four hex digits starting `offset` characters ahead, without
    /// consuming anything.
    fn peek_hex4(&self, offset: usize) -> Option<u32> {
        let mut code_unit = 0u32;
        for i in 0..4 {
            let digit = self.peek_char_nth(offset + i)?.to_digit(16)?;
            code_unit = (code_unit << 4) | digit;
        }
        Some(code_unit)
    }

    fn invalid_unicode_escape_error(&self, escape_start: SourcePosition) -> GraphQLToken {
        let end = (escape_start.byte_offset() + 6).min(self.source.len());
        let text = self.source
            .get(escape_start.byte_offset()..end)
            .unwrap_or("\\u");
        GraphQLToken::lex_error(
            format!("Invalid Unicode escape sequence `{text}`"),
            self.make_span(escape_start),
            smallvec![
                GraphQLErrorNote::help(
                    "`\\u` must be followed by exactly four hexadecimal digits \
                     encoding a Unicode scalar value",
                ),
                GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL),
            ],
        )
    }

    fn unterminated_string_error(
        &self,
        string_start: SourcePosition,
        extra_note: Option<GraphQLErrorNote>,
    ) -> GraphQLToken {
        let failure = self.curr_position();
        let mut notes: GraphQLErrorNotes = smallvec![GraphQLErrorNote::general_with_span(
            "String started here",
            self.make_span(string_start).empty_at(string_start),
        )];
        notes.extend(extra_note);
        notes.push(GraphQLErrorNote::help("Add closing `\"`"));
        GraphQLToken::lex_error("Unterminated string", self.make_span(failure), notes)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

/// Yields the comment-filtered token stream, ending with (and including) the
/// `EndOfFile` token.
impl Iterator for GraphQLLexer<'_> {
    type Item = GraphQLToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == GraphQLTokenKind::EndOfFile {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
///
/// <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
///
/// <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks. Invisible
/// and control characters are described by code point (and name, when
/// known) since printing them verbatim is useless.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("U+{:04X} ({name})", ch as u32),
            None => format!("U+{:04X}", ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Returns the Unicode name for well-known invisible/control characters.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0001}' => Some("START OF HEADING"),
        '\u{0002}' => Some("START OF TEXT"),
        '\u{0003}' => Some("END OF TEXT"),
        '\u{0004}' => Some("END OF TRANSMISSION"),
        '\u{0005}' => Some("ENQUIRY"),
        '\u{0006}' => Some("ACKNOWLEDGE"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        _ => None,
    }
}
