/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
/// Different kinds are rendered with different prefixes in CLI output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...`.
    /// Example: "string started here" (with span pointing to the opening `"`)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    /// Example: "Add closing `\"`"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}
