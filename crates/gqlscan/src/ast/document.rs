use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;

/// A parsed GraphQL document: its definitions in source order.
///
/// A document with no definitions (empty input, or only comments and
/// separators) is valid.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterates the operation definitions in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates the fragment definitions in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        })
    }
}
