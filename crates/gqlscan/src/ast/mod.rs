//! Owned AST types for parsed GraphQL executable documents.
//!
//! Every node owns its strings, so a [`Document`] outlives the source text
//! it was parsed from. Nodes that correspond to a contiguous range of source
//! carry a [`GraphQLSourceSpan`](crate::GraphQLSourceSpan).
//!
//! # Example
//!
//! ```rust
//! use gqlscan::ast::Definition;
//! use gqlscan::ast::OperationKind;
//!
//! let document = gqlscan::parse("query Hero($episode: Episode) { hero }").unwrap();
//! let Definition::Operation(operation) = &document.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(operation.kind, OperationKind::Query);
//! assert_eq!(operation.name.as_ref().map(|n| n.value.as_str()), Some("Hero"));
//! ```

mod definition;
mod document;
mod fragment_definition;
mod name;
mod operation_definition;
mod operation_kind;
mod selection_set;
mod type_reference;
mod variable_definition;

pub use definition::Definition;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection_set::SelectionSet;
pub use type_reference::TypeReference;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
