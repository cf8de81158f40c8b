use crate::GraphQLSourceSpan;
use std::fmt;

/// A non-empty GraphQL identifier with its location.
///
/// See [Names](https://spec.graphql.org/October2021/#Name) in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Name {
    pub value: String,
    pub span: GraphQLSourceSpan,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
