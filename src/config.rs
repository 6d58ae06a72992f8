use serde::{Deserialize, Serialize};

use crate::syntax::Dialect;

/// Options for one compilation, deserializable from a config file.
///
/// The lexer itself is unbounded and total; the limits here are enforced at
/// the [`compile`](crate::compile) boundary as a defensive measure for
/// service deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Hard cap on source length, in characters. Inputs beyond this are
    /// rejected with a resource-limit error before tokenization.
    #[serde(default = "default_max_source_len")]
    pub max_source_len: usize,

    /// Target dialect used when the query header does not declare one.
    #[serde(default)]
    pub dialect: Dialect,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_source_len: default_max_source_len(),
            dialect: Dialect::default(),
        }
    }
}

fn default_max_source_len() -> usize {
    1024 * 1024
}
