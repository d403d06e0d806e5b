use serde::{Deserialize, Serialize};

fn default_tolerance() -> f64 {
    1e-9
}

/// Options controlling the branch-and-bound search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Maximum number of search nodes per `solve`; `None` means unlimited.
    #[serde(default)]
    pub node_limit: Option<u64>,
    /// Slack applied when comparing constraint activities against bounds.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            tolerance: default_tolerance(),
        }
    }
}
