use serde::{Deserialize, Serialize};

/// An issue or pull request as seen by the frecency ranking: just enough to
/// identify it within a repository and show it to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub number: u32,
    #[serde(default)]
    pub title: String,
}
