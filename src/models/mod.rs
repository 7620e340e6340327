pub mod poem;
pub mod request;
pub mod response;

use serde::{self, Serialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}
