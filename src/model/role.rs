use serde::{Deserialize, Serialize};

/// Caller roles carried in the token's `role` claim.
///
/// Modelled as a capability set even though the system currently mints
/// tokens for exactly one role.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Admin,
}

impl Role {
    pub fn can_manage_employees(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn can_download_reports(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
