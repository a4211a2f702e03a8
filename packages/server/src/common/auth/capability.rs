use super::Role;
use crate::common::UserId;

/// What an actor needs in order to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Exact role match
    Role(Role),

    /// Must be the owner of a resource. `None` means the resource has no owner, which
    /// nobody satisfies.
    Own(Option<UserId>),
}
