/// Authorization primitives
///
/// Handlers receive a `Principal` from the request, then either check a role directly:
///
/// ```ignore
/// guard::require_role(Some(&principal), Role::Admin)?;
/// ```
///
/// or resolve it to an `Actor` when ownership matters:
///
/// ```ignore
/// let actor = Actor::resolve(&principal, deps.users.as_ref()).await?;
/// actor.can(Capability::Own(restaurant.owner_id)).check()?;
/// ```
mod builder;
mod capability;
mod errors;
pub mod guard;
mod principal;

pub use builder::{Actor, CapabilityCheck};
pub use capability::Capability;
pub use errors::{AuthError, Denial};
pub use principal::{ParseRoleError, Principal, Role};
