use super::{guard, AuthError, Capability, Principal, Role};
use crate::common::{AppError, UserId};
use crate::kernel::BaseUserDirectory;
use tracing::warn;

/// A principal whose subject has been resolved to a stored user.
///
/// Usage:
/// ```ignore
/// let actor = Actor::resolve(&principal, deps.users.as_ref()).await?;
/// actor.can(Capability::Own(restaurant.owner_id)).check()?;
/// ```
#[derive(Debug, Clone)]
pub struct Actor {
    principal: Principal,
    user_id: UserId,
}

impl Actor {
    /// Look the principal's subject up in the directory.
    ///
    /// A valid credential for an account that no longer exists is treated as no credential.
    pub async fn resolve(
        principal: &Principal,
        users: &dyn BaseUserDirectory,
    ) -> Result<Self, AppError> {
        let user = users
            .find_by_email(principal.subject())
            .await?
            .ok_or(AuthError::AuthenticationRequired)?;

        Ok(Self {
            principal: principal.clone(),
            user_id: user.id,
        })
    }

    /// Build an actor from parts already known to belong together.
    pub fn new(principal: Principal, user_id: UserId) -> Self {
        Self { principal, user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.principal.role()
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Specify what capability the actor needs
    pub fn can(&self, capability: Capability) -> CapabilityCheck<'_> {
        CapabilityCheck {
            actor: self,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityCheck<'a> {
    actor: &'a Actor,
    capability: Capability,
}

impl CapabilityCheck<'_> {
    /// Perform the authorization check, auditing denials
    pub fn check(self) -> Result<(), AuthError> {
        let result = match self.capability {
            Capability::Role(role) => {
                guard::require_role(Some(&self.actor.principal), role).map(|_| ())
            }
            Capability::Own(owner) => guard::require_ownership(Some(self.actor.user_id), owner),
        };

        if let Err(ref err) = result {
            warn!(
                subject = %self.actor.principal.subject(),
                role = %self.actor.role(),
                required = ?self.capability,
                error = %err,
                "authorization denied"
            );
        }

        result
    }
}
