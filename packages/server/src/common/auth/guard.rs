//! Pure allow/deny decisions. No I/O, no logging; callers audit.

use super::{AuthError, Denial, Principal, Role};
use crate::common::UserId;

/// Anyone with a validated credential.
pub fn require_principal(principal: Option<&Principal>) -> Result<&Principal, AuthError> {
    principal.ok_or(AuthError::AuthenticationRequired)
}

/// Exact role match. Admins do not inherit owner or student rights.
pub fn require_role(principal: Option<&Principal>, role: Role) -> Result<&Principal, AuthError> {
    let principal = require_principal(principal)?;
    if principal.role() != role {
        return Err(AuthError::Forbidden(Denial::WrongRole {
            required: role,
            actual: principal.role(),
        }));
    }
    Ok(principal)
}

/// `actor` is the resolved user id of the caller (None when anonymous). An ownerless
/// resource denies everyone.
pub fn require_ownership(
    actor: Option<UserId>,
    resource_owner: Option<UserId>,
) -> Result<(), AuthError> {
    let actor = actor.ok_or(AuthError::AuthenticationRequired)?;
    match resource_owner {
        Some(owner) if owner == actor => Ok(()),
        _ => Err(AuthError::Forbidden(Denial::NotOwner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn principal(role: Role) -> Principal {
        let now = Utc::now();
        Principal::new("someone@campus.edu", role, now, now + Duration::days(1))
    }

    #[test]
    fn test_student_denied_owner_and_admin() {
        let student = principal(Role::Student);

        for required in [Role::Owner, Role::Admin] {
            let err = require_role(Some(&student), required).unwrap_err();
            assert_eq!(
                err,
                AuthError::Forbidden(Denial::WrongRole {
                    required,
                    actual: Role::Student
                })
            );
        }
    }

    #[test]
    fn test_admin_does_not_inherit_owner() {
        let admin = principal(Role::Admin);
        assert!(require_role(Some(&admin), Role::Owner).is_err());
        assert!(require_role(Some(&admin), Role::Admin).is_ok());
    }

    #[test]
    fn test_missing_principal_is_unauthenticated() {
        assert_eq!(
            require_role(None, Role::Student).unwrap_err(),
            AuthError::AuthenticationRequired
        );
        assert_eq!(
            require_principal(None).unwrap_err(),
            AuthError::AuthenticationRequired
        );
    }

    #[test]
    fn test_owner_a_denied_against_owner_b() {
        let owner_a = UserId::new();
        let owner_b = UserId::new();

        assert_eq!(
            require_ownership(Some(owner_a), Some(owner_b)).unwrap_err(),
            AuthError::Forbidden(Denial::NotOwner)
        );
        assert!(require_ownership(Some(owner_b), Some(owner_b)).is_ok());
    }

    #[test]
    fn test_ownerless_resource_denies_everyone() {
        assert_eq!(
            require_ownership(Some(UserId::new()), None).unwrap_err(),
            AuthError::Forbidden(Denial::NotOwner)
        );
        assert_eq!(
            require_ownership(None, None).unwrap_err(),
            AuthError::AuthenticationRequired
        );
    }
}
