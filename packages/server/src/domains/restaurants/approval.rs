//! Restaurant approval state machine.
//!
//! ```text
//! PENDING --approve--> APPROVED
//! PENDING --reject---> REJECTED
//! ```
//!
//! Both outcomes are terminal. Re-applying the decision that produced the current state is
//! a no-op success; the opposite decision is refused.

use thiserror::Error;

use super::models::RestaurantStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

impl ApprovalDecision {
    pub fn target(&self) -> RestaurantStatus {
        match self {
            ApprovalDecision::Approve => RestaurantStatus::Approved,
            ApprovalDecision::Reject => RestaurantStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Status changes and must be written
    Applied {
        from: RestaurantStatus,
        to: RestaurantStatus,
    },
    /// Already in the requested state
    Unchanged(RestaurantStatus),
}

impl Transition {
    pub fn status(&self) -> RestaurantStatus {
        match self {
            Transition::Applied { to, .. } => *to,
            Transition::Unchanged(status) => *status,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("Restaurant is already {current}; cannot move it to {requested}")]
    Terminal {
        current: RestaurantStatus,
        requested: RestaurantStatus,
    },
}

/// Decide what a decision does to a restaurant currently in `current`
pub fn transition(
    current: RestaurantStatus,
    decision: ApprovalDecision,
) -> Result<Transition, ApprovalError> {
    let target = decision.target();
    match current {
        RestaurantStatus::Pending => Ok(Transition::Applied {
            from: current,
            to: target,
        }),
        status if status == target => Ok(Transition::Unchanged(status)),
        status => Err(ApprovalError::Terminal {
            current: status,
            requested: target,
        }),
    }
}
