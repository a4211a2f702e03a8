//! Restaurants domain - registration, ownership and the approval workflow

pub mod actions;
pub mod approval;
pub mod data;
pub mod models;
pub mod ownership;

pub use approval::{ApprovalDecision, ApprovalError, Transition};
pub use models::{Restaurant, RestaurantStatus};
