//! Feedback domain - student ratings, one per student per dish

pub mod actions;
pub mod data;
pub mod models;

pub use models::{Feedback, FeedbackView};
