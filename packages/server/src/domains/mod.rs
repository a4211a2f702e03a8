// Business domains
pub mod auth;
pub mod dishes;
pub mod feedback;
pub mod restaurants;
