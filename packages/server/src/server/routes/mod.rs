// HTTP routes
pub mod admin;
pub mod auth;
pub mod dishes;
pub mod feedback;
pub mod health;
pub mod owner;
pub mod restaurants;
