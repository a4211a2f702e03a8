//! Dishes domain - menus, owner-side edits and the public searches

pub mod actions;
pub mod data;
pub mod models;
pub mod ownership;

pub use models::{Dish, DishFilter, DishListing, DishVisibility};
