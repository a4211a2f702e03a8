pub mod dish;

pub use dish::{Dish, DishFilter, DishListing, DishVisibility, UpdateDish, AVAILABLE};
