mod mutations;
mod queries;

pub use mutations::{add_dish, delete_dish, update_dish};
pub use queries::{restaurant_dishes, search_dishes, DishQuery, POPULAR_PRICE_LIMIT};
