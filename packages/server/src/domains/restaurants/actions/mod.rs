mod mutations;
mod queries;

pub use mutations::{approve_restaurant, create_restaurant, register_restaurant, reject_restaurant};
pub use queries::{
    all_restaurants, approved_restaurant, approved_restaurants, my_restaurants,
    pending_restaurants, search_restaurants,
};
