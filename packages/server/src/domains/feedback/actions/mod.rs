mod queries;
mod submit;

pub use queries::{all_feedback, average_rating, dish_rating, my_feedback, restaurant_feedback};
pub use submit::{submit_feedback, validate_rating};
