pub mod feedback;

pub use feedback::{Feedback, FeedbackView, MAX_COMMENT_LEN, MAX_RATING, MIN_RATING};
