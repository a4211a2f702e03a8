use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{DishId, FeedbackId};
use crate::domains::feedback::models::FeedbackView;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackInput {
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmittedData {
    pub message: String,
    pub feedback_id: FeedbackId,
    pub rating: i32,
}

/// One feedback entry. Which names are filled depends on who is looking: a student
/// already knows who they are, an owner already knows which restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    pub feedback_id: FeedbackId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub dish_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl FeedbackData {
    pub fn full(view: FeedbackView) -> Self {
        Self {
            feedback_id: view.feedback.id,
            rating: view.feedback.rating,
            comment: view.feedback.comment,
            created_at: view.feedback.created_at,
            dish_name: view.dish_name,
            student_name: Some(view.student_name),
            restaurant_name: Some(view.restaurant_name),
        }
    }

    pub fn for_student(view: FeedbackView) -> Self {
        Self {
            student_name: None,
            ..Self::full(view)
        }
    }

    pub fn for_owner(view: FeedbackView) -> Self {
        Self {
            restaurant_name: None,
            ..Self::full(view)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFeedbackData {
    pub restaurant_name: String,
    pub total_feedback: usize,
    pub average_rating: f64,
    pub feedback: Vec<FeedbackData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRatingData {
    pub dish_id: DishId,
    pub dish_name: String,
    pub average_rating: f64,
    pub rating_count: usize,
    pub restaurant_name: String,
}
