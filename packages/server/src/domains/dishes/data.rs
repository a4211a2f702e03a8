use serde::{Deserialize, Serialize};

use crate::common::{DishId, RestaurantId};
use crate::domains::dishes::models::{Dish, DishListing, UpdateDish};

#[derive(Debug, Clone, Deserialize)]
pub struct DishInput {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: Option<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDishInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateDishInput> for UpdateDish {
    fn from(input: UpdateDishInput) -> Self {
        Self {
            name: input.name,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
            availability: input.availability,
            notes: input.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishData {
    pub dish_id: DishId,
    pub restaurant_id: RestaurantId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: Option<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

impl From<Dish> for DishData {
    fn from(dish: Dish) -> Self {
        Self {
            dish_id: dish.id,
            restaurant_id: dish.restaurant_id,
            restaurant_name: None,
            name: dish.name,
            category: dish.category,
            price: dish.price,
            quantity: dish.quantity,
            availability: dish.availability,
            notes: dish.notes,
        }
    }
}

impl From<DishListing> for DishData {
    fn from(listing: DishListing) -> Self {
        Self {
            restaurant_name: Some(listing.restaurant_name),
            ..Self::from(listing.dish)
        }
    }
}

/// Owner-side mutation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishChangedData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish: Option<DishData>,
}
