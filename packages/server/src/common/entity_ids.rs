//! Typed ID aliases for every stored entity.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for user accounts (students, owners, admins).
pub struct UserEntity;

/// Marker type for restaurants.
pub struct RestaurantEntity;

/// Marker type for dishes.
pub struct DishEntity;

/// Marker type for feedback records.
pub struct FeedbackEntity;

// ============================================================================
// ID aliases
// ============================================================================

pub type UserId = Id<UserEntity>;
pub type RestaurantId = Id<RestaurantEntity>;
pub type DishId = Id<DishEntity>;
pub type FeedbackId = Id<FeedbackEntity>;
