//! Recipe Model
//!
//! Bill-of-materials mapping a sellable product to the raw-ingredient
//! products and quantities it consumes per unit sold.

use serde::{Deserialize, Serialize};

/// Recipe entity — belongs to exactly one finished product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Recipe {
    pub id: i64,
    pub product_id: i64,
    pub created_at: i64,
}

/// Ingredient line input for create/replace.
///
/// `quantity` is consumed per one unit of the parent recipe's product sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeItemInput {
    pub ingredient_id: i64,
    pub quantity: f64,
}

/// Create (or replace) the recipe of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub product_id: i64,
    pub items: Vec<RecipeItemInput>,
}

/// Recipe with its ingredient lines resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFull {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub created_at: i64,
    pub items: Vec<RecipeLine>,
}

/// Flattened recipe line used both in API responses and by the stock engine
/// when consuming ingredients on order close.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RecipeLine {
    pub product_id: i64,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    /// Home department of the ingredient — where consumption is booked
    pub ingredient_department_id: i64,
    pub quantity: f64,
}
