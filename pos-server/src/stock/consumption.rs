//! Sale consumption planning
//!
//! Expands the line items of a closing order into the stock decrements they
//! cause. Pure: the caller fetches recipes and home departments up front
//! (one query each, not one per line) and applies the plan in its own
//! transaction.

use std::collections::HashMap;

use crate::db::repository::{RepoError, RepoResult};
use shared::models::{OrderItem, RecipeLine};

/// One planned stock decrement
#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub product_id: i64,
    pub department_id: i64,
    /// Quantity to remove (positive; applied as a negative delta)
    pub quantity: f64,
}

/// Expand order lines into ingredient/product consumption.
///
/// `recipes` maps product id → its recipe lines, with an entry for **every**
/// product that has a recipe, even one with no lines. A product present with
/// an empty line list consumes nothing — it is treated as a deliberately
/// non-stock-tracked item, and its own stock is left alone. Products absent
/// from the map consume their own stock at their home department.
pub fn plan_consumption(
    items: &[OrderItem],
    recipes: &HashMap<i64, Vec<RecipeLine>>,
    home_departments: &HashMap<i64, i64>,
) -> RepoResult<Vec<Consumption>> {
    let mut plan = Vec::new();

    for item in items {
        match recipes.get(&item.product_id) {
            Some(lines) => {
                for line in lines {
                    plan.push(Consumption {
                        product_id: line.ingredient_id,
                        department_id: line.ingredient_department_id,
                        quantity: line.quantity * item.quantity,
                    });
                }
            }
            None => {
                let department_id = home_departments.get(&item.product_id).ok_or_else(|| {
                    RepoError::NotFound(format!("Product {} not found", item.product_id))
                })?;
                plan.push(Consumption {
                    product_id: item.product_id,
                    department_id: *department_id,
                    quantity: item.quantity,
                });
            }
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_item(product_id: i64, quantity: f64) -> OrderItem {
        OrderItem {
            id: 0,
            order_id: 1,
            product_id,
            quantity,
            price: 10.0,
        }
    }

    fn recipe_line(
        product_id: i64,
        ingredient_id: i64,
        department_id: i64,
        quantity: f64,
    ) -> RecipeLine {
        RecipeLine {
            product_id,
            ingredient_id,
            ingredient_name: String::new(),
            ingredient_department_id: department_id,
            quantity,
        }
    }

    #[test]
    fn recipe_product_consumes_ingredients_not_itself() {
        // Pizza (id 10) uses 0.3 flour (id 20, kitchen 1) per unit
        let recipes = HashMap::from([(10, vec![recipe_line(10, 20, 1, 0.3)])]);
        let homes = HashMap::new();

        let plan = plan_consumption(&[order_item(10, 2.0)], &recipes, &homes).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].product_id, 20);
        assert_eq!(plan[0].department_id, 1);
        assert!((plan[0].quantity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn plain_product_consumes_its_own_stock() {
        let recipes = HashMap::new();
        let homes = HashMap::from([(30, 2)]);

        let plan = plan_consumption(&[order_item(30, 3.0)], &recipes, &homes).unwrap();

        assert_eq!(
            plan,
            vec![Consumption {
                product_id: 30,
                department_id: 2,
                quantity: 3.0,
            }]
        );
    }

    #[test]
    fn empty_recipe_consumes_nothing() {
        // Product 40 has a recipe with zero lines: non-stock-tracked
        let recipes = HashMap::from([(40, vec![])]);
        let homes = HashMap::from([(40, 1)]);

        let plan = plan_consumption(&[order_item(40, 5.0)], &recipes, &homes).unwrap();

        assert!(plan.is_empty());
    }

    #[test]
    fn multi_ingredient_recipe_scales_per_line() {
        let recipes = HashMap::from([(
            10,
            vec![recipe_line(10, 20, 1, 0.3), recipe_line(10, 21, 1, 0.12)],
        )]);
        let homes = HashMap::new();

        let plan = plan_consumption(&[order_item(10, 4.0)], &recipes, &homes).unwrap();

        assert_eq!(plan.len(), 2);
        assert!((plan[0].quantity - 1.2).abs() < 1e-9);
        assert!((plan[1].quantity - 0.48).abs() < 1e-9);
    }

    #[test]
    fn unknown_product_without_recipe_is_an_error() {
        let plan = plan_consumption(&[order_item(99, 1.0)], &HashMap::new(), &HashMap::new());
        assert!(plan.is_err());
    }
}
