//! Fixed menu present at process start

use crate::domain::menu::{Category, MenuItem};

fn item(
    id: u64,
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    ingredients: &[&str],
    available: bool,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        ingredients: ingredients.iter().map(|entry| entry.to_string()).collect(),
        available,
    }
}

pub fn seed_items() -> Vec<MenuItem> {
    vec![
        item(
            1,
            "Bruschetta",
            "Grilled bread topped with tomatoes, garlic and basil",
            8.5,
            Category::Appetizer,
            &["bread", "tomato", "garlic", "basil", "olive oil"],
            true,
        ),
        item(
            2,
            "Caesar Salad",
            "Romaine lettuce with parmesan, croutons and caesar dressing",
            10.0,
            Category::Appetizer,
            &["romaine", "parmesan", "croutons", "caesar dressing"],
            true,
        ),
        item(
            3,
            "Grilled Salmon",
            "Atlantic salmon fillet with lemon butter and seasonal vegetables",
            24.99,
            Category::Entree,
            &["salmon", "butter", "lemon", "vegetables"],
            true,
        ),
        item(
            4,
            "Mushroom Risotto",
            "Creamy arborio rice slow cooked with wild mushrooms",
            18.5,
            Category::Entree,
            &["arborio rice", "mushrooms", "parmesan", "white wine"],
            false,
        ),
        item(
            5,
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten center and vanilla ice cream",
            9.75,
            Category::Dessert,
            &["chocolate", "flour", "eggs", "vanilla ice cream"],
            true,
        ),
        item(
            6,
            "Fresh Lemonade",
            "House made lemonade with fresh mint",
            4.5,
            Category::Beverage,
            &["lemon", "sugar", "water", "mint"],
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::seed_items;
    use crate::domain::validation::validate;

    #[test]
    fn seed_ids_run_from_one_to_six() {
        let ids: Vec<u64> = seed_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_seed_item_passes_validation() {
        for item in seed_items() {
            let Value::Object(candidate) = serde_json::to_value(&item).expect("serialize seed")
            else {
                panic!("seed item must serialize to an object");
            };
            validate(&candidate).expect("seed item should validate");
        }
    }
}
