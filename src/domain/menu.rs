//! Menu item records and their validated input form

use serde::Serialize;
use serde_json::{Map, Value};

/// Raw JSON object received from a client, not yet validated.
pub type MenuItemCandidate = Map<String, Value>;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appetizer => "appetizer",
            Self::Entree => "entree",
            Self::Dessert => "dessert",
            Self::Beverage => "beverage",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

impl MenuItem {
    pub fn from_input(id: u64, input: MenuItemInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            ingredients: input.ingredients,
            available: input.available.unwrap_or(true),
        }
    }

    /// Replaces every field except `id`. An absent `available` resets to true.
    pub fn apply(&mut self, input: MenuItemInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.ingredients = input.ingredients;
        self.available = input.available.unwrap_or(true);
    }
}

/// Normalized item fields that passed validation.
///
/// Only [`crate::domain::validation::validate`] builds this type, so anything
/// the store accepts already satisfies every field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemInput {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: f64,
    pub(crate) category: Category,
    pub(crate) ingredients: Vec<String>,
    pub(crate) available: Option<bool>,
}

/// One violated field rule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn category_parse_is_exact() {
        assert_eq!(Category::parse("entree"), Some(Category::Entree));
        assert_eq!(Category::parse("Entree"), None);
        assert_eq!(Category::parse("snack"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let value = serde_json::to_value(Category::Beverage).expect("serialize category");
        assert_eq!(value, "beverage");
    }
}
