//! Field rules applied to every candidate before it reaches the store
//!
//! Rules run in field order and never short-circuit: a candidate that breaks
//! several rules reports every one of them, including two entries for a field
//! that breaks two rules.

use serde_json::Value;

use crate::domain::menu::{Category, FieldViolation, MenuItemCandidate, MenuItemInput};
use crate::errors::AppError;

pub const NAME_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

struct TextRule {
    field: &'static str,
    min_len: usize,
    not_text: &'static str,
    too_short: &'static str,
}

const NAME_RULE: TextRule = TextRule {
    field: "name",
    min_len: NAME_MIN_LEN,
    not_text: "name must be text",
    too_short: "name must be at least 3 characters long",
};

const DESCRIPTION_RULE: TextRule = TextRule {
    field: "description",
    min_len: DESCRIPTION_MIN_LEN,
    not_text: "description must be text",
    too_short: "description must be at least 10 characters long",
};

const PRICE_NOT_NUMBER: &str = "price must be a number";
const PRICE_NOT_POSITIVE: &str = "price must be greater than 0";
const CATEGORY_NOT_ALLOWED: &str =
    "category must be one of: appetizer, entree, dessert, beverage";
const INGREDIENTS_EMPTY: &str = "ingredients must be a non-empty array";
const INGREDIENTS_NOT_TEXT: &str = "ingredients must contain only text values";
const AVAILABLE_NOT_BOOLEAN: &str = "available must be a boolean";

/// Checks every field rule and returns the normalized input, or all
/// violations found.
///
/// `available` is only type-checked here; the store decides what an absent
/// flag means.
pub fn validate(candidate: &MenuItemCandidate) -> Result<MenuItemInput, AppError> {
    let mut violations = Vec::new();

    let name = check_text(&NAME_RULE, candidate.get("name"), &mut violations);
    let description = check_text(
        &DESCRIPTION_RULE,
        candidate.get("description"),
        &mut violations,
    );
    let price = check_price(candidate.get("price"), &mut violations);
    let category = check_category(candidate.get("category"), &mut violations);
    let ingredients = check_ingredients(candidate.get("ingredients"), &mut violations);
    let available = check_available(candidate.get("available"), &mut violations);

    match (name, description, price, category, ingredients) {
        (Some(name), Some(description), Some(price), Some(category), Some(ingredients))
            if violations.is_empty() =>
        {
            Ok(MenuItemInput {
                name,
                description,
                price,
                category,
                ingredients,
                available,
            })
        }
        _ => Err(AppError::validation_failed(violations)),
    }
}

fn violation(field: &'static str, message: &'static str) -> FieldViolation {
    FieldViolation { field, message }
}

fn check_text(
    rule: &TextRule,
    value: Option<&Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let text = value.and_then(Value::as_str).map(str::trim);
    if text.is_none() {
        violations.push(violation(rule.field, rule.not_text));
    }

    match text {
        Some(text) if text.chars().count() >= rule.min_len => Some(text.to_string()),
        _ => {
            violations.push(violation(rule.field, rule.too_short));
            None
        }
    }
}

/// Accepts JSON numbers and numeric-looking strings.
fn coerce_price(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

fn check_price(value: Option<&Value>, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    let price = coerce_price(value);
    if price.is_none() {
        violations.push(violation("price", PRICE_NOT_NUMBER));
    }

    match price {
        Some(price) if price > 0.0 => Some(price),
        _ => {
            violations.push(violation("price", PRICE_NOT_POSITIVE));
            None
        }
    }
}

fn check_category(
    value: Option<&Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Category> {
    let category = value.and_then(Value::as_str).and_then(Category::parse);
    if category.is_none() {
        violations.push(violation("category", CATEGORY_NOT_ALLOWED));
    }
    category
}

fn check_ingredients(
    value: Option<&Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<String>> {
    let entries = value.and_then(Value::as_array);
    if !matches!(entries, Some(entries) if !entries.is_empty()) {
        violations.push(violation("ingredients", INGREDIENTS_EMPTY));
    }

    let ingredients: Option<Vec<String>> = entries?
        .iter()
        .map(|entry| entry.as_str().map(str::to_string))
        .collect();
    if ingredients.is_none() {
        violations.push(violation("ingredients", INGREDIENTS_NOT_TEXT));
    }

    ingredients.filter(|ingredients| !ingredients.is_empty())
}

fn check_available(value: Option<&Value>, violations: &mut Vec<FieldViolation>) -> Option<bool> {
    match value {
        None => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            violations.push(violation("available", AVAILABLE_NOT_BOOLEAN));
            None
        }
    }
}
