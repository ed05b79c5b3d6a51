use crate::domain::{
    menu::{MenuItem, MenuItemCandidate, MenuItemInput},
    seed::seed_items,
    validation,
};
use crate::errors::AppError;

/// Ordered in-memory menu. Insertion order is preserved across updates.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Only the seed list and the empty default reach the store without going
    /// through `insert`, so ids stay unique and every item stays valid.
    fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Result<&MenuItem, AppError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(id))
    }

    pub fn validate(candidate: &MenuItemCandidate) -> Result<MenuItemInput, AppError> {
        validation::validate(candidate)
    }

    /// Appends a new item. Its id is one past the current maximum, so the id
    /// of a deleted maximum is handed out again.
    pub fn insert(&mut self, candidate: &MenuItemCandidate) -> Result<MenuItem, AppError> {
        let input = Self::validate(candidate)?;
        let item = MenuItem::from_input(self.next_id(), input);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replaces every field except `id`. Nothing changes unless the id exists
    /// and the candidate validates.
    pub fn update(&mut self, id: u64, candidate: &MenuItemCandidate) -> Result<MenuItem, AppError> {
        let position = self.position(id)?;
        let input = Self::validate(candidate)?;

        let item = &mut self.items[position];
        item.apply(input);
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<MenuItem, AppError> {
        let position = self.position(id)?;
        Ok(self.items.remove(position))
    }

    fn position(&self, id: u64) -> Result<usize, AppError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(id))
    }

    fn next_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}
