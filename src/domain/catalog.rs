//! Ordered menu catalog with id assignment, search and admin CRUD.

use crate::domain::{AppError, ItemDraft, MenuItem};

/// The full set of purchasable menu items, in stable order.
///
/// Ids are unique and monotonically assigned; a reload replaces the item set
/// wholesale. The catalog never reaches into the cart: deleting an item
/// leaves existing cart lines valid because those are snapshots.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    /// Highest id handed out this session. Keeps deleted ids from being
    /// reassigned even when the deleted item held the current maximum.
    last_assigned: u32,
}

/// One rendered menu section: a category plus its items in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let last_assigned = items.iter().map(|item| item.id).max().unwrap_or(0);
        Self { items, last_assigned }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Replace the entire item set. Reload applies through this so a failed
    /// fetch can leave the previous set untouched.
    pub fn replace_all(&mut self, items: Vec<MenuItem>) {
        self.last_assigned = items.iter().map(|item| item.id).max().unwrap_or(0);
        self.items = items;
    }

    pub fn find(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose name, description or category contains `query`
    /// (case-insensitive substring), in catalog order.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.matches(query)).collect()
    }

    /// Group an already-filtered sequence into sections. Section order is the
    /// first-seen order of each category; within a section, input order is
    /// preserved.
    pub fn group_by_category<'a, I>(items: I) -> Vec<MenuSection>
    where
        I: IntoIterator<Item = &'a MenuItem>,
    {
        let mut sections: Vec<MenuSection> = Vec::new();
        for item in items {
            match sections.iter_mut().find(|s| s.category == item.category) {
                Some(section) => section.items.push(item.clone()),
                None => sections.push(MenuSection {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                }),
            }
        }
        sections
    }

    /// Next id for a locally created item: max existing id (0 when empty) + 1,
    /// never dipping below an id already handed out this session.
    pub fn next_id(&self) -> u32 {
        let live_max = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        live_max.max(self.last_assigned) + 1
    }

    /// Validate and append a new item, assigning its id.
    pub fn create(&mut self, draft: ItemDraft) -> Result<&MenuItem, AppError> {
        draft.validate()?;
        let id = self.next_id();
        self.items.push(draft.into_item(id));
        self.last_assigned = id;
        Ok(self.items.last().unwrap())
    }

    /// Replace every field of an existing item except its id.
    pub fn update(&mut self, id: u32, draft: ItemDraft) -> Result<(), AppError> {
        draft.validate()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(AppError::ItemNotFound(id))?;
        *item = draft.into_item(id);
        Ok(())
    }

    /// Remove an item if present. Returns whether anything was removed so
    /// callers can tell a no-op from a deletion.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            category: category.to_string(),
            price,
            desc: String::new(),
            img: String::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.create(draft("Masala Dosa", "Tiffin", 50.0)).unwrap();
        catalog.create(draft("Idli", "Tiffin", 30.0)).unwrap();
        catalog.create(draft("Veg Biryani", "Mains", 120.0)).unwrap();
        catalog.create(draft("Filter Coffee", "Drinks", 25.0)).unwrap();
        catalog
    }

    #[test]
    fn create_assigns_monotonic_ids() {
        let mut catalog = Catalog::default();
        let first = catalog.create(draft("Dosa", "Tiffin", 50.0)).unwrap().id;
        let second = catalog.create(draft("Idli", "Tiffin", 30.0)).unwrap().id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut catalog = sample_catalog();
        // Deleting the item holding the max id must not free id 4 for reuse.
        assert!(catalog.remove(4));
        let next = catalog.create(draft("Payasam", "Desserts", 40.0)).unwrap().id;
        assert_eq!(next, 5);
        assert!(catalog.remove(2));
        let after_gap = catalog.create(draft("Vada", "Tiffin", 20.0)).unwrap().id;
        assert_eq!(after_gap, 6);
    }

    #[test]
    fn find_resolves_only_live_ids() {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.find(3).unwrap().name, "Veg Biryani");
        catalog.remove(3);
        assert!(catalog.find(3).is_none());
    }

    #[test]
    fn remove_reports_whether_anything_was_there() {
        let mut catalog = sample_catalog();
        assert!(catalog.remove(1));
        assert!(!catalog.remove(1));
        assert!(!catalog.remove(99));
    }

    #[test]
    fn search_is_substring_not_token() {
        let catalog = sample_catalog();
        let hits = catalog.search("iryan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Veg Biryani");
        assert!(catalog.search("xyz").is_empty());
    }

    #[test]
    fn grouping_keeps_first_seen_category_order() {
        let catalog = sample_catalog();
        let sections = Catalog::group_by_category(catalog.search(""));
        let categories: Vec<_> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Tiffin", "Mains", "Drinks"]);
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[0].items[0].name, "Masala Dosa");
    }

    #[test]
    fn grouping_empty_input_yields_no_sections() {
        let sections = Catalog::group_by_category(std::iter::empty());
        assert!(sections.is_empty());
    }

    #[test]
    fn update_replaces_fields_but_not_id() {
        let mut catalog = sample_catalog();
        catalog.update(2, draft("Ghee Idli", "Tiffin", 35.0)).unwrap();
        let item = catalog.find(2).unwrap();
        assert_eq!(item.name, "Ghee Idli");
        assert_eq!(item.price, 35.0);
        assert_eq!(item.id, 2);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut catalog = sample_catalog();
        let result = catalog.update(42, draft("Ghost", "None", 1.0));
        assert!(matches!(result, Err(AppError::ItemNotFound(42))));
    }

    #[test]
    fn replace_all_swaps_the_whole_set() {
        let mut catalog = sample_catalog();
        catalog.replace_all(vec![draft("Poori", "Tiffin", 45.0).into_item(10)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.next_id(), 11);
    }
}
