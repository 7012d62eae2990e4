//! Grocery List State
//!
//! The in-memory list collection plus the transient UI state around it
//! (the add-form draft and the per-row edit mode). Everything here is
//! plain data owned by the grocery-list screen and dropped when the
//! screen unmounts; nothing survives navigation.

use std::collections::HashMap;

use crate::models::GroceryItem;

/// Pending name/quantity/unit text for the add-item modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl GroceryDraft {
    /// Trim all three fields and parse the quantity.
    ///
    /// Returns `None` when any field is empty after trimming or the
    /// quantity is not a finite non-negative number. Invalid drafts are a
    /// silent no-op at the call site; the modal stays open.
    pub fn validate(&self) -> Option<(String, f64, String)> {
        let name = self.name.trim();
        let quantity = self.quantity.trim();
        let unit = self.unit.trim();
        if name.is_empty() || quantity.is_empty() || unit.is_empty() {
            return None;
        }
        let quantity: f64 = quantity.parse().ok()?;
        if !quantity.is_finite() || quantity < 0.0 {
            return None;
        }
        Some((name.to_string(), quantity, unit.to_string()))
    }
}

/// Ordered grocery collection with quantity operations
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
    /// Last id issued, for collision-free timestamp ids
    last_id: u64,
}

impl GroceryList {
    /// The three fixed items every screen mount starts from
    pub fn seeded() -> Self {
        let items = vec![
            GroceryItem {
                id: "1".to_string(),
                name: "Apples".to_string(),
                quantity: 2.0,
                unit: "kg".to_string(),
                image: "https://placehold.co/100x100/green/white?text=Apples".to_string(),
            },
            GroceryItem {
                id: "2".to_string(),
                name: "Bananas".to_string(),
                quantity: 1.0,
                unit: "dozen".to_string(),
                image: "https://placehold.co/100x100/yellow/black?text=Bananas".to_string(),
            },
            GroceryItem {
                id: "3".to_string(),
                name: "Carrots".to_string(),
                quantity: 1.5,
                unit: "kg".to_string(),
                image: "https://placehold.co/100x100/orange/white?text=Carrots".to_string(),
            },
        ];
        Self { items, last_id: 0 }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Next timestamp-derived id, bumped past the last one issued so two
    /// adds within the same millisecond still get distinct ids.
    fn fresh_id(&mut self) -> String {
        let mut id = now_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    /// Append a new item from the add-form draft.
    ///
    /// Returns `true` when the draft validated and an item was appended;
    /// `false` leaves the collection untouched.
    pub fn add(&mut self, draft: &GroceryDraft) -> bool {
        let Some((name, quantity, unit)) = draft.validate() else {
            return false;
        };
        let id = self.fresh_id();
        self.items.push(GroceryItem::new(id, name, quantity, unit));
        true
    }

    /// Bump an item's quantity by one; unknown ids are a no-op.
    pub fn increase(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity += 1.0;
        }
    }

    /// Drop an item's quantity by one, clamped at zero; unknown ids are a no-op.
    pub fn decrease(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = (item.quantity - 1.0).max(0.0);
        }
    }

    /// Apply an inline-edit input to an item's quantity.
    ///
    /// Text that is not a finite non-negative number is discarded and the
    /// quantity keeps its prior value. The caller exits edit mode either way.
    pub fn confirm_edit(&mut self, id: &str, input: &str) {
        let Ok(quantity) = input.trim().parse::<f64>() else {
            return;
        };
        if !quantity.is_finite() || quantity < 0.0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }
}

/// Per-row inline-edit UI state: which rows show a numeric input, and the
/// pending text in each. Keyed by item id, parallel to the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    editing: HashMap<String, bool>,
    inputs: HashMap<String, String>,
}

impl EditState {
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.get(id).copied().unwrap_or(false)
    }

    /// Pending input text for a row, "0" when nothing has been seeded
    pub fn input(&self, id: &str) -> String {
        self.inputs.get(id).cloned().unwrap_or_else(|| "0".to_string())
    }

    /// Enter edit mode for a row, seeding the input with the current quantity
    pub fn begin(&mut self, id: &str, current_quantity: f64) {
        self.editing.insert(id.to_string(), true);
        self.inputs.insert(id.to_string(), format!("{}", current_quantity));
    }

    pub fn set_input(&mut self, id: &str, value: String) {
        self.inputs.insert(id.to_string(), value);
    }

    /// Leave edit mode for a row
    pub fn end(&mut self, id: &str) {
        self.editing.insert(id.to_string(), false);
    }
}

fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: &str, unit: &str) -> GroceryDraft {
        GroceryDraft {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn seeded_list_has_three_items() {
        let list = GroceryList::seeded();
        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[0].name, "Apples");
        assert_eq!(list.items()[1].name, "Bananas");
        assert_eq!(list.items()[2].name, "Carrots");
    }

    #[test]
    fn add_appends_valid_item() {
        let mut list = GroceryList::seeded();
        assert!(list.add(&draft("Milk", "2", "L")));
        assert_eq!(list.len(), 4);

        let added = &list.items()[3];
        assert_eq!(added.name, "Milk");
        assert_eq!(added.quantity, 2.0);
        assert_eq!(added.unit, "L");
        let prior_ids: Vec<_> = list.items()[..3].iter().map(|i| i.id.clone()).collect();
        assert!(!prior_ids.contains(&added.id));
    }

    #[test]
    fn add_trims_all_fields() {
        let mut list = GroceryList::seeded();
        assert!(list.add(&draft("  Milk  ", " 2 ", " L ")));
        let added = &list.items()[3];
        assert_eq!(added.name, "Milk");
        assert_eq!(added.unit, "L");
    }

    #[test]
    fn add_with_empty_name_is_noop() {
        let mut list = GroceryList::seeded();
        assert!(!list.add(&draft("", "2", "L")));
        assert!(!list.add(&draft("   ", "2", "L")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_with_empty_quantity_or_unit_is_noop() {
        let mut list = GroceryList::seeded();
        assert!(!list.add(&draft("Milk", "", "L")));
        assert!(!list.add(&draft("Milk", "2", "")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_with_non_numeric_quantity_is_noop() {
        let mut list = GroceryList::seeded();
        assert!(!list.add(&draft("Milk", "two", "L")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_with_negative_or_non_finite_quantity_is_noop() {
        let mut list = GroceryList::seeded();
        assert!(!list.add(&draft("Milk", "-2", "L")));
        assert!(!list.add(&draft("Milk", "NaN", "L")));
        assert!(!list.add(&draft("Milk", "inf", "L")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn rapid_adds_get_distinct_ids() {
        let mut list = GroceryList::seeded();
        assert!(list.add(&draft("Milk", "2", "L")));
        assert!(list.add(&draft("Eggs", "12", "pcs")));
        assert!(list.add(&draft("Bread", "1", "loaf")));
        let a = &list.items()[3].id;
        let b = &list.items()[4].id;
        let c = &list.items()[5].id;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn increase_bumps_quantity_by_one() {
        let mut list = GroceryList::seeded();
        list.increase("1");
        assert_eq!(list.get("1").unwrap().quantity, 3.0);
    }

    #[test]
    fn decrease_clamps_at_zero() {
        let mut list = GroceryList::seeded();
        // Bananas start at 1; two decreases must not go negative
        list.decrease("2");
        list.decrease("2");
        list.decrease("2");
        assert_eq!(list.get("2").unwrap().quantity, 0.0);
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let mut list = GroceryList::seeded();
        let before = list.get("3").unwrap().quantity;
        list.increase("3");
        list.decrease("3");
        assert_eq!(list.get("3").unwrap().quantity, before);
    }

    #[test]
    fn quantity_ops_ignore_unknown_ids() {
        let mut list = GroceryList::seeded();
        let before = list.clone();
        list.increase("999");
        list.decrease("999");
        list.confirm_edit("999", "5");
        assert_eq!(list, before);
    }

    #[test]
    fn confirm_edit_sets_parsed_quantity() {
        let mut list = GroceryList::seeded();
        list.confirm_edit("1", "4.5");
        assert_eq!(list.get("1").unwrap().quantity, 4.5);
        list.confirm_edit("1", " 0 ");
        assert_eq!(list.get("1").unwrap().quantity, 0.0);
    }

    #[test]
    fn confirm_edit_discards_invalid_input() {
        let mut list = GroceryList::seeded();
        list.confirm_edit("1", "abc");
        list.confirm_edit("1", "-3");
        list.confirm_edit("1", "NaN");
        list.confirm_edit("1", "");
        assert_eq!(list.get("1").unwrap().quantity, 2.0);
    }

    #[test]
    fn begin_edit_seeds_input_with_current_quantity() {
        let mut edit = EditState::default();
        edit.begin("3", 1.5);
        assert!(edit.is_editing("3"));
        assert_eq!(edit.input("3"), "1.5");

        edit.begin("1", 2.0);
        assert_eq!(edit.input("1"), "2");
    }

    #[test]
    fn edit_input_defaults_to_zero() {
        let edit = EditState::default();
        assert!(!edit.is_editing("1"));
        assert_eq!(edit.input("1"), "0");
    }

    #[test]
    fn invalid_edit_leaves_quantity_and_exits_edit_mode() {
        let mut list = GroceryList::seeded();
        let mut edit = EditState::default();

        edit.begin("1", list.get("1").unwrap().quantity);
        edit.set_input("1", "abc".to_string());

        // Confirm path: apply input, then always leave edit mode
        list.confirm_edit("1", &edit.input("1"));
        edit.end("1");

        assert_eq!(list.get("1").unwrap().quantity, 2.0);
        assert!(!edit.is_editing("1"));
    }
}
