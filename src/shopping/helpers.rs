//! Shopping List Business Logic Helpers
//!
//! Pure functions over an in-memory item list. The store loads the list,
//! applies one of these, and persists the result.

use super::models::Item;

/// Returns the trimmed name, or `None` when nothing is left after trimming.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Largest id in `items`, or 0 for an empty list.
pub fn highest_id(items: &[Item]) -> u64 {
    items.iter().map(|i| i.id).max().unwrap_or(0)
}

/// Computes the id for a new item.
///
/// The id is one past the largest id in `items` (0 for an empty list), and
/// never at or below `floor`, the highest id already handed out. Returns
/// `None` once `u64::MAX` has been used.
pub fn next_id(items: &[Item], floor: u64) -> Option<u64> {
    highest_id(items).max(floor).checked_add(1)
}

/// Flips the `checked` flag of the item with `id` in place.
///
/// Returns a copy of the updated item, or `None` if no item matches.
pub fn toggle_in(items: &mut [Item], id: u64) -> Option<Item> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    item.checked = !item.checked;
    Some(item.clone())
}

/// Removes every item with `id`. Returns whether anything was removed.
pub fn remove_from(items: &mut Vec<Item>, id: u64) -> bool {
    let before = items.len();
    items.retain(|i| i.id != id);
    items.len() != before
}

/// Produces a human-readable one-line summary for a list of items.
///
/// Example output: `"3 item(s), 1 checked"`.
pub fn format_item_summary(items: &[Item]) -> String {
    let done = items.iter().filter(|i| i.checked).count();
    format!("{} item(s), {} checked", items.len(), done)
}
