use serde::{Deserialize, Serialize};

pub const PRISON_KEY: &str = "Prison Key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// True if any element satisfies `predicate`; false for an empty slice
pub fn any_match<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    items.iter().any(predicate)
}

/// Items carried by the party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains_named(&self, name: &str) -> bool {
        any_match(&self.items, |item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_prison_key() {
        let inventory = Inventory::new(vec![
            Item::new("Potion"),
            Item::new(PRISON_KEY),
            Item::new("Ether"),
        ]);

        assert_eq!(inventory.items().len(), 3);
        assert_eq!(inventory.items()[1], Item::new(PRISON_KEY));
        assert!(inventory.contains_named(PRISON_KEY));
        assert!(!inventory.contains_named("Elixir"));
    }

    #[test]
    fn any_match_on_empty_is_false() {
        let empty: [Item; 0] = [];
        assert!(!any_match(&empty, |_| true));
        assert!(!Inventory::default().contains_named(PRISON_KEY));
    }
}
