pub mod combatant;
pub mod inventory;
pub mod member;
pub mod party;
