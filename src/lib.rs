//! Party and battle domain types for a small RPG.
//!
//! The centerpiece is [`PartyRoster`], a first-class collection that keeps
//! its members unique and bounded and never changes a value once it has
//! been handed out. Every mutation returns a fresh roster instead.

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::combatant::{apply_poison, total_team_damage, Combatant, Condition};
pub use crate::core::inventory::{any_match, Inventory, Item};
pub use crate::core::member::Member;
pub use crate::core::party::{PartyRoster, MAX_MEMBER_COUNT};
pub use error::{PartyError, Result};
pub use types::MemberId;
