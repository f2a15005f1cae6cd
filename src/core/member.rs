use serde::{Deserialize, Serialize};

use crate::types::MemberId;

/// A party member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub is_alive: bool,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, is_alive: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_alive,
        }
    }

    /// Identity comparison: only `id` is considered
    pub fn same_identity(&self, other: &Member) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_name_and_status() {
        let hero = Member::new(1, "Hero", true);
        let renamed = Member::new(1, "Fallen Hero", false);

        assert!(hero.same_identity(&renamed));
        assert_ne!(hero, renamed);
        assert!(!hero.same_identity(&Member::new(2, "Hero", true)));
    }
}
