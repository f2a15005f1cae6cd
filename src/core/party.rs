use serde::{Deserialize, Serialize};

use crate::core::member::Member;
use crate::error::{PartyError, Result};

/// Maximum number of members a party can hold
pub const MAX_MEMBER_COUNT: usize = 5;

/// First-class collection of party members
///
/// Members are unique by id and never exceed [`MAX_MEMBER_COUNT`] after a
/// successful [`add`](Self::add). A roster is never changed in place: `add`
/// returns a new roster and leaves the receiver as it was, and
/// [`members`](Self::members) hands out a copy rather than the backing storage.
///
/// Construction through [`new`](Self::new), `FromIterator` or deserialization
/// does not validate; seed data is trusted to already satisfy the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyRoster {
    members: Vec<Member>,
}

impl PartyRoster {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Returns a new roster with `member` appended
    pub fn add(&self, member: Member) -> Result<PartyRoster> {
        if self.exists(&member) {
            tracing::debug!(member_id = %member.id, "rejected duplicate party member");
            return Err(PartyError::DuplicateMember(member.id));
        }
        if self.is_full() {
            tracing::debug!(
                member_id = %member.id,
                capacity = MAX_MEMBER_COUNT,
                "rejected party member, roster full"
            );
            return Err(PartyError::RosterFull {
                capacity: MAX_MEMBER_COUNT,
            });
        }

        let mut members = Vec::with_capacity(self.members.len() + 1);
        members.extend_from_slice(&self.members);
        tracing::debug!(member_id = %member.id, size = members.len() + 1, "added party member");
        members.push(member);

        Ok(Self::new(members))
    }

    /// Copy of the current members, in insertion order
    pub fn members(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// True if anyone in the party is still alive
    pub fn is_alive(&self) -> bool {
        self.members.iter().any(|member| member.is_alive)
    }

    /// True if a member with the same id is already in the party
    pub fn exists(&self, member: &Member) -> bool {
        self.members.iter().any(|m| m.same_identity(member))
    }

    /// True once the party holds [`MAX_MEMBER_COUNT`] members
    /// An unvalidated seed larger than that also counts as full
    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_MEMBER_COUNT
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }
}

impl FromIterator<Member> for PartyRoster {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
