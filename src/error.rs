use thiserror::Error;

use crate::types::MemberId;

/// Rejected roster mutations. The roster the call was made on is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    #[error("Member {0} is already in the party")]
    DuplicateMember(MemberId),

    #[error("Party is full ({capacity} members), cannot add more")]
    RosterFull { capacity: usize },
}

pub type Result<T> = std::result::Result<T, PartyError>;
