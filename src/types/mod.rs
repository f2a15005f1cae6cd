pub mod member_id;

pub use member_id::MemberId;
