pub mod compare;
pub mod hashing;

pub use compare::{
    sequenced_equals, sequenced_equals_by_key, unsequenced_equals, unsequenced_equals_by_key,
};
pub use hashing::{
    sequenced_hash, sequenced_hash_by_key, unsequenced_hash, unsequenced_hash_by_key,
};
