pub mod hashing;
pub mod repositories;
