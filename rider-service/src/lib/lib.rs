pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::rider;
pub use outbound::repositories;
