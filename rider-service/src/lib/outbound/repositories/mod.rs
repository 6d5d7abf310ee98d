pub mod rider;

pub use rider::PostgresRiderRepository;
