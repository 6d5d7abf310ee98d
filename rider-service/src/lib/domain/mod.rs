pub mod rider;
