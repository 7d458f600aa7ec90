// One handler module per concern; routes are wired in main.rs.
pub mod appointments;
pub mod auth;
pub mod clinic;
pub mod exams;
pub mod histories;
pub mod owners;
pub mod pets;
pub mod staff;
pub mod utils;
