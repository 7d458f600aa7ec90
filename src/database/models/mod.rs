pub mod appointment;
pub mod clinic;
pub mod clinical_exam;
pub mod clinical_history;
pub mod owner;
pub mod pet;
pub mod staff;
