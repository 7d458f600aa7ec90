pub mod appointments;
pub mod clinic;
pub mod exams;
pub mod histories;
pub mod owners;
pub mod pets;
pub mod staff;

pub use appointments::AppointmentRepository;
pub use clinic::ClinicRepository;
pub use exams::ExamRepository;
pub use histories::HistoryRepository;
pub use owners::OwnerRepository;
pub use pets::PetRepository;
pub use staff::StaffRepository;
