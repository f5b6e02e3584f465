pub mod enquiry_repo;
pub mod payment_repo;
pub mod program_repo;

pub use enquiry_repo::EnquiryRepo;
pub use payment_repo::PaymentRepo;
pub use program_repo::ProgramRepo;
