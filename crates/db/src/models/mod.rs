pub mod enquiry;
pub mod payment;
pub mod program;
