pub mod centers;
pub mod enquiries;
pub mod payments;
pub mod programs;
