pub mod catalog;
pub mod enquiry;
pub mod library;
