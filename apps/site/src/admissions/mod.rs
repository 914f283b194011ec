// Admissions: program catalog, form validation, and delivery of the
// application either to the backend or to the admissions desk on WhatsApp.

pub mod catalog;
pub mod handlers;
pub mod whatsapp;
