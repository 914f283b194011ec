// EduBot: the FAQ chat widget embedded in every page.
// Replies come from a fixed keyword table; nothing leaves the process.

pub mod faq;
pub mod handlers;
pub mod store;

pub use store::ChatStore;
