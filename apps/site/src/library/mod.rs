// Library dashboard: bearer-token login against the institute backend and a
// per-session mirror of the book list that borrow/return calls update.

pub mod handlers;
pub mod session;
pub mod shelf;
pub mod views;

pub use shelf::ShelfStore;
