// Informational pages: home (static tables) and the course/faculty listings
// (one backend GET per view, no caching).

pub mod catalog;
pub mod home;
