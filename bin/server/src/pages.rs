//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod destination;
pub mod landing;

pub use destination::{AdminPage, AuthorityPage, GeologistPage};
pub use landing::LandingPage;
