mod home;
mod support;

pub use home::HomePage;
pub use support::SupportPage;
