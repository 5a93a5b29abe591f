//! Service layer: auth, talents, and private content.

pub mod auth;
pub mod content;
pub mod talent;

pub use auth::AuthService;
pub use content::ContentService;
pub use talent::TalentService;
