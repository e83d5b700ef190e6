//! Profile handlers - registry CRUD.

mod create_profile;
mod delete_profile;
mod list_profiles;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler};
pub use delete_profile::DeleteProfileHandler;
pub use list_profiles::ListProfilesHandler;
