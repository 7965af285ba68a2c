pub mod auth;

pub use auth::{resolve_user_id_by_email_or_response, AuthenticatedUser};
