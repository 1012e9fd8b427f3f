pub mod auth_guard;
pub mod error;
pub mod loading;
pub mod navbar;
pub mod room_card;
pub mod toasts;

// Re-export commonly used types
pub use auth_guard::{use_admin_token_context, AdminGuard, AdminToken};
pub use error::{server_error_message, ErrorView};
pub use loading::LoadingView;
pub use navbar::{AdminNavbar, Navbar};
pub use room_card::RoomCard;
pub use toasts::NotificationToasts;
