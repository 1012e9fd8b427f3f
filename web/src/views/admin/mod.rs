pub mod dashboard;
pub mod homepage_editor;
pub mod promotions_editor;
pub mod services_editor;

pub use dashboard::AdminDashboard;
pub use homepage_editor::HomepageEditorPage;
pub use promotions_editor::PromotionsEditorPage;
pub use services_editor::ServicesEditorPage;

use leptos::prelude::ServerFnError;

use crate::components::{server_error_message, AdminToken};
use crate::notifications::NotificationCenter;
use crate::server::ADMIN_SESSION_REJECTED;
use crate::utils::auth::clear_admin_token;

const SESSION_MISSING: &str = "Your admin session has ended. Sign in again and reload the page.";

/// Token for an admin mutation. Reports a toast when the session is gone.
fn session_token(token: Option<AdminToken>, notifications: NotificationCenter) -> Option<String> {
    let token = token.and_then(|t| t.get());
    if token.is_none() {
        notifications.error(SESSION_MISSING);
    }
    token
}

/// Shows a failed admin mutation. A rejected token is dropped from storage so
/// the next page load asks for a new sign-in.
fn report_failure(err: &ServerFnError, notifications: NotificationCenter) {
    let message = server_error_message(err);
    if message == ADMIN_SESSION_REJECTED {
        clear_admin_token();
        notifications.error(SESSION_MISSING);
    } else {
        notifications.error(message);
    }
}
