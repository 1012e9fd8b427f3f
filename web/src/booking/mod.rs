pub mod draft;
pub mod error;
pub mod workflow;

pub use draft::{BookingDraft, BookingField};
pub use error::{BookingError, GuestDetail};
pub use workflow::{
    leave_without_room, BookingApi, BookingPhase, BookingWorkflow, Navigator, SubmitOutcome,
};

use leptos::prelude::ServerFnError;
use shared_types::{BookingCreated, BookingPayload};

use crate::backend::BackendError;
use crate::server::{create_booking, CreateBookingReply};

/// Creates bookings through the `create_booking` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerBookingApi;

impl BookingApi for ServerBookingApi {
    async fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> Result<BookingCreated, BackendError> {
        booking_result(create_booking(payload.clone()).await)
    }
}

/// Maps what the `create_booking` server function returned onto the result
/// the workflow works with. Failing to reach the server at all is a
/// transport error.
pub fn booking_result(
    reply: Result<CreateBookingReply, ServerFnError>,
) -> Result<BookingCreated, BackendError> {
    match reply {
        Ok(reply) => reply.into_result(),
        Err(e) => Err(BackendError::Request(e.to_string())),
    }
}

/// Replaces the current page through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(url) {
                    tracing::error!("Failed to navigate to {}: {:?}", url, e);
                }
            }
            None => tracing::warn!("No browser window to navigate to {}", url),
        }
    }
}

/// The workflow as wired into the booking page.
pub type PageBookingWorkflow =
    BookingWorkflow<ServerBookingApi, BrowserNavigator, crate::notifications::NotificationCenter>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RoomSelection;
    use crate::notifications::{Notification, Notifier};
    use assert_matches::assert_matches;
    use std::sync::Mutex;

    struct ReplyingApi(Result<CreateBookingReply, ServerFnError>);

    impl BookingApi for ReplyingApi {
        async fn create_booking(
            &self,
            _payload: &BookingPayload,
        ) -> Result<BookingCreated, BackendError> {
            booking_result(self.0.clone())
        }
    }

    #[derive(Default)]
    struct Page {
        urls: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Navigator for Page {
        fn redirect(&self, url: &str) {
            self.urls.lock().unwrap().push(url.to_string());
        }
    }

    impl Notifier for Page {
        fn notify(&self, notification: Notification) -> u64 {
            if notification.is_error() {
                self.errors.lock().unwrap().push(notification.message);
            }
            0
        }

        fn dismiss(&self, _id: u64) {}
    }

    fn filled_draft() -> BookingDraft {
        BookingDraft::for_room(&RoomSelection::new("42", None))
            .apply(BookingField::GuestName, "Ivan")
            .apply(BookingField::GuestEmail, "ivan@example.com")
            .apply(BookingField::GuestPhone, "+79990000000")
            .apply(BookingField::CheckIn, "2024-07-01")
            .apply(BookingField::CheckOut, "2024-07-05")
    }

    async fn submit_with(reply: Result<CreateBookingReply, ServerFnError>) -> (SubmitOutcome, Page) {
        let page = Page::default();
        let api = ReplyingApi(reply);
        let outcome = BookingWorkflow::new(RoomSelection::new("42", None), &api, &page, &page)
            .submit(&filled_draft())
            .await;
        (outcome, page)
    }

    #[test]
    fn server_fn_failure_is_a_transport_error() {
        let result = booking_result(Err(ServerFnError::new("Failed to reach booking service")));
        assert_matches!(result, Err(BackendError::Request(_)));
    }

    #[tokio::test]
    async fn api_refusal_reaches_the_guest_verbatim() {
        let reply = CreateBookingReply::from_api(Err(BackendError::from_status(
            422,
            r#"{"message":"Room unavailable"}"#,
        )))
        .unwrap();

        let (outcome, page) = submit_with(Ok(reply)).await;

        assert_matches!(outcome, SubmitOutcome::Rejected(BookingError::BookingCreation { .. }));
        assert_eq!(
            *page.errors.lock().unwrap(),
            vec!["Booking failed: Room unavailable".to_string()]
        );
        assert!(page.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreadable_success_body_keeps_guest_on_page() {
        let reply = CreateBookingReply::from_api(Ok("not json".to_string())).unwrap();

        let (outcome, page) = submit_with(Ok(reply)).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(BookingError::MissingConfirmationUrl)
        );
        assert!(page.urls.lock().unwrap().is_empty());
        assert_eq!(page.errors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_server_shows_generic_failure() {
        let (outcome, page) =
            submit_with(Err(ServerFnError::new("Failed to reach booking service"))).await;

        assert_matches!(
            outcome,
            SubmitOutcome::Rejected(BookingError::BookingCreation { message: None })
        );
        assert_eq!(
            *page.errors.lock().unwrap(),
            vec![error::GENERIC_BOOKING_FAILURE.to_string()]
        );
    }
}
