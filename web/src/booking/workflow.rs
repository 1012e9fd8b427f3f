use std::future::Future;
use std::sync::{Mutex, PoisonError};

use shared_types::{BookingCreated, BookingPayload};

use super::draft::BookingDraft;
use super::error::BookingError;
use crate::backend::BackendError;
use crate::navigation::{RoomSelection, SITE_ROOT};
use crate::notifications::{Notification, Notifier};

pub const PROCESSING_MESSAGE: &str = "Processing your booking...";

/// Creates booking records in the hotel API.
pub trait BookingApi {
    fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingCreated, BackendError>>;
}

impl<T: BookingApi + ?Sized> BookingApi for &T {
    fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingCreated, BackendError>> {
        (**self).create_booking(payload)
    }
}

/// Full-page navigation, leaving the application.
pub trait Navigator {
    fn redirect(&self, url: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn redirect(&self, url: &str) {
        (**self).redirect(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Idle,
    Validating,
    Submitting,
    /// Terminal: the page is being replaced by the payment site.
    Redirecting,
}

impl BookingPhase {
    /// Whether the form must be locked against edits and resubmission.
    pub fn is_busy(self) -> bool {
        self != BookingPhase::Idle
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight, or the page is already redirecting.
    Ignored,
    Rejected(BookingError),
    Redirected(String),
}

/// Notifies the user and sends them back to the site root. Used when the
/// booking page is opened without a room.
pub fn leave_without_room<N: Navigator, T: Notifier>(navigator: &N, notifier: &T) -> BookingError {
    let error = BookingError::MissingContext;
    tracing::warn!(kind = error.kind(), "Booking page opened without a room selection");
    notifier.notify(Notification::error(error.user_message()));
    navigator.redirect(SITE_ROOT);
    error
}

type PhaseObserver = Box<dyn Fn(BookingPhase) + Send + Sync>;

/// Reserve-then-pay handoff for one booking page.
///
/// A submission validates the draft, creates the booking through
/// [`BookingApi`], and on success hands the browser to the confirmation URL
/// the API returned. Only one submission runs at a time; the phase is the
/// guard.
pub struct BookingWorkflow<A, N, T> {
    api: A,
    navigator: N,
    notifier: T,
    selection: RoomSelection,
    phase: Mutex<BookingPhase>,
    on_phase_change: Option<PhaseObserver>,
}

impl<A, N, T> BookingWorkflow<A, N, T>
where
    A: BookingApi,
    N: Navigator,
    T: Notifier,
{
    /// Starts a workflow for the selected room. Without a selection the user
    /// is notified and redirected to the site root, and no workflow exists.
    pub fn enter(
        selection: Option<RoomSelection>,
        api: A,
        navigator: N,
        notifier: T,
    ) -> Result<Self, BookingError> {
        match selection {
            Some(selection) => Ok(Self::new(selection, api, navigator, notifier)),
            None => Err(leave_without_room(&navigator, &notifier)),
        }
    }

    pub fn new(selection: RoomSelection, api: A, navigator: N, notifier: T) -> Self {
        Self {
            api,
            navigator,
            notifier,
            selection,
            phase: Mutex::new(BookingPhase::Idle),
            on_phase_change: None,
        }
    }

    /// Registers a callback run on every phase transition.
    pub fn with_phase_observer(
        mut self,
        observer: impl Fn(BookingPhase) + Send + Sync + 'static,
    ) -> Self {
        self.on_phase_change = Some(Box::new(observer));
        self
    }

    pub fn selection(&self) -> &RoomSelection {
        &self.selection
    }

    pub fn new_draft(&self) -> BookingDraft {
        BookingDraft::for_room(&self.selection)
    }

    pub fn phase(&self) -> BookingPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase().is_busy()
    }

    /// Runs one submission attempt. The draft itself is never modified, so a
    /// failed attempt leaves the form exactly as the guest left it.
    pub async fn submit(&self, draft: &BookingDraft) -> SubmitOutcome {
        if !self.begin() {
            tracing::debug!(room_id = %self.selection.room_id, "Ignoring submit while busy");
            return SubmitOutcome::Ignored;
        }

        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(error) => return self.fail(error),
        };

        self.set_phase(BookingPhase::Submitting);
        let processing = self.notifier.notify(Notification::info(PROCESSING_MESSAGE));
        tracing::info!(
            room_id = %payload.room_id,
            check_in = %payload.check_in,
            check_out = %payload.check_out,
            "Submitting booking"
        );

        match self.api.create_booking(&payload).await {
            Ok(BookingCreated {
                confirmation_url: Some(url),
            }) if !url.trim().is_empty() => {
                let url = url.trim().to_string();
                self.set_phase(BookingPhase::Redirecting);
                tracing::info!(room_id = %payload.room_id, "Booking created, redirecting to payment");
                self.navigator.redirect(&url);
                SubmitOutcome::Redirected(url)
            }
            Ok(_) => {
                self.notifier.dismiss(processing);
                self.fail(BookingError::MissingConfirmationUrl)
            }
            Err(err) => {
                tracing::warn!(room_id = %payload.room_id, "Booking request failed: {}", err);
                self.notifier.dismiss(processing);
                self.fail(BookingError::BookingCreation {
                    message: err.server_message().map(str::to_string),
                })
            }
        }
    }

    /// Moves Idle -> Validating under the lock. Any other phase means a
    /// submission is already running or the page is leaving.
    fn begin(&self) -> bool {
        {
            let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
            if *phase != BookingPhase::Idle {
                return false;
            }
            *phase = BookingPhase::Validating;
        }
        self.publish(BookingPhase::Validating);
        true
    }

    fn fail(&self, error: BookingError) -> SubmitOutcome {
        match &error {
            BookingError::MissingConfirmationUrl => {
                tracing::error!(kind = error.kind(), room_id = %self.selection.room_id, "{}", error)
            }
            e if e.is_validation() => tracing::debug!(kind = error.kind(), "{}", error),
            _ => tracing::warn!(kind = error.kind(), room_id = %self.selection.room_id, "{}", error),
        }

        self.set_phase(BookingPhase::Idle);
        self.notifier.notify(Notification::error(error.user_message()));
        SubmitOutcome::Rejected(error)
    }

    fn set_phase(&self, next: BookingPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.publish(next);
    }

    fn publish(&self, phase: BookingPhase) {
        if let Some(observer) = &self.on_phase_change {
            observer(phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::draft::BookingField;
    use assert_matches::assert_matches;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct MockApi {
        reply: Result<BookingCreated, BackendError>,
        calls: Mutex<Vec<BookingPayload>>,
        gate: Option<Arc<Notify>>,
    }

    impl MockApi {
        fn replying(reply: Result<BookingCreated, BackendError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn confirming(url: &str) -> Self {
            Self::replying(Ok(BookingCreated {
                confirmation_url: Some(url.to_string()),
            }))
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl BookingApi for MockApi {
        async fn create_booking(
            &self,
            payload: &BookingPayload,
        ) -> Result<BookingCreated, BackendError> {
            self.calls.lock().unwrap().push(payload.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        urls: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn urls(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, url: &str) {
            self.urls.lock().unwrap().push(url.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
        dismissed: Mutex<Vec<u64>>,
    }

    impl RecordingNotifier {
        fn errors(&self) -> Vec<String> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.is_error())
                .map(|n| n.message.clone())
                .collect()
        }

        fn all(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }

        /// Notifications still on screen, in the order they were shown.
        fn visible(&self) -> Vec<Notification> {
            let dismissed = self.dismissed.lock().unwrap();
            self.all()
                .into_iter()
                .enumerate()
                .filter(|(id, _)| !dismissed.contains(&(*id as u64)))
                .map(|(_, n)| n)
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) -> u64 {
            let mut seen = self.seen.lock().unwrap();
            seen.push(notification);
            (seen.len() - 1) as u64
        }

        fn dismiss(&self, id: u64) {
            self.dismissed.lock().unwrap().push(id);
        }
    }

    fn room_42() -> RoomSelection {
        RoomSelection::new("42", Some("Deluxe".to_string()))
    }

    fn ivan_draft() -> BookingDraft {
        BookingDraft::for_room(&room_42())
            .apply(BookingField::GuestName, "Ivan")
            .apply(BookingField::GuestEmail, "ivan@example.com")
            .apply(BookingField::GuestPhone, "+79990000000")
            .apply(BookingField::CheckIn, "2024-07-01")
            .apply(BookingField::CheckOut, "2024-07-05")
            .apply(BookingField::Adults, "2")
            .apply(BookingField::Children, "1")
    }

    #[test]
    fn entering_without_room_redirects_home_and_builds_nothing() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();

        let entered = BookingWorkflow::enter(None, &api, &navigator, &notifier);

        assert!(matches!(entered, Err(BookingError::MissingContext)));
        assert_eq!(navigator.urls(), vec![SITE_ROOT.to_string()]);
        assert_eq!(notifier.errors().len(), 1);
        assert_eq!(api.call_count(), 0);
    }

    #[test]
    fn entering_with_room_has_no_side_effects() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();

        let workflow =
            BookingWorkflow::enter(Some(room_42()), &api, &navigator, &notifier).unwrap();

        assert_eq!(workflow.phase(), BookingPhase::Idle);
        assert_eq!(workflow.new_draft().room_id, "42");
        assert!(navigator.urls().is_empty());
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn bad_date_ranges_never_reach_the_api() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        for (check_in, check_out) in [("2024-07-05", "2024-07-01"), ("2024-07-05", "2024-07-05")] {
            let draft = ivan_draft()
                .apply(BookingField::CheckIn, check_in)
                .apply(BookingField::CheckOut, check_out);

            let outcome = workflow.submit(&draft).await;

            assert_eq!(outcome, SubmitOutcome::Rejected(BookingError::InvalidDateRange));
            assert_eq!(workflow.phase(), BookingPhase::Idle);
        }
        assert_eq!(api.call_count(), 0);
        assert!(navigator.urls().is_empty());
    }

    #[tokio::test]
    async fn zero_adults_never_reaches_the_api() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        let outcome = workflow
            .submit(&ivan_draft().apply(BookingField::Adults, "0"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Rejected(BookingError::InvalidGuestCount));
        assert_eq!(api.call_count(), 0);
        assert_eq!(notifier.errors(), vec!["At least one adult guest is required".to_string()]);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let api = MockApi::confirming("https://pay.example/x").gated(gate.clone());
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);
        let draft = ivan_draft();

        let (first, second, _) = tokio::join!(
            workflow.submit(&draft),
            workflow.submit(&draft),
            async {
                assert_eq!(workflow.phase(), BookingPhase::Submitting);
                gate.notify_one();
            }
        );

        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(first, SubmitOutcome::Redirected("https://pay.example/x".to_string()));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn success_navigates_to_confirmation_url() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        let outcome = workflow.submit(&ivan_draft()).await;

        assert_eq!(outcome, SubmitOutcome::Redirected("https://pay.example/x".to_string()));
        assert_eq!(navigator.urls(), vec!["https://pay.example/x".to_string()]);
        assert!(notifier.errors().is_empty());
        assert_eq!(workflow.phase(), BookingPhase::Redirecting);
    }

    #[tokio::test]
    async fn redirecting_is_terminal() {
        let api = MockApi::confirming("https://pay.example/x");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        workflow.submit(&ivan_draft()).await;
        let again = workflow.submit(&ivan_draft()).await;

        assert_eq!(again, SubmitOutcome::Ignored);
        assert_eq!(api.call_count(), 1);
        assert_eq!(navigator.urls().len(), 1);
    }

    #[tokio::test]
    async fn missing_confirmation_url_keeps_guest_on_page() {
        let api = MockApi::replying(Ok(BookingCreated::default()));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);
        let draft = ivan_draft();

        let outcome = workflow.submit(&draft).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(BookingError::MissingConfirmationUrl));
        assert!(navigator.urls().is_empty());
        assert_eq!(notifier.errors().len(), 1);
        assert!(!workflow.is_submitting());
        assert_eq!(draft, ivan_draft());
    }

    #[tokio::test]
    async fn blank_confirmation_url_counts_as_missing() {
        let api = MockApi::confirming("   ");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        let outcome = workflow.submit(&ivan_draft()).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(BookingError::MissingConfirmationUrl));
        assert!(navigator.urls().is_empty());
    }

    #[tokio::test]
    async fn server_rejection_surfaces_its_message_and_allows_retry() {
        let api = MockApi::replying(Err(BackendError::from_status(
            422,
            r#"{"message":"Room unavailable"}"#,
        )));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        let outcome = workflow.submit(&ivan_draft()).await;

        assert_matches!(
            outcome,
            SubmitOutcome::Rejected(BookingError::BookingCreation { message: Some(ref m) }) if m == "Room unavailable"
        );
        let errors = notifier.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Room unavailable"));
        assert_eq!(workflow.phase(), BookingPhase::Idle);

        workflow.submit(&ivan_draft()).await;
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn failed_attempt_clears_processing_notice() {
        let api = MockApi::replying(Err(BackendError::from_status(
            422,
            r#"{"message":"Room unavailable"}"#,
        )));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        workflow.submit(&ivan_draft()).await;

        assert_eq!(
            notifier.visible(),
            vec![Notification::error("Booking failed: Room unavailable")]
        );
    }

    #[tokio::test]
    async fn missing_url_clears_processing_notice() {
        let api = MockApi::replying(Ok(BookingCreated::default()));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        workflow.submit(&ivan_draft()).await;

        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].is_error());
    }

    #[tokio::test]
    async fn network_failure_uses_generic_message() {
        let api = MockApi::replying(Err(BackendError::Request("connection reset".into())));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        workflow.submit(&ivan_draft()).await;

        assert_eq!(
            notifier.errors(),
            vec![crate::booking::error::GENERIC_BOOKING_FAILURE.to_string()]
        );
    }

    #[tokio::test]
    async fn observer_sees_every_transition() {
        let api = MockApi::replying(Ok(BookingCreated::default()));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier)
            .with_phase_observer(move |phase| sink.lock().unwrap().push(phase));

        workflow.submit(&ivan_draft()).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                BookingPhase::Validating,
                BookingPhase::Submitting,
                BookingPhase::Idle
            ]
        );
    }

    #[tokio::test]
    async fn ivan_books_room_42_and_goes_to_payment() {
        let api = MockApi::confirming("https://pay.example/abc");
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let workflow = BookingWorkflow::new(room_42(), &api, &navigator, &notifier);

        let outcome = workflow.submit(&ivan_draft()).await;

        assert_eq!(outcome, SubmitOutcome::Redirected("https://pay.example/abc".to_string()));
        assert_eq!(navigator.urls(), vec!["https://pay.example/abc".to_string()]);
        assert!(notifier.errors().is_empty());

        let sent = api.calls.lock().unwrap()[0].clone();
        assert_eq!(sent.room_id, "42");
        assert_eq!(sent.guests.adults, 2);
        assert_eq!(sent.guests.children, 1);
        assert_eq!(
            notifier.all(),
            vec![Notification::info(PROCESSING_MESSAGE)]
        );
    }
}
