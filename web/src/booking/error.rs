use std::fmt;

use thiserror::Error;

pub const GENERIC_BOOKING_FAILURE: &str =
    "We could not complete your booking right now. Please try again.";

/// Contact fields a guest must fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestDetail {
    Name,
    Email,
    Phone,
}

impl fmt::Display for GuestDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuestDetail::Name => "full name",
            GuestDetail::Email => "email",
            GuestDetail::Phone => "phone number",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("No room was selected for this booking")]
    MissingContext,

    #[error("Check-out date must be later than check-in date")]
    InvalidDateRange,

    #[error("At least one adult guest is required")]
    InvalidGuestCount,

    #[error("Please enter your {0}")]
    MissingGuestDetails(GuestDetail),

    #[error("Booking could not be created: {}", .message.as_deref().unwrap_or("no details"))]
    BookingCreation { message: Option<String> },

    #[error("Booking API response did not include a confirmation URL")]
    MissingConfirmationUrl,
}

impl BookingError {
    /// Text shown in the toast. A missing confirmation URL reads the same as
    /// any other failed booking; only the logs tell them apart.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::MissingContext => {
                "Please choose a room before making a booking.".to_string()
            }
            BookingError::BookingCreation {
                message: Some(message),
            } => format!("Booking failed: {}", message),
            BookingError::BookingCreation { message: None }
            | BookingError::MissingConfirmationUrl => GENERIC_BOOKING_FAILURE.to_string(),
            other => other.to_string(),
        }
    }

    /// Stable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::MissingContext => "missing_context",
            BookingError::InvalidDateRange => "invalid_date_range",
            BookingError::InvalidGuestCount => "invalid_guest_count",
            BookingError::MissingGuestDetails(_) => "missing_guest_details",
            BookingError::BookingCreation { .. } => "booking_creation",
            BookingError::MissingConfirmationUrl => "missing_confirmation_url",
        }
    }

    /// True for failures caught before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidDateRange
                | BookingError::InvalidGuestCount
                | BookingError::MissingGuestDetails(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = BookingError::BookingCreation {
            message: Some("Room unavailable".to_string()),
        };
        assert!(err.user_message().contains("Room unavailable"));
    }

    #[test]
    fn missing_url_reads_like_generic_failure_but_logs_differently() {
        let missing = BookingError::MissingConfirmationUrl;
        let generic = BookingError::BookingCreation { message: None };

        assert_eq!(missing.user_message(), generic.user_message());
        assert_ne!(missing.kind(), generic.kind());
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(BookingError::InvalidDateRange.is_validation());
        assert!(BookingError::MissingGuestDetails(GuestDetail::Email).is_validation());
        assert!(!BookingError::MissingConfirmationUrl.is_validation());
        assert_eq!(
            BookingError::MissingGuestDetails(GuestDetail::Phone).user_message(),
            "Please enter your phone number"
        );
    }
}
