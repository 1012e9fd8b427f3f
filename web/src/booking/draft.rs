use chrono::NaiveDate;
use shared_types::{BookingPayload, GuestCounts};

use super::error::{BookingError, GuestDetail};
use crate::navigation::RoomSelection;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    GuestName,
    GuestEmail,
    GuestPhone,
    CheckIn,
    CheckOut,
    Adults,
    Children,
    Notes,
}

/// Booking form state as the guest is filling it in. Lives only as long as
/// the booking page does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub room_id: String,
    pub room_title: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Guest counts as typed; parsed in [`BookingDraft::validate`].
    pub adults: String,
    pub children: String,
    pub notes: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            room_id: String::new(),
            room_title: None,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            check_in: None,
            check_out: None,
            adults: "1".to_string(),
            children: "0".to_string(),
            notes: String::new(),
        }
    }
}

impl BookingDraft {
    pub fn for_room(selection: &RoomSelection) -> Self {
        Self {
            room_id: selection.room_id.clone(),
            room_title: selection.room_title.clone(),
            ..Self::default()
        }
    }

    /// Applies raw input text to one field and returns the new draft.
    ///
    /// Dates that don't parse as `YYYY-MM-DD` clear the field. Guest counts
    /// are kept as typed so a cleared input stays empty while the guest is
    /// typing. Both are checked by [`BookingDraft::validate`].
    pub fn apply(mut self, field: BookingField, value: &str) -> Self {
        match field {
            BookingField::GuestName => self.guest_name = value.to_string(),
            BookingField::GuestEmail => self.guest_email = value.to_string(),
            BookingField::GuestPhone => self.guest_phone = value.to_string(),
            BookingField::CheckIn => self.check_in = parse_date(value),
            BookingField::CheckOut => self.check_out = parse_date(value),
            BookingField::Adults => self.adults = value.to_string(),
            BookingField::Children => self.children = value.to_string(),
            BookingField::Notes => self.notes = value.to_string(),
        }
        self
    }

    /// Current value of a field as the form input should display it.
    pub fn value(&self, field: BookingField) -> String {
        match field {
            BookingField::GuestName => self.guest_name.clone(),
            BookingField::GuestEmail => self.guest_email.clone(),
            BookingField::GuestPhone => self.guest_phone.clone(),
            BookingField::CheckIn => format_date(self.check_in),
            BookingField::CheckOut => format_date(self.check_out),
            BookingField::Adults => self.adults.clone(),
            BookingField::Children => self.children.clone(),
            BookingField::Notes => self.notes.clone(),
        }
    }

    /// Number of nights between the selected dates, when the range is valid.
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                Some((check_out - check_in).num_days())
            }
            _ => None,
        }
    }

    /// Checks the submit preconditions and builds the request payload.
    pub fn validate(&self) -> Result<BookingPayload, BookingError> {
        if self.room_id.trim().is_empty() {
            return Err(BookingError::MissingContext);
        }

        let (check_in, check_out) = match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => (check_in, check_out),
            _ => return Err(BookingError::InvalidDateRange),
        };

        let adults = match parse_count(&self.adults) {
            Some(adults) if adults >= 1 => adults,
            _ => return Err(BookingError::InvalidGuestCount),
        };
        // An empty children field means none.
        let children = match self.children.trim() {
            "" => 0,
            raw => parse_count(raw).ok_or(BookingError::InvalidGuestCount)?,
        };

        let guest_name = required(&self.guest_name, GuestDetail::Name)?;
        let guest_email = required(&self.guest_email, GuestDetail::Email)?;
        let guest_phone = required(&self.guest_phone, GuestDetail::Phone)?;

        Ok(BookingPayload {
            room_id: self.room_id.trim().to_string(),
            guest_name,
            guest_email,
            guest_phone,
            check_in,
            check_out,
            guests: GuestCounts { adults, children },
            notes: self.notes.clone(),
        })
    }
}

fn required(value: &str, detail: GuestDetail) -> Result<String, BookingError> {
    let value = value.trim();
    if value.is_empty() {
        Err(BookingError::MissingGuestDetails(detail))
    } else {
        Ok(value.to_string())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}
