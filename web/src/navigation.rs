//! Cross-page intents carried in the URL.
//!
//! Pages never leave flags behind in browser storage for the next page to
//! pick up. Whatever the next page needs to know travels in its query string
//! and is parsed back into one of these types.

pub const SITE_ROOT: &str = "/";

/// The room a guest picked before reaching the booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSelection {
    pub room_id: String,
    pub room_title: Option<String>,
}

impl RoomSelection {
    pub fn new(room_id: impl Into<String>, room_title: Option<String>) -> Self {
        Self {
            room_id: room_id.into(),
            room_title,
        }
    }

    /// Parses the `room` / `title` query values. A blank room id counts as
    /// no selection at all.
    pub fn from_query(room: Option<String>, title: Option<String>) -> Option<Self> {
        let room_id = room?.trim().to_string();
        if room_id.is_empty() {
            return None;
        }
        let room_title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Some(Self { room_id, room_title })
    }

    pub fn booking_href(&self) -> String {
        let mut href = format!("/booking?room={}", urlencoding::encode(&self.room_id));
        if let Some(title) = &self.room_title {
            href.push_str("&title=");
            href.push_str(&urlencoding::encode(title));
        }
        href
    }
}

/// Home page section another page wants the visitor scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAnchor {
    Rooms,
    Services,
    Promotions,
    Contacts,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 4] = [
        SectionAnchor::Rooms,
        SectionAnchor::Services,
        SectionAnchor::Promotions,
        SectionAnchor::Contacts,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            SectionAnchor::Rooms => "rooms",
            SectionAnchor::Services => "services",
            SectionAnchor::Promotions => "promotions",
            SectionAnchor::Contacts => "contacts",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.element_id().eq_ignore_ascii_case(value))
    }

    pub fn href(self) -> String {
        format!("{}?section={}", SITE_ROOT, self.element_id())
    }
}

/// Scrolls the home page element for `anchor` into view. Client only.
pub fn scroll_to_section(anchor: SectionAnchor) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor.element_id()))
        {
            element.scroll_into_view();
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_room_is_not_a_selection() {
        assert_eq!(RoomSelection::from_query(None, Some("Suite".into())), None);
        assert_eq!(RoomSelection::from_query(Some("  ".into()), None), None);
    }

    #[test]
    fn selection_trims_values_and_drops_empty_title() {
        let selection = RoomSelection::from_query(Some(" 42 ".into()), Some(" ".into())).unwrap();
        assert_eq!(selection, RoomSelection::new("42", None));
    }

    #[test]
    fn booking_href_encodes_title() {
        let selection = RoomSelection::new("42", Some("Deluxe & Spa".to_string()));
        assert_eq!(
            selection.booking_href(),
            "/booking?room=42&title=Deluxe%20%26%20Spa"
        );
    }

    #[test]
    fn section_anchor_parses_case_insensitively() {
        assert_eq!(SectionAnchor::from_query("Contacts"), Some(SectionAnchor::Contacts));
        assert_eq!(SectionAnchor::from_query("spa"), None);
        assert_eq!(SectionAnchor::Services.href(), "/?section=services");
    }
}
