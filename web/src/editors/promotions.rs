use chrono::NaiveDate;
use shared_types::Promotion;

use super::{optional_text, EditorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionField {
    Title,
    Description,
    DiscountLabel,
    ValidUntil,
    ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromotionDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub discount_label: String,
    pub valid_until: String,
    pub image_url: String,
    pub active: bool,
}

impl From<&Promotion> for PromotionDraft {
    fn from(promotion: &Promotion) -> Self {
        Self {
            id: promotion.id.clone(),
            title: promotion.title.clone(),
            description: promotion.description.clone(),
            discount_label: promotion.discount_label.clone().unwrap_or_default(),
            valid_until: promotion
                .valid_until
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            image_url: promotion.image_url.clone().unwrap_or_default(),
            active: promotion.active,
        }
    }
}

impl PromotionDraft {
    /// New promotions start switched on.
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub fn apply(mut self, field: PromotionField, value: &str) -> Self {
        let value = value.to_string();
        match field {
            PromotionField::Title => self.title = value,
            PromotionField::Description => self.description = value,
            PromotionField::DiscountLabel => self.discount_label = value,
            PromotionField::ValidUntil => self.valid_until = value,
            PromotionField::ImageUrl => self.image_url = value,
        }
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn value(&self, field: PromotionField) -> &str {
        match field {
            PromotionField::Title => &self.title,
            PromotionField::Description => &self.description,
            PromotionField::DiscountLabel => &self.discount_label,
            PromotionField::ValidUntil => &self.valid_until,
            PromotionField::ImageUrl => &self.image_url,
        }
    }

    pub fn to_promotion(&self) -> Result<Promotion, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::Required("Title"));
        }

        let valid_until = match self.valid_until.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| EditorError::InvalidDate(raw.to_string()))?,
            ),
        };

        Ok(Promotion {
            id: self.id.clone(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            discount_label: optional_text(&self.discount_label),
            valid_until,
            image_url: optional_text(&self.image_url),
            active: self.active,
        })
    }
}

/// Promotions the public site should show on `today`.
pub fn visible_on(promotions: &[Promotion], today: NaiveDate) -> Vec<Promotion> {
    promotions
        .iter()
        .filter(|p| p.active && p.valid_until.map_or(true, |until| until >= today))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_draft_is_active() {
        assert!(PromotionDraft::new().active);
        assert!(!PromotionDraft::new().with_active(false).active);
    }

    #[test]
    fn valid_until_must_be_iso_date() {
        let draft = PromotionDraft::new()
            .apply(PromotionField::Title, "Summer")
            .apply(PromotionField::ValidUntil, "31.08.2024");
        assert_matches!(draft.to_promotion(), Err(EditorError::InvalidDate(_)));

        let promotion = draft
            .apply(PromotionField::ValidUntil, "2024-08-31")
            .to_promotion()
            .unwrap();
        assert_eq!(promotion.valid_until, Some(date(2024, 8, 31)));
    }

    #[test]
    fn draft_round_trips_existing_promotion() {
        let promotion = Promotion {
            id: Some("p1".into()),
            title: "Early bird".into(),
            description: "Book 30 days ahead".into(),
            discount_label: Some("-15%".into()),
            valid_until: Some(date(2024, 12, 31)),
            image_url: None,
            active: false,
        };
        assert_eq!(PromotionDraft::from(&promotion).to_promotion(), Ok(promotion));
    }

    #[test]
    fn only_active_unexpired_promotions_are_visible() {
        let make = |title: &str, active: bool, until: Option<NaiveDate>| Promotion {
            title: title.to_string(),
            active,
            valid_until: until,
            ..Promotion::default()
        };
        let promotions = vec![
            make("open-ended", true, None),
            make("expired", true, Some(date(2024, 6, 30))),
            make("last-day", true, Some(date(2024, 7, 1))),
            make("disabled", false, None),
        ];

        let titles: Vec<_> = visible_on(&promotions, date(2024, 7, 1))
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["open-ended", "last-day"]);
    }
}
