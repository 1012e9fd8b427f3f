use shared_types::Service;

use super::{optional_text, EditorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Title,
    Description,
    Price,
    ImageUrl,
}

/// Form state for creating or editing one hotel service. Numbers are kept as
/// typed so a half-entered price is not lost between keystrokes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Service> for ServiceDraft {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price.map(|p| p.to_string()).unwrap_or_default(),
            image_url: service.image_url.clone().unwrap_or_default(),
        }
    }
}

impl ServiceDraft {
    pub fn apply(mut self, field: ServiceField, value: &str) -> Self {
        let value = value.to_string();
        match field {
            ServiceField::Title => self.title = value,
            ServiceField::Description => self.description = value,
            ServiceField::Price => self.price = value,
            ServiceField::ImageUrl => self.image_url = value,
        }
        self
    }

    pub fn value(&self, field: ServiceField) -> &str {
        match field {
            ServiceField::Title => &self.title,
            ServiceField::Description => &self.description,
            ServiceField::Price => &self.price,
            ServiceField::ImageUrl => &self.image_url,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn to_service(&self) -> Result<Service, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::Required("Title"));
        }

        Ok(Service {
            id: self.id.clone(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price)?,
            image_url: optional_text(&self.image_url),
        })
    }
}

pub(crate) fn parse_price(raw: &str) -> Result<Option<f64>, EditorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(EditorError::InvalidPrice(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn draft_round_trips_existing_service() {
        let service = Service {
            id: Some("s1".into()),
            title: "Airport transfer".into(),
            description: "Door to door".into(),
            price: Some(45.5),
            image_url: None,
        };

        let draft = ServiceDraft::from(&service);
        assert_eq!(draft.price, "45.5");
        assert!(!draft.is_new());
        assert_eq!(draft.to_service(), Ok(service));
    }

    #[test]
    fn title_is_required() {
        let draft = ServiceDraft::default().apply(ServiceField::Price, "10");
        assert_matches!(draft.to_service(), Err(EditorError::Required("Title")));
    }

    #[test]
    fn price_accepts_comma_and_rejects_negative() {
        assert_eq!(parse_price("12,50"), Ok(Some(12.5)));
        assert_eq!(parse_price(""), Ok(None));
        assert_matches!(parse_price("-3"), Err(EditorError::InvalidPrice(_)));
        assert_matches!(parse_price("free"), Err(EditorError::InvalidPrice(_)));
    }

    #[test]
    fn blank_image_url_is_omitted() {
        let service = ServiceDraft::default()
            .apply(ServiceField::Title, " Spa ")
            .apply(ServiceField::ImageUrl, "  ")
            .to_service()
            .unwrap();
        assert_eq!(service.title, "Spa");
        assert_eq!(service.image_url, None);
    }
}
