use shared_types::{HomepageContent, Highlight};

use super::{optional_text, EditorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomepageField {
    HeroTitle,
    HeroSubtitle,
    HeroImageUrl,
    HeroCtaLabel,
    AboutTitle,
    AboutBody,
    ContactAddress,
    ContactPhone,
    ContactEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightField {
    Title,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomepageEdit {
    Set(HomepageField, String),
    AddHighlight,
    RemoveHighlight(usize),
    SetHighlight(usize, HighlightField, String),
    MoveHighlightUp(usize),
}

/// Applies one edit. Out-of-range highlight indexes leave the content as is.
pub fn apply(mut content: HomepageContent, edit: HomepageEdit) -> HomepageContent {
    match edit {
        HomepageEdit::Set(field, value) => set_field(&mut content, field, value),
        HomepageEdit::AddHighlight => content.highlights.push(Highlight::default()),
        HomepageEdit::RemoveHighlight(index) => {
            if index < content.highlights.len() {
                content.highlights.remove(index);
            }
        }
        HomepageEdit::SetHighlight(index, field, value) => {
            if let Some(highlight) = content.highlights.get_mut(index) {
                match field {
                    HighlightField::Title => highlight.title = value,
                    HighlightField::Text => highlight.text = value,
                }
            }
        }
        HomepageEdit::MoveHighlightUp(index) => {
            if index > 0 && index < content.highlights.len() {
                content.highlights.swap(index - 1, index);
            }
        }
    }
    content
}

fn set_field(content: &mut HomepageContent, field: HomepageField, value: String) {
    match field {
        HomepageField::HeroTitle => content.hero.title = value,
        HomepageField::HeroSubtitle => content.hero.subtitle = value,
        HomepageField::HeroImageUrl => content.hero.image_url = optional_text(&value),
        HomepageField::HeroCtaLabel => content.hero.cta_label = value,
        HomepageField::AboutTitle => content.about.title = value,
        HomepageField::AboutBody => content.about.body = value,
        HomepageField::ContactAddress => content.contacts.address = value,
        HomepageField::ContactPhone => content.contacts.phone = value,
        HomepageField::ContactEmail => content.contacts.email = value,
    }
}

pub fn value(content: &HomepageContent, field: HomepageField) -> String {
    match field {
        HomepageField::HeroTitle => content.hero.title.clone(),
        HomepageField::HeroSubtitle => content.hero.subtitle.clone(),
        HomepageField::HeroImageUrl => content.hero.image_url.clone().unwrap_or_default(),
        HomepageField::HeroCtaLabel => content.hero.cta_label.clone(),
        HomepageField::AboutTitle => content.about.title.clone(),
        HomepageField::AboutBody => content.about.body.clone(),
        HomepageField::ContactAddress => content.contacts.address.clone(),
        HomepageField::ContactPhone => content.contacts.phone.clone(),
        HomepageField::ContactEmail => content.contacts.email.clone(),
    }
}

pub fn validate(content: &HomepageContent) -> Result<(), EditorError> {
    if content.hero.title.trim().is_empty() {
        return Err(EditorError::Required("Hero title"));
    }
    if content.highlights.iter().any(|h| h.title.trim().is_empty()) {
        return Err(EditorError::Required("Highlight title"));
    }
    Ok(())
}

/// Content to show once a save has been accepted. Edits made while the
/// request was in flight are kept instead of the API's copy.
pub fn settle_save(
    current: HomepageContent,
    sent: &HomepageContent,
    saved: HomepageContent,
) -> HomepageContent {
    if current == *sent {
        saved
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_highlights(titles: &[&str]) -> HomepageContent {
        let mut content = HomepageContent::default();
        content.hero.title = "Grand Hotel".to_string();
        content.highlights = titles
            .iter()
            .map(|t| Highlight {
                title: t.to_string(),
                text: String::new(),
            })
            .collect();
        content
    }

    #[test]
    fn set_updates_named_field() {
        let content = apply(
            HomepageContent::default(),
            HomepageEdit::Set(HomepageField::ContactPhone, "+7 999".into()),
        );
        assert_eq!(content.contacts.phone, "+7 999");
        assert_eq!(value(&content, HomepageField::ContactPhone), "+7 999");
    }

    #[test]
    fn blank_image_url_clears_it() {
        let content = apply(
            HomepageContent::default(),
            HomepageEdit::Set(HomepageField::HeroImageUrl, "https://img.example/a.jpg".into()),
        );
        assert!(content.hero.image_url.is_some());

        let content = apply(content, HomepageEdit::Set(HomepageField::HeroImageUrl, " ".into()));
        assert_eq!(content.hero.image_url, None);
    }

    #[test]
    fn highlights_can_be_added_edited_and_reordered() {
        let content = apply(with_highlights(&["Pool"]), HomepageEdit::AddHighlight);
        let content = apply(
            content,
            HomepageEdit::SetHighlight(1, HighlightField::Title, "Breakfast".into()),
        );
        let content = apply(content, HomepageEdit::MoveHighlightUp(1));

        let titles: Vec<_> = content.highlights.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Breakfast", "Pool"]);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let before = with_highlights(&["Pool"]);
        let after = apply(before.clone(), HomepageEdit::RemoveHighlight(3));
        let after = apply(after, HomepageEdit::MoveHighlightUp(0));
        let after = apply(after, HomepageEdit::SetHighlight(9, HighlightField::Text, "x".into()));
        assert_eq!(after, before);
    }

    #[test]
    fn validation_requires_titles() {
        assert_eq!(
            validate(&HomepageContent::default()),
            Err(EditorError::Required("Hero title"))
        );
        assert_eq!(
            validate(&with_highlights(&["Pool", " "])),
            Err(EditorError::Required("Highlight title"))
        );
        assert_eq!(validate(&with_highlights(&["Pool"])), Ok(()));
    }

    #[test]
    fn accepted_save_takes_the_api_copy_when_nothing_changed() {
        let sent = apply(
            HomepageContent::default(),
            HomepageEdit::Set(HomepageField::HeroTitle, "Welcome".into()),
        );
        let mut saved = sent.clone();
        saved.hero.subtitle = "Normalised by the API".into();

        assert_eq!(settle_save(sent.clone(), &sent, saved.clone()), saved);
    }

    #[test]
    fn accepted_save_keeps_edits_typed_while_in_flight() {
        let sent = apply(
            HomepageContent::default(),
            HomepageEdit::Set(HomepageField::HeroTitle, "Welcome".into()),
        );
        let current = apply(
            sent.clone(),
            HomepageEdit::Set(HomepageField::ContactPhone, "+7 900 000".into()),
        );

        assert_eq!(settle_save(current.clone(), &sent, sent.clone()), current);
    }
}
