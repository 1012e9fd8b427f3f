use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::HomepageContent;
use thaw::*;

use super::{report_failure, session_token};
use crate::components::{
    server_error_message, use_admin_token_context, AdminNavbar, ErrorView, LoadingView,
};
use crate::editors::homepage::{self, HighlightField, HomepageEdit, HomepageField};
use crate::notifications::use_notifications;
use crate::server::{get_homepage, save_homepage};

#[component]
pub fn HomepageEditorPage() -> impl IntoView {
    let homepage = Resource::new(|| (), |_| get_homepage());

    view! {
        <AdminNavbar/>
        <div class="admin-page">
            <h1>"Homepage"</h1>
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || homepage.get().map(|result| match result {
                    Ok(content) => view! { <HomepageForm initial=content/> }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn HomepageForm(initial: HomepageContent) -> impl IntoView {
    let notifications = use_notifications();
    let token = use_admin_token_context();
    let content = RwSignal::new(initial);
    let saving = RwSignal::new(false);
    let highlight_count = Memo::new(move |_| content.with(|c| c.highlights.len()));

    let dispatch = move |edit: HomepageEdit| {
        content.update(|c| *c = homepage::apply(std::mem::take(c), edit));
    };

    let save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let current = content.get_untracked();
        if let Err(e) = homepage::validate(&current) {
            notifications.error(e.to_string());
            return;
        }
        let Some(token) = session_token(token, notifications) else {
            return;
        };

        saving.set(true);
        spawn_local(async move {
            match save_homepage(token, current.clone()).await {
                Ok(saved) => {
                    content.update(|c| *c = homepage::settle_save(std::mem::take(c), &current, saved));
                    notifications.success("Homepage saved");
                }
                Err(e) => report_failure(&e, notifications),
            }
            saving.set(false);
        });
    };

    let text_field = move |field: HomepageField, label: &'static str| {
        view! {
            <label class="form-group">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || content.with(|c| homepage::value(c, field))
                    on:input=move |ev| dispatch(HomepageEdit::Set(field, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="admin-form">
            <fieldset class="form-section" prop:disabled=move || saving.get()>
                <h2>"Hero"</h2>
                {text_field(HomepageField::HeroTitle, "Title *")}
                {text_field(HomepageField::HeroSubtitle, "Subtitle")}
                {text_field(HomepageField::HeroImageUrl, "Background image URL")}
                {text_field(HomepageField::HeroCtaLabel, "Button label")}

                <h2>"About"</h2>
                {text_field(HomepageField::AboutTitle, "Title")}
                <label class="form-group">
                    <span>"Text"</span>
                    <textarea
                        rows="6"
                        prop:value=move || content.with(|c| homepage::value(c, HomepageField::AboutBody))
                        on:input=move |ev| {
                            dispatch(HomepageEdit::Set(HomepageField::AboutBody, event_target_value(&ev)))
                        }
                    ></textarea>
                </label>

                <h2>"Highlights"</h2>
                {move || {
                    (0..highlight_count.get())
                        .map(|index| view! { <HighlightRow content=content index=index dispatch=dispatch/> })
                        .collect_view()
                }}
                <Button on_click=move |_| dispatch(HomepageEdit::AddHighlight)>"Add highlight"</Button>

                <h2>"Contacts"</h2>
                {text_field(HomepageField::ContactAddress, "Address")}
                {text_field(HomepageField::ContactPhone, "Phone")}
                {text_field(HomepageField::ContactEmail, "Email")}
            </fieldset>

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::from(saving)
                    loading=saving
                    on_click=save
                >
                    "Save homepage"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn HighlightRow<F>(content: RwSignal<HomepageContent>, index: usize, dispatch: F) -> impl IntoView
where
    F: Fn(HomepageEdit) + Copy + Send + Sync + 'static,
{
    let read = move |field: HighlightField| {
        content.with(|c| {
            c.highlights
                .get(index)
                .map(|h| match field {
                    HighlightField::Title => h.title.clone(),
                    HighlightField::Text => h.text.clone(),
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="highlight-row">
            <input
                type="text"
                placeholder="Title"
                prop:value=move || read(HighlightField::Title)
                on:input=move |ev| {
                    dispatch(HomepageEdit::SetHighlight(index, HighlightField::Title, event_target_value(&ev)))
                }
            />
            <input
                type="text"
                placeholder="Text"
                prop:value=move || read(HighlightField::Text)
                on:input=move |ev| {
                    dispatch(HomepageEdit::SetHighlight(index, HighlightField::Text, event_target_value(&ev)))
                }
            />
            <Button
                size=ButtonSize::Small
                disabled=index == 0
                on_click=move |_| dispatch(HomepageEdit::MoveHighlightUp(index))
            >
                "Up"
            </Button>
            <Button
                size=ButtonSize::Small
                on_click=move |_| dispatch(HomepageEdit::RemoveHighlight(index))
            >
                "Remove"
            </Button>
        </div>
    }
}
