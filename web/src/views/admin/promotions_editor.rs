use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::Promotion;
use thaw::*;

use super::{report_failure, session_token};
use crate::components::{
    server_error_message, use_admin_token_context, AdminNavbar, ErrorView, LoadingView,
};
use crate::editors::promotions::{PromotionDraft, PromotionField};
use crate::editors::EditorList;
use crate::notifications::use_notifications;
use crate::server::{delete_promotion, list_promotions, save_promotion};

#[component]
pub fn PromotionsEditorPage() -> impl IntoView {
    let promotions = Resource::new(|| (), |_| list_promotions());

    view! {
        <AdminNavbar/>
        <div class="admin-page">
            <h1>"Promotions"</h1>
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || promotions.get().map(|result| match result {
                    Ok(list) => view! { <PromotionManager initial=list/> }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn PromotionManager(initial: Vec<Promotion>) -> impl IntoView {
    let notifications = use_notifications();
    let token = use_admin_token_context();
    let promotions = RwSignal::new(EditorList::new(initial));
    let editing = RwSignal::new(None::<PromotionDraft>);
    // Some(is_new) while the form is open. Inputs read the draft themselves.
    let open_form = Memo::new(move |_| editing.with(|d| d.as_ref().map(|d| d.id.is_none())));

    let persist = move |promotion: Promotion, reopen: Option<PromotionDraft>| {
        let Some(token) = session_token(token, notifications) else {
            return;
        };
        let Some(pending) = promotions.try_update(|list| list.stage(promotion.clone())) else {
            return;
        };

        spawn_local(async move {
            match save_promotion(token, promotion).await {
                Ok(saved) => {
                    promotions.update(|list| list.confirm(&pending, saved));
                    notifications.success("Promotion saved");
                }
                Err(e) => {
                    promotions.update(|list| list.revert(pending));
                    if reopen.is_some() {
                        editing.set(reopen);
                    }
                    report_failure(&e, notifications);
                }
            }
        });
    };

    let save = move |_: leptos::ev::MouseEvent| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        match current.to_promotion() {
            Ok(promotion) => {
                editing.set(None);
                persist(promotion, Some(current));
            }
            Err(e) => notifications.error(e.to_string()),
        }
    };

    let toggle = move |promotion: Promotion| {
        let active = !promotion.active;
        persist(Promotion { active, ..promotion }, None);
    };

    let delete = move |id: String| {
        let Some(token) = session_token(token, notifications) else {
            return;
        };
        let Some(removal) = promotions.try_update(|list| list.take(&id)).flatten() else {
            return;
        };

        spawn_local(async move {
            match delete_promotion(token, id).await {
                Ok(()) => notifications.success("Promotion deleted"),
                Err(e) => {
                    promotions.update(|list| list.restore(removal));
                    report_failure(&e, notifications);
                }
            }
        });
    };

    view! {
        <div class="admin-toolbar">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| editing.set(Some(PromotionDraft::new()))
            >
                "New promotion"
            </Button>
        </div>

        {move || open_form.get().map(|is_new| view! {
            <div class="admin-form">
                <h2>{if is_new { "New promotion" } else { "Edit promotion" }}</h2>
                <PromotionInput editing=editing field=PromotionField::Title label="Title *" input_type="text"/>
                <PromotionInput editing=editing field=PromotionField::Description label="Description" input_type="text"/>
                <PromotionInput editing=editing field=PromotionField::DiscountLabel label="Discount label" input_type="text"/>
                <PromotionInput editing=editing field=PromotionField::ValidUntil label="Valid until" input_type="date"/>
                <PromotionInput editing=editing field=PromotionField::ImageUrl label="Image URL" input_type="text"/>
                <label class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || editing.with(|d| d.as_ref().is_some_and(|d| d.active))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            editing.update(|d| {
                                if let Some(draft) = d.take() {
                                    *d = Some(draft.with_active(checked));
                                }
                            });
                        }
                    />
                    <span>"Active"</span>
                </label>
                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                    <Button on_click=move |_| editing.set(None)>"Cancel"</Button>
                </div>
            </div>
        })}

        <table class="admin-table">
            <thead>
                <tr><th>"Title"</th><th>"Valid until"</th><th>"Status"</th><th></th></tr>
            </thead>
            <tbody>
                {move || promotions.with(|list| list.rows().to_vec()).into_iter().map(|row| {
                    let promotion = row.record;
                    let draft = PromotionDraft::from(&promotion);
                    let id = promotion.id.clone();
                    let unsaved = id.is_none();
                    let status = if promotion.active { "Active" } else { "Hidden" };
                    let until = promotion
                        .valid_until
                        .map(|d| d.format("%d.%m.%Y").to_string())
                        .unwrap_or_else(|| "No end date".to_string());
                    let title = promotion.title.clone();
                    let toggled = promotion.clone();
                    view! {
                        <tr>
                            <td>{title}</td>
                            <td>{until}</td>
                            <td>
                                <Button
                                    size=ButtonSize::Small
                                    disabled=unsaved
                                    on_click=move |_| toggle(toggled.clone())
                                >
                                    {status}
                                </Button>
                            </td>
                            <td class="admin-table__actions">
                                // New rows have no id until the API answers.
                                {match id {
                                    Some(id) => view! {
                                        <Button
                                            size=ButtonSize::Small
                                            on_click=move |_| editing.set(Some(draft.clone()))
                                        >
                                            "Edit"
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            on_click=move |_| delete(id.clone())
                                        >
                                            "Delete"
                                        </Button>
                                    }.into_any(),
                                    None => view! { <span class="admin-table__saving">"Saving..."</span> }.into_any(),
                                }}
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn PromotionInput(
    editing: RwSignal<Option<PromotionDraft>>,
    field: PromotionField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-group">
            <span>{label}</span>
            <input
                type=input_type
                prop:value=move || {
                    editing.with(|d| d.as_ref().map(|d| d.value(field).to_string()).unwrap_or_default())
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editing.update(|d| {
                        if let Some(draft) = d.take() {
                            *d = Some(draft.apply(field, &value));
                        }
                    });
                }
            />
        </label>
    }
}
