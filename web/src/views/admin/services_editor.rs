use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::Service;
use thaw::*;

use super::{report_failure, session_token};
use crate::components::room_card::format_price;
use crate::components::{
    server_error_message, use_admin_token_context, AdminNavbar, ErrorView, LoadingView,
};
use crate::editors::services::{ServiceDraft, ServiceField};
use crate::editors::EditorList;
use crate::notifications::use_notifications;
use crate::server::{delete_service, list_services, save_service};

#[component]
pub fn ServicesEditorPage() -> impl IntoView {
    let services = Resource::new(|| (), |_| list_services());

    view! {
        <AdminNavbar/>
        <div class="admin-page">
            <h1>"Services"</h1>
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || services.get().map(|result| match result {
                    Ok(list) => view! { <ServiceManager initial=list/> }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ServiceManager(initial: Vec<Service>) -> impl IntoView {
    let notifications = use_notifications();
    let token = use_admin_token_context();
    let services = RwSignal::new(EditorList::new(initial));
    let editing = RwSignal::new(None::<ServiceDraft>);
    // Some(is_new) while the form is open. Inputs read the draft themselves.
    let open_form = Memo::new(move |_| editing.with(|d| d.as_ref().map(|d| d.is_new())));

    let save = move |_: leptos::ev::MouseEvent| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        let service = match current.to_service() {
            Ok(service) => service,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };
        let Some(token) = session_token(token, notifications) else {
            return;
        };

        let Some(pending) = services.try_update(|list| list.stage(service.clone())) else {
            return;
        };
        editing.set(None);

        spawn_local(async move {
            match save_service(token, service).await {
                Ok(saved) => {
                    services.update(|list| list.confirm(&pending, saved));
                    notifications.success("Service saved");
                }
                Err(e) => {
                    services.update(|list| list.revert(pending));
                    editing.set(Some(current));
                    report_failure(&e, notifications);
                }
            }
        });
    };

    let delete = move |id: String| {
        let Some(token) = session_token(token, notifications) else {
            return;
        };
        let Some(removal) = services.try_update(|list| list.take(&id)).flatten() else {
            return;
        };

        spawn_local(async move {
            match delete_service(token, id).await {
                Ok(()) => notifications.success("Service deleted"),
                Err(e) => {
                    services.update(|list| list.restore(removal));
                    report_failure(&e, notifications);
                }
            }
        });
    };

    view! {
        <div class="admin-toolbar">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| editing.set(Some(ServiceDraft::default()))
            >
                "New service"
            </Button>
        </div>

        {move || open_form.get().map(|is_new| view! {
            <div class="admin-form">
                <h2>{if is_new { "New service" } else { "Edit service" }}</h2>
                <ServiceInput editing=editing field=ServiceField::Title label="Title *"/>
                <ServiceInput editing=editing field=ServiceField::Description label="Description"/>
                <ServiceInput editing=editing field=ServiceField::Price label="Price"/>
                <ServiceInput editing=editing field=ServiceField::ImageUrl label="Image URL"/>
                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                    <Button on_click=move |_| editing.set(None)>"Cancel"</Button>
                </div>
            </div>
        })}

        <table class="admin-table">
            <thead>
                <tr><th>"Title"</th><th>"Price"</th><th></th></tr>
            </thead>
            <tbody>
                {move || services.with(|list| list.rows().to_vec()).into_iter().map(|row| {
                    let service = row.record;
                    let draft = ServiceDraft::from(&service);
                    view! {
                        <tr>
                            <td>{service.title}</td>
                            <td>{service.price.map(format_price).unwrap_or_default()}</td>
                            <td class="admin-table__actions">
                                // New rows have no id until the API answers.
                                {match service.id {
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
fn ServiceInput(
    editing: RwSignal<Option<ServiceDraft>>,
    field: ServiceField,
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-group">
            <span>{label}</span>
            <input
                type="text"
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
