use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::booking::{
    leave_without_room, BookingDraft, BookingField, BookingWorkflow, BrowserNavigator,
    PageBookingWorkflow, ServerBookingApi,
};
use crate::components::LoadingView;
use crate::navigation::RoomSelection;
use crate::notifications::use_notifications;

#[component]
pub fn BookingPage() -> impl IntoView {
    let query = use_query_map();
    let selection =
        query.with_untracked(|q| RoomSelection::from_query(q.get("room"), q.get("title")));

    match selection {
        Some(selection) => view! { <BookingForm selection=selection/> }.into_any(),
        None => view! { <MissingRoom/> }.into_any(),
    }
}

/// Shown for a split second while the visitor is sent back home.
#[component]
fn MissingRoom() -> impl IntoView {
    let notifications = use_notifications();

    Effect::new(move |_| {
        leave_without_room(&BrowserNavigator, &notifications);
    });

    view! { <LoadingView message="Redirecting..."/> }
}

#[component]
fn BookingForm(selection: RoomSelection) -> impl IntoView {
    let notifications = use_notifications();
    let submitting = RwSignal::new(false);

    let workflow: Arc<PageBookingWorkflow> = Arc::new(
        BookingWorkflow::new(
            selection.clone(),
            ServerBookingApi,
            BrowserNavigator,
            notifications,
        )
        .with_phase_observer(move |phase| submitting.set(phase.is_busy())),
    );
    let draft = RwSignal::new(workflow.new_draft());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let workflow = workflow.clone();
        let current = draft.get_untracked();
        spawn_local(async move {
            workflow.submit(&current).await;
        });
    };

    let nights = Memo::new(move |_| draft.with(|d| d.nights()));
    let room_title = selection
        .room_title
        .clone()
        .unwrap_or_else(|| format!("Room {}", selection.room_id));

    view! {
        <div class="booking-container">
            <div class="booking-card">
                <h1 class="booking-title">"Book your stay"</h1>
                <p class="booking-subtitle">{room_title}</p>

                <form class="booking-form" on:submit=on_submit>
                    <fieldset class="form-section" prop:disabled=move || submitting.get()>
                        <h4>"Your stay"</h4>
                        <div class="form-row">
                            <DraftInput draft=draft label="Check-in *" field=BookingField::CheckIn input_type="date"/>
                            <DraftInput draft=draft label="Check-out *" field=BookingField::CheckOut input_type="date"/>
                        </div>
                        <div class="form-row">
                            <DraftInput draft=draft label="Adults *" field=BookingField::Adults input_type="number" min="1"/>
                            <DraftInput draft=draft label="Children" field=BookingField::Children input_type="number" min="0"/>
                        </div>
                        {move || nights.get().map(|n| view! {
                            <p class="booking-nights">{format!("{} night(s)", n)}</p>
                        })}
                    </fieldset>

                    <fieldset class="form-section" prop:disabled=move || submitting.get()>
                        <h4>"Contact information"</h4>
                        <DraftInput draft=draft label="Full name *" field=BookingField::GuestName input_type="text"/>
                        <div class="form-row">
                            <DraftInput draft=draft label="Email *" field=BookingField::GuestEmail input_type="email"/>
                            <DraftInput draft=draft label="Phone *" field=BookingField::GuestPhone input_type="tel"/>
                        </div>
                        <div class="form-group">
                            <label for="booking-notes">"Notes"</label>
                            <textarea
                                id="booking-notes"
                                placeholder="Arrival time, special requests..."
                                prop:value=move || draft.with(|d| d.value(BookingField::Notes))
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| *d = std::mem::take(d).apply(BookingField::Notes, &value));
                                }
                            ></textarea>
                        </div>
                    </fieldset>

                    <div class="form-actions">
                        <A href="/rooms" attr:class="btn-outlined">"Back to rooms"</A>
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::from(submitting)
                            loading=submitting
                        >
                            {move || if submitting.get() { "Processing..." } else { "Continue to payment" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// One booking form input bound to a draft field through the reducer.
#[component]
fn DraftInput(
    draft: RwSignal<BookingDraft>,
    field: BookingField,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    let id = format!("booking-{:?}", field).to_lowercase();
    let required = !matches!(field, BookingField::Children | BookingField::Notes);

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                min=min
                required=required
                prop:value=move || draft.with(|d| d.value(field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *d = std::mem::take(d).apply(field, &value));
                }
            />
        </div>
    }
}
