use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shared_types::Room;

use crate::components::room_card::format_price;
use crate::components::{server_error_message, ErrorView, LoadingView, RoomCard};
use crate::navigation::RoomSelection;
use crate::server::{get_room, list_rooms};

#[component]
pub fn RoomsPage() -> impl IntoView {
    let rooms = Resource::new(|| (), |_| list_rooms());

    view! {
        <div class="page rooms-page">
            <h1 class="page__title">"Rooms & suites"</h1>
            <Suspense fallback=move || view! { <LoadingView message="Loading rooms..."/> }>
                {move || rooms.get().map(|result| match result {
                    Ok(rooms) if rooms.is_empty() => view! {
                        <p class="empty-state">"No rooms are available at the moment."</p>
                    }.into_any(),
                    Ok(rooms) => view! {
                        <div class="room-grid">
                            {rooms.into_iter().map(|room| view! { <RoomCard room=room/> }).collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
pub fn RoomDetailPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let room = Resource::new(move || room_id.get(), get_room);

    view! {
        <div class="page room-detail-page">
            <Suspense fallback=move || view! { <LoadingView message="Loading room..."/> }>
                {move || room.get().map(|result| match result {
                    Ok(room) => view! { <RoomDetail room=room/> }.into_any(),
                    Err(e) => view! {
                        <ErrorView message=server_error_message(&e)/>
                        <A href="/rooms">"Back to rooms"</A>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn RoomDetail(room: Room) -> impl IntoView {
    let booking_href =
        RoomSelection::new(room.id.clone(), Some(room.title.clone())).booking_href();

    view! {
        <article class="room-detail">
            <h1 class="page__title">{room.title.clone()}</h1>
            <div class="room-detail__gallery">
                {room
                    .images
                    .iter()
                    .map(|src| view! { <img src=src.clone() alt=room.title.clone()/> })
                    .collect_view()}
            </div>
            <p class="room-detail__description">{room.description.clone()}</p>
            <ul class="room-detail__facts">
                {room.capacity.map(|c| view! { <li>{format!("Sleeps up to {}", c)}</li> })}
                {room.price_per_night.map(|p| view! { <li>{format!("{} per night", format_price(p))}</li> })}
            </ul>
            <div class="room-detail__actions">
                <A href="/rooms" attr:class="btn-outlined">"All rooms"</A>
                <a href=booking_href class="btn-primary">"Book this room"</a>
            </div>
        </article>
    }
}
