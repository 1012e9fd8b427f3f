use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::Room;

use crate::navigation::RoomSelection;

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} ₽", price)
    } else {
        format!("{:.2} ₽", price)
    }
}

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let detail_href = format!("/rooms/{}", urlencoding::encode(&room.id));
    let booking_href =
        RoomSelection::new(room.id.clone(), Some(room.title.clone())).booking_href();
    let cover = room.images.first().cloned();

    view! {
        <article class="room-card">
            {cover.map(|src| view! { <img class="room-card__image" src=src alt=room.title.clone()/> })}
            <div class="room-card__body">
                <h3 class="room-card__title">{room.title.clone()}</h3>
                <p class="room-card__description">{room.description.clone()}</p>
                <div class="room-card__meta">
                    {room.capacity.map(|c| view! { <span>{format!("Up to {} guests", c)}</span> })}
                    {room.price_per_night.map(|p| view! {
                        <span class="room-card__price">{format!("from {} / night", format_price(p))}</span>
                    })}
                </div>
                <div class="room-card__actions">
                    <A href=detail_href attr:class="btn-outlined">"Details"</A>
                    <a href=booking_href class="btn-primary">"Book"</a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn whole_prices_drop_decimals() {
        assert_eq!(format_price(4500.0), "4500 ₽");
        assert_eq!(format_price(99.5), "99.50 ₽");
    }
}
