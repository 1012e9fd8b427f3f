use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use shared_types::{HomepageContent, Promotion, Room, Service};

use crate::components::{server_error_message, ErrorView, LoadingView, RoomCard};
use crate::navigation::{scroll_to_section, SectionAnchor};
use crate::server::{get_homepage, list_promotions, list_rooms, list_services};
use crate::views::contacts::ContactDetails;
use crate::views::promotions::PromotionCard;

const FEATURED_ROOMS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let homepage = Resource::new(|| (), |_| get_homepage());
    let rooms = Resource::new(|| (), |_| list_rooms());
    let services = Resource::new(|| (), |_| list_services());
    let promotions = Resource::new(|| (), |_| list_promotions());

    // Another page asked for a specific section, e.g. "/?section=contacts".
    Effect::new(move |_| {
        let anchor = query.with(|q| q.get("section").and_then(|s| SectionAnchor::from_query(&s)));
        if let Some(anchor) = anchor {
            scroll_to_section(anchor);
        }
    });

    view! {
        <div class="homepage">
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || homepage.get().map(|result| match result {
                    Ok(content) => view! { <Hero content=content.clone()/> <About content=content/> }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>

            <section id=SectionAnchor::Rooms.element_id() class="homepage-section">
                <h2>"Our rooms"</h2>
                <Suspense fallback=move || view! { <LoadingView message="Loading rooms..."/> }>
                    {move || rooms.get().map(|result| match result {
                        Ok(rooms) => view! { <FeaturedRooms rooms=rooms/> }.into_any(),
                        Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section id=SectionAnchor::Services.element_id() class="homepage-section">
                <h2>"Services"</h2>
                <Suspense fallback=move || view! { <LoadingView/> }>
                    {move || services.get().map(|result| match result {
                        Ok(services) => view! { <ServiceList services=services/> }.into_any(),
                        Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section id=SectionAnchor::Promotions.element_id() class="homepage-section">
                <h2>"Special offers"</h2>
                <Suspense fallback=move || view! { <LoadingView/> }>
                    {move || promotions.get().map(|result| match result {
                        Ok(promotions) => view! { <PromotionTeaser promotions=promotions/> }.into_any(),
                        Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section id=SectionAnchor::Contacts.element_id() class="homepage-section">
                <h2>"How to find us"</h2>
                <Suspense fallback=move || view! { <LoadingView/> }>
                    {move || homepage.get().map(|result| match result {
                        Ok(content) => view! { <ContactDetails contacts=content.contacts/> }.into_any(),
                        Err(_) => ().into_any(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn Hero(content: HomepageContent) -> impl IntoView {
    let hero = content.hero;
    let style = hero
        .image_url
        .map(|url| format!("background-image: url('{}')", url));
    let cta = if hero.cta_label.trim().is_empty() {
        "Choose a room".to_string()
    } else {
        hero.cta_label
    };

    view! {
        <header class="hero" style=style>
            <h1 class="hero__title">{hero.title}</h1>
            <p class="hero__subtitle">{hero.subtitle}</p>
            <A href="/rooms" attr:class="btn-primary">{cta}</A>
        </header>
    }
}

#[component]
fn About(content: HomepageContent) -> impl IntoView {
    view! {
        <section class="homepage-section about">
            <h2>{content.about.title}</h2>
            <p>{content.about.body}</p>
            <ul class="highlights">
                {content
                    .highlights
                    .into_iter()
                    .map(|h| view! {
                        <li class="highlights__item">
                            <strong>{h.title}</strong>
                            <span>{h.text}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn FeaturedRooms(rooms: Vec<Room>) -> impl IntoView {
    view! {
        <div class="room-grid">
            {rooms
                .into_iter()
                .take(FEATURED_ROOMS)
                .map(|room| view! { <RoomCard room=room/> })
                .collect_view()}
        </div>
        <A href="/rooms" attr:class="btn-outlined">"All rooms"</A>
    }
}

#[component]
fn ServiceList(services: Vec<Service>) -> impl IntoView {
    if services.is_empty() {
        return view! { <p class="empty-state">"Service list is being updated."</p> }.into_any();
    }

    view! {
        <div class="service-grid">
            {services
                .into_iter()
                .map(|service| view! {
                    <article class="service-card">
                        {service.image_url.map(|src| view! { <img src=src alt=""/> })}
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        {service.price.map(|p| view! {
                            <span class="service-card__price">{crate::components::room_card::format_price(p)}</span>
                        })}
                    </article>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn PromotionTeaser(promotions: Vec<Promotion>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let visible = crate::editors::promotions::visible_on(&promotions, today);

    view! {
        <div class="promotion-grid">
            {visible
                .into_iter()
                .take(2)
                .map(|promotion| view! { <PromotionCard promotion=promotion/> })
                .collect_view()}
        </div>
        <A href="/promotions" attr:class="btn-outlined">"All offers"</A>
    }
}
