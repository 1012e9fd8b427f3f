use leptos::prelude::*;
use shared_types::Promotion;

use crate::components::{server_error_message, ErrorView, LoadingView};
use crate::editors::promotions::visible_on;
use crate::server::list_promotions;

#[component]
pub fn PromotionsPage() -> impl IntoView {
    let promotions = Resource::new(|| (), |_| list_promotions());

    view! {
        <div class="page promotions-page">
            <h1 class="page__title">"Special offers"</h1>
            <Suspense fallback=move || view! { <LoadingView message="Loading offers..."/> }>
                {move || promotions.get().map(|result| match result {
                    Ok(promotions) => {
                        let visible = visible_on(&promotions, chrono::Local::now().date_naive());
                        if visible.is_empty() {
                            view! { <p class="empty-state">"There are no running offers right now."</p> }.into_any()
                        } else {
                            view! {
                                <div class="promotion-grid">
                                    {visible
                                        .into_iter()
                                        .map(|promotion| view! { <PromotionCard promotion=promotion/> })
                                        .collect_view()}
                                </div>
                            }.into_any()
                        }
                    }
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
pub fn PromotionCard(promotion: Promotion) -> impl IntoView {
    view! {
        <article class="promotion-card">
            {promotion.image_url.map(|src| view! { <img class="promotion-card__image" src=src alt=""/> })}
            {promotion.discount_label.map(|label| view! { <span class="promotion-card__badge">{label}</span> })}
            <h3>{promotion.title}</h3>
            <p>{promotion.description}</p>
            {promotion.valid_until.map(|until| view! {
                <p class="promotion-card__until">{format!("Valid until {}", until.format("%d.%m.%Y"))}</p>
            })}
        </article>
    }
}
