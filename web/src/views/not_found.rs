use leptos::prelude::*;
use leptos_router::components::A;

use crate::navigation::SectionAnchor;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="page__title">"Page not found"</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <div class="not-found__actions">
                <A href="/" attr:class="btn-primary">"Home"</A>
                <A href="/rooms" attr:class="btn-outlined">"Rooms"</A>
                <a href=SectionAnchor::Contacts.href() class="btn-outlined">"Contact us"</a>
            </div>
        </div>
    }
}
