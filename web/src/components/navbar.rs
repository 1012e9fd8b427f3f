use leptos::prelude::*;
use leptos_router::components::A;

use crate::navigation::SectionAnchor;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Grand Hotel"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/rooms" attr:class="navbar__link">"Rooms"</A>
                    <A href="/gallery" attr:class="navbar__link">"Gallery"</A>
                    <A href="/promotions" attr:class="navbar__link">"Offers"</A>
                    <A href="/blog" attr:class="navbar__link">"Blog"</A>
                    <a href=SectionAnchor::Services.href() class="navbar__link">"Services"</a>
                    <A href="/contacts" attr:class="navbar__link">"Contacts"</A>
                    <A href="/rooms" attr:class="navbar__link navbar__link--cta">
                        "Book now"
                    </A>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn AdminNavbar() -> impl IntoView {
    view! {
        <nav class="navbar navbar--admin">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/admin" attr:class="navbar__logo">"Admin"</A>
                </div>
                <div class="navbar__links">
                    <A href="/admin/homepage" attr:class="navbar__link">"Homepage"</A>
                    <A href="/admin/services" attr:class="navbar__link">"Services"</A>
                    <A href="/admin/promotions" attr:class="navbar__link">"Promotions"</A>
                    <A href="/" attr:class="navbar__link">"View site"</A>
                </div>
            </div>
        </nav>
    }
}
