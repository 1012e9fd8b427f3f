use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::AdminNavbar;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let navigate = use_navigate();

    let card = move |href: &'static str, title: &'static str, text: &'static str| {
        let navigate = navigate.clone();
        view! {
            <div class="admin-card" on:click=move |_| navigate(href, Default::default())>
                <h2>{title}</h2>
                <p>{text}</p>
            </div>
        }
    };

    view! {
        <AdminNavbar/>
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1>"Admin Dashboard"</h1>
                <p>"Manage the content of the hotel website"</p>
            </div>

            <div class="admin-dashboard-grid">
                {card("/admin/homepage", "Homepage", "Hero, about section, highlights and contacts")}
                {card("/admin/services", "Services", "Add, edit and remove hotel services")}
                {card("/admin/promotions", "Promotions", "Special offers and their validity")}
            </div>
        </div>
    }
}
