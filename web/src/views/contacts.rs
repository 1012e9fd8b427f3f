use leptos::prelude::*;
use shared_types::ContactInfo;

use crate::components::{server_error_message, ErrorView, LoadingView};
use crate::server::get_homepage;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let homepage = Resource::new(|| (), |_| get_homepage());

    view! {
        <div class="page contacts-page">
            <h1 class="page__title">"Contacts"</h1>
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || homepage.get().map(|result| match result {
                    Ok(content) => view! { <ContactDetails contacts=content.contacts/> }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
pub fn ContactDetails(contacts: ContactInfo) -> impl IntoView {
    let phone_href = format!(
        "tel:{}",
        contacts
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>()
    );
    let email_href = format!("mailto:{}", contacts.email);

    view! {
        <address class="contact-details">
            <p class="contact-details__address">{contacts.address}</p>
            <p><a href=phone_href>{contacts.phone}</a></p>
            <p><a href=email_href>{contacts.email}</a></p>
        </address>
    }
}
