use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline error panel for a section whose data could not be loaded.
#[component]
pub fn ErrorView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "Something went wrong. Please try again later.".to_string())}
        </MessageBar>
    }
}

/// Human-readable text of a server function error, without the transport
/// prefix Leptos adds to its display form.
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
