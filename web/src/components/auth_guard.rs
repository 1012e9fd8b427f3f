use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::auth::use_admin_token;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-loading-title">"Verifying access..."</div>
            </div>
        </div>
    }
}

#[component]
pub fn AccessDeniedState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">"Admin access required"</div>
                <div class="auth-guard-denied-subtitle">
                    "Sign in through the hotel management system, then reload this page."
                </div>
                <A href="/">"Back to the site"</A>
            </div>
        </div>
    }
}

/// Renders admin pages only when an admin token is present. The token is
/// handed to children through context as `AdminToken`.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let (token, is_loading) = use_admin_token();

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=move || view! { <LoadingState/> }
        >
            <Show
                when=move || token.get().is_some()
                fallback=move || view! { <AccessDeniedState/> }
                clone:children
            >
                {
                    provide_context(AdminToken(token));
                    children()
                }
            </Show>
        </Show>
    }
}

/// Admin token as seen by the editors.
#[derive(Clone, Copy)]
pub struct AdminToken(pub Signal<Option<String>>);

impl AdminToken {
    pub fn get(&self) -> Option<String> {
        self.0.get_untracked()
    }
}

pub fn use_admin_token_context() -> Option<AdminToken> {
    use_context::<AdminToken>()
}
