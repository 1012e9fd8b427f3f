use leptos::prelude::*;

/// Browser storage key holding the admin bearer token. The token is issued
/// by the hotel API's own login flow; this site only reads it.
pub const ADMIN_TOKEN_KEY: &str = "hotel_admin_token";

/// Reads the admin token from localStorage.
/// Returns None on the server, or when no token has been stored.
pub fn get_admin_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        getItem(ADMIN_TOKEN_KEY)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Forgets the stored admin token, e.g. after the API rejected it.
pub fn clear_admin_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(ADMIN_TOKEN_KEY);
        }
    }
}

/// Hook exposing the admin token once the page has hydrated.
pub fn use_admin_token() -> (Signal<Option<String>>, Signal<bool>) {
    let token = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(true);

    Effect::new(move |_| {
        token.set(get_admin_token());
        is_loading.set(false);
    });

    (token.into(), is_loading.into())
}
