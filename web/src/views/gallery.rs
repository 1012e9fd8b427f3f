use leptos::prelude::*;
use shared_types::GalleryImage;

use crate::components::{server_error_message, ErrorView, LoadingView};
use crate::server::list_gallery;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let images = Resource::new(|| (), |_| list_gallery());
    let selected = RwSignal::new(None::<GalleryImage>);

    view! {
        <div class="page gallery-page">
            <h1 class="page__title">"Gallery"</h1>
            <Suspense fallback=move || view! { <LoadingView message="Loading photos..."/> }>
                {move || images.get().map(|result| match result {
                    Ok(images) => view! {
                        <div class="gallery-grid">
                            {images
                                .into_iter()
                                .map(|image| {
                                    let preview = image.clone();
                                    view! {
                                        <button class="gallery-grid__item" on:click=move |_| selected.set(Some(preview.clone()))>
                                            <img src=image.url alt=image.caption.unwrap_or_default()/>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>

            {move || selected.get().map(|image| view! {
                <div class="lightbox" on:click=move |_| selected.set(None)>
                    <img class="lightbox__image" src=image.url alt=image.caption.clone().unwrap_or_default()/>
                    {image.caption.map(|caption| view! { <p class="lightbox__caption">{caption}</p> })}
                </div>
            })}
        </div>
    }
}
