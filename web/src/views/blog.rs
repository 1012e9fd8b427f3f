use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shared_types::BlogPost;

use crate::components::{server_error_message, ErrorView, LoadingView};
use crate::server::{get_post, list_posts};

fn published_label(post: &BlogPost) -> Option<String> {
    post.published_on.map(|d| d.format("%d.%m.%Y").to_string())
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| list_posts());

    view! {
        <div class="page blog-page">
            <h1 class="page__title">"Blog"</h1>
            <Suspense fallback=move || view! { <LoadingView message="Loading posts..."/> }>
                {move || posts.get().map(|result| match result {
                    Ok(posts) => view! {
                        <div class="post-list">
                            {posts.into_iter().map(|post| {
                                let href = format!("/blog/{}", urlencoding::encode(&post.slug));
                                let published = published_label(&post);
                                view! {
                                    <article class="post-card">
                                        {post.cover_url.map(|src| view! { <img class="post-card__cover" src=src alt=""/> })}
                                        <h2><A href=href.clone()>{post.title}</A></h2>
                                        {published.map(|d| view! { <time class="post-card__date">{d}</time> })}
                                        <p>{post.excerpt}</p>
                                        <A href=href attr:class="btn-outlined">"Read more"</A>
                                    </article>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let post = Resource::new(move || slug.get(), get_post);

    view! {
        <div class="page blog-post-page">
            <Suspense fallback=move || view! { <LoadingView/> }>
                {move || post.get().map(|result| match result {
                    Ok(post) => {
                        let published = published_label(&post);
                        view! {
                            <article class="post">
                                {post.cover_url.map(|src| view! { <img class="post__cover" src=src alt=""/> })}
                                <h1 class="page__title">{post.title}</h1>
                                {published.map(|d| view! { <time class="post__date">{d}</time> })}
                                // Paragraphs are separated by blank lines in the API's plain-text body.
                                {post
                                    .body
                                    .split("\n\n")
                                    .filter(|p| !p.trim().is_empty())
                                    .map(|p| view! { <p>{p.trim().to_string()}</p> })
                                    .collect_view()}
                            </article>
                        }.into_any()
                    }
                    Err(e) => view! { <ErrorView message=server_error_message(&e)/> }.into_any(),
                })}
            </Suspense>
            <A href="/blog">"All posts"</A>
        </div>
    }
}
