use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{AdminGuard, Navbar, NotificationToasts};
use crate::notifications::provide_notifications;
use crate::views::admin::{
    AdminDashboard, HomepageEditorPage, PromotionsEditorPage, ServicesEditorPage,
};
use crate::views::blog::{BlogPage, BlogPostPage};
use crate::views::booking::BookingPage;
use crate::views::contacts::ContactsPage;
use crate::views::gallery::GalleryPage;
use crate::views::home::HomePage;
use crate::views::not_found::NotFoundPage;
use crate::views::promotions::PromotionsPage;
use crate::views::rooms::{RoomDetailPage, RoomsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_notifications();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/hotel_web.css"/>
        <Title text="Grand Hotel"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <NotificationToasts/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("rooms") view=RoomsPage/>
                        <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=RoomDetailPage/>
                        <Route path=StaticSegment("gallery") view=GalleryPage/>
                        <Route path=StaticSegment("booking") view=BookingPage/>
                        <Route path=StaticSegment("contacts") view=ContactsPage/>
                        <Route path=StaticSegment("promotions") view=PromotionsPage/>
                        <Route path=StaticSegment("blog") view=BlogPage/>
                        <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <AdminGuard><AdminDashboard/></AdminGuard> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("homepage"))
                            view=|| view! { <AdminGuard><HomepageEditorPage/></AdminGuard> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("services"))
                            view=|| view! { <AdminGuard><ServicesEditorPage/></AdminGuard> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("promotions"))
                            view=|| view! { <AdminGuard><PromotionsEditorPage/></AdminGuard> }
                        />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
