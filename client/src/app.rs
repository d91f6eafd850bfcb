//! Root application component: site header plus the routed page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::site_header::{SITE_TITLE, SiteHeader};
use crate::pages::{contact::ContactPage, home::HomePage};
use crate::routes::{Page, SITE_ROUTES};

/// Id of the entry-document element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE/>

        <Router>
            <SiteHeader/>
            <main>
                <RoutedPage/>
            </main>
        </Router>
    }
}

/// Renders the page the route table selects for the current location.
/// Unmatched paths render nothing.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| SITE_ROUTES.resolve(&location.pathname.get()).copied());

    move || match page.get() {
        Some(Page::Home) => view! { <HomePage/> }.into_any(),
        Some(Page::Contact) => view! { <ContactPage/> }.into_any(),
        None => ().into_any(),
    }
}
