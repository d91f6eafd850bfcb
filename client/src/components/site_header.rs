//! Site header shown above every route.

use leptos::prelude::*;

use crate::components::sign_in_widget::SignInWidget;
use crate::util::auth::log_sign_in;

pub const SITE_TITLE: &str = "GO Refund";

/// Brand link, navigation, and the sign-in affordance.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let on_sign_in = Callback::new(log_sign_in);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">{SITE_TITLE}</a>
            <nav class="site-header__nav">
                <a href="/contact/">"Contact"</a>
            </nav>
            <SignInWidget on_sign_in/>
        </header>
    }
}
