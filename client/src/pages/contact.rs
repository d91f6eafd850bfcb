//! Contact page placeholder.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="content-container contact">
            <section class="hero">
                <div class="text-content">
                    <h1>"Contact"</h1>
                    <p>"Questions about a refund claim? We'll get back to you."</p>
                </div>
            </section>
        </div>
    }
}
