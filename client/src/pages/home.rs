//! Landing page.
//!
//! Static content only. Call-to-action and quick links still point at empty
//! `href`s until their target pages exist.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

/// `href` used by links whose destination is not built yet.
pub const PLACEHOLDER_HREF: &str = "";

pub const HERO_HEADLINE: &str = "GO train late?";
pub const CALL_TO_ACTION: &str = "Get Started";
pub const HOW_IT_WORKS: &str = "How it works";

/// Icon + label shortcut shown under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 2] = [
    QuickLink { icon: "fas fa-train", label: "Check GO Trip Status", href: PLACEHOLDER_HREF },
    QuickLink { icon: "fas fa-hand-holding-usd", label: "View Eligible Refunds", href: PLACEHOLDER_HREF },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="content-container home">
            <section class="hero">
                <div class="text-content">
                    <h1>{HERO_HEADLINE}</h1>
                    <h1>"Collect your " <span>"refund."</span> <br/> "We'll notify you."</h1>
                </div>

                <div class="button-content">
                    <a href=PLACEHOLDER_HREF class="get-started">{CALL_TO_ACTION}</a>
                </div>

                <div class="link-content">
                    <a href=PLACEHOLDER_HREF>{HOW_IT_WORKS}</a>
                </div>
            </section>

            <section class="links row">
                {QUICK_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href>
                                <i class=link.icon></i>
                                <h4>{link.label}</h4>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
