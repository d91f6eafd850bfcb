//! Wrapper around the external "Sign in with Google" widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity platform script (`platform.js`) is loaded by the entry
//! document and exposes `window.gapi`. Instead of registering a global
//! callback, the wrapper renders the widget into its own placeholder with
//! `gapi.signin2.render` and passes the injected handler as the `onsuccess`
//! option.
//!
//! The widget is expected to call back at most once per completed sign-in.
//! Nothing guards against a second call; it just runs the handler again. If
//! the user cancels, no call arrives and the page stays as it was.

use leptos::prelude::*;

use crate::util::auth::ProfileSnapshot;

/// Id of the placeholder element the widget renders into.
pub const SIGN_IN_ELEMENT_ID: &str = "signin-widget";

/// Placeholder for the external sign-in widget.
#[component]
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn SignInWidget(on_sign_in: Callback<ProfileSnapshot>) -> impl IntoView {
    #[cfg(feature = "csr")]
    Effect::new(move || {
        leptos::task::spawn_local(bridge::attach(SIGN_IN_ELEMENT_ID, on_sign_in));
    });

    view! { <div id=SIGN_IN_ELEMENT_ID class="signin-widget"></div> }
}

#[cfg(feature = "csr")]
mod bridge {
    use gloo_timers::future::TimeoutFuture;
    use js_sys::{Function, Object, Reflect};
    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::util::auth::{ProfileSnapshot, profile_from_widget_user};

    const PLATFORM_POLL_INTERVAL_MS: u32 = 100;
    const PLATFORM_POLL_ATTEMPTS: u32 = 50;

    /// Wait for `window.gapi`, then load and render the widget.
    pub(super) async fn attach(element_id: &'static str, on_sign_in: Callback<ProfileSnapshot>) {
        for _ in 0..PLATFORM_POLL_ATTEMPTS {
            if let Some(gapi) = property(&js_sys::global(), "gapi") {
                load_and_render(gapi, element_id, on_sign_in);
                return;
            }
            TimeoutFuture::new(PLATFORM_POLL_INTERVAL_MS).await;
        }
        log::warn!("identity platform script did not load; sign-in widget unavailable");
    }

    fn load_and_render(gapi: JsValue, element_id: &'static str, on_sign_in: Callback<ProfileSnapshot>) {
        let target = gapi.clone();
        let on_loaded = Closure::once_into_js(move || render(&target, element_id, on_sign_in));
        if let Err(err) = call(&gapi, "load", &JsValue::from_str("signin2"), &on_loaded) {
            log::warn!("gapi.load(signin2) failed: {err:?}");
        }
    }

    fn render(gapi: &JsValue, element_id: &'static str, on_sign_in: Callback<ProfileSnapshot>) {
        let Some(signin2) = property(gapi, "signin2") else {
            log::warn!("gapi.signin2 missing after load");
            return;
        };

        let on_success = Closure::<dyn Fn(JsValue)>::new(move |user: JsValue| match profile_from_widget_user(&user) {
            Some(profile) => on_sign_in.run(profile),
            None => log::warn!("sign-in completed without a readable profile"),
        });

        let options = Object::new();
        let configured = Reflect::set(&options, &JsValue::from_str("onsuccess"), on_success.as_ref())
            .and_then(|_| Reflect::set(&options, &JsValue::from_str("theme"), &JsValue::from_str("dark")));
        if let Err(err) = configured {
            log::warn!("failed to build sign-in options: {err:?}");
            return;
        }
        // The widget keeps the handler for the lifetime of the page.
        on_success.forget();

        if let Err(err) = call(&signin2, "render", &JsValue::from_str(element_id), &options) {
            log::warn!("gapi.signin2.render failed: {err:?}");
        }
    }

    fn property(target: &JsValue, name: &str) -> Option<JsValue> {
        let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    fn call(target: &JsValue, name: &str, a: &JsValue, b: &JsValue) -> Result<JsValue, JsValue> {
        let method = Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<Function>()?;
        method.call2(target, a, b)
    }
}
