//! Sign-in profile handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The external sign-in widget hands back a user object once its own
//! authentication flow completes. That object is converted into a
//! [`ProfileSnapshot`] and passed to the handler injected into
//! `SignInWidget`. The application's handler, [`log_sign_in`], only writes the
//! profile to the diagnostic log.
//!
//! The profile identifier is not a credential. Nothing here sends it to a
//! backend; a server-verified ID token would be needed for that.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Rendered in place of an email the user did not share.
pub const MISSING_EMAIL: &str = "<none>";

/// Profile fields read once from the sign-in widget. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Absent when the email consent scope was not granted.
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileSnapshot {
    /// Build a snapshot, treating a blank email as absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            email: email.filter(|e| !e.trim().is_empty()),
        }
    }
}

/// Diagnostic lines for a profile, in widget field order.
pub fn profile_log_lines(profile: &ProfileSnapshot) -> [String; 4] {
    [
        format!("ID: {}", profile.id),
        format!("Name: {}", profile.name),
        format!("Image URL: {}", profile.image_url),
        format!("Email: {}", profile.email.as_deref().unwrap_or(MISSING_EMAIL)),
    ]
}

/// Sign-in handler: log each profile field. Safe to call repeatedly.
pub fn log_sign_in(profile: ProfileSnapshot) {
    for line in profile_log_lines(&profile) {
        log::info!("{line}");
    }
}

/// Convert the widget's user object (`getBasicProfile()` accessors) into a
/// snapshot. Returns `None` when the object has no readable profile id.
#[cfg(feature = "csr")]
pub fn profile_from_widget_user(user: &wasm_bindgen::JsValue) -> Option<ProfileSnapshot> {
    let basic = call_accessor(user, "getBasicProfile")?;
    let id = call_accessor(&basic, "getId")?.as_string()?;
    let text = |name: &str| call_accessor(&basic, name).and_then(|v| v.as_string());
    Some(ProfileSnapshot::new(
        id,
        text("getName").unwrap_or_default(),
        text("getImageUrl").unwrap_or_default(),
        text("getEmail"),
    ))
}

#[cfg(feature = "csr")]
fn call_accessor(target: &wasm_bindgen::JsValue, name: &str) -> Option<wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let method = js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    let method = method.dyn_into::<js_sys::Function>().ok()?;
    let value = method.call0(target).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}
