//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome shared by every route.

pub mod sign_in_widget;
pub mod site_header;
