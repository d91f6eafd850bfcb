//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are stateless views selected by the route table in `routes`.

pub mod contact;
pub mod home;
