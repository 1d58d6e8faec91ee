//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `composer`, `auth_form`) so individual
//! components can depend on small focused models. Each model is a plain
//! owned struct; components wrap it in a single `RwSignal` and mutate it
//! only through its methods.

pub mod auth_form;
pub mod chat;
pub mod composer;
