//! Route-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page is a static component plus a `PageView` constant that route
//! tables store. Pages take no props and read no context, so rendering one is
//! a pure function of nothing.

pub mod about;
pub mod home;
pub mod legacy;
pub mod login;
