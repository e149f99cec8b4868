//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates `web-sys` access from components so pages and the outlet stay
//! testable without a DOM.

pub mod address_bar;
