//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteOutlet` turns a reactive location into mounted page views; `Nav`
//! renders links in the form the active navigation strategy expects.

pub mod nav;
pub mod route_outlet;
