//! GLOF early warning web server and UI.
//!
//! This crate provides the Leptos-based landing screen of the glacial lake
//! outburst flood early warning system: a sensor simulation panel and a
//! role-based sign in that routes to the admin, rescue authority or
//! geologist view.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod pages;
pub mod telemetry;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
