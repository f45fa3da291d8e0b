//! Topic Desk Dashboard
//!
//! Browser front end for the topic and paper tracking service, built with
//! Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All view logic lives in the `topicdesk` core crate's
//! `DashboardState`; this crate wires it to signals, the browser's `fetch`,
//! timers and dialogs.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
