//! Pan/zoom for rendered plots and an adapter for the page's Sankey library.
//!
//! Server-rendered pages use the exports in [`interop`]; the Leptos [`App`]
//! composes the same pieces as components.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod error;
pub mod interop;
mod pages;

pub use error::PlotError;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	// Only the first call installs the logger; later ones are no-ops.
	if console_log::init_with_level(Level::Debug).is_ok() {
		info!("Logging initialized");
	}
	console_error_panic_hook::set_once();
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Plot viewer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
