//! CSR entry point.

use leptos::prelude::*;
use plot_view::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
