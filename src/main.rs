// Dependencies are used through the library crate.
#![allow(unused_crate_dependencies)]

use graph_info_panel::{App, init_logging};
use leptos::mount::mount_to_body;
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(|| view! { <App /> })
}
