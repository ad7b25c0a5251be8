// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Document-level information for the `<head>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Metadata {
	pub title: &'static str,
	pub description: &'static str,
}

pub const METADATA: Metadata = Metadata {
	title: "AI Digital Twin",
	description: "Your AI Digital Twin deployed on AWS",
};

/// Built by cargo-leptos from `style/globals.css`.
pub const GLOBAL_STYLESHEET: &str = "/pkg/digital-twin.css";

#[component]
pub fn DocumentMetadata(metadata: Metadata) -> impl IntoView {
	view! {
		<Title text=metadata.title />
		<Meta name="description" content=metadata.description />
	}
}
