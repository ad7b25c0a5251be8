// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::metadata::{DocumentMetadata, GLOBAL_STYLESHEET, METADATA};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
	use super::layout::root_layout_with_head;
	use leptos_meta::MetaTags;

	view! {
		<!DOCTYPE html>
		{root_layout_with_head(
			view! {
				<meta charset="utf-8" />
				<HydrationScripts options />
				<MetaTags />
			},
			view! { <App /> },
		)}
	}
}

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet id="leptos" href=GLOBAL_STYLESHEET />
		<DocumentMetadata metadata=METADATA />

		<main>
			<h1>{METADATA.title}</h1>
			<p>{METADATA.description}</p>
		</main>
	}
}
