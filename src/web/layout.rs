// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The root document skeleton every page is rendered into.

use leptos::prelude::*;

pub const DOCUMENT_LANG: &str = "en";

/// Wraps `children` in `<html lang="en"><body>…</body></html>`.
///
/// The children are placed once, as given, as the only content of the body.
pub fn root_layout(children: impl IntoView + 'static) -> impl IntoView {
	view! {
		<html lang=DOCUMENT_LANG>
			{document_body(children)}
		</html>
	}
}

/// Same skeleton as [`root_layout`], with a `<head>` ahead of the body for
/// whatever the renderer needs to put there.
pub fn root_layout_with_head(head: impl IntoView + 'static, children: impl IntoView + 'static) -> impl IntoView {
	view! {
		<html lang=DOCUMENT_LANG>
			<head>{head}</head>
			{document_body(children)}
		</html>
	}
}

fn document_body(children: impl IntoView + 'static) -> impl IntoView {
	view! { <body>{children}</body> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;
	use leptos::tachys::view::RenderHtml;

	const OPEN: &str = r#"<html lang="en"><body>"#;
	const CLOSE: &str = "</body></html>";

	fn body_of(html: &str) -> &str {
		html.strip_prefix(OPEN)
			.and_then(|rest| rest.strip_suffix(CLOSE))
			.unwrap_or_else(|| panic!("not a root document: {}", html))
	}

	#[test]
	fn wraps_text() {
		assert_eq!(root_layout("Hello").to_html(), r#"<html lang="en"><body>Hello</body></html>"#);
	}

	#[test]
	fn keeps_children_in_order() {
		let html = root_layout(view! {
			<p>"A"</p>
			<p>"B"</p>
		})
		.to_html();
		assert_eq!(body_of(&html), "<p>A</p><p>B</p>");
	}

	#[test]
	fn body_is_exactly_the_children() {
		let children = || {
			view! {
				<ul>
					{vec!["one", "two", "three"].into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
				</ul>
			}
		};
		let html = root_layout(children()).to_html();
		assert_eq!(body_of(&html), children().to_html());
	}

	#[test]
	fn empty_children_keep_the_skeleton() {
		let html = root_layout(()).to_html();
		assert!(body_of(&html).is_empty());
		assert_eq!(html.matches("<html").count(), 1);
		assert_eq!(html.matches("<body").count(), 1);
	}

	#[test]
	fn nesting_depth_does_not_depend_on_children() {
		for html in [
			root_layout("x").to_html(),
			root_layout(view! { <div><div><div>"deep"</div></div></div> }).to_html(),
		] {
			assert!(html.starts_with(OPEN));
			assert!(html.ends_with(CLOSE));
			assert_eq!(html.matches("<html").count(), 1);
			assert_eq!(html.matches("<body").count(), 1);
		}
	}

	#[test]
	fn rendering_is_repeatable() {
		let render = || root_layout(view! { <section>"same"</section> }).to_html();
		assert_eq!(render(), render());
	}

	#[test]
	fn head_goes_before_body() {
		let html = root_layout_with_head(view! { <title>"x"</title> }, "Hello").to_html();
		assert_eq!(html, r#"<html lang="en"><head><title>x</title></head><body>Hello</body></html>"#);
	}
}
