// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::{App, shell};
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub async fn run_server_task(config: Arc<ConfigData>) {
	let task_result = run_server(config).await;
	if let Err(error) = task_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
}

async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = config.web.bind_addr;
	let leptos_options = web_config.leptos_options;
	let routes = generate_route_list(App);

	let app_state = AppState { leptos_options };

	let app = Router::new()
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(site_fallback)
		.with_state(app_state);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

async fn site_fallback(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	if let Some(response) = serve_site_file(&uri, &state.leptos_options.site_root).await {
		return response;
	}

	tracing::debug!(%uri, "No site file; rendering the document shell");
	let leptos_options = state.leptos_options.clone();
	let render_shell = render_app_to_stream(move || shell(leptos_options.clone()));
	render_shell(request).await.into_response()
}

/// Looks `uri` up under the site root; `None` when there is no such file.
async fn serve_site_file(uri: &Uri, site_root: &str) -> Option<Response> {
	let request = Request::builder().uri(uri.clone()).body(Body::empty()).ok()?;
	let response = ServeDir::new(site_root).oneshot(request).await.ok()?;
	(response.status() == StatusCode::OK).then(|| response.into_response())
}
