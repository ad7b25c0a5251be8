// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use digital_twin::config::parse_config;
	use digital_twin::web::server::run_server_task;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = parse_config("config.kdl").await?;
	tracing::debug!(?config, "Loaded configuration");

	run_server_task(Arc::new(config)).await;

	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side is started through `hydrate` in the library.
}
