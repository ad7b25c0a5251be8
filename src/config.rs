// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, miette};
use std::net::SocketAddr;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_str(config_path, &config_file_contents)
}

pub fn parse_config_str(config_path: &str, config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let web = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("{}: missing `web` block", config_path))?;
	let bind_addr = web
		.get_arg("bind_addr")
		.ok_or_else(|| miette!("{}: missing `web.bind_addr`", config_path))?
		.as_string()
		.ok_or_else(|| miette!("{}: `web.bind_addr` must be a string", config_path))?;
	let bind_addr: SocketAddr = bind_addr
		.parse()
		.map_err(|error| miette!("{}: invalid `web.bind_addr` {:?}: {}", config_path, bind_addr, error))?;

	Ok(ConfigData {
		web: WebConfig { bind_addr },
	})
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}
