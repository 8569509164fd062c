//! # Filesystem Actions Module.
//!
//! This module provides functionalities for filesystem actions.

use dotenv::{dotenv, var};
use log::{debug, info, warn};
use lumina_attendance::{
	error::LuminaError,
	sandbox::{Sandbox, SandboxState},
	storage::{JSONFileStorage, Storage},
	Address, ClientConfig,
};
use std::{env::current_dir, path::PathBuf, str::FromStr};

/// Library configuration file name.
pub const CONFIG_FILENAME: &str = "config";
/// Local ledger state file name.
pub const SANDBOX_FILENAME: &str = "sandbox";
/// Environment variable overriding the configured source account.
pub const SOURCE_ACCOUNT_VAR: &str = "SOURCE_ACCOUNT";

/// Enum representing the possible file extensions.
pub enum FileType {
	/// CSV file.
	Csv,
	/// JSON file.
	Json,
}

impl FileType {
	/// Converts the enum variant into its corresponding file extension.
	fn as_str(&self) -> &'static str {
		match self {
			FileType::Csv => "csv",
			FileType::Json => "json",
		}
	}
}

/// Loads the source account, preferring the environment over the configuration.
pub fn load_source(config: &ClientConfig) -> Result<Address, LuminaError> {
	dotenv().ok();
	match var(SOURCE_ACCOUNT_VAR) {
		Ok(account) => Address::from_str(account.trim()),
		Err(_) => config.source_address(),
	}
}

/// Retrieves the path to the `assets` directory.
pub fn get_assets_path() -> Result<PathBuf, LuminaError> {
	current_dir().map_err(LuminaError::IOError).map(|current_dir| {
		// Workaround for the tests running in the crate directory.
		#[cfg(test)]
		{
			current_dir.join("assets")
		}

		#[cfg(not(test))]
		{
			current_dir.join("lumina-attendance-cli/assets")
		}
	})
}

/// Helper function to get the path of a file in the `assets` directory.
pub fn get_file_path(file_name: &str, file_type: FileType) -> Result<PathBuf, LuminaError> {
	let assets_path = get_assets_path()?;
	Ok(assets_path.join(format!("{}.{}", file_name, file_type.as_str())))
}

/// Loads the configuration file.
pub fn load_config() -> Result<ClientConfig, LuminaError> {
	let filepath = get_file_path(CONFIG_FILENAME, FileType::Json)?;
	JSONFileStorage::<ClientConfig>::new(filepath).load()
}

/// Saves the configuration file.
pub fn save_config(config: &ClientConfig) -> Result<(), LuminaError> {
	let filepath = get_file_path(CONFIG_FILENAME, FileType::Json)?;
	JSONFileStorage::<ClientConfig>::new(filepath).save(config.clone())
}

/// Loads the local ledger, starting an empty one when none was saved.
pub fn load_sandbox(network_passphrase: &str) -> Result<Sandbox, LuminaError> {
	let filepath = get_file_path(SANDBOX_FILENAME, FileType::Json)?;
	if !filepath.exists() {
		warn!("No ledger state at \"{}\". Starting empty.", filepath.display());
		return Ok(Sandbox::new(network_passphrase));
	}

	let state = JSONFileStorage::<SandboxState>::new(filepath).load()?;
	let sandbox = Sandbox::from_state(network_passphrase, state);
	debug!("Local ledger loaded for \"{}\".", sandbox.network_passphrase());
	Ok(sandbox)
}

/// Saves the local ledger.
pub async fn save_sandbox(sandbox: &Sandbox) -> Result<(), LuminaError> {
	let filepath = get_file_path(SANDBOX_FILENAME, FileType::Json)?;
	let mut storage = JSONFileStorage::<SandboxState>::new(filepath);
	storage.save(sandbox.snapshot().await)?;
	info!("Ledger state saved at \"{}\".", storage.filepath().display());
	Ok(())
}
