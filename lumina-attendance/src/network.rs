//! # Network Module.
//!
//! Network passphrases and per-environment deployment descriptors.

use crate::{address::Address, error::LuminaError};
use std::str::FromStr;

/// Passphrase of the public network.
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
/// Passphrase of the test network.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
/// Passphrase of the future network.
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";
/// Passphrase of a standalone (local) network.
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

/// Well known networks, by name.
pub const KNOWN_PASSPHRASES: &[(&str, &str)] = &[
	("public", PUBLIC_PASSPHRASE),
	("testnet", TESTNET_PASSPHRASE),
	("futurenet", FUTURENET_PASSPHRASE),
	("standalone", STANDALONE_PASSPHRASE),
];

/// Whether the passphrase belongs to a well known network.
pub fn is_known_passphrase(passphrase: &str) -> bool {
	KNOWN_PASSPHRASES.iter().any(|(_, p)| *p == passphrase)
}

/// A contract deployment on a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
	/// Profile name.
	pub name: &'static str,
	/// Network passphrase.
	pub network_passphrase: &'static str,
	/// Deployed contract id.
	pub contract_id: &'static str,
}

impl Network {
	/// Parses the deployed contract id.
	pub fn contract_address(&self) -> Result<Address, LuminaError> {
		Address::from_str(self.contract_id)
	}
}

/// Finds a profile by name in `networks`.
pub fn find_network(networks: &[Network], name: &str) -> Result<Network, LuminaError> {
	networks.iter().find(|n| n.name == name).copied().ok_or_else(|| {
		LuminaError::ConfigurationError(format!("Unknown network profile \"{}\"", name))
	})
}
