//! # Address Module.
//!
//! Stellar strkey addresses: `G...` for accounts and `C...` for contracts.
//! A strkey is the base32 encoding (no padding) of a version byte, the 32-byte
//! key and a little-endian CRC16-XModem checksum over both.

use crate::error::LuminaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Version byte of ed25519 account keys.
const VERSION_ACCOUNT: u8 = 6 << 3;
/// Version byte of contract ids.
const VERSION_CONTRACT: u8 = 2 << 3;
/// Encoded length of a 32-byte strkey.
const STRKEY_LEN: usize = 56;
/// RFC 4648 base32 alphabet.
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Kind of entity an address points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
	/// Ed25519 account.
	Account,
	/// Deployed contract.
	Contract,
}

impl AddressKind {
	fn version_byte(&self) -> u8 {
		match self {
			AddressKind::Account => VERSION_ACCOUNT,
			AddressKind::Contract => VERSION_CONTRACT,
		}
	}
}

/// Account or contract address.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
	kind: AddressKind,
	key: [u8; 32],
}

impl Address {
	/// Creates an account address from an ed25519 public key.
	pub fn account(key: [u8; 32]) -> Self {
		Self { kind: AddressKind::Account, key }
	}

	/// Creates a contract address from a contract id hash.
	pub fn contract(key: [u8; 32]) -> Self {
		Self { kind: AddressKind::Contract, key }
	}

	/// Returns the address kind.
	pub fn kind(&self) -> AddressKind {
		self.kind
	}

	/// Returns the raw 32-byte key.
	pub fn key(&self) -> &[u8; 32] {
		&self.key
	}

	/// Encodes the address as a strkey.
	pub fn to_strkey(&self) -> String {
		let mut data = Vec::with_capacity(35);
		data.push(self.kind.version_byte());
		data.extend_from_slice(&self.key);
		let checksum = crc16_xmodem(&data);
		data.extend_from_slice(&checksum.to_le_bytes());
		base32_encode(&data)
	}
}

impl FromStr for Address {
	type Err = LuminaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != STRKEY_LEN {
			return Err(LuminaError::ParsingError(format!(
				"Invalid strkey length {} for \"{}\"",
				s.len(),
				s
			)));
		}

		let data = base32_decode(s)?;
		let (body, checksum) = data.split_at(data.len() - 2);
		let expected = crc16_xmodem(body).to_le_bytes();
		if checksum != expected {
			return Err(LuminaError::ParsingError(format!(
				"Invalid strkey checksum for \"{}\"",
				s
			)));
		}

		let kind = match body[0] {
			VERSION_ACCOUNT => AddressKind::Account,
			VERSION_CONTRACT => AddressKind::Contract,
			other => {
				return Err(LuminaError::ParsingError(format!(
					"Unsupported strkey version byte {}",
					other
				)))
			},
		};

		let mut key = [0u8; 32];
		key.copy_from_slice(&body[1..]);

		Ok(Self { kind, key })
	}
}

impl TryFrom<String> for Address {
	type Error = LuminaError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Address::from_str(&value)
	}
}

impl From<Address> for String {
	fn from(address: Address) -> Self {
		address.to_strkey()
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_strkey())
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Address").field(&self.to_strkey()).finish()
	}
}

/// CRC16-XModem (poly 0x1021, init 0).
fn crc16_xmodem(data: &[u8]) -> u16 {
	let mut crc: u16 = 0;
	for byte in data {
		crc ^= u16::from(*byte) << 8;
		for _ in 0..8 {
			crc = if crc & 0x8000 != 0 { (crc << 1) ^ 0x1021 } else { crc << 1 };
		}
	}
	crc
}

fn base32_encode(data: &[u8]) -> String {
	let mut out = String::with_capacity((data.len() * 8 + 4) / 5);
	let mut buffer: u32 = 0;
	let mut bits = 0;

	for byte in data {
		buffer = (buffer << 8) | u32::from(*byte);
		bits += 8;
		while bits >= 5 {
			let index = (buffer >> (bits - 5)) & 0x1f;
			out.push(BASE32_ALPHABET[index as usize] as char);
			bits -= 5;
		}
	}
	if bits > 0 {
		let index = (buffer << (5 - bits)) & 0x1f;
		out.push(BASE32_ALPHABET[index as usize] as char);
	}

	out
}

fn base32_decode(s: &str) -> Result<Vec<u8>, LuminaError> {
	let mut out = Vec::with_capacity(s.len() * 5 / 8);
	let mut buffer: u32 = 0;
	let mut bits = 0;

	for c in s.bytes() {
		let value = BASE32_ALPHABET.iter().position(|&a| a == c).ok_or_else(|| {
			LuminaError::ParsingError(format!("Invalid base32 character '{}'", c as char))
		})?;
		buffer = (buffer << 5) | value as u32;
		bits += 5;
		if bits >= 8 {
			out.push(((buffer >> (bits - 8)) & 0xff) as u8);
			bits -= 8;
		}
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use crate::address::*;

	const ACCOUNT_ONES: &str = "GAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQDZ7H";
	const CONTRACT_ZERO: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

	#[test]
	fn test_crc16_xmodem_check_value() {
		assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
	}

	#[test]
	fn test_encode_account() {
		let address = Address::account([1; 32]);
		assert_eq!(address.to_strkey(), ACCOUNT_ONES);
		assert_eq!(address.kind(), AddressKind::Account);
	}

	#[test]
	fn test_encode_contract() {
		let address = Address::contract([0; 32]);
		assert_eq!(address.to_string(), CONTRACT_ZERO);
	}

	#[test]
	fn test_parse_roundtrip() {
		let parsed = Address::from_str(ACCOUNT_ONES).unwrap();
		assert_eq!(parsed, Address::account([1; 32]));
		assert_eq!(parsed.to_strkey(), ACCOUNT_ONES);
	}

	#[test]
	fn test_parse_rejects_bad_checksum() {
		let mut tampered = ACCOUNT_ONES.to_string();
		tampered.replace_range(10..11, "B");
		assert!(Address::from_str(&tampered).is_err());
	}

	#[test]
	fn test_parse_rejects_bad_length_and_alphabet() {
		assert!(Address::from_str("GABC").is_err());
		let lowercase = ACCOUNT_ONES.to_lowercase();
		assert!(Address::from_str(&lowercase).is_err());
	}

	#[test]
	fn test_serde_as_string() {
		let address = Address::contract([0; 32]);
		let json = serde_json::to_string(&address).unwrap();
		assert_eq!(json, format!("\"{}\"", CONTRACT_ZERO));
		let back: Address = serde_json::from_str(&json).unwrap();
		assert_eq!(back, address);
	}
}
