//! # Contract Value Module.
//!
//! Values exchanged with the contract and the types the contract interface
//! declares for them, with conversions from and into Rust types.

use crate::{address::Address, error::LuminaError};
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A contract value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ScVal {
	/// Unit, also the encoding of an absent optional.
	Void,
	/// Boolean.
	Bool(bool),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// Byte string.
	Bytes(Vec<u8>),
	/// UTF-8 string.
	String(String),
	/// Symbol.
	Symbol(String),
	/// Account or contract address.
	Address(Address),
	/// Vector.
	Vec(Vec<ScVal>),
	/// Map, entries sorted by key.
	Map(Vec<(ScVal, ScVal)>),
}

impl ScVal {
	/// Short name of the value kind, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			ScVal::Void => "void",
			ScVal::Bool(_) => "bool",
			ScVal::U32(_) => "u32",
			ScVal::U64(_) => "u64",
			ScVal::Bytes(_) => "bytes",
			ScVal::String(_) => "string",
			ScVal::Symbol(_) => "symbol",
			ScVal::Address(_) => "address",
			ScVal::Vec(_) => "vec",
			ScVal::Map(_) => "map",
		}
	}

	/// Builds the map encoding of a contract struct.
	/// Fields are keyed by symbol and sorted by name.
	pub fn from_fields(fields: Vec<(&str, ScVal)>) -> Self {
		let mut entries: Vec<(ScVal, ScVal)> = fields
			.into_iter()
			.map(|(name, value)| (ScVal::Symbol(name.to_string()), value))
			.collect();
		entries.sort_by(|(a, _), (b, _)| match (a, b) {
			(ScVal::Symbol(a), ScVal::Symbol(b)) => a.cmp(b),
			_ => std::cmp::Ordering::Equal,
		});
		ScVal::Map(entries)
	}
}

/// A type declared by the contract interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScType {
	/// Unit.
	Void,
	/// Boolean.
	Bool,
	/// Unsigned 32-bit integer.
	U32,
	/// Unsigned 64-bit integer.
	U64,
	/// Byte string of any length.
	Bytes,
	/// Byte string of a fixed length.
	BytesN(u32),
	/// UTF-8 string.
	String,
	/// Symbol.
	Symbol,
	/// Account or contract address.
	Address,
	/// Optional value.
	Option(Box<ScType>),
	/// Tagged result.
	Result {
		/// Success type.
		ok: Box<ScType>,
		/// Error type.
		error: Box<ScType>,
	},
	/// Vector of a single element type.
	Vec(Box<ScType>),
	/// User defined type, by name.
	Udt(String),
	/// Contract error code.
	Error,
}

impl fmt::Display for ScType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ScType::Void => write!(f, "void"),
			ScType::Bool => write!(f, "bool"),
			ScType::U32 => write!(f, "u32"),
			ScType::U64 => write!(f, "u64"),
			ScType::Bytes => write!(f, "bytes"),
			ScType::BytesN(n) => write!(f, "bytes{}", n),
			ScType::String => write!(f, "string"),
			ScType::Symbol => write!(f, "symbol"),
			ScType::Address => write!(f, "address"),
			ScType::Option(inner) => write!(f, "option<{}>", inner),
			ScType::Result { ok, error } => write!(f, "result<{}, {}>", ok, error),
			ScType::Vec(inner) => write!(f, "vec<{}>", inner),
			ScType::Udt(name) => write!(f, "{}", name),
			ScType::Error => write!(f, "error"),
		}
	}
}

/// Conversion of a Rust value into a contract value.
pub trait IntoScVal {
	/// Converts `self` into a contract value.
	fn into_sc_val(self) -> ScVal;
}

/// Conversion of a contract value into a Rust value.
pub trait TryFromScVal: Sized {
	/// Converts a contract value, failing on a kind mismatch.
	fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError>;
}

fn mismatch(expected: &str, found: &ScVal) -> LuminaError {
	LuminaError::ConversionError(format!("Expected {}, found {}", expected, found.kind()))
}

impl IntoScVal for () {
	fn into_sc_val(self) -> ScVal {
		ScVal::Void
	}
}

impl TryFromScVal for () {
	fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError> {
		match val {
			ScVal::Void => Ok(()),
			other => Err(mismatch("void", &other)),
		}
	}
}

macro_rules! impl_scalar {
	($ty:ty, $variant:ident, $name:literal) => {
		impl IntoScVal for $ty {
			fn into_sc_val(self) -> ScVal {
				ScVal::$variant(self)
			}
		}

		impl TryFromScVal for $ty {
			fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError> {
				match val {
					ScVal::$variant(inner) => Ok(inner),
					other => Err(mismatch($name, &other)),
				}
			}
		}
	};
}

impl_scalar!(bool, Bool, "bool");
impl_scalar!(u32, U32, "u32");
impl_scalar!(u64, U64, "u64");
impl_scalar!(String, String, "string");
impl_scalar!(Address, Address, "address");

impl<T: IntoScVal> IntoScVal for Option<T> {
	fn into_sc_val(self) -> ScVal {
		match self {
			Some(inner) => inner.into_sc_val(),
			None => ScVal::Void,
		}
	}
}

impl<T: TryFromScVal> TryFromScVal for Option<T> {
	fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError> {
		match val {
			ScVal::Void => Ok(None),
			other => T::try_from_sc_val(other).map(Some),
		}
	}
}

/// Fixed-length byte string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BytesN<const N: usize>(pub [u8; N]);

impl<const N: usize> BytesN<N> {
	/// Returns the inner bytes.
	pub fn to_array(&self) -> [u8; N] {
		self.0
	}

	/// Lowercase hex encoding.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl<const N: usize> From<[u8; N]> for BytesN<N> {
	fn from(bytes: [u8; N]) -> Self {
		Self(bytes)
	}
}

impl<const N: usize> FromStr for BytesN<N> {
	type Err = LuminaError;

	/// Parses a hex string, with or without a `0x` prefix.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.strip_prefix("0x").unwrap_or(s);
		let bytes = hex::decode(trimmed).map_err(|e| LuminaError::ParsingError(e.to_string()))?;
		let array: [u8; N] = bytes.try_into().map_err(|bytes: Vec<u8>| {
			LuminaError::ParsingError(format!("Expected {} bytes, found {}", N, bytes.len()))
		})?;
		Ok(Self(array))
	}
}

impl<const N: usize> fmt::Display for BytesN<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl<const N: usize> fmt::Debug for BytesN<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BytesN<{}>({})", N, self.to_hex())
	}
}

impl<const N: usize> Serialize for BytesN<N> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex())
	}
}

impl<'de, const N: usize> Deserialize<'de> for BytesN<N> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		BytesN::from_str(&s).map_err(D::Error::custom)
	}
}

impl<const N: usize> IntoScVal for BytesN<N> {
	fn into_sc_val(self) -> ScVal {
		ScVal::Bytes(self.0.to_vec())
	}
}

impl<const N: usize> TryFromScVal for BytesN<N> {
	fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError> {
		match val {
			ScVal::Bytes(bytes) => {
				let len = bytes.len();
				let array: [u8; N] = bytes.try_into().map_err(|_| {
					LuminaError::ConversionError(format!("Expected {} bytes, found {}", N, len))
				})?;
				Ok(Self(array))
			},
			other => Err(mismatch("bytes", &other)),
		}
	}
}

/// Decoded fields of a contract struct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScStruct {
	fields: BTreeMap<String, ScVal>,
}

impl ScStruct {
	/// Removes a field and converts it.
	pub fn take<T: TryFromScVal>(&mut self, name: &str) -> Result<T, LuminaError> {
		let value = self
			.fields
			.remove(name)
			.ok_or_else(|| LuminaError::ConversionError(format!("Missing field \"{}\"", name)))?;
		T::try_from_sc_val(value)
			.map_err(|e| LuminaError::ConversionError(format!("Field \"{}\": {}", name, e)))
	}
}

impl TryFromScVal for ScStruct {
	fn try_from_sc_val(val: ScVal) -> Result<Self, LuminaError> {
		let entries = match val {
			ScVal::Map(entries) => entries,
			other => return Err(mismatch("map", &other)),
		};

		let mut fields = BTreeMap::new();
		for (key, value) in entries {
			match key {
				ScVal::Symbol(name) => {
					fields.insert(name, value);
				},
				other => return Err(mismatch("symbol", &other)),
			}
		}

		Ok(Self { fields })
	}
}

#[cfg(test)]
mod tests {
	use crate::{address::Address, scval::*};

	#[test]
	fn test_option_encoding() {
		assert_eq!(None::<u64>.into_sc_val(), ScVal::Void);
		assert_eq!(Some(7u64).into_sc_val(), ScVal::U64(7));
		assert_eq!(Option::<u64>::try_from_sc_val(ScVal::Void).unwrap(), None);
		assert_eq!(
			Option::<u64>::try_from_sc_val(ScVal::U64(7)).unwrap(),
			Some(7)
		);
	}

	#[test]
	fn test_scalar_mismatch() {
		let res = bool::try_from_sc_val(ScVal::U64(1));
		assert!(matches!(res, Err(LuminaError::ConversionError(_))));
	}

	#[test]
	fn test_bytes_n_length_checked() {
		let res = BytesN::<32>::try_from_sc_val(ScVal::Bytes(vec![0; 31]));
		assert!(res.is_err());
		let ok = BytesN::<32>::try_from_sc_val(ScVal::Bytes(vec![9; 32])).unwrap();
		assert_eq!(ok, BytesN([9; 32]));
	}

	#[test]
	fn test_bytes_n_hex() {
		let nonce = BytesN([0xab; 32]);
		let hex = nonce.to_string();
		assert_eq!(hex.len(), 64);
		assert_eq!(BytesN::<32>::from_str(&hex).unwrap(), nonce);
		assert_eq!(BytesN::<32>::from_str(&format!("0x{}", hex)).unwrap(), nonce);
		assert!(BytesN::<32>::from_str("abcd").is_err());
	}

	#[test]
	fn test_struct_fields_sorted_and_taken() {
		let address = Address::account([3; 32]);
		let val = ScVal::from_fields(vec![
			("roll_no", ScVal::U64(12)),
			("address", ScVal::Address(address.clone())),
			("name", ScVal::String("Ada".to_string())),
		]);

		match &val {
			ScVal::Map(entries) => {
				let keys: Vec<&ScVal> = entries.iter().map(|(k, _)| k).collect();
				assert_eq!(
					keys,
					vec![
						&ScVal::Symbol("address".to_string()),
						&ScVal::Symbol("name".to_string()),
						&ScVal::Symbol("roll_no".to_string()),
					]
				);
			},
			other => panic!("unexpected value {:?}", other),
		}

		let mut fields = ScStruct::try_from_sc_val(val).unwrap();
		assert_eq!(fields.take::<u64>("roll_no").unwrap(), 12);
		assert_eq!(fields.take::<Address>("address").unwrap(), address);
		assert!(fields.take::<String>("missing").is_err());
	}
}
