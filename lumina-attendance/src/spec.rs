//! # Contract Interface Module.
//!
//! Typed description of a contract interface: functions, user defined
//! structs and the error enum. Used to check the shape of call arguments
//! before they are handed to an invoker.

use crate::{error::LuminaError, scval::ScType, scval::ScVal};
use base64::{engine::general_purpose::STANDARD, Engine};

/// A named, typed parameter or struct field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamSpec {
	/// Parameter name.
	pub name: String,
	/// Declared type.
	pub ty: ScType,
}

/// A contract function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSpec {
	/// Function name.
	pub name: String,
	/// Doc string.
	pub doc: String,
	/// Inputs, in call order.
	pub inputs: Vec<ParamSpec>,
	/// Declared return type.
	pub output: ScType,
}

/// A user defined struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructSpec {
	/// Struct name.
	pub name: String,
	/// Fields, sorted by name.
	pub fields: Vec<ParamSpec>,
}

/// A case of the contract error enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorCaseSpec {
	/// Case name.
	pub name: String,
	/// Error code.
	pub value: u32,
}

/// The contract error enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEnumSpec {
	/// Enum name.
	pub name: String,
	/// Cases.
	pub cases: Vec<ErrorCaseSpec>,
}

/// A contract interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractSpec {
	/// Functions.
	pub functions: Vec<FunctionSpec>,
	/// User defined structs.
	pub structs: Vec<StructSpec>,
	/// Error enum.
	pub errors: ErrorEnumSpec,
	/// The spec entries as published with the contract, base64 XDR.
	pub xdr_entries: &'static [&'static str],
}

impl ContractSpec {
	/// Looks up a function by name.
	pub fn function(&self, name: &str) -> Option<&FunctionSpec> {
		self.functions.iter().find(|f| f.name == name)
	}

	/// Looks up a struct by name.
	pub fn find_struct(&self, name: &str) -> Option<&StructSpec> {
		self.structs.iter().find(|s| s.name == name)
	}

	/// Returns the error case name for a code.
	pub fn error_name(&self, code: u32) -> Option<&str> {
		self.errors.cases.iter().find(|c| c.value == code).map(|c| c.name.as_str())
	}

	/// Raw bytes of each published spec entry.
	pub fn xdr_entry_bytes(&self) -> Result<Vec<Vec<u8>>, LuminaError> {
		self.xdr_entries
			.iter()
			.map(|entry| STANDARD.decode(entry).map_err(|e| LuminaError::ParsingError(e.to_string())))
			.collect()
	}

	/// Checks that `args` match the declared inputs of `function`.
	pub fn check_args(&self, function: &str, args: &[ScVal]) -> Result<(), LuminaError> {
		let spec = self.function(function).ok_or_else(|| {
			LuminaError::ContractError(format!("Unknown contract function \"{}\"", function))
		})?;

		if spec.inputs.len() != args.len() {
			return Err(LuminaError::ValidationError(format!(
				"{} takes {} arguments, {} given",
				function,
				spec.inputs.len(),
				args.len()
			)));
		}

		for (param, arg) in spec.inputs.iter().zip(args) {
			if !self.value_matches(arg, &param.ty) {
				return Err(LuminaError::ValidationError(format!(
					"{}: argument \"{}\" expects {}, found {}",
					function,
					param.name,
					param.ty,
					arg.kind()
				)));
			}
		}

		Ok(())
	}

	/// Whether a value conforms to a declared type.
	pub fn value_matches(&self, val: &ScVal, ty: &ScType) -> bool {
		match (ty, val) {
			(ScType::Void, ScVal::Void) => true,
			(ScType::Bool, ScVal::Bool(_)) => true,
			(ScType::U32, ScVal::U32(_)) => true,
			(ScType::U64, ScVal::U64(_)) => true,
			(ScType::Bytes, ScVal::Bytes(_)) => true,
			(ScType::BytesN(n), ScVal::Bytes(bytes)) => bytes.len() == *n as usize,
			(ScType::String, ScVal::String(_)) => true,
			(ScType::Symbol, ScVal::Symbol(_)) => true,
			(ScType::Address, ScVal::Address(_)) => true,
			(ScType::Option(_), ScVal::Void) => true,
			(ScType::Option(inner), other) => self.value_matches(other, inner),
			(ScType::Vec(inner), ScVal::Vec(items)) => {
				items.iter().all(|item| self.value_matches(item, inner))
			},
			(ScType::Udt(name), ScVal::Map(entries)) => match self.find_struct(name) {
				Some(udt) => {
					udt.fields.len() == entries.len()
						&& udt.fields.iter().zip(entries).all(|(field, (key, value))| {
							*key == ScVal::Symbol(field.name.clone())
								&& self.value_matches(value, &field.ty)
						})
				},
				None => false,
			},
			_ => false,
		}
	}
}
