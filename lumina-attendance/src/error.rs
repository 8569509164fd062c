//! # Error Module.
//!
//! This module features the `LuminaError` enum for error handling throughout the project.

use crate::attendance::AttendanceError;
use thiserror::Error;

/// The crate-wide error variants.
#[derive(Debug, Error)]
pub enum LuminaError {
	/// Tagged error returned by the attendance contract
	#[error("AttendanceError: {0}")]
	AttendanceError(#[from] AttendanceError),

	/// Configuration error
	#[error("ConfigurationError: {0}")]
	ConfigurationError(String),

	/// Unexpected contract behaviour (unknown function, unknown error code)
	#[error("ContractError: {0}")]
	ContractError(String),

	/// Conversion error
	#[error("ConversionError: {0}")]
	ConversionError(String),

	/// File read/write error
	#[error("FileIOError: {0}")]
	FileIOError(String),

	/// Input/output error
	#[error("IOError: {0}")]
	IOError(std::io::Error),

	/// Parsing error
	#[error("ParsingError: {0}")]
	ParsingError(String),

	/// Simulation error
	#[error("SimulationError: {0}")]
	SimulationError(String),

	/// Transaction error
	#[error("TransactionError: {0}")]
	TransactionError(String),

	/// Validation error
	#[error("ValidationError: {0}")]
	ValidationError(String),
}
