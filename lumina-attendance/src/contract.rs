//! # Contract Invocation Module.
//!
//! Call builders and assembled transactions on top of an [`Invoker`], the
//! seam where transaction assembly, signing and RPC are provided.

use crate::{
	address::Address,
	error::LuminaError,
	scval::{BytesN, ScVal, TryFromScVal},
	spec::ContractSpec,
};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, marker::PhantomData, sync::Arc};

/// Default transaction fee, in stroops.
pub const BASE_FEE: u32 = 100;
/// Default time to wait for a transaction to complete, in seconds.
pub const DEFAULT_TIMEOUT: u64 = 300;

/// Per-call options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodOptions {
	/// The fee to pay for the transaction.
	pub fee: u32,
	/// The maximum amount of time to wait for the transaction to complete.
	pub timeout_in_seconds: u64,
	/// Whether to simulate the transaction when it is assembled.
	pub simulate: bool,
}

impl Default for MethodOptions {
	fn default() -> Self {
		Self { fee: BASE_FEE, timeout_in_seconds: DEFAULT_TIMEOUT, simulate: true }
	}
}

/// A contract function invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeRequest {
	/// Passphrase of the target network.
	pub network_passphrase: String,
	/// Contract being invoked.
	pub contract_id: Address,
	/// Transaction source account.
	pub source: Address,
	/// Function name.
	pub function: String,
	/// Arguments, in call order.
	pub args: Vec<ScVal>,
	/// Call options.
	pub options: MethodOptions,
}

/// What a contract function produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvokeOutcome {
	/// Returned value.
	Value(ScVal),
	/// Contract error code.
	ContractError(u32),
}

/// Result of simulating an invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
	/// What the call produced in simulation.
	pub outcome: InvokeOutcome,
	/// True when the call does not change ledger state.
	pub read_only: bool,
	/// Addresses whose authorization the call requires.
	pub auth: Vec<Address>,
}

/// A contract deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
	/// Passphrase of the target network.
	pub network_passphrase: String,
	/// Deploying account.
	pub source: Address,
	/// Hash of the already installed Wasm blob.
	pub wasm_hash: BytesN<32>,
	/// Salt for the contract id; random when absent.
	pub salt: Option<BytesN<32>>,
	/// Call options.
	pub options: MethodOptions,
}

/// Executes contract invocations.
#[async_trait]
pub trait Invoker: Send + Sync {
	/// Simulates an invocation without changing ledger state.
	async fn simulate(&self, request: &InvokeRequest) -> Result<Simulation, LuminaError>;

	/// Signs and submits an invocation, returning its outcome.
	async fn submit(&self, request: &InvokeRequest) -> Result<InvokeOutcome, LuminaError>;

	/// Deploys a contract instance, returning its address.
	async fn deploy(&self, request: &DeployRequest) -> Result<Address, LuminaError> {
		Err(LuminaError::TransactionError(format!(
			"Deployment is not supported by this invoker (wasm {})",
			request.wasm_hash
		)))
	}
}

/// Contract error enums.
pub trait ContractErrorCode: Sized {
	/// Maps a code to its case, `None` for unknown codes.
	fn from_code(code: u32) -> Option<Self>;
	/// Returns the code of the case.
	fn code(&self) -> u32;
}

/// Types a contract function can return.
pub trait ContractReturn: Sized {
	/// Decodes an invocation outcome.
	fn from_outcome(outcome: InvokeOutcome) -> Result<Self, LuminaError>;
}

impl<T: TryFromScVal, E: ContractErrorCode> ContractReturn for Result<T, E> {
	fn from_outcome(outcome: InvokeOutcome) -> Result<Self, LuminaError> {
		match outcome {
			InvokeOutcome::Value(val) => T::try_from_sc_val(val).map(Ok),
			InvokeOutcome::ContractError(code) => E::from_code(code).map(Err).ok_or_else(|| {
				LuminaError::ContractError(format!("Unknown contract error code {}", code))
			}),
		}
	}
}

fn plain_value<T: TryFromScVal>(outcome: InvokeOutcome) -> Result<T, LuminaError> {
	match outcome {
		InvokeOutcome::Value(val) => T::try_from_sc_val(val),
		InvokeOutcome::ContractError(code) => Err(LuminaError::ContractError(format!(
			"Unexpected contract error code {} for an untagged return",
			code
		))),
	}
}

macro_rules! impl_plain_return {
	($($ty:ty),*) => {
		$(
			impl ContractReturn for $ty {
				fn from_outcome(outcome: InvokeOutcome) -> Result<Self, LuminaError> {
					plain_value(outcome)
				}
			}
		)*
	};
}

impl_plain_return!((), bool, u32, u64, String, Address);

impl<T: TryFromScVal> ContractReturn for Option<T> {
	fn from_outcome(outcome: InvokeOutcome) -> Result<Self, LuminaError> {
		plain_value(outcome)
	}
}

impl<const N: usize> ContractReturn for BytesN<N> {
	fn from_outcome(outcome: InvokeOutcome) -> Result<Self, LuminaError> {
		plain_value(outcome)
	}
}

/// A deployed contract instance reachable through an invoker.
pub struct Contract<I> {
	address: Address,
	network_passphrase: String,
	source: Address,
	spec: &'static ContractSpec,
	invoker: Arc<I>,
}

impl<I> Clone for Contract<I> {
	fn clone(&self) -> Self {
		Self {
			address: self.address.clone(),
			network_passphrase: self.network_passphrase.clone(),
			source: self.source.clone(),
			spec: self.spec,
			invoker: self.invoker.clone(),
		}
	}
}

impl<I> fmt::Debug for Contract<I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Contract")
			.field("address", &self.address)
			.field("network_passphrase", &self.network_passphrase)
			.field("source", &self.source)
			.finish()
	}
}

impl<I: Invoker> Contract<I> {
	/// Creates a contract handle.
	pub fn new(
		address: Address, network_passphrase: String, source: Address, spec: &'static ContractSpec,
		invoker: Arc<I>,
	) -> Self {
		Self { address, network_passphrase, source, spec, invoker }
	}

	/// Contract address.
	pub fn address(&self) -> &Address {
		&self.address
	}

	/// Network passphrase.
	pub fn network_passphrase(&self) -> &str {
		&self.network_passphrase
	}

	/// Transaction source account.
	pub fn source(&self) -> &Address {
		&self.source
	}

	/// Contract interface.
	pub fn spec(&self) -> &'static ContractSpec {
		self.spec
	}

	/// Shared invoker.
	pub fn invoker(&self) -> Arc<I> {
		self.invoker.clone()
	}

	/// Returns a copy acting on behalf of another source account.
	pub fn with_source(&self, source: Address) -> Self {
		Self { source, ..self.clone() }
	}

	/// Builds a call to `function`. Arguments are checked when it is sent.
	pub fn method<D: ContractReturn>(&self, function: &str, args: Vec<ScVal>) -> ContractCall<I, D> {
		let request = InvokeRequest {
			network_passphrase: self.network_passphrase.clone(),
			contract_id: self.address.clone(),
			source: self.source.clone(),
			function: function.to_string(),
			args,
			options: MethodOptions::default(),
		};

		ContractCall { invoker: self.invoker.clone(), spec: self.spec, request, phantom: PhantomData }
	}
}

/// A contract call that has not been assembled yet.
pub struct ContractCall<I, D> {
	invoker: Arc<I>,
	spec: &'static ContractSpec,
	request: InvokeRequest,
	phantom: PhantomData<fn() -> D>,
}

impl<I, D> fmt::Debug for ContractCall<I, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ContractCall").field("request", &self.request).finish()
	}
}

impl<I: Invoker, D: ContractReturn> ContractCall<I, D> {
	/// Sets the transaction fee.
	pub fn fee(mut self, fee: u32) -> Self {
		self.request.options.fee = fee;
		self
	}

	/// Sets the timeout.
	pub fn timeout_in_seconds(mut self, timeout: u64) -> Self {
		self.request.options.timeout_in_seconds = timeout;
		self
	}

	/// Sets whether to simulate on assembly.
	pub fn simulate(mut self, simulate: bool) -> Self {
		self.request.options.simulate = simulate;
		self
	}

	/// Replaces all options.
	pub fn options(mut self, options: MethodOptions) -> Self {
		self.request.options = options;
		self
	}

	/// The request this call will send.
	pub fn request(&self) -> &InvokeRequest {
		&self.request
	}

	/// Checks the arguments and assembles the transaction, simulating it
	/// unless disabled.
	pub async fn send(self) -> Result<AssembledTransaction<I, D>, LuminaError> {
		self.spec.check_args(&self.request.function, &self.request.args)?;

		let mut tx = AssembledTransaction {
			invoker: self.invoker,
			request: self.request,
			simulation: None,
			phantom: PhantomData,
		};

		if tx.request.options.simulate {
			tx.simulate().await?;
		}

		Ok(tx)
	}
}

/// Serialized form of an assembled transaction.
#[derive(Serialize, Deserialize)]
struct AssembledTransactionJson {
	request: InvokeRequest,
	simulation: Option<Simulation>,
}

/// An assembled, possibly simulated, contract call.
pub struct AssembledTransaction<I, D> {
	invoker: Arc<I>,
	request: InvokeRequest,
	simulation: Option<Simulation>,
	phantom: PhantomData<fn() -> D>,
}

impl<I, D> fmt::Debug for AssembledTransaction<I, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AssembledTransaction")
			.field("request", &self.request)
			.field("simulation", &self.simulation)
			.finish()
	}
}

impl<I: Invoker, D: ContractReturn> AssembledTransaction<I, D> {
	/// Restores a transaction serialized with [`AssembledTransaction::to_json`].
	pub fn from_json(
		invoker: Arc<I>, spec: &ContractSpec, json: &str,
	) -> Result<Self, LuminaError> {
		let parsed: AssembledTransactionJson =
			serde_json::from_str(json).map_err(|e| LuminaError::ParsingError(e.to_string()))?;
		spec.check_args(&parsed.request.function, &parsed.request.args)?;

		Ok(Self {
			invoker,
			request: parsed.request,
			simulation: parsed.simulation,
			phantom: PhantomData,
		})
	}

	/// Serializes the request and simulation.
	pub fn to_json(&self) -> Result<String, LuminaError> {
		let json = AssembledTransactionJson {
			request: self.request.clone(),
			simulation: self.simulation.clone(),
		};
		serde_json::to_string(&json).map_err(|e| LuminaError::ParsingError(e.to_string()))
	}

	/// The assembled request.
	pub fn request(&self) -> &InvokeRequest {
		&self.request
	}

	/// The simulation, if one ran.
	pub fn simulation(&self) -> Option<&Simulation> {
		self.simulation.as_ref()
	}

	/// Runs (or re-runs) the simulation.
	pub async fn simulate(&mut self) -> Result<&Simulation, LuminaError> {
		debug!(
			"Simulating {} on {} (source {})",
			self.request.function, self.request.contract_id, self.request.source
		);
		let simulation = self.invoker.simulate(&self.request).await?;
		let simulation = self.simulation.insert(simulation);
		Ok(&*simulation)
	}

	/// The simulated result.
	pub fn result(&self) -> Result<D, LuminaError> {
		let simulation = self.simulation.as_ref().ok_or_else(|| {
			LuminaError::SimulationError(format!(
				"{} has not been simulated",
				self.request.function
			))
		})?;
		D::from_outcome(simulation.outcome.clone())
	}

	/// True when the simulation shows no state change and no required signatures.
	pub fn is_read_call(&self) -> bool {
		self.simulation.as_ref().map_or(false, |sim| sim.read_only && sim.auth.is_empty())
	}

	/// Addresses, other than the source account, that must authorize the call.
	pub fn needs_non_invoker_signing_by(&self) -> Vec<Address> {
		self.simulation
			.as_ref()
			.map(|sim| sim.auth.iter().filter(|a| **a != self.request.source).cloned().collect())
			.unwrap_or_default()
	}

	/// Signs with the source account, submits and decodes the outcome.
	pub async fn sign_and_send(self) -> Result<D, LuminaError> {
		if self.simulation.is_none() {
			return Err(LuminaError::SimulationError(format!(
				"{} must be simulated before it is sent",
				self.request.function
			)));
		}
		if self.is_read_call() {
			return Err(LuminaError::TransactionError(format!(
				"{} is a read call; use the simulated result",
				self.request.function
			)));
		}

		let missing = self.needs_non_invoker_signing_by();
		if !missing.is_empty() {
			let names: Vec<String> = missing.iter().map(|a| a.to_string()).collect();
			return Err(LuminaError::TransactionError(format!(
				"{} needs signatures from {}",
				self.request.function,
				names.join(", ")
			)));
		}

		debug!(
			"Submitting {} on {} (fee {}, timeout {}s)",
			self.request.function,
			self.request.contract_id,
			self.request.options.fee,
			self.request.options.timeout_in_seconds
		);
		let outcome = self.invoker.submit(&self.request).await?;
		D::from_outcome(outcome)
	}
}
