//! # Lumina Attendance
//!
//! Typed client bindings for the Lumina attendance contract, a Soroban smart
//! contract that lets a teacher open short lived attendance sessions and lets
//! enrolled students mark themselves present with the session nonce.
//!
//! ## Main characteristics:
//!
//! **Typed** - every contract function is exposed with its exact argument and
//! return types, contract errors surface as [`AttendanceError`] values.
//!
//! **Deferred** - calls are assembled and simulated first; state changing
//! calls are then signed and submitted through an [`Invoker`].
//!
//! **Testable** - the [`sandbox`] module hosts the contract in process, so
//! the whole flow runs without a network.
//!
//! ## Implementation
//!
//! The bindings mirror the spec entries published with the contract, which are
//! embedded verbatim in [`attendance::ATTENDANCE_SPEC_XDR`].

// Rustc
#![warn(trivial_casts)]
#![deny(
	absolute_paths_not_starting_with_crate, deprecated, future_incompatible, missing_docs,
	nonstandard_style, unreachable_code, unreachable_patterns
)]
#![forbid(unsafe_code)]
// Clippy
#![allow(clippy::tabs_in_doc_comments, clippy::new_without_default)]
#![deny(
	// Complexity
 	clippy::unnecessary_cast,
	clippy::needless_question_mark,
	clippy::clone_on_copy,
	// Pedantic
 	clippy::cast_lossless,
 	clippy::cast_possible_wrap,
	// Perf
	clippy::redundant_clone,
	// Restriction
 	clippy::panic,
	// Style
 	clippy::let_and_return,
 	clippy::needless_borrow
)]

pub mod address;
pub mod attendance;
pub mod contract;
pub mod error;
pub mod network;
pub mod sandbox;
pub mod scval;
pub mod spec;
pub mod storage;

pub use address::Address;
use address::AddressKind;
pub use attendance::{AttendanceContract, AttendanceError, Nonce, Student};
use contract::{ContractCall, ContractReturn, Invoker, MethodOptions, BASE_FEE, DEFAULT_TIMEOUT};
use error::LuminaError;
use log::{debug, warn};
use network::{is_known_passphrase, Network, TESTNET_PASSPHRASE};
use scval::TryFromScVal;
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::Arc};
use storage::AttendanceRecord;

/// Client configuration settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	/// Attendance contract id.
	pub contract_id: String,
	/// Network passphrase.
	pub network_passphrase: String,
	/// Account that signs transactions, acting as teacher or student.
	pub source_account: String,
	/// Transaction fee, in stroops.
	pub fee: u32,
	/// Transaction timeout, in seconds.
	pub timeout_in_seconds: u64,
}

impl ClientConfig {
	/// Configuration for the test network deployment.
	pub fn testnet(source: &Address) -> Self {
		Self {
			contract_id: attendance::networks::TESTNET.contract_id.to_string(),
			network_passphrase: TESTNET_PASSPHRASE.to_string(),
			source_account: source.to_string(),
			fee: BASE_FEE,
			timeout_in_seconds: DEFAULT_TIMEOUT,
		}
	}

	/// Parses the configured contract id.
	pub fn contract_address(&self) -> Result<Address, LuminaError> {
		let address = Address::from_str(&self.contract_id)?;
		if address.kind() != AddressKind::Contract {
			return Err(LuminaError::ConfigurationError(format!(
				"contract_id {} is not a contract address",
				self.contract_id
			)));
		}
		Ok(address)
	}

	/// Parses the configured source account.
	pub fn source_address(&self) -> Result<Address, LuminaError> {
		let address = Address::from_str(&self.source_account)?;
		if address.kind() != AddressKind::Account {
			return Err(LuminaError::ConfigurationError(format!(
				"source_account {} is not an account address",
				self.source_account
			)));
		}
		Ok(address)
	}

	/// Checks the configuration.
	pub fn validate(&self) -> Result<(), LuminaError> {
		self.contract_address()?;
		self.source_address()?;
		if self.fee == 0 {
			return Err(LuminaError::ConfigurationError("fee must be positive".to_string()));
		}
		if !is_known_passphrase(&self.network_passphrase) {
			warn!("Unknown network passphrase \"{}\"", self.network_passphrase);
		}
		Ok(())
	}
}

/// Client struct.
pub struct Client<I> {
	contract: AttendanceContract<I>,
	config: ClientConfig,
}

impl<I: Invoker> Client<I> {
	/// Creates a new Client instance.
	pub fn new(config: ClientConfig, invoker: Arc<I>) -> Result<Self, LuminaError> {
		config.validate()?;
		let contract = AttendanceContract::new(
			config.contract_address()?,
			config.network_passphrase.clone(),
			config.source_address()?,
			invoker,
		);

		Ok(Self { contract, config })
	}

	/// Creates a client for a known deployment, with the default fee and timeout.
	pub fn from_network(
		network: &Network, source: Address, invoker: Arc<I>,
	) -> Result<Self, LuminaError> {
		let config = ClientConfig {
			contract_id: network.contract_id.to_string(),
			network_passphrase: network.network_passphrase.to_string(),
			source_account: source.to_string(),
			fee: BASE_FEE,
			timeout_in_seconds: DEFAULT_TIMEOUT,
		};
		config.validate()?;
		let contract = AttendanceContract::from_network(network, source, invoker)?;

		Ok(Self { contract, config })
	}

	/// Returns a client acting on behalf of another account.
	pub fn with_source(&self, source: Address) -> Self {
		let config = ClientConfig { source_account: source.to_string(), ..self.config.clone() };
		let contract = AttendanceContract::from(self.contract.with_source(source));
		Self { contract, config }
	}

	/// Gets the contract bindings.
	pub fn contract(&self) -> &AttendanceContract<I> {
		&self.contract
	}

	/// Gets config.
	pub fn get_config(&self) -> &ClientConfig {
		&self.config
	}

	/// Gets the source account.
	pub fn source(&self) -> &Address {
		self.contract.source()
	}

	fn prepare<D: ContractReturn>(&self, call: ContractCall<I, D>) -> ContractCall<I, D> {
		call.options(MethodOptions {
			fee: self.config.fee,
			timeout_in_seconds: self.config.timeout_in_seconds,
			simulate: true,
		})
	}

	/// Simulates a call and returns the simulated value.
	async fn read<D: ContractReturn>(&self, call: ContractCall<I, D>) -> Result<D, LuminaError> {
		let tx = self.prepare(call).send().await?;
		tx.result()
	}

	/// Simulates a tagged call, then submits it unless it failed or only reads.
	async fn invoke<T: TryFromScVal>(
		&self, call: ContractCall<I, Result<T, AttendanceError>>,
	) -> Result<T, LuminaError> {
		let tx = self.prepare(call).send().await?;

		if let Err(err) = tx.result()? {
			debug!("{} failed in simulation: {}", tx.request().function, err);
			return Err(err.into());
		}
		if tx.is_read_call() {
			let value = tx.result()??;
			return Ok(value);
		}

		let value = tx.sign_and_send().await??;
		Ok(value)
	}

	/// Initializes the contract with the source account as teacher.
	pub async fn initialize(&self) -> Result<(), LuminaError> {
		self.invoke(self.contract.initialize(self.source().clone())).await
	}

	/// Creates (or replaces) a lecture.
	pub async fn create_lecture(&self, lecture_id: u64) -> Result<(), LuminaError> {
		self.invoke(self.contract.create_lecture(self.source().clone(), lecture_id)).await
	}

	/// Enrolls a student in a lecture.
	pub async fn add_student(
		&self, lecture_id: u64, roll_no: u64, name: String, student_address: Address,
	) -> Result<(), LuminaError> {
		let call = self.contract.add_student(
			self.source().clone(),
			lecture_id,
			roll_no,
			name,
			student_address,
		);
		self.invoke(call).await
	}

	/// Opens an attendance session and returns its nonce.
	pub async fn start_attendance(
		&self, lecture_id: u64, duration_seconds: u64,
	) -> Result<Nonce, LuminaError> {
		let call =
			self.contract.start_attendance(self.source().clone(), lecture_id, duration_seconds);
		self.invoke(call).await
	}

	/// Marks the source account present.
	pub async fn mark_attendance(&self, lecture_id: u64, nonce: Nonce) -> Result<(), LuminaError> {
		self.invoke(self.contract.mark_attendance(self.source().clone(), lecture_id, nonce)).await
	}

	/// Whether a student is marked present.
	pub async fn get_attendance(
		&self, lecture_id: u64, student: &Address,
	) -> Result<bool, LuminaError> {
		self.read(self.contract.get_attendance(lecture_id, student.clone())).await
	}

	/// Enrollment details of a student, if enrolled.
	pub async fn get_student_enrollment(
		&self, lecture_id: u64, student_address: &Address,
	) -> Result<Option<Student>, LuminaError> {
		self.read(self.contract.get_student_enrollment(lecture_id, student_address.clone())).await
	}

	/// The teacher the contract was initialized with.
	pub async fn get_teacher(&self) -> Result<Address, LuminaError> {
		self.invoke(self.contract.get_teacher()).await
	}

	/// Enrolls every student of a roster, skipping those already enrolled.
	/// Returns how many were enrolled.
	pub async fn enroll_roster(
		&self, lecture_id: u64, students: Vec<Student>,
	) -> Result<usize, LuminaError> {
		let mut enrolled = 0;
		for student in students {
			let Student { address, name, roll_no } = student;
			match self.add_student(lecture_id, roll_no, name, address.clone()).await {
				Ok(()) => enrolled += 1,
				Err(LuminaError::AttendanceError(AttendanceError::StudentAlreadyEnrolled)) => {
					warn!("Skipping roll {} ({}): already enrolled", roll_no, address);
				},
				Err(e) => return Err(e),
			}
		}
		Ok(enrolled)
	}

	/// Attendance and enrollment of each student in a lecture.
	pub async fn attendance_report(
		&self, lecture_id: u64, students: &[Address],
	) -> Result<Vec<AttendanceRecord>, LuminaError> {
		let mut records = Vec::with_capacity(students.len());
		for student in students {
			let present = self.get_attendance(lecture_id, student).await?;
			let enrollment = self.get_student_enrollment(lecture_id, student).await?;
			records.push(AttendanceRecord::new(lecture_id, student, enrollment, present));
		}
		Ok(records)
	}
}

#[cfg(test)]
mod lib_tests {
	use crate::{
		contract::{DeployRequest, MethodOptions, BASE_FEE, DEFAULT_TIMEOUT},
		error::LuminaError,
		attendance::networks,
		network::{STANDALONE_PASSPHRASE, TESTNET_PASSPHRASE},
		sandbox::Sandbox,
		scval::BytesN,
		Address, AttendanceContract, AttendanceError, Client, ClientConfig, Nonce, Student,
	};
	use std::sync::Arc;

	const LECTURE: u64 = 101;
	const START: u64 = 1_700_000_000;

	fn teacher() -> Address {
		Address::account([1; 32])
	}

	fn student() -> Address {
		Address::account([2; 32])
	}

	fn other_student() -> Address {
		Address::account([3; 32])
	}

	async fn setup() -> (Arc<Sandbox>, Client<Sandbox>) {
		let sandbox = Arc::new(Sandbox::new(STANDALONE_PASSPHRASE));
		sandbox.set_timestamp(START).await;

		let deploy = DeployRequest {
			network_passphrase: STANDALONE_PASSPHRASE.to_string(),
			source: teacher(),
			wasm_hash: BytesN([4; 32]),
			salt: None,
			options: MethodOptions::default(),
		};
		let contract = AttendanceContract::deploy(sandbox.clone(), deploy).await.unwrap();

		let config = ClientConfig {
			contract_id: contract.address().to_string(),
			network_passphrase: STANDALONE_PASSPHRASE.to_string(),
			source_account: teacher().to_string(),
			fee: BASE_FEE,
			timeout_in_seconds: DEFAULT_TIMEOUT,
		};
		let client = Client::new(config, sandbox.clone()).unwrap();

		(sandbox, client)
	}

	/// Initialized contract with one lecture, one enrolled student and an open session.
	async fn setup_session() -> (Arc<Sandbox>, Client<Sandbox>, Nonce) {
		let (sandbox, client) = setup().await;
		client.initialize().await.unwrap();
		client.create_lecture(LECTURE).await.unwrap();
		client.add_student(LECTURE, 1, "Ada".to_string(), student()).await.unwrap();
		let nonce = client.start_attendance(LECTURE, 300).await.unwrap();
		(sandbox, client, nonce)
	}

	#[tokio::test]
	async fn test_attendance_flow() {
		let (_sandbox, client, nonce) = setup_session().await;
		assert_eq!(client.get_teacher().await.unwrap(), teacher());

		let as_student = client.with_source(student());
		as_student.mark_attendance(LECTURE, nonce).await.unwrap();

		assert!(client.get_attendance(LECTURE, &student()).await.unwrap());
		assert!(!client.get_attendance(LECTURE, &other_student()).await.unwrap());
		assert!(!client.get_attendance(LECTURE + 1, &student()).await.unwrap());

		let enrollment = client.get_student_enrollment(LECTURE, &student()).await.unwrap();
		assert_eq!(
			enrollment,
			Some(Student { address: student(), name: "Ada".to_string(), roll_no: 1 })
		);
		assert_eq!(client.get_student_enrollment(LECTURE, &other_student()).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_mark_twice() {
		let (_sandbox, client, nonce) = setup_session().await;
		let as_student = client.with_source(student());
		as_student.mark_attendance(LECTURE, nonce).await.unwrap();

		let res = as_student.mark_attendance(LECTURE, nonce).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::AlreadyMarked))));
	}

	#[tokio::test]
	async fn test_session_expiry() {
		let (sandbox, client, nonce) = setup_session().await;

		// Still open at the expiry timestamp itself.
		sandbox.advance_time(300).await;
		let as_student = client.with_source(student());
		as_student.mark_attendance(LECTURE, nonce).await.unwrap();

		sandbox.advance_time(1).await;
		let late = client.with_source(other_student());
		let res = late.mark_attendance(LECTURE, nonce).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::SessionExpired))));
		assert!(!client.get_attendance(LECTURE, &other_student()).await.unwrap());
	}

	#[tokio::test]
	async fn test_invalid_and_replaced_nonce() {
		let (_sandbox, client, nonce) = setup_session().await;
		let as_student = client.with_source(student());

		let res = as_student.mark_attendance(LECTURE, BytesN([0; 32])).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::InvalidNonce))));

		let fresh = client.start_attendance(LECTURE, 300).await.unwrap();
		assert_ne!(fresh, nonce);
		let res = as_student.mark_attendance(LECTURE, nonce).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::InvalidNonce))));
		as_student.mark_attendance(LECTURE, fresh).await.unwrap();
	}

	#[tokio::test]
	async fn test_mark_without_enrollment() {
		let (_sandbox, client, nonce) = setup_session().await;

		let guest = client.with_source(other_student());
		guest.mark_attendance(LECTURE, nonce).await.unwrap();

		assert!(client.get_attendance(LECTURE, &other_student()).await.unwrap());
		assert_eq!(client.get_student_enrollment(LECTURE, &other_student()).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_session_not_active() {
		let (_sandbox, client, nonce) = setup_session().await;
		client.create_lecture(LECTURE + 1).await.unwrap();

		let as_student = client.with_source(student());
		let res = as_student.mark_attendance(LECTURE + 1, nonce).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::SessionNotActive))));
	}

	#[tokio::test]
	async fn test_not_initialized() {
		let (_sandbox, client) = setup().await;

		let res = client.get_teacher().await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::NotInitialized))));

		let res = client.create_lecture(LECTURE).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::NotInitialized))));

		let as_student = client.with_source(student());
		let res = as_student.mark_attendance(LECTURE, BytesN([0; 32])).await;
		assert!(matches!(
			res,
			Err(LuminaError::AttendanceError(AttendanceError::AttendancePeriodNotStarted))
		));
	}

	#[tokio::test]
	async fn test_initialize_once() {
		let (_sandbox, client) = setup().await;
		client.initialize().await.unwrap();

		let intruder = client.with_source(other_student());
		let res = intruder.initialize().await;
		assert!(matches!(
			res,
			Err(LuminaError::AttendanceError(AttendanceError::AlreadyInitialized))
		));
		assert_eq!(client.get_teacher().await.unwrap(), teacher());
	}

	#[tokio::test]
	async fn test_unauthorized_teacher_calls() {
		let (_sandbox, client, _nonce) = setup_session().await;
		let intruder = client.with_source(other_student());

		let res = intruder.create_lecture(LECTURE + 1).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::Unauthorized))));

		let res = intruder.add_student(LECTURE, 9, "Eve".to_string(), other_student()).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::Unauthorized))));

		let res = intruder.start_attendance(LECTURE, 60).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::Unauthorized))));
	}

	#[tokio::test]
	async fn test_enrollment_errors() {
		let (_sandbox, client, _nonce) = setup_session().await;

		let res = client.add_student(LECTURE + 1, 1, "Ada".to_string(), student()).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::LectureNotFound))));

		let res = client.add_student(LECTURE, 2, "Ada".to_string(), student()).await;
		assert!(matches!(
			res,
			Err(LuminaError::AttendanceError(AttendanceError::StudentAlreadyEnrolled))
		));

		// Enrollment is keyed by address; a reused roll number is accepted.
		client.add_student(LECTURE, 1, "Alan".to_string(), other_student()).await.unwrap();
		let enrollment = client.get_student_enrollment(LECTURE, &other_student()).await.unwrap();
		assert_eq!(enrollment.map(|s| s.name), Some("Alan".to_string()));

		let res = client.start_attendance(LECTURE + 1, 60).await;
		assert!(matches!(res, Err(LuminaError::AttendanceError(AttendanceError::LectureNotFound))));
	}

	#[tokio::test]
	async fn test_failed_calls_do_not_change_state() {
		let (sandbox, client, nonce) = setup_session().await;
		let before = sandbox.snapshot().await;

		let _ = client.add_student(LECTURE, 1, "Ada".to_string(), student()).await;
		let _ = client.with_source(other_student()).create_lecture(7).await;
		let _ = client.with_source(student()).mark_attendance(LECTURE, BytesN([1; 32])).await;
		assert_eq!(sandbox.snapshot().await, before);

		client.with_source(student()).mark_attendance(LECTURE, nonce).await.unwrap();
		assert_ne!(sandbox.snapshot().await, before);
	}

	#[tokio::test]
	async fn test_roster_and_report() {
		let (_sandbox, client, nonce) = setup_session().await;
		let roster = vec![
			Student { address: student(), name: "Ada".to_string(), roll_no: 1 },
			Student { address: other_student(), name: "Alan".to_string(), roll_no: 2 },
		];
		assert_eq!(client.enroll_roster(LECTURE, roster).await.unwrap(), 1);

		client.with_source(student()).mark_attendance(LECTURE, nonce).await.unwrap();

		let stranger = Address::account([4; 32]);
		let report = client
			.attendance_report(LECTURE, &[student(), other_student(), stranger])
			.await
			.unwrap();
		assert_eq!(report.len(), 3);
		assert!(report.iter().all(|record| record.lecture_id() == LECTURE));
		assert!(report[0].present());
		assert_eq!(report[0].roll_no(), Some(1));
		assert!(!report[1].present());
		assert_eq!(report[1].name(), Some(&"Alan".to_string()));
		assert_eq!(report[2].roll_no(), None);
	}

	#[tokio::test]
	async fn test_assembled_transaction_json() {
		let (_sandbox, client) = setup().await;
		let contract = client.contract();

		let tx = contract.initialize(teacher()).send().await.unwrap();
		assert!(!tx.is_read_call());
		assert_eq!(tx.result().unwrap(), Ok(()));
		let json = tx.to_json().unwrap();

		let restored =
			contract.tx_from_json::<Result<(), AttendanceError>>(&json).unwrap();
		assert_eq!(restored.request().function, "initialize");
		assert_eq!(restored.sign_and_send().await.unwrap(), Ok(()));
		assert_eq!(client.get_teacher().await.unwrap(), teacher());
	}

	#[tokio::test]
	async fn test_read_calls_are_not_sent() {
		let (_sandbox, client, _nonce) = setup_session().await;
		let tx = client.contract().get_attendance(LECTURE, student()).send().await.unwrap();
		assert!(tx.is_read_call());
		assert!(!tx.result().unwrap());
		assert!(matches!(tx.sign_and_send().await, Err(LuminaError::TransactionError(_))));
	}

	#[tokio::test]
	async fn test_foreign_signature_required() {
		let (_sandbox, client, nonce) = setup_session().await;

		// Teacher as source, student as the marking party.
		let tx = client.contract().mark_attendance(student(), LECTURE, nonce).send().await.unwrap();
		assert_eq!(tx.needs_non_invoker_signing_by(), vec![student()]);
		assert!(matches!(tx.sign_and_send().await, Err(LuminaError::TransactionError(_))));
		assert!(!client.get_attendance(LECTURE, &student()).await.unwrap());
	}

	#[tokio::test]
	async fn test_call_options_and_validation() {
		let (_sandbox, client) = setup().await;
		let call = client
			.contract()
			.create_lecture(teacher(), LECTURE)
			.fee(500)
			.timeout_in_seconds(30)
			.simulate(false);
		assert_eq!(call.request().options.fee, 500);
		assert_eq!(call.request().options.timeout_in_seconds, 30);

		let tx = call.send().await.unwrap();
		assert!(tx.simulation().is_none());
		assert!(matches!(tx.result(), Err(LuminaError::SimulationError(_))));

		let bad = client.contract().method::<bool>("get_attendance", vec![]);
		assert!(matches!(bad.send().await, Err(LuminaError::ValidationError(_))));

		let unknown = client.contract().method::<bool>("close_lecture", vec![]);
		assert!(matches!(unknown.send().await, Err(LuminaError::ContractError(_))));
	}

	#[tokio::test]
	async fn test_client_applies_configured_options() {
		let (sandbox, client) = setup().await;
		let config = ClientConfig { fee: 250, timeout_in_seconds: 60, ..client.get_config().clone() };
		let client = Client::new(config, sandbox).unwrap();

		let call = client.prepare(client.contract().get_teacher().simulate(false));
		assert_eq!(
			call.request().options,
			MethodOptions { fee: 250, timeout_in_seconds: 60, simulate: true }
		);
	}

	#[tokio::test]
	async fn test_with_source() {
		let (_sandbox, client) = setup().await;
		let as_student = client.with_source(student());

		assert_eq!(as_student.source(), &student());
		assert_eq!(as_student.get_config().source_account, student().to_string());
		assert_eq!(as_student.contract().address(), client.contract().address());
		assert_eq!(as_student.get_config().fee, client.get_config().fee);
		assert_eq!(client.source(), &teacher());
	}

	#[tokio::test]
	async fn test_from_network() {
		let sandbox = Arc::new(Sandbox::new(TESTNET_PASSPHRASE));
		let deployed = networks::TESTNET.contract_address().unwrap();
		sandbox.register(deployed.clone(), BytesN([4; 32])).await.unwrap();

		let client = Client::from_network(&networks::TESTNET, teacher(), sandbox).unwrap();
		assert_eq!(client.contract().address(), &deployed);
		assert_eq!(client.get_config().network_passphrase, TESTNET_PASSPHRASE);
		assert_eq!(client.contract().network_passphrase(), TESTNET_PASSPHRASE);
		assert_eq!(client.get_config().fee, BASE_FEE);

		client.initialize().await.unwrap();
		assert_eq!(client.get_teacher().await.unwrap(), teacher());

		// A contract id cannot act as the source account.
		let res = Client::from_network(
			&networks::TESTNET,
			deployed,
			Arc::new(Sandbox::new(TESTNET_PASSPHRASE)),
		);
		assert!(matches!(res, Err(LuminaError::ConfigurationError(_))));
	}

	#[test]
	fn test_config_validation() {
		let config = ClientConfig::testnet(&teacher());
		assert!(config.validate().is_ok());

		let swapped =
			ClientConfig { source_account: config.contract_id.clone(), ..config.clone() };
		assert!(matches!(swapped.validate(), Err(LuminaError::ConfigurationError(_))));

		let broken = ClientConfig { contract_id: "CA3BC5".to_string(), ..config.clone() };
		assert!(matches!(broken.validate(), Err(LuminaError::ParsingError(_))));

		let free = ClientConfig { fee: 0, ..config };
		assert!(free.validate().is_err());
	}
}
