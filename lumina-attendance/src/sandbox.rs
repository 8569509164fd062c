//! # Sandbox Module.
//!
//! An in-process ledger hosting attendance contract instances. It implements
//! [`Invoker`], so bindings and the client run against it exactly as they
//! would against a network, and its state can be persisted between runs.

use crate::{
	address::Address,
	attendance::{AttendanceContractCalls, AttendanceError, Nonce, Student},
	contract::{DeployRequest, InvokeOutcome, InvokeRequest, Invoker, Simulation},
	error::LuminaError,
	scval::{BytesN, IntoScVal, ScVal},
};
use async_trait::async_trait;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{
	collections::{BTreeMap, BTreeSet},
	time::{SystemTime, UNIX_EPOCH},
};
use tokio::sync::Mutex;

/// An open attendance session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	/// Nonce students must present.
	pub nonce: Nonce,
	/// Last ledger timestamp at which the session accepts marks.
	pub expires_at: u64,
}

/// Storage of one contract instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractState {
	teacher: Option<Address>,
	lectures: BTreeMap<u64, Address>,
	sessions: BTreeMap<u64, Session>,
	records: BTreeMap<u64, BTreeSet<Address>>,
	students: BTreeMap<u64, BTreeMap<Address, Student>>,
}

impl ContractState {
	/// The stored teacher, if initialized.
	pub fn teacher(&self) -> Option<&Address> {
		self.teacher.as_ref()
	}

	/// Whether the lecture exists.
	pub fn has_lecture(&self, lecture_id: u64) -> bool {
		self.lectures.contains_key(&lecture_id)
	}

	/// The latest session started for a lecture.
	pub fn session(&self, lecture_id: u64) -> Option<&Session> {
		self.sessions.get(&lecture_id)
	}

	/// Students enrolled in a lecture.
	pub fn students(&self, lecture_id: u64) -> Vec<&Student> {
		self.students.get(&lecture_id).map(|s| s.values().collect()).unwrap_or_default()
	}
}

/// A deployed contract instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
	/// Hash of the Wasm the instance runs.
	pub wasm_hash: BytesN<32>,
	/// Instance storage.
	pub state: ContractState,
}

/// Persistable ledger state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxState {
	/// Pinned ledger timestamp; the system clock is used when absent.
	pub ledger_time: Option<u64>,
	/// Deployed instances, by address.
	pub contracts: BTreeMap<Address, DeployedContract>,
}

impl SandboxState {
	fn now(&self) -> u64 {
		self.ledger_time.unwrap_or_else(|| {
			SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
		})
	}
}

/// In-process ledger.
#[derive(Debug)]
pub struct Sandbox {
	network_passphrase: String,
	state: Mutex<SandboxState>,
}

impl Sandbox {
	/// Creates an empty ledger for a network.
	pub fn new(network_passphrase: impl Into<String>) -> Self {
		Self::from_state(network_passphrase, SandboxState::default())
	}

	/// Restores a ledger from a snapshot.
	pub fn from_state(network_passphrase: impl Into<String>, state: SandboxState) -> Self {
		Self { network_passphrase: network_passphrase.into(), state: Mutex::new(state) }
	}

	/// Network passphrase the ledger answers to.
	pub fn network_passphrase(&self) -> &str {
		&self.network_passphrase
	}

	/// Copies the current ledger state.
	pub async fn snapshot(&self) -> SandboxState {
		self.state.lock().await.clone()
	}

	/// Storage of the instance at `address`.
	pub async fn contract_state(&self, address: &Address) -> Option<ContractState> {
		self.state.lock().await.contracts.get(address).map(|c| c.state.clone())
	}

	/// Hosts a fresh, uninitialized instance at a given address.
	pub async fn register(
		&self, address: Address, wasm_hash: BytesN<32>,
	) -> Result<(), LuminaError> {
		let mut state = self.state.lock().await;
		if state.contracts.contains_key(&address) {
			return Err(LuminaError::TransactionError(format!(
				"Contract {} already exists",
				address
			)));
		}
		state.contracts.insert(address, DeployedContract { wasm_hash, state: ContractState::default() });
		Ok(())
	}

	/// Pins the ledger clock.
	pub async fn set_timestamp(&self, timestamp: u64) {
		self.state.lock().await.ledger_time = Some(timestamp);
	}

	/// Moves the ledger clock forward, pinning it.
	pub async fn advance_time(&self, seconds: u64) {
		let mut state = self.state.lock().await;
		let now = state.now();
		state.ledger_time = Some(now.saturating_add(seconds));
	}

	/// Current ledger timestamp.
	pub async fn timestamp(&self) -> u64 {
		self.state.lock().await.now()
	}

	fn check_network(&self, network_passphrase: &str) -> Result<(), LuminaError> {
		if network_passphrase != self.network_passphrase {
			return Err(LuminaError::TransactionError(format!(
				"Network passphrase mismatch: ledger runs \"{}\", request targets \"{}\"",
				self.network_passphrase, network_passphrase
			)));
		}
		Ok(())
	}
}

fn unknown_contract(address: &Address) -> LuminaError {
	LuminaError::TransactionError(format!("Contract {} is not deployed", address))
}

/// Executes one call against a scratch copy of instance storage.
struct Host<'a> {
	state: &'a mut ContractState,
	now: u64,
	auth: Vec<Address>,
}

impl<'a> Host<'a> {
	fn new(state: &'a mut ContractState, now: u64) -> Self {
		Self { state, now, auth: Vec::new() }
	}

	fn require_auth(&mut self, address: &Address) {
		if !self.auth.contains(address) {
			self.auth.push(address.clone());
		}
	}

	fn check_teacher(&self, teacher: &Address) -> Result<(), AttendanceError> {
		let stored = self.state.teacher.as_ref().ok_or(AttendanceError::NotInitialized)?;
		if stored != teacher {
			return Err(AttendanceError::Unauthorized);
		}
		Ok(())
	}

	fn check_lecture(&self, lecture_id: u64) -> Result<(), AttendanceError> {
		if !self.state.has_lecture(lecture_id) {
			return Err(AttendanceError::LectureNotFound);
		}
		Ok(())
	}

	fn invoke(&mut self, call: AttendanceContractCalls) -> Result<ScVal, AttendanceError> {
		match call {
			AttendanceContractCalls::Initialize(c) => {
				if self.state.teacher.is_some() {
					return Err(AttendanceError::AlreadyInitialized);
				}
				self.state.teacher = Some(c.teacher);
				Ok(ScVal::Void)
			},
			AttendanceContractCalls::CreateLecture(c) => {
				self.check_teacher(&c.teacher)?;
				self.require_auth(&c.teacher);
				self.state.lectures.insert(c.lecture_id, c.teacher);
				Ok(ScVal::Void)
			},
			AttendanceContractCalls::AddStudent(c) => {
				self.check_teacher(&c.teacher)?;
				self.require_auth(&c.teacher);
				self.check_lecture(c.lecture_id)?;

				let enrolled = self.state.students.entry(c.lecture_id).or_default();
				if enrolled.contains_key(&c.student_address) {
					return Err(AttendanceError::StudentAlreadyEnrolled);
				}
				let student =
					Student { address: c.student_address.clone(), name: c.name, roll_no: c.roll_no };
				enrolled.insert(c.student_address, student);
				Ok(ScVal::Void)
			},
			AttendanceContractCalls::StartAttendance(c) => {
				self.check_teacher(&c.teacher)?;
				self.require_auth(&c.teacher);
				self.check_lecture(c.lecture_id)?;

				let nonce = Nonce::from(rand::thread_rng().gen::<[u8; 32]>());
				let expires_at = self.now.saturating_add(c.duration_seconds);
				self.state.sessions.insert(c.lecture_id, Session { nonce, expires_at });
				Ok(nonce.into_sc_val())
			},
			AttendanceContractCalls::MarkAttendance(c) => {
				self.require_auth(&c.student);
				if self.state.teacher.is_none() {
					return Err(AttendanceError::AttendancePeriodNotStarted);
				}
				let session =
					self.state.sessions.get(&c.lecture_id).ok_or(AttendanceError::SessionNotActive)?;
				if self.now > session.expires_at {
					return Err(AttendanceError::SessionExpired);
				}
				if session.nonce != c.nonce {
					return Err(AttendanceError::InvalidNonce);
				}

				let present = self.state.records.entry(c.lecture_id).or_default();
				if !present.insert(c.student) {
					return Err(AttendanceError::AlreadyMarked);
				}
				Ok(ScVal::Void)
			},
			AttendanceContractCalls::GetAttendance(c) => {
				let present = self
					.state
					.records
					.get(&c.lecture_id)
					.map_or(false, |records| records.contains(&c.student));
				Ok(ScVal::Bool(present))
			},
			AttendanceContractCalls::GetStudentEnrollment(c) => {
				let student = self
					.state
					.students
					.get(&c.lecture_id)
					.and_then(|students| students.get(&c.student_address))
					.cloned();
				Ok(student.into_sc_val())
			},
			AttendanceContractCalls::GetTeacher(_) => {
				let teacher = self.state.teacher.clone().ok_or(AttendanceError::NotInitialized)?;
				Ok(teacher.into_sc_val())
			},
		}
	}
}

/// Runs a request on `state`, returning the outcome and the addresses whose
/// authorization it required.
fn execute(
	state: &mut ContractState, now: u64, request: &InvokeRequest,
) -> Result<(InvokeOutcome, Vec<Address>), LuminaError> {
	let call = AttendanceContractCalls::decode(&request.function, request.args.clone())
		.map_err(|e| LuminaError::ContractError(format!("Host error: {}", e)))?;

	let mut host = Host::new(state, now);
	let outcome = match host.invoke(call) {
		Ok(val) => InvokeOutcome::Value(val),
		Err(err) => InvokeOutcome::ContractError(err as u32),
	};
	Ok((outcome, host.auth))
}

#[async_trait]
impl Invoker for Sandbox {
	async fn simulate(&self, request: &InvokeRequest) -> Result<Simulation, LuminaError> {
		self.check_network(&request.network_passphrase)?;
		let state = self.state.lock().await;
		let now = state.now();
		let deployed =
			state.contracts.get(&request.contract_id).ok_or_else(|| unknown_contract(&request.contract_id))?;

		let mut scratch = deployed.state.clone();
		let (outcome, auth) = execute(&mut scratch, now, request)?;
		let read_only = scratch == deployed.state;

		Ok(Simulation { outcome, read_only, auth })
	}

	async fn submit(&self, request: &InvokeRequest) -> Result<InvokeOutcome, LuminaError> {
		self.check_network(&request.network_passphrase)?;
		let mut state = self.state.lock().await;
		let now = state.now();
		let deployed = state
			.contracts
			.get_mut(&request.contract_id)
			.ok_or_else(|| unknown_contract(&request.contract_id))?;

		let mut scratch = deployed.state.clone();
		let (outcome, auth) = execute(&mut scratch, now, request)?;

		if let Some(signer) = auth.iter().find(|a| **a != request.source) {
			return Err(LuminaError::TransactionError(format!(
				"{} requires authorization from {}, source is {}",
				request.function, signer, request.source
			)));
		}

		if let InvokeOutcome::Value(_) = outcome {
			deployed.state = scratch;
			debug!("Committed {} on {}", request.function, request.contract_id);
		}

		Ok(outcome)
	}

	async fn deploy(&self, request: &DeployRequest) -> Result<Address, LuminaError> {
		self.check_network(&request.network_passphrase)?;

		// Salted ids are salt xor deployer key.
		let key = match &request.salt {
			Some(salt) => {
				let mut key = salt.to_array();
				key.iter_mut().zip(request.source.key()).for_each(|(k, s)| *k ^= s);
				key
			},
			None => rand::thread_rng().gen::<[u8; 32]>(),
		};
		let address = Address::contract(key);

		self.register(address.clone(), request.wasm_hash).await?;
		debug!("Deployed wasm {} at {}", request.wasm_hash, address);

		Ok(address)
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		address::Address,
		attendance::AttendanceError,
		contract::{DeployRequest, InvokeOutcome, InvokeRequest, Invoker, MethodOptions},
		error::LuminaError,
		network::{STANDALONE_PASSPHRASE, TESTNET_PASSPHRASE},
		sandbox::*,
		scval::{BytesN, ScVal},
	};

	fn teacher() -> Address {
		Address::account([1; 32])
	}

	fn contract_id() -> Address {
		Address::contract([7; 32])
	}

	fn request(source: Address, function: &str, args: Vec<ScVal>) -> InvokeRequest {
		InvokeRequest {
			network_passphrase: STANDALONE_PASSPHRASE.to_string(),
			contract_id: contract_id(),
			source,
			function: function.to_string(),
			args,
			options: MethodOptions::default(),
		}
	}

	async fn sandbox() -> Sandbox {
		let sandbox = Sandbox::new(STANDALONE_PASSPHRASE);
		sandbox.register(contract_id(), BytesN([0; 32])).await.unwrap();
		sandbox
	}

	#[tokio::test]
	async fn test_simulation_does_not_commit() {
		let sandbox = sandbox().await;
		let init = request(teacher(), "initialize", vec![ScVal::Address(teacher())]);

		let sim = sandbox.simulate(&init).await.unwrap();
		assert_eq!(sim.outcome, InvokeOutcome::Value(ScVal::Void));
		assert!(!sim.read_only);
		assert!(sim.auth.is_empty());

		let state = sandbox.contract_state(&contract_id()).await.unwrap();
		assert_eq!(state.teacher(), None);

		sandbox.submit(&init).await.unwrap();
		let state = sandbox.contract_state(&contract_id()).await.unwrap();
		assert_eq!(state.teacher(), Some(&teacher()));
	}

	#[tokio::test]
	async fn test_simulation_records_auth() {
		let sandbox = sandbox().await;
		sandbox
			.submit(&request(teacher(), "initialize", vec![ScVal::Address(teacher())]))
			.await
			.unwrap();

		let create =
			request(teacher(), "create_lecture", vec![ScVal::Address(teacher()), ScVal::U64(1)]);
		let sim = sandbox.simulate(&create).await.unwrap();
		assert_eq!(sim.auth, vec![teacher()]);
		assert!(!sim.read_only);

		let read = request(teacher(), "get_teacher", vec![]);
		let sim = sandbox.simulate(&read).await.unwrap();
		assert_eq!(sim.outcome, InvokeOutcome::Value(ScVal::Address(teacher())));
		assert!(sim.read_only);
	}

	#[tokio::test]
	async fn test_submit_rejects_foreign_auth() {
		let sandbox = sandbox().await;
		let student = Address::account([2; 32]);
		sandbox
			.submit(&request(teacher(), "initialize", vec![ScVal::Address(teacher())]))
			.await
			.unwrap();

		// The teacher cannot mark attendance on behalf of a student.
		let mark = request(
			teacher(),
			"mark_attendance",
			vec![ScVal::Address(student), ScVal::U64(1), ScVal::Bytes(vec![0; 32])],
		);
		let res = sandbox.submit(&mark).await;
		assert!(matches!(res, Err(LuminaError::TransactionError(_))));
	}

	#[tokio::test]
	async fn test_failed_call_leaves_state_untouched() {
		let sandbox = sandbox().await;
		let before = sandbox.snapshot().await;

		let create =
			request(teacher(), "create_lecture", vec![ScVal::Address(teacher()), ScVal::U64(1)]);
		let outcome = sandbox.submit(&create).await.unwrap();
		assert_eq!(outcome, InvokeOutcome::ContractError(AttendanceError::NotInitialized as u32));
		assert_eq!(sandbox.snapshot().await, before);
	}

	#[tokio::test]
	async fn test_contract_state_lectures_and_students() {
		let sandbox = sandbox().await;
		let student = Address::account([2; 32]);
		let calls = [
			request(teacher(), "initialize", vec![ScVal::Address(teacher())]),
			request(teacher(), "create_lecture", vec![ScVal::Address(teacher()), ScVal::U64(1)]),
			request(
				teacher(),
				"add_student",
				vec![
					ScVal::Address(teacher()),
					ScVal::U64(1),
					ScVal::U64(7),
					ScVal::String("Ada".to_string()),
					ScVal::Address(student.clone()),
				],
			),
		];
		for call in &calls {
			assert_eq!(sandbox.submit(call).await.unwrap(), InvokeOutcome::Value(ScVal::Void));
		}

		let state = sandbox.contract_state(&contract_id()).await.unwrap();
		assert!(state.has_lecture(1));
		assert!(!state.has_lecture(2));
		assert!(state.session(1).is_none());

		let students = state.students(1);
		assert_eq!(students.len(), 1);
		assert_eq!(students[0].address, student);
		assert_eq!(students[0].roll_no, 7);
		assert!(state.students(2).is_empty());
	}

	#[tokio::test]
	async fn test_wrong_network_and_unknown_contract() {
		let sandbox = sandbox().await;
		assert_eq!(sandbox.network_passphrase(), STANDALONE_PASSPHRASE);

		let mut wrong_network = request(teacher(), "get_teacher", vec![]);
		wrong_network.network_passphrase = TESTNET_PASSPHRASE.to_string();
		assert!(matches!(
			sandbox.simulate(&wrong_network).await,
			Err(LuminaError::TransactionError(_))
		));

		let mut unknown = request(teacher(), "get_teacher", vec![]);
		unknown.contract_id = Address::contract([9; 32]);
		assert!(matches!(
			sandbox.submit(&unknown).await,
			Err(LuminaError::TransactionError(_))
		));
	}

	#[tokio::test]
	async fn test_bad_arguments_are_host_errors() {
		let sandbox = sandbox().await;
		let bad = request(teacher(), "initialize", vec![ScVal::U64(1)]);
		assert!(matches!(sandbox.simulate(&bad).await, Err(LuminaError::ContractError(_))));
	}

	#[tokio::test]
	async fn test_session_expiry_saturates() {
		let sandbox = sandbox().await;
		sandbox.set_timestamp(u64::MAX - 10).await;
		sandbox
			.submit(&request(teacher(), "initialize", vec![ScVal::Address(teacher())]))
			.await
			.unwrap();
		sandbox
			.submit(&request(
				teacher(),
				"create_lecture",
				vec![ScVal::Address(teacher()), ScVal::U64(1)],
			))
			.await
			.unwrap();
		let outcome = sandbox
			.submit(&request(
				teacher(),
				"start_attendance",
				vec![ScVal::Address(teacher()), ScVal::U64(1), ScVal::U64(300)],
			))
			.await
			.unwrap();
		assert!(matches!(outcome, InvokeOutcome::Value(ScVal::Bytes(_))));

		let state = sandbox.contract_state(&contract_id()).await.unwrap();
		assert_eq!(state.session(1).unwrap().expires_at, u64::MAX);
	}

	#[tokio::test]
	async fn test_clock_control() {
		let sandbox = sandbox().await;
		sandbox.set_timestamp(1_000).await;
		assert_eq!(sandbox.timestamp().await, 1_000);
		sandbox.advance_time(301).await;
		assert_eq!(sandbox.timestamp().await, 1_301);
	}

	#[tokio::test]
	async fn test_deploy() {
		let sandbox = Sandbox::new(STANDALONE_PASSPHRASE);
		let deploy = DeployRequest {
			network_passphrase: STANDALONE_PASSPHRASE.to_string(),
			source: teacher(),
			wasm_hash: BytesN([4; 32]),
			salt: Some(BytesN([3; 32])),
			options: MethodOptions::default(),
		};

		let address = sandbox.deploy(&deploy).await.unwrap();
		assert_eq!(address, Address::contract([2; 32]));

		// Same deployer and salt
		assert!(sandbox.deploy(&deploy).await.is_err());

		let unsalted = DeployRequest { salt: None, ..deploy };
		let other = sandbox.deploy(&unsalted).await.unwrap();
		assert_ne!(other, address);
		assert_eq!(sandbox.snapshot().await.contracts.len(), 2);
	}

	#[tokio::test]
	async fn test_state_roundtrip_through_json() {
		let sandbox = sandbox().await;
		sandbox
			.submit(&request(teacher(), "initialize", vec![ScVal::Address(teacher())]))
			.await
			.unwrap();
		let snapshot = sandbox.snapshot().await;

		let json = serde_json::to_string(&snapshot).unwrap();
		let restored: SandboxState = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, snapshot);

		let restored = Sandbox::from_state(STANDALONE_PASSPHRASE, restored);
		let sim = restored.simulate(&request(teacher(), "get_teacher", vec![])).await.unwrap();
		assert_eq!(sim.outcome, InvokeOutcome::Value(ScVal::Address(teacher())));
	}
}
