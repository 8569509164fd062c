//! # CLI Module.
//!
//! This module contains all CLI related data handling and conversions.

use crate::fs::{get_file_path, load_source, save_config, FileType};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use lumina_attendance::{
	attendance::{networks, ERRORS},
	contract::{DeployRequest, MethodOptions},
	error::LuminaError,
	network::find_network,
	sandbox::Sandbox,
	scval::BytesN,
	storage::{AttendanceRecord, CSVFileStorage, EnrollmentRecord, Storage},
	Address, AttendanceContract, Client, ClientConfig, Nonce, Student,
};
use std::{path::PathBuf, str::FromStr, sync::Arc};

/// Session length used when none is given, in seconds.
const DEFAULT_SESSION_SECONDS: u64 = 300;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Mode {
	/// Check whether a student is marked present. Requires 'StudentData'.
	Attendance(StudentData),
	/// Deploy a contract instance on the local ledger. Requires 'DeployData'.
	Deploy(DeployData),
	/// Enroll one student or a CSV roster. Requires 'EnrollData'.
	Enroll(EnrollData),
	/// Show a student's enrollment. Requires 'StudentData'.
	Enrollment(StudentData),
	/// List the contract error codes.
	Errors,
	/// Initialize the contract with the source account as teacher.
	Initialize,
	/// Create a lecture. Requires 'LectureData'.
	Lecture(LectureData),
	/// Mark the source account present. Requires 'MarkData'.
	Mark(MarkData),
	/// List the known deployments.
	Networks,
	/// Save an attendance report for a roster. Requires 'ReportData'.
	Report(ReportData),
	/// Display the current configuration.
	Show,
	/// Start an attendance session and print its nonce. Requires 'StartData'.
	Start(StartData),
	/// Display the teacher address.
	Teacher,
	/// Update the configuration. Requires 'UpdateData'.
	Update(UpdateData),
}

/// Deploy subcommand input.
#[derive(Args, Debug)]
pub struct DeployData {
	/// Hash of the installed contract Wasm (32-byte hex string).
	#[clap(long = "wasm-hash")]
	pub wasm_hash: Option<String>,
	/// Salt for the contract id (32-byte hex string).
	#[clap(long = "salt")]
	pub salt: Option<String>,
}

/// Lecture subcommand input.
#[derive(Args, Debug)]
pub struct LectureData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
}

/// Enroll subcommand input.
#[derive(Args, Debug)]
pub struct EnrollData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
	/// Roll number.
	#[clap(long = "roll")]
	pub roll_no: Option<u64>,
	/// Student name.
	#[clap(long = "name")]
	pub name: Option<String>,
	/// Student account (G... address).
	#[clap(long = "student")]
	pub student: Option<String>,
	/// CSV roster with `roll_no,name,address` rows.
	#[clap(long = "roster", conflicts_with_all = ["roll_no", "name", "student"])]
	pub roster: Option<PathBuf>,
}

/// Start subcommand input.
#[derive(Args, Debug)]
pub struct StartData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
	/// Session length in seconds.
	#[clap(long = "duration", default_value_t = DEFAULT_SESSION_SECONDS)]
	pub duration_seconds: u64,
}

/// Mark subcommand input.
#[derive(Args, Debug)]
pub struct MarkData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
	/// Session nonce (32-byte hex string).
	#[clap(long = "nonce")]
	pub nonce: String,
}

/// Attendance and enrollment query input.
#[derive(Args, Debug)]
pub struct StudentData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
	/// Student account (G... address). Defaults to the source account.
	#[clap(long = "student")]
	pub student: Option<String>,
}

/// Report subcommand input.
#[derive(Args, Debug)]
pub struct ReportData {
	/// Lecture id.
	#[clap(long = "lecture")]
	pub lecture_id: u64,
	/// CSV roster listing the students to report on.
	#[clap(long = "roster")]
	pub roster: PathBuf,
}

/// Configuration update subcommand input.
#[derive(Args, Debug)]
pub struct UpdateData {
	/// Attendance contract id (C... address).
	#[clap(long = "contract-id")]
	pub contract_id: Option<String>,
	/// Known deployment to switch to (see `networks`).
	#[clap(long = "network", conflicts_with_all = ["contract_id", "passphrase"])]
	pub network: Option<String>,
	/// Network passphrase.
	#[clap(long = "passphrase")]
	pub passphrase: Option<String>,
	/// Source account (G... address).
	#[clap(long = "source")]
	pub source_account: Option<String>,
	/// Transaction fee, in stroops.
	#[clap(long = "fee")]
	pub fee: Option<u32>,
	/// Transaction timeout, in seconds.
	#[clap(long = "timeout")]
	pub timeout_in_seconds: Option<u64>,
}

impl DeployData {
	/// Builds the deployment request.
	pub fn to_request(
		&self, config: &ClientConfig, source: Address,
	) -> Result<DeployRequest, LuminaError> {
		let wasm_hash = match &self.wasm_hash {
			Some(hash) => BytesN::from_str(hash)?,
			None => {
				warn!("No wasm hash given. Using zeroes.");
				BytesN([0; 32])
			},
		};
		let salt = self.salt.as_deref().map(BytesN::from_str).transpose()?;

		Ok(DeployRequest {
			network_passphrase: config.network_passphrase.clone(),
			source,
			wasm_hash,
			salt,
			options: MethodOptions {
				fee: config.fee,
				timeout_in_seconds: config.timeout_in_seconds,
				simulate: true,
			},
		})
	}
}

impl EnrollData {
	/// Collects the students to enroll, from the roster or the single student flags.
	pub fn to_students(&self) -> Result<Vec<Student>, LuminaError> {
		if let Some(roster) = &self.roster {
			let records = CSVFileStorage::<EnrollmentRecord>::new(roster.clone()).load()?;
			return records.into_iter().map(Student::try_from).collect();
		}

		let roll_no = self
			.roll_no
			.ok_or_else(|| LuminaError::ValidationError("Missing roll number".to_string()))?;
		let name =
			self.name.clone().ok_or_else(|| LuminaError::ValidationError("Missing name".to_string()))?;
		let address = self
			.student
			.as_deref()
			.ok_or_else(|| LuminaError::ValidationError("Missing student address".to_string()))
			.and_then(Address::from_str)?;

		Ok(vec![Student { address, name, roll_no }])
	}
}

impl StudentData {
	/// The queried student, defaulting to `source`.
	pub fn student_or(&self, source: &Address) -> Result<Address, LuminaError> {
		self.student.as_deref().map_or(Ok(source.clone()), Address::from_str)
	}
}

/// Builds a client for the configured contract on the local ledger.
pub fn build_client(
	config: &ClientConfig, sandbox: Arc<Sandbox>,
) -> Result<Client<Sandbox>, LuminaError> {
	let source = load_source(config)?;
	let config = ClientConfig { source_account: source.to_string(), ..config.clone() };
	Client::new(config, sandbox)
}

/// Handles the `deploy` command.
pub async fn handle_deploy(
	config: &mut ClientConfig, sandbox: Arc<Sandbox>, data: DeployData,
) -> Result<(), LuminaError> {
	let source = load_source(config)?;
	let request = data.to_request(config, source)?;
	let contract = AttendanceContract::deploy(sandbox, request).await?;
	info!("Attendance contract deployed at {}", contract.address());

	config.contract_id = contract.address().to_string();
	save_config(config)
}

/// Handles the `enroll` command.
pub async fn handle_enroll(client: &Client<Sandbox>, data: EnrollData) -> Result<(), LuminaError> {
	let students = data.to_students()?;
	let total = students.len();
	let enrolled = client.enroll_roster(data.lecture_id, students).await?;
	info!(
		"Enrolled {} of {} students in lecture {}.",
		enrolled, total, data.lecture_id
	);
	Ok(())
}

/// Handles the `mark` command.
pub async fn handle_mark(client: &Client<Sandbox>, data: MarkData) -> Result<(), LuminaError> {
	let nonce = Nonce::from_str(&data.nonce)?;
	client.mark_attendance(data.lecture_id, nonce).await?;
	info!("{} marked present in lecture {}.", client.source(), data.lecture_id);
	Ok(())
}

/// Handles the `report` command.
pub async fn handle_report(client: &Client<Sandbox>, data: ReportData) -> Result<(), LuminaError> {
	let roster = CSVFileStorage::<EnrollmentRecord>::new(data.roster).load()?;
	let students: Vec<Address> = roster
		.into_iter()
		.map(|record| Student::try_from(record).map(|student| student.address))
		.collect::<Result<_, _>>()?;

	let records: Vec<AttendanceRecord> =
		client.attendance_report(data.lecture_id, &students).await?;
	let present = records.iter().filter(|record| record.present()).count();

	let filepath = get_file_path(&format!("attendance-{}", data.lecture_id), FileType::Csv)?;
	let mut storage = CSVFileStorage::<AttendanceRecord>::new(filepath);
	storage.save(records)?;

	info!(
		"{} of {} present. Report saved at \"{}\".",
		present,
		students.len(),
		storage.filepath().display()
	);

	Ok(())
}

/// Prints the contract error table.
pub fn handle_errors() {
	for (code, name) in ERRORS {
		println!("{:>3}  {}", code, name);
	}
}

/// Prints the known deployments.
pub fn handle_networks() {
	for network in networks::ALL {
		println!(
			"{}: {} ({})",
			network.name, network.contract_id, network.network_passphrase
		);
	}
}

/// Applies a configuration update, validating the result.
pub fn apply_update(config: &mut ClientConfig, data: UpdateData) -> Result<(), LuminaError> {
	let mut updated = config.clone();

	if let Some(name) = data.network {
		let network = find_network(networks::ALL, &name)?;
		updated.contract_id = network.contract_id.to_string();
		updated.network_passphrase = network.network_passphrase.to_string();
	}

	if let Some(contract_id) = data.contract_id {
		updated.contract_id = contract_id;
	}

	if let Some(passphrase) = data.passphrase {
		updated.network_passphrase = passphrase;
	}

	if let Some(source_account) = data.source_account {
		updated.source_account = source_account;
	}

	if let Some(fee) = data.fee {
		updated.fee = fee;
	}

	if let Some(timeout) = data.timeout_in_seconds {
		updated.timeout_in_seconds = timeout;
	}

	updated.validate()?;
	*config = updated;

	Ok(())
}

/// Handles the CLI project configuration update.
pub fn handle_update(config: &mut ClientConfig, data: UpdateData) -> Result<(), LuminaError> {
	apply_update(config, data)?;
	save_config(config)
}
