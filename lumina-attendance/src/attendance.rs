//! Auto generated bindings for the Attendance contract.
pub use attendance_contract::*;
/// This module was auto-generated from the contract's published spec entries.
#[allow(clippy::too_many_arguments, clippy::enum_variant_names, dead_code, missing_docs)]
pub mod attendance_contract {
	use crate::{
		address::Address,
		contract::{
			AssembledTransaction, Contract, ContractCall, ContractErrorCode, ContractReturn,
			DeployRequest, Invoker,
		},
		error::LuminaError,
		network::{Network, TESTNET_PASSPHRASE},
		scval::{BytesN, IntoScVal, ScStruct, ScType, ScVal, TryFromScVal},
		spec::{ContractSpec, ErrorCaseSpec, ErrorEnumSpec, FunctionSpec, ParamSpec, StructSpec},
	};
	use std::sync::{Arc, LazyLock};

	fn __param(name: &str, ty: ScType) -> ParamSpec {
		ParamSpec { name: ::std::borrow::ToOwned::to_owned(name), ty }
	}

	fn __result(ok: ScType) -> ScType {
		ScType::Result {
			ok: ::std::boxed::Box::new(ok),
			error: ::std::boxed::Box::new(ScType::Error),
		}
	}

	fn __function(name: &str, doc: &str, inputs: Vec<ParamSpec>, output: ScType) -> FunctionSpec {
		FunctionSpec {
			name: ::std::borrow::ToOwned::to_owned(name),
			doc: ::std::borrow::ToOwned::to_owned(doc),
			inputs,
			output,
		}
	}

	fn __spec() -> ContractSpec {
		ContractSpec {
			functions: ::std::vec![
				__function(
					"initialize",
					"Initialize the contract, setting the teacher/admin.\nCan only be called once.",
					::std::vec![__param("teacher", ScType::Address)],
					__result(ScType::Void),
				),
				__function(
					"create_lecture",
					"Allows the teacher to create a new lecture entry.",
					::std::vec![
						__param("teacher", ScType::Address),
						__param("lecture_id", ScType::U64),
					],
					__result(ScType::Void),
				),
				__function(
					"add_student",
					"Allows the teacher to add/enroll a student to a specific lecture.",
					::std::vec![
						__param("teacher", ScType::Address),
						__param("lecture_id", ScType::U64),
						__param("roll_no", ScType::U64),
						__param("name", ScType::String),
						__param("student_address", ScType::Address),
					],
					__result(ScType::Void),
				),
				__function(
					"start_attendance",
					"Starts an attendance session for a given lecture.\nGenerates a random nonce and sets an expiry time (e.g., 5 minutes).\nReturns the nonce to be used off-chain (e.g., in a QR code).",
					::std::vec![
						__param("teacher", ScType::Address),
						__param("lecture_id", ScType::U64),
						__param("duration_seconds", ScType::U64),
					],
					__result(ScType::BytesN(32)),
				),
				__function(
					"mark_attendance",
					"Allows a student to mark their attendance using the nonce provided off-chain.",
					::std::vec![
						__param("student", ScType::Address),
						__param("lecture_id", ScType::U64),
						__param("nonce", ScType::BytesN(32)),
					],
					__result(ScType::Void),
				),
				__function(
					"get_attendance",
					"Check if a student is marked present for a specific lecture.",
					::std::vec![
						__param("lecture_id", ScType::U64),
						__param("student", ScType::Address),
					],
					ScType::Bool,
				),
				__function(
					"get_student_enrollment",
					"Get the enrollment details for a specific student in a lecture.",
					::std::vec![
						__param("lecture_id", ScType::U64),
						__param("student_address", ScType::Address),
					],
					ScType::Option(::std::boxed::Box::new(ScType::Udt(
						::std::borrow::ToOwned::to_owned("Student"),
					))),
				),
				__function(
					"get_teacher",
					"Get the teacher address.",
					::std::vec![],
					__result(ScType::Address),
				),
			],
			structs: ::std::vec![StructSpec {
				name: ::std::borrow::ToOwned::to_owned("Student"),
				fields: ::std::vec![
					__param("address", ScType::Address),
					__param("name", ScType::String),
					__param("roll_no", ScType::U64),
				],
			}],
			errors: ErrorEnumSpec {
				name: ::std::borrow::ToOwned::to_owned("Error"),
				cases: ERRORS
					.iter()
					.map(|(value, name)| ErrorCaseSpec {
						name: ::std::borrow::ToOwned::to_owned(*name),
						value: *value,
					})
					.collect(),
			},
			xdr_entries: ATTENDANCE_SPEC_XDR,
		}
	}

	///The parsed interface of the contract.
	pub static ATTENDANCE_SPEC: LazyLock<ContractSpec> = LazyLock::new(__spec);

	#[rustfmt::skip]
	const __SPEC_XDR: &[&str] = &[
		"AAAABAAAAAAAAAAAAAAABUVycm9yAAAAAAAACgAAAAAAAAAOTm90SW5pdGlhbGl6ZWQAAAAAAAEAAAAAAAAAEkFscmVhZHlJbml0aWFsaXplZAAAAAAAAgAAAAAAAAAMVW5hdXRob3JpemVkAAAAAwAAAAAAAAAPTGVjdHVyZU5vdEZvdW5kAAAAAAQAAAAAAAAAEFNlc3Npb25Ob3RBY3RpdmUAAAAFAAAAAAAAAA5TZXNzaW9uRXhwaXJlZAAAAAAABgAAAAAAAAAMSW52YWxpZE5vbmNlAAAABwAAAAAAAAANQWxyZWFkeU1hcmtlZAAAAAAAAAgAAAAAAAAAGkF0dGVuZGFuY2VQZXJpb2ROb3RTdGFydGVkAAAAAAAJAAAAAAAAABZTdHVkZW50QWxyZWFkeUVucm9sbGVkAAAAAAAK",
		"AAAAAQAAAAAAAAAAAAAAB1N0dWRlbnQAAAAAAwAAAAAAAAAHYWRkcmVzcwAAAAATAAAAAAAAAARuYW1lAAAAEAAAAAAAAAAHcm9sbF9ubwAAAAAG",
		"AAAAAAAAAExJbml0aWFsaXplIHRoZSBjb250cmFjdCwgc2V0dGluZyB0aGUgdGVhY2hlci9hZG1pbi4KQ2FuIG9ubHkgYmUgY2FsbGVkIG9uY2UuAAAACmluaXRpYWxpemUAAAAAAAEAAAAAAAAAB3RlYWNoZXIAAAAAEwAAAAEAAAPpAAAD7QAAAAAAAAAD",
		"AAAAAAAAADFBbGxvd3MgdGhlIHRlYWNoZXIgdG8gY3JlYXRlIGEgbmV3IGxlY3R1cmUgZW50cnkuAAAAAAAADmNyZWF0ZV9sZWN0dXJlAAAAAAACAAAAAAAAAAd0ZWFjaGVyAAAAABMAAAAAAAAACmxlY3R1cmVfaWQAAAAAAAYAAAABAAAD6QAAA+0AAAAAAAAAAw==",
		"AAAAAAAAAEFBbGxvd3MgdGhlIHRlYWNoZXIgdG8gYWRkL2Vucm9sbCBhIHN0dWRlbnQgdG8gYSBzcGVjaWZpYyBsZWN0dXJlLgAAAAAAAAthZGRfc3R1ZGVudAAAAAAFAAAAAAAAAAd0ZWFjaGVyAAAAABMAAAAAAAAACmxlY3R1cmVfaWQAAAAAAAYAAAAAAAAAB3JvbGxfbm8AAAAABgAAAAAAAAAEbmFtZQAAABAAAAAAAAAAD3N0dWRlbnRfYWRkcmVzcwAAAAATAAAAAQAAA+kAAAPtAAAAAAAAAAM=",
		"AAAAAAAAALJTdGFydHMgYW4gYXR0ZW5kYW5jZSBzZXNzaW9uIGZvciBhIGdpdmVuIGxlY3R1cmUuCkdlbmVyYXRlcyBhIHJhbmRvbSBub25jZSBhbmQgc2V0cyBhbiBleHBpcnkgdGltZSAoZS5nLiwgNSBtaW51dGVzKS4KUmV0dXJucyB0aGUgbm9uY2UgdG8gYmUgdXNlZCBvZmYtY2hhaW4gKGUuZy4sIGluIGEgUVIgY29kZSkuAAAAAAAQc3RhcnRfYXR0ZW5kYW5jZQAAAAMAAAAAAAAAB3RlYWNoZXIAAAAAEwAAAAAAAAAKbGVjdHVyZV9pZAAAAAAABgAAAAAAAAAQZHVyYXRpb25fc2Vjb25kcwAAAAYAAAABAAAD6QAAA+4AAAAgAAAAAw==",
		"AAAAAAAAAE1BbGxvd3MgYSBzdHVkZW50IHRvIG1hcmsgdGhlaXIgYXR0ZW5kYW5jZSB1c2luZyB0aGUgbm9uY2UgcHJvdmlkZWQgb2ZmLWNoYWluLgAAAAAAAA9tYXJrX2F0dGVuZGFuY2UAAAAAAwAAAAAAAAAHc3R1ZGVudAAAAAATAAAAAAAAAApsZWN0dXJlX2lkAAAAAAAGAAAAAAAAAAVub25jZQAAAAAAA+4AAAAgAAAAAQAAA+kAAAPtAAAAAAAAAAM=",
		"AAAAAAAAADxDaGVjayBpZiBhIHN0dWRlbnQgaXMgbWFya2VkIHByZXNlbnQgZm9yIGEgc3BlY2lmaWMgbGVjdHVyZS4AAAAOZ2V0X2F0dGVuZGFuY2UAAAAAAAIAAAAAAAAACmxlY3R1cmVfaWQAAAAAAAYAAAAAAAAAB3N0dWRlbnQAAAAAEwAAAAEAAAAB",
		"AAAAAAAAAD9HZXQgdGhlIGVucm9sbG1lbnQgZGV0YWlscyBmb3IgYSBzcGVjaWZpYyBzdHVkZW50IGluIGEgbGVjdHVyZS4AAAAAFmdldF9zdHVkZW50X2Vucm9sbG1lbnQAAAAAAAIAAAAAAAAACmxlY3R1cmVfaWQAAAAAAAYAAAAAAAAAD3N0dWRlbnRfYWRkcmVzcwAAAAATAAAAAQAAA+gAAAfQAAAAB1N0dWRlbnQA",
		"AAAAAAAAABhHZXQgdGhlIHRlYWNoZXIgYWRkcmVzcy4AAAALZ2V0X3RlYWNoZXIAAAAAAAAAAAEAAAPpAAAAEwAAAAM=",
	];
	/// The spec entries published with the contract, base64 XDR.
	pub static ATTENDANCE_SPEC_XDR: &[&str] = __SPEC_XDR;

	/// Known deployments of the contract.
	pub mod networks {
		use super::*;

		/// Test network deployment.
		pub const TESTNET: Network = Network {
			name: "testnet",
			network_passphrase: TESTNET_PASSPHRASE,
			contract_id: "CA3BC5TPJXTKCQ7IWYPIZCHAL3A6FY7XOC77IGRM7ODGKDTYO4I423Z5",
		};

		/// All deployments.
		pub const ALL: &[Network] = &[TESTNET];
	}

	/// Contract error codes and their names.
	pub const ERRORS: &[(u32, &str)] = &[
		(1, "NotInitialized"),
		(2, "AlreadyInitialized"),
		(3, "Unauthorized"),
		(4, "LectureNotFound"),
		(5, "SessionNotActive"),
		(6, "SessionExpired"),
		(7, "InvalidNonce"),
		(8, "AlreadyMarked"),
		(9, "AttendancePeriodNotStarted"),
		(10, "StudentAlreadyEnrolled"),
	];

	///Custom error type `Error` of the contract
	#[derive(
		Clone,
		Copy,
		Debug,
		PartialEq,
		Eq,
		Hash,
		PartialOrd,
		Ord,
		::thiserror::Error,
	)]
	#[repr(u32)]
	pub enum AttendanceError {
		#[error("NotInitialized")]
		NotInitialized = 1,
		#[error("AlreadyInitialized")]
		AlreadyInitialized = 2,
		#[error("Unauthorized")]
		Unauthorized = 3,
		#[error("LectureNotFound")]
		LectureNotFound = 4,
		#[error("SessionNotActive")]
		SessionNotActive = 5,
		#[error("SessionExpired")]
		SessionExpired = 6,
		#[error("InvalidNonce")]
		InvalidNonce = 7,
		#[error("AlreadyMarked")]
		AlreadyMarked = 8,
		#[error("AttendancePeriodNotStarted")]
		AttendancePeriodNotStarted = 9,
		#[error("StudentAlreadyEnrolled")]
		StudentAlreadyEnrolled = 10,
	}
	impl AttendanceError {
		/// All cases, in code order.
		pub const ALL: [AttendanceError; 10] = [
			AttendanceError::NotInitialized,
			AttendanceError::AlreadyInitialized,
			AttendanceError::Unauthorized,
			AttendanceError::LectureNotFound,
			AttendanceError::SessionNotActive,
			AttendanceError::SessionExpired,
			AttendanceError::InvalidNonce,
			AttendanceError::AlreadyMarked,
			AttendanceError::AttendancePeriodNotStarted,
			AttendanceError::StudentAlreadyEnrolled,
		];
		/// The case name, as listed in [`ERRORS`].
		pub fn message(&self) -> &'static str {
			let code = ContractErrorCode::code(self);
			ERRORS.iter().find(|(c, _)| *c == code).map(|(_, name)| *name).unwrap_or("Unknown")
		}
	}
	impl ContractErrorCode for AttendanceError {
		fn from_code(code: u32) -> ::core::option::Option<Self> {
			Self::ALL.iter().copied().find(|case| *case as u32 == code)
		}
		fn code(&self) -> u32 {
			*self as u32
		}
	}

	/// The 32-byte attendance session nonce.
	pub type Nonce = BytesN<32>;

	///`Student(address,name,roll_no)`
	#[derive(
		Clone,
		Debug,
		PartialEq,
		Eq,
		Hash,
		::serde::Serialize,
		::serde::Deserialize,
	)]
	pub struct Student {
		pub address: Address,
		pub name: ::std::string::String,
		pub roll_no: u64,
	}
	impl IntoScVal for Student {
		fn into_sc_val(self) -> ScVal {
			ScVal::from_fields(::std::vec![
				("address", self.address.into_sc_val()),
				("name", self.name.into_sc_val()),
				("roll_no", self.roll_no.into_sc_val()),
			])
		}
	}
	impl TryFromScVal for Student {
		fn try_from_sc_val(val: ScVal) -> ::core::result::Result<Self, LuminaError> {
			let mut fields = ScStruct::try_from_sc_val(val)?;
			Ok(Self {
				address: fields.take("address")?,
				name: fields.take("name")?,
				roll_no: fields.take("roll_no")?,
			})
		}
	}

	pub struct AttendanceContract<I>(Contract<I>);
	impl<I> ::core::clone::Clone for AttendanceContract<I> {
		fn clone(&self) -> Self {
			Self(::core::clone::Clone::clone(&self.0))
		}
	}
	impl<I> ::core::ops::Deref for AttendanceContract<I> {
		type Target = Contract<I>;
		fn deref(&self) -> &Self::Target {
			&self.0
		}
	}
	impl<I> ::core::fmt::Debug for AttendanceContract<I> {
		fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
			f.debug_tuple(::core::stringify!(AttendanceContract)).field(&self.0).finish()
		}
	}
	impl<I> ::core::convert::From<Contract<I>> for AttendanceContract<I> {
		fn from(contract: Contract<I>) -> Self {
			Self(contract)
		}
	}
	impl<I: Invoker> AttendanceContract<I> {
		/// Creates a new contract instance at `address`, invoked through `invoker`
		/// on behalf of `source`. The contract derefs to a [`Contract`] object.
		pub fn new(
			address: Address, network_passphrase: impl Into<::std::string::String>,
			source: Address, invoker: Arc<I>,
		) -> Self {
			Self(Contract::new(
				address,
				network_passphrase.into(),
				source,
				&ATTENDANCE_SPEC,
				invoker,
			))
		}
		/// Creates a contract instance for a known deployment.
		pub fn from_network(
			network: &Network, source: Address, invoker: Arc<I>,
		) -> ::core::result::Result<Self, LuminaError> {
			Ok(Self::new(
				network.contract_address()?,
				network.network_passphrase,
				source,
				invoker,
			))
		}
		/// Deploys a new instance of the contract from an installed Wasm hash and
		/// returns a handle to it.
		pub async fn deploy(
			invoker: Arc<I>, request: DeployRequest,
		) -> ::core::result::Result<Self, LuminaError> {
			let address = invoker.deploy(&request).await?;
			Ok(Self::new(
				address,
				request.network_passphrase,
				request.source,
				invoker,
			))
		}
		/// Restores an assembled transaction serialized with `to_json`.
		pub fn tx_from_json<D: ContractReturn>(
			&self, json: &str,
		) -> ::core::result::Result<AssembledTransaction<I, D>, LuminaError> {
			let tx = AssembledTransaction::<I, D>::from_json(self.invoker(), self.spec(), json)?;
			if tx.request().contract_id != *self.address() {
				return Err(LuminaError::ValidationError(::std::format!(
					"Transaction targets {}, not {}",
					tx.request().contract_id,
					self.address()
				)));
			}
			Ok(tx)
		}
		fn call<D: ContractReturn>(
			&self, call: impl ::core::convert::Into<AttendanceContractCalls>,
		) -> ContractCall<I, D> {
			let call = call.into();
			self.0.method(call.function_name(), call.into_args())
		}
		///Calls the contract's `initialize` function
		pub fn initialize(
			&self, teacher: Address,
		) -> ContractCall<I, ::core::result::Result<(), AttendanceError>> {
			self.call(InitializeCall { teacher })
		}
		///Calls the contract's `create_lecture` function
		pub fn create_lecture(
			&self, teacher: Address, lecture_id: u64,
		) -> ContractCall<I, ::core::result::Result<(), AttendanceError>> {
			self.call(CreateLectureCall { teacher, lecture_id })
		}
		///Calls the contract's `add_student` function
		pub fn add_student(
			&self, teacher: Address, lecture_id: u64, roll_no: u64, name: ::std::string::String,
			student_address: Address,
		) -> ContractCall<I, ::core::result::Result<(), AttendanceError>> {
			self.call(AddStudentCall { teacher, lecture_id, roll_no, name, student_address })
		}
		///Calls the contract's `start_attendance` function
		pub fn start_attendance(
			&self, teacher: Address, lecture_id: u64, duration_seconds: u64,
		) -> ContractCall<I, ::core::result::Result<Nonce, AttendanceError>> {
			self.call(StartAttendanceCall { teacher, lecture_id, duration_seconds })
		}
		///Calls the contract's `mark_attendance` function
		pub fn mark_attendance(
			&self, student: Address, lecture_id: u64, nonce: Nonce,
		) -> ContractCall<I, ::core::result::Result<(), AttendanceError>> {
			self.call(MarkAttendanceCall { student, lecture_id, nonce })
		}
		///Calls the contract's `get_attendance` function
		pub fn get_attendance(&self, lecture_id: u64, student: Address) -> ContractCall<I, bool> {
			self.call(GetAttendanceCall { lecture_id, student })
		}
		///Calls the contract's `get_student_enrollment` function
		pub fn get_student_enrollment(
			&self, lecture_id: u64, student_address: Address,
		) -> ContractCall<I, ::core::option::Option<Student>> {
			self.call(GetStudentEnrollmentCall { lecture_id, student_address })
		}
		///Calls the contract's `get_teacher` function
		pub fn get_teacher(&self) -> ContractCall<I, ::core::result::Result<Address, AttendanceError>> {
			self.call(GetTeacherCall)
		}
	}

	fn __next_arg<T: TryFromScVal>(
		args: &mut ::std::vec::IntoIter<ScVal>, name: &str,
	) -> ::core::result::Result<T, LuminaError> {
		let val = args.next().ok_or_else(|| {
			LuminaError::ConversionError(::std::format!("Missing argument \"{}\"", name))
		})?;
		T::try_from_sc_val(val)
	}

	///Container type for all input parameters for the `initialize` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct InitializeCall {
		pub teacher: Address,
	}
	///Container type for all input parameters for the `create_lecture` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct CreateLectureCall {
		pub teacher: Address,
		pub lecture_id: u64,
	}
	///Container type for all input parameters for the `add_student` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct AddStudentCall {
		pub teacher: Address,
		pub lecture_id: u64,
		pub roll_no: u64,
		pub name: ::std::string::String,
		pub student_address: Address,
	}
	///Container type for all input parameters for the `start_attendance` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct StartAttendanceCall {
		pub teacher: Address,
		pub lecture_id: u64,
		pub duration_seconds: u64,
	}
	///Container type for all input parameters for the `mark_attendance` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct MarkAttendanceCall {
		pub student: Address,
		pub lecture_id: u64,
		pub nonce: Nonce,
	}
	///Container type for all input parameters for the `get_attendance` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct GetAttendanceCall {
		pub lecture_id: u64,
		pub student: Address,
	}
	///Container type for all input parameters for the `get_student_enrollment` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct GetStudentEnrollmentCall {
		pub lecture_id: u64,
		pub student_address: Address,
	}
	///Container type for all input parameters for the `get_teacher` function
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub struct GetTeacherCall;

	///Container type for all of the contract's calls
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum AttendanceContractCalls {
		Initialize(InitializeCall),
		CreateLecture(CreateLectureCall),
		AddStudent(AddStudentCall),
		StartAttendance(StartAttendanceCall),
		MarkAttendance(MarkAttendanceCall),
		GetAttendance(GetAttendanceCall),
		GetStudentEnrollment(GetStudentEnrollmentCall),
		GetTeacher(GetTeacherCall),
	}
	impl AttendanceContractCalls {
		/// Name of the contract function.
		pub fn function_name(&self) -> &'static str {
			match self {
				Self::Initialize(_) => "initialize",
				Self::CreateLecture(_) => "create_lecture",
				Self::AddStudent(_) => "add_student",
				Self::StartAttendance(_) => "start_attendance",
				Self::MarkAttendance(_) => "mark_attendance",
				Self::GetAttendance(_) => "get_attendance",
				Self::GetStudentEnrollment(_) => "get_student_enrollment",
				Self::GetTeacher(_) => "get_teacher",
			}
		}
		/// Encodes the call arguments in declaration order.
		pub fn into_args(self) -> ::std::vec::Vec<ScVal> {
			match self {
				Self::Initialize(c) => ::std::vec![c.teacher.into_sc_val()],
				Self::CreateLecture(c) => {
					::std::vec![c.teacher.into_sc_val(), c.lecture_id.into_sc_val()]
				},
				Self::AddStudent(c) => ::std::vec![
					c.teacher.into_sc_val(),
					c.lecture_id.into_sc_val(),
					c.roll_no.into_sc_val(),
					c.name.into_sc_val(),
					c.student_address.into_sc_val(),
				],
				Self::StartAttendance(c) => ::std::vec![
					c.teacher.into_sc_val(),
					c.lecture_id.into_sc_val(),
					c.duration_seconds.into_sc_val(),
				],
				Self::MarkAttendance(c) => ::std::vec![
					c.student.into_sc_val(),
					c.lecture_id.into_sc_val(),
					c.nonce.into_sc_val(),
				],
				Self::GetAttendance(c) => {
					::std::vec![c.lecture_id.into_sc_val(), c.student.into_sc_val()]
				},
				Self::GetStudentEnrollment(c) => {
					::std::vec![c.lecture_id.into_sc_val(), c.student_address.into_sc_val()]
				},
				Self::GetTeacher(_) => ::std::vec![],
			}
		}
		/// Decodes a call from a function name and its arguments.
		pub fn decode(
			function: &str, args: ::std::vec::Vec<ScVal>,
		) -> ::core::result::Result<Self, LuminaError> {
			ATTENDANCE_SPEC.check_args(function, &args)?;
			let mut args = args.into_iter();
			let args = &mut args;
			let call = match function {
				"initialize" => Self::Initialize(InitializeCall { teacher: __next_arg(args, "teacher")? }),
				"create_lecture" => Self::CreateLecture(CreateLectureCall {
					teacher: __next_arg(args, "teacher")?,
					lecture_id: __next_arg(args, "lecture_id")?,
				}),
				"add_student" => Self::AddStudent(AddStudentCall {
					teacher: __next_arg(args, "teacher")?,
					lecture_id: __next_arg(args, "lecture_id")?,
					roll_no: __next_arg(args, "roll_no")?,
					name: __next_arg(args, "name")?,
					student_address: __next_arg(args, "student_address")?,
				}),
				"start_attendance" => Self::StartAttendance(StartAttendanceCall {
					teacher: __next_arg(args, "teacher")?,
					lecture_id: __next_arg(args, "lecture_id")?,
					duration_seconds: __next_arg(args, "duration_seconds")?,
				}),
				"mark_attendance" => Self::MarkAttendance(MarkAttendanceCall {
					student: __next_arg(args, "student")?,
					lecture_id: __next_arg(args, "lecture_id")?,
					nonce: __next_arg(args, "nonce")?,
				}),
				"get_attendance" => Self::GetAttendance(GetAttendanceCall {
					lecture_id: __next_arg(args, "lecture_id")?,
					student: __next_arg(args, "student")?,
				}),
				"get_student_enrollment" => Self::GetStudentEnrollment(GetStudentEnrollmentCall {
					lecture_id: __next_arg(args, "lecture_id")?,
					student_address: __next_arg(args, "student_address")?,
				}),
				"get_teacher" => Self::GetTeacher(GetTeacherCall),
				other => {
					return Err(LuminaError::ContractError(::std::format!(
						"Unknown contract function \"{}\"",
						other
					)))
				},
			};
			Ok(call)
		}
	}
	impl ::core::convert::From<InitializeCall> for AttendanceContractCalls {
		fn from(value: InitializeCall) -> Self {
			Self::Initialize(value)
		}
	}
	impl ::core::convert::From<CreateLectureCall> for AttendanceContractCalls {
		fn from(value: CreateLectureCall) -> Self {
			Self::CreateLecture(value)
		}
	}
	impl ::core::convert::From<AddStudentCall> for AttendanceContractCalls {
		fn from(value: AddStudentCall) -> Self {
			Self::AddStudent(value)
		}
	}
	impl ::core::convert::From<StartAttendanceCall> for AttendanceContractCalls {
		fn from(value: StartAttendanceCall) -> Self {
			Self::StartAttendance(value)
		}
	}
	impl ::core::convert::From<MarkAttendanceCall> for AttendanceContractCalls {
		fn from(value: MarkAttendanceCall) -> Self {
			Self::MarkAttendance(value)
		}
	}
	impl ::core::convert::From<GetAttendanceCall> for AttendanceContractCalls {
		fn from(value: GetAttendanceCall) -> Self {
			Self::GetAttendance(value)
		}
	}
	impl ::core::convert::From<GetStudentEnrollmentCall> for AttendanceContractCalls {
		fn from(value: GetStudentEnrollmentCall) -> Self {
			Self::GetStudentEnrollment(value)
		}
	}
	impl ::core::convert::From<GetTeacherCall> for AttendanceContractCalls {
		fn from(value: GetTeacherCall) -> Self {
			Self::GetTeacher(value)
		}
	}
}
