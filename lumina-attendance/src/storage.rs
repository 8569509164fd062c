//! # Storage Module.
//!
//! This module contains generic storage traits and implementations, plus the
//! CSV records used for class rosters and attendance reports.

use crate::{address::Address, attendance::Student, error::LuminaError};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{from_reader, to_string_pretty};
use std::{
	fs::File,
	io::{BufReader, Write},
	marker::PhantomData,
	path::PathBuf,
	str::FromStr,
};

/// The main trait to be implemented by different storage types.
pub trait Storage<T> {
	/// The error type.
	type Err;

	/// Loads data from storage.
	fn load(&self) -> Result<T, Self::Err>;
	/// Saves data to storage.
	fn save(&mut self, data: T) -> Result<(), Self::Err>;
}

/// The `CSVFileStorage` struct provides a mechanism for persisting
/// and retrieving structured data to and from CSV files.
///
/// # Examples
///
/// ```no_run
/// use serde::{Serialize, Deserialize};
/// use std::path::PathBuf;
/// use lumina_attendance::storage::{CSVFileStorage, Storage};
///
/// #[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
/// struct Record {
///    roll_no: u64,
///    name: String,
/// }
///
/// let filepath = PathBuf::from("/path/to/your/roster.csv");
/// let mut storage = CSVFileStorage::<Record>::new(filepath);
///
/// let data = vec![Record { roll_no: 1, name: "Alice".into() }];
///
/// // Save the data to the CSV file.
/// storage.save(data.clone()).unwrap();
///
/// // Load the data from the CSV file.
/// let loaded_data = storage.load().unwrap();
/// assert_eq!(data, loaded_data);
/// ```
pub struct CSVFileStorage<T> {
	filepath: PathBuf,
	phantom: PhantomData<T>,
}

impl<T> CSVFileStorage<T> {
	/// Creates a new CSVFileStorage.
	pub fn new(filepath: PathBuf) -> Self {
		Self { filepath, phantom: PhantomData }
	}

	/// Returns the path to the file.
	pub fn filepath(&self) -> &PathBuf {
		&self.filepath
	}
}

impl<T: Serialize + DeserializeOwned + Clone> Storage<Vec<T>> for CSVFileStorage<T> {
	type Err = LuminaError;

	fn load(&self) -> Result<Vec<T>, LuminaError> {
		let file = File::open(&self.filepath).map_err(LuminaError::IOError)?;
		let mut reader =
			ReaderBuilder::new().trim(csv::Trim::All).from_reader(BufReader::new(file));

		reader
			.deserialize()
			.map(|result| result.map_err(|e| LuminaError::FileIOError(e.to_string())))
			.collect()
	}

	fn save(&mut self, data: Vec<T>) -> Result<(), LuminaError> {
		let mut writer = WriterBuilder::new()
			.from_path(&self.filepath)
			.map_err(|e| LuminaError::FileIOError(e.to_string()))?;

		for record in &data {
			writer.serialize(record).map_err(|e| LuminaError::FileIOError(e.to_string()))?;
		}

		writer.flush().map_err(|e| LuminaError::FileIOError(e.to_string()))?;

		Ok(())
	}
}

/// The `JSONFileStorage` struct provides a mechanism for persisting
/// and retrieving structured data to and from JSON files.
pub struct JSONFileStorage<T> {
	filepath: PathBuf,
	phantom: PhantomData<T>,
}

impl<T> JSONFileStorage<T> {
	/// Creates a new JSONFileStorage.
	pub fn new(filepath: PathBuf) -> Self {
		Self { filepath, phantom: PhantomData }
	}

	/// Returns the path to the file.
	pub fn filepath(&self) -> &PathBuf {
		&self.filepath
	}
}

impl<T: Serialize + DeserializeOwned + Clone> Storage<T> for JSONFileStorage<T> {
	type Err = LuminaError;

	fn load(&self) -> Result<T, Self::Err> {
		let file = File::open(&self.filepath).map_err(LuminaError::IOError)?;
		let reader = BufReader::new(file);
		from_reader(reader).map_err(|e| LuminaError::ParsingError(e.to_string()))
	}

	fn save(&mut self, data: T) -> Result<(), Self::Err> {
		let json_str =
			to_string_pretty(&data).map_err(|e| LuminaError::ParsingError(e.to_string()))?;

		let mut file = File::create(&self.filepath).map_err(LuminaError::IOError)?;
		file.write_all(json_str.as_bytes()).map_err(LuminaError::IOError)
	}
}

/// Roster row: one student to enroll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
	/// Roll number within the lecture.
	roll_no: u64,
	/// Student name.
	name: String,
	/// Student account, strkey encoded.
	address: String,
}

impl EnrollmentRecord {
	/// Creates a new enrollment record.
	pub fn new(roll_no: u64, name: String, address: String) -> Self {
		Self { roll_no, name, address }
	}

	/// Returns the roll number.
	pub fn roll_no(&self) -> u64 {
		self.roll_no
	}

	/// Returns the student name.
	pub fn name(&self) -> &String {
		&self.name
	}

	/// Returns the student address.
	pub fn address(&self) -> &String {
		&self.address
	}
}

impl From<Student> for EnrollmentRecord {
	fn from(student: Student) -> Self {
		Self { roll_no: student.roll_no, name: student.name, address: student.address.to_string() }
	}
}

impl TryFrom<EnrollmentRecord> for Student {
	type Error = LuminaError;

	fn try_from(record: EnrollmentRecord) -> Result<Self, Self::Error> {
		let EnrollmentRecord { roll_no, name, address } = record;
		let address = Address::from_str(&address).map_err(|e| {
			LuminaError::ConversionError(format!("Roll {}: {}", roll_no, e))
		})?;
		Ok(Student { address, name, roll_no })
	}
}

/// Report row: attendance of one student in one lecture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
	/// Lecture id.
	lecture_id: u64,
	/// Student account, strkey encoded.
	address: String,
	/// Roll number, empty when not enrolled.
	roll_no: Option<u64>,
	/// Student name, empty when not enrolled.
	name: Option<String>,
	/// Whether the student is marked present.
	present: bool,
}

impl AttendanceRecord {
	/// Creates a report row from what the contract returned.
	pub fn new(
		lecture_id: u64, address: &Address, enrollment: Option<Student>, present: bool,
	) -> Self {
		let (roll_no, name) = match enrollment {
			Some(student) => (Some(student.roll_no), Some(student.name)),
			None => (None, None),
		};
		Self { lecture_id, address: address.to_string(), roll_no, name, present }
	}

	/// Returns the lecture id.
	pub fn lecture_id(&self) -> u64 {
		self.lecture_id
	}

	/// Returns the student address.
	pub fn address(&self) -> &String {
		&self.address
	}

	/// Returns the roll number.
	pub fn roll_no(&self) -> Option<u64> {
		self.roll_no
	}

	/// Returns the student name.
	pub fn name(&self) -> Option<&String> {
		self.name.as_ref()
	}

	/// Returns whether the student was present.
	pub fn present(&self) -> bool {
		self.present
	}
}
