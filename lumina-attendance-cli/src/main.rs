//! # Lumina Attendance CLI
//!
//! This crate provides a CLI interface to use the `lumina-attendance` library
//! against a local ledger persisted in the `assets` directory.

#![warn(trivial_casts)]
#![deny(
	absolute_paths_not_starting_with_crate, deprecated, future_incompatible, missing_docs,
	nonstandard_style, unreachable_code, unreachable_patterns
)]
#![forbid(unsafe_code)]
#![deny(
	// Complexity
 	clippy::unnecessary_cast,
	clippy::needless_question_mark,
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

mod cli;
mod fs;

use clap::Parser;
use cli::*;
use dotenv::dotenv;
use env_logger::{init_from_env, Env};
use fs::{load_config, load_sandbox, save_sandbox};
use log::{debug, info};
use lumina_attendance::{error::LuminaError, ClientConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), LuminaError> {
	dotenv().ok();
	init_from_env(Env::default().filter_or("LOG_LEVEL", "info"));
	let mut config: ClientConfig = load_config()?;
	let sandbox = Arc::new(load_sandbox(&config.network_passphrase)?);

	match Cli::parse().mode {
		Mode::Attendance(data) => {
			let client = build_client(&config, sandbox)?;
			let student = data.student_or(client.source())?;
			let present = client.get_attendance(data.lecture_id, &student).await?;
			info!("{} present in lecture {}: {}", student, data.lecture_id, present);
		},
		Mode::Deploy(data) => {
			handle_deploy(&mut config, sandbox.clone(), data).await?;
			save_sandbox(&sandbox).await?;
		},
		Mode::Enroll(data) => {
			let client = build_client(&config, sandbox.clone())?;
			handle_enroll(&client, data).await?;
			save_sandbox(&sandbox).await?;
		},
		Mode::Enrollment(data) => {
			let client = build_client(&config, sandbox)?;
			let student = data.student_or(client.source())?;
			match client.get_student_enrollment(data.lecture_id, &student).await? {
				Some(enrollment) => info!("Enrollment:\n{:#?}", enrollment),
				None => info!("{} is not enrolled in lecture {}.", student, data.lecture_id),
			}
		},
		Mode::Errors => handle_errors(),
		Mode::Initialize => {
			let client = build_client(&config, sandbox.clone())?;
			client.initialize().await?;
			info!("Contract initialized. Teacher: {}", client.source());
			save_sandbox(&sandbox).await?;
		},
		Mode::Lecture(data) => {
			let client = build_client(&config, sandbox.clone())?;
			client.create_lecture(data.lecture_id).await?;
			info!("Lecture {} created.", data.lecture_id);
			save_sandbox(&sandbox).await?;
		},
		Mode::Mark(data) => {
			let client = build_client(&config, sandbox.clone())?;
			handle_mark(&client, data).await?;
			save_sandbox(&sandbox).await?;
		},
		Mode::Networks => handle_networks(),
		Mode::Report(data) => {
			let client = build_client(&config, sandbox)?;
			handle_report(&client, data).await?;
		},
		Mode::Show => info!("Client config:\n{:#?}", config),
		Mode::Start(data) => {
			let client = build_client(&config, sandbox.clone())?;
			let nonce = client.start_attendance(data.lecture_id, data.duration_seconds).await?;
			debug!("Session length: {}s", data.duration_seconds);
			info!("Attendance open for lecture {}. Nonce: {}", data.lecture_id, nonce);
			save_sandbox(&sandbox).await?;
		},
		Mode::Teacher => {
			let client = build_client(&config, sandbox)?;
			info!("Teacher: {}", client.get_teacher().await?);
		},
		Mode::Update(data) => handle_update(&mut config, data)?,
	};

	Ok(())
}
