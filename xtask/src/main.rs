// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer automation for the roombook workspace.
//!
//! `cargo test` exercises everything against `SQLite` and needs no services.
//! The MariaDB commands are opt-in: they start a throwaway Docker container,
//! point the ignored backend tests (or the schema parity check) at it and
//! remove it again whether or not the run succeeds.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod mariadb;
mod schema;

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::mariadb::MariaDbContainer;

/// Persistence crate holding the ignored backend validation tests.
const PERSISTENCE_PACKAGE: &str = "roombook-persistence";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:?}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint clippy, docs and formatting
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run the ignored backend tests against a `MariaDB` container
    #[command(visible_alias = "tm")]
    TestMariadb,

    /// Compare the `SQLite` and `MySQL` migration sets on a `MariaDB` container
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::Test => test(),
            Self::TestLibs => test_libs(),
            Self::TestDocs => test_docs(),
            Self::TestMariadb => test_mariadb(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Everything a pull request must pass. Container-backed checks run last.
fn ci() -> Result<()> {
    lint()?;
    run_cargo(&["build", "--all-targets", "--all-features"])?;
    test()?;
    test_mariadb()?;
    verify_migrations()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    run_cargo_nightly(&["fmt", "--all", "--check"])
}

fn lint_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Builds docs for each default member with docs.rs flags.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

fn test() -> Result<()> {
    test_libs()?;
    test_docs()
}

fn test_libs() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])
}

fn test_docs() -> Result<()> {
    run_cargo(&["test", "--doc", "--all-features"])
}

/// Runs the persistence crate's ignored backend tests on `MariaDB`.
///
/// The tests read `DATABASE_URL` and only run when
/// `ROOMBOOK_TEST_BACKEND=mariadb`. They share one database, so they run on a
/// single thread.
fn test_mariadb() -> Result<()> {
    tracing::info!("Starting MariaDB backend validation");
    let container = MariaDbContainer::start("roombook-test-mariadb", "roombook_test", 3307)?;

    let result = cmd!(
        "cargo",
        "test",
        "--package",
        PERSISTENCE_PACKAGE,
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.database_url())
    .env("ROOMBOOK_TEST_BACKEND", "mariadb")
    .run_with_trace();

    drop(container);
    result.wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation passed");
    Ok(())
}

/// Applies both migration sets and compares the resulting schemas.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting schema parity verification");
    let container = MariaDbContainer::start("roombook-verify-migrations", "roombook_verify", 3308)?;

    let sqlite = schema::migrated_sqlite_schema()?;
    let mysql = schema::migrated_mysql_schema(&container.database_url(), container.database())?;
    let mismatches: Vec<String> = schema::diff_schemas(&sqlite, &mysql);

    drop(container);

    if mismatches.is_empty() {
        tracing::info!(tables = sqlite.len(), "Schema parity verified");
        Ok(())
    } else {
        Err(color_eyre::eyre::eyre!(
            "Schema parity check failed:\n{}",
            mismatches.join("\n")
        ))
    }
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // set by cargo when running a subcommand; it would pin the toolchain
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> std::io::Result<std::process::Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> std::io::Result<std::process::Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
