//! Signet Command Line Tool
//!
//! Provides commands for working with signed requests:
//! - canonicalize: Print the canonical string for a parameter file
//! - sign: Compute the signature for a parameter file
//! - verify: Check a claimed signature against a parameter file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use signet_core::{ParameterSet, SystemClock, Timestamp};
use signet_sign::{compute, try_canonicalize, verify};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signet")]
#[command(version)]
#[command(about = "Signet Command Line Tool - Canonicalize, sign, and verify request parameters")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical string for a JSON parameter file
    #[command(about = "Output the canonical string for a parameter file")]
    Canonicalize {
        /// Path to a JSON object of request parameters
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute the signature for a JSON parameter file
    #[command(about = "Compute the request signature for a parameter file")]
    Sign {
        /// Path to a JSON object of request parameters
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Auth token mixed into the signature
        #[arg(long, default_value = "")]
        token: String,

        /// Per-endpoint secret mixed into the signature
        #[arg(long, default_value = "")]
        secret: String,

        /// Unix seconds to sign with (defaults to the current time)
        #[arg(long)]
        timestamp: Option<u64>,
    },

    /// Verify a claimed signature for a JSON parameter file
    #[command(about = "Recompute and compare a claimed signature")]
    Verify {
        /// Path to a JSON object of request parameters
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The claimed signature (32 lowercase hex chars)
        #[arg(long)]
        signature: String,

        /// The exact timestamp text the signature was computed with
        #[arg(long)]
        timestamp: String,

        /// Auth token the signature was computed with
        #[arg(long, default_value = "")]
        token: String,

        /// Per-endpoint secret
        #[arg(long, default_value = "")]
        secret: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Sign {
            file,
            token,
            secret,
            timestamp,
        } => handle_sign(&file, &token, &secret, timestamp),
        Commands::Verify {
            file,
            signature,
            timestamp,
            token,
            secret,
        } => handle_verify(&file, &signature, &timestamp, &token, &secret),
    }
}

fn read_params(file: &PathBuf) -> Result<ParameterSet> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as a parameter object", file.display()))
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let params = read_params(file)?;

    let canonical =
        try_canonicalize(&params).with_context(|| "Failed to build canonical string")?;

    println!("{}", canonical);
    Ok(())
}

fn handle_sign(file: &PathBuf, token: &str, secret: &str, timestamp: Option<u64>) -> Result<()> {
    let params = read_params(file)?;

    let timestamp = match timestamp {
        Some(seconds) => Timestamp::from_unix_seconds(seconds),
        None => Timestamp::now(&SystemClock),
    };

    let signature = compute(&params, timestamp.as_str(), token, secret);

    println!("timestamp: {}", timestamp);
    println!("signature: {}", signature);
    Ok(())
}

fn handle_verify(
    file: &PathBuf,
    signature: &str,
    timestamp: &str,
    token: &str,
    secret: &str,
) -> Result<()> {
    let params = read_params(file)?;

    if verify(&params, timestamp, token, secret, signature) {
        println!("Signature verified");
        Ok(())
    } else {
        bail!("Signature mismatch");
    }
}
