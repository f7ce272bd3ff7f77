// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigInt;
use rand::RngCore;
use structopt::{clap::AppSettings, StructOpt};
use thiserror::Error;
use tower_math::{batch_inversion, fields::Fp2, FieldElement, FieldError};
use tracing::debug;

#[cfg(test)]
mod tests;

// CLI OPTIONS
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "fp2", about = "Arithmetic in the BLS12-381 quadratic extension field")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Command,

    /// Logging verbosity; repeat for more detail (RUST_LOG takes precedence)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,
}

impl Options {
    /// Returns the default log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Elements are written as `<a0>+<a1>*u` or as a single base field literal.
#[derive(StructOpt, Debug, PartialEq)]
pub enum Command {
    /// Multiply two elements
    Mul { x: Fp2, y: Fp2 },

    /// Divide x by y
    Div { x: Fp2, y: Fp2 },

    /// Compute the multiplicative inverse of an element
    Inv { x: Fp2 },

    /// Raise an element to a signed integer power
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Exp { x: Fp2, k: BigInt },

    /// Compute a square root of an element
    Sqrt { x: Fp2 },

    /// Compute the Legendre symbol of an element
    Legendre { x: Fp2 },

    /// Compute the conjugate of an element
    Conjugate { x: Fp2 },

    /// Check whether an element is lexicographically larger than its negation
    Largest { x: Fp2 },

    /// Invert a sequence of elements at once; zeros stay zero
    BatchInvert {
        #[structopt(required = true)]
        values: Vec<Fp2>,
    },

    /// Sample uniformly random elements
    Random {
        /// Number of elements to sample
        #[structopt(short = "n", long = "count", default_value = "1")]
        count: usize,
    },
}

// ERRORS
// ================================================================================================

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("{0} is not a square")]
    NotASquare(Fp2),
}

// COMMAND EVALUATION
// ================================================================================================

/// Evaluates the `command` and returns output lines in canonical string form.
pub fn run<R: RngCore + ?Sized>(command: &Command, rng: &mut R) -> Result<Vec<String>, CliError> {
    debug!(?command, "evaluating command");
    let lines = match command {
        Command::Mul { x, y } => vec![(*x * *y).to_string()],
        Command::Div { x, y } => vec![x.try_div(*y)?.to_string()],
        Command::Inv { x } => vec![x.try_inv()?.to_string()],
        Command::Exp { x, k } => vec![x.exp_signed(k)?.to_string()],
        Command::Sqrt { x } => {
            if x.legendre() == -1 {
                return Err(CliError::NotASquare(*x));
            }
            vec![x.sqrt().to_string()]
        }
        Command::Legendre { x } => vec![x.legendre().to_string()],
        Command::Conjugate { x } => vec![x.conjugate().to_string()],
        Command::Largest { x } => vec![x.lexicographically_largest().to_string()],
        Command::BatchInvert { values } => batch_inversion(values)
            .iter()
            .map(|value| value.to_string())
            .collect(),
        Command::Random { count } => {
            let mut lines = Vec::with_capacity(*count);
            for _ in 0..*count {
                lines.push(Fp2::try_random(rng)?.to_string());
            }
            lines
        }
    };
    Ok(lines)
}
