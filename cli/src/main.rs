// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{process, time::Instant};
use structopt::StructOpt;
use tower_cli::{run, Options};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

// COMMAND RUNNER
// ================================================================================================

fn main() {
    // read command-line args
    let options = Options::from_args();

    // configure logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let now = Instant::now();
    match run(&options.command, &mut rand::thread_rng()) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            debug!("command evaluated in {} ms", now.elapsed().as_millis());
        }
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
