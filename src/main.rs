// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    env_logger::init();
    info!("Starting log");

    match cafa_eda::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("cafa-eda: {}", e);
            ExitCode::FAILURE
        }
    }
}
