pub mod app;
pub mod errors;
pub mod paths;
mod runner;
pub mod seq;
pub mod stats;
pub mod terms;
pub mod ui;

use crate::errors::EdaError;

pub fn run() -> Result<(), EdaError> {
    runner::run()
}
