mod cli;
mod commands;

use asq_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
