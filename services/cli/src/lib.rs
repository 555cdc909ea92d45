mod cli;
mod render;

use campaign_impact::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
