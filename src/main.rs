use sparkfield::{logger, window, AppError, FieldConfig};
use std::path::PathBuf;

fn main() -> Result<(), AppError> {
    let log_file = std::env::var_os("SPARKFIELD_LOG").map(PathBuf::from);
    logger::init(log_file.as_deref())?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            FieldConfig::load(&path)?
        }
        None => FieldConfig::default(),
    };

    window::run(config)
}
