//! Binary entry point: seed the register from `properties.db` in the current
//! directory, then hand control to the Ratatui event loop. A failed load is
//! shown in the UI instead of aborting.
use real_estate_register::logging::init_tracing;
use real_estate_register::{resolve_db_path, run_app, App, Register, DB_FILE_NAME};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let mut register = Register::new();
    let loaded = resolve_db_path(DB_FILE_NAME).and_then(|path| register.load(&path));

    let mut app = App::new(register);
    match loaded {
        Ok(count) => app.report_loaded(count),
        Err(err) => {
            warn!(error = %err, "could not load listings");
            app.report_database_error(&err);
        }
    }

    run_app(&mut app)
}
