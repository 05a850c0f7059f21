//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `reminders_core` linkage without the mobile runtime.
//! - Report whether the configured reminders database opens and how many
//!   reminders it holds.

use reminders_core::{CoreConfig, LogSettings, ReminderService, SqliteReminderStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("reminders_core ping={}", reminders_core::ping());
    println!("reminders_core version={}", reminders_core::core_version());

    let config = CoreConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref().and_then(|dir| dir.to_str()) {
        let started = LogSettings::parse(&config.log_level, log_dir)
            .and_then(|settings| reminders_core::init_logging(&settings));
        if let Err(err) = started {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("db_path={}", config.db_path.display());
    let count = SqliteReminderStore::open(&config.db_path)
        .map_err(|err| err.to_string())
        .and_then(|store| {
            ReminderService::new(store)
                .get_reminders()
                .map_err(|err| err.message())
        });
    match count {
        Ok(reminders) => {
            println!("reminders={}", reminders.len());
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("store error: {message}");
            ExitCode::FAILURE
        }
    }
}
