//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage and service wiring end to end.
//! - Print one list page as JSON: `roster_cli [page] [limit]`.
//!
//! File logging starts only when `ROSTER_LOG_DIR` is set.

use log::info;
use roster_core::{
    init_logging, EmployeeRequest, EmployeeService, InMemoryEmployeeRepository, ListQuery,
    LoggingConfig,
};
use std::process::ExitCode;

const SEED_EMPLOYEES: &[(&str, &str, f64)] = &[
    ("Ada Lovelace", "Analyst", 4200.0),
    ("Grace Hopper", "Compiler Engineer", 5100.0),
    ("Alan Turing", "Researcher", 4800.0),
];

fn main() -> ExitCode {
    if std::env::var_os(roster_core::logging::LOG_DIR_ENV).is_some() {
        if let Err(err) = LoggingConfig::from_env().and_then(|config| init_logging(&config)) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let mut args = std::env::args().skip(1);
    let page = args.next();
    let limit = args.next();
    let query = match ListQuery::parse(page.as_deref(), limit.as_deref()) {
        Ok(query) => query,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = EmployeeService::new(InMemoryEmployeeRepository::new());
    for (name, position, salary) in SEED_EMPLOYEES {
        let request = EmployeeRequest::new(*name, *position, *salary);
        if let Err(err) = service.create_employee(&request) {
            eprintln!("error: seeding failed: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!(
        "event=cli_seed module=cli status=ok count={}",
        SEED_EMPLOYEES.len()
    );

    let response = service.list_employees(&query);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: failed to encode response: {err}");
            ExitCode::FAILURE
        }
    }
}
