#![allow(non_snake_case)]
use RustedPoly::Utils::logger::init_logger;
use RustedPoly::Utils::poly_task::{DEMO_TASK, PolyTask};
use RustedPoly::error::PolyError;
use log::info;
use std::env;
use std::process::ExitCode;

// usage: RustedPoly [task_file]
// without a task file the built-in demo document is run
fn run() -> Result<(), PolyError> {
    let task = match env::args().nth(1) {
        Some(path) => PolyTask::from_file(&path)?,
        None => PolyTask::from_document(DEMO_TASK)?,
    };
    init_logger(task.loglevel);
    info!("task with {} polynomials loaded", task.polynomials.len());
    println!("{}", task.report());
    info!("Program ended");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
