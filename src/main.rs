use search_trees::report::{self, ReportConfig};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> report::Result<()> {
    let config = ReportConfig::from_args(env::args().skip(1))?;
    SimpleLogger::init(config.log_level, Config::default())?;

    let report = report::run(&config)?;
    for line in &report.lines {
        println!("{}", line);
    }

    match report.found_by_id {
        Some(student) => println!("Student found by id: {}", student),
        None => println!("Student with id {} not found", config.probe_id),
    }
    match report.found_by_name {
        Some(student) => println!("Student found by name: {}", student),
        None => println!("Student named {} not found", config.probe_name),
    }

    Ok(())
}
