use gitreport::{AppResult, CommandLog, Config, ReportGenerator, Repository};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    // A broken config file never stops a report
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}. Using default settings.", e);
            Config::default()
        }
    };

    match run(config) {
        Ok(path) => println!("Change report generated: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(config: Config) -> AppResult<PathBuf> {
    let repo = Repository::discover()?;

    let repo = if config.behavior.log_commands {
        match CommandLog::new() {
            Ok(log) => repo.with_log(log),
            Err(e) => {
                eprintln!("Warning: command history disabled: {}", e);
                repo
            }
        }
    } else {
        repo
    };

    let output_dir = match &config.report.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };

    ReportGenerator::new(repo, config).run(&output_dir)
}
