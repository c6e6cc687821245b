use cidr_summary::config::Config;
use cidr_summary::logging::init_logging;
use cidr_summary::{describe_error, run};
use colored::Colorize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_args();
    if let Err(e) = init_logging(&config) {
        eprintln!("{} {e}", "Error initializing logging:".red());
        return ExitCode::FAILURE;
    }

    match run(&config, std::io::stdin().lock()).await {
        Ok(cidr) => {
            println!("{cidr}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{}", describe_error(e.as_ref()).red());
            ExitCode::FAILURE
        }
    }
}
