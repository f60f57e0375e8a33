mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _cli = Cli::parse();

    if let Err(e) = commands::generate::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
