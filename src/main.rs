use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use asciicam::cli::{self, Args};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        if e.is_usage() {
            eprintln!();
            eprintln!("{}", Args::command().render_usage());
        }
        std::process::exit(e.exit_code());
    }
}
