mod cmd;

use clap::Parser;
use cmd::Cli;

fn main() {
    let _ = env_logger::try_init();
    let cli = Cli::parse();
    if let Err(err) = cli.command.run() {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
