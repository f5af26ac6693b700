use rastercloud::cli::Cli;
use rastercloud::logging;

fn main() {
    logging::init_logging();

    if let Err(err) = Cli::run_from_args() {
        eprintln!("rastercloud error: {:#}", err);
        std::process::exit(1);
    }
}
