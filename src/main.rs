use std::process;

fn main() {
    if let Err(e) = codenav::cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(codenav::types::EXIT_ERROR);
    }
}
