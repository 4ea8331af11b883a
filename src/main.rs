use std::process;

fn main() {
    if let Err(e) = recman::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
