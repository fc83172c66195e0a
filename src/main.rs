fn main() {
    if let Err(e) = slp_decoder::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
