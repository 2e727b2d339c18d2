use bank_core::cli::run_cli;

fn main() {
    if let Err(err) = run_cli(std::env::args().skip(1)) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
