use std::process::exit;

fn main() {
    if let Err(e) = visascout::app::run_cli() {
        eprintln!("visascout: {e}");
        exit(1);
    }
}
