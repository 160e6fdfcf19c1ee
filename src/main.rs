use std::process::ExitCode;

fn main() -> ExitCode {
    match klondike_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("solitaire: {e}");
            ExitCode::FAILURE
        }
    }
}
