use std::process::ExitCode;

use fastlink::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = match fastlink::cli::parse() {
        Ok(a) => a,
        Err(e) => return e,
    };
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(e);
            ExitCode::FAILURE
        }
    }
}
