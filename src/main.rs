use std::process::ExitCode;

use notify_me::cli::CliApp;

fn main() -> ExitCode {
    CliApp::run()
}
