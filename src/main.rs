use std::process::ExitCode;

fn main() -> ExitCode {
    match mattermost_client::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
