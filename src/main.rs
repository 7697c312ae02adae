use std::process::ExitCode;

fn main() -> ExitCode {
    match crawlstore::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}
