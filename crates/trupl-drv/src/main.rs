use std::process::ExitCode;

fn main() -> ExitCode {
    trupl_drv::init_tracing();
    match trupl_drv::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
