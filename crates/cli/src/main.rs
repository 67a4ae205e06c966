use std::process::ExitCode;

fn main() -> ExitCode {
    printfarm_cli::run()
}
