use std::process::ExitCode;
use whitespace_tools::cli::Tool;

fn main() -> ExitCode {
    Tool::Newline.run()
}
