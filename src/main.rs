use clap::Parser;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "filetidy")]
#[command(version = VERSION)]
#[command(about = "Sanitize file names under the current directory")]
struct Cli {
    /// Print a JSON envelope instead of one line per rename
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    rename: rename::RenameArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let result = rename::run(cli.rename, &global);

    let exit_code = if global.json {
        output::print_json_result(result)
    } else {
        match result {
            Ok((_report, exit_code)) => exit_code,
            Err(err) => {
                output::print_error(&err);
                output::exit_code_for_error(err.code)
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
