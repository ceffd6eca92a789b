use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use req_cli::{Cli, Palette, UreqTransport, EXIT_FAILURE, EXIT_SUCCESS};
use tracing::{debug, Level};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let spec = cli.command.to_spec();
    debug!(?spec, "parsed arguments");

    let out_palette = Palette::for_stream(cli.color, std::io::stdout().is_terminal());
    let err_palette = Palette::for_stream(cli.color, std::io::stderr().is_terminal());
    let code = req_cli::run(
        &spec,
        &UreqTransport::new(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        out_palette,
        err_palette,
    );
    ExitCode::from(code)
}
