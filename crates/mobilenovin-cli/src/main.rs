//! MobileNovinAI packaging policy CLI.
//!
//! Parses arguments, initializes logging and dispatches to a command.

use clap::Parser;
use miette::Result;
use mobilenovin_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let settings = args.settings.as_deref();
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, settings),
        cli::Command::Matrix(matrix_args) => commands::matrix_execute(matrix_args, settings),
        cli::Command::Wrap(wrap_args) => commands::wrap_execute(wrap_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args, settings),
    };

    result.map_err(error::cli_error_to_miette)
}
