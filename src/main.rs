//! cicdgen's main application entry point.
//! Parses the command line, sets up logging and dispatches to the
//! batch generator or the debug dump.

use cicdgen::{
    cli::{get_args, Command},
    driver::Driver,
    dump::dump_config,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args.command()) {
        default_error_handler(err);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate { base_path, projects } => {
            let engine = MiniJinjaRenderer::new();
            Driver::new(base_path, projects).run(&engine)
        }
        Command::Dump { path } => match dump_config(&path) {
            Ok(json) => {
                println!("{json}");
                Ok(())
            }
            // A malformed document is reported, not treated as a failure.
            Err(Error::YamlError(e)) => {
                println!("{e}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    }
}
