use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::process::ExitCode;

use treefind::cli::{self, Command};
use treefind::{FindError, logging};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => {
            eprintln!("{e}, see help\n\n{}", cli::USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("treefind: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), FindError> {
    let query = match cli::parse_args(std::env::args_os())? {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Search(query) => query,
    };

    let results = treefind::walk(&query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &results.paths {
        out.write_all(path.as_os_str().as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(FindError::Output)?;
    }

    if let Some(program) = &query.exec {
        treefind::run_and_report(program, &results.paths, &mut out)?;
    }

    out.flush().map_err(FindError::Output)
}
