use std::io::{self, Write};

use clap::Parser;

use ideology_machine::cli::Args;
use ideology_machine::{IdeologyRegistry, Session, SessionEnd};

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .target(env_logger::Target::Stderr)
        .init();

    let registry = match IdeologyRegistry::global() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Failed to load ideology catalog: {}", err);
            std::process::exit(1);
        }
    };

    if args.list {
        if let Err(err) = print_catalog(registry) {
            eprintln!("Failed to print ideology list: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(registry, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(SessionEnd::Declined) => {}
        Ok(SessionEnd::InputExhausted) => log::debug!("no more input, exiting"),
        Err(err) => {
            eprintln!("Session aborted: {}", err);
            std::process::exit(1);
        }
    }
}

fn print_catalog(registry: &IdeologyRegistry) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for (index, name) in registry.list_entries() {
        writeln!(out, "{}: {}", index, name)?;
    }
    out.flush()
}
