//! `jenv`: manage installed JDKs and route `java`, `javac` and friends to the one
//! selected for the current shell, directory or user.

use clap::Parser;

mod cli;
mod context;
mod exit;
mod logging;
mod ui;

fn main() {
    let app = cli::App::parse();
    logging::init();

    let code = match app.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("jenv: {err:#}");
            exit::code_for(&err)
        }
    };
    std::process::exit(code);
}
