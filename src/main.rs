mod cli;
mod clipboard;
mod config;
mod errors;
mod form;
mod generators;
mod logging;
mod password;
mod session;

use std::io::{ self, Write };
use std::path::Path;

use clap::Parser;
use rand::Rng;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::AppError;
use crate::form::{ FormState, PasswordForm };
use crate::session::Session;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    logging::init_tracing(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    let mut form = PasswordForm::with_defaults(&config);

    if let Some(length) = &cli.length {
        form.set_length(length);
    }

    if let Some(classes) = cli.classes() {
        form.set_classes(classes);
    }

    let mut rng = rand::rng();

    let form = if cli.interactive {
        let mut session = Session::new(form, &mut rng);
        session.run(io::stdin().lock(), io::stdout().lock())?;
        session.into_form()
    } else {
        generate_batch(&mut form, cli.count, &mut rng, io::stdout().lock())?;
        form
    };

    if cli.copy {
        match form.state() {
            FormState::Generated(password) => clipboard::copy_to_clipboard(password)?,
            FormState::Idle => eprintln!("Nothing to copy: {}", form.display()),
        }
    }

    Ok(())
}

/// Submits the form `count` times, one password per line.
fn generate_batch<R: Rng + ?Sized, W: Write>(
    form: &mut PasswordForm,
    count: u32,
    rng: &mut R,
    mut out: W,
) -> Result<(), AppError> {
    for _ in 0..count {
        let password = form.submit(&mut *rng)?;
        writeln!(out, "{}", password)?;
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Some(path) => Config::load(&path),
            None => {
                debug!("no config directory on this platform, using defaults");
                Ok(Config::default())
            }
        },
    }
}
