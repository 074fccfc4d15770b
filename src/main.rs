mod cli;
mod clipboard;
mod errors;
mod generators;
mod password;
mod prompt;
mod settings;

use std::io::{ self, BufRead, Write };

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::clipboard::copy_to_clipboard;
use crate::errors::AppError;
use crate::password::{ Composer, MAX_FIELD_CEILING, PasswordRequest, RawRequest };
use crate::settings::Settings;

const COPIED_MESSAGE: &str = "Password copied to clipboard!";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        match &e {
            AppError::Compose(err) => eprintln!("Input Error: {}", err),
            other => tracing::error!("Command failed: {}", other),
        }
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::load(cli.config.as_deref())?;

    let composer = Composer::new(cli.digits.unwrap_or(settings.digit_alphabet));
    let max = field_max(cli.max, settings.max_field_value)?;
    let copy = cli.copy || settings.copy_by_default;
    let defaults = settings.defaults.to_raw();

    tracing::debug!(digits = %composer.digits(), max, copy, "starting");

    if cli.interactive {
        let stdin = io::stdin();
        return run_interactive(&composer, max, &defaults, &mut stdin.lock(), &mut io::stdout(), copy_to_clipboard);
    }

    let request = cli.raw_request().or(&defaults).parse(max)?;
    let passwords = generate_batch(&composer, &request, cli.count as usize)?;

    let shown = passwords.join("\n");
    println!("{}", shown);

    if copy {
        copy_to_clipboard(&shown)?;
        eprintln!("{}", COPIED_MESSAGE);
    }

    Ok(())
}

/// The command-line maximum wins over the settings one; either way it must
/// stay under `MAX_FIELD_CEILING`.
fn field_max(cli_max: Option<usize>, settings_max: usize) -> Result<usize, AppError> {
    let max = cli_max.unwrap_or(settings_max);
    if max > MAX_FIELD_CEILING {
        return Err(AppError::MaxTooLarge { max, ceiling: MAX_FIELD_CEILING });
    }
    Ok(max)
}

fn generate_batch(composer: &Composer, request: &PasswordRequest, count: usize) -> Result<Vec<String>, AppError> {
    tracing::debug!(
        length = request.length,
        numbers = request.numbers,
        specials = request.specials,
        letters = request.letters,
        count,
        "composing"
    );

    request.remainder()?;

    let mut passwords = Vec::new();
    for _ in 0..count {
        passwords.push(composer.compose(request)?);
    }

    Ok(passwords)
}

/// Form loop: fill, generate, show, optionally copy. Previous answers are
/// offered again on the next round, so after bad input only the wrong field
/// needs retyping. Ends on end of input or when the user does not want
/// another password.
fn run_interactive<R, W, C>(
    composer: &Composer,
    max: usize,
    defaults: &RawRequest,
    input: &mut R,
    output: &mut W,
    mut copy: C,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    C: FnMut(&str) -> Result<(), AppError>,
{
    let mut prefill = defaults.clone();

    loop {
        let Some(form) = prompt::read_form(input, output, &prefill)? else {
            writeln!(output)?;
            return Ok(());
        };

        let outcome = form.parse(max).and_then(|request| composer.compose(&request));
        prefill = form;

        let password = match outcome {
            Ok(password) => password,
            Err(e) => {
                tracing::debug!(error = ?e, "rejected form");
                writeln!(output, "Input Error: {}", e)?;
                continue;
            }
        };

        writeln!(output, "{}", password)?;

        if prompt::confirm(input, output, "Copy to clipboard?")? {
            match copy(&password) {
                Ok(()) => writeln!(output, "{}", COPIED_MESSAGE)?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
        }

        if !prompt::confirm(input, output, "Generate another?")? {
            return Ok(());
        }
    }
}
