// This example runs an interactive editing session on the terminal. An expression is read once,
// then each cycle draws its tree, evaluates it, shows it in postfix and prefix notation, and offers
// to change one of its leaves.
//
// Run with `cargo run --example ascii_shell --features examples`. Set `RUST_LOG=exprtree=debug` to
// see the edits the library makes.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use termion::{clear, color, cursor, style};
use tracing_subscriber::EnvFilter;

use exprtree::{Session, renderers::DEFAULT_INDENT_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "ascii_shell", about = "Build, evaluate and edit an expression tree")]
struct Cli {
    /// Expression to start with, e.g. "(3+4)*2". Prompted for if omitted.
    #[arg(short, long)]
    expression: Option<String>,

    /// Spaces per tree level when drawing.
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Log filter to use when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let mut session = match cli.expression {
        Some(expression) => Session::new(&expression)
            .with_context(|| format!("invalid expression {:?}", expression))?,
        None => match read_session(&mut input, &mut stdout)? {
            Some(session) => session,
            None => return Ok(()),
        },
    }
    .with_indent(cli.indent);

    // Shown after the screen is cleared, so that it isn't lost
    let mut last_error: Option<String> = None;

    loop {
        write!(stdout, "{}{}", clear::All, cursor::Goto(1, 1))?;

        let snapshot = session.snapshot();
        for line in &snapshot.lines {
            writeln!(stdout, "{}", line)?;
        }
        writeln!(stdout)?;

        match snapshot.value {
            Ok(value) => writeln!(stdout, "The value associated with the root is : {}", value)?,
            Err(err) => report(&mut stdout, &format!("Evaluation error: {}", err))?,
        }
        match snapshot.postfix {
            Ok(postfix) => writeln!(stdout, "Postfix: {}", postfix)?,
            Err(err) => report(&mut stdout, &format!("Postfix error: {}", err))?,
        }
        match snapshot.prefix {
            Ok(prefix) => writeln!(stdout, "Prefix: {}", prefix)?,
            Err(err) => report(&mut stdout, &format!("Prefix error: {}", err))?,
        }

        if let Some(message) = last_error.take() {
            report(&mut stdout, &message)?;
        }

        let choice = match prompt(&mut input, &mut stdout, "Do you want to change leaf nodes? [Y/N] ")? {
            Some(choice) => choice,
            None => break,
        };
        if !choice.to_uppercase().starts_with('Y') {
            writeln!(stdout, "Exiting program...")?;
            break;
        }

        writeln!(stdout, "Leaf nodes: {}", format_leaves(&snapshot.leaves))?;
        let value = match prompt(&mut input, &mut stdout, "Enter new value: ")? {
            Some(value) => value,
            None => break,
        };
        let index = match prompt(&mut input, &mut stdout, "Choose index to change: ")? {
            Some(index) => index,
            None => break,
        };

        last_error = apply_edit(&mut session, &value, &index).err();
    }

    stdout.flush()?;
    Ok(())
}

/// Prompts for an expression until one builds successfully. Returns `None` if input ends first.
fn read_session(input: &mut impl BufRead, stdout: &mut impl Write) -> Result<Option<Session>> {
    loop {
        let expression = match prompt(input, stdout, "Enter expression: ")? {
            Some(expression) => expression,
            None => return Ok(None),
        };

        match Session::new(&expression) {
            Ok(session) => return Ok(Some(session)),
            Err(err) => report(stdout, &format!("{}", err))?,
        }
    }
}

/// Applies one leaf edit, describing what went wrong if it could not be made.
fn apply_edit(session: &mut Session, value: &str, index: &str) -> Result<(), String> {
    let value = value.chars().next().ok_or_else(|| String::from("no value entered"))?;
    let index = index
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a leaf index", index))?;

    session
        .update_leaf(index, value)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Writes `message` and reads the first whitespace-separated word of the next line. Returns `None`
/// once input is exhausted.
fn prompt(input: &mut impl BufRead, stdout: &mut impl Write, message: &str) -> Result<Option<String>> {
    loop {
        write!(stdout, "{}{}{}", style::Bold, message, style::Reset)?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
            return Ok(None);
        }

        if let Some(word) = line.split_whitespace().next() {
            return Ok(Some(String::from(word)));
        }
    }
}

fn report(stdout: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(stdout, "{}{}{}", color::Fg(color::Red), message, color::Fg(color::Reset))
}

fn format_leaves(leaves: &[char]) -> String {
    let items = leaves.iter().map(|leaf| leaf.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
