//! Reads a saved page from stdin and writes a printable document to stdout.
//!
//! Usage: `print_stdin [--url URL] [--json] [--no-print] [--no-dedup]`
//!
//! With `--json`, the extracted segments are written as JSON instead.
//! Set `RUST_LOG=debug` to trace extraction on stderr.

use std::env;
use std::io::{self, Read, Write};
use std::process;

use article_print::{render_bytes, Error, Options, PrintDocument};
use tracing_subscriber::EnvFilter;

struct Args {
    options: Options,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut options = Options::default();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => {
                let url = args.next().ok_or("--url needs a value")?;
                options.url = Some(url);
            }
            "--json" => json = true,
            "--no-print" => options.auto_print = false,
            "--no-dedup" => options.deduplicate = false,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(Args { options, json })
}

fn run(args: &Args) -> Result<(), Error> {
    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;

    let doc = render_bytes(&html, &args.options)?;
    let output = if args.json {
        json_output(&doc)?
    } else {
        doc.html
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn json_output(doc: &PrintDocument) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(doc)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: print_stdin [--url URL] [--json] [--no-print] [--no-dedup]");
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
