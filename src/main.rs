use std::fs;

use clap::Parser;
use condex::{Expression, Registry, Variant, util::num::parse_number};
use tracing_subscriber::EnvFilter;

/// condex evaluates infix condition expressions such as `speed > 3 && IF(wet,
/// grip < 0.5, TRUE)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells condex to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression instead of its value.
    #[arg(short, long)]
    rpn: bool,

    /// Prints each expression's value coerced to a boolean.
    #[arg(short, long)]
    check: bool,

    /// Binds a variable, as `NAME=VALUE`. Values are read as a number, then a
    /// boolean, then a string.
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, Variant)>,

    contents: String,
}

fn parse_var(arg: &str) -> Result<(String, Variant), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{arg}'"));
    }

    let value = if let Some(n) = parse_number(value) {
        Variant::Number(n)
    } else if value.eq_ignore_ascii_case("true") {
        Variant::Boolean(true)
    } else if value.eq_ignore_ascii_case("false") {
        Variant::Boolean(false)
    } else {
        Variant::from(value)
    };

    Ok((name.to_owned(), value))
}

fn run(line: &str, args: &Args) -> Result<String, condex::Error> {
    let mut builder = Expression::builder(line, Registry::global());
    builder.add_variables(args.vars.iter().cloned());
    let expression = builder.build();

    if args.rpn {
        return Ok(expression.to_rpn()?);
    }

    let value = expression.eval()?;
    if args.check {
        Ok(value.as_boolean().to_string())
    } else {
        Ok(value.to_string())
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let lines: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|l| !l.is_empty() && !l.starts_with('#'))
              .collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for line in lines {
        match run(line, &args) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
