use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, error, info};
use shunting_yard::interpreter::operator::Associativity;
use shunting_yard::interpreter::parser::ConverterConfig;
use shunting_yard::interpreter::{convert, evaluator, tokens_to_string};
use std::io;
use std::io::{BufRead, Write};

/// Calculates infix arithmetic expressions by way of postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate. When left out, every line of standard
    /// input is calculated as its own expression
    expression: Option<String>,

    /// Print the postfix form of each expression before its value
    #[clap(short, long)]
    postfix: bool,

    /// Group chained exponentiation from the right, so 2^3^2 is 2^(3^2)
    #[clap(short, long)]
    right_associative_power: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    fn converter_config(&self) -> ConverterConfig {
        let exponent_associativity = if self.right_associative_power {
            Associativity::Right
        } else {
            Associativity::Left
        };
        ConverterConfig {
            exponent_associativity,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let config = args.converter_config();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &args.expression {
        Some(expression) => calculate_and_print(expression, &config, args.postfix, &mut output),
        None => {
            let stdin = io::stdin();
            let failures = calculate_lines(stdin.lock(), &config, args.postfix, &mut output)?;
            if failures > 0 {
                bail!("{} expression(s) could not be calculated", failures);
            }
            Ok(())
        }
    }
}

/// Calculates every non-blank line as an expression. A failing line is reported
/// and skipped. Returns how many lines failed.
fn calculate_lines(
    input: impl BufRead,
    config: &ConverterConfig,
    print_postfix: bool,
    output: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;

    for line in input.lines() {
        let line = line.context("Failed to read expression from standard input")?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        if let Err(err) = calculate_and_print(expression, config, print_postfix, output) {
            error!("{:#}", err);
            writeln!(output, "error: {:#}", err)?;
            failures += 1;
        }
    }

    info!("Calculated input with {} failure(s)", failures);
    Ok(failures)
}

fn calculate_and_print(
    expression: &str,
    config: &ConverterConfig,
    print_postfix: bool,
    output: &mut impl Write,
) -> Result<()> {
    let postfix_tokens = convert(expression, config)?;
    if print_postfix {
        writeln!(output, "{}", tokens_to_string(&postfix_tokens)?)?;
    }

    let value = evaluator::evaluate_postfix(&postfix_tokens)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;
    info!("{} = {}", expression, value);
    writeln!(output, "{}", value)?;
    Ok(())
}
