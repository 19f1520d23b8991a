use biostat::codec;
use biostat::commands::{self, CmdMessage, CmdResult, MessageLevel};
use biostat::error::{BiostatError, Result};
use biostat::model::Record;
use biostat::store::Store;
use biostat::validate::RecordInput;
use clap::Parser;
use colored::*;

mod args;
use args::{Cli, Operation};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let operation = cli.operation().ok_or(BiostatError::InvalidOption)?;

    let mut store = Store::load(codec::read(&cli.file)?);

    match operation {
        Operation::Create => {
            let input = record_input(&cli)?;
            let result = commands::create::run(&mut store, &input)?;
            persist(&cli, &store)?;
            print_messages(&result.messages);
        }
        Operation::Read => {
            let name = require_name(&cli)?;
            let result = commands::read::run(&store, name)?;
            print_report(&result);
            print_messages(&result.messages);
        }
        Operation::Update => {
            let input = record_input(&cli)?;
            let result = commands::update::run(&mut store, &input)?;
            persist(&cli, &store)?;
            print_messages(&result.messages);
        }
        Operation::Delete => {
            let name = require_name(&cli)?;
            let result = commands::delete::run(&mut store, name)?;
            persist(&cli, &store)?;
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn persist(cli: &Cli, store: &Store) -> Result<()> {
    codec::write(&cli.file, store.records())
}

fn require_name(cli: &Cli) -> Result<&str> {
    cli.name
        .as_deref()
        .ok_or_else(|| BiostatError::MissingArguments("--name".to_string()))
}

/// Collect the five field flags for create/update, naming every missing
/// one in the error so the user can fix the whole invocation at once.
fn record_input(cli: &Cli) -> Result<RecordInput> {
    let fields = [
        ("--name", &cli.name),
        ("--sex", &cli.sex),
        ("--age", &cli.age),
        ("--height", &cli.height),
        ("--weight", &cli.weight),
    ];
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(flag, _)| *flag)
        .collect();
    if !missing.is_empty() {
        return Err(BiostatError::MissingArguments(missing.join(", ")));
    }

    Ok(RecordInput {
        name: cli.name.clone().unwrap_or_default(),
        sex: cli.sex.clone().unwrap_or_default(),
        age: cli.age.clone().unwrap_or_default(),
        height: cli.height.clone().unwrap_or_default(),
        weight: cli.weight.clone().unwrap_or_default(),
    })
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_report(result: &CmdResult) {
    if let Some(record) = &result.record {
        println!("{}", render_report(record));
    }
}

fn render_report(record: &Record) -> String {
    format!(
        "\n================== BIO DATA ==================\n\n\
         \x20 Name:   {}\n\
         \x20 Sex:    {}\n\
         \x20 Age:    {} years old\n\
         \x20 Height: {} in ({} cm)\n\
         \x20 Weight: {} lbs ({:.2} kg)\n\n\
         ==============================================",
        record.name,
        record.sex,
        record.age,
        record.height,
        display_number(record.height_cm()),
        record.weight,
        record.weight_kg(),
    )
}

/// Round to 2 decimals and print without trailing zeros: 165.1 stays
/// `165.1`, 182.88 stays `182.88`, whole numbers print bare.
fn display_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}
