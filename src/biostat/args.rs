use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biostat")]
#[command(about = "Manage biographical records kept in a CSV file", long_about = None)]
pub struct Cli {
    /// Create a record (requires all five field flags)
    #[arg(short = 'c', long = "create")]
    pub create: bool,

    /// Read a record and print its report
    #[arg(short = 'r', long = "read")]
    pub read: bool,

    /// Update a record (requires all five field flags)
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Delete a record
    #[arg(short = 'd', long = "delete")]
    pub delete: bool,

    /// Person's name (unique key, matched case-insensitively)
    #[arg(long)]
    pub name: Option<String>,

    /// Sex: M or F, any case
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in years, 18 or older
    #[arg(long)]
    pub age: Option<String>,

    /// Height in inches
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in pounds
    #[arg(long)]
    pub weight: Option<String>,

    /// Backing CSV file
    #[arg(long, default_value = "biostats.csv")]
    pub file: PathBuf,
}

/// The operation selected by the `-c/-r/-u/-d` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Cli {
    /// Exactly one operation flag must be set; anything else is `None`
    /// and the dispatcher reports `InvalidOption`.
    pub fn operation(&self) -> Option<Operation> {
        let selected = [
            (self.create, Operation::Create),
            (self.read, Operation::Read),
            (self.update, Operation::Update),
            (self.delete, Operation::Delete),
        ];
        let mut ops = selected.iter().filter(|(on, _)| *on).map(|(_, op)| *op);
        match (ops.next(), ops.next()) {
            (Some(op), None) => Some(op),
            _ => None,
        }
    }
}
