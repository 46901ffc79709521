use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::sbom_document::domain::Field;

/// Maintain a software bill-of-materials for your package
///
/// Global options must come before the command: everything after a
/// command's first field flag is read as field tokens.
#[derive(Parser, Debug)]
#[command(name = "sbom")]
#[command(version)]
#[command(
    about = "Maintain a software bill-of-materials for your package",
    long_about = None
)]
pub struct Args {
    /// Path to the sbom document (defaults to `file` from sbom.config.yml, then sbom.json)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to a config file (defaults to sbom.config.yml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print progress messages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new software bill-of-materials file for your package
    #[command(after_help = field_flags_help())]
    Init {
        /// Identifier of your package: lower-case letters, numbers, dashes and periods
        #[arg(value_name = "PACKAGE NAME")]
        package_id: Option<String>,

        /// Field flags with their values, e.g. --version 1.0.0
        #[arg(
            value_name = "ARGUMENTS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },

    /// Manage the information about your package
    Info {
        #[command(subcommand)]
        verb: Option<InfoVerb>,
    },

    /// Manage the package dependencies of your project
    Package {
        #[command(subcommand)]
        verb: Option<PackageVerb>,
    },
}

#[derive(Debug, Subcommand)]
pub enum InfoVerb {
    /// Print package information
    Ls,

    /// Set package information
    #[command(after_help = field_flags_help())]
    Add {
        /// Field flags with their values, e.g. --license MIT
        #[arg(
            value_name = "ARGUMENTS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },

    /// Remove package information
    #[command(after_help = field_flags_help())]
    Rm {
        /// Field flags to clear, e.g. --license
        #[arg(
            value_name = "ARGUMENTS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PackageVerb {
    /// Print all packages, or a specific package
    Ls {
        #[arg(value_name = "PACKAGE NAME")]
        name: Option<String>,
    },

    /// Add a package, or update the information of an existing one
    #[command(after_help = field_flags_help())]
    Add {
        #[arg(value_name = "PACKAGE NAME")]
        name: Option<String>,

        /// Field flags with their values, e.g. --version 2.0.0
        #[arg(
            value_name = "ARGUMENTS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },

    /// Remove a package, or only some of its information
    #[command(after_help = field_flags_help())]
    Rm {
        #[arg(value_name = "PACKAGE NAME")]
        name: Option<String>,

        /// Field flags to clear; without any, the whole package is removed
        #[arg(
            value_name = "ARGUMENTS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Info { .. } => "info",
            Commands::Package { .. } => "package",
        }
    }
}

/// Lists the field flags every field-taking command accepts
pub fn field_flags_help() -> String {
    let mut help = String::from("Fields:\n");
    for field in Field::ALL {
        help.push_str(&format!("    {} <STRING>\n", field.flag()));
    }
    help
}

/// Renders the help text of `command` (or of the whole tool when `None`)
pub fn render_usage(command: Option<&str>) -> String {
    let mut root = Args::command();
    root.build();

    match command.and_then(|name| root.find_subcommand_mut(name)) {
        Some(subcommand) => subcommand.render_help().to_string(),
        None => root.render_help().to_string(),
    }
}
