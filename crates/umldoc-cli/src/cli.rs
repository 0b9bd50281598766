//! Command-line interface for the umldoc utility
//!
//! Renders class diagrams from a JSON model and refreshes annotated diagram
//! blocks in markdown documents.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use umldoc::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use umldoc::plugins::GeneratorRegistry;
use umldoc::prelude::{AssociationMode, Editor, ModelDocument, Notation, RenderConfig};

/// umldoc - Render UML class diagrams from an entity model
#[derive(Parser)]
#[command(name = "umldoc")]
#[command(about = "Render UML class diagrams (Mermaid, PlantUML) from an entity model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a class diagram from a model file
    Render {
        /// JSON model file (use - for stdin)
        #[arg(short, long)]
        model: PathBuf,

        /// Diagram notation to emit
        #[arg(short, long, value_enum, default_value_t = NotationChoice::Mermaid)]
        notation: NotationChoice,

        /// Infer associations from field types instead of using declared ones
        #[arg(long)]
        infer: bool,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Regenerate annotated diagram blocks in a markdown document
    Edit {
        /// JSON model file
        #[arg(short, long)]
        model: PathBuf,

        /// Markdown document to edit (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the edited document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a model loads and its associations resolve
    Validate {
        /// JSON model file (use - for stdin)
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Show supported notations
    Notations {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported output notations
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum NotationChoice {
    #[default]
    Mermaid,
    #[value(alias = "puml")]
    Plantuml,
}

impl From<NotationChoice> for Notation {
    fn from(value: NotationChoice) -> Self {
        match value {
            NotationChoice::Mermaid => Notation::Mermaid,
            NotationChoice::Plantuml => Notation::PlantUml,
        }
    }
}

/// Entry of the notation listing
#[derive(Debug, Serialize)]
struct NotationInfo<'a> {
    name: &'a str,
    description: &'a str,
    version: &'a str,
}

/// Main CLI application
pub struct UmldocApp {
    registry: GeneratorRegistry,
}

impl UmldocApp {
    /// Create a new application instance with every built-in notation
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::with_all_plugins(),
        }
    }

    fn build_config(notation: NotationChoice, infer: bool) -> RenderConfig {
        let associations = if infer {
            AssociationMode::Inferred
        } else {
            AssociationMode::Declared
        };
        RenderConfig::from(Notation::from(notation)).with_associations(associations)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("umldoc v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                model,
                notation,
                infer,
                output,
            } => self.render_command(model, notation, infer, output, cli.verbose),
            Commands::Edit {
                model,
                input,
                output,
            } => self.edit_command(model, input, output, cli.verbose),
            Commands::Validate { model } => self.validate_command(model, cli.verbose),
            Commands::Notations { json } => self.notations_command(json, cli.verbose),
        }
    }

    /// Load a model document from a file or stdin
    fn load_model(&self, model: PathBuf) -> Result<ModelDocument> {
        let document = if model.to_string_lossy() == "-" {
            let text = self.read_input(Some(model.clone()))?;
            ModelDocument::from_json(&text).context("Failed to parse model from stdin")?
        } else {
            ModelDocument::from_path(&model)?
        };
        debug!(model = %model.display(), entities = document.entities.len(), "Model loaded");
        Ok(document)
    }

    /// Render a diagram into a string
    fn render_diagram(&self, document: &ModelDocument, config: &RenderConfig) -> Result<String> {
        // Inferred renders never look at the declared list
        let declared = match config.associations {
            AssociationMode::Declared => document.associations()?,
            AssociationMode::Inferred => Vec::new(),
        };
        let diagram = self
            .registry
            .render_to_string(config, &document.entities, &declared)?;
        Ok(diagram)
    }

    /// Handle the render command
    fn render_command(
        &self,
        model: PathBuf,
        notation: NotationChoice,
        infer: bool,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let document = self.load_model(model)?;
        let config = Self::build_config(notation, infer);

        if verbose {
            eprintln!(
                "Rendering {} entities as {} ({} associations)",
                document.entities.len(),
                config.notation,
                config.associations
            );
        }

        let diagram = self.render_diagram(&document, &config)?;
        info!(bytes = diagram.len(), "Diagram rendered");
        self.write_output(output, &diagram)
    }

    /// Handle the edit command
    fn edit_command(
        &self,
        model: PathBuf,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let document = self.load_model(model)?;
        let text = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", text.len());
        }

        let mut edited = Vec::new();
        let blocks = Editor::new(&document).edit(text.as_bytes(), &mut edited)?;

        if verbose {
            eprintln!("Regenerated {} diagram block(s)", blocks);
        }

        self.write_output(output, &String::from_utf8_lossy(&edited))
    }

    /// Handle the validate command
    fn validate_command(&self, model: PathBuf, verbose: bool) -> Result<()> {
        let document = self.load_model(model)?;

        if verbose {
            eprintln!("Loaded {} entities", document.entities.len());
        }

        match document.associations() {
            Ok(associations) => {
                println!(
                    "✓ Valid model: {} entities, {} associations",
                    document.entities.len(),
                    associations.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid model: {}", e);
                Err(e.into())
            }
        }
    }

    /// Handle the notations command
    fn notations_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported notations");
        }

        let notations: Vec<NotationInfo<'_>> = self
            .registry
            .generators()
            .map(|g| NotationInfo {
                name: g.notation(),
                description: g.description(),
                version: g.version(),
            })
            .collect();

        if json {
            let listing = serde_json::json!({
                "supported_notations": notations,
                "total": notations.len()
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported notations:");
            for notation in &notations {
                println!("  {:<10} - {}", notation.name, notation.description);
            }
            println!();
            println!("Total: {} notations supported", notations.len());
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for UmldocApp {
    fn default() -> Self {
        Self::new()
    }
}
