use std::fs;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use pathway_annotator::annotation::{AnnotationReport, ExportNode};
use pathway_annotator::builder::Annotator;
use pathway_annotator::config::ConfigLoader;
use pathway_annotator::domain::{Compartment, Event, Pathway, PhysicalEntity, ReactionLikeEvent};
use pathway_annotator::error::AnnotatorError;
use pathway_annotator::output::{JsonOutput, OutputMode};

#[derive(Parser)]
#[command(name = "pathway-annotate")]
#[command(about = "Resolve a Reactome object into identifiers.org annotation terms")]
#[command(version, author)]
struct Cli {
    #[arg(value_enum)]
    kind: InputKind,

    input: Utf8PathBuf,

    #[arg(long)]
    config: Option<Utf8PathBuf>,

    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputKind {
    Pathway,
    Events,
    Reaction,
    Species,
    Compartment,
}

impl InputKind {
    fn label(self) -> &'static str {
        match self {
            InputKind::Pathway => "pathway",
            InputKind::Events => "events",
            InputKind::Reaction => "reaction",
            InputKind::Species => "species",
            InputKind::Compartment => "compartment",
        }
    }
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<AnnotatorError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &AnnotatorError) -> u8 {
    match error {
        AnnotatorError::MissingConfig(_)
        | AnnotatorError::ConfigRead(_)
        | AnnotatorError::ConfigParse(_)
        | AnnotatorError::InvalidConfig(_) => 2,
        AnnotatorError::InputRead(_) | AnnotatorError::InputParse { .. } => 3,
        AnnotatorError::Output(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::resolve(cli.config.as_deref())?;
    let annotator = config.annotator();

    let node = annotate(&annotator, cli.kind, &cli.input)?;
    let mode = if cli.compact {
        OutputMode::Compact
    } else {
        OutputMode::Pretty
    };
    JsonOutput::print_node(&node, mode)
        .map_err(|err| AnnotatorError::Output(err.to_string()))?;
    Ok(())
}

fn annotate(
    annotator: &Annotator,
    kind: InputKind,
    input: &Utf8Path,
) -> Result<ExportNode, AnnotatorError> {
    let (mut node, report): (ExportNode, AnnotationReport) = match kind {
        InputKind::Pathway => {
            let pathway: Pathway = read_input(input, kind)?;
            let mut node = ExportNode::new(node_id("pathway", pathway.st_id.as_str()));
            let report = annotator.annotate_pathway(&pathway, &mut node);
            (node, report)
        }
        InputKind::Events => {
            let events: Vec<Event> = read_input(input, kind)?;
            let mut node = ExportNode::new(node_id("events", input.file_stem().unwrap_or("input")));
            let report = annotator.annotate_event_publications(&events, &mut node);
            (node, report)
        }
        InputKind::Reaction => {
            let reaction: ReactionLikeEvent = read_input(input, kind)?;
            let mut node = ExportNode::new(node_id("reaction", reaction.st_id.as_str()));
            let report = annotator.annotate_reaction(&reaction, &mut node);
            (node, report)
        }
        InputKind::Species => {
            let entity: PhysicalEntity = read_input(input, kind)?;
            let mut node = ExportNode::new(node_id("species", entity.st_id.as_str()));
            let report = annotator.annotate_species(&entity, &mut node);
            (node, report)
        }
        InputKind::Compartment => {
            let compartment: Compartment = read_input(input, kind)?;
            let mut node = ExportNode::new(node_id("compartment", &compartment.accession));
            let report = annotator.annotate_compartment(&compartment, &mut node);
            (node, report)
        }
    };
    node.warnings = report.warnings;
    Ok(node)
}

fn read_input<T: DeserializeOwned>(path: &Utf8Path, kind: InputKind) -> Result<T, AnnotatorError> {
    let content = fs::read_to_string(path.as_std_path())
        .map_err(|_| AnnotatorError::InputRead(path.to_path_buf()))?;
    serde_json::from_str(&content).map_err(|err| AnnotatorError::InputParse {
        kind: kind.label().to_string(),
        message: err.to_string(),
    })
}

fn node_id(prefix: &str, id: &str) -> String {
    let sanitized: String = id
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("{prefix}_{sanitized}")
}
