//! CLI entrypoint for the Spot taste engine
//!
//! Wires the layers together with explicit dependency injection: catalogs
//! and the classifier adapter are constructed once here and passed into
//! the use cases.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use taste_application::{
    AssignPersonaInput, AssignPersonaOutput, AssignPersonaUseCase, CategorizePlaceOutput,
    CategorizePlaceUseCase, UnavailableClassifier,
};
use taste_domain::{AnswerSet, Place};
use taste_infrastructure::{ConfigLoader, FileConfig, GeminiClassifier, JsonlAuditLogger};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spot-taste", version, about = "Spot taste engine")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore all config files and use built-in catalogs
    #[arg(long, global = true)]
    no_config: bool,

    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Append computed results to a JSONL audit log
    #[arg(long, global = true)]
    audit_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a persona assignment from onboarding answers
    Persona {
        /// JSON file mapping question ids to selected option ids
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Inline selection, e.g. "night-out=dance-floor,warehouse-set" (repeatable)
        #[arg(long = "pick")]
        picks: Vec<String>,
    },
    /// Categorize a place into eat/see and a subtype
    Categorize {
        /// Place name
        #[arg(long)]
        name: String,

        /// Place description
        #[arg(long, default_value = "")]
        description: String,

        /// Provider type (repeatable)
        #[arg(long = "type")]
        provider_types: Vec<String>,

        /// Skip the AI fallback even for ambiguous places
        #[arg(long)]
        no_ai: bool,
    },
    /// Print the resolved catalogs and config sources
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_fatal()) {
        warn!("config: {}", issue.message);
    }
    if let Some(fatal) = issues.iter().find(|i| i.is_fatal()) {
        bail!("invalid configuration: {}", fatal.message);
    }

    let audit = cli
        .audit_log
        .as_ref()
        .and_then(JsonlAuditLogger::new);

    match cli.command {
        Command::Persona { answers, picks } => {
            run_persona(&config, answers, picks, cli.json, audit.as_ref())
        }
        Command::Categorize {
            name,
            description,
            provider_types,
            no_ai,
        } => {
            run_categorize(
                &config,
                Place::new(name, description).with_provider_types(provider_types),
                no_ai,
                cli.json,
                audit.as_ref(),
            )
            .await
        }
        Command::Catalog => run_catalog(&config, cli.config.as_ref()),
    }
}

fn run_persona(
    config: &FileConfig,
    answers_path: Option<PathBuf>,
    picks: Vec<String>,
    json: bool,
    audit: Option<&JsonlAuditLogger>,
) -> Result<()> {
    let answers = match answers_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid answer set in {}", path.display()))?
        }
        None => parse_picks(&picks)?,
    };

    let use_case = AssignPersonaUseCase::new(
        Arc::new(config.questions.clone()),
        Arc::new(config.personas.clone()),
    )?;
    let output = use_case.execute(AssignPersonaInput::new(answers));

    if let Some(audit) = audit {
        audit.log_assignment(&output);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_assignment(&output);
    }
    Ok(())
}

async fn run_categorize(
    config: &FileConfig,
    place: Place,
    no_ai: bool,
    json: bool,
    audit: Option<&JsonlAuditLogger>,
) -> Result<()> {
    let taxonomy = Arc::new(config.taxonomy.clone());
    let params = config.classifier.params();
    let api_key = config.classifier.resolve_api_key();

    // === Dependency Injection ===
    // Pick the classifier adapter; without a key the fallback contract
    // still applies, so ambiguous places degrade to eat/Restaurant.
    let output = if no_ai || !config.classifier.enabled {
        let use_case =
            CategorizePlaceUseCase::new(Arc::new(UnavailableClassifier), taxonomy).with_params(params);
        use_case.execute(&place).await
    } else if let Some(api_key) = api_key {
        let classifier = Arc::new(GeminiClassifier::new(
            &config.classifier.endpoint,
            &params.model,
            api_key,
        ));
        let use_case = CategorizePlaceUseCase::new(classifier, taxonomy).with_params(params);
        use_case.execute(&place).await
    } else {
        info!("No classifier API key configured, AI fallback disabled");
        let use_case =
            CategorizePlaceUseCase::new(Arc::new(UnavailableClassifier), taxonomy).with_params(params);
        use_case.execute(&place).await
    };

    if let Some(audit) = audit {
        audit.log_categorization(&place, &output);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_categorization(&place, &output);
    }
    Ok(())
}

fn run_catalog(config: &FileConfig, explicit_path: Option<&PathBuf>) -> Result<()> {
    println!("Configuration sources (in priority order):");
    if let Some(path) = explicit_path {
        println!("  [FOUND] Explicit: {}", path.display());
    }
    match ConfigLoader::project_config_path() {
        Some(path) => println!("  [FOUND] Project: {}", path.display()),
        None => println!("  [     ] Project: ./spot-taste.toml or ./.spot-taste.toml"),
    }
    if let Some(path) = ConfigLoader::global_config_path() {
        let marker = if path.exists() { "FOUND" } else { "     " };
        println!("  [{marker}] Global:  {}", path.display());
    }
    println!("  [     ] Default: built-in catalogs");
    println!();

    println!("Questions ({}):", config.questions.len());
    for question in &config.questions {
        println!(
            "  {} [{}] max {} — {} options",
            question.id,
            question.category,
            question.max_picks,
            question.options.len()
        );
    }
    println!();

    println!("Personas ({}):", config.personas.len());
    for persona in &config.personas {
        println!(
            "  {} {} — {} tags",
            persona.emoji,
            persona.name,
            persona.tags.len()
        );
    }
    println!();

    println!(
        "Taxonomy: {} eat types, {} see types, {} ambiguous types, {} cuisine rules",
        config.taxonomy.eat_types.len(),
        config.taxonomy.see_types.len(),
        config.taxonomy.ambiguous_types.len(),
        config.taxonomy.cuisine_rules.len()
    );
    Ok(())
}

/// Parse inline "question=opt1,opt2" selections into an answer set
fn parse_picks(picks: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for pick in picks {
        let Some((question_id, options)) = pick.split_once('=') else {
            bail!("invalid --pick '{pick}', expected question=option[,option]");
        };
        for option_id in options.split(',').filter(|o| !o.is_empty()) {
            answers.select(question_id, option_id);
        }
    }
    Ok(answers)
}

fn print_assignment(output: &AssignPersonaOutput) {
    let primary = &output.assignment.primary;
    println!("{} {}", primary.emoji, primary.name);
    println!("{}", primary.description);
    println!("\"{}\"", primary.reveal_comment);

    if let Some(secondary) = &output.assignment.secondary {
        println!();
        println!("Also a bit of: {} {}", secondary.emoji, secondary.name);
    }

    println!();
    println!("Scores:");
    for score in &output.scores {
        println!("  {:<20} {}", score.persona_id, score.score);
    }
}

fn print_categorization(place: &Place, output: &CategorizePlaceOutput) {
    println!(
        "{}: {} / {} ({:?})",
        place.name, output.categorization.main_category, output.categorization.subtype, output.source
    );
}
