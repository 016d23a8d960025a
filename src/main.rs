use clap::{Parser, ValueEnum};
use trovu_env::{EnvError, EnvParams, NamespaceRef};

#[derive(Parser)]
#[command(name = "trovu-env")]
#[command(version)]
#[command(
    about = "Resolve a trovu environment: merge configuration sources and fetch namespace shortcuts",
    long_about = None
)]
struct Cli {
    /// Two-letter language code (defaults to the system locale)
    #[arg(short, long)]
    language: Option<String>,
    /// Two-letter country code (defaults to the system locale)
    #[arg(short, long)]
    country: Option<String>,
    /// Github handle whose personal configuration is merged in
    #[arg(short, long)]
    github: Option<String>,
    /// Namespace reference, repeatable; overrides configured namespaces
    ///
    /// Accepts the same shapes as a configuration document: a bare name
    /// ("o", "johnsmith") or an inline mapping ("{github: .}",
    /// "{name: corp, url: https://...}").
    #[arg(short, long = "namespace", value_name = "REF")]
    namespace: Vec<String>,
    /// Bypass cached documents when fetching
    #[arg(long)]
    reload: bool,
    /// Print one diagnostic line per namespace outcome
    #[arg(long)]
    debug: bool,
    /// Output format for the resolved environment
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), EnvError> {
    let params = EnvParams {
        language: cli.language,
        country: cli.country,
        github: cli.github,
        debug: cli.debug.then_some(true),
        reload: cli.reload.then_some(true),
        namespaces: parse_namespace_refs(&cli.namespace)?,
        extra: Default::default(),
    };

    let environment = trovu_env::resolve_environment(params).await?;

    let rendered = match cli.format {
        Format::Yaml => serde_yaml::to_string(&environment)
            .map_err(|err| EnvError::config_error(format!("Failed to render YAML: {}", err)))?,
        Format::Json => serde_json::to_string_pretty(&environment)
            .map_err(|err| EnvError::config_error(format!("Failed to render JSON: {}", err)))?,
    };
    println!("{}", rendered);
    Ok(())
}

fn parse_namespace_refs(raw: &[String]) -> Result<Option<Vec<NamespaceRef>>, EnvError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.iter()
        .map(|value| {
            serde_yaml::from_str(value).map_err(|err| {
                EnvError::config_error(format!("Invalid namespace reference {:?}: {}", value, err))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
