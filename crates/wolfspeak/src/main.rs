//! Compose a speech prompt for one scenario and send it to the model.
//!
//! Reads the API key from `OPENAI_API_KEY` (a `.env` file is honored).
//! Logs go to stderr, filtered by `WOLFSPEAK_LOG` (default `warn`).
//!
//! # Examples
//!
//! ```sh
//! # Print the prompt only
//! wolfspeak --scenarios scenario.json --id S6 --role werewolf --dry-run
//!
//! # Tune the knobs and call the model
//! wolfspeak --id S6 --role villager \
//!   --set aggression=high --set persona_tone=assertive --set include_examples=true
//!
//! # Knobs from a file, Chinese text bank
//! wolfspeak --id S2 --overrides-file knobs.json --set language=zh
//! ```

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wolfspeak::client::{API_KEY_ENV, DEFAULT_MODEL, DEFAULT_TEMPERATURE, OPENAI_CHAT_URL};
use wolfspeak::prelude::*;

const SEPARATOR: &str = "========================================";

/// Compose a speech prompt for one scenario and send it to the model.
#[derive(Parser)]
#[command(name = "wolfspeak")]
struct Cli {
    // ── Scenario ───────────────────────────────────────────────
    /// Scenario document: a flat `scenarios` list or `groups` of them
    #[arg(long, default_value = "scenario.json")]
    scenarios: PathBuf,

    /// Id of the scenario to run
    #[arg(long)]
    id: String,

    /// Faction to speak as: werewolf or villager
    #[arg(long, default_value = "werewolf")]
    role: String,

    // ── Prompt knobs ───────────────────────────────────────────
    /// Knob override, repeatable (e.g. --set aggression=high)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, Value)>,

    /// JSON object of knob overrides, applied before --set
    #[arg(long)]
    overrides_file: Option<PathBuf>,

    /// Fail when a claimed role has no capability entry
    #[arg(long)]
    strict_professions: bool,

    // ── Model ──────────────────────────────────────────────────
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Upper bound on output tokens
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Optional system message sent before the prompt
    #[arg(long)]
    system: Option<String>,

    // ── Transport ──────────────────────────────────────────────
    /// Chat completions endpoint
    #[arg(long, default_value = OPENAI_CHAT_URL)]
    endpoint: String,

    /// Environment variable holding the API key
    #[arg(long, default_value = API_KEY_ENV)]
    api_key_env: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    // ── Output mode ────────────────────────────────────────────
    /// Print the prompt without calling the model
    #[arg(long)]
    dry_run: bool,
}

/// Parse `key=value`. `true`/`false` become booleans, anything else a string.
fn parse_override(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    let value = match value.trim() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    };
    Ok((key.to_string(), value))
}

fn collect_overrides(cli: &Cli) -> wolfspeak::Result<Map<String, Value>> {
    let mut overrides = match &cli.overrides_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| Error::Overrides(format!("failed to read '{}': {e}", path.display())))?;
            serde_json::from_str::<Map<String, Value>>(&text)
                .map_err(|e| Error::Overrides(format!("'{}' is not a JSON object: {e}", path.display())))?
        }
        None => Map::new(),
    };
    for (key, value) in &cli.overrides {
        overrides.insert(key.clone(), value.clone());
    }
    Ok(overrides)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WOLFSPEAK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> wolfspeak::Result<()> {
    let scenario = load_scenario(&cli.scenarios, &cli.id)?;
    let overrides = collect_overrides(&cli)?;
    let config = PromptConfig::from_overrides(&overrides)?;
    let role: Role = cli.role.parse()?;

    let prompt = Composer::new(config.language)
        .strict_professions(cli.strict_professions)
        .compose(role, &scenario, &config)?;

    println!("{SEPARATOR}");
    println!("[PROMPT: role={role}, scenario={}]", cli.id);
    println!("{SEPARATOR}");
    println!("{prompt}");
    println!("{SEPARATOR}");

    if cli.dry_run {
        println!("[DRY-RUN] Skipping completion call.");
        return Ok(());
    }

    let mut client_config = ClientConfig::default()
        .with_endpoint(cli.endpoint)
        .with_credential(Credential::Env(cli.api_key_env));
    if let Some(secs) = cli.timeout_secs {
        client_config = client_config.with_timeout(Duration::from_secs(secs));
    }
    let client = ChatClient::new(client_config)?;

    let params = CompletionParams {
        model: cli.model,
        temperature: cli.temperature,
        max_output_tokens: cli.max_tokens,
        system: cli.system,
    };
    let text = client.complete(&prompt, &params).await?;

    println!("[LLM OUTPUT]");
    println!("{SEPARATOR}");
    println!("{}", text.trim());
    println!("{SEPARATOR}");
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_splits_on_first_equals() {
        assert_eq!(
            parse_override("persona_tone=calm").unwrap(),
            ("persona_tone".into(), Value::String("calm".into()))
        );
        assert_eq!(
            parse_override("note=a=b").unwrap(),
            ("note".into(), Value::String("a=b".into()))
        );
    }

    #[test]
    fn parse_override_maps_booleans() {
        assert_eq!(
            parse_override("include_examples=true").unwrap().1,
            Value::Bool(true)
        );
        assert_eq!(
            parse_override("include_examples=false").unwrap().1,
            Value::Bool(false)
        );
    }

    #[test]
    fn parse_override_rejects_malformed_input() {
        assert!(parse_override("aggression").is_err());
        assert!(parse_override("=high").is_err());
    }

    #[test]
    fn cli_collects_repeated_overrides() {
        let cli = Cli::try_parse_from([
            "wolfspeak",
            "--id",
            "S6",
            "--set",
            "aggression=high",
            "--set",
            "include_examples=true",
        ])
        .unwrap();
        let overrides = collect_overrides(&cli).unwrap();
        assert_eq!(overrides["aggression"], "high");
        assert_eq!(overrides["include_examples"], true);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert!(!cli.dry_run);
    }
}
