//! Weather card CLI
//!
//! Renders weather cards from JSON records, replays UI message streams and
//! runs the offline demo source.

#![allow(clippy::print_stdout)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use application::{
    ApplicationError, CardHost, CardOptions, CardRendererPort, CardService, DEFAULT_BACKGROUND,
    DEFAULT_ICON, RenderFormat, is_known_condition, known_conditions, visuals_for,
};
use clap::{Parser, Subcommand};
use domain::{UiMessage, WeatherRecord};
use infrastructure::{AppConfig, DemoWeatherAdapter, TemplateCardRenderer, TemplateEngine};
use tracing::debug;

/// Weather card CLI
#[derive(Parser)]
#[command(name = "weather-card")]
#[command(author, version, about = "Render animated weather cards", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./weather-card.toml when present)
    #[arg(short, long, global = true, env = "WEATHER_CARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one weather record
    ///
    /// Example: echo '{"city":"北京","condition":"晴天"}' | weather-card render --format text
    Render {
        /// JSON record file, `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format: html, text or json
        #[arg(short, long, default_value = "html")]
        format: RenderFormat,

        /// Render the card before its mount trigger fires
        #[arg(long)]
        no_mount: bool,

        /// Fail when a required field is blank
        #[arg(long)]
        strict: bool,
    },

    /// Show the icon and background for a condition label
    Visuals {
        /// Condition label, matched exactly
        condition: String,
    },

    /// List every known condition label with its visuals
    Conditions,

    /// Feed a JSON array of UI messages through the card host
    Replay {
        /// JSON file, `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format: html, text or json
        #[arg(short, long, default_value = "json")]
        format: RenderFormat,
    },

    /// Answer a free-text request from the bundled demo dataset
    ///
    /// Example: weather-card demo "北京天气怎么样" --format text
    Demo {
        /// Request text, e.g. "北京天气怎么样"
        message: String,

        /// Output format: html, text or json
        #[arg(short, long, default_value = "text")]
        format: RenderFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Read a file, or stdin when the path is absent or `-`
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        },
    }
}

fn build_renderer(config: &AppConfig) -> anyhow::Result<Arc<TemplateCardRenderer>> {
    let engine = TemplateEngine::with_config(config.templates.clone())
        .context("failed to load card templates")?;
    Ok(Arc::new(TemplateCardRenderer::with_engine(
        engine,
        config.card.transition(),
    )))
}

fn describe_visuals(condition: &str) -> String {
    let visuals = visuals_for(condition);
    let marker = if is_known_condition(condition) {
        ""
    } else {
        " (default)"
    };
    format!("{}  {}{marker}", visuals.icon, visuals.background)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    infrastructure::init_telemetry(&config.telemetry, log_filter_from_verbosity(cli.verbose))
        .context("failed to initialize logging")?;
    debug!(environment = %config.environment, "Starting weather-card");

    match cli.command {
        Commands::Render {
            input,
            format,
            no_mount,
            strict,
        } => {
            let record = WeatherRecord::from_json(&read_input(input.as_deref())?)
                .context("invalid weather record")?;

            let base = config.card.options();
            let options = CardOptions {
                auto_mount: base.auto_mount && !no_mount,
                strict: base.strict || strict,
            };
            let service = CardService::new(build_renderer(&config)?).with_options(options);

            let presented = service.present(record, format)?;
            println!("{}", presented.output);
        },

        Commands::Visuals { condition } => {
            println!("{}", describe_visuals(&condition));
        },

        Commands::Conditions => {
            for (label, visuals) in known_conditions() {
                println!("{label}\t{}  {}", visuals.icon, visuals.background);
            }
            println!("*\t{DEFAULT_ICON}  {DEFAULT_BACKGROUND}");
        },

        Commands::Replay { input, format } => {
            let messages = UiMessage::batch_from_json(&read_input(input.as_deref())?)
                .context("invalid UI message stream")?;
            let renderer = build_renderer(&config)?;
            let mut host = if config.card.auto_mount {
                CardHost::new()
            } else {
                CardHost::manual_mount()
            };

            for message in &messages {
                let card = match host.apply(message) {
                    Ok(card) => card,
                    // already logged by the host
                    Err(ApplicationError::UnknownComponent(_)) => continue,
                    Err(e) => {
                        return Err(e).with_context(|| format!("message {} failed", message.id));
                    },
                };
                println!("{}", renderer.render(&card, format)?);
            }
            debug!(messages = messages.len(), cards = host.len(), "Replay finished");
        },

        Commands::Demo { message, format } => {
            let source = Arc::new(DemoWeatherAdapter::new()?);
            let service = CardService::new(build_renderer(&config)?)
                .with_source(source)
                .with_options(config.card.options());

            let (sourced, presented) = service.present_request(&message, format)?;
            if format != RenderFormat::Json {
                println!("{}", sourced.reply);
                println!();
            }
            println!("{}", presented.output);
        },

        Commands::Config => {
            let rendered =
                toml::to_string_pretty(&config).context("failed to serialize configuration")?;
            print!("{rendered}");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn parses_render_defaults() {
        let cli = parse(&["weather-card", "render"]);
        let Commands::Render {
            input,
            format,
            no_mount,
            strict,
        } = cli.command
        else {
            panic!("Expected Render command");
        };
        assert!(input.is_none());
        assert_eq!(format, RenderFormat::Html);
        assert!(!no_mount);
        assert!(!strict);
    }

    #[test]
    fn parses_render_flags() {
        let cli = parse(&[
            "weather-card",
            "-vv",
            "render",
            "--input",
            "record.json",
            "--format",
            "txt",
            "--no-mount",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Render {
            input,
            format,
            no_mount,
            ..
        } = cli.command
        else {
            panic!("Expected Render command");
        };
        assert_eq!(input, Some(PathBuf::from("record.json")));
        assert_eq!(format, RenderFormat::Text);
        assert!(no_mount);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["weather-card", "render", "--format", "pdf"]).is_err());
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = parse(&["weather-card", "conditions", "--config", "cards.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("cards.toml")));
        assert!(matches!(cli.command, Commands::Conditions));
    }

    #[test]
    fn parses_demo_message() {
        let cli = parse(&["weather-card", "demo", "上海天气"]);
        let Commands::Demo { message, format } = cli.command else {
            panic!("Expected Demo command");
        };
        assert_eq!(message, "上海天气");
        assert_eq!(format, RenderFormat::Text);
    }

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(r#"{"city":"杭州"}"#.as_bytes()).unwrap();
        let contents = read_input(Some(file.path())).unwrap();
        assert_eq!(contents, r#"{"city":"杭州"}"#);
    }

    #[test]
    fn read_input_missing_file_fails() {
        assert!(read_input(Some(Path::new("/nonexistent/record.json"))).is_err());
    }

    #[test]
    fn describe_known_and_unknown_visuals() {
        assert_eq!(describe_visuals("雪"), "❄️  from-blue-200 to-white");
        assert_eq!(
            describe_visuals("龙卷风"),
            "🌤️  from-blue-400 to-blue-600 (default)"
        );
    }

    #[test]
    fn renderer_builds_from_default_config() {
        let renderer = build_renderer(&AppConfig::default()).unwrap();
        assert_eq!(renderer.transition().duration_ms, 500);
    }
}
