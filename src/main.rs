// SPDX-License-Identifier: MPL-2.0
use iced_onboarding::app::{self, paths, Flags};
use iced_onboarding::config::{self, Config};
use iced_onboarding::i18n::fluent::I18n;
use iced_onboarding::onboarding::slides;
use iced_onboarding::ui::theming::ThemeMode;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
iced_onboarding

USAGE:
  iced_onboarding [OPTIONS]

OPTIONS:
  --lang <ID>              Locale override (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --theme <MODE>           light, dark or system
  --write-default-config   Write settings.toml with default values and exit
  -v, --verbose            Enable debug logging
  -h, --help               Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    theme: Option<ThemeMode>,
    write_default_config: bool,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str("--theme")?,
        write_default_config: args.contains("--write-default-config"),
        verbose: args.contains(["-v", "--verbose"]),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments {remaining:?}");
    }
    Ok(Some(parsed))
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "iced_onboarding=debug"
    } else {
        "iced_onboarding=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn write_default_config() -> ExitCode {
    match config::save_with_override(&Config::default(), None) {
        Ok(Some(path)) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("Error: no configuration directory available");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            eprint!("{HELP}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);
    paths::init_cli_overrides(args.config_dir);

    if args.write_default_config {
        return write_default_config();
    }

    let (config, config_warning) = config::load();
    let i18n = I18n::new(args.lang.clone(), &config);
    if let Some(key) = config_warning {
        tracing::warn!("{}", i18n.tr(&key));
    }

    let deck = match slides::default_deck(&i18n) {
        Ok(deck) => deck,
        Err(err) => {
            tracing::error!(error = %err, "{}", i18n.tr(err.i18n_key()));
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang: args.lang,
        deck,
        settings: config.carousel_settings(),
        theme_mode: args.theme.unwrap_or(config.general.theme_mode),
        config,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
