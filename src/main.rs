// SPDX-License-Identifier: MPL-2.0
use payo::app::{self, Flags};

const HELP: &str = "\
Payo - balances screen mockup

USAGE:
  payo [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  --nav-url <URL>        Alternative tab bar background graphic
  --write-config         Write the effective settings to settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  PAYO_CONFIG_DIR        Config directory (overridden by --config-dir)
  PAYO_LOG               Log filter directives (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        nav_url: args.opt_value_from_str("--nav-url")?,
        write_config: args.contains("--write-config"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    payo::logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
