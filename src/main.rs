// SPDX-License-Identifier: MPL-2.0
use iced_tee::app::{self, paths, Flags};

const HELP: &str = "\
Iced Tee: t-shirt customizer with live 2D and 3D previews

USAGE:
  iced_tee [OPTIONS] [IMAGE]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --assets-dir <DIR>   Directory holding images/ and models/
  --3d                 Open the 3D preview first
  -h, --help           Print this help

ARGS:
  IMAGE                Image to load as if it had been dropped
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = parse_flags(args);
    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Flags {
    let lang = opt_string(&mut args, "--lang");
    let config_dir = opt_string(&mut args, "--config-dir");
    let assets_dir = opt_string(&mut args, "--assets-dir");
    let start_in_3d = args.contains("--3d");

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Flags {
        lang,
        file_path,
        config_dir,
        assets_dir,
        start_in_3d,
    }
}

/// Reads an optional string option, logging and ignoring malformed values.
fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
