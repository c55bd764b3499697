// SPDX-License-Identifier: MPL-2.0
use community_gallery::app::{self, paths, Flags};
use std::process::ExitCode;

const HELP: &str = "\
community-gallery - browse a community photo gallery

USAGE:
  community-gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>            UI language (e.g. en-US, ta, hi)
  --api-base <URL>           Base URL of the gallery API
  --category <KEY>           Open the gallery on this category
  --i18n-dir <DIR>           Load extra translation files from DIR
  --config-dir <DIR>         Read and write settings.toml in DIR
  --dump-diagnostics <FILE>  Write the diagnostics log to FILE on exit
  -h, --help                 Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_base: args.opt_value_from_str("--api-base")?,
        category: args.opt_value_from_str("--category")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        dump_diagnostics: args.opt_value_from_str("--dump-diagnostics")?,
    })
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("error: unexpected arguments: {remaining:?}\n\n{HELP}");
        return ExitCode::from(2);
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
