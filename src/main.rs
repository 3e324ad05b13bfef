use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tunedex::configuration::{get_configuration, CliOverrides};
use tunedex::logging::init_logging;
use tunedex::startup::run;

fn main() -> anyhow::Result<()> {
    let args = Command::new("tunedex")
        .about("🎵 Builds a JSON manifest of your music library from its tags 🎵")
        .arg(
            Arg::new("alphabetical")
                .short('a')
                .long("alphabetical")
                .action(ArgAction::SetTrue)
                .help("Keep one artist per starting letter and write manifest_small files"),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
        .arg(
            Arg::new("denom")
                .short('d')
                .long("denom")
                .value_parser(value_parser!(u32).range(1..))
                .help("Drop the first 1/N of the shuffled artists from the compact manifest"),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_parser(value_parser!(PathBuf))
                .help("Music folder to scan (default: current directory)"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_parser(value_parser!(PathBuf))
                .help("Where to write the manifests (default: current directory)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("YAML settings file (default: ./tunedex.yaml if present)"),
        )
        .get_matches();

    let cli = CliOverrides {
        config_file: args.get_one::<PathBuf>("config").cloned(),
        library_root: args.get_one::<PathBuf>("root").cloned(),
        output_dir: args.get_one::<PathBuf>("output-dir").cloned(),
        alphabetical: args.get_flag("alphabetical"),
        silent: args.get_flag("silent"),
        denom: args.get_one::<u32>("denom").copied(),
    };

    let settings = get_configuration(&cli)?;
    init_logging(settings.silent);

    run(&settings)?;
    Ok(())
}
