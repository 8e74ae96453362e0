mod dialog;
mod splitter;

use std::io::ErrorKind;

use clap::{arg, command, ArgMatches};
use splitpart::{Config, Settings};

use dialog::DialogTool;

fn read_settings(path: &str) -> Settings {
    let f = std::fs::File::open(path).expect("Could not open settings file");
    let settings: Settings = serde_yaml::from_reader(f).expect("could not read settings");
    settings
}

fn get_tool(matches: &ArgMatches, settings: &Settings) -> DialogTool {
    let name = matches
        .get_one::<String>("tool")
        .or(settings.tool.as_ref());
    match name {
        Some(name) => DialogTool::from_name(name)
            .unwrap_or_else(|| panic!("Unknown dialog tool: {}", name)),
        None => dialog::detect_tool(),
    }
}

fn main() {
    let matches = &command!()
        .arg(arg!(-c <settings_path> "Path to a yaml settings file").required(false))
        .arg(arg!(-t <tool> "Dialog tool to use, yad or zenity").required(false))
        .arg(arg!(-d --debug "Print dialog commands before running them"))
        .get_matches();

    let settings = match matches.get_one::<String>("settings_path") {
        Some(path) => read_settings(path),
        None => Settings::default(),
    };

    let debug = matches.get_flag("debug") || settings.debug.unwrap_or(false);
    let splitter_bin = match &settings.splitter {
        Some(bin) => bin.as_str(),
        None => "mkvmerge",
    };
    let config = &Config {
        debug_dialog: debug,
        debug,
        splitter_bin,
    };

    let tool = get_tool(matches, &settings);
    if config.debug {
        println!("Using dialog tool: {}", tool.command());
    }

    loop {
        let (filename, start, end) = match collect_request(config, tool) {
            Ok(request) => request,
            Err(_) => {
                println!("dialog failed or closed");
                break;
            }
        };

        let (output, failed) = match splitter::run_split(config, &filename, &start, &end) {
            Ok(output) => (output, false),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let message = format!("{} not found!", config.splitter_bin);
                dialog::show_result(config, tool, &message, true);
                std::process::exit(1);
            }
            Err(err) => (err.to_string(), true),
        };

        let keep_running = dialog::show_result(config, tool, &output, failed);
        if !keep_running {
            break;
        }
    }
}

fn collect_request(
    config: &Config,
    tool: DialogTool,
) -> Result<(String, String, String), std::io::Error> {
    let filename = dialog::select_file(config, tool)?;
    let (start, end) = dialog::ask_time_range(config, tool)?;
    Ok((filename, start, end))
}
