mod form;
pub use form::{ask_time_range, select_file};

use std::io::{Error, ErrorKind};
use std::process::Command;

use splitpart::{format_command, Config};

// yad exits with 252 when the window is closed, which still proves it
// is installed.
const YAD_CLOSED_STATUS: i32 = 252;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogTool {
    Yad,
    Zenity,
}

impl DialogTool {
    pub fn from_name(name: &str) -> Option<DialogTool> {
        match name {
            "yad" => Some(DialogTool::Yad),
            "zenity" => Some(DialogTool::Zenity),
            _ => None,
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            DialogTool::Yad => "yad",
            DialogTool::Zenity => "zenity",
        }
    }
}

/// Prefers yad when it is installed, otherwise falls back to zenity.
pub fn detect_tool() -> DialogTool {
    let result = Command::new("yad").arg("--version").output();
    match result {
        Ok(output) => match output.status.code() {
            Some(0) | Some(YAD_CLOSED_STATUS) => DialogTool::Yad,
            _ => DialogTool::Zenity,
        },
        Err(_) => DialogTool::Zenity,
    }
}

/// Runs one dialog and returns its trimmed stdout. A non-zero exit
/// means the user cancelled or closed the window.
pub fn run_dialog(config: &Config, tool: DialogTool, args: &[String]) -> Result<String, Error> {
    let mut args = args.to_vec();
    if tool == DialogTool::Yad {
        args.push(String::from("--center"));
    }
    if config.debug_dialog {
        println!("{}", format_command(tool.command(), &args));
    }

    let output = Command::new(tool.command()).args(&args).output()?;
    if !output.status.success() {
        return Err(Error::new(
            ErrorKind::Interrupted,
            "dialog cancelled or closed",
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn question(
    config: &Config,
    tool: DialogTool,
    title: &str,
    text: &str,
    failure: bool,
) -> bool {
    let image = if failure {
        "dialog-warning"
    } else {
        "dialog-question"
    };
    let args = match tool {
        DialogTool::Yad => make_args(&[
            "--image",
            image,
            "--title",
            title,
            "--text",
            text,
            "--button=gtk-yes:0",
            "--button=gtk-no:1",
        ]),
        DialogTool::Zenity => make_args(&[
            "--question",
            "--image",
            image,
            "--title",
            title,
            "--text",
            text,
        ]),
    };
    run_dialog(config, tool, &args).is_ok()
}

/// Shows the splitter output and asks whether to process another
/// video. Returns the user's answer.
pub fn show_result(config: &Config, tool: DialogTool, output: &str, failure: bool) -> bool {
    let verdict = if failure { "failed - output" } else { "output" };
    let text = format!(
        "{} {}:\n\n{}\n\nDo you want to process another video?",
        config.splitter_bin, verdict, output
    );
    let title = format!("{} result", config.splitter_bin);
    question(config, tool, &title, &text, failure)
}

fn make_args(chunks: &[&str]) -> Vec<String> {
    chunks.iter().map(|chunk| chunk.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_round_trip() {
        assert_eq!(DialogTool::from_name("yad"), Some(DialogTool::Yad));
        assert_eq!(DialogTool::from_name("zenity"), Some(DialogTool::Zenity));
        assert_eq!(DialogTool::from_name("kdialog"), None);
        assert_eq!(DialogTool::Yad.command(), "yad");
        assert_eq!(DialogTool::Zenity.command(), "zenity");
    }
}
