use std::io::{Error, ErrorKind};
use std::process::Command;

use splitpart::{format_command, output_filename, parts_range, Config};

/// Extracts the start-end range of the input into a new file next to
/// it. Returns the splitter's trimmed output on success; a non-zero
/// exit carries that output as the error message, and a missing
/// binary surfaces as `ErrorKind::NotFound`.
pub fn run_split(config: &Config, input: &str, start: &str, end: &str) -> Result<String, Error> {
    let parts = parts_range(start, end);
    let path_out = output_filename(input);
    let args = get_splitter_args(&parts, input, &path_out);

    // Always echoed so the split can be re-run from a shell
    println!("{}", format_command(config.splitter_bin, &args));

    let output = Command::new(config.splitter_bin).args(&args).output()?;
    let mut text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        text = String::from_utf8_lossy(&output.stderr).trim().to_string();
    }

    if !output.status.success() {
        return Err(Error::new(ErrorKind::Other, text));
    }
    Ok(text)
}

fn get_splitter_args(parts: &str, path_in: &str, path_out: &str) -> Vec<String> {
    vec![
        String::from("--split"),
        String::from(parts),
        String::from(path_in),
        String::from("-o"),
        String::from(path_out),
    ]
}
