use std::io::{Error, ErrorKind};

use splitpart::{normalize_time, Config};

use super::{run_dialog, DialogTool};

const FORM_DELIMITER: &str = "#";

const DESCRIPTION: &str = "Outputs a single chunk of the source video.\n\
Time format: \"hh:mm:ss\".\n\
If Start Time is empty, start from beginning.\n\
If End Time is empty, end when the video ends.";

pub fn select_file(config: &Config, tool: DialogTool) -> Result<String, Error> {
    let args = vec![
        String::from("--file-selection"),
        String::from("--title"),
        String::from("Select a video file"),
    ];
    run_dialog(config, tool, &args)
}

/// Asks for a start and end time with a two-entry form. Both fields
/// come back already normalized.
pub fn ask_time_range(config: &Config, tool: DialogTool) -> Result<(String, String), Error> {
    let output = run_dialog(config, tool, &form_args(tool))?;
    split_form_output(&output)
}

fn form_args(tool: DialogTool) -> Vec<String> {
    let (form, add_entry) = match tool {
        DialogTool::Yad => ("--form", "--field"),
        DialogTool::Zenity => ("--forms", "--add-entry"),
    };
    vec![
        String::from(form),
        String::from("--title"),
        String::from("mkvmerge split parts"),
        String::from("--text"),
        String::from(DESCRIPTION),
        String::from("--separator"),
        String::from(FORM_DELIMITER),
        String::from(add_entry),
        String::from("Start time"),
        String::from(add_entry),
        String::from("End time"),
    ]
}

fn split_form_output(output: &str) -> Result<(String, String), Error> {
    let mut chunks = output.split(FORM_DELIMITER);
    let start = match chunks.next() {
        Some(chunk) => chunk,
        None => "",
    };
    let end = match chunks.next() {
        Some(chunk) => chunk,
        None => {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("form returned too few fields: {}", output),
            ))
        }
    };
    Ok((normalize_time(start), normalize_time(end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_output_is_normalized() {
        let (start, end) = split_form_output("1:2#12:5").unwrap();
        assert_eq!(start, "00:01:02");
        assert_eq!(end, "00:12:05");
    }

    #[test]
    fn form_output_with_trailing_separator() {
        // yad appends the separator after the last field
        let (start, end) = split_form_output("5#10#").unwrap();
        assert_eq!(start, "00:00:05");
        assert_eq!(end, "00:00:10");
    }

    #[test]
    fn empty_fields_stay_empty() {
        let (start, end) = split_form_output("#").unwrap();
        assert_eq!(start, "");
        assert_eq!(end, "");
    }

    #[test]
    fn single_field_is_rejected() {
        assert!(split_form_output("5").is_err());
    }

    #[test]
    fn yad_and_zenity_use_their_own_flags() {
        let yad = form_args(DialogTool::Yad);
        assert_eq!(yad[0], "--form");
        assert!(yad.contains(&String::from("--field")));

        let zenity = form_args(DialogTool::Zenity);
        assert_eq!(zenity[0], "--forms");
        assert!(zenity.contains(&String::from("--add-entry")));
    }
}
