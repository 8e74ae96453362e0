use serde::Deserialize;

const DELIMITER_TIME: &str = ":";

const TIME_SEGMENTS: usize = 3;
const SEGMENT_WIDTH: usize = 2;

/// Optional settings file, read from the path given with `-c`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub tool: Option<String>,
    pub debug: Option<bool>,
    pub splitter: Option<String>,
}

pub struct Config<'a> {
    pub debug_dialog: bool,
    pub debug: bool,
    pub splitter_bin: &'a str,
}

/// Cleans and normalizes a user supplied time string.
///
/// Allows inputs of format: "ss", "mm:ss", "hh:mm:ss" - and partial
/// numbers without leading zeros. The output is always "hh:mm:ss".
/// Empty strings are directly returned, as they mean use the start/end
/// time of the video.
///
/// # Examples
///
/// Basic usage
///
/// ```
/// let time = splitpart::normalize_time("12:5");
/// assert_eq!(time, "00:12:05");
/// ```
///
/// A lone number is taken as seconds
///
/// ```
/// let time = splitpart::normalize_time("5");
/// assert_eq!(time, "00:00:05");
/// ```
pub fn normalize_time(time: &str) -> String {
    let time = time.trim();
    if time.is_empty() {
        return String::new();
    }

    let mut chunks: Vec<String> = time
        .split(DELIMITER_TIME)
        .map(|chunk| format!("{:0>width$}", chunk, width = SEGMENT_WIDTH))
        .collect();

    while chunks.len() < TIME_SEGMENTS {
        chunks.insert(0, String::from("00"));
    }

    chunks.join(DELIMITER_TIME)
}

/// Builds the range value for the splitter's `--split` flag.
///
/// # Example
///
/// Basic usage
///
/// ```
/// let parts = splitpart::parts_range("00:01:00", "00:02:30");
/// assert_eq!(parts, "parts:00:01:00-00:02:30");
/// ```
pub fn parts_range(start: &str, end: &str) -> String {
    format!("parts:{}-{}", start, end)
}

// TODO strip the original extension instead of appending to it
pub fn output_filename(input: &str) -> String {
    format!("{}.cut.mkv", input)
}

/// Renders a command the way it would be typed in a shell, quoting
/// chunks that contain spaces.
///
/// # Example
///
/// Basic usage
///
/// ```
/// let args = vec![String::from("-o"), String::from("my video.mkv")];
/// let line = splitpart::format_command("mkvmerge", &args);
/// assert_eq!(line, "mkvmerge -o \"my video.mkv\"");
/// ```
pub fn format_command(program: &str, args: &[String]) -> String {
    let mut chunks = vec![quote_chunk(program)];
    for arg in args {
        chunks.push(quote_chunk(arg));
    }
    chunks.join(" ")
}

fn quote_chunk(chunk: &str) -> String {
    if chunk.contains(' ') {
        format!("\"{}\"", chunk)
    } else {
        chunk.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_empty_passes_through() {
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("   "), "");
    }

    #[test]
    fn normalize_pads_missing_segments() {
        assert_eq!(normalize_time("5"), "00:00:05");
        assert_eq!(normalize_time("12:5"), "00:12:05");
        assert_eq!(normalize_time("1:2:3"), "01:02:03");
    }

    #[test]
    fn normalize_keeps_wide_segments() {
        assert_eq!(normalize_time("100:00:00"), "100:00:00");
        assert_eq!(normalize_time("99"), "00:00:99");
    }

    #[test]
    fn normalize_trims_padding() {
        assert_eq!(normalize_time("  4:20  "), "00:04:20");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["5", "12:5", "1:2:3", "100:00:00", "0:0:0"] {
            let once = normalize_time(input);
            assert_eq!(normalize_time(&once), once);
        }
    }

    #[test]
    fn output_appends_suffix() {
        assert_eq!(output_filename("video.mkv"), "video.mkv.cut.mkv");
    }

    #[test]
    fn format_quotes_spaces_only() {
        let args = vec![String::from("--title"), String::from("a b")];
        assert_eq!(format_command("zenity", &args), "zenity --title \"a b\"");
    }
}
