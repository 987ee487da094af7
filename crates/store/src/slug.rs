use regex::Regex;
use std::sync::OnceLock;

pub const NOTE_EXTENSION: &str = ".md";

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\x{FEFF}]+").expect("static whitespace regex"))
}

/// Map a note title to its storage file name.
///
/// Lowercases the title, collapses every whitespace run (leading and trailing runs
/// included, U+FEFF counted as whitespace) into a single `-` and appends `.md`. Total: any string yields a name, and two
/// titles that differ only in case or spacing map to the same file.
pub fn title_to_filename(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut out = whitespace_run().replace_all(&lowered, "-").into_owned();
    out.push_str(NOTE_EXTENSION);
    out
}

/// Full on-disk content for a note: H1 title header, blank line, body, trailing newline.
pub fn render_note(title: &str, body: &str) -> String {
    format!("# {title}\n\n{body}\n")
}
