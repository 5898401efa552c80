use serde::{Deserialize, Serialize};

/// One program section of a program-notes text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramNote {
    pub program_name: String,
    pub info: String,
}

/// Parses program notes.
///
/// A line starting with `#` opens a new program named by the rest of the
/// line; the non-blank lines that follow become its info. Text before the
/// first heading, or under an empty heading, belongs to no program and is
/// dropped.
pub fn parse_program_notes(content: &str) -> Vec<ProgramNote> {
    let mut notes = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(heading) = line.strip_prefix('#') {
            if let Some((name, info)) = current.take().filter(|(name, _)| !name.is_empty()) {
                notes.push(finish(name, &info));
            }
            current = Some((heading.trim().to_string(), Vec::new()));
        } else if let Some((_, info)) = current.as_mut() {
            info.push(line);
        }
    }

    if let Some((name, info)) = current.filter(|(name, _)| !name.is_empty()) {
        notes.push(finish(name, &info));
    }

    notes
}

fn finish(program_name: String, info: &[&str]) -> ProgramNote {
    ProgramNote {
        program_name,
        info: info.join("\n").trim().to_string(),
    }
}
