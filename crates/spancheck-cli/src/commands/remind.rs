//! `spancheck remind`: print a graduation reminder per student.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use spancheck_linalg::roster::Roster;

pub const NAMES_PROMPT: &str = "Enter names separated by comma:";
pub const ASSIGNMENTS_PROMPT: &str = "Enter assignments separated by comma:";
pub const GRADES_PROMPT: &str = "Enter grades separated by comma:";

/// The three comma-separated lists, each either given up front or prompted for.
#[derive(Debug, Clone, Default)]
pub struct RemindInput {
    pub names: Option<String>,
    pub assignments: Option<String>,
    pub grades: Option<String>,
}

impl RemindInput {
    /// Fill in missing lists by prompting on `prompt_out` and reading lines from `input`.
    pub fn resolve<R: BufRead, W: Write>(self, input: &mut R, prompt_out: &mut W) -> Result<Roster> {
        let names = value_or_prompt(self.names, NAMES_PROMPT, input, prompt_out)?;
        let assignments = value_or_prompt(self.assignments, ASSIGNMENTS_PROMPT, input, prompt_out)?;
        let grades = value_or_prompt(self.grades, GRADES_PROMPT, input, prompt_out)?;

        Roster::from_lists(&names, &assignments, &grades).context("Invalid student lists")
    }
}

fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<String>,
    prompt: &str,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    write!(prompt_out, "{}", prompt)?;
    prompt_out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read answer to {:?}", prompt))?;
    if read == 0 {
        anyhow::bail!("Input ended before answering {:?}", prompt);
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

pub fn write_reminders<W: Write>(roster: &Roster, out: &mut W) -> Result<()> {
    for student in roster.students() {
        log::debug!(
            "{}: grade {} can reach {}",
            student.name(),
            student.current_grade(),
            student.potential_grade()
        );
        writeln!(out, "{}", student.reminder())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_only_for_missing_lists() {
        let input = RemindInput {
            names: Some("Ana,Bo".to_string()),
            assignments: None,
            grades: Some("80,90".to_string()),
        };
        let mut stdin = Cursor::new("3,1\n");
        let mut prompts = Vec::new();

        let roster = input.resolve(&mut stdin, &mut prompts).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(String::from_utf8(prompts).unwrap(), ASSIGNMENTS_PROMPT);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut stdin = Cursor::new("");
        let mut prompts = Vec::new();
        assert!(RemindInput::default().resolve(&mut stdin, &mut prompts).is_err());
    }

    #[test]
    fn one_block_per_student() {
        let roster = Roster::from_lists("Ana,Bo", "3,1", "80,90").unwrap();
        let mut out = Vec::new();
        write_reminders(&roster, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("This is a reminder").count(), 2);
        assert!(text.starts_with("Hi Ana,\n\n"));
        assert!(text.contains("Hi Bo,\n\n"));
    }
}
