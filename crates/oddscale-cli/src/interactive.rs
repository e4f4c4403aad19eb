//! Interactive weighing mode.
//!
//! The operator and whatever scale they drive — physical, web page, or
//! otherwise — act as the oracle. Each round prints the two groups to load
//! into the pans, then reads the scale's result text (`<`, `=`, `>`) back
//! from the terminal.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use oddscale::{
    is_resolvable, locate, max_weighings, ItemId, Outcome, ScaleError, ScaleResult, Transcript,
    WeighingOracle,
};

use crate::report::{fmt_group, render_weighings};

/// Parse an operator-entered reading.
///
/// Accepts the scale's result text plus word aliases: `<`/`left`/`l`,
/// `=`/`balanced`/`b`, `>`/`right`/`r`. Case and surrounding whitespace are
/// ignored.
pub fn parse_reading(input: &str) -> Option<Outcome> {
    let normalized = input.trim().to_ascii_lowercase();
    if let Some(outcome) = Outcome::from_symbol(&normalized) {
        return Some(outcome);
    }
    match normalized.as_str() {
        "balanced" | "b" => Some(Outcome::Balanced),
        "left" | "l" => Some(Outcome::LeftIndicated),
        "right" | "r" => Some(Outcome::RightIndicated),
        _ => None,
    }
}

/// An oracle backed by a human operator at a terminal.
pub struct ReplScale {
    editor: DefaultEditor,
    round: usize,
}

impl ReplScale {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            round: 0,
        })
    }
}

impl WeighingOracle for ReplScale {
    fn compare(&mut self, left: &[ItemId], right: &[ItemId]) -> ScaleResult<Outcome> {
        self.round += 1;
        eprintln!();
        eprintln!("  Weighing {}:", self.round);
        eprintln!("    left pan:  {}", fmt_group(left));
        eprintln!("    right pan: {}", fmt_group(right));

        loop {
            match self.editor.readline("  reading (< = >)> ") {
                Ok(line) => match parse_reading(&line) {
                    Some(outcome) => return Ok(outcome),
                    None => {
                        eprintln!("  Unrecognized reading '{}'. Enter '<', '=', or '>'.", line.trim());
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Err(ScaleError::Oracle(
                        "weighing aborted by operator".to_string(),
                    ));
                }
                Err(e) => return Err(ScaleError::Oracle(e.to_string())),
            }
        }
    }
}

/// Run an interactive search over the given candidate ids.
pub fn run_weigh(ids: &[ItemId]) -> anyhow::Result<()> {
    let mut seen = ids.to_vec();
    seen.sort_unstable();
    seen.dedup();
    if seen.len() != ids.len() {
        anyhow::bail!("candidate ids must be unique");
    }
    if !is_resolvable(ids.len()) {
        anyhow::bail!(
            "a population of {} cannot be reduced to a base case; try 1, 3, 5, 9, 11, 15, 27, ...",
            ids.len()
        );
    }

    eprintln!();
    eprintln!("  Searching {} items: {}", ids.len(), fmt_group(ids));
    if let Some(bound) = max_weighings(ids.len()) {
        eprintln!("  At most {bound} weighings needed.");
    }

    let mut scale = Transcript::new(ReplScale::new()?);
    let located = locate(ids, &mut scale)?;

    eprintln!();
    println!("The odd item is: {located}");
    println!("Took {} weighings:", scale.count());
    print!("{}", render_weighings(scale.weighings()));

    Ok(())
}
