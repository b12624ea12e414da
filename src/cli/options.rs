use crate::board::Color;

use super::error::CommandError;

pub const DEFAULT_DEPTH: u32 = 3;
pub const DEFAULT_ANALYSIS_DEPTH: u32 = 2;
/// Deeper searches are accepted but take minutes without a hash table.
pub const MAX_DEPTH: u32 = 10;

/// Settings for a coaching session, changed with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoachOptions {
    /// Depth the engine plays its own moves at
    pub depth: u32,
    /// Depth used to grade the human's moves
    pub analysis_depth: u32,
    pub human: Color,
}

impl Default for CoachOptions {
    fn default() -> Self {
        CoachOptions {
            depth: DEFAULT_DEPTH,
            analysis_depth: DEFAULT_ANALYSIS_DEPTH,
            human: Color::White,
        }
    }
}

impl CoachOptions {
    #[must_use]
    pub fn engine(&self) -> Color {
        self.human.opponent()
    }

    pub fn apply_set(&mut self, name: &str, value: &str) -> Result<(), CommandError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => self.depth = parse_depth(value)?,
            "analysis" | "analysis_depth" => self.analysis_depth = parse_depth(value)?,
            _ => {
                return Err(CommandError::InvalidArgument {
                    name: "option",
                    value: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// A search depth between 1 and [`MAX_DEPTH`].
pub fn parse_depth(value: &str) -> Result<u32, CommandError> {
    match value.parse::<u32>() {
        Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => Ok(depth),
        _ => Err(CommandError::InvalidArgument {
            name: "depth",
            value: value.to_string(),
        }),
    }
}
