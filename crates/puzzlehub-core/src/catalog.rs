use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// Difficulty levels offered by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display label for selection UI.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Number of pre-filled clue cells a generated Sudoku keeps.
    pub fn clue_count(&self) -> usize {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 35,
            Difficulty::Hard => 25,
        }
    }

    /// Base score awarded on completion, before the time bonus.
    pub fn base_points(&self) -> u64 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 200,
            Difficulty::Hard => 300,
        }
    }

    /// Advertised time limit in seconds (catalog metadata only).
    pub fn time_limit_secs(&self) -> u64 {
        match self {
            Difficulty::Easy => 300,
            Difficulty::Medium => 600,
            Difficulty::Hard => 900,
        }
    }

    /// The next difficulty in selection order, wrapping around.
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", key)
    }
}

/// Puzzle categories presented on the home screen. Only Sudoku is playable;
/// the rest run as placeholder panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleType {
    Sudoku,
    Jigsaw,
    Logic,
    Crossword,
    Trivia,
}

impl PuzzleType {
    pub const ALL: [PuzzleType; 5] = [
        PuzzleType::Sudoku,
        PuzzleType::Jigsaw,
        PuzzleType::Logic,
        PuzzleType::Crossword,
        PuzzleType::Trivia,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PuzzleType::Sudoku => "Sudoku",
            PuzzleType::Jigsaw => "Jigsaw",
            PuzzleType::Logic => "Logic",
            PuzzleType::Crossword => "Crossword",
            PuzzleType::Trivia => "Trivia",
        }
    }

    /// Icon key for category cards.
    pub fn icon(&self) -> &'static str {
        match self {
            PuzzleType::Sudoku => "Hash",
            PuzzleType::Jigsaw => "Puzzle",
            PuzzleType::Logic => "Brain",
            PuzzleType::Crossword => "Grid3X3",
            PuzzleType::Trivia => "HelpCircle",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            PuzzleType::Sudoku => "Number placement",
            PuzzleType::Jigsaw => "Classic piece fitting",
            PuzzleType::Logic => "Mind-bending challenges",
            PuzzleType::Crossword => "Word puzzles",
            PuzzleType::Trivia => "Knowledge tests",
        }
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            PuzzleType::Sudoku => "sudoku",
            PuzzleType::Jigsaw => "jigsaw",
            PuzzleType::Logic => "logic",
            PuzzleType::Crossword => "crossword",
            PuzzleType::Trivia => "trivia",
        };
        write!(f, "{}", key)
    }
}

/// Static catalog entry. A session can only start for a (type, difficulty)
/// pair that has a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PuzzleType,
    pub difficulty: Difficulty,
    pub title: String,
    /// Advertised time limit in seconds.
    #[serde(rename = "timeLimit")]
    pub time_limit_secs: u64,
}

impl Entity for PuzzleRecord {
    const KIND: &'static str = "puzzle";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// The seeded puzzle catalog, consulted at session start.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PuzzleRecord>,
}

impl Catalog {
    pub fn new(records: Vec<PuzzleRecord>) -> Self {
        Self { records }
    }

    /// Look up the catalog entry matching a (type, difficulty) pair.
    pub fn find(&self, kind: PuzzleType, difficulty: Difficulty) -> Option<&PuzzleRecord> {
        self.records
            .iter()
            .find(|r| r.kind == kind && r.difficulty == difficulty)
    }

    pub fn records(&self) -> &[PuzzleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![PuzzleRecord {
            id: "1".into(),
            kind: PuzzleType::Sudoku,
            difficulty: Difficulty::Easy,
            title: "Classic Sudoku".into(),
            time_limit_secs: 300,
        }])
    }

    #[test]
    fn find_matches_type_and_difficulty() {
        let catalog = sample();
        assert!(catalog.find(PuzzleType::Sudoku, Difficulty::Easy).is_some());
        assert!(catalog.find(PuzzleType::Sudoku, Difficulty::Hard).is_none());
        assert!(catalog.find(PuzzleType::Jigsaw, Difficulty::Easy).is_none());
    }

    #[test]
    fn difficulty_constants() {
        assert_eq!(Difficulty::Easy.clue_count(), 45);
        assert_eq!(Difficulty::Medium.clue_count(), 35);
        assert_eq!(Difficulty::Hard.clue_count(), 25);
        assert_eq!(Difficulty::Easy.base_points(), 100);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 900);
    }

    #[test]
    fn difficulty_cycles() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn serde_keys_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&PuzzleType::Crossword).unwrap(),
            "\"crossword\""
        );
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
    }
}
