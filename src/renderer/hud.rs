//! HUD text layout
//!
//! Lines are horizontally centred; `y` is in field units so any backend can
//! map it onto its own rows.

use crate::sim::{GamePhase, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Small,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Centre of the line, field units from the top
    pub y: f32,
    pub size: TextSize,
}

impl HudLine {
    fn new(text: impl Into<String>, y: f32, size: TextSize) -> Self {
        Self {
            text: text.into(),
            y,
            size,
        }
    }
}

/// Text to show for this frame
pub fn hud_lines(snapshot: &Snapshot, field_height: f32) -> Vec<HudLine> {
    let mid = field_height / 2.0;
    let mut lines = vec![HudLine::new(
        format!("Score: {}", snapshot.score),
        50.0,
        TextSize::Large,
    )];

    if snapshot.phase == GamePhase::Inactive {
        if snapshot.score > 0 {
            lines.push(HudLine::new("Game Over", mid - 50.0, TextSize::Large));
            lines.push(HudLine::new(
                format!("Final Score: {}", snapshot.score),
                mid,
                TextSize::Large,
            ));
            lines.push(HudLine::new("Press SPACE to Restart", mid + 50.0, TextSize::Small));
            lines.push(HudLine::new("Press Q to Quit", mid + 80.0, TextSize::Small));
        } else {
            lines.push(HudLine::new("Press SPACE to Start", mid, TextSize::Large));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    fn snapshot(phase: GamePhase, score: u32) -> Snapshot {
        let mut snapshot = GameState::new(1, Tuning::default()).unwrap().snapshot();
        snapshot.phase = phase;
        snapshot.score = score;
        snapshot
    }

    fn texts(lines: &[HudLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_start_prompt_when_inactive_without_score() {
        let lines = hud_lines(&snapshot(GamePhase::Inactive, 0), 600.0);
        assert_eq!(texts(&lines), vec!["Score: 0", "Press SPACE to Start"]);
        assert_eq!(lines[1].y, 300.0);
    }

    #[test]
    fn test_game_over_when_inactive_with_score() {
        let lines = hud_lines(&snapshot(GamePhase::Inactive, 3), 600.0);
        assert_eq!(
            texts(&lines),
            vec![
                "Score: 3",
                "Game Over",
                "Final Score: 3",
                "Press SPACE to Restart",
                "Press Q to Quit"
            ]
        );
    }

    #[test]
    fn test_only_score_while_active() {
        let lines = hud_lines(&snapshot(GamePhase::Active, 0), 600.0);
        assert_eq!(texts(&lines), vec!["Score: 0"]);
    }
}
