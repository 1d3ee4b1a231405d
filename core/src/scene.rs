//! Toolkit independent description of what the trainer shows.

use serde::{Deserialize, Serialize};

use crate::*;

pub const TITLE: &str = "Shot Pattern Memory Trainer";
pub const PLAYING_HINT: &str = "Click where you think the last shot was";
pub const ANSWER_HINT: &str = "The red dot shows where the last shot was";

fn score_line(label: &str, value: u32) -> String {
    format!("{label}: {value}")
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerTone {
    Neutral,
    /// The newest shot, revealed after a miss.
    Answer,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub index: usize,
    pub point: Point,
    pub tone: MarkerTone,
    pub clickable: bool,
}

impl Marker {
    /// Left edge of the marker box, so its center lands on the shot.
    pub fn left(&self) -> f64 {
        self.point.x - MARKER_DIAMETER / 2.0
    }

    pub fn top(&self) -> f64 {
        self.point.y - MARKER_DIAMETER / 2.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Memorizing,
}

impl Overlay {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Memorizing => "Holding in Memory...",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    PlayAgain,
}

impl Action {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Game",
            Self::PlayAgain => "Play Again",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Footer {
    Hint,
    Summary { final_score: u32 },
}

impl Footer {
    pub fn lines(self) -> Vec<String> {
        match self {
            Self::Hint => vec![PLAYING_HINT.to_string()],
            Self::Summary { final_score } => vec![
                format!("Game Over! Final Score: {final_score}"),
                ANSWER_HINT.to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub overlay: Option<Overlay>,
    pub score: u32,
    pub high_score: u32,
    pub action: Option<Action>,
    pub footer: Option<Footer>,
}

impl Scene {
    pub fn from_engine(engine: &ShotEngine) -> Self {
        use EngineState::*;

        let state = engine.state();
        let answer = engine.answer_index();
        let markers = engine
            .visible_shots()
            .filter(|(_, point)| point.is_renderable())
            .map(|(index, point)| Marker {
                index,
                point,
                tone: if Some(index) == answer {
                    MarkerTone::Answer
                } else {
                    MarkerTone::Neutral
                },
                clickable: state.is_playing(),
            })
            .collect();

        Self {
            markers,
            overlay: state.is_memorizing().then_some(Overlay::Memorizing),
            score: engine.score(),
            high_score: engine.high_score(),
            action: match state {
                Ready => Some(Action::Start),
                GameOver => Some(Action::PlayAgain),
                Playing | Memorizing => None,
            },
            footer: match state {
                Playing => Some(Footer::Hint),
                GameOver => Some(Footer::Summary {
                    final_score: engine.score(),
                }),
                Ready | Memorizing => None,
            },
        }
    }

    pub fn score_line(&self) -> String {
        score_line("Current Score", self.score)
    }

    pub fn high_score_line(&self) -> String {
        score_line("High Score", self.high_score)
    }
}
