use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Playing,
    Memorizing,
    GameOver,
}

impl EngineState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_memorizing(self) -> bool {
        matches!(self, Self::Memorizing)
    }

    /// Whether the start/play-again control is offered.
    pub const fn offers_start(self) -> bool {
        matches!(self, Self::Ready | Self::GameOver)
    }
}

/// Which part of the shot sequence is on screen, the visible set is always derived from the sequence itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    All,
    Hidden,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Start,
    /// The player picked the marker at this position of the visible sequence.
    Identify(usize),
    /// The memorization delay for this ticket elapsed.
    Advance(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Started,
    /// Correct pick, the pattern is hidden until the advance with this ticket fires.
    Memorizing(u32),
    Advanced,
    Missed,
}

impl Transition {
    pub const fn has_update(self) -> bool {
        use Transition::*;
        match self {
            Ignored => false,
            Started => true,
            Memorizing(_) => true,
            Advanced => true,
            Missed => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShotEngine {
    shots: Vec<Point>,
    visibility: Visibility,
    score: u32,
    high_score: u32,
    state: EngineState,
    ticket: u32,
}

impl Default for ShotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotEngine {
    pub const fn new() -> Self {
        Self {
            shots: Vec::new(),
            visibility: Visibility::All,
            score: 0,
            high_score: 0,
            state: EngineState::Ready,
            ticket: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn shots(&self) -> &[Point] {
        &self.shots
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Shots currently on screen together with their position in the sequence.
    pub fn visible_shots(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        let shown = match self.visibility {
            Visibility::All => self.shots.len(),
            Visibility::Hidden => 0,
        };
        self.shots.iter().copied().enumerate().take(shown)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Ticket of the most recent entry into [`EngineState::Memorizing`].
    pub fn ticket(&self) -> u32 {
        self.ticket
    }

    /// Index of the shot revealed as the answer, only once the game is over.
    pub fn answer_index(&self) -> Option<usize> {
        match self.state {
            EngineState::GameOver => self.newest_index(),
            _ => None,
        }
    }

    fn newest_index(&self) -> Option<usize> {
        self.shots.len().checked_sub(1)
    }

    /// Single entry point for every input, inputs that make no sense in the current state change nothing.
    pub fn dispatch<G, R>(&mut self, event: Event, generator: &mut G, rng: &mut R) -> Transition
    where
        G: ShotGenerator,
        R: UniformSource,
    {
        let result = match event {
            Event::Start => Ok(self.start(generator, rng)),
            Event::Identify(index) => self.identify(index),
            Event::Advance(ticket) => self.advance(ticket, generator, rng),
        };

        match result {
            Ok(transition) => {
                log::debug!("{:?} -> {:?} ({:?})", event, self.state, transition);
                transition
            }
            Err(err) => {
                log::debug!("ignored {:?} in {:?}: {}", event, self.state, err);
                Transition::Ignored
            }
        }
    }

    /// Begins a fresh round with a single shot, the high score carries over.
    pub fn start<G, R>(&mut self, generator: &mut G, rng: &mut R) -> Transition
    where
        G: ShotGenerator,
        R: UniformSource,
    {
        if !self.state.offers_start() {
            log::warn!("round abandoned in {:?} at score {}", self.state, self.score);
        }

        let first = generator.generate(rng);
        self.shots.clear();
        self.shots.push(first);
        self.visibility = Visibility::All;
        self.score = 0;
        self.state = EngineState::Playing;
        Transition::Started
    }

    pub fn identify(&mut self, index: usize) -> Result<Transition> {
        self.check_playing()?;

        let len = self.shots.len();
        let newest = self
            .newest_index()
            .ok_or(TrainerError::InvalidIndex { index, len })?;
        if index > newest {
            return Err(TrainerError::InvalidIndex { index, len });
        }

        if index == newest {
            self.ticket = self.ticket.wrapping_add(1);
            self.visibility = Visibility::Hidden;
            self.state = EngineState::Memorizing;
            Ok(Transition::Memorizing(self.ticket))
        } else {
            self.high_score = self.high_score.max(self.score);
            self.visibility = Visibility::All;
            self.state = EngineState::GameOver;
            Ok(Transition::Missed)
        }
    }

    pub fn advance<G, R>(
        &mut self,
        ticket: u32,
        generator: &mut G,
        rng: &mut R,
    ) -> Result<Transition>
    where
        G: ShotGenerator,
        R: UniformSource,
    {
        self.check_memorizing()?;
        if ticket != self.ticket {
            return Err(TrainerError::StaleAdvance {
                ticket,
                current: self.ticket,
            });
        }

        let next = generator.generate(rng);
        self.shots.push(next);
        self.visibility = Visibility::All;
        self.score += 1;
        self.state = EngineState::Playing;
        Ok(Transition::Advanced)
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(TrainerError::NotPlaying)
        }
    }

    fn check_memorizing(&self) -> Result<()> {
        if self.state.is_memorizing() {
            Ok(())
        } else {
            Err(TrainerError::NotMemorizing)
        }
    }
}
