use crate::*;

/// Arms one-shot timers for the memorization delay.
///
/// Dropping the returned handle must cancel the timer if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, ticket: u32, delay_ms: u32) -> Self::Handle;
}

/// Owns the game together with everything it needs to run: the shot generator, the uniform source and the pending
/// memorization timer.
///
/// Whoever receives a fired timer feeds `Event::Advance(ticket)` back through [`Trainer::handle`].
pub struct Trainer<G, R, S: Scheduler> {
    engine: ShotEngine,
    generator: G,
    rng: R,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<G, R, S> Trainer<G, R, S>
where
    G: ShotGenerator,
    R: UniformSource,
    S: Scheduler,
{
    pub fn new(generator: G, rng: R, scheduler: S) -> Self {
        Self {
            engine: ShotEngine::new(),
            generator,
            rng,
            scheduler,
            pending: None,
        }
    }

    pub fn engine(&self) -> &ShotEngine {
        &self.engine
    }

    pub fn scene(&self) -> Scene {
        Scene::from_engine(&self.engine)
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&mut self, event: Event) -> Transition {
        let transition = self
            .engine
            .dispatch(event, &mut self.generator, &mut self.rng);

        match transition {
            Transition::Ignored => {}
            Transition::Memorizing(ticket) => {
                let handle = self.scheduler.schedule(ticket, MEMORIZE_DELAY_MS);
                if self.pending.replace(handle).is_some() {
                    log::warn!("replaced a pending advance");
                }
            }
            Transition::Advanced => {
                self.pending = None;
            }
            Transition::Started | Transition::Missed => {
                if self.pending.take().is_some() {
                    log::debug!("cancelled pending advance");
                }
            }
        }

        transition
    }
}
