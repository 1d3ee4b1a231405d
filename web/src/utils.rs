use gloo::timers::callback::Timeout;
use shotmem_core::Scheduler;
use yew::html::Scope;

use crate::trainer::{Msg, TrainerView};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Delivers the memorization advance back into the component once the browser timer fires.
pub(crate) struct GlooScheduler {
    link: Scope<TrainerView>,
}

impl GlooScheduler {
    pub(crate) fn new(link: Scope<TrainerView>) -> Self {
        Self { link }
    }
}

impl Scheduler for GlooScheduler {
    // cancels on drop
    type Handle = Timeout;

    fn schedule(&mut self, ticket: u32, delay_ms: u32) -> Timeout {
        log::trace!("advance {} armed for {}ms", ticket, delay_ms);
        let link = self.link.clone();
        Timeout::new(delay_ms, move || link.send_message(Msg::Advance(ticket)))
    }
}
