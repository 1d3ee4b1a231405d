use rand::{SeedableRng, rngs::SmallRng};
use shotmem_core::*;

/// Timers are fired by hand in these scenarios.
struct ManualScheduler;

impl Scheduler for ManualScheduler {
    type Handle = ();

    fn schedule(&mut self, _ticket: u32, delay_ms: u32) -> Self::Handle {
        assert_eq!(delay_ms, MEMORIZE_DELAY_MS);
    }
}

fn trainer(seed: u64) -> Trainer<GaussianShotGenerator, SmallRng, ManualScheduler> {
    Trainer::new(
        GaussianShotGenerator::default(),
        SmallRng::seed_from_u64(seed),
        ManualScheduler,
    )
}

#[test]
fn first_correct_pick_then_delay_adds_second_shot() {
    let mut trainer = trainer(1);

    trainer.handle(Event::Start);
    assert_eq!(trainer.engine().shots().len(), 1);
    assert_eq!(trainer.engine().score(), 0);

    let Transition::Memorizing(ticket) = trainer.handle(Event::Identify(0)) else {
        panic!("index 0 is the only shot and must be correct");
    };
    assert_eq!(trainer.handle(Event::Advance(ticket)), Transition::Advanced);

    let engine = trainer.engine();
    assert_eq!(engine.state(), EngineState::Playing);
    assert_eq!(engine.shots().len(), 2);
    assert_eq!(engine.score(), 1);
    let visible: Vec<Point> = engine.visible_shots().map(|(_, shot)| shot).collect();
    assert_eq!(visible, engine.shots());
}

#[test]
fn miss_reveals_answer_and_play_again_keeps_high_score() {
    let mut trainer = trainer(2);
    trainer.handle(Event::Start);
    for _ in 0..3 {
        let newest = trainer.engine().shots().len() - 1;
        let Transition::Memorizing(ticket) = trainer.handle(Event::Identify(newest)) else {
            panic!("newest shot must be accepted");
        };
        trainer.handle(Event::Advance(ticket));
    }

    assert_eq!(trainer.handle(Event::Identify(1)), Transition::Missed);
    let scene = trainer.scene();
    assert_eq!(scene.markers.len(), 4);
    assert_eq!(scene.markers[3].tone, MarkerTone::Answer);
    assert_eq!(scene.high_score, 3);
    assert_eq!(scene.action, Some(Action::PlayAgain));

    trainer.handle(Event::Start);
    assert_eq!(trainer.engine().score(), 0);
    assert_eq!(trainer.engine().shots().len(), 1);
    assert_eq!(trainer.engine().high_score(), 3);
}

#[test]
fn same_seed_replays_same_pattern() {
    let mut a = trainer(77);
    let mut b = trainer(77);

    for trainer in [&mut a, &mut b] {
        trainer.handle(Event::Start);
        for _ in 0..5 {
            let newest = trainer.engine().shots().len() - 1;
            trainer.handle(Event::Identify(newest));
            let ticket = trainer.engine().ticket();
            trainer.handle(Event::Advance(ticket));
        }
    }

    assert_eq!(a.engine().shots(), b.engine().shots());
}
