use crate::utils::*;
use rand::{SeedableRng, rngs::SmallRng};
use shotmem_core as game;
use yew::prelude::*;

type Trainer = game::Trainer<game::GaussianShotGenerator, SmallRng, GlooScheduler>;

const TARGET_STROKE: &str = "#e5e5e5";

/// Stacks target, canvas and overlay on top of each other inside the board.
const LAYER_STYLE: &str = "position: absolute; inset: 0;";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Identify(usize),
    Advance(u32),
    CanvasClick,
}

impl Msg {
    fn as_event(self) -> Option<game::Event> {
        match self {
            Msg::Start => Some(game::Event::Start),
            Msg::Identify(index) => Some(game::Event::Identify(index)),
            Msg::Advance(ticket) => Some(game::Event::Advance(ticket)),
            Msg::CanvasClick => None,
        }
    }
}

fn marker_style(marker: &game::Marker) -> String {
    let color = match marker.tone {
        game::MarkerTone::Neutral => "black",
        game::MarkerTone::Answer => "#ef4444",
    };
    format!(
        "position: absolute; border-radius: 50%; left: {:.2}px; top: {:.2}px; \
         width: {d}px; height: {d}px; background: {color};",
        marker.left(),
        marker.top(),
        d = game::MARKER_DIAMETER,
    )
}

fn board_style() -> String {
    format!(
        "position: relative; width: {size}px; height: {size}px; margin: 0 auto;",
        size = game::CANVAS_SIZE,
    )
}

fn overlay_style() -> String {
    format!(
        "{LAYER_STYLE} display: flex; align-items: center; justify-content: center; \
         background: black; color: white;"
    )
}

#[function_component(TargetView)]
fn target_component() -> Html {
    let size = game::CANVAS_SIZE.to_string();
    let cx = game::TARGET_CENTER.x.to_string();
    let cy = game::TARGET_CENTER.y.to_string();

    html! {
        <svg class="target" style={LAYER_STYLE} width={size.clone()} height={size}>
            {
                for game::TARGET_RING_RADII.iter().map(|radius| html! {
                    <circle
                        cx={cx.clone()}
                        cy={cy.clone()}
                        r={radius.to_string()}
                        fill="none"
                        stroke={TARGET_STROKE}
                        stroke-width="2"
                    />
                })
            }
            <circle
                cx={cx.clone()}
                cy={cy.clone()}
                r={game::TARGET_BULLSEYE_RADIUS.to_string()}
                fill={TARGET_STROKE}
            />
        </svg>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MarkerProps {
    marker: game::Marker,
    callback: Callback<usize>,
}

#[function_component(MarkerView)]
fn marker_component(props: &MarkerProps) -> Html {
    let MarkerProps { marker, callback } = props.clone();

    let class = classes!(
        "shot",
        match marker.tone {
            game::MarkerTone::Neutral => classes!(),
            game::MarkerTone::Answer => classes!("answer"),
        },
        marker.clickable.then_some("clickable"),
    );
    let style = marker_style(&marker);

    let onclick = Callback::from(move |e: MouseEvent| {
        // keep marker clicks away from the canvas handler
        e.stop_propagation();
        log::trace!("shot {} clicked", marker.index);
        if marker.clickable {
            callback.emit(marker.index);
        }
    });

    html! {
        <div {class} {style} {onclick}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct TrainerProps {
    /// Force a seed instead of random
    pub seed: Option<u64>,
}

pub(crate) struct TrainerView {
    trainer: Trainer,
}

impl Component for TrainerView {
    type Message = Msg;
    type Properties = TrainerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("uniform source seeded with {}", seed);

        Self {
            trainer: game::Trainer::new(
                game::GaussianShotGenerator::default(),
                SmallRng::seed_from_u64(seed),
                GlooScheduler::new(ctx.link().clone()),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(event) = msg.as_event() else {
            log::trace!("canvas click");
            return false;
        };

        self.trainer.handle(event).has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let scene = self.trainer.scene();

        let cb_identify = ctx.link().callback(Msg::Identify);
        let cb_canvas = ctx.link().callback(|_: MouseEvent| Msg::CanvasClick);
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        let canvas = match scene.overlay {
            Some(overlay) => html! {
                <div class="overlay" style={overlay_style()}>{overlay.text()}</div>
            },
            None => html! {
                <>
                    <TargetView/>
                    <div class="canvas" style={LAYER_STYLE} onclick={cb_canvas}>
                        {
                            for scene.markers.iter().map(|marker| html! {
                                <MarkerView
                                    key={marker.index}
                                    marker={*marker}
                                    callback={cb_identify.clone()}
                                />
                            })
                        }
                    </div>
                </>
            },
        };

        let footer = scene
            .footer
            .map(|footer| footer.lines())
            .unwrap_or_default();

        html! {
            <article class="shotmem">
                <header><h2>{game::TITLE}</h2></header>
                <nav>
                    <div>{scene.score_line()}</div>
                    <div>{scene.high_score_line()}</div>
                </nav>
                <section class="board" style={board_style()}>{canvas}</section>
                <footer>
                    { for footer.into_iter().map(|line| html! { <p>{line}</p> }) }
                    {
                        for scene.action.map(|action| html! {
                            <button onclick={cb_start.clone()}>{action.label()}</button>
                        })
                    }
                </footer>
            </article>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(tone: game::MarkerTone) -> game::Marker {
        game::Marker {
            index: 3,
            point: game::Point::new(200.0, 150.5),
            tone,
            clickable: true,
        }
    }

    #[test]
    fn marker_is_centered_on_its_shot() {
        let style = marker_style(&marker(game::MarkerTone::Neutral));

        assert!(style.starts_with("position: absolute;"), "{style}");
        assert!(style.contains("left: 192.00px; top: 142.50px;"), "{style}");
        assert!(style.contains("width: 16px; height: 16px;"), "{style}");
        assert!(style.ends_with("background: black;"), "{style}");
    }

    #[test]
    fn marker_far_from_center_keeps_its_position() {
        let shot = game::Marker {
            point: game::Point::new(250.0, 120.0),
            ..marker(game::MarkerTone::Neutral)
        };
        let style = marker_style(&shot);

        assert!(style.contains("position: absolute;"), "{style}");
        assert!(style.contains("border-radius: 50%;"), "{style}");
        assert!(style.contains("left: 242.00px; top: 112.00px;"), "{style}");
    }

    #[test]
    fn board_is_a_positioned_canvas_sized_box() {
        let board = board_style();

        assert!(board.contains("position: relative;"), "{board}");
        assert!(board.contains("width: 384px; height: 384px;"), "{board}");
        assert!(LAYER_STYLE.contains("position: absolute; inset: 0;"));
        assert!(overlay_style().starts_with(LAYER_STYLE));
    }

    #[test]
    fn answer_marker_is_red() {
        let style = marker_style(&marker(game::MarkerTone::Answer));

        assert!(style.ends_with("background: #ef4444;"), "{style}");
    }

    #[test]
    fn canvas_clicks_never_reach_the_trainer() {
        assert_eq!(Msg::CanvasClick.as_event(), None);
        assert_eq!(Msg::Identify(2).as_event(), Some(game::Event::Identify(2)));
        assert_eq!(Msg::Advance(7).as_event(), Some(game::Event::Advance(7)));
        assert_eq!(Msg::Start.as_event(), Some(game::Event::Start));
    }
}
