use clap::Parser;
use wasm_bindgen::prelude::*;

mod trainer;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring arguments: {err}"));
        Args::default()
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {err}"));
        }
    }
    log::debug!("seed: {:?}", args.seed);

    let Some(root) = document().get_element_by_id("trainer") else {
        log::error!("Could not find id=\"trainer\" element");
        return;
    };

    log::debug!("App started");
    let props = trainer::TrainerProps { seed: args.seed };
    yew::Renderer::<trainer::TrainerView>::with_root_and_props(root, props).render();
}
