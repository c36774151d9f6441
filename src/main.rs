use anyhow::Result;
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracing::{error, info};

use stick_bop::app::StateController;
use stick_bop::assets;
use stick_bop::audio::AudioSystem;
use stick_bop::config::GameConfig;
use stick_bop::game::GameContext;
use stick_bop::game::task::TaskId;
use stick_bop::input::MacroquadInput;
use stick_bop::state::{self, StateId};
use stick_bop::util::logging;

fn window_conf() -> Conf {
    let config = GameConfig::load();
    Conf {
        window_title: "Stick Bop!".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::load();
    if let Err(e) = logging::init_logging(config.log_dir.as_deref(), config.verbose) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    if let Err(e) = run(config).await {
        error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: GameConfig) -> Result<()> {
    let mut ctx = GameContext::new(config, AudioSystem::new(), StdRng::from_entropy());

    // The loading screen needs its image before the registry exists.
    let loading_path = ctx.config.assets_dir.join("images").join("loading.png");
    let loading_img = assets::load_texture_file(&loading_path)?;
    ctx.assets.insert_image("loading", loading_img);

    let mut machine = StateController::new();
    machine.register(StateId::Loading, Box::new(state::Loading::new()));
    machine.register(StateId::Menu, Box::new(state::Menu::new()));
    machine.register(StateId::Start, Box::new(state::Start::new()));
    machine.register(StateId::TaskDone, Box::new(state::TaskDone::new()));
    machine.register(StateId::Loss, Box::new(state::Loss::new()));
    machine.register(StateId::Win, Box::new(state::Win::new()));
    for task in TaskId::ALL {
        machine.register(StateId::Task(task), Box::new(state::TaskRound::new(task)));
    }
    machine.set_initial(StateId::Loading, &mut ctx)?;

    let mut input = MacroquadInput::new();
    info!("starting main loop");
    machine.run(&mut input, &mut ctx).await
}
