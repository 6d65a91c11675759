mod setup;
mod config_gen;

use std::env;
use std::process::ExitCode;
use doodle_core::config::{SequenceConfig, SystemConfig};
use doodle_core::renderer::driver::{Driver, Outcome, Pace};
use doodle_core::runtime::DirSource;
use doodle_core::{Ctx, Sequencer, TerminalRenderer};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let fast = args.iter().any(|a| a == "--fast");

    setup::init();
    log::info!(">>> Doodle Launcher Started (fast: {}) <<<", fast);

    let sys_cfg: SystemConfig = doodle_shared::config::get("system");
    let seq_cfg = SequenceConfig::from_shared();
    log::info!("Variant: {:?}, assets: {}", seq_cfg.animation.variant, sys_cfg.assets_path);

    let source = DirSource::new(&sys_cfg.assets_path);
    let mut sequencer = Sequencer::new(seq_cfg);
    sequencer.start(&source);

    let pace = if fast { Pace::Skip } else { Pace::RealTime };
    let mut ctx = Ctx::default();
    let mut driver = Driver::new(sequencer, TerminalRenderer::new());

    match driver.run(&mut ctx, pace) {
        Outcome::Finished | Outcome::Exited => ExitCode::SUCCESS,
        Outcome::Stalled => {
            log::error!("Nothing to show: the vector asset never loaded.");
            ExitCode::FAILURE
        }
        Outcome::AwaitingInput => {
            log::warn!("Stopped while waiting for a choice.");
            ExitCode::SUCCESS
        }
    }
}
