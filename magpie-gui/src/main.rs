use chip8::{Chip8, Config, FontStyle, Quirks, Synth};
use host::FlagFile;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use log::info;

use magpie_gui::{audio_setup, Stage};

/// CHIP-8 / SCHIP / XO-CHIP runner
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// ROM to load and execute
    rom: std::path::PathBuf,

    /// Instructions to execute per display frame
    #[clap(long, default_value_t = 20)]
    tick_rate: u32,

    /// Classic 4 KiB addressing instead of the XO-CHIP 64 KiB space
    #[clap(long)]
    classic: bool,

    /// 8xy6/8xyE shift Vx in place instead of shifting Vy
    #[clap(long)]
    shift_quirk: bool,

    /// Fx55/Fx65 leave I unchanged
    #[clap(long)]
    load_store_quirk: bool,

    /// Sprites clip at the screen edge instead of wrapping
    #[clap(long)]
    clip_quirk: bool,

    /// Bnnn takes its offset from the register named by nnn
    #[clap(long)]
    jump_quirk: bool,

    /// 8xy1/8xy2/8xy3 clear VF
    #[clap(long)]
    logic_quirk: bool,

    /// Yield to the display after each sprite draw
    #[clap(long)]
    vblank_quirk: bool,

    /// Glyph set written at address 0
    #[clap(long, value_enum, default_value = "octo")]
    font: FontStyle,

    /// Maximum accepted program size in bytes
    #[clap(long)]
    max_size: Option<usize>,

    /// Seed for the Cxnn RNG
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("MAGPIE_LOG", "info")
        .write_style_or("MAGPIE_LOG", "always");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("failed to read {:?}", args.rom))?;

    let config = Config {
        tick_rate: args.tick_rate,
        extended: !args.classic,
        quirks: Quirks {
            shift: args.shift_quirk,
            load_store: args.load_store_quirk,
            clip: args.clip_quirk,
            jump: args.jump_quirk,
            logic: args.logic_quirk,
            vblank: args.vblank_quirk,
        },
        font: args.font,
        max_program: args.max_size,
        seed: args.seed,
    };

    let mut vm = Chip8::new(config.clone());
    vm.reset(&rom)?;
    info!("loaded {} byte ROM from {:?}", rom.len(), args.rom);

    let synth = Synth::new(chip8::SAMPLE_RATE);
    let _audio = audio_setup(&synth);
    let flags = FlagFile::new(args.rom.with_extension("flags"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::Vec2::new(1024.0, 512.0))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Magpie",
        options,
        Box::new(move |cc| {
            Ok(Box::new(Stage::new(vm, synth, flags, &config, &cc.egui_ctx)))
        }),
    )
    .map_err(|e| anyhow!("got egui error: {e:?}"))
}
