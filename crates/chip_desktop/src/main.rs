use std::{fs, rc::Rc};

use anyhow::{anyhow, Context};
use clap::Parser;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::WindowBuilder,
};

use chip_core::{
    Cpu,
    Quirks,
    Scheduler,
    globals::{SCREEN_WIDTH, SCREEN_HEIGHT}
};

mod app;
mod audio;
mod cli;
mod input;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("failed to read rom {}", args.rom.display()))?;
    log::info!("loading {} ({} bytes)", args.rom.display(), rom.len());

    let mut cpu = Cpu::with_seed(rand::random());
    cpu.set_quirks(Quirks { shift: !args.legacy_shift });
    cpu.load_rom(&rom).context("failed to load rom")?;
    let scheduler = Scheduler::new(args.freq as f64).context("invalid --freq")?;
    log::info!("cpu at {} Hz", scheduler.cpu_frequency());

    let event_loop = EventLoop::new()
        .map_err(|e| anyhow!("failed to start event loop: {e}"))?;
    let window = WindowBuilder::new()
        .with_title("CHIP-8")
        .with_inner_size(LogicalSize::new(
            (SCREEN_WIDTH as u32 * args.scale) as f64,
            (SCREEN_HEIGHT as u32 * args.scale) as f64
        ))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to open window: {e}"))?;
    let window = Rc::new(window);

    let renderer = renderer::Renderer::new(window.clone(), args.fg, args.bg)?;
    let audio = audio::Device::new(args.sound)?;

    let mut app = app::App::new(cpu, scheduler, renderer, audio);
    window.request_redraw();
    event_loop
        .run(|event, elwt| app.handle(event, elwt))
        .map_err(|e| anyhow!("event loop failed: {e}"))?;

    app.finish()?;
    log::info!("bye");
    Ok(())
}
