use std::time::{Duration, Instant};

use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget},
    keyboard::PhysicalKey,
};

use chip_core::{ChipError, Cpu, Scheduler};

use crate::{audio, input, renderer::Renderer};

/// upper bound on how long the loop sleeps between scheduler runs
const IDLE_WAIT: Duration = Duration::from_millis(1);

/// Host loop: owns the machine and its collaborators, drives them from winit events
pub struct App {
    cpu: Cpu,
    scheduler: Scheduler,
    renderer: Renderer,
    audio: audio::Device,
    last_update: Instant,
    halted: Option<ChipError>
}
impl App {
    pub fn new(cpu: Cpu, scheduler: Scheduler, renderer: Renderer, audio: audio::Device) -> Self {
        App {
            cpu,
            scheduler,
            renderer,
            audio,
            last_update: Instant::now(),
            halted: None
        }
    }
    pub fn handle(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, .. } => self.handle_window(event, elwt),
            Event::AboutToWait => self.update(elwt),
            _ => ()
        }
    }
    /// The error that stopped the machine, if any
    pub fn finish(self) -> Result<(), ChipError> {
        self.audio.stop();
        match self.halted {
            Some(e) => Err(e),
            None => Ok(())
        }
    }
    fn handle_window(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                elwt.exit();
            },
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => {
                if code == input::QUIT_KEY {
                    log::info!("quit requested");
                    elwt.exit();
                } else if let Some(key) = input::chip_key(code) {
                    self.cpu.keypad_mut().set(key, state == ElementState::Pressed);
                }
            },
            // releases never arrive for a window without focus
            WindowEvent::Focused(false) => self.cpu.keypad_mut().release_all(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.renderer.draw(self.cpu.display().pixels()) {
                    log::error!("failed to draw frame: {e}");
                    elwt.exit();
                }
            },
            _ => ()
        }
    }
    fn update(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.halted.is_some() { return }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();
        self.last_update = now;

        match self.scheduler.advance(&mut self.cpu, elapsed) {
            Ok(tick) => {
                if tick.redraw {
                    self.renderer.request_redraw();
                }
            },
            Err(e) => return self.halt(e, elwt),
        }
        if !self.cpu.pc_in_bounds() {
            return self.halt(ChipError::IllegalAddr(self.cpu.pc()), elwt);
        }

        if self.cpu.timers().sound > 0 {
            self.audio.play();
        } else {
            self.audio.stop();
        }
        elwt.set_control_flow(ControlFlow::WaitUntil(now + IDLE_WAIT));
    }
    fn halt(&mut self, err: ChipError, elwt: &EventLoopWindowTarget<()>) {
        log::error!("halted at {:#05X}: {err}", self.cpu.pc());
        self.audio.stop();
        self.halted = Some(err);
        elwt.exit();
    }
}
