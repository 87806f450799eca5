use std::{num::NonZeroU32, rc::Rc};

use anyhow::anyhow;
use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

use chip_core::{
    globals::{SCREEN_HEIGHT, SCREEN_WIDTH},
    Pixels
};

use crate::cli::Color;

pub struct Renderer {
    window: Rc<Window>,
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    fg: u32,
    bg: u32
}
impl Renderer {
    pub fn new(window: Rc<Window>, fg: Color, bg: Color) -> anyhow::Result<Self> {
        let context = Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create graphics context: {e}"))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create window surface: {e}"))?;
        log::info!("rendering {} on {}", fg, bg);
        Ok(Renderer {
            window,
            _context: context,
            surface,
            fg: fg.to_u32(),
            bg: bg.to_u32()
        })
    }
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
    pub fn draw(&mut self, pixels: &Pixels) -> Result<(), SoftBufferError> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (
            NonZeroU32::new(size.width),
            NonZeroU32::new(size.height)
        ) else {
            // minimized
            return Ok(())
        };
        self.surface.resize(width, height)?;
        let mut buffer = self.surface.buffer_mut()?;
        fill(&mut buffer, size.width as usize, size.height as usize, pixels, self.fg, self.bg);
        buffer.present()
    }
}

/// Scales the framebuffer onto a `width` x `height` 0RGB buffer
fn fill(buffer: &mut [u32], width: usize, height: usize, pixels: &Pixels, fg: u32, bg: u32) {
    for (i, out) in buffer.iter_mut().enumerate().take(width * height) {
        let x = (i % width) * SCREEN_WIDTH / width;
        let y = (i / width) * SCREEN_HEIGHT / height;
        *out = if pixels[y][x] { fg } else { bg };
    }
}
