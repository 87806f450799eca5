use crate::globals::{SCREEN_WIDTH, SCREEN_HEIGHT};

pub type Pixels = [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT];

pub struct Display {
    pixels: Pixels
}
impl Display {
    pub fn new() -> Self {
        Display {
            pixels: [[false; SCREEN_WIDTH]; SCREEN_HEIGHT]
        }
    }
    pub fn clear(&mut self) {
        self.pixels = [[false; SCREEN_WIDTH]; SCREEN_HEIGHT];
    }
    /// rows of the framebuffer, top to bottom
    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y % SCREEN_HEIGHT][x % SCREEN_WIDTH]
    }
    /// XORs an 8px wide sprite onto the screen, wrapping around both edges.
    /// Returns true if any lit pixel got switched off.
    pub fn blit_sprite(&mut self, x: usize, y: usize, data: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in data.iter().enumerate() {
            collision |= self.blit_byte(x, y + row, *byte);
        }
        collision
    }
    fn blit_byte(&mut self, x: usize, y: usize, data: u8) -> bool {
        let row = &mut self.pixels[y % SCREEN_HEIGHT];
        let mut collision = false;
        for col in 0..8 {
            if data & (0x80 >> col) == 0 { continue }
            let px = &mut row[(x + col) % SCREEN_WIDTH];
            collision |= *px;
            *px ^= true;
        }
        collision
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_in_row(display: &Display, y: usize) -> usize {
        display.pixels[y].iter().filter(|p| **p).count()
    }

    #[test]
    fn blit_byte() {
        let mut display = Display::new();
        let flag = display.blit_byte(8, 0, 0b10101011);
        assert!(!flag);
        assert!(display.pixels[0][..8] == [false; 8]);
        assert!(display.pixels[0][8..16] == [true, false, true, false, true, false, true, true]);
        assert!(lit_in_row(&display, 0) == 5);
    }
    #[test]
    fn blit_byte_with_y() {
        let mut display = Display::new();
        let flag = display.blit_byte(8, 2, 0b10101011);
        assert!(!flag);
        assert!(lit_in_row(&display, 0) == 0);
        assert!(lit_in_row(&display, 2) == 5);
        assert!(display.get(8, 2));
        assert!(!display.get(9, 2));
    }
    #[test]
    fn blit_byte_non_empty() {
        let mut display = Display::new();
        display.pixels[0][8] = true;
        display.pixels[0][9] = true;
        let flag = display.blit_byte(8, 0, 0b10000000);
        assert!(flag);
        assert!(!display.get(8, 0));
        assert!(display.get(9, 0));
    }
    #[test]
    fn blit_byte_unaligned() {
        let mut display = Display::new();
        let flag = display.blit_byte(2, 0, 0b11000001);
        assert!(!flag);
        assert!(display.get(2, 0));
        assert!(display.get(3, 0));
        assert!(display.get(9, 0));
        assert!(lit_in_row(&display, 0) == 3);
    }
    #[test]
    fn blit_byte_wraps_x() {
        let mut display = Display::new();
        let flag = display.blit_byte(SCREEN_WIDTH - 1, 0, 0xFF);
        assert!(!flag);
        assert!(display.get(SCREEN_WIDTH - 1, 0));
        for x in 0..7 {
            assert!(display.get(x, 0));
        }
        assert!(!display.get(7, 0));
        assert!(lit_in_row(&display, 0) == 8);
    }
    #[test]
    fn blit_sprite_wraps_y() {
        let mut display = Display::new();
        let flag = display.blit_sprite(0, SCREEN_HEIGHT - 1, &[0x80, 0x80, 0x80]);
        assert!(!flag);
        assert!(display.get(0, SCREEN_HEIGHT - 1));
        assert!(display.get(0, 0));
        assert!(display.get(0, 1));
        assert!(!display.get(0, 2));
    }
    #[test]
    fn blit_sprite_twice_clears() {
        let mut display = Display::new();
        let sprite = [0xF0, 0x90, 0x90, 0x90, 0xF0];
        assert!(!display.blit_sprite(10, 5, &sprite));
        assert!(display.blit_sprite(10, 5, &sprite));
        assert!(display.pixels().iter().flatten().all(|p| !*p));
    }
    #[test]
    fn blit_sprite_multi_line() {
        let mut display = Display::new();
        let sprite = [
            0b10101011,
            0b11101011,
            0b10111011,
        ];
        let flag = display.blit_sprite(8, 2, &sprite);
        assert!(!flag);
        assert!(lit_in_row(&display, 1) == 0);
        assert!(lit_in_row(&display, 2) == 5);
        assert!(lit_in_row(&display, 3) == 6);
        assert!(lit_in_row(&display, 4) == 6);
        assert!(lit_in_row(&display, 5) == 0);
    }
    #[test]
    fn clear() {
        let mut display = Display::new();
        display.blit_sprite(0, 0, &[0xFF; 15]);
        display.clear();
        assert!(display.pixels().iter().flatten().all(|p| !*p));
    }
}
