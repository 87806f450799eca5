use core::ops::Range;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    display::Display,
    errors::ChipError,
    font::{FONT, FONT_SIZE},
    globals::{
        FONT_ADDR, FONT_GLYPH_SIZE, MAX_ROM_SIZE, PROGRAM_START, RAM_SIZE, REG_COUNT, STACK_SIZE
    },
    keypad::Keypad,
    timers::Timers,
    utils::{bcd, low_addr, low_byte, nibbles, u16_from_two}
};

const DEFAULT_SEED: u64 = 0xC8C8;
const FONT_END: usize = FONT_ADDR as usize + FONT_SIZE;

/// Configurable deviations from the COSMAC VIP interpreter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quirks {
    /// 8xy6 / 8xyE shift Vx in place and ignore Vy
    pub shift: bool
}
impl Default for Quirks {
    fn default() -> Self {
        Quirks { shift: true }
    }
}

/// What happens to the program counter after an instruction
#[derive(Clone, Copy, Debug, PartialEq)]
enum Flow {
    Next,
    Skip,
    Jump(u16),
    /// re-run the same instruction on the next cycle
    Hold,
}

impl Flow {
    fn skip_if(cond: bool) -> Self {
        if cond { Flow::Skip } else { Flow::Next }
    }
}

pub struct Cpu {
    memory: [u8; RAM_SIZE],
    display: Display,
    keypad: Keypad,
    timers: Timers,
    v: [u8; REG_COUNT],
    pc: u16,
    i: u16,
    sp: usize,
    stack: [u16; STACK_SIZE],
    quirks: Quirks,
    redraw: bool,
    rng: SmallRng
}
impl Cpu {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
    /// Seeds the generator behind `Cxkk`
    pub fn with_seed(seed: u64) -> Self {
        let mut memory = [0; RAM_SIZE];
        memory[FONT_ADDR as usize..FONT_END].copy_from_slice(&FONT);
        Cpu {
            memory,
            display: Display::new(),
            keypad: Keypad::new(),
            timers: Timers::default(),
            v: [0; REG_COUNT],
            pc: PROGRAM_START,
            i: 0,
            sp: 0,
            stack: [0; STACK_SIZE],
            quirks: Quirks::default(),
            redraw: false,
            rng: SmallRng::seed_from_u64(seed)
        }
    }
    pub fn set_quirks(&mut self, quirks: Quirks) {
        self.quirks = quirks;
    }
    /// Copies the program to 0x200 and points PC at it
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), ChipError> {
        if data.len() > MAX_ROM_SIZE {
            return Err(ChipError::RomTooLarge(data.len()));
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
        self.pc = PROGRAM_START;
        log::debug!("loaded {} bytes at {:#05X}", data.len(), PROGRAM_START);
        Ok(())
    }
    pub fn display(&self) -> &Display {
        &self.display
    }
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }
    pub fn timers(&self) -> &Timers {
        &self.timers
    }
    pub fn memory(&self) -> &[u8; RAM_SIZE] {
        &self.memory
    }
    pub fn registers(&self) -> &[u8; REG_COUNT] {
        &self.v
    }
    pub fn pc(&self) -> u16 {
        self.pc
    }
    /// false once PC can no longer address a whole instruction
    pub fn pc_in_bounds(&self) -> bool {
        (self.pc as usize) <= RAM_SIZE - 2
    }
    /// set when the last executed instruction changed the framebuffer
    pub fn redraw(&self) -> bool {
        self.redraw
    }
    /// 60Hz timer unit
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }
    /// Fetches, decodes and executes a single instruction.
    /// On error the machine is left as it was, apart from the redraw flag.
    pub fn step(&mut self) -> Result<(), ChipError> {
        self.redraw = false;
        let word = self.get_current_opcode()?;
        let (_, x, y, n) = nibbles(word);
        let (x, y) = (x as usize, y as usize);
        let kk = low_byte(word);
        let nnn = low_addr(word);

        let flow = match word >> 12 {
            0x0 => self.exec_system(word)?,
            0x1 => Flow::Jump(nnn),
            0x2 => {
                self.push_stack(self.pc)?;
                Flow::Jump(nnn)
            },
            0x3 => Flow::skip_if(self.v[x] == kk),
            0x4 => Flow::skip_if(self.v[x] != kk),
            0x5 if n == 0 => Flow::skip_if(self.v[x] == self.v[y]),
            0x6 => {
                self.v[x] = kk;
                Flow::Next
            },
            0x7 => {
                self.v[x] = self.v[x].wrapping_add(kk);
                Flow::Next
            },
            0x8 => self.exec_alu(word, x, y, n)?,
            0x9 if n == 0 => Flow::skip_if(self.v[x] != self.v[y]),
            0xA => {
                self.i = nnn;
                Flow::Next
            },
            0xB => Flow::Jump(nnn.wrapping_add(self.v[0] as u16)),
            0xC => {
                self.v[x] = self.rng.gen::<u8>() & kk;
                Flow::Next
            },
            0xD => self.exec_draw(x, y, n)?,
            0xE => self.exec_key(word, x)?,
            0xF => self.exec_misc(word, x)?,
            _ => return Err(ChipError::IllegalInst(word)),
        };

        log::trace!("{:#05X}: {:04X} -> {:?}", self.pc, word, flow);
        self.pc = match flow {
            Flow::Next => self.pc.wrapping_add(2),
            Flow::Skip => self.pc.wrapping_add(4),
            Flow::Jump(addr) => addr,
            Flow::Hold => self.pc,
        };
        Ok(())
    }
    fn get_current_opcode(&self) -> Result<u16, ChipError> {
        let addr = self.pc as usize;
        if addr > RAM_SIZE - 2 {
            return Err(ChipError::IllegalAddr(self.pc))
        }
        Ok(u16_from_two(self.memory[addr], self.memory[addr + 1]))
    }
    // 00E0, 00EE
    fn exec_system(&mut self, word: u16) -> Result<Flow, ChipError> {
        match word {
            0x00E0 => {
                self.display.clear();
                self.redraw = true;
                Ok(Flow::Next)
            },
            // resume after the CALL that pushed the address
            0x00EE => Ok(Flow::Jump(self.pop_stack()?.wrapping_add(2))),
            _ => Err(ChipError::IllegalInst(word)),
        }
    }
    // 8xyn
    fn exec_alu(&mut self, word: u16, x: usize, y: usize, n: u8) -> Result<Flow, ChipError> {
        let (vx, vy) = (self.v[x], self.v[y]);
        // legacy behaviour copies Vy into Vx before shifting
        let shift_src = if self.quirks.shift { vx } else { vy };
        let (val, flag) = match n {
            0x0 => (vy, None),
            0x1 => (vx | vy, None),
            0x2 => (vx & vy, None),
            0x3 => (vx ^ vy, None),
            0x4 => {
                let (sum, carry) = vx.overflowing_add(vy);
                (sum, Some(carry as u8))
            },
            0x5 => (vx.wrapping_sub(vy), Some((vx >= vy) as u8)),
            0x6 => (shift_src >> 1, Some(shift_src & 0x01)),
            0x7 => (vy.wrapping_sub(vx), Some((vy >= vx) as u8)),
            0xE => (shift_src << 1, Some(shift_src >> 7)),
            _ => return Err(ChipError::IllegalInst(word)),
        };
        self.v[x] = val;
        if let Some(flag) = flag {
            self.v[0xF] = flag;
        }
        Ok(Flow::Next)
    }
    // Dxyn
    fn exec_draw(&mut self, x: usize, y: usize, n: u8) -> Result<Flow, ChipError> {
        let range = self.readable_range(self.i, n as usize)?;
        let collision = self.display.blit_sprite(
            self.v[x] as usize,
            self.v[y] as usize,
            &self.memory[range]
        );
        self.v[0xF] = collision as u8;
        self.redraw = true;
        Ok(Flow::Next)
    }
    // Ex9E, ExA1
    fn exec_key(&mut self, word: u16, x: usize) -> Result<Flow, ChipError> {
        let pressed = self.keypad.is_pressed(self.v[x]);
        match low_byte(word) {
            0x9E => Ok(Flow::skip_if(pressed)),
            0xA1 => Ok(Flow::skip_if(!pressed)),
            _ => Err(ChipError::IllegalInst(word)),
        }
    }
    // Fxkk
    fn exec_misc(&mut self, word: u16, x: usize) -> Result<Flow, ChipError> {
        match low_byte(word) {
            0x07 => self.v[x] = self.timers.delay,
            0x0A => match self.keypad.first_pressed() {
                Some(key) => self.v[x] = key,
                None => return Ok(Flow::Hold),
            },
            0x15 => self.timers.delay = self.v[x],
            0x18 => self.timers.sound = self.v[x],
            0x1E => self.i = self.i.wrapping_add(self.v[x] as u16),
            0x29 => self.i = FONT_ADDR + self.v[x] as u16 * FONT_GLYPH_SIZE,
            0x33 => {
                let range = self.writable_range(self.i, 3)?;
                self.memory[range].copy_from_slice(&bcd(self.v[x]));
            },
            0x55 => {
                let range = self.writable_range(self.i, x + 1)?;
                self.memory[range].copy_from_slice(&self.v[..=x]);
            },
            0x65 => {
                let range = self.readable_range(self.i, x + 1)?;
                self.v[..=x].copy_from_slice(&self.memory[range]);
            },
            _ => return Err(ChipError::IllegalInst(word)),
        }
        Ok(Flow::Next)
    }
    fn readable_range(&self, addr: u16, len: usize) -> Result<Range<usize>, ChipError> {
        let start = addr as usize;
        if len > 0 && start + len > RAM_SIZE {
            return Err(ChipError::IllegalAddr(addr));
        }
        Ok(start..start + len)
    }
    /// font sprites are read only
    fn writable_range(&self, addr: u16, len: usize) -> Result<Range<usize>, ChipError> {
        let range = self.readable_range(addr, len)?;
        if len > 0 && range.start < FONT_END {
            return Err(ChipError::ReadOnlyAddr(addr));
        }
        Ok(range)
    }
    fn push_stack(&mut self, val: u16) -> Result<(), ChipError> {
        if self.sp >= STACK_SIZE { return Err(ChipError::StackOverflow) }
        self.stack[self.sp] = val;
        self.sp += 1;
        log::debug!("call from {:#05X}, depth {}", val, self.sp);
        Ok(())
    }
    fn pop_stack(&mut self) -> Result<u16, ChipError> {
        if self.sp == 0 { return Err(ChipError::StackUnderflow) }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
