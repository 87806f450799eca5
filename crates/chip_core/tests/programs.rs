use chip_core::{ChipError, Cpu, Scheduler};

const FRAME: f64 = 1.0 / 60.0;

fn boot(rom: &[u8]) -> (Cpu, Scheduler) {
    let mut cpu = Cpu::new();
    cpu.load_rom(rom).unwrap();
    (cpu, Scheduler::new(700.0).unwrap())
}

fn lit(cpu: &Cpu) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (y, row) in cpu.display().pixels().iter().enumerate() {
        for (x, px) in row.iter().enumerate() {
            if *px { out.push((x, y)) }
        }
    }
    out
}

#[test]
fn draws_bcd_digits_of_a_register() {
    #[rustfmt::skip]
    let rom = [
        0x60, 0x7B,       // V0 = 123
        0xA3, 0x00,       // I = 0x300
        0xF0, 0x33,       // BCD V0 -> [I]
        0xF2, 0x65,       // V0..V2 = [I]
        0x63, 0x00,       // V3 = 0 (x)
        0x64, 0x00,       // V4 = 0 (y)
        0xF2, 0x29,       // I = glyph V2
        0xD3, 0x45,       // draw ones digit
        0x12, 0x10,       // halt
    ];
    let (mut cpu, mut scheduler) = boot(&rom);
    let tick = scheduler.advance(&mut cpu, FRAME).unwrap();
    assert!(tick.redraw);
    assert_eq!(cpu.pc(), 0x210);
    // glyph "3": F0 10 F0 10 F0
    let pixels = lit(&cpu);
    assert_eq!(pixels.len(), 4 + 1 + 4 + 1 + 4);
    assert!(pixels.contains(&(3, 1)));
    assert_eq!(&cpu.memory()[0x300..0x303], &[1, 2, 3]);
    assert!(!pixels.contains(&(0, 1)));
}

#[test]
fn waits_for_key_across_frames() {
    #[rustfmt::skip]
    let rom = [
        0xF5, 0x0A,       // V5 = key
        0x12, 0x02,       // halt
    ];
    let (mut cpu, mut scheduler) = boot(&rom);
    for _ in 0..5 {
        let tick = scheduler.advance(&mut cpu, FRAME).unwrap();
        assert!(tick.instructions > 0);
        assert_eq!(cpu.pc(), 0x200);
    }
    cpu.keypad_mut().set(0xE, true);
    scheduler.advance(&mut cpu, FRAME).unwrap();
    assert_eq!(cpu.pc(), 0x202);
}

#[test]
fn sound_timer_counts_down_in_real_time() {
    #[rustfmt::skip]
    let rom = [
        0x60, 0x1E,       // V0 = 30
        0xF0, 0x18,       // ST = V0
        0x12, 0x04,       // halt
    ];
    let (mut cpu, mut scheduler) = boot(&rom);
    scheduler.advance(&mut cpu, 0.005).unwrap();
    assert_eq!(cpu.timers().sound, 30);
    let mut frames = 0;
    while cpu.timers().sound > 0 {
        scheduler.advance(&mut cpu, FRAME).unwrap();
        frames += 1;
    }
    assert_eq!(frames, 30);
}

#[test]
fn subroutine_nesting() {
    #[rustfmt::skip]
    let rom = [
        0x22, 0x06,       // 0x200 CALL 0x206
        0x12, 0x02,       // 0x202 halt
        0x00, 0x00,
        0x71, 0x01,       // 0x206 V1 += 1
        0x22, 0x0C,       // 0x208 CALL 0x20C
        0x00, 0xEE,       // 0x20A RET
        0x71, 0x10,       // 0x20C V1 += 0x10
        0x00, 0xEE,       // 0x20E RET
    ];
    let (mut cpu, mut scheduler) = boot(&rom);
    scheduler.advance(&mut cpu, FRAME).unwrap();
    assert_eq!(cpu.pc(), 0x202);
    assert_eq!(cpu.registers()[1], 0x11);
}

#[test]
fn recursion_overflows_the_stack() {
    // CALL 0x200 forever
    let (mut cpu, mut scheduler) = boot(&[0x22, 0x00]);
    let res = scheduler.advance(&mut cpu, 1.0);
    assert_eq!(res, Err(ChipError::StackOverflow));
}

#[test]
fn jumping_past_memory_halts() {
    #[rustfmt::skip]
    let rom = [
        0x60, 0xFF,       // V0 = 0xFF
        0xBF, 0xFF,       // JP V0 + 0xFFF
    ];
    let (mut cpu, mut scheduler) = boot(&rom);
    let res = scheduler.advance(&mut cpu, FRAME);
    assert!(!cpu.pc_in_bounds());
    assert_eq!(res, Err(ChipError::IllegalAddr(0x10FE)));
}
