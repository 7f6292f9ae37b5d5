//! End-to-end runs of tiny hand-assembled programs through the public API

use magpie_chip8::{Chip8, Config, Halt, State, Synth, CHANNELS};

/// Runs a program until it halts, with the synthesizer as the device
fn run(rom: &[u8]) -> (Chip8, Synth) {
    let config = Config {
        seed: Some(7),
        ..Config::default()
    };
    let mut vm = Chip8::new(config);
    vm.reset(rom).expect("ROM load failed");
    let mut synth = Synth::new(48000);
    for _ in 0..1000 {
        if matches!(vm.state(), State::Halted(_)) {
            break;
        }
        vm.tick(&mut synth);
    }
    assert_eq!(*vm.state(), State::Halted(Halt::Exit), "program must exit");
    (vm, synth)
}

#[test]
fn draws_a_glyph_shaped_sprite() {
    let rom = [
        0xA2, 0x0A, // I := 0x20A
        0x60, 0x05, // V0 := 5
        0x61, 0x02, // V1 := 2
        0xD0, 0x15, // sprite V0 V1 5
        0x00, 0xFD, // exit
        0xF0, 0x90, 0x90, 0x90, 0xF0, // a box glyph
    ];
    let (vm, _) = run(&rom);
    let screen = vm.screen();
    // Top row of the glyph: four set pixels starting at (5, 2)
    for x in 5..9 {
        assert_eq!(screen.color_index(x, 2), 1);
    }
    // Hollow middle row: only the edges set
    assert_eq!(screen.color_index(5, 3), 1);
    assert_eq!(screen.color_index(6, 3), 0);
    assert_eq!(screen.color_index(8, 3), 1);
    assert_eq!(vm.registers()[0xF], 0, "no collision on a clear screen");
}

#[test]
fn hires_draw_then_scroll() {
    let rom = [
        0x00, 0xFF, // hires
        0xA2, 0x0E, // I := 0x20E
        0x60, 0x00, // V0 := 0
        0x61, 0x00, // V1 := 0
        0xD0, 0x11, // sprite V0 V1 1
        0x00, 0xC2, // scroll down 2
        0x00, 0xFD, // exit
        0x80, // single leftmost pixel
    ];
    let (vm, _) = run(&rom);
    let screen = vm.screen();
    assert_eq!(screen.width(), 128);
    assert_eq!(screen.color_index(0, 0), 0);
    assert_eq!(screen.color_index(0, 2), 1);
}

#[test]
fn pattern_playback_reaches_the_queue() {
    let rom = [
        0xA2, 0x14, // I := 0x214
        0xF0, 0x02, // load 1-bit pattern into voice 0
        0x60, 0x70, // V0 := 0x70
        0xF0, 0x3A, // pitch := V0
        0x60, 0x3C, // V0 := 60
        0xF0, 0x18, // sound timer := V0
        0x60, 0xFF, // V0 := 255
        0xF0, 0x3B, // volume := V0
        0x00, 0xFD, // exit
        0x00, 0x00, // padding
        0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, // pattern
        0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F,
    ];
    let (vm, mut synth) = run(&rom);
    assert_eq!(vm.sound_timer(), 60);

    synth.refresh(512);
    let queue = synth.queue();
    let mut out = vec![0.0f32; 512 * CHANNELS];
    queue.lock().unwrap().pull(&mut out);
    assert!(out.iter().any(|&s| s != 0.0), "an active voice makes sound");
}

#[test]
fn palette_write_updates_one_slot() {
    let rom = [
        0xA2, 0x08, // I := 0x208
        0xF2, 0x03, // palette slot 2 := 3 bytes at I
        0x00, 0xFD, // exit
        0x00, 0x00, // padding
        0x12, 0x34, 0x56, // the color
    ];
    let (vm, _) = run(&rom);
    let screen = vm.screen();
    assert_eq!(screen.fill2(), magpie_chip8::Rgb::new(0x12, 0x34, 0x56));
    assert_eq!(screen.fill(), magpie_chip8::Rgb::new(0xFF, 0xCC, 0x00));
}
