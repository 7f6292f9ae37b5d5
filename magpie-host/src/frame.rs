//! Frame compositor
//!
//! Combines the four 1-bit planes and the palette into an RGBA image at
//! the active resolution.  The previous frame's color indices and palette
//! are kept so an unchanged frame can skip the texture upload entirely.

use chip8::{Rgb, Screen, PALETTE_SLOTS};

/// Composites the display planes into an RGBA byte buffer
#[derive(Default)]
pub struct Compositor {
    buffer: Vec<u8>,
    last: Vec<u8>,
    palette: [Rgb; PALETTE_SLOTS],
    size: (usize, usize),
}

impl Compositor {
    /// Builds an empty compositor; the first refresh sizes it
    pub fn new() -> Self {
        Self::default()
    }

    /// Active frame size in pixels
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// The composited RGBA frame, `width * height * 4` bytes
    pub fn frame(&self) -> &[u8] {
        &self.buffer
    }

    /// Recomposites from the screen; returns `true` when the image changed
    pub fn refresh(&mut self, screen: &Screen) -> bool {
        let (w, h) = (screen.width(), screen.height());
        let mut changed = false;
        if (w, h) != self.size {
            self.size = (w, h);
            // Out-of-range indices force every cell to repaint
            self.last = vec![u8::MAX; w * h];
            self.buffer = vec![0; w * h * 4];
            changed = true;
        }
        if *screen.palette() != self.palette {
            self.palette = *screen.palette();
            changed = true;
        }
        for y in 0..h {
            for x in 0..w {
                let c = screen.color_index(x, y);
                let cell = y * w + x;
                if self.last[cell] != c {
                    self.last[cell] = c;
                    changed = true;
                }
            }
        }
        if changed {
            for (cell, &c) in self.last.iter().enumerate() {
                let color = self.palette[usize::from(c)];
                let o = cell * 4;
                self.buffer[o] = color.r;
                self.buffer[o + 1] = color.g;
                self.buffer[o + 2] = color.b;
                self.buffer[o + 3] = u8::MAX;
            }
        }
        changed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chip8::{Chip8, Config, Device, State};

    struct NoDevice;
    impl Device for NoDevice {}

    fn run(rom: &[u8]) -> Chip8 {
        let mut vm = Chip8::new(Config::default());
        vm.reset(rom).unwrap();
        let mut dev = NoDevice;
        while *vm.state() == State::Running {
            vm.tick(&mut dev);
        }
        vm
    }

    #[test]
    fn repaints_only_when_the_image_changes() {
        // Draw one pixel at (0, 0), then exit
        let vm = run(&[
            0xA2, 0x08, // I := 0x208
            0xD0, 0x01, // sprite V0 V0 1
            0x00, 0xFD, // exit
            0x00, 0x00, // padding
            0x80, // pixel data
        ]);
        let mut comp = Compositor::new();
        assert!(comp.refresh(vm.screen()), "first frame always paints");
        assert_eq!(comp.size(), (64, 32));

        let (w, _) = comp.size();
        assert_eq!(&comp.frame()[..4], &[0xFF, 0xCC, 0x00, 0xFF]);
        assert_eq!(&comp.frame()[4..8], &[0x99, 0x66, 0x00, 0xFF]);
        assert_eq!(comp.frame().len(), w * 32 * 4);

        assert!(!comp.refresh(vm.screen()), "unchanged frame skips work");
    }

    #[test]
    fn palette_change_forces_a_repaint() {
        let vm = run(&[
            0xA2, 0x06, // I := 0x206
            0xF0, 0x03, // palette slot 0 := 3 bytes at I
            0x00, 0xFD, // exit
            0x10, 0x20, 0x30,
        ]);
        let mut comp = Compositor::new();
        assert!(comp.refresh(vm.screen()));
        assert_eq!(&comp.frame()[..4], &[0x10, 0x20, 0x30, 0xFF]);
    }
}
