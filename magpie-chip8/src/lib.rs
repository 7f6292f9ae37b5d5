//! CHIP-8 family virtual machine
//!
//! This crate implements the interpreter core for the classic CHIP-8, SCHIP
//! and XO-CHIP instruction sets: memory and registers, the opcode
//! decoder/dispatcher, the multi-plane display buffer, delay/sound timers,
//! and the four-voice pattern synthesizer the `Fx` audio opcodes drive.
//!
//! The core is deliberately host-agnostic.  Everything that touches the
//! outside world (persisting flag registers, reacting to the exit opcode,
//! routing audio control writes) goes through the [`Device`] trait, and the
//! host owns the [`Synth`] and pulls finished sample blocks from its
//! [`AudioQueue`].
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod cpu;
mod font;
mod screen;

pub use audio::{
    AudioQueue, BitMode, Chunk, Synth, CHANNELS, PITCH_BIAS, SAMPLE_RATE,
};
pub use cpu::{Chip8, Tick};
pub use font::FontStyle;
pub use screen::{
    DrawMode, Rgb, Screen, MAX_HEIGHT, MAX_WIDTH, PALETTE_SLOTS, PLANES,
};

use thiserror::Error;

/// Memory size in classic addressing mode
pub const MEM_CLASSIC: usize = 0x1000;

/// Memory size in extended (XO-CHIP) addressing mode
pub const MEM_EXTENDED: usize = 0x10000;

/// Address at which program code is loaded
pub const PROGRAM_START: u16 = 0x200;

/// Maximum call stack depth; exceeding it is fatal
pub const STACK_DEPTH: usize = 12;

/// Fatal conditions that halt the interpreter until the next reload
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Fault {
    /// The decoder hit an opcode with no defined meaning
    #[error("unknown opcode {0:04X}")]
    UnknownOpcode(u16),

    /// An `0nnn` machine code outside the supported set
    #[error("machine code {0:03X} is not supported")]
    UnknownMachineCode(u16),

    /// A `call` would push a 13th return address
    #[error("call stack overflow")]
    StackOverflow,

    /// A `return` executed with no call in flight
    #[error("return with an empty call stack")]
    StackUnderflow,

    /// The program passed to [`Chip8::reset`] exceeds the configured limit
    #[error("program is {size} bytes, max size is {max} bytes")]
    RomTooLarge {
        /// Size of the rejected program
        size: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Why the interpreter stopped
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Halt {
    /// The program requested an exit (`00FD` or a bare `0000`)
    Exit,
    /// A fatal condition was diagnosed
    Fault(Fault),
}

/// Execution state of the interpreter
///
/// `Halted` is terminal: [`Chip8::tick`] is a no-op until the next
/// [`Chip8::reset`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// Instructions execute normally
    Running,
    /// `Fx0A` is blocked on a key release; the operand register is held
    WaitingForKey(u8),
    /// No further instructions will execute
    Halted(Halt),
}

/// Quirk toggles, matching specific historical interpreters
///
/// All quirks are fixed at load time and read-only during execution.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Quirks {
    /// `8xy6`/`8xyE` shift `Vx` in place instead of shifting `Vy`
    pub shift: bool,
    /// `Fx55`/`Fx65` leave `I` unchanged instead of advancing it
    pub load_store: bool,
    /// Sprites clip at the screen edge instead of wrapping
    pub clip: bool,
    /// `Bnnn` indexes the offset register from the high nibble of `nnn`
    pub jump: bool,
    /// `8xy1`/`8xy2`/`8xy3` force `VF` to zero afterwards
    pub logic: bool,
    /// Advisory: the scheduler should yield after a draw until the next
    /// timer tick.  The core reports draws via [`Tick::Drew`] but never
    /// blocks on its own.
    pub vblank: bool,
}

/// Immutable interpreter configuration, fixed before [`Chip8::reset`]
#[derive(Clone, Debug)]
pub struct Config {
    /// Instructions to execute per display frame (consumed by the host
    /// scheduler, not the core)
    pub tick_rate: u32,
    /// Use 64 KiB of memory instead of the classic 4 KiB
    pub extended: bool,
    /// Quirk set
    pub quirks: Quirks,
    /// Glyph set written at address 0 on reset
    pub font: FontStyle,
    /// Maximum accepted program size; `None` picks the default for the
    /// addressing width
    pub max_program: Option<usize>,
    /// RNG seed for `Cxnn`; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: 20,
            extended: true,
            quirks: Quirks::default(),
            font: FontStyle::Octo,
            max_program: None,
            seed: None,
        }
    }
}

impl Config {
    /// Memory size implied by the addressing width
    pub fn memory_size(&self) -> usize {
        if self.extended {
            MEM_EXTENDED
        } else {
            MEM_CLASSIC
        }
    }

    /// Effective program size limit
    pub fn max_program(&self) -> usize {
        self.max_program
            .unwrap_or(if self.extended { 65024 } else { 3584 })
    }
}

/// Host-side collaborators invoked by individual opcodes
///
/// Every hook has a no-op default, so a host only implements the surfaces
/// it cares about.  [`Synth`] implements the audio hooks directly and can
/// be used as the device for sound-only hosts and tests.
pub trait Device {
    /// The program executed the exit machine code
    fn exit(&mut self) {}

    /// `Fx85`: fetch the persistent 16-byte flag vector
    ///
    /// Returning `None` reads as all-zero.
    fn import_flags(&mut self) -> Option<[u8; 16]> {
        None
    }

    /// `Fx75`: persist the 16-byte flag vector
    fn export_flags(&mut self, flags: [u8; 16]) {
        let _ = flags;
    }

    /// `Fx18`: the sound timer was set to `value`
    fn sound_timer(&mut self, value: u8) {
        let _ = value;
    }

    /// `F002`: load a packed waveform pattern into the addressed voice
    fn voice_buffer(&mut self, pattern: &[u8; 16], depth: BitMode) {
        let _ = (pattern, depth);
    }

    /// `Fx3A`: set the addressed voice's pitch
    fn voice_pitch(&mut self, value: u8) {
        let _ = value;
    }

    /// `Fx3B`: set the addressed voice's volume
    fn voice_volume(&mut self, value: u8) {
        let _ = value;
    }

    /// `Fx3C`: address a different voice (an index above 3 selects none)
    fn voice_select(&mut self, index: u8) {
        let _ = index;
    }

    /// `Fx3D`: set the addressed voice's stereo channel mask
    /// (bit 0 left, bit 1 right)
    fn voice_channels(&mut self, mask: u8) {
        let _ = mask;
    }
}
