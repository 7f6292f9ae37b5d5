//! Four-voice pattern synthesizer
//!
//! Each voice plays a byte-sample waveform at a pitch-derived rate.  The
//! simulation is supersampled to run near 96 kHz regardless of the output
//! rate, and every supersample passes through a compact second-order
//! critically-damped low-pass whose state persists across renders, which
//! smooths the stepped waveform down to the output rate without ringing.
//!
//! Rendering is pull-based: [`Synth::refresh`] mixes every voice into one
//! [`Chunk`] and queues it; the host's audio sink drains the shared
//! [`AudioQueue`] in blocks of whatever size it likes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::Device;

/// Output sample rate the synthesizer is normally run at
pub const SAMPLE_RATE: u32 = 44100;

/// Number of output channels
pub const CHANNELS: usize = 2;

/// The pitch value that plays a pattern with no frequency shift
pub const PITCH_BIAS: u8 = 64;

/// Base playback frequency at [`PITCH_BIAS`]
const FREQ: f32 = 4000.0;

/// The internal simulation rate the supersampling factor aims for
const SIMULATION_RATE: f32 = 96000.0;

/// Low-pass preset; just strong enough to decimate supersamples
const LOWPASS: f32 = 2.0;

/// Hard cap on outstanding chunks in the queue
const MAX_CHUNKS: usize = 16;

const VOICES: usize = 4;

/// Pattern voices start with: a plain square wave, so a bare sound-timer
/// buzz is audible before any pattern load
const DEFAULT_PATTERN: [u8; 16] = [
    0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF,
    0x00, 0xFF, 0x00, 0xFF,
];

/// Packing depth of a source waveform pattern
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BitMode {
    /// 1 bit per sample
    #[default]
    One,
    /// 2 bits per sample
    Two,
    /// 4 bits per sample
    Four,
    /// 8 bits per sample (no expansion)
    Eight,
}

impl BitMode {
    /// Depth encoded in an opcode nibble
    pub fn from_nibble(x: usize) -> Self {
        match x & 3 {
            0 => BitMode::One,
            1 => BitMode::Two,
            2 => BitMode::Four,
            _ => BitMode::Eight,
        }
    }

    fn bits(&self) -> u32 {
        1 << (*self as u32)
    }
}

/// Expands a packed pattern into one byte per sample
///
/// Each packed cell is widened by bit replication, so a 2-bit sample `AB`
/// becomes `ABABABAB` and the result always spans the full 0-255 range.
fn unpack(pattern: &[u8], mode: BitMode) -> Vec<u8> {
    let bits = mode.bits();
    let per_byte = 8 / bits;
    let mask = (1u32 << bits) - 1;
    let mut out = Vec::with_capacity(pattern.len() * per_byte as usize);
    for &cell in pattern {
        for s in 0..per_byte {
            let shift = 8 - bits * (s + 1);
            let mut value = (u32::from(cell) >> shift) & mask;
            let mut filled = bits;
            while filled < 8 {
                value |= value << filled;
                filled <<= 1;
            }
            out.push(value as u8);
        }
    }
    out
}

/// Pitch-to-frequency curve: one octave per 48 pitch steps around the bias
fn frequency(pitch: u8) -> f32 {
    FREQ * ((f32::from(pitch) - f32::from(PITCH_BIAS)) / 48.0).exp2()
}

/// Persistent per-channel resample and filter state
#[derive(Copy, Clone, Debug, Default)]
struct ChannelState {
    /// Fractional read position into the waveform buffer
    pos: f32,
    /// Filter integrator
    val: f32,
    /// Filter velocity
    vel: f32,
}

struct Voice {
    buffer: Vec<u8>,
    state: [ChannelState; CHANNELS],
    /// Set when the countdown expires; zeroes the read positions on the
    /// next refresh so a retrigger starts at the top of the pattern
    reset: bool,
    timer: u8,
    pitch: u8,
    volume: f32,
    left: bool,
    right: bool,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            buffer: unpack(&DEFAULT_PATTERN, BitMode::One),
            state: [ChannelState::default(); CHANNELS],
            reset: true,
            timer: 0,
            pitch: PITCH_BIAS,
            volume: 1.0,
            left: true,
            right: true,
        }
    }
}

impl Voice {
    /// Renders and accumulates this voice into `out`
    ///
    /// Always runs, even at zero gain, so the filter state keeps decaying
    /// smoothly after a note ends.
    fn render(
        &mut self,
        quality: u32,
        step: f32,
        gains: [f32; CHANNELS],
        out: &mut Chunk,
    ) {
        let len = self.buffer.len() as f32;
        for (ch, s) in self.state.iter_mut().enumerate() {
            let gain = gains[ch];
            for o in out.samples[ch].iter_mut() {
                for _ in 0..quality {
                    let sample =
                        f32::from(self.buffer[s.pos as usize]) / 255.0;
                    s.vel += sample * gain - s.val - s.vel / LOWPASS;
                    s.val += s.vel / (LOWPASS * LOWPASS);
                    s.pos = (s.pos + step) % len;
                }
                *o += s.val;
            }
        }
    }
}

/// One mixed block of stereo samples plus its remaining duration
pub struct Chunk {
    samples: [Vec<f32>; CHANNELS],
    pointer: usize,
    remaining: usize,
}

impl Chunk {
    fn silent(len: usize) -> Self {
        Self {
            samples: [vec![0.0; len], vec![0.0; len]],
            pointer: 0,
            remaining: len,
        }
    }

    /// Frames left before this chunk is exhausted
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Copies up to `count` frames into the interleaved `out` starting at
    /// frame `offset`; returns the number of frames written
    fn write(&mut self, out: &mut [f32], offset: usize, count: usize) -> usize {
        let n = count.min(self.remaining);
        let len = self.samples[0].len();
        if len == 0 {
            self.remaining = 0;
            return 0;
        }
        for k in 0..n {
            let f = offset + k;
            out[f * CHANNELS] = self.samples[0][self.pointer];
            out[f * CHANNELS + 1] = self.samples[1][self.pointer];
            self.pointer = (self.pointer + 1) % len;
        }
        self.remaining -= n;
        n
    }
}

/// FIFO of pending sample blocks, drained by the audio sink
#[derive(Default)]
pub struct AudioQueue {
    chunks: VecDeque<Chunk>,
}

impl AudioQueue {
    /// Builds an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Total buffered duration in frames
    pub fn buffered(&self) -> usize {
        self.chunks.iter().map(|c| c.remaining).sum()
    }

    fn push(&mut self, chunk: Chunk) {
        self.chunks.push_back(chunk);
        while self.chunks.len() > MAX_CHUNKS {
            self.chunks.pop_front();
        }
    }

    /// Fills the interleaved stereo `out` from the front of the queue,
    /// zero-padding if it runs dry
    ///
    /// Consumed chunks are discarded, and buffered duration beyond one
    /// block is trimmed away, but the most recently produced chunk is
    /// always retained, so a long sustained tone is never cut short.
    pub fn pull(&mut self, out: &mut [f32]) {
        out.fill(0.0);
        let frames = out.len() / CHANNELS;
        let mut index = 0;
        while index < frames {
            let Some(front) = self.chunks.front_mut() else {
                break;
            };
            index += front.write(out, index, frames - index);
            if front.remaining == 0 {
                self.chunks.pop_front();
            }
        }
        if self.chunks.len() > 1 {
            let mut total = self.buffered();
            while total > frames && self.chunks.len() > 1 {
                total -= self.chunks.pop_front().unwrap().remaining;
            }
        }
    }
}

/// The synthesizer: four voices mixed into a shared output queue
///
/// The host owns the `Synth` and passes it (or a wrapper) as the
/// interpreter's [`Device`]; the audio sink holds the [`AudioQueue`] handle
/// and pulls blocks from its own callback context.
pub struct Synth {
    voices: [Voice; VOICES],
    /// Addressed voice; `None` after selecting an index above 3
    selected: Option<usize>,
    sample_rate: f32,
    /// Supersamples per output sample
    quality: u32,
    queue: Arc<Mutex<AudioQueue>>,
}

impl Default for Synth {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

impl Synth {
    /// Builds a synthesizer for the given output sample rate
    pub fn new(sample_rate: u32) -> Self {
        let quality =
            (SIMULATION_RATE / sample_rate as f32).ceil().max(1.0) as u32;
        Self {
            voices: [(); VOICES].map(|_| Voice::default()),
            selected: Some(0),
            sample_rate: sample_rate as f32,
            quality,
            queue: Arc::new(Mutex::new(AudioQueue::new())),
        }
    }

    /// Returns a handle to the output queue for the audio sink
    pub fn queue(&self) -> Arc<Mutex<AudioQueue>> {
        self.queue.clone()
    }

    /// Frames that make up one 60 Hz refresh at the output rate
    pub fn frame_len(&self) -> usize {
        (self.sample_rate / 60.0).ceil() as usize
    }

    /// Renders `samples` frames: mixes every voice into one chunk, queues
    /// it, and steps each active voice's countdown
    pub fn refresh(&mut self, samples: usize) {
        let mut chunk = Chunk::silent(samples);
        for voice in &mut self.voices {
            if voice.reset {
                for s in &mut voice.state {
                    s.pos = 0.0;
                }
                voice.reset = false;
            }
            let gain = if voice.timer > 0 { voice.volume } else { 0.0 };
            let gains = [
                if voice.left { gain } else { 0.0 },
                if voice.right { gain } else { 0.0 },
            ];
            let step =
                frequency(voice.pitch) / self.sample_rate / self.quality as f32;
            voice.render(self.quality, step, gains, &mut chunk);
            if voice.timer > 0 {
                voice.timer -= 1;
            } else {
                voice.reset = true;
            }
        }
        self.queue.lock().unwrap().push(chunk);
    }

    fn voice_mut(&mut self) -> Option<&mut Voice> {
        self.selected.map(|i| &mut self.voices[i])
    }
}

impl Device for Synth {
    fn sound_timer(&mut self, value: u8) {
        if let Some(voice) = self.voice_mut() {
            if value == 0 {
                voice.reset = true;
            }
            voice.timer = value;
        }
    }

    fn voice_buffer(&mut self, pattern: &[u8; 16], depth: BitMode) {
        if let Some(voice) = self.voice_mut() {
            voice.buffer = unpack(pattern, depth);
        }
    }

    fn voice_pitch(&mut self, value: u8) {
        if let Some(voice) = self.voice_mut() {
            voice.pitch = value;
        }
    }

    fn voice_volume(&mut self, value: u8) {
        if let Some(voice) = self.voice_mut() {
            voice.volume = f32::from(value) / 255.0;
        }
    }

    fn voice_select(&mut self, index: u8) {
        self.selected = (index <= 3).then(|| usize::from(index));
    }

    fn voice_channels(&mut self, mask: u8) {
        if let Some(voice) = self.voice_mut() {
            voice.left = mask & 1 != 0;
            voice.right = mask & 2 != 0;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unpack_replicates_bits() {
        assert_eq!(unpack(&[0xAB], BitMode::Four), vec![0xAA, 0xBB]);
        assert_eq!(
            unpack(&[0x0F], BitMode::One),
            vec![0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(
            unpack(&[0b0001_1011], BitMode::Two),
            vec![0x00, 0b0101_0101, 0b1010_1010, 0xFF]
        );
        assert_eq!(unpack(&[0x42, 0x7F], BitMode::Eight), vec![0x42, 0x7F]);
    }

    #[test]
    fn pitch_bias_and_octave() {
        assert_eq!(frequency(PITCH_BIAS), 4000.0);
        assert_eq!(frequency(112), 2.0 * frequency(PITCH_BIAS));
        assert_eq!(frequency(16), 0.5 * frequency(PITCH_BIAS));
    }

    #[test]
    fn voice_countdown_mutes_and_flags_reset() {
        let mut synth = Synth::new(48000);
        synth.sound_timer(2);
        synth.refresh(16);
        assert_eq!(synth.voices[0].timer, 1);
        assert!(!synth.voices[0].reset);
        synth.refresh(16);
        assert_eq!(synth.voices[0].timer, 0);
        synth.refresh(16);
        assert!(synth.voices[0].reset, "expired voice rewinds on retrigger");
    }

    #[test]
    fn null_voice_absorbs_control_writes() {
        let mut synth = Synth::new(48000);
        synth.voice_select(7);
        synth.voice_pitch(100);
        synth.voice_volume(10);
        for v in &synth.voices {
            assert_eq!(v.pitch, PITCH_BIAS);
            assert_eq!(v.volume, 1.0);
        }
        synth.voice_select(2);
        synth.voice_pitch(100);
        assert_eq!(synth.voices[2].pitch, 100);
    }

    #[test]
    fn active_voice_makes_sound_and_pans() {
        let mut synth = Synth::new(48000);
        synth.voice_channels(0b01); // left only
        synth.sound_timer(10);
        synth.refresh(256);
        let queue = synth.queue();
        let mut out = vec![0.0f32; 256 * CHANNELS];
        queue.lock().unwrap().pull(&mut out);
        let left: f32 = out.iter().step_by(2).map(|s| s.abs()).sum();
        let right: f32 = out.iter().skip(1).step_by(2).map(|s| s.abs()).sum();
        assert!(left > 0.0);
        assert_eq!(right, 0.0);
    }

    #[test]
    fn queue_keeps_newest_chunk_past_the_trim_target() {
        let mut q = AudioQueue::new();
        q.push(Chunk::silent(100));
        q.push(Chunk::silent(3000));
        let mut out = vec![0.0f32; 64 * CHANNELS];
        q.pull(&mut out);
        // 64 frames came out of the first chunk; the trim pass then drops
        // its tail but must keep the newest chunk despite its size
        assert_eq!(q.buffered(), 3000);
        q.pull(&mut out);
        assert_eq!(q.buffered(), 3000 - 64);
    }

    #[test]
    fn queue_caps_outstanding_chunks() {
        let mut synth = Synth::new(48000);
        for _ in 0..40 {
            synth.refresh(8);
        }
        let queue = synth.queue();
        assert_eq!(queue.lock().unwrap().chunks.len(), MAX_CHUNKS);
    }

    #[test]
    fn pull_from_a_dry_queue_is_silence() {
        let mut q = AudioQueue::new();
        let mut out = vec![1.0f32; 32];
        q.pull(&mut out);
        assert!(out.iter().all(|&s| s == 0.0));
    }
}
