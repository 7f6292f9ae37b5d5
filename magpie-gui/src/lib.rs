use chip8::{
    BitMode, Chip8, Config, Device, Halt, State, Synth, Tick, CHANNELS,
    SAMPLE_RATE,
};
use host::{Compositor, FlagFile, Key, Keymap};

use cpal::traits::StreamTrait;
use eframe::egui;

/// Display refresh period; also drives timers and audio refresh
const FRAME_PERIOD: f64 = 1.0 / 60.0;

/// The control hooks, fanned out to their host-side owners
struct Hooks<'a> {
    synth: &'a mut Synth,
    flags: &'a mut FlagFile,
    exited: &'a mut bool,
}

impl Device for Hooks<'_> {
    fn exit(&mut self) {
        *self.exited = true;
    }
    fn import_flags(&mut self) -> Option<[u8; 16]> {
        self.flags.load()
    }
    fn export_flags(&mut self, flags: [u8; 16]) {
        self.flags.save(flags);
    }
    fn sound_timer(&mut self, value: u8) {
        self.synth.sound_timer(value);
    }
    fn voice_buffer(&mut self, pattern: &[u8; 16], depth: BitMode) {
        self.synth.voice_buffer(pattern, depth);
    }
    fn voice_pitch(&mut self, value: u8) {
        self.synth.voice_pitch(value);
    }
    fn voice_volume(&mut self, value: u8) {
        self.synth.voice_volume(value);
    }
    fn voice_select(&mut self, index: u8) {
        self.synth.voice_select(index);
    }
    fn voice_channels(&mut self, mask: u8) {
        self.synth.voice_channels(mask);
    }
}

pub struct Stage {
    vm: Chip8,
    synth: Synth,
    flags: FlagFile,
    keymap: Keymap,
    compositor: Compositor,

    tick_rate: u32,
    vblank: bool,

    exited: bool,
    fault_reported: bool,

    /// Time (in seconds) at which we should run the next frame
    next_frame: f64,

    texture: egui::TextureHandle,
}

impl Stage {
    pub fn new(
        vm: Chip8,
        synth: Synth,
        flags: FlagFile,
        config: &Config,
        ctx: &egui::Context,
    ) -> Stage {
        let image = egui::ColorImage::new(
            [vm.screen().width(), vm.screen().height()],
            egui::Color32::BLACK,
        );
        let texture =
            ctx.load_texture("frame", image, egui::TextureOptions::NEAREST);

        Stage {
            vm,
            synth,
            flags,
            keymap: Keymap::default(),
            compositor: Compositor::new(),
            tick_rate: config.tick_rate,
            vblank: config.quirks.vblank,
            exited: false,
            fault_reported: false,
            next_frame: 0.0,
            texture,
        }
    }

    /// One display frame: up to `tick_rate` instructions, then a timer
    /// decrement and one refresh worth of audio
    fn run_frame(&mut self) {
        let mut hooks = Hooks {
            synth: &mut self.synth,
            flags: &mut self.flags,
            exited: &mut self.exited,
        };
        for _ in 0..self.tick_rate {
            match self.vm.tick(&mut hooks) {
                Tick::Idle => break,
                Tick::Drew if self.vblank => break,
                _ => (),
            }
        }
        self.vm.decrement_timers();
        let samples = self.synth.frame_len();
        self.synth.refresh(samples);

        if !self.fault_reported {
            if let State::Halted(Halt::Fault(f)) = self.vm.state() {
                log::error!("interpreter halted: {f}");
                self.fault_reported = true;
            }
        }
    }
}

impl eframe::App for Stage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = ctx.input(|i| {
            for e in i.events.iter() {
                if let egui::Event::Key { key, pressed, .. } = e {
                    if let Some(k) = decode_key(*key) {
                        if let Some(code) = self.keymap.logical(k) {
                            if *pressed {
                                self.vm.key_down(code);
                            } else {
                                self.vm.key_up(code);
                            }
                        }
                    }
                }
            }
            i.time
        });

        // Execution is pinned to 60 Hz regardless of repaint rate
        if time >= self.next_frame {
            self.run_frame();
            self.next_frame = time + FRAME_PERIOD;
        }
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(
            (self.next_frame - time).max(0.0),
        ));

        if self.compositor.refresh(self.vm.screen()) {
            let (w, h) = self.compositor.size();
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [w, h],
                self.compositor.frame(),
            );
            self.texture.set(image, egui::TextureOptions::NEAREST);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let mut mesh = egui::Mesh::with_texture(self.texture.id());
            mesh.add_rect_with_uv(
                rect,
                egui::Rect {
                    min: egui::Pos2::new(0.0, 0.0),
                    max: egui::Pos2::new(1.0, 1.0),
                },
                egui::Color32::WHITE,
            );
            ui.painter().add(egui::Shape::mesh(mesh));
        });

        if self.exited {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Builds the output stream that drains the synthesizer's queue
pub fn audio_setup(synth: &Synth) -> (cpal::Device, cpal::Stream) {
    use cpal::traits::{DeviceTrait, HostTrait};
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .expect("no output device available");
    let mut supported_configs_range = device
        .supported_output_configs()
        .expect("error while querying configs");

    let supported_config = supported_configs_range
        .find_map(|c| c.try_with_sample_rate(cpal::SampleRate(SAMPLE_RATE)))
        .filter(|c| usize::from(c.channels()) == CHANNELS)
        .expect("no supported config?");
    let config = supported_config.config();

    let queue = synth.queue();
    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _opt: &cpal::OutputCallbackInfo| {
                queue.lock().unwrap().pull(data);
            },
            move |err| {
                panic!("{err}");
            },
            None,
        )
        .expect("could not build stream");
    stream.play().unwrap();
    (device, stream)
}

fn decode_key(k: egui::Key) -> Option<Key> {
    let c = match k {
        egui::Key::ArrowUp => Key::Up,
        egui::Key::ArrowDown => Key::Down,
        egui::Key::ArrowLeft => Key::Left,
        egui::Key::ArrowRight => Key::Right,
        egui::Key::Space => Key::Space,
        egui::Key::Num0 => Key::Char(b'0'),
        egui::Key::Num1 => Key::Char(b'1'),
        egui::Key::Num2 => Key::Char(b'2'),
        egui::Key::Num3 => Key::Char(b'3'),
        egui::Key::Num4 => Key::Char(b'4'),
        egui::Key::Num5 => Key::Char(b'5'),
        egui::Key::Num6 => Key::Char(b'6'),
        egui::Key::Num7 => Key::Char(b'7'),
        egui::Key::Num8 => Key::Char(b'8'),
        egui::Key::Num9 => Key::Char(b'9'),
        egui::Key::A => Key::Char(b'a'),
        egui::Key::B => Key::Char(b'b'),
        egui::Key::C => Key::Char(b'c'),
        egui::Key::D => Key::Char(b'd'),
        egui::Key::E => Key::Char(b'e'),
        egui::Key::F => Key::Char(b'f'),
        egui::Key::G => Key::Char(b'g'),
        egui::Key::H => Key::Char(b'h'),
        egui::Key::I => Key::Char(b'i'),
        egui::Key::J => Key::Char(b'j'),
        egui::Key::K => Key::Char(b'k'),
        egui::Key::L => Key::Char(b'l'),
        egui::Key::M => Key::Char(b'm'),
        egui::Key::N => Key::Char(b'n'),
        egui::Key::O => Key::Char(b'o'),
        egui::Key::P => Key::Char(b'p'),
        egui::Key::Q => Key::Char(b'q'),
        egui::Key::R => Key::Char(b'r'),
        egui::Key::S => Key::Char(b's'),
        egui::Key::T => Key::Char(b't'),
        egui::Key::U => Key::Char(b'u'),
        egui::Key::V => Key::Char(b'v'),
        egui::Key::W => Key::Char(b'w'),
        egui::Key::X => Key::Char(b'x'),
        egui::Key::Y => Key::Char(b'y'),
        egui::Key::Z => Key::Char(b'z'),
        _ => return None,
    };
    Some(c)
}
