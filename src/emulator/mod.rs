#[cfg(feature = "gumak")]
mod gumak;

#[cfg(feature = "gumak")]
pub use gumak::GumakCore;

use std::path::{Path, PathBuf};

use crate::frame::FrameBuffer;
use crate::script::Key;

/// Arguments handed to the core when creating an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams {
    /// Emulate the 48K model instead of the 128K one.
    pub is_48k: bool,
    pub sample_rate: i64,
    pub buffer_frames: usize,
    pub rom_dir: PathBuf,
}

/// The emulation core under test. An implementation owns exactly one
/// instance handle and releases it on drop.
pub trait EmulatorCore {
    /// Inner display resolution in pixels.
    fn resolution(&self) -> (u32, u32);

    /// Advances by one displayed frame. Returns the core's audio-ready flag.
    fn advance_frame(&mut self) -> bool;

    /// Fills `frame` with the current RGBA display.
    fn read_display(&mut self, frame: &mut FrameBuffer);

    /// Hands a buffer to the core which will write audio samples into it.
    ///
    /// # Safety
    /// The core keeps a pointer to `buffer`. The memory must stay allocated
    /// and must not move until this core has been dropped.
    unsafe fn register_audio_channel(&mut self, channel: usize, buffer: &mut [u8]);

    fn inject_key(&mut self, key: Key, pressed: bool);

    /// Returns false if the snapshot could not be loaded.
    fn load_snapshot(&mut self, path: &Path) -> bool;
}
