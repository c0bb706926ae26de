/// Tick at which the one-shot capture fires and the cycle counter resets.
pub const CAPTURE_TICK: u32 = 150;

pub const SAMPLE_RATE: i64 = 48_000;
/// Byte length of each audio channel buffer, also passed as the frame count.
pub const AUDIO_BUFFER_LEN: usize = 1024;
pub const AUDIO_CHANNELS: usize = 2;

/// Distance in pixels between the lines of the reference grid.
pub const GRID_SPACING: u32 = 8;
/// Opaque black. Pixels are stored in native byte order.
pub const GRID_LINE: u32 = u32::from_ne_bytes([0x00, 0x00, 0x00, 0xFF]);
pub const GRID_EMPTY: u32 = 0x0000_0000;

pub const BYTES_PER_PIXEL: usize = 4;

pub const STAT_DISPLAY_READ: &str = "display-read";
pub const STAT_UPSCALE: &str = "upscale";

pub const GRID_FILE: &str = "grid.png";
pub const ORIGINAL_FILE: &str = "original.png";

pub const DEFAULT_ROM_DIR: &str = "roms";
pub const DEFAULT_SNAPSHOT: &str = "roms/tmp.z80";

/// File name for a capture taken with an upscaler of the given factor.
pub fn resized_file(factor: u32) -> String {
    format!("resized_{}x.png", factor)
}
