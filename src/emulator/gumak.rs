//! Binding to the Gumak core's C library.
//!
//! The library is built from Go with cgo, so strings and slices cross the
//! boundary as cgo's `GoString` / `GoSlice` structs and `int` is 64 bits.

use std::ffi::{c_char, c_void};
use std::path::Path;

use log::{error, info};

use super::{CreateParams, EmulatorCore};
use crate::frame::FrameBuffer;
use crate::script::Key;

type GoInt = i64;
type GoBool = u8;

#[repr(C)]
struct GoString {
    p: *const c_char,
    n: isize,
}

impl GoString {
    /// Borrows `bytes`; only valid while `bytes` is alive.
    fn borrow(bytes: &[u8]) -> Self {
        Self {
            p: bytes.as_ptr() as *const c_char,
            n: bytes.len() as isize,
        }
    }
}

#[repr(C)]
struct GoSlice {
    data: *mut c_void,
    len: GoInt,
    cap: GoInt,
}

#[repr(C)]
struct GumakResolutionReturn {
    inner_width: GoInt,
    inner_height: GoInt,
    outer_width: GoInt,
    outer_height: GoInt,
}

#[link(name = "gumak")]
unsafe extern "C" {
    fn GumakCreate(is_48k: GoBool, freq: GoInt, samples: GoInt, rom_path: GoString) -> GoInt;
    fn GumakDestroy(id: GoInt);
    fn GumakResolution() -> GumakResolutionReturn;
    fn GumakUpdateFrame(id: GoInt) -> GoBool;
    fn GumakDisplayDataRGB(id: GoInt, data: GoSlice, pitch: GoInt);
    fn GumakHandleKey(id: GoInt, key: GoInt, down: GoBool);
    fn GumakLoadSnapshot(id: GoInt, file: GoString) -> GoBool;
    fn GumakAudioBuffer(id: GoInt, buffer_id: GoInt, buffer: *mut c_void, length: GoInt);
}

fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

pub struct GumakCore {
    id: GoInt,
    // The core may hold on to the ROM path string past GumakCreate.
    _rom_dir: Vec<u8>,
}

impl GumakCore {
    /// Returns `None` when the library reports a null instance.
    pub fn create(params: &CreateParams) -> Option<Self> {
        let rom_dir = path_bytes(&params.rom_dir);
        info!("Loading roms from {:?}", params.rom_dir);
        // SAFETY: `rom_dir` outlives the instance since it is stored alongside it.
        let id = unsafe {
            GumakCreate(
                params.is_48k as GoBool,
                params.sample_rate,
                params.buffer_frames as GoInt,
                GoString::borrow(&rom_dir),
            )
        };
        if id == 0 {
            error!("GumakCreate returned a null instance");
            return None;
        }
        Some(Self {
            id,
            _rom_dir: rom_dir,
        })
    }
}

impl EmulatorCore for GumakCore {
    fn resolution(&self) -> (u32, u32) {
        // SAFETY: takes no arguments, reads static configuration.
        let res = unsafe { GumakResolution() };
        (res.inner_width as u32, res.inner_height as u32)
    }

    fn advance_frame(&mut self) -> bool {
        // SAFETY: `id` is a live instance until drop.
        unsafe { GumakUpdateFrame(self.id) != 0 }
    }

    fn read_display(&mut self, frame: &mut FrameBuffer) {
        let pitch = frame.stride() as GoInt;
        let len = frame.byte_len() as GoInt;
        let slice = GoSlice {
            data: frame.pixels_mut().as_mut_ptr() as *mut c_void,
            len,
            cap: len,
        };
        // SAFETY: the slice covers exactly the frame's pixel memory, which is
        // sized width * height * 4 bytes for the resolution the core reported.
        unsafe { GumakDisplayDataRGB(self.id, slice, pitch) }
    }

    unsafe fn register_audio_channel(&mut self, channel: usize, buffer: &mut [u8]) {
        // SAFETY: upheld by the caller, see the trait documentation.
        unsafe {
            GumakAudioBuffer(
                self.id,
                channel as GoInt,
                buffer.as_mut_ptr() as *mut c_void,
                buffer.len() as GoInt,
            )
        }
    }

    fn inject_key(&mut self, key: Key, pressed: bool) {
        // SAFETY: plain values only.
        unsafe { GumakHandleKey(self.id, key.id() as GoInt, pressed as GoBool) }
    }

    fn load_snapshot(&mut self, path: &Path) -> bool {
        let bytes = path_bytes(path);
        // SAFETY: `bytes` outlives the call; the core reads the file during it.
        unsafe { GumakLoadSnapshot(self.id, GoString::borrow(&bytes)) != 0 }
    }
}

impl Drop for GumakCore {
    fn drop(&mut self) {
        info!("Destroy instance");
        // SAFETY: `id` came from GumakCreate and is destroyed only here.
        unsafe { GumakDestroy(self.id) }
    }
}
