use std::ffi::c_void;

use super::{Upscaler, ensure_target_size};
use crate::error::HarnessError;
use crate::frame::FrameBuffer;

type HqxFn = unsafe extern "C" fn(input: *const c_void, width: u32, height: u32, output: *mut c_void);

#[link(name = "hqXscale")]
unsafe extern "C" {
    fn HQ2X(input: *const c_void, width: u32, height: u32, output: *mut c_void);
    fn HQ3X(input: *const c_void, width: u32, height: u32, output: *mut c_void);
}

/// HQ2x / HQ3x from the hqXscale library.
pub struct Hqx {
    name: &'static str,
    factor: u32,
    resize: HqxFn,
}

impl Hqx {
    pub fn x2() -> Self {
        Self {
            name: "hq2x",
            factor: 2,
            resize: HQ2X,
        }
    }

    pub fn x3() -> Self {
        Self {
            name: "hq3x",
            factor: 3,
            resize: HQ3X,
        }
    }
}

impl Upscaler for Hqx {
    fn name(&self) -> &'static str {
        self.name
    }

    fn factor(&self) -> u32 {
        self.factor
    }

    fn upscale(
        &mut self,
        source: &FrameBuffer,
        target: &mut FrameBuffer,
    ) -> Result<(), HarnessError> {
        ensure_target_size(source, target, self.factor)?;
        // SAFETY: both buffers were checked to match the geometry the filter
        // reads and writes.
        unsafe {
            (self.resize)(
                source.pixels().as_ptr() as *const c_void,
                source.width(),
                source.height(),
                target.pixels_mut().as_mut_ptr() as *mut c_void,
            )
        }
        Ok(())
    }
}
