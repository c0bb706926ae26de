use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gumak_bench::HarnessError;
use gumak_bench::emulator::{CreateParams, EmulatorCore};
use gumak_bench::frame::FrameBuffer;
use gumak_bench::image::ImageSink;
use gumak_bench::script::Key;
use gumak_bench::upscale::{Upscaler, Upscalers, ensure_target_size};

/// Everything the harness did to its collaborators, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(CreateParams),
    AdvanceFrame,
    ReadDisplay,
    RegisterAudio { channel: usize, len: usize },
    InjectKey(Key, bool),
    LoadSnapshot(PathBuf),
    Upscale(u32),
    WriteImage { path: PathBuf, width: u32, height: u32 },
    Destroy,
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Calls paired with the tick they happened on. A tick is the number
    /// of frames advanced so far, so setup calls are on tick 0.
    pub fn with_ticks(&self) -> Vec<(u32, Call)> {
        let mut tick = 0;
        self.0
            .borrow()
            .iter()
            .map(|call| {
                if *call == Call::AdvanceFrame {
                    tick += 1;
                }
                (tick, call.clone())
            })
            .collect()
    }

    /// Only the calls matching `pred`, with their ticks.
    pub fn filtered(&self, pred: impl Fn(&Call) -> bool) -> Vec<(u32, Call)> {
        self.with_ticks()
            .into_iter()
            .filter(|(_, c)| pred(c))
            .collect()
    }
}

pub struct MockCore {
    log: CallLog,
    width: u32,
    height: u32,
    snapshot_loads: bool,
    frame_number: u32,
}

impl MockCore {
    pub fn new(log: &CallLog, width: u32, height: u32) -> Self {
        Self {
            log: log.clone(),
            width,
            height,
            snapshot_loads: true,
            frame_number: 0,
        }
    }

    pub fn failing_snapshots(mut self) -> Self {
        self.snapshot_loads = false;
        self
    }

    /// A `create` closure handing out this core and recording the call.
    pub fn factory(self) -> impl FnOnce(&CreateParams) -> Option<MockCore> {
        move |params| {
            self.log.push(Call::Create(params.clone()));
            Some(self)
        }
    }
}

impl EmulatorCore for MockCore {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn advance_frame(&mut self) -> bool {
        self.frame_number += 1;
        self.log.push(Call::AdvanceFrame);
        true
    }

    fn read_display(&mut self, frame: &mut FrameBuffer) {
        assert_eq!((frame.width(), frame.height()), (self.width, self.height));
        frame.pixels_mut().fill(self.frame_number);
        self.log.push(Call::ReadDisplay);
    }

    unsafe fn register_audio_channel(&mut self, channel: usize, buffer: &mut [u8]) {
        self.log.push(Call::RegisterAudio {
            channel,
            len: buffer.len(),
        });
    }

    fn inject_key(&mut self, key: Key, pressed: bool) {
        self.log.push(Call::InjectKey(key, pressed));
    }

    fn load_snapshot(&mut self, path: &Path) -> bool {
        self.log.push(Call::LoadSnapshot(path.to_path_buf()));
        self.snapshot_loads
    }
}

impl Drop for MockCore {
    fn drop(&mut self) {
        self.log.push(Call::Destroy);
    }
}

/// Copies the top-left source pixel everywhere, enough to see it ran.
pub struct MockUpscaler {
    log: CallLog,
    factor: u32,
}

impl MockUpscaler {
    pub fn new(log: &CallLog, factor: u32) -> Self {
        Self {
            log: log.clone(),
            factor,
        }
    }
}

impl Upscaler for MockUpscaler {
    fn name(&self) -> &'static str {
        "mock"
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
        let value = source.pixels().first().copied().unwrap_or_default();
        target.pixels_mut().fill(value);
        self.log.push(Call::Upscale(self.factor));
        Ok(())
    }
}

/// 3x every frame, 2x at capture time.
pub fn mock_upscalers(log: &CallLog) -> Upscalers {
    Upscalers {
        per_frame: Box::new(MockUpscaler::new(log, 3)),
        capture: Box::new(MockUpscaler::new(log, 2)),
    }
}

pub struct RecordingSink {
    log: CallLog,
    /// Copies of every written frame, in order.
    pub frames: Rc<RefCell<Vec<FrameBuffer>>>,
}

impl RecordingSink {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            frames: Rc::default(),
        }
    }
}

impl ImageSink for RecordingSink {
    fn write_image(&mut self, path: &Path, frame: &FrameBuffer) -> Result<(), HarnessError> {
        self.log.push(Call::WriteImage {
            path: path.to_path_buf(),
            width: frame.width(),
            height: frame.height(),
        });
        self.frames.borrow_mut().push(frame.clone());
        Ok(())
    }
}

/// Records writes like `RecordingSink` but fails any path ending in
/// `reject`.
pub struct RejectingSink {
    inner: RecordingSink,
    reject: &'static str,
}

impl RejectingSink {
    pub fn new(log: &CallLog, reject: &'static str) -> Self {
        Self {
            inner: RecordingSink::new(log),
            reject,
        }
    }
}

impl ImageSink for RejectingSink {
    fn write_image(&mut self, path: &Path, frame: &FrameBuffer) -> Result<(), HarnessError> {
        if path.ends_with(self.reject) {
            return Err(HarnessError::Image {
                path: path.to_path_buf(),
                source: std::io::Error::other("permission denied").into(),
            });
        }
        self.inner.write_image(path, frame)
    }
}

/// Fails every write, as a full disk would.
pub struct FailingSink;

impl ImageSink for FailingSink {
    fn write_image(&mut self, path: &Path, _frame: &FrameBuffer) -> Result<(), HarnessError> {
        Err(HarnessError::Image {
            path: path.to_path_buf(),
            source: std::io::Error::other("disk full").into(),
        })
    }
}
