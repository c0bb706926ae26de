mod key;

pub use key::Key;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    KeyDown(Key),
    KeyUp(Key),
    /// `None` loads the snapshot path from the harness configuration.
    LoadSnapshot(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub tick: u32,
    pub actions: Vec<Action>,
    /// Logged when the event fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScriptEvent {
    pub fn new(tick: u32, actions: Vec<Action>) -> Self {
        Self {
            tick,
            actions,
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// Tick-indexed input script. Lookups are by exact tick; ticks without an
/// entry do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct StimulusScript {
    // Sorted by tick, ticks unique.
    events: Vec<ScriptEvent>,
}

impl StimulusScript {
    /// Builds a script, rejecting tick 0, duplicate ticks and any tick at or
    /// past `capture_tick`, none of which could ever fire.
    pub fn new(mut events: Vec<ScriptEvent>, capture_tick: u32) -> Result<Self, HarnessError> {
        events.sort_by_key(|e| e.tick);
        for pair in events.windows(2) {
            if pair[0].tick == pair[1].tick {
                return Err(HarnessError::Script(format!(
                    "duplicate tick {}",
                    pair[0].tick
                )));
            }
        }
        if let Some(event) = events
            .iter()
            .find(|e| e.tick == 0 || e.tick >= capture_tick)
        {
            return Err(HarnessError::Script(format!(
                "tick {} is outside 1..{}",
                event.tick, capture_tick
            )));
        }
        Ok(Self { events })
    }

    /// Enter the snapshot, then select with "arrow down" (Shift + 6).
    pub fn default_scenario() -> Self {
        Self {
            events: vec![
                ScriptEvent::new(
                    80,
                    vec![Action::LoadSnapshot(None), Action::KeyDown(Key::Enter)],
                ),
                ScriptEvent::new(90, vec![Action::KeyUp(Key::Enter)]),
                ScriptEvent::new(
                    100,
                    vec![Action::KeyDown(Key::Shift), Action::KeyDown(Key::Key6)],
                )
                .with_label("Arrow down pressed"),
                ScriptEvent::new(
                    101,
                    vec![Action::KeyUp(Key::Shift), Action::KeyUp(Key::Key6)],
                )
                .with_label("Arrow down released"),
            ],
        }
    }

    pub fn from_json(json: &str, capture_tick: u32) -> Result<Self, HarnessError> {
        let events: Vec<ScriptEvent> = serde_json::from_str(json)?;
        Self::new(events, capture_tick)
    }

    pub fn load(path: &Path, capture_tick: u32) -> Result<Self, HarnessError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json, capture_tick)
    }

    pub fn actions_at(&self, tick: u32) -> &[Action] {
        match self.events.binary_search_by_key(&tick, |e| e.tick) {
            Ok(index) => &self.events[index].actions,
            Err(_) => &[],
        }
    }

    pub fn label_at(&self, tick: u32) -> Option<&str> {
        let index = self.events.binary_search_by_key(&tick, |e| e.tick).ok()?;
        self.events[index].label.as_deref()
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }
}

impl Default for StimulusScript {
    fn default() -> Self {
        Self::default_scenario()
    }
}
