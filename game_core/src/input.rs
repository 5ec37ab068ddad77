use crate::PaddleIntent;

/// Keyboard and window state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub quit: bool, // window close or Escape
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle_intent(&self) -> PaddleIntent {
        PaddleIntent {
            up: self.up,
            down: self.down,
        }
    }
}
