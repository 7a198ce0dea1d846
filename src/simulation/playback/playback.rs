//! Pause/resume for the driver loop
//!
//! Only gates `tick`; growth state is never touched from here, and an
//! explicit `step` still runs while paused.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    paused: bool,
}

impl Playback {
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Space-bar behavior: flip and report the new state
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(!Playback::default().is_paused());
    }

    #[test]
    fn toggle_flips_each_call() {
        let mut playback = Playback::default();
        assert!(playback.toggle());
        assert!(!playback.toggle());
        playback.pause();
        playback.pause();
        assert!(playback.is_paused());
        playback.resume();
        assert!(!playback.is_paused());
    }
}
