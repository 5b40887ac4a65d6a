use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UiOptions {
    /// Upper bound on how long the event loop waits for input before redrawing.
    pub tick_rate: Duration,
    pub blink_interval: Duration,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            blink_interval: Duration::from_millis(500),
            show_help: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}
