use busline_core::pipeline::{LineState, ProgressSink};
use kdam::{Bar, BarExt};

/// terminal progress bar over the requested lines
pub struct KdamProgress {
    bar: Bar,
    skipped: usize,
}

impl KdamProgress {
    pub fn new(city_name: &str, total: usize) -> Result<Self, String> {
        let bar = Bar::builder()
            .desc(format!("{city_name} bus lines"))
            .total(total)
            .build()?;
        Ok(Self { bar, skipped: 0 })
    }
}

impl ProgressSink for KdamProgress {
    fn report(&mut self, _current_index: usize, _total: usize, line_name: &str, state: LineState) {
        match state {
            LineState::Fetching => {
                self.bar
                    .set_postfix(format!("{line_name}, skipped={}", self.skipped));
                let _ = self.bar.refresh();
            }
            LineState::Skipped => {
                self.skipped += 1;
                let _ = self.bar.update(1);
            }
            LineState::Succeeded => {
                let _ = self.bar.update(1);
            }
            LineState::Pending => {}
        }
    }
}
