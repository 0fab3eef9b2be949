use indicatif::*;

/// Receives a status line once per progressive pass.
pub trait ProgressReporter {
    fn update(&mut self, message: &str);
}

pub struct IndicatifProgressReporter {
    pb: ProgressBar,
}

impl IndicatifProgressReporter {
    pub fn new(total_work: usize, title: &str) -> Self {
        let pb = ProgressBar::new(total_work as u64);
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}]  ({elapsed_precise}|{eta_precise}) {msg}";
        if let Ok(style) = ProgressStyle::with_template(&template) {
            pb.set_style(style.progress_chars("█▇▆▅▄▃▂▁  "));
        }
        pb.tick();
        IndicatifProgressReporter { pb }
    }

    pub fn hidden() -> Self {
        IndicatifProgressReporter {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn done(&mut self) {
        self.pb.finish();
    }
}

impl ProgressReporter for IndicatifProgressReporter {
    fn update(&mut self, message: &str) {
        self.pb.set_message(message.to_string());
        self.pb.inc(1);
    }
}

/// Collects every message; used when no terminal output is wanted.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgressReporter {
    pub messages: Vec<String>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn update(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut reporter = IndicatifProgressReporter::hidden();
        reporter.update("pass 1");
        reporter.update("pass 2");
        assert_eq!(reporter.pb.position(), 2);
        reporter.done();
    }

    #[test]
    fn test_002() {
        let mut reporter = RecordingProgressReporter::default();
        reporter.update("a");
        assert_eq!(reporter.messages, vec!["a"]);
    }
}
