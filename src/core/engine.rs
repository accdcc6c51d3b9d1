use crate::domain::model::Topic;
use crate::domain::ports::ConfigProvider;
use crate::lessons;
use crate::utils::error::Result;
use crate::utils::monitor::SessionMonitor;
use std::io::Write;
use std::time::Instant;

/// Runs lesson topics against an output sink and keeps session timings.
pub struct TourEngine<C: ConfigProvider> {
    config: C,
    monitor: SessionMonitor,
}

impl<C: ConfigProvider> TourEngine<C> {
    pub fn new(config: C) -> Self {
        let monitor = SessionMonitor::new(config.timings_enabled());
        Self { config, monitor }
    }

    pub fn new_with_monitoring(config: C, enabled: bool) -> Self {
        Self {
            monitor: SessionMonitor::new(enabled),
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run_topic(&mut self, out: &mut dyn Write, topic: Topic) -> Result<()> {
        tracing::debug!("Running topic: {}", topic.label());

        let rule = "=".repeat(self.config.rule_width());
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "{}", topic.banner())?;
        writeln!(out, "{}", rule)?;

        let started = Instant::now();
        lessons::lesson_for(topic).run(out)?;
        self.monitor.record(topic.label(), started.elapsed());

        Ok(())
    }

    pub fn run_all(&mut self, out: &mut dyn Write) -> Result<()> {
        for topic in self.config.enabled_topics() {
            self.run_topic(out, topic)?;
        }

        let rule = "=".repeat(self.config.rule_width());
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "ALL EXAMPLES COMPLETED!")?;
        writeln!(out, "{}", rule)?;

        Ok(())
    }

    /// Logs the session summary; call once the session is over.
    pub fn finish(&self) {
        self.monitor.log_final_stats();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfig {
        topics: Vec<Topic>,
    }

    impl ConfigProvider for TestConfig {
        fn rule_width(&self) -> usize {
            40
        }

        fn pause_between(&self) -> bool {
            false
        }

        fn timings_enabled(&self) -> bool {
            false
        }

        fn enabled_topics(&self) -> Vec<Topic> {
            self.topics.clone()
        }
    }

    #[test]
    fn test_run_topic_prints_banner_and_lesson() {
        let mut engine = TourEngine::new(TestConfig { topics: Topic::ALL.to_vec() });
        let mut out = Vec::new();

        engine.run_topic(&mut out, Topic::Maps).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("HASHMAPS IN RUST"));
        assert!(output.contains(&"=".repeat(40)));
        assert!(output.contains("=== MAP BASICS ==="));
    }

    #[test]
    fn test_run_all_honors_enabled_topics() {
        let mut engine = TourEngine::new(TestConfig {
            topics: vec![Topic::Structs, Topic::Maps],
        });
        let mut out = Vec::new();

        engine.run_all(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("STRUCTS IN RUST"));
        assert!(output.contains("HASHMAPS IN RUST"));
        assert!(!output.contains("ARRAYS AND VECTORS IN RUST"));
        assert!(output.contains("ALL EXAMPLES COMPLETED!"));

        // configured order is preserved
        let structs_at = output.find("STRUCTS IN RUST").unwrap();
        let maps_at = output.find("HASHMAPS IN RUST").unwrap();
        assert!(structs_at < maps_at);
    }
}
