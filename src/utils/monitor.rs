use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub topics_run: usize,
    pub total_time: Duration,
}

/// Wall-clock timings for a tour session, logged through `tracing`.
pub struct SessionMonitor {
    start_time: Instant,
    timings: Vec<(String, Duration)>,
    enabled: bool,
}

impl SessionMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            timings: Vec::new(),
            enabled,
        }
    }

    pub fn record(&mut self, label: &str, elapsed: Duration) {
        if !self.enabled {
            return;
        }
        self.timings.push((label.to_string(), elapsed));
        tracing::info!("📊 {} finished in {:?}", label, elapsed);
    }

    pub fn stats(&self) -> Option<SessionStats> {
        if !self.enabled {
            return None;
        }
        Some(SessionStats {
            topics_run: self.timings.len(),
            total_time: self.start_time.elapsed(),
        })
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.stats() {
            tracing::info!(
                "📊 Final Stats - Topics Run: {}, Total Time: {:?}",
                stats.topics_run,
                stats.total_time
            );
            for (label, elapsed) in &self.timings {
                tracing::info!("📊   {}: {:?}", label, elapsed);
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_records_nothing() {
        let mut monitor = SessionMonitor::new(false);
        monitor.record("Maps", Duration::from_millis(5));
        assert!(monitor.stats().is_none());
    }

    #[test]
    fn test_enabled_monitor_counts_topics() {
        let mut monitor = SessionMonitor::new(true);
        monitor.record("Maps", Duration::from_millis(5));
        monitor.record("Structs", Duration::from_millis(7));
        let stats = monitor.stats().unwrap();
        assert_eq!(stats.topics_run, 2);
    }
}
