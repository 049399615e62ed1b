use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PrimeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PrimeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting prime generation...");
        self.monitor.log_stats("Start");

        // Generate
        let primes = self.pipeline.generate()?;
        tracing::info!(
            "Generated {} primes (largest: {:?})",
            primes.len(),
            primes.largest()
        );
        self.monitor.log_stats("Generate");

        // Serialize
        let data = self.pipeline.serialize(&primes)?;
        self.monitor.log_stats("Serialize");

        // Load
        tracing::info!("Writing JSON output...");
        let output_path = self.pipeline.load(data)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunReport {
            output_path,
            primes_written: primes.len(),
            largest_prime: primes.largest(),
        })
    }
}
