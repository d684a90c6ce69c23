use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    pub operations: IntCounterVec,
    pub keys_tried: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let operations = IntCounterVec::new(
            Opts::new("caesar_operations_total", "Completed cipher operations"),
            &["operation"],
        )?;
        let keys_tried = IntCounter::new(
            "caesar_keys_tried_total",
            "Candidate keys evaluated by brute force and statistical analysis",
        )?;
        registry.register(Box::new(operations.clone()))?;
        registry.register(Box::new(keys_tried.clone()))?;
        Ok(Self {
            operations,
            keys_tried,
        })
    }
}

/// Prometheus text exposition of everything in `registry`.
pub fn render(registry: &Registry) -> Result<String, prometheus::Error> {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
