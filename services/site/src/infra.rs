use chrono::{Datelike, Local};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Year printed in the footer copyright line.
pub(crate) fn copyright_year() -> i32 {
    Local::now().year()
}
