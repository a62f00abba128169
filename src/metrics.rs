//! Metrics and tracing instrumentation
//!
//! The `metrics` feature exposes a process-wide `METRICS` static backed by
//! an opentelemetry-prometheus exporter; store adapters and the repository
//! record query counts, durations, and built filters through it. The
//! `tracing` feature provides the span helpers used around store calls.
//! Both features are independent and off-by-default builds compile without
//! either stack.

#[cfg(feature = "metrics")]
pub use self::collectors::{SpecimenMetrics, METRICS};

#[cfg(feature = "metrics")]
mod collectors {
    use once_cell::sync::Lazy;
    use opentelemetry::{
        global,
        metrics::{Counter, Histogram},
    };
    use opentelemetry_prometheus::PrometheusExporter;

    pub static METRICS: Lazy<SpecimenMetrics> = Lazy::new(SpecimenMetrics::init);

    pub struct SpecimenMetrics {
        pub exporter: PrometheusExporter,
        pub queries_total: Counter<u64>,
        pub query_errors_total: Counter<u64>,
        pub query_duration: Histogram<f64>,
        pub connection_wait: Histogram<f64>,
        pub filters_built_total: Counter<u64>,
    }

    impl SpecimenMetrics {
        pub fn init() -> Self {
            let exporter = opentelemetry_prometheus::exporter().build().expect("failed to build prometheus exporter");
            let meter = global::meter("specimen");

            let queries_total = meter.u64_counter("specimen_queries_total")
                .with_description("Total store queries executed").build();

            let query_errors_total = meter.u64_counter("specimen_query_errors_total")
                .with_description("Total store queries that failed").build();

            let query_duration = meter.f64_histogram("specimen_query_duration_seconds")
                .with_description("Duration of store queries").build();

            let connection_wait = meter.f64_histogram("specimen_connection_wait_seconds")
                .with_description("Time spent establishing store connections").build();

            let filters_built_total = meter.u64_counter("specimen_filters_built_total")
                .with_description("Filters built from example objects").build();

            Self {
                exporter,
                queries_total,
                query_errors_total,
                query_duration,
                connection_wait,
                filters_built_total,
            }
        }

        pub fn record_query(&self, elapsed: std::time::Duration) {
            self.queries_total.add(1, &[]);
            self.query_duration.record(elapsed.as_secs_f64(), &[]);
        }

        pub fn record_query_error(&self) {
            self.query_errors_total.add(1, &[]);
        }

        pub fn record_connection_wait(&self, elapsed: std::time::Duration) {
            self.connection_wait.record(elapsed.as_secs_f64(), &[]);
        }

        pub fn record_filter_built(&self) {
            self.filters_built_total.add(1, &[]);
        }
    }
}

#[cfg(feature = "tracing")]
pub mod tracing_helpers {
    //! Span constructors shared by the stores and the repository

    /// Span around a single SQL statement execution
    pub fn query_span(sql: &str) -> tracing::Span {
        tracing::debug_span!("specimen_query", sql = %sql)
    }

    /// Span around connection establishment
    pub fn connect_span() -> tracing::Span {
        tracing::debug_span!("specimen_connect")
    }

    /// Span around one repository operation
    pub fn operation_span(operation: &'static str, table: &'static str) -> tracing::Span {
        tracing::debug_span!("specimen_operation", operation = operation, table = table)
    }

    /// Install a no-frills registry subscriber; repeat calls are no-ops
    ///
    /// Convenience for hosts (and tests) that have no subscriber of their
    /// own.
    pub fn init_tracing() {
        use tracing_subscriber::prelude::*;
        let _ = tracing_subscriber::registry().try_init();
    }
}
