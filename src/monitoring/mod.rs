/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{init_tracing, span_run, ENV_TRACE_JSON};
