pub mod trace_loader;
pub mod trace_writer;
pub mod batching;

pub use batching::{for_each_smoothed_batch, smooth_in_batches, DEFAULT_BATCH_SIZE};
pub use trace_loader::{parse_trace, read_trace, TraceLoaderError, DEFAULT_MAX_SAMPLES};
pub use trace_writer::{append_trace, write_trace, TraceWriterError};
