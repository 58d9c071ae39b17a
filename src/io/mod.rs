// Purpose - external interfaces, format conversions
//
// Nothing in here is used by the generators themselves. Buffers leave the
// core as normalized f32; persisting them is the caller's business.

pub mod pcm;
pub mod sink;

pub use sink::{BitDepth, MemorySink, SampleSink, SinkError, WavSink};
