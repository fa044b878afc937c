// Interface adapters: wire protocol, stdio plumbing and the audio cue adapter.

pub mod audio;
pub mod protocol;
pub mod stdio;
pub mod utils;
