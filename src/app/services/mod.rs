mod artifact_emitter;

pub use artifact_emitter::emit;
