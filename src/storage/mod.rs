pub mod atomic;

pub use atomic::AtomicFile;
