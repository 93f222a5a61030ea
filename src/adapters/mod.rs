// Adapters layer: concrete implementations of the domain ports.

pub mod host;

pub use host::DesktopHost;
