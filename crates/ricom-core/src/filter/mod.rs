pub mod compose;

pub use compose::ComposeImageFilter;
