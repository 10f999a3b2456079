pub mod nifti_io;

pub use nifti_io::{peek_nifti, read_nifti, write_nifti, write_nifti_vector, ImageProbe, IoPixel};
