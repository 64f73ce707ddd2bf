//! UI Components for the image combiner.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Form with the two file inputs, runs the workflow on submit
//! - [`PreviewSection`] - Local previews of the selected images
//! - [`ResultSection`] - Combined image and its download link

mod hero;
mod upload;
mod preview;
mod result;
mod footer;

pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use result::*;
pub use footer::*;
