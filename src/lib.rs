//! Brand asset generation for GradTensor: the wordmark PNG and the course
//! syllabus PDF.

pub mod colour;
pub mod config;
pub mod pdf;
pub mod syllabus;
pub mod wordmark;
