//! Image Codec Implementations

pub mod jpeg_transcoder;
