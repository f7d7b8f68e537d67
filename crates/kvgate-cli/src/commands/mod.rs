pub mod misc;
pub mod storage;
