pub mod config;
pub mod dial;
pub mod events;
pub mod geometry;
pub mod sys;
pub mod timeline;

pub use timeline::Timeline;
