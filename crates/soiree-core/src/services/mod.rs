//! Submission services.
//!
//! Each service turns one call into exactly one outbound request and hands
//! the server's answer back without reshaping it.

pub mod events;
pub mod music;

pub use events::{EventService, EVENTS_PATH};
pub use music::{ArtistSearchResponse, MusicService, ARTISTS_PATH};
