//! pronfetch core: turn a word list into one pronunciation MP3 per word.
//!
//! Words are loaded from a CSV file ([`words`]), named ([`naming`]), fetched
//! or synthesized by an [`provider::AudioProvider`], and written to disk
//! ([`storage`]). [`pipeline`] ties the stages together.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod provider;
pub mod storage;
pub mod words;
