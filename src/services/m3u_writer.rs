//! M3U playlist rendering
//!
//! Format:
//! ```text
//! #EXTM3U
//! # Playlist generated automatically
//! # Updated at: 2026-10-18 12:00:00 UTC
//! # Total channels: 1
//! #EXTINF:-1 tvg-logo="http://logo.png" group-title="Canais",Globo HD
//! http://cdn/globo.m3u8
//! ```

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::models::Channel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an `#EXTINF` line for a channel
fn extinf_line(channel: &Channel) -> String {
    let mut line = String::from("#EXTINF:-1");
    if !channel.logo().is_empty() {
        let _ = write!(line, " tvg-logo=\"{}\"", channel.logo());
    }
    if !channel.group().is_empty() {
        let _ = write!(line, " group-title=\"{}\"", channel.group());
    }
    line.push(',');
    line.push_str(channel.name());
    line
}

/// Render `channels` as M3U text stamped with `timestamp`
pub fn format_playlist(channels: &[Channel], timestamp: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(128 + channels.len() * 128);

    out.push_str("#EXTM3U\n");
    out.push_str("# Playlist generated automatically\n");
    let _ = writeln!(out, "# Updated at: {} UTC", timestamp.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "# Total channels: {}", channels.len());

    for channel in channels {
        out.push_str(&extinf_line(channel));
        out.push('\n');
        out.push_str(channel.url());
        out.push('\n');
    }

    out
}
