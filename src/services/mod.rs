pub mod addon;
pub mod m3u_writer;
pub mod quality_filter;
pub mod resolver;
