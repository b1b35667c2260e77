mod load;
mod model;

pub use load::{is_url, load_source, parse_source, read_source_file};
pub use model::{ContentFormat, Episode, EpisodeStatus, SourceFeed};
