pub mod build;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod podcast;
pub mod render;
pub mod source;
pub mod taxonomy;

// Re-export main types for convenience
pub use build::{BuildOptions, FeedBuild, HostedUrlProvider, UrlProvider, build_feed};
pub use config::{Config, FeedConfig, FeedMetadata, load_config, validate_config};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{BuildError, ConfigError, RenderError, SourceError, UrlProviderError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use podcast::{Enclosure, ExplicitFlag, FeedItem, Owner, PodcastFeed};
pub use source::{ContentFormat, Episode, EpisodeStatus, SourceFeed, load_source};
pub use taxonomy::{CategoryAssignment, validate_category};
