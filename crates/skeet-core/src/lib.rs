pub mod api;
pub mod cache;
pub mod error;
pub mod normalize;
pub mod record;
pub mod request;

pub use error::ScrapeError;

/// URL substring every accepted request must contain.
pub const SCENE_PATH_MARKER: &str = "teamskeet.com/movies/";

/// Search-index endpoint; the scene ID is appended as the final path segment.
pub const API_ENDPOINT: &str = "https://store2.psmcdn.net/ts-elastic-d5cat0jl5o-videoscontent/_doc";

/// Spoofed browser identity expected by the upstream index.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:79.0) Gecko/20100101 Firefox/79.0";

pub const WEB_ORIGIN: &str = "https://www.teamskeet.com";

/// Written to the working directory when the API request fails at the
/// transport level.
pub const FAILURE_LOG_FILE: &str = "TeamskeetAPI.log";
