/// Configuration constants for the chart wrapper
pub struct Config;

impl Config {
    /// A dataset whose latest point is more than this many whole days old is stale
    pub const STALE_AFTER_DAYS: u64 = 3;

    /// Banner text shown above a chart with stale datasets
    pub const MISSING_DATA_MESSAGE: &'static str =
        "This item has been missing data for at least 3 days.";

    /// Default chart height, relative to `CANVAS_BASE_WIDTH`
    pub const DEFAULT_CHART_HEIGHT: u32 = 80;

    /// Default spinner size (any CSS length)
    pub const DEFAULT_SPINNER_SIZE: &'static str = "8rem";

    /// Reference canvas width the chart height is expressed against
    pub const CANVAS_BASE_WIDTH: u32 = 300;

    /// Delay before re-rendering the chart after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// How often the wall clock used for staleness is refreshed (1 minute)
    pub const CLOCK_REFRESH_MS: u32 = 60_000;

    /// Demo application data source, served next to the wasm bundle
    pub const DATA_URL: &'static str = "data/sample.json";
}
