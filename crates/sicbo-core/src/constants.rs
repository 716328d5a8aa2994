/// Lowest possible total of three dice.
pub const MIN_TOTAL: u8 = 3;

/// Highest possible total of three dice.
pub const MAX_TOTAL: u8 = 18;

/// Totals at or above this value are `High`.
pub const HIGH_THRESHOLD: u8 = 11;

/// Maximum retained history length.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Minimum history length before a forecast is attempted.
pub const DEFAULT_MIN_HISTORY: usize = 10;

/// Recency window sizes: ultra-short, short, medium, long.
pub const DEFAULT_WINDOW_SIZES: [usize; 4] = [10, 30, 100, 500];

/// Base weight per recency window, same order as the window sizes.
pub const DEFAULT_PERIOD_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

/// Pattern lengths scanned by the pattern matcher.
pub const DEFAULT_PATTERN_LENGTHS: [usize; 2] = [3, 5];

/// A historical pattern needs at least this many occurrences to be a candidate.
pub const DEFAULT_PATTERN_MIN_OCCURRENCES: u32 = 2;

/// Z-score above which a total is flagged as anomalous.
pub const DEFAULT_ANOMALY_Z_THRESHOLD: f64 = 2.5;

/// Number of trailing entries considered "recent" for anomalies.
pub const RECENT_ANOMALY_SPAN: usize = 10;

/// Trend strength beyond which a trend is directional.
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.05;

/// Multiplier applied to the ratio difference when computing trend strength.
pub const TREND_DAMPING: f64 = 0.7;

/// Number of symbols shown in the diagnostic pattern string.
pub const DEFAULT_PATTERN_DISPLAY_LEN: usize = 20;

/// Number of totals returned by the total-value forecast.
pub const TOP_TOTALS: usize = 5;
