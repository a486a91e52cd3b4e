// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: usize = 1_000;

// --- Retrieval ---
pub const DEFAULT_RETRIEVAL_WIDTH: usize = 100;
pub const DEFAULT_TITLE_BOOST: f64 = 3.0;
pub const DEFAULT_DESCRIPTION_BOOST: f64 = 1.5;
pub const DEFAULT_CATEGORY_BOOST: f64 = 0.5;
pub const DEFAULT_TIE_BREAKER: f64 = 0.3;
pub const DEFAULT_LEXICAL_SHARE: f64 = 0.4;

// --- Features ---
pub const DEFAULT_POPULARITY: f64 = 1_000.0;
pub const DEFAULT_QUALITY: f64 = 4.0;
pub const DEFAULT_CTR: f64 = 0.05;
pub const DEFAULT_KNOWN_BRANDS: &[&str] = &[
    "samsung",
    "apple",
    "sony",
    "lg",
    "dell",
    "hp",
    "lenovo",
    "asus",
    "nike",
    "adidas",
    "puma",
    "reebok",
    "levi",
    "calvin",
    "tommy",
    "microsoft",
    "google",
    "amazon",
    "netflix",
    "spotify",
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
