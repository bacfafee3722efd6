pub mod details;
pub mod format;
pub mod media;
pub mod watchlist;

pub use details::{MovieDetails, MovieLookup, ProviderRating};
pub use format::{format_rating, format_runtime, split_genres, RatingFormat};
pub use media::{MediaType, MergedPage, SearchResponse, SearchResult};
pub use watchlist::WatchlistEntry;
