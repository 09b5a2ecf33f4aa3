pub mod movie;

pub use movie::{MovieListResponse, MovieListing, PopularPage, SummaryMovie};
