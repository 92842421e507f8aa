mod movie;
mod omdb;
mod page;

pub use movie::{LOCAL_USER_ID, Movie, Rating, UserRef, local_id, now_rfc3339};
pub use omdb::OmdbRecord;
pub use page::{Page, SortDirection, total_pages};
