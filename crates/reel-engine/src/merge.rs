use std::collections::HashSet;

use reel_model::{Movie, OmdbRecord, Page};

/// Append `extras` to a remote page, skipping entries whose external
/// identifier is already present, and bump `total_elements` by the
/// appended count. Everything else on the page is left as the remote
/// reported it — merged content may exceed the nominal page size.
///
/// Returns how many entries were appended.
pub(crate) fn append_unseen(page: &mut Page<Movie>, extras: Vec<Movie>) -> usize {
    let mut seen: HashSet<String> = page.content.iter().map(|m| m.imdb_id.clone()).collect();
    let mut appended = 0;
    for movie in extras {
        if seen.insert(movie.imdb_id.clone()) {
            page.content.push(movie);
            appended += 1;
        }
    }
    page.total_elements += appended;
    appended
}

/// Case-insensitive substring match on the title.
pub(crate) fn title_matches(movie: &Movie, term: &str) -> bool {
    movie.title.to_lowercase().contains(&term.to_lowercase())
}

/// Move the first result whose title contains `term` (case-insensitive)
/// to the front. The only reordering rule in the system; applied to
/// external metadata search results only.
pub(crate) fn promote_title_match(results: &mut Vec<OmdbRecord>, term: &str) {
    let term = term.to_lowercase();
    let pos = results
        .iter()
        .position(|r| r.title.to_lowercase().contains(&term));
    if let Some(pos) = pos {
        if pos > 0 {
            let hit = results.remove(pos);
            results.insert(0, hit);
        }
    }
}
