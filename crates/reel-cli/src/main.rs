use reel_cache::{CacheStore, FileKv};
use reel_engine::{CatalogService, Session};
use reel_model::{Movie, Page, SortDirection, UserRef};
use reel_remote::{HttpRemote, RemoteConfig};

const USAGE: &str = "usage: reel <command>

commands:
  list [page] [size]          page through the catalog
  search <term> [page] [size] title search
  show <id>                   one movie with its ratings
  my [page] [size]            movies you have rated
  rate <id> <value> [comment] rate a movie (0.5 to 5)
  lookup <term>               search the metadata source (admin flow)
  import <imdb-id>            import a movie from metadata (admin)
  remove <id>                 delete a movie (admin)

environment:
  REEL_API_URL    backend base url, e.g. http://localhost:8080/api (required)
  REEL_CACHE_DIR  local cache directory (default: .reel-cache)
  REEL_TOKEN      bearer credential; omit to run local-only
  REEL_USER_ID    numeric id of the session user (with REEL_TOKEN)
  REEL_USERNAME   display name of the session user (with REEL_TOKEN)
  REEL_ADMIN      set to 1 for an admin session";

fn session_from_env() -> Session {
    let Some(token) = std::env::var("REEL_TOKEN").ok().filter(|t| !t.is_empty()) else {
        return Session::anonymous();
    };

    let id = std::env::var("REEL_USER_ID")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("REEL_USER_ID is required when REEL_TOKEN is set");
            std::process::exit(2);
        });
    let username = std::env::var("REEL_USERNAME").unwrap_or_else(|_| {
        eprintln!("REEL_USERNAME is required when REEL_TOKEN is set");
        std::process::exit(2);
    });
    let user = UserRef { id, username };

    if std::env::var("REEL_ADMIN").as_deref() == Ok("1") {
        Session::admin(user, token)
    } else {
        Session::user(user, token)
    }
}

fn print_page(page: &Page<Movie>) {
    for movie in &page.content {
        println!(
            "{:>12}  {:<9}  {}  ({}, {:.1}★ from {})",
            movie.id,
            movie.imdb_id,
            movie.title,
            movie.year,
            movie.average_rating,
            movie.ratings.len()
        );
    }
    println!(
        "page {}/{} — {} total",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    );
}

fn arg_or(args: &[String], idx: usize, default: usize) -> usize {
    args.get(idx).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn required(args: &[String], idx: usize, what: &str) -> String {
    args.get(idx).cloned().unwrap_or_else(|| {
        eprintln!("missing argument: {what}");
        std::process::exit(2);
    })
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let base_url = std::env::var("REEL_API_URL").unwrap_or_else(|_| {
        eprintln!("REEL_API_URL is required");
        std::process::exit(2);
    });
    let cache_dir =
        std::env::var("REEL_CACHE_DIR").unwrap_or_else(|_| ".reel-cache".to_string());

    let kv = FileKv::new(&cache_dir).unwrap_or_else(|e| {
        eprintln!("failed to open cache at {cache_dir}: {e}");
        std::process::exit(1);
    });
    let remote = HttpRemote::new(RemoteConfig::new(base_url));
    let service = CatalogService::new(remote, CacheStore::new(kv), session_from_env());

    let result = run(&service, command, &args);
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(
    service: &CatalogService<HttpRemote, FileKv>,
    command: &str,
    args: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        "list" => {
            let page = service.all_movies(
                arg_or(args, 1, 0),
                arg_or(args, 2, 10),
                "id",
                SortDirection::Asc,
            )?;
            print_page(&page);
        }
        "search" => {
            let term = required(args, 1, "search term");
            let page = service.search_movies(&term, arg_or(args, 2, 0), arg_or(args, 3, 10))?;
            print_page(&page);
        }
        "show" => {
            let id = required(args, 1, "movie id").parse()?;
            let movie = service.movie_by_id(id)?;
            println!("{} ({}) — {}", movie.title, movie.year, movie.imdb_id);
            println!("{}", movie.plot);
            for rating in &movie.ratings {
                let comment = rating.comment.as_deref().unwrap_or("");
                println!("  {:.1}★ by {} {}", rating.value, rating.user.username, comment);
            }
        }
        "my" => {
            let page = service.user_movies(arg_or(args, 1, 0), arg_or(args, 2, 10))?;
            print_page(&page);
        }
        "rate" => {
            let id = required(args, 1, "movie id").parse()?;
            let value = required(args, 2, "rating value").parse()?;
            let rating = service.rate(id, value, args.get(3).map(String::as_str))?;
            println!("rated as {}: {:.1}★", rating.user.username, rating.value);
        }
        "lookup" => {
            let term = required(args, 1, "search term");
            for record in service.metadata_search(&term, 1)? {
                println!("{:<10}  {}  ({})", record.imdb_id, record.title, record.year);
            }
        }
        "import" => {
            let imdb_id = required(args, 1, "imdb id");
            let movie = service.import_movie(&imdb_id)?;
            println!("imported {} as id {}", movie.title, movie.id);
        }
        "remove" => {
            let id = required(args, 1, "movie id").parse()?;
            service.remove_movie(id)?;
            println!("removed movie {id}");
        }
        other => {
            eprintln!("unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
    Ok(())
}
