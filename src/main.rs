use clap::Parser;
use pechintech::application::add_deal::NewDeal;
use pechintech::cli::commands::{Cli, Commands};
use pechintech::config::AppConfig;
use pechintech::domain::entities::blog_post::PostBrief;
use pechintech::domain::entities::deal::DealView;
use pechintech::domain::feed::{FeedFilter, FeedSession, MergeOutcome};
use pechintech::domain::ports::deal_repository::DealQuery;
use pechintech::domain::values::category::DealCategory;
use pechintech::domain::values::sort_key::SortKey;
use pechintech::domain::values::vote_direction::VoteDirection;
use pechintech::PechinTech;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    let app = match PechinTech::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing PechinTech: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_category(raw: Option<String>) -> Result<Option<DealCategory>, String> {
    raw.map(|c| c.parse()).transpose()
}

#[derive(Serialize)]
struct FeedOutput {
    state: String,
    generation: u64,
    page_size: usize,
    next_cursor: Option<String>,
    last_error: Option<String>,
    outcomes: Vec<MergeOutcome>,
    items: Vec<DealView>,
}

async fn run_command(app: PechinTech, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { json } => {
            let input: NewDeal = serde_json::from_str(&json)?;
            let deal = app.add_deal(input)?;
            print_json(&app.views(&[deal]))?;
        }
        Commands::Show { id } => {
            print_json(&app.show(&id)?)?;
        }
        Commands::List {
            sort,
            category,
            store,
            search,
            limit,
        } => {
            let sort: SortKey = sort.parse()?;
            let query = DealQuery {
                category: parse_category(category)?,
                store,
                text: search,
                limit,
            };
            print_json(&app.list(&query, sort)?)?;
        }
        Commands::Feed {
            sort,
            category,
            page_size,
            pages,
        } => {
            let filter = FeedFilter {
                category: parse_category(category)?,
                sort: sort.parse()?,
            };
            let mut session = match page_size {
                Some(size) if size > 0 => FeedSession::new(filter, size),
                Some(_) => return Err("page size must be at least 1".into()),
                None => app.open_feed(filter),
            };
            let outcomes = app.load_pages(&mut session, pages);
            print_json(&FeedOutput {
                state: session.state().to_string(),
                generation: session.generation(),
                page_size: session.page_size(),
                next_cursor: session.cursor().map(|c| c.to_string()),
                last_error: session.last_error().map(String::from),
                outcomes,
                items: app.views(session.items()),
            })?;
        }
        Commands::Vote { id, direction } => {
            let direction: VoteDirection = direction.parse()?;
            let deal = app.vote(&id, direction)?;
            print_json(&app.views(&[deal]))?;
        }
        Commands::Favorite { id } => {
            let added = app.toggle_favorite(&id)?;
            print_json(&serde_json::json!({ "deal_id": id, "favorite": added }))?;
        }
        Commands::Favorites { sort } => {
            print_json(&app.favorites(sort.parse()?)?)?;
        }
        Commands::Comment { id, text } => {
            print_json(&app.comment(&id, &text)?)?;
        }
        Commands::Comments { id } => {
            print_json(&app.comments(&id)?)?;
        }
        Commands::Coupon { id } => {
            let coupon = app.copy_coupon(&id)?;
            print_json(&serde_json::json!({ "deal_id": id, "coupon": coupon }))?;
        }
        Commands::Share { id, method } => {
            print_json(&app.share(&id, &method)?)?;
        }
        Commands::Go { id } => {
            print_json(&app.promo_click(&id)?)?;
        }
        Commands::Draft {
            title,
            topic,
            description,
            keywords,
            words,
        } => {
            let brief = PostBrief {
                title,
                topic,
                description,
                keywords: keywords
                    .map(|k| {
                        k.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
                word_count: words,
            };
            print_json(&app.draft_post(&brief).await?)?;
        }
    }
    Ok(())
}
