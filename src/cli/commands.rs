use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pechintech", about = "Tech deals ranking and feed engine")]
pub struct Cli {
    /// JSON config file; environment variables override its values
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a deal
    Add {
        /// JSON with title, store, current_price, original_price and optional description, category, temperature, coupon_code, affiliate_url, image_url
        json: String,
    },
    /// Show one deal with its discount, badge and temperature
    Show { id: String },
    /// List deals sorted in memory
    List {
        /// hottest, newest or commented
        #[arg(long, default_value = "hottest")]
        sort: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        store: Option<String>,
        /// Text search on title and description
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Page through the public feed
    Feed {
        #[arg(long, default_value = "hottest")]
        sort: String,
        #[arg(long)]
        category: Option<String>,
        /// Overrides the configured page size
        #[arg(long)]
        page_size: Option<usize>,
        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: usize,
    },
    /// Vote a deal hot or cold
    Vote {
        id: String,
        /// hot or cold
        direction: String,
    },
    /// Add or remove a deal from favorites
    Favorite { id: String },
    /// List the signed-in user's favorites
    Favorites {
        #[arg(long, default_value = "hottest")]
        sort: String,
    },
    /// Comment on a deal
    Comment { id: String, text: String },
    /// List comments on a deal
    Comments { id: String },
    /// Copy a deal's coupon code
    Coupon { id: String },
    /// Product link and share message for a deal
    Share {
        id: String,
        #[arg(long, default_value = "whatsapp")]
        method: String,
    },
    /// Resolve the outbound store link for a deal
    Go { id: String },
    /// Draft a blog post with the content generator (admin only)
    Draft {
        title: String,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated keywords
        #[arg(long)]
        keywords: Option<String>,
        #[arg(long)]
        words: Option<u32>,
    },
}
