// region:    --- Imports
use anyhow::anyhow;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use connects_auction::auction::ledger::ConnectsLedger;
use connects_auction::auction::model::AuctionItem;
use connects_auction::bidding::commands::BidPlacer;
use connects_auction::client::ApiClient;
use connects_auction::config::ClientConfig;
use connects_auction::query::handlers;
use connects_auction::service::{HttpAuctionService, ItemFilter};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Cli
#[derive(Parser)]
#[command(name = "connects-auction", about = "Browse and bid on Connects auctions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Hot,
    Featured,
    EndingSoon,
}

impl From<FilterArg> for ItemFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ItemFilter::All,
            FilterArg::Hot => ItemFilter::Hot,
            FilterArg::Featured => ItemFilter::Featured,
            FilterArg::EndingSoon => ItemFilter::EndingSoon,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List auctions
    Items {
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
    },
    /// Show one auction and its bid history
    Item { id: String },
    /// Place a bid in Connects
    Bid { id: String, amount: i64 },
    /// Show the signed-in user
    Me,
    /// Compare the Connects balance with the transaction ledger
    Ledger,
    /// List won auctions
    Won,
    /// List categories
    Categories,
}

// endregion: --- Cli

// region:    --- Main
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    info!("{:<12} --> 원격 서비스: {}", "Main", client.base_url());
    let service = HttpAuctionService::new(client);

    match cli.command {
        Command::Items { filter } => {
            let items = match ItemFilter::from(filter) {
                ItemFilter::All => handlers::get_all_items(&service).await?,
                ItemFilter::Hot => handlers::get_hot_items(&service).await?,
                ItemFilter::Featured => handlers::get_featured_items(&service).await?,
                ItemFilter::EndingSoon => handlers::get_ending_soon_items(&service).await?,
            };
            for item in &items {
                print_item(item);
            }
        }
        Command::Item { id } => {
            let (item, bids) = handlers::get_item_with_bids(&service, &id).await?;
            print_item(&item);
            println!("  {}", item.description);
            println!("  next bid from {} Connects", item.minimum_next_bid());
            for bid in bids {
                println!(
                    "  {:>8} Connects  by {}  at {}",
                    bid.amount,
                    bid.user_id,
                    bid.created_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
        Command::Bid { id, amount } => {
            let mut placer = BidPlacer::new(service);
            if placer.place_bid_as_current_user(&id, amount).await {
                println!("Bid of {} Connects placed on {}", amount, id);
            } else {
                let message = placer.error().unwrap_or_default().to_string();
                error!("{:<12} --> 입찰 실패: {}", "Main", message);
                return Err(anyhow!(message));
            }
        }
        Command::Me => {
            let user = handlers::get_current_user(&service).await?;
            println!(
                "{} <{}>  balance: {} Connects  verified: {}",
                user.display_name.as_deref().unwrap_or(&user.id),
                user.email,
                user.connects_balance,
                user.is_verified
            );
        }
        Command::Ledger => {
            let (user, transactions) = tokio::try_join!(
                handlers::get_current_user(&service),
                handlers::get_transactions(&service)
            )?;
            let ledger = ConnectsLedger::from_transactions(&transactions);
            let result = ledger.reconcile(&user);
            println!(
                "stored: {}  ledger: {} ({} entries)  drift: {}",
                result.stored_balance,
                result.ledger_balance,
                ledger.len(),
                result.drift
            );
        }
        Command::Won => {
            for won in handlers::get_won_items(&service).await? {
                println!(
                    "{}  {} Connects  won {}",
                    won.auction_item_id,
                    won.winning_bid,
                    won.won_at.format("%Y-%m-%d")
                );
            }
        }
        Command::Categories => {
            for category in handlers::get_categories(&service).await? {
                println!("{:<24} {}", category.slug, category.name);
            }
        }
    }

    Ok(())
}
// endregion: --- Main

fn print_item(item: &AuctionItem) {
    let now = Utc::now();
    let remaining = item.time_remaining(now);
    let status = if item.has_ended(now) {
        "ended".to_string()
    } else {
        format!("{}h {}m left", remaining.num_hours(), remaining.num_minutes() % 60)
    };
    let mut flags = String::new();
    if item.is_hot {
        flags.push_str(" [hot]");
    }
    if item.is_featured {
        flags.push_str(" [featured]");
    }
    println!(
        "{:<12} {:<40} {:>8} Connects  {}{}",
        item.id, item.title, item.current_bid, status, flags
    );
}
