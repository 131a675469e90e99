//! Shopfront CLI - browse, fill a cart, check out and manage an account
//! against a storefront backend.
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! shop products list --keyword phone
//!
//! # Fill the cart and check out
//! shop cart add 2 --qty 1
//! shop cart shipping --address "1 Main St" --city Springfield --postal-code 12345 --country US
//! shop cart payment PayPal
//! SHOPFRONT_PASSWORD=secret shop user login ann@example.com
//! shop orders place
//! ```
//!
//! # State
//!
//! The cart, checkout choices and session are kept in
//! `$SHOPFRONT_STATE_DIR/storage.json` between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_storefront::{ClientConfig, Store};

mod commands;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shopfront storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and review products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the cart and checkout choices
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place and track orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Sign in, register and manage the account
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Print the built-in sample catalog
    Catalog {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products, optionally filtered by keyword
    List {
        #[arg(short, long)]
        keyword: Option<String>,

        #[arg(short, long)]
        page: Option<u32>,
    },
    /// Show a product with its reviews
    Show { id: i32 },
    /// Review a product (requires sign-in)
    Review {
        id: i32,

        /// Rating from 1 to 5
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        #[arg(short, long, default_value = "")]
        comment: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and prices
    Show,
    /// Add a product, replacing any existing line for it
    Add {
        id: i32,

        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product
    Remove { id: i32 },
    /// Save the shipping address
    Shipping {
        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        postal_code: String,

        #[arg(long)]
        country: String,
    },
    /// Save the payment method
    Payment { method: String },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order for the cart contents
    Place,
    /// Show an order
    Show { id: i32 },
    /// List your orders
    Mine,
    /// Record a payment for an order
    Pay {
        id: i32,

        /// Payment provider transaction ID (generated if omitted)
        #[arg(long)]
        transaction_id: Option<String>,

        #[arg(long)]
        payer_email: Option<String>,
    },
    /// Mark an order delivered (staff only)
    Deliver { id: i32 },
}

#[derive(Subcommand)]
enum UserAction {
    /// Sign in
    Login {
        email: String,

        #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        name: String,

        email: String,

        #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show your profile
    Profile,
    /// Update your profile
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ClientConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let config = ClientConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_storefront=info,shopfront_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        // The catalog is static; it needs no store
        Commands::Catalog { format } => commands::catalog::print(format)?,
        Commands::Products { action } => {
            let store = Store::open(config)?;
            match action {
                ProductAction::List { keyword, page } => {
                    commands::products::list(&store, keyword, page).await?;
                }
                ProductAction::Show { id } => commands::products::show(&store, id).await?,
                ProductAction::Review {
                    id,
                    rating,
                    comment,
                } => commands::products::review(&store, id, rating, comment).await?,
            }
        }
        Commands::Cart { action } => {
            let store = Store::open(config)?;
            match action {
                CartAction::Show => commands::cart::show(&store)?,
                CartAction::Add { id, qty } => commands::cart::add(&store, id, qty).await?,
                CartAction::Remove { id } => commands::cart::remove(&store, id)?,
                CartAction::Shipping {
                    address,
                    city,
                    postal_code,
                    country,
                } => commands::cart::shipping(&store, address, city, postal_code, country)?,
                CartAction::Payment { method } => commands::cart::payment(&store, method)?,
            }
        }
        Commands::Orders { action } => {
            let store = Store::open(config)?;
            match action {
                OrderAction::Place => commands::orders::place(&store).await?,
                OrderAction::Show { id } => commands::orders::show(&store, id).await?,
                OrderAction::Mine => commands::orders::mine(&store).await?,
                OrderAction::Pay {
                    id,
                    transaction_id,
                    payer_email,
                } => commands::orders::pay(&store, id, transaction_id, payer_email).await?,
                OrderAction::Deliver { id } => commands::orders::deliver(&store, id).await?,
            }
        }
        Commands::User { action } => {
            let store = Store::open(config)?;
            match action {
                UserAction::Login { email, password } => {
                    commands::user::login(&store, email, password).await?;
                }
                UserAction::Register {
                    name,
                    email,
                    password,
                } => commands::user::register(&store, name, email, password).await?,
                UserAction::Logout => commands::user::logout(&store)?,
                UserAction::Profile => commands::user::profile(&store).await?,
                UserAction::Update {
                    name,
                    email,
                    password,
                } => commands::user::update(&store, name, email, password).await?,
            }
        }
    }

    Ok(())
}
