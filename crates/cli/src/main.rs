//! FloraLink CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Install the starter catalogue and accounts
//! floralink seed
//!
//! # Render a page through the router
//! floralink browse '#/category/Sympathy%20%26%20Funeral'
//!
//! # Log in and buy something
//! floralink auth login -e test@floralink.com -p test1234
//! floralink cart add <product-id> -q 2
//! floralink checkout -n "Juan Dela Cruz" --phone 09171234567 -a "Makati City" --gcash-screenshot receipt.png
//! ```
//!
//! # Commands
//!
//! - `seed` / `reset` - Manage the data file
//! - `browse` - Render a route
//! - `products`, `cart`, `auth`, `orders`, `checkout` - Storefront operations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use floralink_core::{Category, PaymentMethod, Price};
use floralink_storefront::{Storefront, StorefrontConfig};

mod commands;

const DEFAULT_LOG_FILTER: &str = "floralink_storefront=info,floralink_cli=info";

#[derive(Parser)]
#[command(name = "floralink")]
#[command(author, version, about = "FloraLink storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install seed data if the catalogue is empty
    Seed,
    /// Delete all storefront data
    Reset,
    /// Render the page for a hash fragment (e.g. `#/product/42`)
    Browse {
        /// Fragment to open, with or without the leading `#`
        fragment: String,
    },
    /// Manage the product catalogue
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign up, log in and out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Inspect and update orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Place an order for the current cart
    Checkout {
        /// Recipient's full name
        #[arg(short, long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Payment method (`card` or `gcash`)
        #[arg(short, long, default_value = "gcash")]
        method: PaymentMethod,

        /// Card number, required for card payments
        #[arg(long)]
        card_number: Option<String>,

        /// GCash payment screenshot file name, required for GCash payments
        #[arg(long)]
        gcash_screenshot: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Only products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured products
        #[arg(short, long)]
        featured: bool,
    },
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Create a product
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        price: Option<Price>,

        #[arg(short, long)]
        image_url: Option<String>,

        /// Category display name (e.g. "Wedding & Engagement")
        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        featured: bool,
    },
    /// Update fields of a product
    Update {
        /// Product ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        price: Option<Price>,

        #[arg(short, long)]
        image_url: Option<String>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        featured: Option<bool>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a product (zero or less removes it)
    Update {
        /// Product ID
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account and log in
    Signup {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Log in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders (all orders for admins, own orders otherwise)
    List,
    /// Show one order
    Show {
        /// Order ID
        id: String,
    },
    /// Set the status of an order (admin only)
    Status {
        /// Order ID
        id: String,

        /// New status (free-form, e.g. "confirmed", "delivered")
        status: String,
    },
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        commands::report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> floralink_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;

    // Seeding on open would make `seed` and `reset` meaningless.
    let open_config = match cli.command {
        Commands::Seed | Commands::Reset => StorefrontConfig {
            seed: false,
            ..config
        },
        _ => config,
    };
    let app = Storefront::open(&open_config)?;

    match cli.command {
        Commands::Seed => commands::store::seed(&app)?,
        Commands::Reset => commands::store::reset(&app),
        Commands::Browse { fragment } => commands::browse::browse(&app, &fragment),
        Commands::Products { action } => match action {
            ProductAction::List { category, featured } => {
                commands::products::list(&app, category.as_deref(), featured);
            }
            ProductAction::Show { id } => commands::products::show(&app, &id)?,
            ProductAction::Create {
                name,
                description,
                price,
                image_url,
                category,
                featured,
            } => commands::products::create(
                &app,
                floralink_storefront::models::NewProduct {
                    name,
                    description,
                    price,
                    image_url,
                    category,
                    featured,
                },
            )?,
            ProductAction::Update {
                id,
                name,
                description,
                price,
                image_url,
                category,
                featured,
            } => commands::products::update(
                &app,
                &id,
                floralink_storefront::models::ProductPatch {
                    name,
                    description,
                    price,
                    image_url,
                    category,
                    featured,
                },
            )?,
            ProductAction::Delete { id } => commands::products::delete(&app, &id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app),
            CartAction::Add { id, quantity } => commands::cart::add(&app, &id, quantity)?,
            CartAction::Update { id, quantity } => commands::cart::update(&app, &id, quantity),
            CartAction::Remove { id } => commands::cart::remove(&app, &id),
            CartAction::Clear => commands::cart::clear(&app),
        },
        Commands::Auth { action } => match action {
            AuthAction::Signup {
                name,
                email,
                password,
            } => commands::auth::signup(&app, &name, &email, &password)?,
            AuthAction::Login { email, password } => commands::auth::login(&app, &email, &password)?,
            AuthAction::Logout => commands::auth::logout(&app),
            AuthAction::Whoami => commands::auth::whoami(&app),
        },
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list(&app)?,
            OrderAction::Show { id } => commands::orders::show(&app, &id)?,
            OrderAction::Status { id, status } => commands::orders::set_status(&app, &id, &status)?,
        },
        Commands::Checkout {
            name,
            phone,
            address,
            method,
            card_number,
            gcash_screenshot,
        } => commands::checkout::place_order(
            &app,
            commands::checkout::CheckoutArgs {
                full_name: name,
                phone,
                delivery_address: address,
                method,
                card_number,
                gcash_screenshot,
            },
        )?,
    }
    Ok(())
}
