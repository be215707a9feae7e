//! SDFM CLI - drive the storefront stores from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the catalog
//! sdfm catalog add -i p1 -n "SDFM Hoodie" -p 89.99 --image /img/front.jpg --hover-image /img/back.jpg -s 10
//!
//! # Put one unit in the cart (stock is reserved via the delta queue)
//! sdfm cart add p1
//!
//! # Change a line's quantity / inspect the cart
//! sdfm cart set p1 3
//! sdfm cart show
//!
//! # Check out
//! sdfm checkout -n "Ada Lovelace" -e ada@example.com -a "12 Analytical Way" -c London --country "United Kingdom" -z "EC1A 1BB"
//!
//! # Mirror the hosted catalog into the local blobs (needs SDFM_SERVICE_*)
//! sdfm catalog pull
//! ```
//!
//! # Commands
//!
//! - `catalog` - List and mutate the product catalog
//! - `cart` - Stock-aware cart operations
//! - `wishlist` - Saved-for-later items
//! - `checkout` - Validate an order form and place the order

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sdfm")]
#[command(author, version, about = "SDFM storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and mutate the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Stock-aware cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Saved-for-later items
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Validate an order form and place the order
    Checkout {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Street address
        #[arg(short, long)]
        address: String,

        /// City
        #[arg(short, long)]
        city: String,

        /// Country (prefix-matched against the supported list)
        #[arg(long)]
        country: String,

        /// Zip / postal code
        #[arg(short, long)]
        zip_code: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the catalog
    List,
    /// Add a new product
    Add {
        /// Product id
        #[arg(short, long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 89.99
        #[arg(short, long)]
        price: String,

        /// Primary image reference
        #[arg(long)]
        image: String,

        /// Hover image reference
        #[arg(long)]
        hover_image: String,

        /// Initial stock count
        #[arg(short, long, default_value_t = 0)]
        stock: u32,
    },
    /// Remove a product by id
    Remove {
        /// Product id
        id: String,
    },
    /// Replace the local catalog with the hosted one
    Pull,
    /// Upsert every local product into the hosted catalog
    Push,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a line entirely
    Remove {
        /// Product id
        id: String,
    },
    /// Set a line's quantity (0 removes the line)
    Set {
        /// Product id
        id: String,
        /// New quantity
        quantity: u32,
    },
    /// Empty the cart (reserved stock is NOT returned)
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved items
    Show,
    /// Save a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a saved product
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the wishlist
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
            CatalogAction::Add {
                id,
                name,
                price,
                image,
                hover_image,
                stock,
            } => commands::catalog::add(&id, &name, &price, &image, &hover_image, stock)?,
            CatalogAction::Remove { id } => commands::catalog::remove(&id)?,
            CatalogAction::Pull => commands::catalog::pull().await?,
            CatalogAction::Push => commands::catalog::push().await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { id } => commands::cart::add(&id)?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Set { id, quantity } => commands::cart::set_quantity(&id, quantity)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show()?,
            WishlistAction::Add { id } => commands::wishlist::add(&id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&id)?,
            WishlistAction::Clear => commands::wishlist::clear()?,
        },
        Commands::Checkout {
            name,
            email,
            address,
            city,
            country,
            zip_code,
        } => commands::checkout::place(name, email, address, city, country, zip_code)?,
    }
    Ok(())
}
