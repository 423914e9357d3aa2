use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use bookstore::config::{BackendKind, Config, DEFAULT_CONFIG_PATH, grab_config};
use bookstore::render::{
    Category, ListAction, format_price, outcome_message, render_books, render_category,
};
use bookstore::seed::default_catalog;
use bookstore::storage::memstore::MemoryBackend;
#[cfg(feature = "redb")]
use bookstore::storage::redbstore::RedbBackend;
use bookstore::types::{BookId, BookIdSet, ShippingInfo, Username};
use bookstore::{StorageBackend, StoreContext};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, error, warn};

/// Bookstore catalog and account state.
#[derive(Parser, Debug)]
#[command(name = "bookstore", version, about = "Browse books and manage a shopper's account")]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List books, optionally only one genre ("all" lists everything)
    Books { genre: Option<String> },
    /// List the genres present in the catalog
    Genres,
    Register { username: String, password: String },
    Login { username: String, password: String },
    Logout,
    /// Show who is logged in
    Whoami,
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    Fav {
        #[command(subcommand)]
        action: IdCommand,
    },
    Purchased {
        #[command(subcommand)]
        action: IdCommand,
    },
    Points {
        #[command(subcommand)]
        action: PointsCommand,
    },
    Shipping {
        #[command(subcommand)]
        action: ShippingCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CartCommand {
    Add { book_id: String },
    Remove { book_id: String },
    Clear,
    Show,
}

#[derive(Subcommand, Debug)]
enum IdCommand {
    Add { book_id: String },
    Remove { book_id: String },
    Show,
}

#[derive(Subcommand, Debug)]
enum PointsCommand {
    /// Credit points (negative values deduct)
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    Use { amount: u64 },
    Show,
}

#[derive(Subcommand, Debug)]
enum ShippingCommand {
    Set {
        name: String,
        address: String,
        city: String,
        zipcode: String,
        phone: String,
    },
    Show,
}

type CliResult = Result<(), Box<dyn Error>>;

fn init_tracing(config: &Config) {
    let level = config.log.level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match grab_config(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let result = match config.storage.backend {
        BackendKind::Memory => {
            warn!("Using in-memory storage; nothing survives this process");
            run(StoreContext::new(MemoryBackend::new()), &config, cli.command)
        }
        BackendKind::Redb => open_redb(&config)
            .and_then(|backend| run(StoreContext::new(backend), &config, cli.command)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "redb")]
fn open_redb(config: &Config) -> Result<RedbBackend, Box<dyn Error>> {
    Ok(RedbBackend::open(&config.storage.path)?)
}

#[cfg(not(feature = "redb"))]
fn open_redb(_config: &Config) -> Result<MemoryBackend, Box<dyn Error>> {
    Err("this build has no redb support; set storage.backend = \"memory\"".into())
}

fn run<B: StorageBackend>(ctx: StoreContext<B>, config: &Config, command: Command) -> CliResult {
    if config.catalog.seed {
        ctx.catalog().seed_if_empty(&default_catalog())?;
    }
    debug!(?command, "Running command");

    match command {
        Command::Books { genre } => {
            let catalog = ctx.catalog().all()?;
            let category = match genre {
                Some(genre) => genre.parse::<Category>()?,
                None => Category::All,
            };
            print!("{}", render_category(&catalog, &category));
        }
        Command::Genres => {
            for genre in ctx.catalog().genres()? {
                println!("{genre}");
            }
        }
        Command::Register { username, password } => {
            ctx.users()
                .register(Username(username.clone()), password.as_str().into())?;
            println!("Registered {username}");
        }
        Command::Login { username, password } => {
            ctx.session().login(&Username(username.clone()), &password)?;
            println!("Logged in as {username}");
        }
        Command::Logout => {
            ctx.session().logout()?;
            println!("Logged out");
        }
        Command::Whoami => match ctx.session().current_user()? {
            Some(user) => println!("{}", user.username),
            None => println!("Not logged in"),
        },
        Command::Cart { action } => match action {
            CartCommand::Add { book_id } => {
                add_with_message(&ctx, ListAction::Cart, BookId(book_id))?
            }
            CartCommand::Remove { book_id } => {
                ctx.account().remove_from_cart(&BookId(book_id))?
            }
            CartCommand::Clear => ctx.account().clear_cart()?,
            CartCommand::Show => show_ids(&ctx, ctx.account().cart()?)?,
        },
        Command::Fav { action } => match action {
            IdCommand::Add { book_id } => {
                add_with_message(&ctx, ListAction::Favorites, BookId(book_id))?
            }
            IdCommand::Remove { book_id } => {
                ctx.account().remove_from_favorites(&BookId(book_id))?
            }
            IdCommand::Show => show_ids(&ctx, ctx.account().favorites()?)?,
        },
        Command::Purchased { action } => match action {
            IdCommand::Add { book_id } => ctx.account().add_to_purchased(BookId(book_id))?,
            IdCommand::Remove { book_id } => {
                ctx.account().remove_from_purchased(&BookId(book_id))?
            }
            IdCommand::Show => show_ids(&ctx, ctx.account().purchased()?)?,
        },
        Command::Points { action } => match action {
            PointsCommand::Add { amount } => {
                println!("{}", ctx.account().add_points(amount)?)
            }
            PointsCommand::Use { amount } => {
                println!("{}", ctx.account().use_points(amount)?)
            }
            PointsCommand::Show => println!("{}", ctx.account().points()?),
        },
        Command::Shipping { action } => match action {
            ShippingCommand::Set {
                name,
                address,
                city,
                zipcode,
                phone,
            } => ctx.account().save_shipping_data(ShippingInfo {
                name,
                address,
                city,
                zipcode,
                phone,
            })?,
            ShippingCommand::Show => match ctx.account().shipping_data()? {
                Some(info) => {
                    println!("{}", info.name);
                    println!("{}", info.address);
                    println!("{} {}", info.zipcode, info.city);
                    println!("{}", info.phone);
                }
                None => println!("No shipping data"),
            },
        },
    }
    Ok(())
}

/// Adds a catalog book to the cart or favorites and prints the listing
/// message for the outcome.
fn add_with_message<B: StorageBackend>(
    ctx: &StoreContext<B>,
    action: ListAction,
    book_id: BookId,
) -> CliResult {
    let Some(book) = ctx.catalog().by_id(&book_id)? else {
        return Err(format!("No book with id {book_id}").into());
    };
    let outcome = match action {
        ListAction::Cart => ctx.account().add_to_cart(book_id),
        ListAction::Favorites => ctx.account().add_to_favorites(book_id),
    };
    println!("{}", outcome_message(action, &book, &outcome));
    outcome.map_err(Into::into)
}

fn show_ids<B: StorageBackend>(ctx: &StoreContext<B>, ids: BookIdSet) -> CliResult {
    if ids.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    let catalog = ctx.catalog();
    let mut books = Vec::new();
    let mut total = 0.0;
    for id in ids.iter() {
        match catalog.by_id(id)? {
            Some(book) => {
                total += book.price;
                books.push(book);
            }
            None => println!("[{id}] (not in catalog)"),
        }
    }
    print!("{}", render_books(&books));
    println!("Total: {}", format_price(total));
    Ok(())
}
