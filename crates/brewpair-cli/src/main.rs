//! Brewpair CLI - coffee and pastry pairing demo for the Sweet Spot shop

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use brewpair_analytics::{
    events_to_csv, events_to_json, load_mirrored, AnalyticsLog, EventDraft, EventKind,
};
use brewpair_catalog::{coffees, insights, pastries, Coffee, Menu, NewPastry, ShopInfo};
use brewpair_llm::{PairingEngine, PairingResult, RequestTracker};
use brewpair_store::RedbStore;
use brewpair_sync::{spawn_upsert_pastry, spawn_upsert_shop, SyncClient};

const STORE_PATH: &str = ".brewpair/session.redb";

#[derive(Parser)]
#[command(name = "brewpair")]
#[command(about = "AI-assisted coffee and pastry pairing demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the coffee lineup and the active pastry menu
    Menu,
    /// Request pastry pairings for a coffee
    Pair {
        /// Coffee id (see `menu`)
        coffee: String,
        /// Pairing style: balanced, contrast or complement
        #[arg(short, long, default_value = "balanced")]
        style: String,
        /// Free-text description of the coffee
        #[arg(short, long)]
        note: Option<String>,
        /// Print raw JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Export the mirrored analytics events from the last session
    Events {
        /// Output format: json or csv
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Interactive shop session
    Repl,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Menu => cmd_menu(),
        Commands::Pair {
            coffee,
            style,
            note,
            json,
        } => cmd_pair(&coffee, &style, note, json).await,
        Commands::Events { format, output } => cmd_events(&format, output),
        Commands::Repl => cmd_repl().await,
    }
}

/// Session-scoped event log; falls back to an in-memory log when the
/// store cannot be opened
fn open_log() -> AnalyticsLog {
    match RedbStore::new(STORE_PATH) {
        Ok(store) => AnalyticsLog::with_store(Box::new(store)),
        Err(err) => {
            warn!("session store unavailable, events stay in memory: {err}");
            AnalyticsLog::in_memory()
        }
    }
}

fn cmd_menu() {
    let menu = Menu::new(pastries());

    println!("Coffees:");
    for coffee in coffees() {
        println!("  {:<34} {}", coffee.id, coffee.name);
    }
    println!();
    println!("Pastries:");
    for pastry in menu.active() {
        println!(
            "  {:<18} {} ({:.2} {})",
            pastry.id, pastry.name, pastry.price, pastry.currency
        );
    }
}

async fn cmd_pair(coffee_id: &str, style: &str, note: Option<String>, json: bool) {
    let catalog = coffees();
    let coffee = match catalog.iter().find(|c| c.id == coffee_id) {
        Some(coffee) => coffee,
        None => {
            eprintln!("Unknown coffee: {} (try `brewpair menu`)", coffee_id);
            std::process::exit(1);
        }
    };

    let menu = Menu::new(pastries());
    let active = menu.active();

    let log = Arc::new(open_log());
    let engine = PairingEngine::from_env(log.clone());

    record_request(&log, coffee, style, note.as_deref());
    let context = pairing_context(style, note.as_deref());
    let results = engine.get_pairings(coffee, &active, Some(&context)).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).unwrap_or_default()
        );
    } else {
        render_pairings(coffee, &results);
    }
}

fn cmd_events(format: &str, output: Option<PathBuf>) {
    let store = match RedbStore::new(STORE_PATH) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error opening session store: {}", err);
            std::process::exit(1);
        }
    };

    let events = load_mirrored(&store);
    let rendered = match format {
        "json" => events_to_json(&events),
        "csv" => events_to_csv(&events),
        other => {
            eprintln!("Unknown format: {} (expected json or csv)", other);
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, rendered) {
                eprintln!("Error writing {}: {}", path.display(), err);
                std::process::exit(1);
            }
            println!("Wrote {} events to {}", events.len(), path.display());
        }
        None => println!("{}", rendered),
    }
}

/// Map a pairing style plus an optional free-text note onto the
/// context sentence handed to the pairing engine
fn pairing_context(style: &str, note: Option<&str>) -> String {
    let style_line = match style {
        "contrast" => "Prefer contrast pairings (brightness against richness).",
        "complement" => "Prefer complementary pairings (matching sweetness/texture).",
        _ => "Balanced pairing between coffee and pastry.",
    };
    match note.map(str::trim).filter(|n| !n.is_empty()) {
        Some(note) => format!("{} User described coffee as: {}", style_line, note),
        None => style_line.to_string(),
    }
}

fn record_request(log: &AnalyticsLog, coffee: &Coffee, style: &str, note: Option<&str>) {
    let mut metadata = BTreeMap::new();
    metadata.insert("style".to_string(), style.to_string());
    if let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) {
        metadata.insert("freeTextCoffee".to_string(), note.to_string());
    }
    log.record(EventDraft {
        coffee_id: Some(coffee.id.clone()),
        metadata,
        ..EventDraft::new(EventKind::PairingsRequested)
    });
}

fn render_pairings(coffee: &Coffee, results: &[PairingResult]) {
    if results.is_empty() {
        println!("No pairings available for this menu.");
        return;
    }

    println!("Pairings for {}:", coffee.name);
    for (index, result) in results.iter().enumerate() {
        let insight = insights(coffee, &result.pastry);
        println!();
        println!(
            "{}. {} ({:.2} {})",
            index + 1,
            result.pastry.name,
            result.pastry.price,
            result.pastry.currency
        );
        println!("   {}", result.reason);
        if !insight.matches.is_empty() {
            println!("   matches: {}", insight.matches.join(", "));
        }
        if !insight.complements.is_empty() {
            println!("   complements: {}", insight.complements.join(", "));
        }
    }
}

/// One cart line: a pastry and how many of it
struct CartItem {
    pastry_id: String,
    quantity: u32,
}

/// Everything a live shop session keeps between commands
struct Session {
    menu: Menu,
    shop: ShopInfo,
    selected: Option<Coffee>,
    style: String,
    note: Option<String>,
    cart: Vec<CartItem>,
    last_results: Vec<PairingResult>,
    log: Arc<AnalyticsLog>,
    engine: PairingEngine,
    tracker: RequestTracker,
    sync: Option<Arc<SyncClient>>,
}

impl Session {
    fn new() -> Self {
        let log = Arc::new(open_log());
        let engine = PairingEngine::from_env(log.clone());
        Self {
            menu: Menu::new(pastries()),
            shop: ShopInfo::default(),
            selected: None,
            style: "balanced".to_string(),
            note: None,
            cart: Vec::new(),
            last_results: Vec::new(),
            log,
            engine,
            tracker: RequestTracker::new(),
            sync: SyncClient::from_env().map(Arc::new),
        }
    }

    fn cart_total(&self) -> f64 {
        self.cart
            .iter()
            .filter_map(|item| {
                self.menu
                    .find(&item.pastry_id)
                    .map(|p| p.price * item.quantity as f64)
            })
            .sum()
    }
}

async fn cmd_repl() {
    use rustyline::DefaultEditor;

    let mut session = Session::new();

    println!("Brewpair shop session - {}", session.shop.name);
    if !session.engine.has_credential() {
        println!("(no OPENAI_API_KEY set, pairings use the standard suggestions)");
    }
    println!("Type help for commands, quit to exit");
    println!();

    let mut rl = DefaultEditor::new().expect("Failed to create REPL");

    loop {
        let readline = rl.readline("brewpair> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if matches!(trimmed, "quit" | "exit" | "q") {
                    break;
                }
                repl_dispatch(&mut session, trimmed).await;
            }
            Err(_) => break,
        }
    }

    println!("Goodbye!");
}

async fn repl_dispatch(session: &mut Session, line: &str) {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "help" | "h" => repl_help(),
        "menu" => repl_menu(session),
        "select" => repl_select(session, rest),
        "qr" => repl_qr(session),
        "style" => repl_style(session, rest),
        "note" => repl_note(session, rest),
        "pair" => repl_pair(session).await,
        "click" => repl_click(session, rest),
        "add" => repl_add_to_cart(session, rest),
        "remove" => repl_remove(session, rest),
        "cart" => repl_cart(session),
        "checkout" => repl_checkout(session),
        "admin" => repl_admin(session, rest),
        "events" => repl_events(session),
        "export" => repl_export(session, rest),
        _ => println!("Unknown command. Type help for help."),
    }
}

fn repl_help() {
    println!("Commands:");
    println!("  menu                 - Show coffees and the active pastry menu");
    println!("  select <coffee-id>   - Pick the coffee to pair");
    println!("  qr                   - Simulate scanning the house blend QR code");
    println!("  style <s>            - Pairing style: balanced, contrast, complement");
    println!("  note [text]          - Describe the coffee in your own words (empty clears)");
    println!("  pair                 - Request pairings for the selected coffee");
    println!("  click <pastry-id>    - Open a suggested pastry");
    println!("  add <pastry-id>      - Add a pastry to the cart");
    println!("  remove <pastry-id>   - Remove a pastry from the cart");
    println!("  cart                 - Show the cart");
    println!("  checkout             - Confirm the order");
    println!("  admin add <name>;<origin>;<price>;<description>;<category>");
    println!("  admin toggle <pastry-id>");
    println!("  admin shop <name>");
    println!("  events               - Show the session event tail");
    println!("  export <json|csv> [path]");
    println!("  quit                 - Exit");
}

fn repl_menu(session: &Session) {
    println!("Coffees:");
    for coffee in coffees() {
        let marker = match &session.selected {
            Some(selected) if selected.id == coffee.id => "*",
            _ => " ",
        };
        println!("  {} {:<34} {}", marker, coffee.id, coffee.name);
    }
    println!();
    println!("Pastries:");
    for pastry in session.menu.all() {
        let state = if session.menu.is_active(&pastry.id) {
            "on menu"
        } else {
            "hidden"
        };
        println!(
            "  {:<18} {} ({:.2} {}) [{}]",
            pastry.id, pastry.name, pastry.price, pastry.currency, state
        );
    }
}

fn repl_select(session: &mut Session, id: &str) {
    match coffees().into_iter().find(|c| c.id == id) {
        Some(coffee) => {
            session.log.record(EventDraft {
                coffee_id: Some(coffee.id.clone()),
                ..EventDraft::new(EventKind::CoffeeSelected)
            });
            println!("Selected {}", coffee.name);
            session.selected = Some(coffee);
        }
        None => println!("Unknown coffee: {} (see `menu`)", id),
    }
}

fn repl_qr(session: &mut Session) {
    if let Some(coffee) = coffees().into_iter().find(|c| c.id == "sweetspot-standard") {
        session.log.record(EventDraft {
            coffee_id: Some(coffee.id.clone()),
            ..EventDraft::new(EventKind::CoffeeSelected)
        });
        session.note = Some("Scanned QR: Sweetspot Standard".to_string());
        println!("Scanned QR for {}", coffee.name);
        session.selected = Some(coffee);
    }
}

fn repl_style(session: &mut Session, style: &str) {
    match style {
        "balanced" | "contrast" | "complement" => {
            session.style = style.to_string();
            println!("Pairing style: {}", style);
        }
        _ => println!("Style must be balanced, contrast or complement"),
    }
}

fn repl_note(session: &mut Session, text: &str) {
    if text.is_empty() {
        session.note = None;
        println!("Note cleared");
        return;
    }
    session.note = Some(text.to_string());
    let mut metadata = BTreeMap::new();
    metadata.insert("freeText".to_string(), text.to_string());
    session.log.record(EventDraft {
        coffee_id: session.selected.as_ref().map(|c| c.id.clone()),
        metadata,
        ..EventDraft::new(EventKind::CoffeeSelected)
    });
    println!("Noted.");
}

async fn repl_pair(session: &mut Session) {
    let Some(coffee) = session.selected.clone() else {
        println!("Pick a coffee first (`select <coffee-id>`)");
        return;
    };
    let active = session.menu.active();
    if active.is_empty() {
        println!("No pastries are active. Toggle items on in the admin panel.");
        return;
    }

    record_request(&session.log, &coffee, &session.style, session.note.as_deref());
    let context = pairing_context(&session.style, session.note.as_deref());

    let generation = session.tracker.begin();
    let results = session
        .engine
        .get_pairings(&coffee, &active, Some(&context))
        .await;
    // a newer request may have superseded this one while it was in flight
    if !session.tracker.is_current(generation) {
        return;
    }

    render_pairings(&coffee, &results);
    session.last_results = results;
}

fn repl_click(session: &Session, pastry_id: &str) {
    let Some(coffee) = &session.selected else {
        println!("Pick a coffee first (`select <coffee-id>`)");
        return;
    };
    let Some(pastry) = session.menu.find(pastry_id) else {
        println!("Unknown pastry: {}", pastry_id);
        return;
    };
    let suggested = session
        .last_results
        .iter()
        .any(|r| r.pastry.id == pastry.id);
    let mut metadata = BTreeMap::new();
    metadata.insert("suggested".to_string(), suggested.to_string());
    session.log.record(EventDraft {
        coffee_id: Some(coffee.id.clone()),
        pastry_id: Some(pastry.id.clone()),
        metadata,
        ..EventDraft::new(EventKind::PastryClicked)
    });
    println!("{} - {}", pastry.name, pastry.description);
    println!("  origin: {}", pastry.origin);
    println!("  notes: {}", pastry.tasting_notes.join(", "));
    let insight = insights(coffee, pastry);
    if !insight.matches.is_empty() {
        println!("  matches: {}", insight.matches.join(", "));
    }
}

fn repl_add_to_cart(session: &mut Session, pastry_id: &str) {
    let Some(coffee) = session.selected.clone() else {
        println!("Pick a coffee first (`select <coffee-id>`)");
        return;
    };
    let Some(pastry) = session.menu.find(pastry_id).cloned() else {
        println!("Unknown pastry: {}", pastry_id);
        return;
    };

    match session
        .cart
        .iter_mut()
        .find(|item| item.pastry_id == pastry.id)
    {
        Some(item) => item.quantity += 1,
        None => session.cart.push(CartItem {
            pastry_id: pastry.id.clone(),
            quantity: 1,
        }),
    }
    session.log.record(EventDraft {
        coffee_id: Some(coffee.id),
        pastry_id: Some(pastry.id),
        ..EventDraft::new(EventKind::AddToCart)
    });
    println!("Added {} ({:.2} EUR total)", pastry.name, session.cart_total());
}

fn repl_remove(session: &mut Session, pastry_id: &str) {
    let before = session.cart.len();
    session.cart.retain(|item| item.pastry_id != pastry_id);
    if session.cart.len() == before {
        println!("{} is not in the cart", pastry_id);
    } else {
        println!("Removed {}", pastry_id);
    }
}

fn repl_cart(session: &Session) {
    if session.cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in &session.cart {
        if let Some(pastry) = session.menu.find(&item.pastry_id) {
            println!(
                "  {} x {} ({:.2} {})",
                item.quantity, pastry.name, pastry.price, pastry.currency
            );
        }
    }
    println!("Total {:.2} EUR", session.cart_total());
}

fn repl_checkout(session: &mut Session) {
    let Some(coffee) = &session.selected else {
        println!("Pick a coffee first (`select <coffee-id>`)");
        return;
    };
    if session.cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    let pastry_ids: Vec<String> = session
        .cart
        .iter()
        .map(|item| item.pastry_id.clone())
        .collect();
    session.log.record(EventDraft {
        coffee_id: Some(coffee.id.clone()),
        pastry_ids,
        ..EventDraft::new(EventKind::Checkout)
    });

    let summary = session
        .cart
        .iter()
        .filter_map(|item| {
            session
                .menu
                .find(&item.pastry_id)
                .map(|p| format!("{} x {}", item.quantity, p.name))
        })
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Order confirmed for {}. Items: {}. Total {:.2} EUR.",
        session.shop.name,
        summary,
        session.cart_total()
    );
    session.cart.clear();
}

fn repl_admin(session: &mut Session, rest: &str) {
    let (action, args) = match rest.split_once(' ') {
        Some((action, args)) => (action, args.trim()),
        None => (rest, ""),
    };

    match action {
        "add" => {
            let parts: Vec<&str> = args.split(';').map(str::trim).collect();
            if parts.len() < 3 {
                println!("Usage: admin add <name>;<origin>;<price>;<description>;<category>");
                return;
            }
            let price: f64 = match parts[2].parse() {
                Ok(price) => price,
                Err(_) => {
                    println!("Price must be a number, got {:?}", parts[2]);
                    return;
                }
            };
            let new = NewPastry {
                name: parts[0].to_string(),
                origin: non_empty(parts.get(1)),
                price,
                description: non_empty(parts.get(3)),
                category: non_empty(parts.get(4)),
            };
            match session.menu.add(new) {
                Some(id) => {
                    println!("Added {} to the menu", id);
                    if let (Some(sync), Some(pastry)) =
                        (&session.sync, session.menu.find(&id).cloned())
                    {
                        spawn_upsert_pastry(sync.clone(), pastry);
                    }
                }
                None => println!("A pastry needs a name and a positive price"),
            }
        }
        "toggle" => {
            if session.menu.find(args).is_none() {
                println!("Unknown pastry: {}", args);
                return;
            }
            let active = session.menu.toggle(args);
            println!("{} is now {}", args, if active { "on menu" } else { "hidden" });
        }
        "shop" => {
            if args.is_empty() {
                println!("Usage: admin shop <name>");
                return;
            }
            session.shop.name = args.to_string();
            println!("Shop renamed to {}", session.shop.name);
            if let Some(sync) = &session.sync {
                spawn_upsert_shop(sync.clone(), session.shop.clone());
            }
        }
        _ => println!("Admin actions: add, toggle, shop"),
    }
}

fn non_empty(part: Option<&&str>) -> Option<String> {
    part.filter(|s| !s.is_empty()).map(|s| s.to_string())
}

fn repl_events(session: &Session) {
    let events = session.log.events();
    println!(
        "{} events this session ({})",
        events.len(),
        session.log.session_id()
    );
    for event in events.iter().rev().take(3).rev() {
        let subject = event
            .coffee_id
            .as_deref()
            .or(event.pastry_id.as_deref())
            .unwrap_or("-");
        println!("  {} {}", event.kind, subject);
    }
}

fn repl_export(session: &Session, rest: &str) {
    let (format, path) = match rest.split_once(' ') {
        Some((format, path)) => (format, Some(PathBuf::from(path.trim()))),
        None => (rest, None),
    };

    let rendered = match format {
        "json" => session.log.export_json(),
        "csv" => session.log.export_csv(),
        _ => {
            println!("Usage: export <json|csv> [path]");
            return;
        }
    };

    match path {
        Some(path) => match std::fs::write(&path, rendered) {
            Ok(()) => println!("Wrote {} events to {}", session.log.len(), path.display()),
            Err(err) => println!("Error writing {}: {}", path.display(), err),
        },
        None => println!("{}", rendered),
    }
}
