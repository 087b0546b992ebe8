use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use models::{Category, CategoryFilter, ExpenseDraft};
use store::{load_into, ExpenseStore, SeedExpenseSource};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "expenses", about = "In-memory expense tracker dashboard.")]
struct Args {
    /// Restrict the list to one category (all, food, transport, entertainment, utilities, shopping, health, other)
    #[arg(short, long, default_value = "all")]
    filter: String,

    /// Add an expense before rendering: "description,amount,category,YYYY-MM-DD" (repeatable)
    #[arg(long)]
    add: Vec<String>,

    /// Remove an expense by id before rendering (repeatable)
    #[arg(long)]
    remove: Vec<Uuid>,

    /// Reference month for the current-month figure, as YYYY-MM; defaults to today's month
    #[arg(long)]
    month: Option<String>,

    /// Skip the simulated network delay of the seed backend
    #[arg(long)]
    no_delay: bool,

    /// Print the dashboard view as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_draft(raw: &str) -> Result<ExpenseDraft> {
    let parts: Vec<&str> = raw.splitn(4, ',').collect();
    if parts.len() != 4 {
        return Err(anyhow!(
            "expected \"description,amount,category,YYYY-MM-DD\", got {raw:?}"
        ));
    }
    let category: Category = parts[2]
        .trim()
        .parse()
        .with_context(|| format!("in {raw:?}"))?;
    let date = NaiveDate::parse_from_str(parts[3].trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date in {raw:?}"))?;
    Ok(ExpenseDraft::new(parts[0], parts[1].trim(), category, date))
}

fn parse_reference(month: Option<&str>) -> Result<NaiveDate> {
    match month {
        Some(raw) => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
            .with_context(|| format!("invalid month {raw:?}, expected YYYY-MM")),
        None => Ok(Local::now().date_naive()),
    }
}

fn render_text(store: &ExpenseStore, reference: NaiveDate) {
    let view = store.dashboard(reference);
    let stats = &view.summary;

    println!();
    println!(
        "Total Spent    ${:.2} ({} transaction{})",
        stats.total,
        stats.count,
        if stats.count == 1 { "" } else { "s" }
    );
    println!("Avg. Expense   ${:.2}", stats.average);
    match &stats.top_category {
        Some(top) => {
            let info = top.category.info();
            println!(
                "Top Category   {} {} (${:.2}, {:.0}%)",
                info.icon, info.label, top.amount, top.percentage
            );
        }
        None => println!("Top Category   no data yet"),
    }
    println!(
        "This Month     ${:.2} ({})",
        view.current_month_total,
        reference.format("%B %Y")
    );

    println!();
    println!("Spending by Category");
    if view.breakdown.is_empty() {
        println!("  no spending data yet");
    }
    for entry in &view.breakdown {
        let info = entry.category.info();
        println!(
            "  {} {:<16} ${:>8.2}  ({:.1}%)",
            info.icon, info.label, entry.amount, entry.percentage
        );
    }

    println!();
    println!("Expenses (filter: {})", view.filter);
    if view.visible.is_empty() {
        println!("  nothing to show");
    }
    for expense in &view.visible {
        println!(
            "  {}  {} {:<24} ${:>8.2}  {}",
            expense.date,
            expense.category.info().icon,
            expense.description,
            expense.amount,
            expense.id
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store=info".into()),
        )
        .init();

    let args = Args::parse();

    let filter: CategoryFilter = args
        .filter
        .parse()
        .map_err(|e| anyhow!("{e} (expected \"all\" or a category name)"))?;
    let reference = parse_reference(args.month.as_deref())?;

    let source = if args.no_delay {
        SeedExpenseSource::with_delay(std::time::Duration::ZERO)
    } else {
        SeedExpenseSource::new()
    };

    let mut store = ExpenseStore::new();
    if let Err(err) = load_into(&source, &mut store).await {
        // Store stays empty in the Failed phase; still render the dashboard.
        eprintln!("warning: {err}");
    }

    for raw in &args.add {
        let draft = parse_draft(raw)?;
        store
            .add(draft)
            .map_err(|e| anyhow!("rejected {raw:?}: {e}"))?;
    }
    for id in &args.remove {
        if !store.remove(*id) {
            eprintln!("warning: no expense with id {id}");
        }
    }
    store.set_filter(filter);

    if args.json {
        let view = store.dashboard(reference);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_text(&store, reference);
    }

    Ok(())
}
