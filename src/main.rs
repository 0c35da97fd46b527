mod actor_framework;
mod app_system;
mod clients;
mod config;
mod domain;
mod format;
mod notice;
mod search;
mod transport;
mod views;

mod material_actor;
mod order_actor;
mod project_actor;
mod user_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, AdminSystem, SessionGuard, SessionStore};
use crate::domain::{
    format_date, MaterialId, MaterialInput, NewExpenditure, Project, Registration, StatusClass,
};
use crate::format::format_rupiah;
use crate::notice::Notice;
use crate::views::{
    CatalogBrowser, DashboardSummary, InventoryViewer, OrderActionKind, OrderComposer, OrderTracker,
    ProjectActionKind, ProjectTracker, UserManager,
};

#[derive(Parser)]
#[command(name = "hyperial_admin", about = "Admin console for the Hyperial procurement backend", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[arg(long, global = true, help = "Override the configured backend URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as an administrator
    Login(LoginArgs),
    /// Sign out and forget the stored session
    Logout,
    /// Show headline figures and recent activity
    Dashboard,
    /// Browse orderable vendor materials
    Catalog(SearchArgs),
    /// Order catalog materials, one order per vendor
    Order(OrderArgs),
    #[command(subcommand)]
    Orders(OrdersCommands),
    #[command(subcommand)]
    Projects(ProjectsCommands),
    #[command(subcommand)]
    Inventory(InventoryCommands),
    #[command(subcommand)]
    Users(UsersCommands),
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long, default_value = "", help = "Case-insensitive substring filter")]
    search: String,
}

#[derive(Args)]
struct IdArgs {
    #[arg(long)]
    id: u64,
}

#[derive(Args)]
struct OrderArgs {
    #[arg(
        long = "item",
        value_parser = parse_cart_item,
        action = ArgAction::Append,
        required = true,
        help = "Cart line as <vendorMaterialId>=<quantity> (e.g. 12=5)"
    )]
    items: Vec<(MaterialId, i64)>,
}

#[derive(Subcommand)]
enum OrdersCommands {
    List(SearchArgs),
    Invoice(IdArgs),
    /// Confirm receipt of a delivered order
    Receive(IdArgs),
    /// Book a received order into warehouse stock
    UpdateInventory(IdArgs),
}

#[derive(Subcommand)]
enum ProjectsCommands {
    List(SearchArgs),
    Show(IdArgs),
    Approve(IdArgs),
    ApproveMaterials(IdArgs),
}

#[derive(Subcommand)]
enum InventoryCommands {
    List(SearchArgs),
    /// Fetch one warehouse material
    Show(IdArgs),
    Add(MaterialArgs),
    Edit(EditMaterialArgs),
    Delete(IdArgs),
    Expenditures,
    AddExpenditure(ExpenditureArgs),
}

#[derive(Args)]
struct MaterialArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    quantity: Option<i64>,
}

impl From<MaterialArgs> for MaterialInput {
    fn from(args: MaterialArgs) -> Self {
        MaterialInput {
            name: args.name,
            description: args.description,
            unit: args.unit,
            quantity: args.quantity,
        }
    }
}

#[derive(Args)]
struct EditMaterialArgs {
    #[arg(long)]
    id: MaterialId,
    #[command(flatten)]
    material: MaterialArgs,
}

#[derive(Args)]
struct ExpenditureArgs {
    #[arg(long)]
    material_id: MaterialId,
    #[arg(long, allow_negative_numbers = true)]
    quantity: i64,
    #[arg(long)]
    project_id: Option<u64>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
enum UsersCommands {
    List(SearchArgs),
    /// Show the vendor profile of a user
    Vendor(IdArgs),
    Delete(IdArgs),
    Create(CreateUserArgs),
}

#[derive(Args)]
struct CreateUserArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long, help = "vendor or ProjectManager")]
    role: String,
    #[arg(long)]
    vendor_name: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    let mut config = config::load_config().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url.clone() {
        config.base_url = base_url;
    }

    let mut guard = SessionGuard::from_store(SessionStore::new(config.session_path.clone()))?;
    if !matches!(cli.command, Commands::Login(_)) {
        guard.require()?;
    }

    let system = AdminSystem::new(&config).context("failed to start admin system")?;
    let span = tracing::info_span!("command");
    let outcome = run(&system, &mut guard, cli.command, cli.json).instrument(span).await;

    system.shutdown().await.map_err(|e| anyhow!(e))?;
    outcome
}

async fn run(system: &AdminSystem, guard: &mut SessionGuard, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Login(args) => {
            let session = guard.login(&system.auth_client, &args.email, &args.password).await?;
            info!(role = %session.role, "Logged in");
            report(Notice::Success("Logged in as administrator.".into()), json)
        }
        Commands::Logout => {
            guard.logout(&system.auth_client).await?;
            report(Notice::Success("Logged out.".into()), json)
        }
        Commands::Dashboard => handle_dashboard(system, json).await,
        Commands::Catalog(args) => {
            let mut catalog = CatalogBrowser::new(system.catalog_client.clone());
            catalog.load().await;
            catalog.set_search(args.search);
            let visible = catalog.visible();
            if json {
                return print_json(&visible);
            }
            for material in visible {
                println!(
                    "- [{}] {} • {} • {} • {}",
                    material.id,
                    material.name,
                    material.vendor_name().unwrap_or("-"),
                    format_rupiah(material.price),
                    material.stock_label()
                );
            }
            Ok(())
        }
        Commands::Order(args) => handle_order(system, args, json).await,
        Commands::Orders(command) => handle_orders(system, command, json).await,
        Commands::Projects(command) => handle_projects(system, command, json).await,
        Commands::Inventory(command) => handle_inventory(system, command, json).await,
        Commands::Users(command) => handle_users(system, command, json).await,
    }
}

async fn handle_dashboard(system: &AdminSystem, json: bool) -> Result<()> {
    let mut summary = DashboardSummary::new(system.dashboard_client.clone());
    summary.load().await;
    let metrics = summary.metrics().ok_or_else(|| anyhow!("Failed to load dashboard."))?;
    if json {
        return print_json(metrics);
    }

    println!("Total invoices: {}", format_rupiah(metrics.total_invoice_amount));
    println!("Orders: {}  Users: {}  Projects: {}", metrics.total_orders, metrics.total_users, metrics.total_projects);
    for entry in &metrics.order_status_distribution {
        println!("  {:<10} {}", entry.shipping, entry.count);
    }
    println!("Recent projects:");
    for project in &metrics.recent_projects {
        println!("  - {} [{}]{}", project.name, project.status, status_marker(&project.status));
    }
    println!("Recent invoices:");
    for invoice in &metrics.recent_invoices {
        println!("  - #{} order {} • {}", invoice.id, invoice.order_id, format_rupiah(invoice.total_amount));
    }
    Ok(())
}

fn status_marker(status: &str) -> &'static str {
    match StatusClass::for_status(status) {
        StatusClass::Pending => " …",
        StatusClass::Delivered => " →",
        StatusClass::Received => " ✔",
        StatusClass::Plain => "",
    }
}

async fn handle_order(system: &AdminSystem, args: OrderArgs, json: bool) -> Result<()> {
    let mut catalog = CatalogBrowser::new(system.catalog_client.clone());
    catalog.load().await;

    let mut composer = OrderComposer::new(system.order_client.clone());
    for (material_id, quantity) in args.items {
        let material = catalog
            .find(material_id)
            .cloned()
            .ok_or_else(|| anyhow!("Material {} is not in the catalog", material_id))?;
        composer.add_to_cart(material, quantity)?;
    }
    info!(total = %format_rupiah(composer.cart().total()), "Cart ready");

    let mut tracker = OrderTracker::new(system.order_client.clone());
    let report = composer.submit_orders(&mut tracker).await?;

    if json {
        print_json(&json!({
            "submitted": report.submitted,
            "failed": report.failed.as_ref().map(|(vendor, notice)| json!({ "vendor": vendor, "message": notice.message() })),
            "skipped": report.skipped,
            "remaining": composer.cart().items().iter().map(|item| item.material.id).collect::<Vec<_>>(),
        }))?;
    } else {
        for notice in &report.notices {
            println!("{}", notice);
        }
        for item in composer.cart().items() {
            println!("  not ordered: {} x{} (vendor {})", item.material.name, item.quantity, item.material.vendor_id);
        }
    }

    match report.failed {
        Some((vendor, notice)) => bail!("Order for vendor {} failed: {}", vendor, notice.message()),
        None => Ok(()),
    }
}

async fn handle_orders(system: &AdminSystem, command: OrdersCommands, json: bool) -> Result<()> {
    let mut tracker = OrderTracker::new(system.order_client.clone());
    match command {
        OrdersCommands::List(args) => {
            tracker.load().await;
            tracker.set_search(args.search);
            let visible = tracker.visible();
            if json {
                return print_json(&visible);
            }
            for order in visible {
                let status = order.status().map(|s| s.colour()).unwrap_or("gray");
                let actions = OrderTracker::available_actions(order)
                    .into_iter()
                    .map(|action| match action {
                        OrderActionKind::ViewInvoice => "invoice",
                        OrderActionKind::MarkReceived => "receive",
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "- Order {} • vendor {} • {} • {} ({}) • actions: {}",
                    order.id,
                    order.vendor_id,
                    format_rupiah(order.total_amount),
                    order.shipping,
                    status,
                    actions
                );
            }
            Ok(())
        }
        OrdersCommands::Invoice(args) => {
            let invoice = tracker.view_invoice(args.id).await?;
            if json {
                return print_json(&invoice);
            }
            println!("Invoice #{} for order {} • {}", invoice.id, invoice.order_id, invoice.vendor_name);
            if let Some(date) = &invoice.invoice_date {
                println!("Date: {}", format_date(date));
            }
            if let Some(date) = &invoice.due_date {
                println!("Due:  {}", format_date(date));
            }
            for line in &invoice.lines {
                println!(
                    "  {} x{} @ {} = {}",
                    line.material.name,
                    line.quantity,
                    format_rupiah(line.material.price),
                    format_rupiah(line.total())
                );
            }
            println!("Subtotal: {}", format_rupiah(invoice.subtotal));
            println!("Tax:      {}", format_rupiah(invoice.tax));
            println!("Discount: {}", format_rupiah(invoice.discount));
            println!("Total:    {}", format_rupiah(invoice.total_amount));
            Ok(())
        }
        OrdersCommands::Receive(args) => {
            tracker.load().await;
            report(tracker.mark_received(args.id).await, json)
        }
        OrdersCommands::UpdateInventory(args) => report(tracker.update_inventory(args.id).await, json),
    }
}

fn print_project(project: &Project) {
    println!(
        "- [{}] {} • {} • {} ({}%, {})",
        project.id,
        project.name,
        project.manager,
        project.status,
        project.progress_percent(),
        project.progress_colour()
    );
}

async fn handle_projects(system: &AdminSystem, command: ProjectsCommands, json: bool) -> Result<()> {
    let mut tracker = ProjectTracker::new(system.project_client.clone());
    tracker.load().await;
    match command {
        ProjectsCommands::List(args) => {
            tracker.set_search(args.search);
            let visible = tracker.visible();
            if json {
                return print_json(&visible);
            }
            for project in visible {
                print_project(project);
            }
            Ok(())
        }
        ProjectsCommands::Show(args) => {
            let project = tracker
                .find(args.id)
                .ok_or_else(|| anyhow!("Project {} not found", args.id))?;
            if json {
                return print_json(project);
            }
            print_project(project);
            if let Some(location) = &project.location {
                println!("Location: {}", location);
            }
            if let (Some(start), Some(end)) = (&project.start_date, &project.end_date) {
                println!("Schedule: {} - {}", format_date(start), format_date(end));
            }
            println!("Approved materials:");
            for material in project.approved_materials() {
                println!("  - {} ({})", material.name, material.quantity);
            }
            if project.has_pending_materials() {
                println!("New update:");
                for material in project.pending_materials() {
                    println!("  - {} ({})", material.name, material.quantity);
                }
            }
            for action in ProjectTracker::available_actions(project) {
                match action {
                    ProjectActionKind::Approve => println!("Available: approve"),
                    ProjectActionKind::ApproveAdditionalMaterials => println!("Available: approve-materials"),
                }
            }
            Ok(())
        }
        ProjectsCommands::Approve(args) => report(tracker.approve_project(args.id).await, json),
        ProjectsCommands::ApproveMaterials(args) => {
            report(tracker.approve_additional_materials(args.id).await, json)
        }
    }
}

async fn handle_inventory(system: &AdminSystem, command: InventoryCommands, json: bool) -> Result<()> {
    let mut inventory = InventoryViewer::new(system.material_client.clone(), system.expenditure_client.clone());
    match command {
        InventoryCommands::List(args) => {
            inventory.load().await;
            inventory.set_search(args.search);
            let visible = inventory.visible();
            if json {
                return print_json(&visible);
            }
            for material in visible {
                println!(
                    "- [{}] {} • {} {} • {}",
                    material.id,
                    material.name,
                    material.quantity,
                    material.unit,
                    material.stock_level()
                );
            }
            Ok(())
        }
        InventoryCommands::Show(args) => {
            let material = inventory.material(args.id).await?;
            if json {
                return print_json(&material);
            }
            println!("[{}] {}", material.id, material.name);
            if !material.description.is_empty() {
                println!("{}", material.description);
            }
            println!("Stock: {} {} ({})", material.quantity, material.unit, material.stock_level());
            Ok(())
        }
        InventoryCommands::Add(args) => report(inventory.add_material(args.into()).await, json),
        InventoryCommands::Edit(args) => report(inventory.edit_material(args.id, args.material.into()).await, json),
        InventoryCommands::Delete(args) => report(inventory.delete_material(args.id).await, json),
        InventoryCommands::Expenditures => {
            inventory.load_expenditures().await;
            if json {
                return print_json(&inventory.expenditures());
            }
            for expenditure in inventory.expenditures() {
                println!(
                    "- material {} x{} • project {} • {}",
                    expenditure.material_id,
                    expenditure.quantity,
                    expenditure.project_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                    expenditure.created_at.as_deref().map(format_date).unwrap_or_default()
                );
            }
            Ok(())
        }
        InventoryCommands::AddExpenditure(args) => {
            let expenditure = NewExpenditure {
                material_id: args.material_id,
                quantity: args.quantity,
                project_id: args.project_id,
                notes: args.notes,
            };
            report(inventory.add_expenditure(expenditure).await, json)
        }
    }
}

async fn handle_users(system: &AdminSystem, command: UsersCommands, json: bool) -> Result<()> {
    let mut users = UserManager::new(system.user_client.clone());
    match command {
        UsersCommands::List(args) => {
            users.load().await;
            users.set_search(args.search);
            let visible = users.visible();
            if json {
                return print_json(&visible);
            }
            for user in visible {
                println!(
                    "- [{}] {} <{}> • {}{}",
                    user.id,
                    user.username,
                    user.email,
                    user.role,
                    user.vendor_name().map(|name| format!(" • {}", name)).unwrap_or_default()
                );
            }
            Ok(())
        }
        UsersCommands::Vendor(args) => {
            let profile = users.vendor_details(args.id).await?;
            if json {
                return print_json(&profile);
            }
            for (label, value) in profile.fields() {
                println!("{:<18} {}", label, value);
            }
            Ok(())
        }
        UsersCommands::Delete(args) => report(users.delete_user(args.id).await, json),
        UsersCommands::Create(args) => {
            let registration = Registration {
                username: args.username,
                email: args.email,
                password: args.password,
                role: args.role,
                vendor_name: args.vendor_name,
                address: args.address,
                phone_number: args.phone_number,
            };
            report(users.create_user(registration).await, json)
        }
    }
}

fn report(notice: Notice, json: bool) -> Result<()> {
    if json {
        print_json(&json!({ "ok": !notice.is_error(), "message": notice.message() }))?;
    } else if !notice.is_error() {
        println!("{}", notice);
    }
    if notice.is_error() {
        bail!("{}", notice.message());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_cart_item(raw: &str) -> Result<(MaterialId, i64), String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid item '{raw}', expected <id>=<quantity>"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid material id '{}'", id.trim()))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", quantity.trim()))?;
    Ok((id, quantity))
}
