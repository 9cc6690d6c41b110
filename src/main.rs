//! Demonstration binary wiring the in-memory adapters and a connection pool.

use std::sync::Arc;

use anyhow::{Context, Result};

use invoice_hub::adapters::{
    ConsoleMailService, InMemoryInvoiceCache, InMemoryInvoiceRepository, StaticTokenService,
};
use invoice_hub::application::InvoiceService;
use invoice_hub::config::AppConfig;
use invoice_hub::domain::foundation::{InvoiceId, Money};
use invoice_hub::domain::invoice::Invoice;
use invoice_hub::pool::{DatabaseConnection, ResourcePool};
use invoice_hub::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.logging);

    run_invoice_workflow(&config).await?;
    let pool = ResourcePool::from_config(&config.pool, DatabaseConnection::new);
    let outcome = run_pool_demo(&pool);
    if let (Some(released), Some(reacquired)) = (outcome.released_id, outcome.reacquired_id) {
        println!("Released connection {released}, reacquired connection {reacquired}");
    }
    tracing::debug!(
        leased = outcome.leased,
        exhausted = outcome.exhausted,
        "Pool demo finished"
    );

    Ok(())
}

async fn run_invoice_workflow(config: &AppConfig) -> Result<()> {
    let service = InvoiceService::new(
        Arc::new(InMemoryInvoiceRepository::new()),
        Arc::new(InMemoryInvoiceCache::new()),
        Arc::new(ConsoleMailService::from_config(&config.notification)),
        Arc::new(StaticTokenService::from_config(&config.token)),
    );

    let invoice = Invoice::unpaid(InvoiceId::new(1), Money::parse("42.50")?);
    service.create_invoice(&invoice).await?;

    println!("Issued token: {}", service.issue_api_token("client-xyz").await?);
    println!("Unpaid invoices: {}", service.list_unpaid().await?.len());

    Ok(())
}

/// What the pool walkthrough observed, for reporting and tests.
#[derive(Debug, PartialEq, Eq)]
struct PoolDemoOutcome {
    leased: usize,
    exhausted: bool,
    released_id: Option<usize>,
    reacquired_id: Option<usize>,
}

fn run_pool_demo(pool: &ResourcePool<DatabaseConnection>) -> PoolDemoOutcome {
    const QUERIES: [&str; 2] = ["SELECT * FROM users", "SELECT * FROM orders"];

    let mut leases = Vec::with_capacity(pool.capacity());
    while let Some(connection) = pool.acquire() {
        connection.execute_query(QUERIES[leases.len() % QUERIES.len()]);
        leases.push(connection);
    }
    let leased = leases.len();

    // Every connection is out, so this one must fail.
    let exhausted = match pool.acquire() {
        Some(extra) => {
            leases.push(extra);
            false
        }
        None => {
            println!("No available connections.");
            true
        }
    };

    let mut released_id = None;
    if !leases.is_empty() {
        let first = leases.remove(0);
        let id = first.id();
        match pool.release(first) {
            Ok(()) => released_id = Some(id),
            Err(err) => tracing::error!("{}", err),
        }
    }

    let reacquired_id = pool.acquire().map(|connection| {
        connection.execute_query("SELECT * FROM products");
        let id = connection.id();
        leases.push(connection);
        id
    });

    println!(
        "Pool '{}': {} of {} connections in use",
        pool.name(),
        pool.in_use(),
        pool.capacity()
    );

    PoolDemoOutcome {
        leased,
        exhausted,
        released_id,
        reacquired_id,
    }
}
