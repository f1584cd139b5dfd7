use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use order_factory::domain::order::{OrderClass, OrderFactory};
use order_factory::event_sourcing::serialize_event;

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_factory=debug"))
        )
        .init();

    tracing::info!("Starting order factory demo");

    // === 1. Create one order of each kind ===
    let mut orders = vec![
        OrderFactory::create(OrderClass::Standard, "ORD001", 75.0),
        OrderFactory::create(OrderClass::Standard, "ORD002", 120.0),
        OrderFactory::create(OrderClass::Express, "ORD003", 50.0),
        OrderFactory::create(OrderClass::Express, "ORD004", 200.0),
        OrderFactory::create_order("international", "ORD005", 150.0)?,
        OrderFactory::create_order("international", "ORD006", 500.0)?,
    ];

    for order in &orders {
        println!("\n{} ({})", order.order_id(), order.class().variant_name());
        println!("  Amount:   ${:.2}", order.total_amount());
        println!("  Shipping: ${:.2}", order.calculate_shipping());
        println!("  Delivery: {} days", order.delivery_days());
        println!("  Status:   {}", order.status());
    }

    // === 2. Process the first three orders ===
    let correlation_id = Uuid::new_v4();
    for order in orders.iter_mut().take(3) {
        println!("\n{}", order.process());
        println!("  New status: {}", order.status());

        for envelope in order.take_envelopes(correlation_id) {
            let payload = serialize_event(&envelope.event_data)?;
            tracing::debug!(
                order_id = %envelope.aggregate_id,
                sequence = envelope.sequence_number,
                payload = %payload,
                "Recorded event"
            );
        }
    }

    // === 3. Compare shipping terms at the same amount ===
    let amount = 100.0;
    println!("\nShipping for an order of ${:.2}:", amount);
    for quote in OrderFactory::quote_all(amount) {
        println!(
            "  {:<14} ${:>7.2}, {} days",
            quote.class.variant_name(),
            quote.shipping_cost,
            quote.delivery_days
        );
    }

    // === 4. Edge cases ===
    match OrderFactory::create_order("INVALID_TYPE", "ERR001", 100.0) {
        Ok(_) => tracing::error!("Unknown order type was accepted"),
        Err(e) => println!("\nRejected: {}", e),
    }

    let zero = OrderFactory::create(OrderClass::Standard, "ZERO1", 0.0);
    println!("Zero-amount standard shipping: ${:.2}", zero.calculate_shipping());

    let big = OrderFactory::create(OrderClass::International, "BIG1", 10_000.0);
    println!("Large international shipping: ${:.2}", big.calculate_shipping());

    tracing::info!(orders = orders.len(), "Demo complete");

    Ok(())
}
