//! Prices a cow in UF, USD and UTM against a running CowTracker server,
//! then shows how the dollar and UF moved over the last 30 days.
//!
//! Run with: cargo run -p cowtracker-app --example cow_pricing -- [price_clp] [YYYY-MM-DD]

use chrono::NaiveDate;
use cowtracker_client::CowTrackerClient;
use cowtracker_types::SeriesTrend;
use exchange_rates::{ConversionResult, CurrencyCode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn uf_advice(price: Decimal) -> Option<&'static str> {
    if price < dec!(30) {
        Some("Competitive price in UF, good buying opportunity")
    } else if price > dec!(50) {
        Some("High price in UF, consider negotiating")
    } else {
        None
    }
}

fn usd_advice(price: Decimal) -> Option<&'static str> {
    if price < dec!(1500) {
        Some("Attractive price in USD for export")
    } else if price > dec!(2500) {
        Some("High price in USD, evaluate the local market")
    } else {
        None
    }
}

fn advice(result: &ConversionResult) -> Option<&'static str> {
    match result.to {
        CurrencyCode::UF => uf_advice(result.converted_amount),
        CurrencyCode::USD => usd_advice(result.converted_amount),
        _ => None,
    }
}

fn print_trend(label: &str, trend: &SeriesTrend) {
    match (trend.first_value, trend.last_value, trend.change_percent) {
        (Some(first), Some(last), Some(change)) => println!(
            "{:<6} {:?}: {} -> {} ({}%)",
            label, trend.trend, first, last, change
        ),
        _ => println!("{:<6} {:?}", label, trend.trend),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let price: Decimal = args.next().as_deref().unwrap_or("1500000").parse()?;
    let date: Option<NaiveDate> = args.next().map(|d| d.parse()).transpose()?;

    let base_url =
        std::env::var("COWTRACKER_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = CowTrackerClient::new(&base_url);

    if !client.health().await? {
        anyhow::bail!("CowTracker API at {} is not healthy", base_url);
    }

    println!("🐄 CowTracker - cow pricing with central bank data");
    println!("{}", "=".repeat(60));

    let mut recommendations = Vec::new();
    for target in ["UF", "USD", "UTM"] {
        match client.convert(price, "CLP", target, date).await {
            Ok(response) => {
                let result = &response.result;
                println!(
                    "{:<4} {}  (rate {} on {}, {:?})",
                    target,
                    response.display,
                    result.rate,
                    result.rate_date.unwrap_or(result.date),
                    result.source
                );
                recommendations.extend(advice(result));
            }
            Err(e) => println!("{:<4} unavailable: {}", target, e),
        }
    }

    println!();
    if recommendations.is_empty() {
        println!("No recommendations for this price.");
    }
    for rec in recommendations {
        println!("💡 {}", rec);
    }

    println!();
    println!("📈 Trends, last 30 days");
    match client.price_trends(Some(30), date).await {
        Ok(trends) => {
            print_trend("Dollar", &trends.exchange_rate);
            print_trend("UF", &trends.uf);
            for rec in trends.recommendations {
                println!("💡 {}", rec);
            }
        }
        Err(e) => println!("Trends unavailable: {}", e),
    }

    Ok(())
}
