//! Agri Price Dashboard - command-line driver
//!
//! Exercises the full flow against a running prediction API: resolve a
//! coordinate to its market, gate the crop/market pairing, submit a
//! prediction, then refresh the history and heatmap views.
//!
//! Usage: apd-cli <crop> <date> [lat lon]
//! Credentials come from APD_USERID / APD_PASSWORD.

use rust_decimal::Decimal;

use dashboard_client::{
    resolve_market, ApiClient, Config, FixedLocation, HeatmapAggregator, HistoryStore, TokenStore,
};
use shared::models::{LoginRequest, PredictionRequest};
use shared::types::GpsCoordinates;
use shared::validation::validate_prediction_request;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apd_cli=info,dashboard_client=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("API: {}", config.api.base_url);

    let mut args = std::env::args().skip(1);
    let crop = args.next().ok_or_else(usage)?;
    let date = args.next().ok_or_else(usage)?;
    let provider = match (args.next(), args.next()) {
        (Some(lat), Some(lon)) => FixedLocation(GpsCoordinates::new(lat.parse()?, lon.parse()?)),
        _ => FixedLocation::fallback(),
    };

    // Resolve the coordinate to its market region
    let market = resolve_market(&provider).await?;
    let position = provider.0;
    println!("Nearest market: {}", market.name);

    // Gate the pairing before touching the network
    let request = PredictionRequest::new(crop, market.name, date, position);
    if let Err(message) = validate_prediction_request(&request) {
        anyhow::bail!(message);
    }

    // Log in and submit
    let client = ApiClient::from_config(&config);
    let mut tokens = TokenStore::new();
    let login = LoginRequest {
        userid: std::env::var("APD_USERID")?,
        password: std::env::var("APD_PASSWORD")?,
    };
    let session = client.login(&login).await?;
    let token = session.token.clone();
    tokens.set(session.token);

    let result = match client.predict(&request, &token).await {
        Ok(result) => result,
        Err(err) => {
            tokens.absorb_auth_failure(&err);
            return Err(err.into());
        }
    };

    println!(
        "Predicted price: {:.2} (range {:.2} - {:.2}, trend {:?})",
        result.predicted_price,
        result.confidence_lower,
        result.confidence_upper,
        result.trend_direction,
    );
    if let Some(best) = &result.best_day {
        println!("Best selling day: {} at {:.2}", best.label, best.price);
    }
    println!("Advice: {}", result.advice);

    // A successful prediction refreshes both derived views
    let mut history = HistoryStore::new();
    history.load(&client, &token).await?;
    println!("\nHistory ({} entries, newest first):", history.len());
    for entry in history.entries().iter().take(5) {
        let actual = entry
            .actual_price
            .map(|p| format!("{p:.2}"))
            .unwrap_or_else(|| "-".into());
        let diff = entry
            .price_diff
            .map(format_signed)
            .unwrap_or_else(|| "-".into());
        println!(
            "  {} | {} @ {} | predicted {:.2} | actual {} | diff {}",
            entry.created_at.format("%Y-%m-%d"),
            entry.crop,
            entry.market,
            entry.predicted_price,
            actual,
            diff,
        );
    }

    let mut heatmap = HeatmapAggregator::new();
    heatmap.load(&client, Some(&request.crop), &token).await?;
    println!("\nTop districts for {} (avg price):", request.crop);
    for entry in heatmap.top5() {
        println!("  {} ({}): {:.2}", entry.market, entry.crop, entry.avg_price);
    }

    Ok(())
}

fn format_signed(diff: Decimal) -> String {
    if diff > Decimal::ZERO {
        format!("+{diff:.2}")
    } else {
        format!("{diff:.2}")
    }
}

fn usage() -> anyhow::Error {
    anyhow::anyhow!("usage: apd-cli <crop> <date YYYY-MM-DD> [lat lon]")
}
