//! # Load generator for the product catalog
//!
//! Each worker loops until the deadline: it sleeps a random think time, then
//! either fetches or replaces product 1 or 2, four fetches for every update.
//! Update bodies are always valid, so anything other than 200/204 is worth
//! looking at.
//!
//! ```text
//! RUST_LOG=info cargo run --bin loadtest -- --target http://127.0.0.1:8080 --concurrency 50 --duration-secs 60
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::Rng;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

const PRODUCT_IDS: [i64; 2] = [1, 2];
const FETCH_WEIGHT: u32 = 4;
const UPDATE_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Parser)]
#[command(name = "loadtest", about = "Drive mixed fetch/update traffic at a catalog server")]
struct Args {
    /// Base URL of the catalog server.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    target: String,

    /// Number of concurrent simulated users.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    concurrency: u32,

    /// How long to generate traffic for.
    #[arg(long, default_value_t = 30)]
    duration_secs: u64,

    /// Lower bound of the pause between requests.
    #[arg(long, default_value_t = 100)]
    min_wait_ms: u64,

    /// Upper bound of the pause between requests.
    #[arg(long, default_value_t = 1000)]
    max_wait_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Operation {
    Fetch,
    Update,
}

impl Operation {
    fn route(self) -> &'static str {
        match self {
            Operation::Fetch => "GET /products/{productId}",
            Operation::Update => "POST /products/{productId}/details",
        }
    }
}

/// Outcome counts keyed by route and status (`"error"` for transport failures).
type Tally = BTreeMap<(&'static str, String), u64>;

/// Everything random about one request, drawn before any `.await`.
#[derive(Debug, Clone, PartialEq)]
struct Planned {
    operation: Operation,
    product_id: i64,
    body: Option<Value>,
    wait: Duration,
}

fn plan<R: Rng>(rng: &mut R, min_wait_ms: u64, max_wait_ms: u64) -> Planned {
    let operation = if rng.gen_range(0..FETCH_WEIGHT + UPDATE_WEIGHT) < FETCH_WEIGHT {
        Operation::Fetch
    } else {
        Operation::Update
    };
    let product_id = PRODUCT_IDS[rng.gen_range(0..PRODUCT_IDS.len())];
    let body = match operation {
        Operation::Fetch => None,
        Operation::Update => Some(update_body(rng, product_id)),
    };
    let wait = Duration::from_millis(rng.gen_range(min_wait_ms..=max_wait_ms.max(min_wait_ms)));

    Planned { operation, product_id, body, wait }
}

fn update_body<R: Rng>(rng: &mut R, product_id: i64) -> Value {
    json!({
        "product_id": product_id,
        "sku": format!("SKU-{}", rng.gen_range(100..=999)),
        "manufacturer": "Loadtest Inc",
        "category_id": 10,
        "weight": rng.gen_range(0..=2000),
        "some_other_id": rng.gen_range(1..=1000),
    })
}

#[instrument(skip(client, args))]
async fn run_worker(worker: u32, client: reqwest::Client, args: Args, deadline: Instant) -> Tally {
    let mut tally = Tally::new();
    while Instant::now() < deadline {
        let planned = plan(&mut rand::thread_rng(), args.min_wait_ms, args.max_wait_ms);
        tokio::time::sleep(planned.wait).await;

        let request = match &planned.body {
            None => client.get(format!("{}/products/{}", args.target, planned.product_id)),
            Some(body) => client
                .post(format!("{}/products/{}/details", args.target, planned.product_id))
                .json(body),
        };

        let outcome = match request.send().await {
            Ok(resp) => resp.status().as_u16().to_string(),
            Err(e) => {
                debug!(error = %e, "Request failed");
                "error".to_string()
            }
        };
        *tally.entry((planned.operation.route(), outcome)).or_default() += 1;
    }
    tally
}

fn merge(into: &mut Tally, from: Tally) {
    for (key, count) in from {
        *into.entry(key).or_default() += count;
    }
}

fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    setup_tracing();

    info!(target_url = %args.target, concurrency = args.concurrency, duration_secs = args.duration_secs, "Starting load test");

    let client = reqwest::Client::new();
    let started = Instant::now();
    let deadline = started + Duration::from_secs(args.duration_secs);

    let handles: Vec<_> = (0..args.concurrency)
        .map(|worker| tokio::spawn(run_worker(worker, client.clone(), args.clone(), deadline)))
        .collect();

    let mut total = Tally::new();
    for handle in handles {
        let tally = handle.await.map_err(|e| format!("Worker task failed: {:?}", e))?;
        merge(&mut total, tally);
    }

    let elapsed = started.elapsed().as_secs_f64();
    let requests: u64 = total.values().sum();
    for ((route, status), count) in &total {
        if status == "200" || status == "204" {
            info!(route, status = %status, count, "Responses");
        } else {
            warn!(route, status = %status, count, "Responses");
        }
    }
    info!(requests, elapsed_secs = elapsed, rps = requests as f64 / elapsed.max(f64::EPSILON), "Load test complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_plans_mix_fetches_and_valid_updates() {
        let mut rng = StdRng::seed_from_u64(7);
        let plans: Vec<Planned> = (0..2000).map(|_| plan(&mut rng, 100, 1000)).collect();

        let updates = plans.iter().filter(|p| p.operation == Operation::Update).count();
        // Expect roughly one in five; wide bounds keep this stable across rand versions.
        assert!((250..=550).contains(&updates), "updates = {updates}");

        for p in &plans {
            assert!(PRODUCT_IDS.contains(&p.product_id));
            assert!(p.wait >= Duration::from_millis(100) && p.wait <= Duration::from_millis(1000));
            match (&p.operation, &p.body) {
                (Operation::Fetch, None) => {}
                (Operation::Update, Some(body)) => {
                    assert_eq!(body["product_id"], p.product_id);
                    assert!(body["sku"].as_str().unwrap().starts_with("SKU-"));
                    assert!((0..=2000).contains(&body["weight"].as_i64().unwrap()));
                    assert!(body["some_other_id"].as_i64().unwrap() >= 1);
                }
                other => panic!("unexpected plan shape: {other:?}"),
            }
        }
    }

    #[test]
    fn test_inverted_wait_bounds_collapse_to_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(plan(&mut rng, 500, 10).wait, Duration::from_millis(500));
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut total = Tally::new();
        let mut a = Tally::new();
        a.insert((Operation::Fetch.route(), "200".to_string()), 3);
        let mut b = Tally::new();
        b.insert((Operation::Fetch.route(), "200".to_string()), 2);
        b.insert((Operation::Update.route(), "error".to_string()), 1);

        merge(&mut total, a);
        merge(&mut total, b);
        assert_eq!(total[&(Operation::Fetch.route(), "200".to_string())], 5);
        assert_eq!(total[&(Operation::Update.route(), "error".to_string())], 1);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["loadtest"]).unwrap();
        assert_eq!(args.target, "http://127.0.0.1:8080");
        assert_eq!(args.concurrency, 10);
        assert_eq!(args.duration_secs, 30);
        assert!(Args::try_parse_from(["loadtest", "--concurrency", "0"]).is_err());
    }
}
