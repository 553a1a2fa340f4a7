mod config;

use anyhow::Result;
use config::DemoConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utilkit_core::{
    factorial, group_sales_by_customer, is_valid_date, object_to_pairs, pairs_to_object,
    sort_products_by_price, unique_words, Debouncer, GameConfig, GuessingGame, Hint, Memoizer,
    Product, RandomGuesses, Sale,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utilkit_demo=info,utilkit_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env();
    tracing::info!("🧰 Utilkit demo");
    tracing::info!("   Seed: {:?}, debounce delay: {:?}", config.seed, config.debounce_delay);

    demo_dates();
    demo_guessing(&config)?;
    demo_unique_words();
    demo_factorial();
    demo_debounce(config.debounce_delay).await;
    demo_memoize()?;
    demo_products();
    demo_sales();
    demo_pairs();

    tracing::info!("✅ Done");
    Ok(())
}

fn demo_dates() {
    tracing::info!("1. Date validation");
    for (day, month, year, note) in [
        (29, 2, 2024, "leap year"),
        (29, 2, 2023, "common year"),
        (31, 4, 2024, ""),
        (15, 7, 2024, ""),
    ] {
        tracing::info!(
            "   {:02}/{:02}/{} {}: {}",
            day,
            month,
            year,
            note,
            is_valid_date(day, month, year)
        );
    }
}

fn demo_guessing(config: &DemoConfig) -> Result<()> {
    tracing::info!("2. Guessing game (simulated)");

    let game_config = GameConfig::default().with_max_attempts(config.max_attempts);
    let (game, mut guesses) = match config.seed {
        Some(seed) => (
            GuessingGame::random(game_config, &mut StdRng::seed_from_u64(seed))?,
            RandomGuesses::seeded(seed.wrapping_add(1)),
        ),
        None => (
            GuessingGame::random(game_config, &mut StdRng::from_os_rng())?,
            RandomGuesses::from_os(),
        ),
    };

    let outcome = game.play(&mut guesses);
    for (i, round) in outcome.rounds.iter().enumerate() {
        let hint = match round.hint {
            Hint::Higher => "📈 higher",
            Hint::Lower => "📉 lower",
            Hint::Correct => "🎉 correct",
        };
        tracing::info!("   Attempt {}: {} ({})", i + 1, round.guess, hint);
    }

    if outcome.solved {
        tracing::info!("   Solved in {} attempts", outcome.attempts);
    } else {
        tracing::info!(
            "   Gave up after {} attempts, the secret was {}",
            outcome.attempts,
            outcome.secret
        );
    }
    Ok(())
}

fn demo_unique_words() {
    tracing::info!("3. Unique words");
    let text = "olá olá mundo mundo javascript é incrível javascript";
    tracing::info!("   Text: {:?}", text);
    tracing::info!("   Unique: {:?}", unique_words(text));
}

fn demo_factorial() {
    tracing::info!("4. Factorial");
    for n in [5, 0, -1] {
        match factorial(n) {
            Ok(value) => tracing::info!("   {}! = {}", n, value),
            Err(e) => tracing::warn!("   Error for {}: {}", n, e),
        }
    }
}

async fn demo_debounce(delay: Duration) {
    tracing::info!("5. Debounce");
    let debounced = Debouncer::new(
        |call: u32| tracing::info!("   🚀 Function executed (call #{})", call),
        delay,
    );

    tracing::info!("   Calling the debounced function three times...");
    for call in 1..=3 {
        debounced.call(call);
    }

    tokio::time::sleep(delay + Duration::from_millis(100)).await;
}

fn demo_memoize() -> Result<()> {
    tracing::info!("6. Memoization");

    fn slow_fibonacci(n: u64) -> u64 {
        if n <= 1 {
            n
        } else {
            slow_fibonacci(n - 1) + slow_fibonacci(n - 2)
        }
    }

    let fibonacci = Memoizer::new(|n: &u64| slow_fibonacci(*n));
    tracing::info!("   Fibonacci(10): {}", fibonacci.call(&10)?);
    tracing::info!("   Fibonacci(10) again: {}", fibonacci.call(&10)?);
    tracing::info!("   Hits: {}, misses: {}", fibonacci.hits(), fibonacci.misses());
    Ok(())
}

fn demo_products() {
    tracing::info!("7. Sorting products by price");
    let products = vec![
        Product::new("Notebook", 2500.0),
        Product::new("Mouse", 50.0),
        Product::new("Teclado", 150.0),
        Product::new("Monitor", 800.0),
    ];
    tracing::info!("   {:?}", sort_products_by_price(&products));
}

fn demo_sales() {
    tracing::info!("8. Grouping sales by customer");
    let sales = vec![
        Sale::new("João", 100.0),
        Sale::new("Maria", 200.0),
        Sale::new("João", 150.0),
        Sale::new("Pedro", 75.0),
        Sale::new("Maria", 300.0),
    ];
    tracing::info!("   {:?}", group_sales_by_customer(&sales));
}

fn demo_pairs() {
    tracing::info!("9. Pairs and objects");
    let pairs = vec![
        ("nome", json!("João")),
        ("idade", json!(30)),
        ("cidade", json!("São Paulo")),
    ];

    let object = pairs_to_object(pairs);
    tracing::info!("   Pairs to object: {}", json!(object));
    tracing::info!("   Object to pairs: {:?}", object_to_pairs(&object));
}
