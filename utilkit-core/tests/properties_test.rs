//! Integration tests for the public utility surface
//!
//! Each test drives one utility through the crate root exports with the
//! reference sample inputs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use utilkit_core::{
    factorial, group_sales_by_customer, is_valid_date, object_to_pairs, pairs_to_object,
    sort_products_by_price, unique_words, Debouncer, GameConfig, GuessingGame, Memoizer,
    Product, RandomGuesses, Sale, UtilError,
};

#[test]
fn test_date_samples() {
    let cases = vec![
        ((29, 2, 2024), true),
        ((29, 2, 2023), false),
        ((31, 4, 2024), false),
        ((15, 7, 2024), true),
        ((0, 1, 2024), false),
    ];

    for ((day, month, year), expected) in cases {
        assert_eq!(
            is_valid_date(day, month, year),
            expected,
            "Wrong answer for {}/{}/{}",
            day,
            month,
            year
        );
    }
}

#[test]
fn test_guessing_game_always_terminates() {
    let config = GameConfig::default();
    for seed in 0..50 {
        let game = GuessingGame::new(((seed * 37) % 100 + 1) as u32, config).unwrap();
        let outcome = game.play(&mut RandomGuesses::seeded(seed));
        assert!(outcome.attempts <= config.max_attempts + 1);
    }
}

#[test]
fn test_unique_words_sample() {
    assert_eq!(
        unique_words("olá olá mundo mundo javascript é incrível javascript"),
        vec!["olá", "mundo", "javascript", "é", "incrível"]
    );
}

#[test]
fn test_factorial_samples() {
    assert_eq!(factorial(5).unwrap(), 120);
    assert_eq!(factorial(0).unwrap(), 1);
    assert!(matches!(factorial(-1), Err(UtilError::NegativeFactorial(-1))));
}

#[test]
fn test_memoizer_counts_target_calls() {
    let calls = AtomicUsize::new(0);
    let memo = Memoizer::new(|(a, b): &(u32, String)| {
        calls.fetch_add(1, Ordering::SeqCst);
        format!("{a}-{b}")
    });

    let args = (1, "x".to_string());
    assert_eq!(memo.call(&args).unwrap(), "1-x");
    assert_eq!(memo.call(&args).unwrap(), "1-x");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    memo.call(&(2, "x".to_string())).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_debounce_uses_last_arguments() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let debouncer = Debouncer::new(
        move |msg: &'static str| sink.lock().unwrap().push(msg),
        Duration::from_millis(100),
    );

    for msg in ["first", "second", "third"] {
        debouncer.call(msg);
    }

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(*seen.lock().unwrap(), vec!["third"]);
}

#[test]
fn test_product_sorting_sample() {
    let products = vec![
        Product::new("Notebook", 2500.0),
        Product::new("Mouse", 50.0),
        Product::new("Teclado", 150.0),
        Product::new("Monitor", 800.0),
    ];
    assert_eq!(
        sort_products_by_price(&products),
        vec!["Mouse", "Teclado", "Monitor", "Notebook"]
    );
}

#[test]
fn test_sales_grouping_sample() {
    let sales = vec![
        Sale::new("João", 100.0),
        Sale::new("Maria", 200.0),
        Sale::new("João", 150.0),
        Sale::new("Pedro", 75.0),
        Sale::new("Maria", 300.0),
    ];

    let totals = group_sales_by_customer(&sales);
    let expected = pairs_to_object([("João", 250.0), ("Maria", 500.0), ("Pedro", 75.0)]);
    assert_eq!(totals, expected);
}

#[test]
fn test_pairs_round_trip_without_duplicates() {
    let pairs = vec![("x", 1), ("a", 2), ("m", 3)];
    let object = pairs_to_object(pairs.clone());
    let back = object_to_pairs(&object);

    let mut expected: Vec<(String, i32)> =
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    expected.sort();
    assert_eq!(back, expected);
}
