//! Basic usage example for the AOC HTTP client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Create a client with custom base URL (for testing)
//! - Create a client with a custom timeout
//! - Fetch puzzle input and inspect the raw status
//!
//! Note: This example requires a valid AOC session cookie to run.
//! You can get your session cookie from your browser's cookies after logging in to adventofcode.com

use aoc_http_client::AocClient;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION")
        .expect("AOC_SESSION environment variable not set");

    println!("=== Example 1: Default Client ===");
    let client = AocClient::new()?;
    println!("✓ Client created with default base URL ({})", client.base_url());

    println!("\n=== Example 2: Custom Base URL ===");
    let _custom_client = AocClient::builder()
        .base_url("https://adventofcode.com")? // Could be a mock server URL for testing
        .build()?;
    println!("✓ Client created with custom base URL");

    println!("\n=== Example 3: Custom Timeout ===");
    let _configured_client = AocClient::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    println!("✓ Client created with custom timeout (5s)");

    let year = 2024;
    let day = 1;
    println!("\nFetching input for year {} day {}...", year, day);
    match client.fetch_input(year, day, &session).await {
        Ok(response) if response.is_success() => {
            println!("✓ Input fetched successfully");
            println!("Input length: {} bytes", response.body.len());
            println!(
                "First 100 chars: {}",
                &response.body.chars().take(100).collect::<String>()
            );
        }
        Ok(response) => {
            println!("✗ Server answered with status {}", response.status);
        }
        Err(e) => {
            println!("✗ Failed to fetch input: {}", e);
        }
    }

    Ok(())
}
