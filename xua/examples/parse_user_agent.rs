//! Example demonstrating identity string parsing
//!
//! This example parses a sample `X-User-Agent` value, prints the extracted
//! fields and the re-formatted header, and shows how the grammar policies change
//! what is accepted.

use std::env;
use xua::{AppNamePolicy, Grammar, HEADER_NAME, OsFieldPolicy, UserAgent, parse};

fn print_user_agent(ua: &UserAgent) {
    println!("  App name:     {}", ua.app_name());
    println!("  App version:  {}", ua.app_version());
    println!("  Device model: {}", ua.device_model());
    println!("  OS name:      {}", ua.os_name());
    println!("  OS version:   {}", ua.os_version());
    println!("  Retailer:     {}", ua.trailing());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== {HEADER_NAME} Parser Example ===\n");

    // Example 1: Parse a header value and format it back
    println!("Example 1: Parsing a header value");
    println!("---------------------------------");

    let header = "jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)";
    let ua = parse(header)?;

    println!("Input: {header}");
    print_user_agent(&ua);
    println!("  Formatted:    {ua}");
    println!("  JSON:         {}", serde_json::to_string(&ua)?);

    // Example 2: Rejections
    println!("\n\nExample 2: Rejected header values");
    println!("---------------------------------");

    let rejected = [
        "",
        "App//1.0.0 (Device, OS 1, X)",
        "App/1.0.0.0 (Device, OS 1, X)",
        "App/1.0.0 (Device,, OS 1, X)",
        "App/1.0.0 (Device, OS hoge, X)",
        "App/1.0.0 (Device, OS 1, X))",
    ];
    for input in rejected {
        match parse(input) {
            Ok(ua) => println!("  unexpectedly accepted: {ua}"),
            Err(e) => println!("  {e}"),
        }
    }

    // Example 3: Grammar policies
    println!("\n\nExample 3: Grammar policies");
    println!("---------------------------");

    let detailed = "App-1/0.1.1 (Device-Model, Windows 10 Pro 10.0 (Build 19045), Other)";
    let combined = Grammar::new().with_os_field(OsFieldPolicy::Combined);
    println!("Input: {detailed}");
    println!("  default grammar:  {:?}", parse(detailed).map(|ua| ua.to_string()));
    println!(
        "  combined OS field: {:?}",
        combined.parse(detailed).map(|ua| ua.to_string())
    );

    let word_like = Grammar::new().with_app_name(AppNamePolicy::WordLike);
    let hyphenated = "App-1/10 (Device-Model, Windows 10, Other)";
    println!("Input: {hyphenated}");
    println!("  word-like app name: {:?}", word_like.parse(hyphenated).map(|ua| ua.to_string()));

    // Example 4: Building a header value from parts
    println!("\n\nExample 4: Building a header value");
    println!("----------------------------------");

    let built = UserAgent::new("SCT", "1.0.0", "Toshiba T380", "Windows", "11", "Aeon")?;
    println!("  {HEADER_NAME}: {}", built.to_header_value());

    // Example 5: Parse the header value given on the command line (if provided)
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("\n\nTip: Run this example with a header value to see parsing in action!");
        println!("Example:");
        println!(
            "  cargo run --example parse_user_agent --features serde -- \"ISM/3.2.1 (Dell XPS 13, Windows 10, Aeon)\""
        );
    } else {
        println!("\n\nExample 5: Parsing a command-line value");
        println!("---------------------------------------");
        let input = args.join(" ");
        match parse(&input) {
            Ok(ua) => print_user_agent(&ua),
            Err(e) => println!("  Error parsing header value: {e}"),
        }
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
