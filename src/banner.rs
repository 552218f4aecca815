// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _   _  ____
| | | |/ ___|
| |_| | |  _
|  _  | |_| |_
|_| |_|\____(_)

    Portfolio & AI Synergy Check
"#;
    println!("{}", banner);
}
