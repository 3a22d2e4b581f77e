//! Calls a running emotion detector server
//!
//! Start the server first: `cargo run -p emotion-server`

use reqwest::Client;

const SERVER_URL: &str = "http://localhost:5003";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    let statements = [
        "I love my new job, everyone is so welcoming",
        "I am really mad about this",
        "",
    ];

    for (i, text) in statements.iter().enumerate() {
        println!("{}. Detect emotion in {text:?}:", i + 2);
        let resp = client
            .get(format!("{SERVER_URL}/emotionDetector"))
            .query(&[("textToAnalyze", text)])
            .send()
            .await?;
        println!("Status: {}", resp.status());
        println!("Body: {}", resp.text().await?);
        println!();
    }

    Ok(())
}
