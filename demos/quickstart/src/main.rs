//! Unsend quickstart
//!
//! Lists the sending domains of the team, then sends a test email when a
//! sender and a recipient are given:
//!
//! ```text
//! UNSEND_API_KEY=us_... cargo run -p unsend-quickstart -- hello@acme.dev jane@example.com
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use unsend::prelude::*;

/// One line per domain: name, status and region.
async fn domain_report<C: HttpClient>(client: &Unsend<C>) -> Result<Vec<String>> {
    let domains = client.domains().list().await?;
    Ok(domains
        .iter()
        .map(|domain| format!("{:<32} {:<10} {}", domain.name, domain.status, domain.region))
        .collect())
}

/// Send a plain test email and return its id.
async fn send_test_email<C: HttpClient>(client: &Unsend<C>, from: &str, to: &str) -> Result<String> {
    let mut email = SendEmailRequest::new(from, [to]);
    email.subject = "Hello from unsend".to_string();
    email.text = "This is a test email sent with the unsend Rust client.".to_string();
    email.html = "<p>This is a test email sent with the <code>unsend</code> Rust client.</p>".to_string();

    let sent = client.emails().send(&email).await?;
    Ok(sent.email_id)
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = match Unsend::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Set UNSEND_API_KEY (and optionally UNSEND_BASE_URL) to run this demo.");
            return Err(err);
        }
    };
    println!("Unsend API at {}", client.config().base_url());

    println!("\n=== Domains ===");
    for line in domain_report(&client).await? {
        println!("{line}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [from, to] = args.as_slice() {
        println!("\n=== Sending test email ===");
        let email_id = send_test_email(&client, from, to).await?;
        println!("queued email {email_id}");

        let email = client.emails().get(&GetEmailRequest::new(&email_id)).await?;
        for event in &email.email_events {
            println!("{} {}", event.created_at, event.status);
        }
    }

    Ok(())
}
