//! Provider switching example: the same conversation code against any provider.
//!
//! This example demonstrates:
//! - Selecting the provider at runtime by name
//! - Listing which providers have credentials configured
//! - Sending an identical message list through `ChatService::send`
//!
//! # Running
//!
//! ```bash
//! export CHAT_PROVIDER=groq
//! export GROQ_API_KEY="gsk_..."
//! cargo run --example provider_switching
//! ```

use multi_chat::{model_description, ChatConfig, ChatService, Message, Provider};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let name = std::env::var("CHAT_PROVIDER").unwrap_or_else(|_| "openai".to_string());
    let provider: Provider = name.parse()?;

    let service = ChatService::new(ChatConfig::from_env()?);
    let configured: Vec<String> = service
        .available_providers()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Configured providers: {}", configured.join(", "));

    println!("\nModels for {provider}:");
    for model in provider.available_models() {
        match model_description(model) {
            Some(description) => println!("  {model} ({description})"),
            None => println!("  {model}"),
        }
    }

    let conversation_id = Uuid::new_v4();
    let messages = vec![
        Message::system(conversation_id, "You are a helpful assistant. Be concise."),
        Message::user(conversation_id, "What is 2 + 2? Answer with just the number."),
    ];

    println!("\nSending request to {provider} ({})...", provider.default_model());
    let reply = service
        .send(&messages, provider, provider.default_model())
        .await?;
    println!("Response: {reply}");

    Ok(())
}
