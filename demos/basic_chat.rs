//! Basic chat example: one conversation, a few turns, history kept in memory.
//!
//! This example shows how to:
//! - Load credentials and parameters from the environment
//! - Create a conversation for a provider's default model
//! - Send turns and read back the stored history
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example basic_chat
//! ```

use multi_chat::{ChatConfig, ChatService, ChatSession, Provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ChatConfig::from_env()?;
    let provider = Provider::OpenAI;
    if !config.credentials.is_configured(provider) {
        anyhow::bail!("{} must be set", provider.descriptor().env_var);
    }

    let mut session = ChatSession::new(ChatService::new(config));
    let conversation_id = session
        .store_mut()
        .create_conversation(provider, provider.default_model())?
        .id();

    for prompt in [
        "Suggest a name for a grey cat.",
        "Make it shorter.",
    ] {
        println!("> {prompt}");
        match session.send_turn(conversation_id, prompt, None).await {
            Ok(reply) => println!("{}\n", reply.content),
            Err(e) => println!("Error: {}\n", e.user_message()),
        }
    }

    let conversation = session.store().conversation(conversation_id)?;
    println!(
        "Conversation \"{}\" ({} messages)",
        conversation.title(),
        session.store().message_count(conversation_id)
    );

    Ok(())
}
