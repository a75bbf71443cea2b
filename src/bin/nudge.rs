use anyhow::Result;
use nudge::cli::{self, actions};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = cli::start()?;

    // Handle the action
    actions::auth::handle(action, &globals).await?;

    Ok(())
}
