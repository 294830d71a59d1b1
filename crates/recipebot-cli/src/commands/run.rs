//! The `run` command: wire the collaborators from config and poll the
//! chat transport, spawning one task per inbound event.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use recipebot_core::{
    Config, Dispatcher, HttpRecipeService, MealDbClient, MyMemoryTranslator, TelegramTransport,
};
use tracing::{info, warn};

/// Back-off after a failed poll before retrying.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

pub fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path.unwrap_or_else(Config::default_path);
    let config = Config::load_from(&path)?;
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_bot(config));
    Ok(())
}

async fn run_bot(config: Config) {
    let transport = Arc::new(TelegramTransport::new(
        config.telegram.base_url.clone(),
        config.telegram.token.clone(),
    ));
    let dispatcher = Arc::new(Dispatcher::new(
        transport.clone(),
        Arc::new(HttpRecipeService::new(
            config.recipe_service.base_url.clone(),
            config.recipe_service.api_key.clone(),
        )),
        Arc::new(MyMemoryTranslator::new(config.translate.base_url.clone())),
        Arc::new(MealDbClient::new(config.random_recipe.base_url.clone())),
    ));

    info!("recipebot started, polling for updates");
    let mut offset = 0i64;
    loop {
        match transport
            .get_updates(offset, config.telegram.poll_timeout_secs)
            .await
        {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    let Some(event) = update.event else {
                        continue;
                    };
                    let dispatcher = dispatcher.clone();
                    // Per-session ordering is enforced inside the
                    // dispatcher; tasks only fan out across users.
                    tokio::spawn(async move {
                        if let Err(err) = dispatcher.handle(event).await {
                            warn!(error = %err, "event handling failed");
                        }
                    });
                }
            }
            Err(err) => {
                warn!(error = %err, "getUpdates failed, backing off");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
            }
        }
    }
}
