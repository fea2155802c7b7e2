use anyhow::Result;
use dotenv::dotenv;
use homework_bot_core::{PracticumClient, TelegramClient};
use log::{error, info};
use status_notifier_rust::{shutdown_signal, Config, PollLoop, PollState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting homework status notifier...");

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration, exiting: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Config: endpoint={} chat_id={} from_date={} notify_on_errors={}",
        cfg.practicum_endpoint, cfg.telegram_chat_id, cfg.from_date, cfg.notify_on_errors
    );

    let practicum = PracticumClient::new(
        cfg.practicum_endpoint.clone(),
        cfg.practicum_token.clone(),
    );
    let telegram = TelegramClient::new(
        cfg.telegram_api_base_url.clone(),
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id.clone(),
    );

    let poller = PollLoop::new(practicum, telegram, PollState::starting_at(cfg.from_date))
        .with_error_reports(cfg.notify_on_errors);

    tokio::select! {
        _ = poller.run() => {}
        _ = shutdown_signal() => {}
    }

    Ok(())
}
