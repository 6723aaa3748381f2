use std::sync::Arc;

use jsonpoll::transport::HttpTransport;
use jsonpoll::{PollConfig, app, build_cli, cli, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let matches = build_cli().get_matches();
    let config = PollConfig::new(cli::url_from_matches(&matches));
    let transport = Arc::new(HttpTransport::new()?);

    app::run(config, transport).await?;

    Ok(())
}
