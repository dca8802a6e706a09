mod config;
mod sources;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use briefing::BriefBuilder;
use chrono::{FixedOffset, Utc};
use kakao::KakaoClient;
use notify::{
    CredentialStore, DeliveryEngine, DeliveryPolicy, EnvCredential, FileTokenStore, KakaoTransport,
    RunReport, Transport,
};
use rss::{FeedFetcher, RssClient};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use translate::Translator;

use crate::config::{AppConfig, Mode};
use crate::sources::load_sources;

/// Asia/Seoul, which has no DST
const KST_OFFSET_SECS: i32 = 9 * 3600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("morning-brief v{}", env!("APP_VERSION"));

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!("Running in {} mode", config.mode);

    let sources = load_sources(&config.sources_path)
        .await
        .context("Failed to load feed sources")?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let translator = Translator::new(config.translation.clone(), http.clone());
    let mut builder = BriefBuilder::new(
        RssClient::with_client(http.clone()),
        sources,
        config.profile(),
        translator,
    );

    let kst = FixedOffset::east_opt(KST_OFFSET_SECS).context("Invalid KST offset")?;
    let kakao = Arc::new(KakaoClient::new(
        http,
        config.rest_api_key.clone(),
        config.client_secret.clone(),
    ));
    let transport = KakaoTransport::new(Arc::clone(&kakao));
    let policy = config.delivery_policy();

    let report = match config.mode {
        Mode::Interactive => {
            let store = FileTokenStore::new(kakao, &config.token_file);
            brief_and_deliver(transport, store, policy, &mut builder, kst).await?
        }
        Mode::Ci => {
            let refresh_token = config.refresh_token.clone().unwrap_or_default();
            let store = EnvCredential::new(kakao, refresh_token);
            brief_and_deliver(transport, store, policy, &mut builder, kst).await?
        }
    };

    if !report.skipped.is_empty() {
        tracing::warn!(
            "Skipped items: {:?}",
            report.skipped.iter().map(|(i, _)| *i).collect::<Vec<_>>()
        );
    }
    Ok(())
}

/// Obtain the credential, then build and send the brief.
///
/// The credential comes first so a bad token file or refresh secret fails
/// before any feed is fetched.
async fn brief_and_deliver<T, C, F>(
    transport: T,
    credentials: C,
    policy: DeliveryPolicy,
    builder: &mut BriefBuilder<F>,
    tz: FixedOffset,
) -> anyhow::Result<RunReport>
where
    T: Transport,
    C: CredentialStore,
    F: FeedFetcher,
{
    let mut token = credentials
        .load()
        .await
        .context("Failed to obtain Kakao access token")?;

    let brief = builder.build(Utc::now().with_timezone(&tz)).await;

    let mut engine = DeliveryEngine::new(transport, credentials, policy);
    let report = engine
        .run(&mut token, &brief.header, &brief.item_messages())
        .await?;
    Ok(report)
}
