use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Where credentials and region come from. `None` falls through to the
/// default provider chain.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Build an `SdkConfig` from an optional region and named profile.
pub async fn load_sdk_config(session: &SessionConfig) -> SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &session.region {
        builder = builder.region(Region::new(region.clone()));
    }
    if let Some(profile) = &session.profile {
        builder = builder.profile_name(profile);
    }

    let config = builder.load().await;
    tracing::debug!(
        region = ?config.region().map(ToString::to_string),
        profile = ?session.profile,
        "loaded AWS config"
    );
    config
}
