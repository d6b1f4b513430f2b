use anyhow::Context;
use fb_config::BridgeConfig;

use crate::cli::GlobalFlags;

/// Load, override from flags, and validate the configuration.
///
/// Runs before any network call so missing values fail fast. `.env` must
/// already be loaded, see [`fb_config::load_dotenv`].
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BridgeConfig> {
    let config = BridgeConfig::load(flags.config.as_deref())
        .context("failed to load configuration")?;
    let config = apply_flags(config, flags);
    config.validate().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn apply_flags(mut config: BridgeConfig, flags: &GlobalFlags) -> BridgeConfig {
    if let Some(encoding) = flags.encoding {
        config.facts.encoding = encoding;
    }
    if flags.insecure {
        config.transport.accept_invalid_certs = true;
    }
    config
}

#[cfg(test)]
mod tests {
    use fb_core::PayloadEncoding;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            config: None,
            encoding: None,
            insecure: false,
        }
    }

    #[test]
    fn no_flags_keep_config() {
        let config = apply_flags(BridgeConfig::default(), &flags());
        assert_eq!(config.facts.encoding, PayloadEncoding::Form);
        assert!(!config.transport.accept_invalid_certs);
    }

    #[test]
    fn flags_override_config() {
        let flags = GlobalFlags {
            encoding: Some(PayloadEncoding::Json),
            insecure: true,
            ..flags()
        };
        let config = apply_flags(BridgeConfig::default(), &flags);
        assert_eq!(config.facts.encoding, PayloadEncoding::Json);
        assert!(config.transport.accept_invalid_certs);
    }

    #[test]
    fn insecure_flag_never_turns_validation_back_on() {
        let mut base = BridgeConfig::default();
        base.transport.accept_invalid_certs = true;
        let config = apply_flags(base, &flags());
        assert!(config.transport.accept_invalid_certs);
    }
}
