//! `.env` loading through `RelayConfig::load_with_dotenv`.
//!
//! Kept in its own test binary: dotenvy writes straight into the process
//! environment, outside what `figment::Jail` restores.

use figment::Jail;
use relay_config::RelayConfig;
use relay_core::SpyMode;

#[test]
fn dotenv_values_reach_the_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "RELAY_MATCHER__SPY_MODE=pass_through\nRELAY_MATCHER__MAX_LISTED_CALLS=4\n",
        )?;

        let config = RelayConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.matcher.spy_mode, SpyMode::PassThrough);
        assert_eq!(config.matcher.max_listed_calls, 4);
        Ok(())
    });
}
