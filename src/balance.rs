use crate::config::TrackerConfig;
use crate::errors::{Result, TrackerError};
use crate::input::parse_amount;
use crate::models::{GeneralView, InputValue};
use crate::render::{general_fill, to_fixed};
use crate::storage::{general_balance_key, KeyValueStore};
use tracing::warn;

/// Overwrites the stored balance for `site` with the validated input.
pub fn set_balance(
    store: &mut dyn KeyValueStore,
    config: &TrackerConfig,
    site: &str,
    input: &InputValue,
) -> Result<GeneralView> {
    if !config.has_site(site) {
        return Err(TrackerError::UnknownSite(site.to_owned()));
    }

    let balance = parse_amount(input)?;
    store.set(&general_balance_key(site), balance.to_string());

    Ok(render_bar(config, site, balance))
}

pub fn render_bar(config: &TrackerConfig, site: &str, balance: f64) -> GeneralView {
    GeneralView {
        site: site.to_owned(),
        balance_label: to_fixed(balance, 2),
        target_label: to_fixed(config.general_target, 2),
        fill: general_fill(balance, config.general_target),
    }
}

pub fn stored_balance(store: &dyn KeyValueStore, site: &str) -> f64 {
    let key = general_balance_key(site);
    let Some(raw) = store.get(&key) else {
        return 0.0;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!("stored balance under {key} is not a number: {raw:?}");
            0.0
        }
    }
}

pub fn load_all(store: &dyn KeyValueStore, config: &TrackerConfig) -> Vec<GeneralView> {
    config
        .sites
        .iter()
        .map(|site| render_bar(config, site, stored_balance(store, site)))
        .collect()
}
