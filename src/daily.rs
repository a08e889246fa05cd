use crate::config::{TrackerConfig, RUB_GOAL_MAX, RUB_GOAL_MIN, TASK_GOAL_MAX, TASK_GOAL_MIN};
use crate::errors::{Result, TrackerError};
use crate::input::parse_amount;
use crate::models::{
    parse_record, serialize_record, DailyBarView, DailySiteView, GoalRecord, InputValue,
    ProgressKind, ProgressRecord,
};
use crate::render::{daily_fill, kind_label};
use crate::storage::{daily_goals_key, daily_last_update_key, daily_progress_key, KeyValueStore};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use ring::rand::{SecureRandom, SystemRandom};
use tracing::{debug, info, warn};

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> Result<f64>;
}

/// System entropy via `ring`.
pub struct SystemEntropy {
    rng: SystemRandom,
}

impl SystemEntropy {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemEntropy {
    fn next_unit(&mut self) -> Result<f64> {
        let mut bytes = [0u8; 8];
        self.rng.fill(&mut bytes).map_err(|_| TrackerError::Entropy)?;
        // 53 random mantissa bits scaled into [0, 1).
        let bits = u64::from_le_bytes(bytes) >> 11;
        Ok(bits as f64 / (1u64 << 53) as f64)
    }
}

/// Inclusive draw: `floor(r * (max - min + 1)) + min`.
pub fn random_int(rng: &mut dyn RandomSource, min: f64, max: f64) -> Result<i64> {
    let min = min.ceil();
    let max = max.floor();
    let unit = rng.next_unit()?;
    Ok((unit * (max - min + 1.0)).floor() as i64 + min as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Stale,
    Current,
}

/// Compares local calendar dates only; absent or unreadable stamps are stale.
pub fn day_state(last_update: Option<&str>, now: DateTime<Local>) -> DayState {
    let Some(raw) = last_update else {
        return DayState::Stale;
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(stamp) if stamp.with_timezone(&Local).date_naive() == now.date_naive() => {
            DayState::Current
        }
        Ok(_) => DayState::Stale,
        Err(err) => {
            warn!("unreadable daily timestamp {raw:?}: {err}");
            DayState::Stale
        }
    }
}

pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn draw_goal(rng: &mut dyn RandomSource) -> Result<GoalRecord> {
    Ok(GoalRecord {
        rub: random_int(rng, RUB_GOAL_MIN as f64, RUB_GOAL_MAX as f64)?,
        tasks: random_int(rng, TASK_GOAL_MIN as f64, TASK_GOAL_MAX as f64)?,
    })
}

fn load_records(
    store: &dyn KeyValueStore,
    site: &str,
) -> Option<Result<(GoalRecord, ProgressRecord)>> {
    let goals_key = daily_goals_key(site);
    let progress_key = daily_progress_key(site);
    let goals = store.get(&goals_key)?;
    let progress = store.get(&progress_key)?;

    Some(
        parse_record::<GoalRecord>(&goals_key, &goals).and_then(|goal| {
            parse_record::<ProgressRecord>(&progress_key, &progress).map(|p| (goal, p))
        }),
    )
}

/// Runs the day check for one site and returns its goal and progress.
pub fn refresh_site(
    store: &mut dyn KeyValueStore,
    rng: &mut dyn RandomSource,
    site: &str,
    now: DateTime<Local>,
) -> Result<(GoalRecord, ProgressRecord)> {
    let last_update = store.get(&daily_last_update_key(site));

    if day_state(last_update.as_deref(), now) == DayState::Current {
        match load_records(store, site) {
            Some(Ok(records)) => {
                debug!(site, "daily goals still current");
                return Ok(records);
            }
            Some(Err(err)) => warn!(site, "regenerating daily goals: {err}"),
            None => warn!(site, "regenerating daily goals: stored records missing"),
        }
    }

    let goal = draw_goal(rng)?;
    let progress = ProgressRecord::default();
    let goals_key = daily_goals_key(site);
    let progress_key = daily_progress_key(site);
    let goals_raw = serialize_record(&goals_key, &goal)?;
    let progress_raw = serialize_record(&progress_key, &progress)?;
    store.set(&goals_key, goals_raw);
    store.set(&progress_key, progress_raw);
    store.set(&daily_last_update_key(site), format_timestamp(now));
    info!(site, rub = goal.rub, tasks = goal.tasks, "generated new daily goals");

    Ok((goal, progress))
}

pub fn render_bar(site: &str, kind: ProgressKind, current: f64, goal: f64) -> DailyBarView {
    DailyBarView {
        site: site.to_owned(),
        kind,
        current_label: kind_label(kind, current),
        goal_label: kind_label(kind, goal),
        fill: daily_fill(current, goal),
    }
}

fn site_view(site: &str, goal: &GoalRecord, progress: &ProgressRecord) -> DailySiteView {
    let bar = |kind| render_bar(site, kind, progress.get(kind), goal.get(kind) as f64);
    DailySiteView {
        site: site.to_owned(),
        rub: bar(ProgressKind::Rub),
        tasks: bar(ProgressKind::Tasks),
    }
}

pub fn check_and_load(
    store: &mut dyn KeyValueStore,
    config: &TrackerConfig,
    rng: &mut dyn RandomSource,
    now: DateTime<Local>,
) -> Result<Vec<DailySiteView>> {
    config
        .sites
        .iter()
        .map(|site| {
            let (goal, progress) = refresh_site(store, rng, site, now)?;
            Ok(site_view(site, &goal, &progress))
        })
        .collect()
}

/// Adds the validated input to today's progress of one kind.
pub fn record_progress(
    store: &mut dyn KeyValueStore,
    config: &TrackerConfig,
    kind: ProgressKind,
    site: &str,
    input: &InputValue,
) -> Result<DailyBarView> {
    if !config.has_site(site) {
        return Err(TrackerError::UnknownSite(site.to_owned()));
    }

    let value = parse_amount(input)?;
    let (goal, mut progress) =
        load_records(store, site).ok_or_else(|| TrackerError::GoalsNotLoaded(site.to_owned()))??;

    if !(progress.get(kind) + value).is_finite() {
        return Err(TrackerError::InvalidInput);
    }

    let current = progress.add(kind, value);
    let progress_key = daily_progress_key(site);
    let raw = serialize_record(&progress_key, &progress)?;
    store.set(&progress_key, raw);

    Ok(render_bar(site, kind, current, goal.get(kind) as f64))
}
