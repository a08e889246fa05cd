use crate::balance;
use crate::daily;
use crate::errors::AppError;
use crate::models::{
    ClickRequest, DailyBarView, GeneralView, PanelResponse, ProgressKind, ValueRequest,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::widget::{PanelAction, PanelEvent};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let balances = balance::load_all(&data.store, &state.config);
    Html(render_index(&state.config, &balances).into_html())
}

pub async fn get_balances(State(state): State<AppState>) -> Json<Vec<GeneralView>> {
    let data = state.data.lock().await;
    Json(balance::load_all(&data.store, &state.config))
}

pub async fn set_balance(
    State(state): State<AppState>,
    Path(site): Path<String>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<GeneralView>, AppError> {
    let mut data = state.data.lock().await;
    let view = balance::set_balance(&mut data.store, &state.config, &site, &payload.value)?;
    persist_data(&state.data_path, &data.store).await?;

    info!(site = %site, balance = %view.balance_label, "balance updated");
    Ok(Json(view))
}

pub async fn open_goals(State(state): State<AppState>) -> Result<Json<PanelResponse>, AppError> {
    apply_panel_event(&state, PanelEvent::OpenClicked).await
}

pub async fn close_goals(State(state): State<AppState>) -> Result<Json<PanelResponse>, AppError> {
    apply_panel_event(&state, PanelEvent::CloseClicked).await
}

pub async fn click_goals(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<PanelResponse>, AppError> {
    apply_panel_event(
        &state,
        PanelEvent::WindowClicked {
            target: payload.target,
        },
    )
    .await
}

pub async fn record_progress(
    State(state): State<AppState>,
    Path((site, kind)): Path<(String, String)>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<DailyBarView>, AppError> {
    let kind: ProgressKind = kind.parse()?;
    let mut data = state.data.lock().await;
    if data.panel.is_none() {
        return Err(panel_disabled());
    }

    let view = daily::record_progress(&mut data.store, &state.config, kind, &site, &payload.value)?;
    persist_data(&state.data_path, &data.store).await?;

    info!(site = %site, kind = %kind, current = %view.current_label, "daily progress recorded");
    Ok(Json(view))
}

async fn apply_panel_event(
    state: &AppState,
    event: PanelEvent,
) -> Result<Json<PanelResponse>, AppError> {
    let mut guard = state.data.lock().await;
    let data = &mut *guard;
    let panel = data.panel.as_mut().ok_or_else(panel_disabled)?;

    let action = panel.handle(&event);
    let visible = panel.is_visible();
    debug!(?event, ?action, "goals panel event");

    let sites = if action == PanelAction::Opened {
        let views = daily::check_and_load(&mut data.store, &state.config, &mut data.rng, Local::now())?;
        persist_data(&state.data_path, &data.store).await?;
        views
    } else {
        Vec::new()
    };

    Ok(Json(PanelResponse { visible, sites }))
}

fn panel_disabled() -> AppError {
    AppError::conflict("daily goals panel is not available")
}
