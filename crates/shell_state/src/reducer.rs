use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use shared::domain::PageId;

use crate::{
    action::Action,
    callback::Callback,
    model::{AppState, PageMeta, PanelConfig},
};

/// Computes the snapshot that follows `state` once `action` is applied.
pub fn reduce(state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
    reduce_at(state, action, Utc::now())
}

/// Like [`reduce`], with `now` used wherever a transition records a time.
///
/// `state` is never modified. An [`Action::Unknown`] yields the very same
/// snapshot.
pub fn reduce_at(state: &Arc<AppState>, action: &Action, now: DateTime<Utc>) -> Arc<AppState> {
    let current = state.as_ref();
    let next = match action {
        Action::Unknown => return Arc::clone(state),
        Action::PageLoading { name } => AppState {
            is_loading: true,
            current_page: Some(name.clone()),
            ..current.clone()
        },
        Action::PageLoaded { meta } => AppState {
            is_loading: false,
            current_page: Some(PageId::from(meta.name.as_str())),
            current_page_meta: Some(meta.clone()),
            ..current.clone().with_page_opened(&meta.name, now)
        },
        Action::PageChanged => AppState {
            unsaved_changes: true,
            ..current.clone()
        },
        Action::PageSaved => AppState {
            unsaved_changes: false,
            ..current.clone()
        },
        Action::StartNavigate => AppState {
            show_page_navigator: true,
            ..current.clone()
        },
        Action::StopNavigate => AppState {
            show_page_navigator: false,
            ..current.clone()
        },
        Action::PagesListed { pages } => current.clone().with_pages_listed(pages),
        Action::ShowPalette { context } => AppState {
            show_command_palette: true,
            show_command_palette_context: context.clone(),
            ..current.clone()
        },
        Action::HidePalette => AppState {
            show_command_palette: false,
            show_command_palette_context: None,
            ..current.clone()
        },
        Action::CommandRun { command } => current.clone().with_recent_command(command, now),
        Action::UpdateCommands { commands } => AppState {
            commands: commands.clone(),
            ..current.clone()
        },
        Action::ShowNotification { notification } => {
            current.clone().with_notification(notification)
        }
        Action::DismissNotification { id } => current.clone().without_notification(id),
        Action::ShowPanel { id, config } => current.clone().with_panel(id, config.clone()),
        Action::HidePanel { id } => current.clone().with_panel(id, PanelConfig::default()),
        Action::ShowFilterBox {
            on_select,
            place_holder,
            options,
            label,
            help_text,
        } => AppState {
            show_filter_box: true,
            filter_box_on_select: on_select.clone(),
            filter_box_place_holder: place_holder.clone(),
            filter_box_options: options.clone(),
            filter_box_label: label.clone(),
            filter_box_help_text: help_text.clone(),
            ..current.clone()
        },
        // The label survives a hide and is only replaced by the next show.
        Action::HideFilterBox => AppState {
            show_filter_box: false,
            filter_box_on_select: Callback::noop(),
            filter_box_place_holder: String::new(),
            filter_box_options: Vec::new(),
            filter_box_help_text: String::new(),
            ..current.clone()
        },
        Action::ShowPrompt {
            default_value,
            message,
            callback,
        } => AppState {
            show_prompt: true,
            prompt_default_value: default_value.clone(),
            prompt_message: Some(message.clone()),
            prompt_callback: Some(callback.clone()),
            ..current.clone()
        },
        Action::HidePrompt => AppState {
            show_prompt: false,
            prompt_default_value: None,
            prompt_message: None,
            prompt_callback: None,
            ..current.clone()
        },
        Action::ShowConfirm { message, callback } => AppState {
            show_confirm: true,
            confirm_message: Some(message.clone()),
            confirm_callback: Some(callback.clone()),
            ..current.clone()
        },
        Action::HideConfirm => AppState {
            show_confirm: false,
            confirm_message: None,
            confirm_callback: None,
            ..current.clone()
        },
        Action::SetUiOption { key, value } => current.clone().with_ui_option(key, value),
    };
    Arc::new(next)
}

/// Builds the page list that replaces `previous` with `incoming`.
///
/// Order follows `incoming`. A page keeps the `last_opened` stamp recorded for
/// the same name in `previous`, when there is one. Repeated names keep their
/// first occurrence only.
pub fn merge_last_opened(previous: &[PageMeta], incoming: &[PageMeta]) -> Vec<PageMeta> {
    let known: HashMap<&str, DateTime<Utc>> = previous
        .iter()
        .filter_map(|page| page.last_opened.map(|at| (page.name.as_str(), at)))
        .collect();

    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(incoming.len());
    for page in incoming {
        if !seen.insert(page.name.as_str()) {
            continue;
        }
        let mut page = page.clone();
        if let Some(at) = known.get(page.name.as_str()) {
            page.last_opened = Some(*at);
        }
        merged.push(page);
    }
    merged
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
