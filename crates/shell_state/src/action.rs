//! Actions dispatched by UI components.
//!
//! On the wire an action is a JSON object tagged by `type`, e.g.
//! `{"type": "page-loading", "name": "todo"}`. Any `type` this shell does not
//! know decodes to [`Action::Unknown`]. Callback payloads cannot cross the
//! wire and decode as no-ops.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::domain::{CommandId, NotificationId, PageId, PanelId};

use crate::{
    callback::Callback,
    model::{Command, FilterOption, Notification, PageMeta, PanelConfig},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Action {
    PageLoading {
        name: PageId,
    },
    PageLoaded {
        meta: PageMeta,
    },
    PageChanged,
    PageSaved,
    StartNavigate,
    StopNavigate,
    PagesListed {
        pages: Vec<PageMeta>,
    },
    ShowPalette {
        #[serde(default)]
        context: Option<String>,
    },
    HidePalette,
    CommandRun {
        command: CommandId,
    },
    UpdateCommands {
        commands: Vec<Command>,
    },
    ShowNotification {
        notification: Notification,
    },
    DismissNotification {
        id: NotificationId,
    },
    ShowPanel {
        id: PanelId,
        config: PanelConfig,
    },
    HidePanel {
        id: PanelId,
    },
    #[serde(rename = "show-filterbox")]
    ShowFilterBox {
        #[serde(skip)]
        on_select: Callback<FilterOption>,
        #[serde(default)]
        place_holder: String,
        #[serde(default)]
        options: Vec<FilterOption>,
        #[serde(default)]
        label: String,
        #[serde(default)]
        help_text: String,
    },
    #[serde(rename = "hide-filterbox")]
    HideFilterBox,
    ShowPrompt {
        #[serde(default)]
        default_value: Option<String>,
        message: String,
        #[serde(skip)]
        callback: Callback<Option<String>>,
    },
    HidePrompt,
    ShowConfirm {
        message: String,
        #[serde(skip)]
        callback: Callback<bool>,
    },
    HideConfirm,
    SetUiOption {
        key: String,
        value: Value,
    },
    #[serde(other)]
    Unknown,
}

impl Action {
    /// The `type` discriminant as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::PageLoading { .. } => "page-loading",
            Action::PageLoaded { .. } => "page-loaded",
            Action::PageChanged => "page-changed",
            Action::PageSaved => "page-saved",
            Action::StartNavigate => "start-navigate",
            Action::StopNavigate => "stop-navigate",
            Action::PagesListed { .. } => "pages-listed",
            Action::ShowPalette { .. } => "show-palette",
            Action::HidePalette => "hide-palette",
            Action::CommandRun { .. } => "command-run",
            Action::UpdateCommands { .. } => "update-commands",
            Action::ShowNotification { .. } => "show-notification",
            Action::DismissNotification { .. } => "dismiss-notification",
            Action::ShowPanel { .. } => "show-panel",
            Action::HidePanel { .. } => "hide-panel",
            Action::ShowFilterBox { .. } => "show-filterbox",
            Action::HideFilterBox => "hide-filterbox",
            Action::ShowPrompt { .. } => "show-prompt",
            Action::HidePrompt => "hide-prompt",
            Action::ShowConfirm { .. } => "show-confirm",
            Action::HideConfirm => "hide-confirm",
            Action::SetUiOption { .. } => "set-ui-option",
            Action::Unknown => "unknown",
        }
    }
}
