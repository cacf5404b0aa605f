use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::domain::{CommandId, NotificationId, NotificationKind, PageId, PanelId};
use uuid::Uuid;

use crate::{callback::Callback, reducer::merge_last_opened};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PageMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_opened: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_last_opened(mut self, at: DateTime<Utc>) -> Self {
        self.last_opened = Some(at);
        self
    }

    pub fn id(&self) -> PageId {
        PageId::from(self.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: CommandId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId(Uuid::new_v4().to_string()),
            message: message.into(),
            kind,
        }
    }
}

/// Descriptor of a side panel. The empty config means the panel is hidden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl PanelConfig {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.html.is_none() && self.script.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// One immutable snapshot of the editor shell's view-model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub is_loading: bool,
    pub current_page: Option<PageId>,
    pub current_page_meta: Option<PageMeta>,
    pub all_pages: Vec<PageMeta>,
    pub unsaved_changes: bool,

    pub show_page_navigator: bool,
    pub show_command_palette: bool,
    pub show_command_palette_context: Option<String>,
    pub recent_commands: BTreeMap<CommandId, DateTime<Utc>>,
    pub commands: Vec<Command>,

    pub notifications: Vec<Notification>,
    pub panels: BTreeMap<PanelId, PanelConfig>,

    pub show_filter_box: bool,
    #[serde(skip)]
    pub filter_box_on_select: Callback<FilterOption>,
    pub filter_box_place_holder: String,
    pub filter_box_options: Vec<FilterOption>,
    pub filter_box_label: String,
    pub filter_box_help_text: String,

    pub show_prompt: bool,
    pub prompt_default_value: Option<String>,
    pub prompt_message: Option<String>,
    /// Receives the entered text, or `None` when the prompt is cancelled.
    #[serde(skip)]
    pub prompt_callback: Option<Callback<Option<String>>>,

    pub show_confirm: bool,
    pub confirm_message: Option<String>,
    #[serde(skip)]
    pub confirm_callback: Option<Callback<bool>>,

    pub ui_options: BTreeMap<String, Value>,
}

impl AppState {
    pub fn page(&self, name: &str) -> Option<&PageMeta> {
        self.all_pages.iter().find(|page| page.name == name)
    }

    pub fn panel_visible(&self, id: &PanelId) -> bool {
        self.panels.get(id).is_some_and(|config| !config.is_empty())
    }

    /// Stamps `last_opened` on the page called `name`, leaving others as they are.
    pub fn with_page_opened(mut self, name: &str, at: DateTime<Utc>) -> Self {
        self.all_pages = self
            .all_pages
            .into_iter()
            .map(|page| {
                if page.name == name {
                    page.with_last_opened(at)
                } else {
                    page
                }
            })
            .collect();
        self
    }

    /// Installs a fresh page list, carrying over known `last_opened` stamps.
    pub fn with_pages_listed(mut self, pages: &[PageMeta]) -> Self {
        self.all_pages = merge_last_opened(&self.all_pages, pages);
        self
    }

    pub fn with_recent_command(mut self, command: &CommandId, at: DateTime<Utc>) -> Self {
        self.recent_commands.insert(command.clone(), at);
        self
    }

    pub fn with_notification(mut self, notification: &Notification) -> Self {
        self.notifications.push(notification.clone());
        self
    }

    pub fn without_notification(mut self, id: &NotificationId) -> Self {
        self.notifications.retain(|n| &n.id != id);
        self
    }

    pub fn with_panel(mut self, id: &PanelId, config: PanelConfig) -> Self {
        self.panels.insert(id.clone(), config);
        self
    }

    pub fn with_ui_option(mut self, key: &str, value: &Value) -> Self {
        self.ui_options.insert(key.to_string(), value.clone());
        self
    }
}
