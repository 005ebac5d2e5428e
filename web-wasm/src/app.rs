//! Main application component and shared state

use crate::components::{
    add_item::AddItemForm, bought_dialog::BoughtDialog, edit_dialog::EditDialog, header::Header,
    history_panel::HistoryPanel, item_list::ItemList, month_summary::MonthSummary,
    notice::NoticeToast, toolbar::Toolbar,
};
use crate::storage::{BrowserClock, BrowserStorage};
use crate::theme::ThemeContext;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use shopping_list_common::{ItemId, ListStore, LoadOptions, Result, SortMode};

pub type WebStore = ListStore<BrowserStorage, BrowserClock>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }

    /// How long the toast stays up, in milliseconds
    pub fn duration_ms(&self) -> u32 {
        match self {
            NoticeKind::Success => 2000,
            NoticeKind::Warning | NoticeKind::Info => 3000,
        }
    }
}

/// Toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Application state shared through context
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: RwSignal<WebStore>,
    pub search: RwSignal<String>,
    pub sort: RwSignal<SortMode>,
    pub notice: RwSignal<Option<Notice>>,
    /// Item whose purchase dialog is open
    pub purchasing: RwSignal<Option<ItemId>>,
    /// Item whose rename dialog is open
    pub renaming: RwSignal<Option<ItemId>>,
    next_notice_id: StoredValue<u32>,
}

impl AppState {
    pub fn new(store: WebStore) -> Self {
        Self {
            store: RwSignal::new(store),
            search: RwSignal::new(String::new()),
            sort: RwSignal::new(SortMode::Default),
            notice: RwSignal::new(None),
            purchasing: RwSignal::new(None),
            renaming: RwSignal::new(None),
            next_notice_id: StoredValue::new(0),
        }
    }

    /// Runs a store operation; failures become a warning toast
    pub fn apply<T>(&self, op: impl FnOnce(&mut WebStore) -> Result<T>) -> Option<T> {
        match self.store.try_update(op)? {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Operation rejected: {}", e);
                let title = if e.is_validation() { "Atenção" } else { "Erro" };
                self.notify(NoticeKind::Warning, title, e.to_string());
                None
            }
        }
    }

    pub fn notify(&self, kind: NoticeKind, title: &str, text: impl Into<String>) {
        let id = self.next_notice_id.get_value().wrapping_add(1);
        self.next_notice_id.set_value(id);
        self.notice.set(Some(Notice {
            id,
            kind,
            title: title.to_string(),
            text: text.into(),
        }));

        let notice = self.notice;
        Timeout::new(kind.duration_ms(), move || {
            if notice.get_untracked().is_some_and(|n| n.id == id) {
                notice.set(None);
            }
        })
        .forget();
    }

    pub fn success(&self, title: &str, text: impl Into<String>) {
        self.notify(NoticeKind::Success, title, text);
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Browser-native yes/no prompt
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn App() -> impl IntoView {
    let store = ListStore::load(BrowserStorage, BrowserClock, LoadOptions::default());
    let load_errors: Vec<String> = store.load_errors().iter().map(|e| e.to_string()).collect();

    let state = AppState::new(store);
    provide_context(state);
    provide_context(ThemeContext::new());

    if !load_errors.is_empty() {
        state.notify(NoticeKind::Info, "Dados restaurados", load_errors.join(" "));
    }

    view! {
        <div class="container py-4">
            <Header />
            <NoticeToast />

            <div class="row g-4">
                <div class="col-lg-8">
                    <div class="card">
                        <div class="card-body">
                            <AddItemForm />
                            <Toolbar />
                            <ItemList />
                            <MonthSummary />
                        </div>
                    </div>
                </div>
                <div class="col-lg-4">
                    <HistoryPanel />
                </div>
            </div>

            <BoughtDialog />
            <EditDialog />
        </div>
    }
}
