//! Toast notifications
//!
//! Views push [`Notice`]s through the [`Toasts`] handle found in context; the
//! [`Toaster`] in the page chrome renders them bottom-right. Each toast
//! dismisses itself after [`TOAST_DURATION`] or on click.

use std::time::Duration;

use ignytion_core::{Notice, NoticeBoard, NoticeId, NoticeLevel};
use leptos::prelude::*;

use super::icons::{CheckCircle, HelpCircle, X};

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Handle to the shared notice board
#[derive(Clone, Copy)]
pub struct Toasts {
    board: RwSignal<NoticeBoard>,
}

impl Toasts {
    /// Create the board and register it as context for the current owner
    pub fn provide() -> Self {
        let toasts = Self {
            board: RwSignal::new(NoticeBoard::new()),
        };
        provide_context(toasts);
        toasts
    }

    pub fn push(self, notice: Notice) {
        log::debug!("toast: {:?} {}", notice.level, notice.message);
        let board = self.board;
        if let Some(id) = board.try_update(|b| b.push(notice)) {
            set_timeout(move || self.dismiss(id), TOAST_DURATION);
        }
    }

    pub fn dismiss(self, id: NoticeId) {
        self.board.try_update(|b| b.dismiss(id));
    }
}

/// Toast handle provided by the app shell
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "border-green-200 bg-green-50 text-green-800",
        NoticeLevel::Error => "border-red-200 bg-red-50 text-red-800",
        NoticeLevel::Info => "border-gray-200 bg-white text-gray-800",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]" aria-live="polite">
            <For
                each=move || toasts.board.with(|b| b.entries().to_vec())
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let icon = match notice.level {
                        NoticeLevel::Success => view! { <CheckCircle class="w-5 h-5 shrink-0" /> }.into_any(),
                        NoticeLevel::Error => view! { <X class="w-5 h-5 shrink-0" /> }.into_any(),
                        NoticeLevel::Info => view! { <HelpCircle class="w-5 h-5 shrink-0" /> }.into_any(),
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "flex items-start gap-3 px-4 py-3 rounded-lg border shadow-lg text-sm cursor-pointer {}",
                                level_class(notice.level),
                            )
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {icon}
                            <span>{notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
