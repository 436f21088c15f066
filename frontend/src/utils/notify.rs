use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// How long success and info notices stay up before dismissing themselves.
const AUTO_DISMISS_MS: u32 = 2_000;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Notification channel provided via context so any component can raise a
/// message. Success and info notices auto-dismiss; errors stay until the
/// operator closes them.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<(u64, Notice)>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: create_rw_signal(0),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get().map(|(_, notice)| notice)
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn success(&self, title: &str, text: &str) {
        self.show(NoticeKind::Success, title, text, true);
    }

    pub fn info(&self, title: &str, text: &str) {
        self.show(NoticeKind::Info, title, text, true);
    }

    pub fn error(&self, title: &str, text: &str) {
        self.show(NoticeKind::Error, title, text, false);
    }

    fn show(&self, kind: NoticeKind, title: &str, text: &str, auto_dismiss: bool) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);

        self.current.set(Some((
            id,
            Notice {
                kind,
                title: title.to_string(),
                text: text.to_string(),
            },
        )));

        if auto_dismiss {
            let current = self.current;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                // Only clear if a newer notice has not replaced this one
                if current.get_untracked().map(|(i, _)| i) == Some(id) {
                    current.set(None);
                }
            });
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
