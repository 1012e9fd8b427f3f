use leptos::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_LIFETIME_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Anything that can put a message in front of the user.
pub trait Notifier {
    /// Shows a message and returns its id for [`Notifier::dismiss`].
    fn notify(&self, notification: Notification) -> u64;

    fn dismiss(&self, id: u64);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) -> u64 {
        (**self).notify(notification)
    }

    fn dismiss(&self, id: u64) {
        (**self).dismiss(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toast queue shared through context. Rendered by `NotificationToasts`.
#[derive(Debug, Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        #[cfg(feature = "hydrate")]
        {
            let center = *self;
            set_timeout(
                move || center.dismiss(id),
                std::time::Duration::from_millis(TOAST_LIFETIME_MS),
            );
        }

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) -> u64 {
        self.push(notification)
    }

    fn dismiss(&self, id: u64) {
        NotificationCenter::dismiss(self, id)
    }
}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().unwrap_or_else(provide_notifications)
}
