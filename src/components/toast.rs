// Toast overlay. Mounted once per page by the shell; anything in the page
// tree can enqueue a message through `show` (or the level helpers).

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast",
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The queue behind the overlay. Ids grow monotonically and never repeat,
/// even after eviction; at most `MAX_VISIBLE` entries are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.entries.len() > MAX_VISIBLE {
            self.entries.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

thread_local! {
    // WASM is single-threaded; the mounted overlay registers itself here.
    static SINK: RefCell<Option<Callback<(ToastKind, String)>>> = RefCell::new(None);
}

/// Queue a transient message on the current page's overlay. Messages sent
/// while no overlay is mounted are dropped.
pub fn show(kind: ToastKind, message: impl Into<String>) {
    let sink = SINK.with(|sink| sink.borrow().clone());
    if let Some(sink) = sink {
        sink.emit((kind, message.into()));
    }
}

pub fn info(message: impl Into<String>) {
    show(ToastKind::Info, message);
}

pub fn success(message: impl Into<String>) {
    show(ToastKind::Success, message);
}

pub fn error(message: impl Into<String>) {
    show(ToastKind::Error, message);
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let queue = use_state(ToastQueue::default);

    // Own the process-wide sink for this overlay's lifetime. The teardown
    // only clears the slot if it still holds our callback, so a freshly
    // mounted overlay on the next page is not knocked out by our unmount.
    {
        let queue = queue.clone();
        use_effect_with((), move |_| {
            let sink = Callback::from(move |(kind, message): (ToastKind, String)| {
                let mut next = (*queue).clone();
                let id = next.push(kind, message);
                queue.set(next);

                let queue = queue.clone();
                Timeout::new(DISMISS_MS, move || {
                    let mut after = (*queue).clone();
                    after.dismiss(id);
                    queue.set(after);
                })
                .forget();
            });

            SINK.with(|slot| *slot.borrow_mut() = Some(sink.clone()));

            move || {
                SINK.with(|slot| {
                    let mut slot = slot.borrow_mut();
                    if slot.as_ref() == Some(&sink) {
                        *slot = None;
                    }
                });
            }
        });
    }

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u64| {
            let mut next = (*queue).clone();
            next.dismiss(id);
            queue.set(next);
        })
    };

    html! {
      <div class="toaster" role="status" aria-live="polite">
        { for queue.entries().iter().map(|toast| {
            let on_dismiss = on_dismiss.clone();
            let id = toast.id;
            let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));
            html! {
              <div key={toast.id.to_string()} class={toast.kind.class()}>
                <span>{ toast.message.clone() }</span>
                <button class="toast-close" {onclick} aria-label="Dismiss">{ "✕" }</button>
              </div>
            }
        }) }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_even_after_eviction() {
        let mut queue = ToastQueue::default();
        let mut last = queue.push(ToastKind::Info, "first");
        for n in 0..10 {
            let id = queue.push(ToastKind::Info, format!("toast {n}"));
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn overflow_evicts_the_oldest() {
        let mut queue = ToastQueue::default();
        for n in 0..6 {
            queue.push(ToastKind::Info, format!("toast {n}"));
        }
        assert_eq!(queue.entries().len(), MAX_VISIBLE);
        assert_eq!(queue.entries()[0].message, "toast 2");
        assert_eq!(queue.entries().last().unwrap().message, "toast 5");
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "a");
        let b = queue.push(ToastKind::Error, "b");
        queue.dismiss(a);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, b);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "kept");
        queue.dismiss(999);
        assert_eq!(queue.entries().len(), 1);
    }
}
