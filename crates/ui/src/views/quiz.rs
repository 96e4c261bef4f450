#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{QuizService, YearStatus};
use slam_core::model::Tournament;
use tracing::debug;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{Notice, QuizIntent, QuizVm, StatsVm, YearRowVm, start_quiz};

pub(crate) type QuizSignal = Signal<Result<QuizVm, ViewError>>;

#[derive(Clone, Debug, PartialEq)]
struct QuizPageData {
    rows: Vec<YearRowVm>,
    stats: StatsVm,
    candidates: Vec<String>,
    notice: Option<Notice>,
}

/// Route a user event into the session. Failures end up in the page notice.
fn dispatch(mut quiz: QuizSignal, service: &QuizService, intent: Result<QuizIntent, ViewError>) {
    let mut state = quiz.write();
    if let Ok(vm) = &mut *state {
        match intent {
            Ok(intent) => {
                if let Err(err) = vm.apply(service, intent) {
                    debug!(?err, "quiz intent rejected");
                }
            }
            Err(err) => vm.reject(err),
        }
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.quiz_service();
    let service_for_init = Arc::clone(&service);
    let mut quiz: QuizSignal = use_signal(move || start_quiz(&service_for_init));

    #[cfg(test)]
    {
        let service = Arc::clone(&service);
        use_hook(move || {
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(quiz, service);
            }
        });
    }

    let page = match &*quiz.read() {
        Ok(vm) => Ok(QuizPageData {
            rows: vm.rows(),
            stats: vm.stats(),
            candidates: vm.candidates(),
            notice: vm.notice().cloned(),
        }),
        Err(err) => Err(*err),
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Grand Slam Champions 2000-2024" }
                p { class: "view-subtitle",
                    "Name the four champions of each year. Completing a year unlocks the one before it."
                }
            }
            div { class: "view-divider" }
            match page {
                Err(err) => {
                    let retry_service = Arc::clone(&service);
                    rsx! {
                        p { class: "error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| quiz.set(start_quiz(&retry_service)),
                            "Retry"
                        }
                    }
                }
                Ok(data) => {
                    let reset_service = Arc::clone(&service);
                    let rows = data.rows.into_iter().map(|row| {
                        rsx! {
                            YearTable {
                                key: "{row.year}",
                                row: row.clone(),
                                candidates: data.candidates.clone(),
                                quiz,
                            }
                        }
                    });
                    rsx! {
                        StatsBar { stats: data.stats }
                        {data.notice.map(|notice| rsx! { NoticeBanner { notice } })}
                        button {
                            class: "btn btn-secondary quiz-reset",
                            r#type: "button",
                            onclick: move |_| dispatch(quiz, &reset_service, Ok(QuizIntent::Reset)),
                            "Start over"
                        }
                        div { class: "years", {rows} }
                    }
                }
            }
        }
    }
}

#[component]
fn StatsBar(stats: StatsVm) -> Element {
    rsx! {
        div { class: "stats",
            span { class: "stats-current", "{stats.current_label}" }
            progress {
                max: "{stats.total_years}",
                value: "{stats.completed_years}",
            }
            span { class: "stats-overall", "{stats.overall_label}" }
            if let Some(label) = stats.finished_label.as_ref() {
                span { class: "stats-finished", "{label}" }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    match notice {
        Notice::Info(message) => rsx! {
            p { class: "notice notice--info", "{message}" }
        },
        Notice::Error(err) => rsx! {
            p { class: "notice notice--error", "{err.message()}" }
        },
    }
}

#[component]
fn YearTable(row: YearRowVm, candidates: Vec<String>, quiz: QuizSignal) -> Element {
    let service = use_context::<AppContext>().quiz_service();
    let year = row.year;
    let disabled = !row.can_answer;
    let status_class = match row.status {
        YearStatus::Locked => "year--locked",
        YearStatus::Active => "year--active",
        YearStatus::Completed => "year--completed",
    };

    let headers = Tournament::ALL.iter().map(|tournament| {
        rsx! {
            th { key: "{tournament.code()}", "{tournament.display_name()}" }
        }
    });

    let cells = row.cells.iter().map(|cell| {
        let service = Arc::clone(&service);
        let key = cell.key.clone();
        let options = candidates.iter().map(|name| {
            rsx! {
                option {
                    key: "{name}",
                    value: "{name}",
                    selected: *name == cell.selection,
                    "{name}"
                }
            }
        });
        rsx! {
            td { key: "{cell.key}", class: "cell {cell.presentation.class()}",
                select {
                    id: "{cell.key}",
                    disabled: disabled,
                    onchange: move |evt: FormEvent| {
                        dispatch(quiz, &service, QuizIntent::select_by_key(&key, evt.value()));
                    },
                    option { value: "", "Pick a champion" }
                    {options}
                }
                if let Some(text) = cell.presentation.feedback() {
                    span { class: "feedback", "{text}" }
                }
            }
        }
    });

    let check_service = Arc::clone(&service);
    let hint_service = Arc::clone(&service);
    let reveal_service = Arc::clone(&service);

    rsx! {
        section { class: "year {status_class}",
            header { class: "year-header",
                h3 { "{year}" }
                span { class: "year-status", "{row.status_label}" }
                div { class: "year-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: disabled,
                        onclick: move |_| dispatch(quiz, &check_service, Ok(QuizIntent::Check(year))),
                        "Check"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: disabled,
                        onclick: move |_| dispatch(quiz, &hint_service, Ok(QuizIntent::RevealOne(year))),
                        "Hint"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: disabled,
                        onclick: move |_| dispatch(quiz, &reveal_service, Ok(QuizIntent::RevealAll(year))),
                        "Reveal all"
                    }
                }
            }
            table { class: "year-table",
                thead {
                    tr { {headers} }
                }
                tbody {
                    tr { {cells} }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    registered: Rc<RefCell<Option<(QuizSignal, Arc<QuizService>)>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, quiz: QuizSignal, service: Arc<QuizService>) {
        *self.registered.borrow_mut() = Some((quiz, service));
    }

    /// Send an intent through the same path the page's event handlers use.
    pub(crate) fn dispatch(&self, intent: QuizIntent) {
        let (quiz, service) = self
            .registered
            .borrow()
            .clone()
            .expect("quiz handles registered");
        dispatch(quiz, &service, Ok(intent));
    }

    pub(crate) fn dispatch_key(&self, key: &str, candidate: &str) {
        let (quiz, service) = self
            .registered
            .borrow()
            .clone()
            .expect("quiz handles registered");
        dispatch(quiz, &service, QuizIntent::select_by_key(key, candidate));
    }
}
