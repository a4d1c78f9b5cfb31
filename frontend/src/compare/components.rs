use gloo_timers::callback::{Interval, Timeout};
use stats_core::{IdSlot, RankedStat, RefreshPhase};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::compare::api::fetch_batch;
use crate::compare::state::{CompareAction, CompareStore};
use crate::env_variable_utils::get_app_name;
use crate::utils::format_number;

const NOTICE_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct VideoIdFormProps {
    pub slots: Vec<IdSlot>,
    pub fetching: bool,
    pub on_input: Callback<(usize, String)>,
    pub on_add: Callback<()>,
    pub on_remove: Callback<usize>,
    pub on_submit: Callback<()>,
}

#[function_component(VideoIdForm)]
pub fn video_id_form(props: &VideoIdFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            {
                for props.slots.iter().enumerate().map(|(index, slot)| {
                    let on_input = {
                        let on_input = props.on_input.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_input.emit((index, input.value()));
                        })
                    };
                    let on_remove = {
                        let on_remove = props.on_remove.clone();
                        Callback::from(move |_| on_remove.emit(index))
                    };

                    html! {
                        <div class="flex flex-col gap-1">
                            <label class="text-sm font-medium text-gray-700">
                                { format!("Video ID {}:", index + 1) }
                            </label>
                            <div class="flex gap-2">
                                <input
                                    type="text"
                                    class="flex-grow px-4 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    value={slot.input.clone()}
                                    oninput={on_input}
                                />
                                {
                                    if index > 0 {
                                        html! {
                                            <button
                                                type="button"
                                                onclick={on_remove}
                                                class="px-3 py-2 bg-red-600 text-white rounded hover:bg-red-700"
                                            >
                                                {"✕"}
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            {
                                if let Some(error) = &slot.error {
                                    html! {
                                        <p class="text-red-600 text-sm">
                                            { format!("Invalid video ID: {error}") }
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
            <div class="flex gap-4">
                <button
                    type="button"
                    onclick={let on_add = props.on_add.clone(); Callback::from(move |_| on_add.emit(()))}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                >
                    {"Add Video ID"}
                </button>
                <button
                    type="submit"
                    disabled={props.fetching}
                    class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                >
                    { if props.fetching { "Fetching..." } else { "Fetch Data" } }
                </button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThumbnailCardProps {
    pub ranked: RankedStat,
}

#[function_component(ThumbnailCard)]
pub fn thumbnail_card(props: &ThumbnailCardProps) -> Html {
    let stat = &props.ranked.stat;
    let watch_url = format!("https://www.youtube.com/watch?v={}", stat.video_id);

    html! {
        <div class="bg-gray-100 rounded-lg overflow-hidden shadow">
            {
                if let Some(url) = &stat.thumbnail_url {
                    html! { <img src={url.clone()} alt={stat.title.clone()} class="w-full" /> }
                } else {
                    html! { <div class="w-full h-40 bg-gray-300" /> }
                }
            }
            <div class="p-4">
                <h4 class="text-lg font-semibold text-gray-800 mb-2">
                    <a href={watch_url} target="_blank" class="text-blue-600 hover:underline">
                        { &stat.title }
                    </a>
                </h4>
                <p class="text-sm text-gray-500">{ format!("Video ID: {}", stat.video_id) }</p>
                <p class="text-sm text-gray-700">{ format!("Views: {}", format_number(stat.view_count)) }</p>
                <p class="text-sm text-gray-700">{ format!("Likes: {}", format_number(stat.like_count)) }</p>
                <p class="text-sm text-gray-700">{ format!("Comments: {}", format_number(stat.comment_count)) }</p>
                <p class="text-sm font-semibold text-gray-900">{ format!("Total: {}", format_number(props.ranked.total)) }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThumbnailGridProps {
    pub ranked: Vec<RankedStat>,
}

#[function_component(ThumbnailGrid)]
pub fn thumbnail_grid(props: &ThumbnailGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-8">
            { for props.ranked.iter().map(|ranked| html! {
                <ThumbnailCard key={ranked.stat.video_id.clone()} ranked={ranked.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub message: String,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 bg-red-600 text-white px-4 py-3 rounded shadow-lg">
            { &props.message }
        </div>
    }
}

#[function_component(CompareApp)]
pub fn compare_app() -> Html {
    let store = use_reducer(CompareStore::default);

    // Per-second ticker while auto-refresh is active. Dropped when
    // auto-refresh turns off or the component unmounts, so nothing fires
    // afterwards.
    {
        let dispatcher = store.dispatcher();
        let active = store.dashboard.refresh().is_active();
        use_effect_with(active, move |&active| {
            let ticker = active
                .then(|| Interval::new(1_000, move || dispatcher.dispatch(CompareAction::Tick)));
            move || drop(ticker)
        });
    }

    // Each bump of request_seq is one due fetch cycle.
    {
        let dispatcher = store.dispatcher();
        let ids = store.request_ids.clone();
        use_effect_with(store.request_seq, move |&seq| {
            if seq > 0 {
                spawn_local(async move {
                    let outcomes = fetch_batch(ids).await;
                    dispatcher.dispatch(CompareAction::Outcomes(outcomes));
                });
            }
            || ()
        });
    }

    // Notices dismiss themselves.
    {
        let dispatcher = store.dispatcher();
        use_effect_with(store.notice_seq, move |&seq| {
            let timer = (seq > 0).then(|| {
                Timeout::new(NOTICE_DISMISS_MS, move || {
                    dispatcher.dispatch(CompareAction::DismissNotice)
                })
            });
            move || drop(timer)
        });
    }

    let on_input = {
        let store = store.clone();
        Callback::from(move |(index, value): (usize, String)| {
            store.dispatch(CompareAction::SetInput(index, value))
        })
    };
    let on_add = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(CompareAction::AddSlot))
    };
    let on_remove = {
        let store = store.clone();
        Callback::from(move |index| store.dispatch(CompareAction::RemoveSlot(index)))
    };
    let on_submit = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(CompareAction::Submit))
    };
    let on_stop = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(CompareAction::StopAutoRefresh))
    };

    let refresh = store.dashboard.refresh().clone();
    let ranked = store.dashboard.ranked();

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto bg-white p-8 rounded-lg shadow-lg">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <VideoIdForm
                    slots={store.dashboard.slots().to_vec()}
                    fetching={refresh.is_fetching()}
                    on_input={on_input}
                    on_add={on_add}
                    on_remove={on_remove}
                    on_submit={on_submit}
                />

                {
                    match refresh.phase() {
                        RefreshPhase::Waiting { remaining } => html! {
                            <div class="flex items-center justify-between mt-6">
                                <p class="text-gray-600">
                                    { format!("Next fetch in: {remaining} seconds") }
                                </p>
                                <button onclick={on_stop} class="text-sm text-red-600 hover:underline">
                                    {"Stop"}
                                </button>
                            </div>
                        },
                        RefreshPhase::Fetching => html! {
                            <p class="text-gray-600 mt-6">{"Fetching video data..."}</p>
                        },
                        RefreshPhase::Idle => html! {},
                    }
                }

                <ThumbnailGrid ranked={ranked} />

                {
                    if let Some(message) = &store.notice {
                        html! { <NoticeToast message={message.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
