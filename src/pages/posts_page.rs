//! Posts Page
//!
//! Fetches the remote post collection once, then searches and pages it
//! client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::api;
use crate::components::{Button, ButtonVariant, Card};
use crate::models::Post;
use crate::posts::PostFeed;

#[component]
pub fn PostsPage() -> impl IntoView {
    let feed = RwSignal::new(PostFeed::default());

    let load_posts = move || {
        feed.update(|f| f.begin_fetch());
        spawn_local(async move {
            let result = api::fetch_posts().await;
            match &result {
                Ok(posts) => log::info!("[POSTS] Loaded {} posts", posts.len()),
                Err(e) => log::warn!("[POSTS] Fetch failed: {}", e),
            }
            // The page may have been left while the request was in flight
            if feed.try_update(|f| f.finish_fetch(result)).is_none() {
                log::debug!("[POSTS] Dropping result for closed page");
            }
        });
    };

    // Load once on mount
    Effect::new(move |_| load_posts());

    let status = Memo::new(move |_| feed.with(|f| (f.is_loading(), f.error().map(str::to_string))));

    move || match status.get() {
        (true, _) => view! { <LoadingView /> }.into_any(),
        (false, Some(message)) => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <Card class="max-w-md">
                    <div class="text-center">
                        <div class="text-5xl text-red-600 dark:text-red-400 mb-4">"⚠"</div>
                        <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-2">"Error Loading Posts"</h2>
                        <p class="text-gray-600 dark:text-gray-400 mb-4">{message}</p>
                        <Button on_click=move |_: MouseEvent| load_posts()>"Try Again"</Button>
                    </div>
                </Card>
            </div>
        }
        .into_any(),
        (false, None) => view! { <PostsView feed=feed /> }.into_any(),
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <div class="w-12 h-12 mx-auto mb-4 rounded-full border-4 border-blue-600 dark:border-blue-400 border-t-transparent animate-spin"></div>
                <p class="text-gray-600 dark:text-gray-400">"Loading posts..."</p>
            </div>
        </div>
    }
}

#[component]
fn PostsView(feed: RwSignal<PostFeed>) -> impl IntoView {
    let paginate = move |change: fn(&mut PostFeed)| {
        feed.update(change);
        scroll_to_top();
    };

    view! {
        <div class="animate-fade-in">
            <div class="mb-8">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-2">"Blog Posts"</h1>
                <p class="text-gray-600 dark:text-gray-400">"Explore posts from JSONPlaceholder API"</p>
            </div>

            <Card class="mb-8">
                <div class="flex items-center gap-3">
                    <span class="text-gray-400">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search posts by title or content..."
                        class="flex-1 px-4 py-2 border-0 bg-transparent text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none"
                        prop:value=move || feed.with(|f| f.search().to_string())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            feed.update(|f| f.set_search(term));
                        }
                    />
                    <Show when=move || feed.with(|f| !f.search().is_empty())>
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=move |_: MouseEvent| feed.update(PostFeed::clear_search)
                        >
                            "Clear"
                        </Button>
                    </Show>
                </div>
            </Card>

            <div class="mb-6">
                <p class="text-gray-600 dark:text-gray-400">{move || feed.with(PostFeed::summary)}</p>
            </div>

            <div class="space-y-4 mb-8">
                {move || {
                    let posts = feed.with(|f| f.current_page_posts().to_vec());
                    if posts.is_empty() {
                        view! {
                            <Card>
                                <p class="text-center text-gray-500 dark:text-gray-400 py-8">
                                    "No posts found matching your search."
                                </p>
                            </Card>
                        }
                        .into_any()
                    } else {
                        posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || feed.with(PostFeed::show_pagination)>
                <div class="flex justify-center items-center gap-2 flex-wrap">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !feed.with(PostFeed::has_previous))
                        on_click=move |_: MouseEvent| paginate(PostFeed::previous_page)
                    >
                        "Previous"
                    </Button>

                    {move || {
                        let (current, pages) = feed.with(|f| (f.page(), f.page_buttons()));
                        pages
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::selected(page == current)
                                        on_click=move |_: MouseEvent| {
                                            feed.update(|f| f.go_to_page(page));
                                            scroll_to_top();
                                        }
                                    >
                                        {page}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}

                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !feed.with(PostFeed::has_next))
                        on_click=move |_: MouseEvent| paginate(PostFeed::next_page)
                    >
                        "Next"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <Card hover=true class="animate-slide-up">
            <div class="flex items-start gap-4">
                <div class="p-3 bg-blue-100 dark:bg-blue-900 rounded-lg flex-shrink-0 text-xl">"👤"</div>
                <div class="flex-1">
                    <div class="flex items-start justify-between gap-4 mb-2">
                        <h2 class="text-xl font-bold text-gray-900 dark:text-white capitalize">{post.title}</h2>
                        <span class="text-sm text-gray-500 dark:text-gray-400 flex-shrink-0">
                            "User " {post.user_id}
                        </span>
                    </div>
                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">{post.body}</p>
                </div>
            </div>
        </Card>
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
