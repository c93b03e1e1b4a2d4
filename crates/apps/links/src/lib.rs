//! Links desktop app: searchable list of curated links from the content database.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use desktop_app_contract::{AppServices, CollectionLoad};
use leptos::*;
use platform_host::{filter_records, format_record_date, ContentCollection, LinkRecord};
use system_ui::prelude::*;

fn link_byline(link: &LinkRecord) -> String {
    match link.authors.as_deref().map(str::trim) {
        Some(authors) if !authors.is_empty() => authors.to_string(),
        _ => "Unknown author".to_string(),
    }
}

#[component]
/// Links window contents.
pub fn LinksApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let load = create_rw_signal(CollectionLoad::<LinkRecord>::Loading);
    let cancelled = Rc::new(Cell::new(false));
    on_cleanup({
        let cancelled = Rc::clone(&cancelled);
        move || cancelled.set(true)
    });

    let content = Rc::clone(&services.content);
    spawn_local(async move {
        let result = content.list_links().await;
        if !cancelled.get() {
            load.set(CollectionLoad::settle(ContentCollection::Links, result));
        }
    });

    move || match load.get() {
        CollectionLoad::Loading => view! {
            <DataState
                status=DataStatus::Loading
                title="Loading links\u{2026}"
                description="Fetching items from the content database."
            />
        }
        .into_view(),
        CollectionLoad::Failed(message) => view! {
            <DataState status=DataStatus::Error title="Cannot load links" description=message />
        }
        .into_view(),
        CollectionLoad::Ready(links) => view! { <LinkList links /> }.into_view(),
    }
}

#[component]
fn LinkList(links: Vec<LinkRecord>) -> impl IntoView {
    let links = store_value(links);
    let search = create_rw_signal(String::new());

    let results = move || {
        let query = search.get();
        let rows = links.with_value(|all| {
            filter_records(all, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        });
        if rows.is_empty() {
            let clear = (!query.is_empty()).then(|| {
                view! {
                    <Button size=ButtonSize::Sm on_click=Callback::new(move |_| search.set(String::new()))>
                        "Clear search"
                    </Button>
                }
                .into_view()
            });
            return view! {
                <DataState
                    status=DataStatus::Empty
                    title="No links match that search"
                    description="Try a different keyword or add more links to the collection."
                    action=clear
                />
            }
            .into_view();
        }

        view! {
            <ListSurface layout_class="content-list" aria_label="Links">
                {rows
                    .into_iter()
                    .map(|link| {
                        let byline = link_byline(&link);
                        let date = format_record_date(link.date.as_deref());
                        view! {
                            <li>
                                <a class="content-card" href=link.url target="_blank" rel="noreferrer">
                                    <span class="content-card-title">{link.title}</span>
                                    <span class="content-card-meta">{byline}" \u{00b7} "{date}</span>
                                    {link
                                        .desc
                                        .map(|desc| view! { <span class="content-card-desc">{desc}</span> })}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ListSurface>
        }
        .into_view()
    };

    view! {
        <div class="app-content-collection">
            <TextField
                layout_class="content-search"
                placeholder="Search links"
                aria_label="Search links"
                value=search
                on_input=Callback::new(move |value| search.set(value))
            />
            {results}
        </div>
    }
}
