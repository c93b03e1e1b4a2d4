//! Papers desktop app: searchable list of research papers from the content database.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use desktop_app_contract::{AppServices, CollectionLoad};
use leptos::*;
use platform_host::{filter_records, format_record_date, ContentCollection, Paper};
use system_ui::prelude::*;

fn paper_meta(paper: &Paper) -> (String, String) {
    (paper.authors.clone(), format_record_date(paper.date.as_deref()))
}

#[component]
/// Papers window contents.
pub fn PapersApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let load = create_rw_signal(CollectionLoad::<Paper>::Loading);
    let cancelled = Rc::new(Cell::new(false));
    on_cleanup({
        let cancelled = Rc::clone(&cancelled);
        move || cancelled.set(true)
    });

    let content = Rc::clone(&services.content);
    spawn_local(async move {
        let result = content.list_papers().await;
        if !cancelled.get() {
            load.set(CollectionLoad::settle(ContentCollection::Papers, result));
        }
    });

    move || match load.get() {
        CollectionLoad::Loading => view! {
            <DataState
                status=DataStatus::Loading
                title="Loading papers\u{2026}"
                description="Fetching items from the content database."
            />
        }
        .into_view(),
        CollectionLoad::Failed(message) => view! {
            <DataState status=DataStatus::Error title="Cannot load papers" description=message />
        }
        .into_view(),
        CollectionLoad::Ready(papers) => view! { <PaperList papers /> }.into_view(),
    }
}

#[component]
fn PaperList(papers: Vec<Paper>) -> impl IntoView {
    let papers = store_value(papers);
    let search = create_rw_signal(String::new());

    let results = move || {
        let query = search.get();
        let rows = papers.with_value(|all| {
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
                    title="No papers match that search"
                    description="Try a different keyword or update the papers collection."
                    action=clear
                />
            }
            .into_view();
        }

        view! {
            <ListSurface layout_class="content-list" aria_label="Papers">
                {rows
                    .into_iter()
                    .map(|paper| {
                        let (authors, date) = paper_meta(&paper);
                        view! {
                            <li>
                                <a class="content-card" href=paper.url target="_blank" rel="noreferrer">
                                    <span class="content-card-title">{paper.title}</span>
                                    <span class="content-card-meta">{authors}</span>
                                    <span class="content-card-meta">{date}</span>
                                    {paper
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
                placeholder="Search papers"
                aria_label="Search papers"
                value=search
                on_input=Callback::new(move |value| search.set(value))
            />
            {results}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paper_meta_formats_dates() {
        let paper = Paper {
            id: "1".to_string(),
            title: "Sparse Mixtures".to_string(),
            authors: "Shazeer".to_string(),
            url: "https://papers.example/1".to_string(),
            year: Some(2017),
            date: Some("2017-01-23".to_string()),
            desc: None,
        };
        assert_eq!(
            paper_meta(&paper),
            ("Shazeer".to_string(), "Jan 23, 2017".to_string())
        );
    }
}
