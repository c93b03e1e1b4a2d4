use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Status tone for [`DataState`] blocks.
pub enum DataStatus {
    /// Data is being fetched.
    Loading,
    /// The query produced nothing to show.
    Empty,
    /// The data could not be loaded.
    Error,
}

impl DataStatus {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }

    pub(crate) fn role(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("alert"),
            Self::Loading | Self::Empty => None,
        }
    }
}

#[component]
/// Loading, empty, or error placeholder with an optional action slot.
pub fn DataState(
    status: DataStatus,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = None)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-data-state", layout_class)
            role=status.role()
            data-ui-primitive="true"
            data-ui-kind="data-state"
            data-ui-tone=status.token()
        >
            <p class="ui-data-state-title">{title}</p>
            {description.map(|description| view! { <p class="ui-data-state-description">{description}</p> })}
            {action.map(|action| view! { <div class="ui-data-state-action">{action}</div> })}
        </div>
    }
}

#[component]
/// Shared list surface.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-list-surface", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="list-surface"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Shared pane surface.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_errors_are_announced_as_alerts() {
        assert_eq!(DataStatus::Error.role(), Some("alert"));
        assert_eq!(DataStatus::Loading.role(), None);
        assert_eq!(DataStatus::Empty.token(), "empty");
    }
}
