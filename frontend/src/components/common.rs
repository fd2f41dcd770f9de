use leptos::{ev::MouseEvent, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-sm focus:ring-2 focus:ring-offset-2 focus:ring-blue-500",
            ButtonVariant::Secondary => "bg-gray-100 hover:bg-gray-200 text-gray-700 border border-gray-200",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 text-sm font-medium transition-colors duration-200 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
            {..attributes}
        >
            {icon.map(|icon| view! { <i class=icon></i> })}
            {children()}
        </button>
    }
}
